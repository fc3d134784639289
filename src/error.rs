use reqwest::StatusCode;
use thiserror::Error;

/// Input validation failures caught before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("location must not be empty")]
    EmptyLocation,
    #[error("budget {got} is outside the allowed range {min}..={max}")]
    BudgetOutOfRange { min: u64, max: u64, got: u64 },
    #[error("budget '{0}' is not a whole number")]
    InvalidBudget(String),
    #[error("unknown month '{0}'")]
    UnknownMonth(String),
    #[error("unknown experience level '{0}'")]
    UnknownExperience(String),
    #[error("unknown farm size '{0}'")]
    UnknownFarmSize(String),
}

/// Why a single candidate model did not produce text.
#[derive(Debug, Error)]
pub enum AttemptError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("api failure ({status}): {body}")]
    Status { status: StatusCode, body: String },
    #[error("response could not be decoded: {0}")]
    Decode(String),
    #[error("response did not contain any text")]
    EmptyResponse,
}

/// One failed try against one candidate model.
#[derive(Debug)]
pub struct ModelAttempt {
    pub model: String,
    pub error: AttemptError,
}

impl ModelAttempt {
    pub fn new(model: impl Into<String>, error: AttemptError) -> Self {
        Self {
            model: model.into(),
            error,
        }
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("API key rejected by model '{model}': {detail}")]
    InvalidApiKey { model: String, detail: String },
    #[error("all candidate models failed: {}", summarize(.0))]
    AllModelsFailed(Vec<ModelAttempt>),
}

fn summarize(attempts: &[ModelAttempt]) -> String {
    if attempts.is_empty() {
        return "no candidate models configured".to_string();
    }
    attempts
        .iter()
        .map(|attempt| format!("{} failed: {}", attempt.model, attempt.error))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Everything that can stop a recommendation run. Parse failures are not
/// listed: the extractor degrades to a fallback set instead.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("invalid request: {0}")]
    Validation(#[from] RequestError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("a recommendation request is already running for this session")]
    Busy,
}

impl AdvisorError {
    /// Configuration problems are fatal and never retried automatically.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            AdvisorError::Model(ModelError::MissingApiKey)
                | AdvisorError::Model(ModelError::InvalidApiKey { .. })
        )
    }
}
