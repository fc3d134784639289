use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use crate::constants;
use crate::error::{AttemptError, ModelAttempt, ModelError};

/// Where and how to reach the generative-language API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Tried top to bottom; the first one that answers wins.
    pub models: Vec<String>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: constants::GEMINI_API_BASE.clone(),
            models: constants::GEMINI_MODELS.clone(),
            timeout: Duration::from_secs(*constants::GEMINI_TIMEOUT_SECS),
        }
    }
}

// Structures matching Gemini's v1beta generateContent endpoint
#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize, Debug)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate that has any.
    fn into_text(self) -> Option<String> {
        self.candidates.into_iter().find_map(|candidate| {
            let text: String = candidate
                .content?
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect();
            (!text.trim().is_empty()).then_some(text)
        })
    }
}

/// Raw text returned by the first candidate model that answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub model: String,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    config: ClientConfig,
}

impl GeminiClient {
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn models(&self) -> &[String] {
        &self.config.models
    }

    /// Sends `prompt` to each candidate model in order until one returns text.
    ///
    /// A missing key fails before any request. A rejected key stops the loop
    /// at once since every other candidate would reject it too.
    #[instrument(skip(self, prompt, api_key), fields(prompt_len = prompt.len()))]
    pub async fn generate(&self, prompt: &str, api_key: &str) -> Result<Generation, ModelError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            error!("No Gemini API key configured");
            return Err(ModelError::MissingApiKey);
        }

        let total = self.config.models.len();
        let mut attempts = Vec::with_capacity(total);

        for (index, model) in self.config.models.iter().enumerate() {
            info!(%model, attempt = index + 1, total, "Requesting crop recommendations");
            match self.attempt(model, prompt, api_key).await {
                Ok(text) => {
                    debug!(%model, response_len = text.len(), "Received model response");
                    return Ok(Generation {
                        model: model.clone(),
                        text,
                    });
                }
                Err(AttemptError::Status { status, body }) if is_auth_failure(status, &body) => {
                    error!(%model, %status, "Gemini rejected the API key");
                    return Err(ModelError::InvalidApiKey {
                        model: model.clone(),
                        detail: body,
                    });
                }
                Err(e) => {
                    warn!(%model, error = %e, "Model attempt failed, trying next candidate");
                    attempts.push(ModelAttempt::new(model.clone(), e));
                }
            }
        }

        error!(tried = attempts.len(), "All candidate models failed");
        Err(ModelError::AllModelsFailed(attempts))
    }

    async fn attempt(&self, model: &str, prompt: &str, api_key: &str) -> Result<String, AttemptError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        );
        let payload = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(AttemptError::Status { status, body });
        }

        let body = response.text().await?;
        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| AttemptError::Decode(e.to_string()))?;
        parsed.into_text().ok_or(AttemptError::EmptyResponse)
    }
}

fn is_auth_failure(status: StatusCode, body: &str) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        || (status == StatusCode::BAD_REQUEST && body.contains("API_KEY_INVALID"))
}
