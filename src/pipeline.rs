//! Prompt -> model -> extraction, plus the per-session state around it.

use serde::Serialize;
use tracing::{info, instrument};

use crate::error::AdvisorError;
use crate::extract::{extract, ExtractionSource};
use crate::llm_interaction::GeminiClient;
use crate::models::{RecommendationRequest, RecommendationSet};
use crate::prompt::build_prompt;
use crate::variant::Variant;

/// Outcome of one successful run. Always holds at least one recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub variant: Variant,
    pub request: RecommendationRequest,
    pub set: RecommendationSet,
    pub model: String,
    pub source: ExtractionSource,
}

/// Runs the whole chain for one request.
///
/// Configuration and model failures are returned; an unparseable response is
/// not an error and comes back as a fallback set.
#[instrument(skip_all, fields(variant = %variant, location = request.location()))]
pub async fn recommend(
    client: &GeminiClient,
    variant: Variant,
    api_key: &str,
    request: RecommendationRequest,
) -> Result<Advice, AdvisorError> {
    let prompt = build_prompt(&request, variant);
    let generation = client.generate(&prompt, api_key).await?;
    let extraction = extract(&generation.text, &request, variant);
    info!(
        model = %generation.model,
        source = ?extraction.source,
        count = extraction.set.recommendations.len(),
        "Recommendations ready"
    );
    Ok(Advice {
        variant,
        request,
        set: extraction.set,
        model: generation.model,
        source: extraction.source,
    })
}

/// Caller-owned state for one user's session.
///
/// The hosting layer keeps this between interactions and threads it through
/// [`SessionState::begin`] / [`SessionState::complete`]. A session with a run
/// in flight refuses a second one.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    last_request: Option<RecommendationRequest>,
    advice: Option<Advice>,
    in_flight: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advice(&self) -> Option<&Advice> {
        self.advice.as_ref()
    }

    pub fn last_request(&self) -> Option<&RecommendationRequest> {
        self.last_request.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Marks a run as started for `request`.
    pub fn begin(mut self, request: &RecommendationRequest) -> Result<Self, (Self, AdvisorError)> {
        if self.in_flight {
            return Err((self, AdvisorError::Busy));
        }
        self.in_flight = true;
        self.last_request = Some(request.clone());
        Ok(self)
    }

    /// Replaces the previous advice wholesale.
    pub fn complete(mut self, advice: Advice) -> Self {
        self.in_flight = false;
        self.advice = Some(advice);
        self
    }

    /// Ends a failed run; the previous advice stays visible.
    pub fn abort(mut self) -> Self {
        self.in_flight = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::fallback_set;
    use crate::models::{ExperienceLevel, FarmSize, Month};

    fn request(location: &str) -> RecommendationRequest {
        RecommendationRequest::new(
            Variant::English,
            Month::March,
            location,
            50_000,
            ExperienceLevel::Intermediate,
            FarmSize::Medium,
            false,
        )
        .unwrap()
    }

    fn advice(location: &str) -> Advice {
        let request = request(location);
        Advice {
            variant: Variant::English,
            set: fallback_set("raw", &request, Variant::English),
            request,
            model: "gemini-1.5-flash".to_string(),
            source: ExtractionSource::Fallback,
        }
    }

    #[test]
    fn test_session_starts_empty() {
        let state = SessionState::new();
        assert!(state.advice().is_none());
        assert!(state.last_request().is_none());
        assert!(!state.is_in_flight());
    }

    #[test]
    fn test_second_begin_is_busy_until_complete() {
        let state = SessionState::new().begin(&request("Punjab")).unwrap();
        assert!(state.is_in_flight());

        let (state, err) = state.begin(&request("Kerala")).unwrap_err();
        assert!(matches!(err, AdvisorError::Busy));
        assert_eq!(state.last_request().unwrap().location(), "Punjab");

        let state = state.complete(advice("Punjab"));
        assert!(!state.is_in_flight());
        assert!(state.begin(&request("Kerala")).is_ok());
    }

    #[test]
    fn test_complete_replaces_advice_and_abort_keeps_it() {
        let state = SessionState::new()
            .begin(&request("Punjab"))
            .unwrap()
            .complete(advice("Punjab"));
        let state = state
            .begin(&request("Kerala"))
            .unwrap()
            .complete(advice("Kerala"));
        assert_eq!(state.advice().unwrap().request.location(), "Kerala");

        let state = state.begin(&request("Goa")).unwrap().abort();
        assert!(!state.is_in_flight());
        assert_eq!(state.advice().unwrap().request.location(), "Kerala");
        assert_eq!(state.last_request().unwrap().location(), "Goa");
    }
}
