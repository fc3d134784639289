//! Crop profit advisor: turns a farmer's month, location, budget and farm
//! details into ranked crop recommendations from a Gemini model, served as a
//! localized web page or an interactive console session.

pub mod console;
pub mod constants;
pub mod error;
pub mod extract;
pub mod llm_interaction;
pub mod models;
pub mod pipeline;
pub mod prompt;
pub mod variant;
pub mod view;
pub mod web_server;

pub use error::{AdvisorError, ModelError, RequestError};
pub use extract::{extract, Extraction, ExtractionSource};
pub use llm_interaction::{ClientConfig, GeminiClient, Generation};
pub use models::{
    CropRecommendation, ExperienceLevel, FarmSize, Month, ProfitLevel, RecommendationRequest,
    RecommendationSet, RequestForm,
};
pub use pipeline::{recommend, Advice, SessionState};
pub use prompt::build_prompt;
pub use variant::Variant;
