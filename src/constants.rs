// Defaults loaded from the environment (or `.env`, see main.rs).

use std::env;

/// Candidate models, most capable/cheapest first. Matches the order the
/// advisor has always tried them in.
pub const DEFAULT_MODELS: [&str; 3] = ["gemini-1.5-flash", "gemini-1.5-pro", "gemini-pro"];

pub const DEFAULT_PORT: u16 = 8501;

pub const SESSION_COOKIE: &str = "advisor_session";

// Use lazy_static to initialize static variables safely.
lazy_static::lazy_static! {
    pub static ref GEMINI_API_BASE: String = env::var("GEMINI_API_BASE")
        .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());
    pub static ref GEMINI_MODELS: Vec<String> = env::var("GEMINI_MODELS")
        .ok()
        .map(|raw| parse_model_list(&raw))
        .filter(|models| !models.is_empty())
        .unwrap_or_else(|| DEFAULT_MODELS.iter().map(|m| m.to_string()).collect());
    pub static ref GEMINI_TIMEOUT_SECS: u64 = env::var("GEMINI_TIMEOUT_SECS")
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(60);
    // Idle web sessions older than this are dropped.
    pub static ref SESSION_TTL_SECS: u64 = env::var("SESSION_TTL_SECS")
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(3600);
    pub static ref MAX_SESSIONS: usize = env::var("MAX_SESSIONS")
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .filter(|max| *max > 0)
        .unwrap_or(10_000);
}

/// Splits a comma separated model list, dropping blanks.
pub fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|model| !model.is_empty())
        .map(str::to_string)
        .collect()
}
