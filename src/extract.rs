//! Pulls a [`RecommendationSet`] out of free-form model output.
//!
//! The first pass slices from the first `{` to the last `}` and parses that
//! strictly. When prose around the JSON contains stray braces that slice is
//! wrong, so a second pass tries each balanced, string-aware object in turn.
//! If neither pass yields a non-empty set, a deterministic fallback built from
//! the request replaces it. Parse errors never leave this module.

use serde::Serialize;
use tracing::{debug, warn};

use crate::models::{CropRecommendation, RecommendationRequest, RecommendationSet};
use crate::variant::Variant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionSource {
    Parsed,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub set: RecommendationSet,
    pub source: ExtractionSource,
}

pub fn extract(raw: &str, request: &RecommendationRequest, variant: Variant) -> Extraction {
    match parse_recommendations(raw) {
        Some(set) => Extraction {
            set,
            source: ExtractionSource::Parsed,
        },
        None => {
            warn!(
                raw_len = raw.len(),
                "Model response did not contain a usable recommendation object; using fallback"
            );
            Extraction {
                set: fallback_set(raw, request, variant),
                source: ExtractionSource::Fallback,
            }
        }
    }
}

/// Returns `None` when no candidate slice parses into a non-empty set.
pub fn parse_recommendations(raw: &str) -> Option<RecommendationSet> {
    if let Some(slice) = outer_object_slice(raw) {
        match serde_json::from_str::<RecommendationSet>(slice) {
            Ok(set) if !set.recommendations.is_empty() => return Some(set),
            Ok(_) => debug!("Outer JSON object has no recommendations"),
            Err(e) => debug!(error = %e, "Outer JSON slice did not parse"),
        }
    }

    balanced_objects(raw)
        .into_iter()
        .filter_map(|slice| serde_json::from_str::<RecommendationSet>(slice).ok())
        .find(|set| !set.recommendations.is_empty())
}

/// Text from the first `{` through the last `}`, if both exist in that order.
pub fn outer_object_slice(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

/// Every outermost balanced `{...}` span, in order, found in one pass.
///
/// Quotes only open a JSON string while inside a brace, so apostrophes and
/// quotes in surrounding prose are ignored. An opening brace that never
/// closes is skipped without hiding the complete objects after it.
fn balanced_objects(raw: &str) -> Vec<&str> {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut open: Vec<usize> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (i, b) in raw.bytes().enumerate() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' if !open.is_empty() => in_string = true,
            b'{' => open.push(i),
            b'}' => {
                if let Some(start) = open.pop() {
                    // Objects nested in this one are no longer outermost.
                    while spans.last().is_some_and(|&(inner, _)| inner > start) {
                        spans.pop();
                    }
                    spans.push((start, i));
                }
            }
            _ => {}
        }
    }

    spans.into_iter().map(|(start, end)| &raw[start..=end]).collect()
}

/// First `limit` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Single-entry placeholder set in the variant's language.
pub fn fallback_set(
    raw: &str,
    request: &RecommendationRequest,
    variant: Variant,
) -> RecommendationSet {
    let texts = &variant.texts().fallback;
    let budget = variant.money(request.budget());
    let month = variant.month_label(request.month());
    let location = request.location();

    let (investment_required, seasonal_notes) = match variant {
        Variant::English => (
            format!("Within {budget}"),
            format!("For {location} in {month}, check local weather patterns."),
        ),
        Variant::Sidebar => (
            format!("Within {budget}"),
            format!("For {month} in {location}, consider local climate patterns."),
        ),
        Variant::Hindi => (
            format!("{budget} के भीतर"),
            format!("{location} में {month} के लिए स्थानीय मौसम पैटर्न देखें।"),
        ),
        Variant::Odia => (
            format!("{budget} ମଧ୍ୟରେ"),
            format!("{month} ରେ {location} ପାଇଁ ସ୍ଥାନୀୟ ପାଣିପାଗ ଢାଞ୍ଚା ଦେଖନ୍ତୁ |"),
        ),
    };

    RecommendationSet {
        recommendations: vec![CropRecommendation {
            crop_name: texts.crop_name.to_string(),
            profit_potential: texts.profit_potential.to_string(),
            estimated_roi: texts.estimated_roi.to_string(),
            investment_required,
            growing_period: texts.growing_period.to_string(),
            key_benefits: vec![texts.key_benefit.to_string()],
            considerations: vec![texts.consideration.to_string()],
            market_price_range: texts.market_price_range.to_string(),
        }],
        general_advice: truncate_chars(raw, variant.fallback_truncation()).to_string(),
        seasonal_notes,
    }
}
