//! Read-only view models handed to the page template.

use serde::Serialize;

use crate::extract::ExtractionSource;
use crate::models::{ExperienceLevel, FarmSize, Month, RecommendationRequest};
use crate::pipeline::Advice;
use crate::variant::{ApiKeySource, Variant};

#[derive(Debug, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct Card {
    pub rank: usize,
    pub crop_name: String,
    pub profit_potential: String,
    pub profit_class: &'static str,
    pub estimated_roi: String,
    pub investment_required: String,
    pub growing_period: String,
    pub market_price_range: String,
    pub key_benefits: Vec<String>,
    pub considerations: Vec<String>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ChartBar {
    pub crop_name: String,
    pub ordinal: u8,
    /// Bar height as a share of the tallest possible bar.
    pub percent: u8,
}

#[derive(Debug, Serialize)]
pub struct ResultsView {
    pub metrics: Vec<Metric>,
    pub cards: Vec<Card>,
    /// Only drawn when there is more than one crop to compare.
    pub chart: Option<Vec<ChartBar>>,
    pub general_advice: String,
    pub seasonal_notes: String,
    pub tips: &'static [&'static str],
    pub is_fallback: bool,
    pub model: String,
}

impl ResultsView {
    pub fn new(advice: &Advice) -> Self {
        let variant = advice.variant;
        let texts = variant.texts();
        let request = &advice.request;
        let recommendations = &advice.set.recommendations;

        let metrics = vec![
            Metric {
                label: texts.month,
                value: variant.month_label(request.month()).to_string(),
            },
            Metric {
                label: texts.location,
                value: request.location().to_string(),
            },
            Metric {
                label: texts.budget,
                value: format!("{}{}", variant.currency(), group_thousands(request.budget())),
            },
            Metric {
                label: texts.metric_recommendations,
                value: recommendations.len().to_string(),
            },
        ];

        let cards = recommendations
            .iter()
            .enumerate()
            .map(|(i, crop)| Card {
                rank: i + 1,
                crop_name: crop.crop_name.clone(),
                profit_potential: crop.profit_potential.clone(),
                profit_class: crop.profit_level().css_class(),
                estimated_roi: crop.estimated_roi.clone(),
                investment_required: crop.investment_required.clone(),
                growing_period: crop.growing_period.clone(),
                market_price_range: crop.market_price_range.clone(),
                key_benefits: crop.key_benefits.clone(),
                considerations: crop.considerations.clone(),
            })
            .collect();

        let chart = (recommendations.len() > 1).then(|| {
            recommendations
                .iter()
                .map(|crop| {
                    let ordinal = crop.profit_level().ordinal();
                    ChartBar {
                        crop_name: crop.crop_name.clone(),
                        ordinal,
                        percent: (u16::from(ordinal) * 100 / 3) as u8,
                    }
                })
                .collect()
        });

        Self {
            metrics,
            cards,
            chart,
            general_advice: advice.set.general_advice.clone(),
            seasonal_notes: advice.set.seasonal_notes.clone(),
            tips: texts.tips,
            is_fallback: advice.source == ExtractionSource::Fallback,
            model: advice.model.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Values the form is pre-filled with.
#[derive(Debug, Serialize)]
pub struct FormView {
    pub action: String,
    pub months: Vec<SelectOption>,
    pub experience_levels: Vec<SelectOption>,
    pub farm_sizes: Vec<SelectOption>,
    pub location: String,
    pub budget: u64,
    pub budget_min: u64,
    pub budget_max: u64,
    pub budget_step: u64,
    pub organic: bool,
    pub asks_for_api_key: bool,
}

impl FormView {
    pub fn new(variant: Variant, previous: Option<&RecommendationRequest>) -> Self {
        let month = previous.map(|r| r.month()).unwrap_or_else(Month::current);
        let experience = previous
            .map(|r| r.experience_level())
            .unwrap_or(ExperienceLevel::Novice);
        let farm_size = previous.map(|r| r.farm_size()).unwrap_or(FarmSize::Small);
        let bounds = variant.budget_bounds();

        Self {
            action: format!("/{}/recommend", variant.code()),
            months: Month::ALL
                .into_iter()
                .map(|m| SelectOption {
                    value: m.english_name(),
                    label: variant.month_label(m),
                    selected: m == month,
                })
                .collect(),
            experience_levels: ExperienceLevel::ALL
                .into_iter()
                .map(|level| SelectOption {
                    value: level.key(),
                    label: variant.experience_label(level),
                    selected: level == experience,
                })
                .collect(),
            farm_sizes: FarmSize::ALL
                .into_iter()
                .map(|size| SelectOption {
                    value: size.key(),
                    label: variant.farm_size_label(size),
                    selected: size == farm_size,
                })
                .collect(),
            location: previous.map(|r| r.location().to_string()).unwrap_or_default(),
            budget: previous
                .map(|r| r.budget())
                .unwrap_or_else(|| variant.default_budget()),
            budget_min: *bounds.start(),
            budget_max: *bounds.end(),
            budget_step: variant.budget_step(),
            organic: previous.map(|r| r.organic_preference()).unwrap_or(false),
            asks_for_api_key: variant.api_key_source() == ApiKeySource::Form,
        }
    }
}

/// `1234567` -> `1,234,567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
