use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::RequestError;
use crate::variant::Variant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// 1-based month number.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn from_number(number: u32) -> Option<Month> {
        let index = number.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }

    pub fn english_name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    pub fn current() -> Month {
        let now = chrono::Local::now();
        Month::from_number(now.month()).unwrap_or(Month::January)
    }

    /// Accepts a 1-based number, an English name in any case, or a
    /// localized label from any variant.
    pub fn parse(input: &str) -> Result<Month, RequestError> {
        let trimmed = input.trim();
        if let Ok(number) = trimmed.parse::<u32>() {
            return Month::from_number(number)
                .ok_or_else(|| RequestError::UnknownMonth(input.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|month| {
                month.english_name().eq_ignore_ascii_case(trimmed)
                    || Variant::ALL
                        .iter()
                        .any(|variant| variant.month_label(*month) == trimmed)
            })
            .ok_or_else(|| RequestError::UnknownMonth(input.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Novice,
    Intermediate,
    Expert,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Novice,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Expert,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ExperienceLevel::Novice => "novice",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Expert => "expert",
        }
    }

    pub fn parse(input: &str) -> Result<ExperienceLevel, RequestError> {
        let trimmed = input.trim();
        Self::ALL
            .into_iter()
            .find(|level| {
                level.key().eq_ignore_ascii_case(trimmed)
                    || Variant::ALL
                        .iter()
                        .any(|variant| variant.experience_label(*level).eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| RequestError::UnknownExperience(input.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FarmSize {
    Small,
    Medium,
    Large,
}

impl FarmSize {
    pub const ALL: [FarmSize; 3] = [FarmSize::Small, FarmSize::Medium, FarmSize::Large];

    pub fn key(self) -> &'static str {
        match self {
            FarmSize::Small => "small",
            FarmSize::Medium => "medium",
            FarmSize::Large => "large",
        }
    }

    pub fn parse(input: &str) -> Result<FarmSize, RequestError> {
        let trimmed = input.trim();
        Self::ALL
            .into_iter()
            .find(|size| {
                size.key().eq_ignore_ascii_case(trimmed)
                    || Variant::ALL
                        .iter()
                        .any(|variant| variant.farm_size_label(*size).eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| RequestError::UnknownFarmSize(input.to_string()))
    }
}

/// Validated user input for one recommendation cycle.
///
/// Fields are private so a request can only come out of [`RecommendationRequest::new`],
/// which enforces a non-empty location and the variant's budget bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationRequest {
    month: Month,
    location: String,
    budget: u64,
    experience_level: ExperienceLevel,
    farm_size: FarmSize,
    organic_preference: bool,
}

impl RecommendationRequest {
    pub fn new(
        variant: Variant,
        month: Month,
        location: &str,
        budget: u64,
        experience_level: ExperienceLevel,
        farm_size: FarmSize,
        organic_preference: bool,
    ) -> Result<Self, RequestError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(RequestError::EmptyLocation);
        }
        let bounds = variant.budget_bounds();
        if !bounds.contains(&budget) {
            return Err(RequestError::BudgetOutOfRange {
                min: *bounds.start(),
                max: *bounds.end(),
                got: budget,
            });
        }
        Ok(Self {
            month,
            location: location.to_string(),
            budget,
            experience_level,
            farm_size,
            organic_preference,
        })
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }

    pub fn experience_level(&self) -> ExperienceLevel {
        self.experience_level
    }

    pub fn farm_size(&self) -> FarmSize {
        self.farm_size
    }

    pub fn organic_preference(&self) -> bool {
        self.organic_preference
    }
}

/// Raw form fields as posted by the browser or typed at the console.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestForm {
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub farm_size: String,
    // Checkboxes are only posted when ticked.
    #[serde(default)]
    pub organic: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl RequestForm {
    /// Turns the raw fields into a validated request. The location check runs
    /// first so an empty location is always reported as such.
    pub fn to_request(&self, variant: Variant) -> Result<RecommendationRequest, RequestError> {
        if self.location.trim().is_empty() {
            return Err(RequestError::EmptyLocation);
        }
        let month = if self.month.trim().is_empty() {
            Month::current()
        } else {
            Month::parse(&self.month)?
        };
        let budget = if self.budget.trim().is_empty() {
            variant.default_budget()
        } else {
            parse_budget(&self.budget)?
        };
        let experience = if self.experience.trim().is_empty() {
            ExperienceLevel::Novice
        } else {
            ExperienceLevel::parse(&self.experience)?
        };
        let farm_size = if self.farm_size.trim().is_empty() {
            FarmSize::Small
        } else {
            FarmSize::parse(&self.farm_size)?
        };
        let organic = self
            .organic
            .as_deref()
            .map(|value| matches!(value.trim(), "on" | "true" | "yes" | "1"))
            .unwrap_or(false);
        RecommendationRequest::new(
            variant,
            month,
            &self.location,
            budget,
            experience,
            farm_size,
            organic,
        )
    }
}

/// Budgets may be typed with thousands separators ("50,000").
fn parse_budget(input: &str) -> Result<u64, RequestError> {
    let digits: String = input
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    digits
        .parse::<u64>()
        .map_err(|_| RequestError::InvalidBudget(input.to_string()))
}

/// Three-level ordinal scale behind the profit chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ProfitLevel {
    Low,
    Medium,
    High,
}

impl ProfitLevel {
    /// Maps English, Hindi and Odia labels onto the scale. Anything else,
    /// including the fallback's "Variable", lands on `Medium`.
    pub fn from_label(label: &str) -> ProfitLevel {
        let trimmed = label.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "high" => return ProfitLevel::High,
            "medium" => return ProfitLevel::Medium,
            "low" => return ProfitLevel::Low,
            _ => {}
        }
        match trimmed {
            "उच्च" | "ଉଚ୍ଚ" => ProfitLevel::High,
            "मध्यम" | "ମଧ୍ୟମ" => ProfitLevel::Medium,
            "कम" | "କମ୍" | "କମ" => ProfitLevel::Low,
            _ => ProfitLevel::Medium,
        }
    }

    pub fn ordinal(self) -> u8 {
        match self {
            ProfitLevel::Low => 1,
            ProfitLevel::Medium => 2,
            ProfitLevel::High => 3,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ProfitLevel::Low => "profit-low",
            ProfitLevel::Medium => "profit-medium",
            ProfitLevel::High => "profit-high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub crop_name: String,
    pub profit_potential: String,
    pub estimated_roi: String,
    pub investment_required: String,
    pub growing_period: String,
    pub key_benefits: Vec<String>,
    pub considerations: Vec<String>,
    pub market_price_range: String,
}

impl CropRecommendation {
    pub fn profit_level(&self) -> ProfitLevel {
        ProfitLevel::from_label(&self.profit_potential)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<CropRecommendation>,
    pub general_advice: String,
    pub seasonal_notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english(location: &str, budget: u64) -> Result<RecommendationRequest, RequestError> {
        RecommendationRequest::new(
            Variant::English,
            Month::March,
            location,
            budget,
            ExperienceLevel::Intermediate,
            FarmSize::Medium,
            false,
        )
    }

    #[test]
    fn test_request_trims_location() {
        let request = english("  Punjab, India ", 50_000).unwrap();
        assert_eq!(request.location(), "Punjab, India");
        assert_eq!(request.budget(), 50_000);
    }

    #[test]
    fn test_request_rejects_blank_location() {
        assert_eq!(english("   ", 50_000), Err(RequestError::EmptyLocation));
    }

    #[test]
    fn test_request_enforces_variant_budget_bounds() {
        assert_eq!(
            english("Punjab", 500),
            Err(RequestError::BudgetOutOfRange {
                min: 1_000,
                max: 10_000_000,
                got: 500
            })
        );
        // The sidebar variant allows smaller budgets.
        assert!(RecommendationRequest::new(
            Variant::Sidebar,
            Month::March,
            "Iowa, USA",
            500,
            ExperienceLevel::Novice,
            FarmSize::Small,
            true,
        )
        .is_ok());
    }

    #[test]
    fn test_month_parse_accepts_names_numbers_and_local_labels() {
        assert_eq!(Month::parse("march").unwrap(), Month::March);
        assert_eq!(Month::parse("12").unwrap(), Month::December);
        assert_eq!(Month::parse("मार्च").unwrap(), Month::March);
        assert_eq!(Month::parse("ଅଗଷ୍ଟ").unwrap(), Month::August);
        assert!(Month::parse("13").is_err());
        assert!(Month::parse("Smarch").is_err());
    }

    #[test]
    fn test_experience_and_farm_size_parse_labels() {
        assert_eq!(
            ExperienceLevel::parse("Experienced Farmer").unwrap(),
            ExperienceLevel::Expert
        );
        assert_eq!(ExperienceLevel::parse("novice").unwrap(), ExperienceLevel::Novice);
        assert_eq!(FarmSize::parse("Medium (5-50 acres)").unwrap(), FarmSize::Medium);
        assert_eq!(FarmSize::parse("बड़ा (50+ एकड़)").unwrap(), FarmSize::Large);
        assert!(FarmSize::parse("huge").is_err());
    }

    #[test]
    fn test_form_to_request() {
        let form = RequestForm {
            month: "March".to_string(),
            location: "Punjab, India".to_string(),
            budget: "50,000".to_string(),
            experience: "intermediate".to_string(),
            farm_size: "medium".to_string(),
            organic: Some("on".to_string()),
            api_key: None,
        };
        let request = form.to_request(Variant::English).unwrap();
        assert_eq!(request.month(), Month::March);
        assert_eq!(request.budget(), 50_000);
        assert_eq!(request.experience_level(), ExperienceLevel::Intermediate);
        assert_eq!(request.farm_size(), FarmSize::Medium);
        assert!(request.organic_preference());
    }

    #[test]
    fn test_form_reports_empty_location_first() {
        let form = RequestForm {
            budget: "not a number".to_string(),
            ..RequestForm::default()
        };
        assert_eq!(
            form.to_request(Variant::Hindi),
            Err(RequestError::EmptyLocation)
        );
    }

    #[test]
    fn test_form_rejects_garbage_budget() {
        let form = RequestForm {
            location: "Cuttack".to_string(),
            budget: "lots".to_string(),
            ..RequestForm::default()
        };
        assert_eq!(
            form.to_request(Variant::Odia),
            Err(RequestError::InvalidBudget("lots".to_string()))
        );
    }

    #[test]
    fn test_profit_level_ordinals_per_language() {
        for (label, ordinal) in [
            ("High", 3),
            ("Medium", 2),
            ("Low", 1),
            ("high ", 3),
            ("उच्च", 3),
            ("मध्यम", 2),
            ("कम", 1),
            ("ଉଚ୍ଚ", 3),
            ("ମଧ୍ୟମ", 2),
            ("କମ୍", 1),
        ] {
            assert_eq!(ProfitLevel::from_label(label).ordinal(), ordinal, "{label}");
        }
    }

    #[test]
    fn test_unrecognized_profit_label_is_medium() {
        assert_eq!(ProfitLevel::from_label("Variable"), ProfitLevel::Medium);
        assert_eq!(ProfitLevel::from_label("परिवर्तनशील"), ProfitLevel::Medium);
        assert_eq!(ProfitLevel::from_label(""), ProfitLevel::Medium);
    }
}
