//! Front-end variants of the advisor.
//!
//! English, Hindi and Odia read the API key from configuration; the sidebar
//! variant is English with the key typed into a password field. Everything a
//! variant changes is a display string, a prompt phrase, or a bound. Control
//! flow lives elsewhere and is shared.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::error::{AdvisorError, ModelError, RequestError};
use crate::models::{ExperienceLevel, FarmSize, Month};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Variant {
    English,
    Hindi,
    Odia,
    Sidebar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Hindi,
    Odia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeySource {
    /// `GEMINI_API_KEY` from the environment or `.env`.
    Environment,
    /// A password field on the form itself.
    Form,
}

#[derive(Debug, Error)]
#[error("unknown variant '{0}' (expected one of: en, hi, or, sidebar)")]
pub struct UnknownVariant(pub String);

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::English,
        Variant::Hindi,
        Variant::Odia,
        Variant::Sidebar,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Variant::English => "en",
            Variant::Hindi => "hi",
            Variant::Odia => "or",
            Variant::Sidebar => "sidebar",
        }
    }

    /// Label for the variant switcher, in the variant's own script.
    pub fn display_name(self) -> &'static str {
        match self {
            Variant::English => "English",
            Variant::Hindi => "हिंदी",
            Variant::Odia => "ଓଡ଼ିଆ",
            Variant::Sidebar => "Sidebar (own key)",
        }
    }

    pub fn language(self) -> Language {
        match self {
            Variant::English | Variant::Sidebar => Language::English,
            Variant::Hindi => Language::Hindi,
            Variant::Odia => Language::Odia,
        }
    }

    pub fn api_key_source(self) -> ApiKeySource {
        match self {
            Variant::Sidebar => ApiKeySource::Form,
            _ => ApiKeySource::Environment,
        }
    }

    pub fn budget_bounds(self) -> RangeInclusive<u64> {
        match self {
            Variant::Sidebar => 100..=1_000_000,
            _ => 1_000..=10_000_000,
        }
    }

    pub fn default_budget(self) -> u64 {
        match self {
            Variant::Sidebar => 5_000,
            _ => 50_000,
        }
    }

    pub fn budget_step(self) -> u64 {
        match self {
            Variant::Sidebar => 500,
            _ => 5_000,
        }
    }

    pub fn currency(self) -> &'static str {
        match self {
            Variant::Sidebar => "$",
            _ => "₹",
        }
    }

    /// Number of characters of raw model output kept as advice when the
    /// response could not be parsed.
    pub fn fallback_truncation(self) -> usize {
        match self {
            Variant::Sidebar => 500,
            _ => 300,
        }
    }

    pub fn texts(self) -> &'static Texts {
        match self {
            Variant::English => &ENGLISH,
            Variant::Hindi => &HINDI,
            Variant::Odia => &ODIA,
            Variant::Sidebar => &SIDEBAR,
        }
    }

    pub fn month_label(self, month: Month) -> &'static str {
        self.texts().months[month as usize]
    }

    pub fn experience_label(self, level: ExperienceLevel) -> &'static str {
        self.texts().experience_levels[level as usize]
    }

    pub fn farm_size_label(self, size: FarmSize) -> &'static str {
        self.texts().farm_sizes[size as usize]
    }

    pub fn yes_no(self, value: bool) -> &'static str {
        if value {
            self.texts().yes
        } else {
            self.texts().no
        }
    }

    /// `₹50000`, the unformatted form used inside prompts and fallbacks.
    pub fn money(self, amount: u64) -> String {
        format!("{}{}", self.currency(), amount)
    }

    /// User-facing text for an error, in the variant's language.
    pub fn error_message(self, error: &AdvisorError) -> String {
        let texts = self.texts();
        match error {
            AdvisorError::Validation(RequestError::EmptyLocation) => {
                texts.err_empty_location.to_string()
            }
            AdvisorError::Validation(RequestError::BudgetOutOfRange { min, max, .. }) => {
                let (min, max) = (self.money(*min), self.money(*max));
                match self.language() {
                    Language::English => format!("Budget must be between {min} and {max}."),
                    Language::Hindi => format!("बजट {min} और {max} के बीच होना चाहिए।"),
                    Language::Odia => format!("ବଜେଟ୍ {min} ରୁ {max} ମଧ୍ୟରେ ହେବା ଆବଶ୍ୟକ |"),
                }
            }
            AdvisorError::Validation(RequestError::InvalidBudget(_)) => {
                texts.err_invalid_budget.to_string()
            }
            AdvisorError::Validation(
                RequestError::UnknownMonth(_)
                | RequestError::UnknownExperience(_)
                | RequestError::UnknownFarmSize(_),
            ) => texts.err_unknown_choice.to_string(),
            AdvisorError::Model(ModelError::MissingApiKey) => texts.err_missing_key.to_string(),
            AdvisorError::Model(ModelError::InvalidApiKey { .. }) => {
                texts.err_invalid_key.to_string()
            }
            AdvisorError::Model(ModelError::AllModelsFailed(_)) => {
                texts.err_models_failed.to_string()
            }
            AdvisorError::Busy => texts.err_busy.to_string(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<Variant> for &'static str {
    fn from(variant: Variant) -> Self {
        variant.code()
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Variant::English),
            "hi" | "hindi" => Ok(Variant::Hindi),
            "or" | "od" | "odia" => Ok(Variant::Odia),
            "sidebar" | "sih" => Ok(Variant::Sidebar),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// Placeholder texts for the single entry of a fallback set.
#[derive(Debug, Serialize)]
pub struct FallbackTexts {
    pub crop_name: &'static str,
    pub profit_potential: &'static str,
    pub estimated_roi: &'static str,
    pub growing_period: &'static str,
    pub key_benefit: &'static str,
    pub consideration: &'static str,
    pub market_price_range: &'static str,
}

/// Every static string a variant shows or sends.
#[derive(Debug, Serialize)]
pub struct Texts {
    pub html_lang: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub month: &'static str,
    pub location: &'static str,
    pub location_placeholder: &'static str,
    pub budget: &'static str,
    pub experience: &'static str,
    pub farm_size: &'static str,
    pub organic: &'static str,
    pub api_key: &'static str,
    pub submit: &'static str,
    pub success: &'static str,
    pub metric_recommendations: &'static str,
    pub recommended_crops: &'static str,
    pub details: &'static str,
    pub key_benefits: &'static str,
    pub considerations: &'static str,
    pub growing_period: &'static str,
    pub investment_required: &'static str,
    pub market_rate: &'static str,
    pub profit_potential: &'static str,
    pub roi: &'static str,
    pub profit_analysis: &'static str,
    pub general_advice: &'static str,
    pub seasonal_notes: &'static str,
    pub additional_tips: &'static str,
    pub welcome: &'static str,
    pub tips: &'static [&'static str],
    pub months: [&'static str; 12],
    pub experience_levels: [&'static str; 3],
    pub farm_sizes: [&'static str; 3],
    /// Chart axis labels, low to high.
    pub profit_levels: [&'static str; 3],
    pub yes: &'static str,
    pub no: &'static str,
    pub err_empty_location: &'static str,
    pub err_invalid_budget: &'static str,
    pub err_unknown_choice: &'static str,
    pub err_missing_key: &'static str,
    pub err_invalid_key: &'static str,
    pub err_models_failed: &'static str,
    pub err_busy: &'static str,
    pub fallback: FallbackTexts,
}

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

static ENGLISH: Texts = Texts {
    html_lang: "en",
    title: "🌾 Crop Profit Advisor",
    subtitle: "AI-powered Crop Recommendation System for Indian Farmers",
    month: "📅 Month",
    location: "📍 Location",
    location_placeholder: "e.g., Punjab, India or Maharashtra",
    budget: "💰 Budget (₹)",
    experience: "Experience Level",
    farm_size: "Farm Size",
    organic: "Prefer Organic Farming",
    api_key: "🔑 Google Gemini API Key",
    submit: "🚀 Get Crop Recommendations",
    success: "✅ Recommendations generated successfully!",
    metric_recommendations: "🌱 Recommendations",
    recommended_crops: "🎯 Recommended Crops",
    details: "📝 Details",
    key_benefits: "🎯 Key Benefits:",
    considerations: "⚠️ Considerations:",
    growing_period: "Growing Period",
    investment_required: "Investment Required",
    market_rate: "Market Rate",
    profit_potential: "Profit Potential",
    roi: "ROI",
    profit_analysis: "📊 Profit Analysis",
    general_advice: "🌾 General Advice",
    seasonal_notes: "📅 Seasonal Notes",
    additional_tips: "📚 Additional Tips",
    welcome: "🌟 Welcome to Crop Profit Advisor! Enter your location and preferred month, specify your budget and farm details, then ask for personalized recommendations.",
    tips: &[
        "🔍 Check local market prices before making final decisions",
        "🌡️ Consider climate change impacts on your chosen crops",
        "💧 Evaluate water availability and irrigation costs",
        "🚜 Account for machinery and labor costs",
        "📈 Diversify your crops to reduce risks",
    ],
    months: ENGLISH_MONTHS,
    experience_levels: ["New Farmer", "Intermediate", "Experienced Farmer"],
    farm_sizes: [
        "Small (Less than 5 acres)",
        "Medium (5-50 acres)",
        "Large (50+ acres)",
    ],
    profit_levels: ["Low", "Medium", "High"],
    yes: "Yes",
    no: "No",
    err_empty_location: "Please enter your location",
    err_invalid_budget: "Please enter the budget as a whole number.",
    err_unknown_choice: "Please choose a value from the list.",
    err_missing_key: "❌ Gemini API Key not found. Please set it in your .env file.",
    err_invalid_key: "❌ The Gemini API key was rejected. Please check it and try again.",
    err_models_failed: "Gemini API connection issue. Please check your internet connection.",
    err_busy: "⏳ Your previous request is still running. Please wait.",
    fallback: FallbackTexts {
        crop_name: "Consult Local Expert",
        profit_potential: "Variable",
        estimated_roi: "Contact specialist",
        growing_period: "Varies",
        key_benefit: "Local analysis required",
        consideration: "Contact agriculture department",
        market_price_range: "Market dependent",
    },
};

static SIDEBAR: Texts = Texts {
    html_lang: "en",
    title: "🌾 Crop Profit Advisor",
    subtitle: "Get AI-powered crop recommendations based on your location, timing, and budget",
    month: "📅 Month",
    location: "📍 Location (City, State/Country)",
    location_placeholder: "e.g., Iowa, USA or Punjab, India",
    budget: "💰 Budget",
    experience: "Experience Level",
    farm_size: "Farm Size",
    organic: "Prefer Organic Farming",
    api_key: "🔑 Google Gemini API Key",
    submit: "🚀 Get Crop Recommendations",
    success: "✅ Recommendations generated successfully!",
    metric_recommendations: "🌱 Recommendations",
    recommended_crops: "🎯 Recommended Crops",
    details: "📝 Details",
    key_benefits: "🎯 Key Benefits:",
    considerations: "⚠️ Considerations:",
    growing_period: "Growing Period",
    investment_required: "Investment Required",
    market_rate: "Market Price Range",
    profit_potential: "Profit Potential",
    roi: "ROI",
    profit_analysis: "📊 Profit Potential Comparison",
    general_advice: "🌾 General Farming Advice",
    seasonal_notes: "📅 Seasonal Notes",
    additional_tips: "📚 Additional Tips",
    welcome: "🌟 Welcome to Crop Profit Advisor! Enter your Google Gemini API key in the sidebar, specify your location, month and budget, then ask for recommendations.",
    tips: &[
        "🔍 Research local market prices before making final decisions",
        "🌡️ Consider climate change impacts on crop yields",
        "💧 Evaluate water availability and irrigation costs",
        "🚜 Factor in machinery and labor costs",
        "📈 Diversify crops to minimize risk",
        "🏪 Establish buyer relationships before planting",
    ],
    months: ENGLISH_MONTHS,
    experience_levels: ["Beginner", "Intermediate", "Expert"],
    farm_sizes: [
        "Small (< 5 acres)",
        "Medium (5-50 acres)",
        "Large (> 50 acres)",
    ],
    profit_levels: ["Low", "Medium", "High"],
    yes: "Yes",
    no: "No",
    err_empty_location: "Please enter a location",
    err_invalid_budget: "Please enter the budget as a whole number.",
    err_unknown_choice: "Please choose a value from the list.",
    err_missing_key: "🔑 Please enter your Google Gemini API key in the sidebar.",
    err_invalid_key: "❌ The Gemini API key was rejected. Please check it and try again.",
    err_models_failed: "❌ Failed to generate recommendations. Please try again.",
    err_busy: "⏳ Your previous request is still running. Please wait.",
    fallback: FallbackTexts {
        crop_name: "Based on your inputs",
        profit_potential: "Variable",
        estimated_roi: "Contact local experts",
        growing_period: "Varies",
        key_benefit: "Location-specific analysis needed",
        consideration: "Consult local agricultural extension",
        market_price_range: "Market dependent",
    },
};

static HINDI: Texts = Texts {
    html_lang: "hi",
    title: "🌾 फसल मुनाफा सलाहकार",
    subtitle: "भारतीय किसानों के लिए AI-आधारित फसल सिफारिश सिस्टम",
    month: "📅 महीना",
    location: "📍 स्थान",
    location_placeholder: "जैसे: पंजाब, भारत या महाराष्ट्र",
    budget: "💰 बजट (₹)",
    experience: "अनुभव स्तर",
    farm_size: "खेत का आकार",
    organic: "जैविक खेती पसंद करें",
    api_key: "🔑 Google Gemini API Key",
    submit: "🚀 फसल सिफारिशें प्राप्त करें",
    success: "✅ सिफारिशें सफलतापूर्वक तैयार हो गईं!",
    metric_recommendations: "🌱 सिफारिशें",
    recommended_crops: "🎯 सुझाई गई फसलें",
    details: "📝 विवरण",
    key_benefits: "🎯 मुख्य लाभ:",
    considerations: "⚠️ ध्यान देने योग्य बातें:",
    growing_period: "उगाने की अवधि",
    investment_required: "आवश्यक निवेश",
    market_rate: "बाजार दर",
    profit_potential: "मुनाफे की संभावना",
    roi: "ROI",
    profit_analysis: "📊 मुनाफा विश्लेषण",
    general_advice: "🌾 सामान्य सलाह",
    seasonal_notes: "📅 मौसमी टिप्पणी",
    additional_tips: "📚 अतिरिक्त सुझाव",
    welcome: "🌟 फसल मुनाफा सलाहकार में आपका स्वागत है! अपना स्थान, महीना, बजट और खेत की जानकारी दर्ज करें और व्यक्तिगत सिफारिशें प्राप्त करें।",
    tips: &[
        "🔍 अंतिम निर्णय लेने से पहले स्थानीय बाजार की कीमतें जांचें",
        "🌡️ अपनी चुनी हुई फसलों पर जलवायु परिवर्तन के प्रभाव पर विचार करें",
        "💧 पानी की उपलब्धता और सिंचाई लागत का मूल्यांकन करें",
        "🚜 मशीनरी और मजदूरी की लागत का हिसाब रखें",
        "📈 जोखिम कम करने के लिए अपनी फसलों में विविधता लाएं",
    ],
    months: [
        "जनवरी", "फरवरी", "मार्च", "अप्रैल", "मई", "जून", "जुलाई", "अगस्त", "सितंबर", "अक्टूबर",
        "नवंबर", "दिसंबर",
    ],
    experience_levels: ["नया किसान", "मध्यम", "अनुभवी किसान"],
    farm_sizes: ["छोटा (5 एकड़ से कम)", "मध्यम (5-50 एकड़)", "बड़ा (50+ एकड़)"],
    profit_levels: ["कम", "मध्यम", "उच्च"],
    yes: "हाँ",
    no: "नहीं",
    err_empty_location: "कृपया अपना स्थान दर्ज करें",
    err_invalid_budget: "कृपया बजट को पूर्ण संख्या में दर्ज करें।",
    err_unknown_choice: "कृपया सूची में से एक विकल्प चुनें।",
    err_missing_key: "❌ Gemini API Key नहीं मिली। कृपया इसे अपनी .env फ़ाइल में सेट करें।",
    err_invalid_key: "❌ Gemini API Key अमान्य है। कृपया इसे जांचें और पुनः प्रयास करें।",
    err_models_failed: "Gemini API कनेक्शन समस्या। कृपया अपना इंटरनेट कनेक्शन जांचें।",
    err_busy: "⏳ आपका पिछला अनुरोध अभी चल रहा है। कृपया प्रतीक्षा करें।",
    fallback: FallbackTexts {
        crop_name: "स्थानीय विशेषज्ञ से सलाह लें",
        profit_potential: "परिवर्तनशील",
        estimated_roi: "विशेषज्ञ से संपर्क करें",
        growing_period: "अलग-अलग",
        key_benefit: "स्थानीय विश्लेषण आवश्यक",
        consideration: "कृषि विभाग से संपर्क करें",
        market_price_range: "बाजार पर निर्भर",
    },
};

static ODIA: Texts = Texts {
    html_lang: "or",
    title: "🌾 ଫସଲ ଲାଭ ସଲାହକାର",
    subtitle: "ଓଡ଼ିଆ କୃଷକଙ୍କ ପାଇଁ AI-ଆଧାରିତ ଫସଲ ସୁପାରିଶ ସିଷ୍ଟମ",
    month: "📅 ମାସ",
    location: "📍 ସ୍ଥାନ",
    location_placeholder: "ଯେପରି: ଓଡ଼ିଶା, ଭାରତ କିମ୍ବା କଟକ",
    budget: "💰 ବଜେଟ୍ (₹)",
    experience: "ଅନୁଭବ ସ୍ତର",
    farm_size: "ଜମି ଆକାର",
    organic: "ଜୈବିକ ଚାଷକୁ ପ୍ରାଧାନ୍ୟ",
    api_key: "🔑 Google Gemini API Key",
    submit: "🚀 ଫସଲ ସୁପାରିଶ ପାଆନ୍ତୁ",
    success: "✅ ସୁପାରିଶଗୁଡ଼ିକ ସଫଳତାର ସହ ପ୍ରସ୍ତୁତ କରାଯାଇଛି!",
    metric_recommendations: "🌱 ସୁପାରିଶ",
    recommended_crops: "🎯 ସୁପାରିଶିତ ଫସଲଗୁଡ଼ିକ",
    details: "📝 ବିବରଣୀ",
    key_benefits: "🎯 ମୁଖ୍ୟ ଲାଭ:",
    considerations: "⚠️ ସତର୍କତା:",
    growing_period: "ଚାଷ ଅବଧି",
    investment_required: "ଆବଶ୍ୟକ ନିବେଶ",
    market_rate: "ବଜାର ଦର",
    profit_potential: "ଲାଭ ସମ୍ଭାବନା",
    roi: "ROI",
    profit_analysis: "📊 ଲାଭ ବିଶ୍ଳେଷଣ",
    general_advice: "🌾 ସାଧାରଣ ପରାମର୍ଶ",
    seasonal_notes: "📅 ଋତୁଗତ ନୋଟ୍ସ",
    additional_tips: "📚 ଅତିରିକ୍ତ ସୁଝାବ",
    welcome: "🌟 ଫସଲ ଲାଭ ସଲାହକାରକୁ ସ୍ୱାଗତ! ଆପଣଙ୍କ ସ୍ଥାନ, ମାସ, ବଜେଟ୍ ଏବଂ ଜମି ବିବରଣୀ ଦିଅନ୍ତୁ ଏବଂ ସୁପାରିଶ ପାଆନ୍ତୁ |",
    tips: &[
        "🔍 ଶେଷ ନିଷ୍ପତ୍ତି ପୂର୍ବରୁ ସ୍ଥାନୀୟ ବଜାର ଦର ଯାଞ୍ଚ କରନ୍ତୁ",
        "🌡️ ଜଳବାୟୁ ପରିବର୍ତ୍ତନର ପ୍ରଭାବ ବିଚାର କରନ୍ତୁ",
        "💧 ଜଳ ଉପଲବ୍ଧତା ଏବଂ ଜଳସେଚନ ଖର୍ଚ୍ଚ ଆକଳନ କରନ୍ତୁ",
        "🚜 ଯନ୍ତ୍ରପାତି ଏବଂ ଶ୍ରମିକ ଖର୍ଚ୍ଚ ହିସାବ କରନ୍ତୁ",
        "📈 ବିପଦ କମାଇବା ପାଇଁ ଫସଲରେ ବିବିଧତା ଆଣନ୍ତୁ",
    ],
    months: [
        "ଜାନୁଆରୀ", "ଫେବୃଆରୀ", "ମାର୍ଚ୍ଚ", "ଏପ୍ରିଲ୍", "ମଇ", "ଜୁନ୍", "ଜୁଲାଇ", "ଅଗଷ୍ଟ", "ସେପ୍ଟେମ୍ବର",
        "ଅକ୍ଟୋବର", "ନଭେମ୍ବର", "ଡିସେମ୍ବର",
    ],
    experience_levels: ["ନୂଆ କୃଷକ", "ମଧ୍ୟମ ଅନୁଭବ", "ଅନୁଭବୀ କୃଷକ"],
    farm_sizes: ["ଛୋଟ (5 ଏକର କମ୍)", "ମଧ୍ୟମ (5-50 ଏକର)", "ବଡ଼ (50+ ଏକର)"],
    profit_levels: ["କମ୍", "ମଧ୍ୟମ", "ଉଚ୍ଚ"],
    yes: "ହଁ",
    no: "ନା",
    err_empty_location: "ଦୟାକରି ସ୍ଥାନ ଦିଅନ୍ତୁ",
    err_invalid_budget: "ଦୟାକରି ବଜେଟ୍ ପୂର୍ଣ୍ଣ ସଂଖ୍ୟାରେ ଦିଅନ୍ତୁ |",
    err_unknown_choice: "ଦୟାକରି ତାଲିକାରୁ ଏକ ବିକଳ୍ପ ବାଛନ୍ତୁ |",
    err_missing_key: "❌ Gemini API Key ମିଳିଲା ନାହିଁ | ଦୟାକରି .env ଫାଇଲରେ ସେଟ୍ କରନ୍ତୁ |",
    err_invalid_key: "❌ Gemini API Key ଅବୈଧ | ଦୟାକରି ଯାଞ୍ଚ କରି ପୁନଃ ଚେଷ୍ଟା କରନ୍ତୁ |",
    err_models_failed: "Gemini API ସଂଯୋଗରେ ସମସ୍ୟା | ଦୟାକରି ଆପଣଙ୍କର ଇଣ୍ଟରନେଟ୍ ସଂଯୋଗ ଯାଞ୍ଚ କରନ୍ତୁ |",
    err_busy: "⏳ ଆପଣଙ୍କ ପୂର୍ବ ଅନୁରୋଧ ଏବେ ଚାଲିଛି | ଦୟାକରି ଅପେକ୍ଷା କରନ୍ତୁ |",
    fallback: FallbackTexts {
        crop_name: "ସ୍ଥାନୀୟ ପରାମର୍ଶ ନିଅନ୍ତୁ",
        profit_potential: "Variable",
        estimated_roi: "ବିଶେଷଜ୍ଞଙ୍କ ସହ ଯୋଗାଯୋଗ କରନ୍ତୁ",
        growing_period: "ବିଭିନ୍ନ",
        key_benefit: "ସ୍ଥାନୀୟ ବିଶ୍ଳେଷଣ ଆବଶ୍ୟକ",
        consideration: "କୃଷି ବିଭାଗ ସହ ଯୋଗାଯୋଗ କରନ୍ତୁ",
        market_price_range: "ବଜାର ଉପରେ ନିର୍ଭରଶୀଳ",
    },
};
