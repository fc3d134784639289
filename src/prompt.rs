use crate::models::RecommendationRequest;
use crate::variant::Variant;

/// Builds the instruction text sent to the model for one request.
///
/// Every variant lists the six inputs, embeds the exact JSON shape the
/// extractor expects, and asks for 3-5 crops ranked by profitability.
pub fn build_prompt(request: &RecommendationRequest, variant: Variant) -> String {
    let month = variant.month_label(request.month());
    let location = request.location();
    let budget = variant.money(request.budget());
    let experience = variant.experience_label(request.experience_level());
    let farm_size = variant.farm_size_label(request.farm_size());
    let organic = variant.yes_no(request.organic_preference());

    match variant {
        Variant::English => format!(
            r#"You are an Indian agriculture consultant. Based on the following information, recommend crops:

Month: {month}
Location: {location}
Budget: {budget}
Experience: {experience}
Farm Size: {farm_size}
Organic Farming: {organic}

Respond in JSON format:
{schema}

Recommend 3-5 crops based on Indian weather patterns, soil conditions, and market conditions, ranked by profitability (most profitable first)."#,
            schema = schema(&ENGLISH_SCHEMA),
        ),
        Variant::Sidebar => format!(
            r#"You are an expert agricultural consultant with deep knowledge of crop profitability, seasonal patterns, and regional farming conditions.

Given the following information:
- Month: {month}
- Location: {location}
- Budget: {budget}
- Experience Level: {experience}
- Farm Size: {farm_size}
- Organic Farming: {organic}

Please provide crop recommendations that would be most profitable for this situation. Consider:
1. Seasonal suitability for the given month
2. Climate and soil conditions typical for the location
3. Initial investment requirements within the budget
4. Expected profit margins and ROI
5. Market demand and pricing trends
6. Growing duration and harvest timing

Format your response as a JSON with the following structure:
{schema}

Provide 3-5 crop recommendations ranked by profitability potential."#,
            schema = schema(&SIDEBAR_SCHEMA),
        ),
        Variant::Hindi => format!(
            r#"आप एक भारतीय कृषि सलाहकार हैं। निम्नलिखित जानकारी के आधार पर, फसलों की सिफारिश करें:

महीना: {month}
स्थान: {location}
बजट: {budget}
अनुभव: {experience}
खेत का आकार: {farm_size}
जैविक खेती: {organic}

कृपया JSON प्रारूप में उत्तर दें (सभी जानकारी हिंदी में, JSON कुंजियाँ अंग्रेज़ी में ही रखें):
{schema}

भारतीय मौसम पैटर्न, मिट्टी की स्थिति और बाजार की स्थिति के आधार पर 3-5 फसलों की सिफारिश करें, सबसे अधिक मुनाफे वाली फसल पहले रखें।
सभी जानकारी हिंदी में दें।"#,
            schema = schema(&HINDI_SCHEMA),
        ),
        Variant::Odia => format!(
            r#"ଆପଣ ଜଣେ ଭାରତୀୟ କୃଷି ପରାମର୍ଶଦାତା | ନିମ୍ନଲିଖିତ ତଥ୍ୟ ଆଧାରରେ ଫସଲ ସୁପାରିଶ କରନ୍ତୁ:

ମାସ: {month}
ସ୍ଥାନ: {location}
ବଜେଟ୍: {budget}
ଅନୁଭବ: {experience}
ଜମି ଆକାର: {farm_size}
ଜୈବିକ ଚାଷ: {organic}

JSON format ରେ ଉତ୍ତର ଦିଅନ୍ତୁ:
{schema}

ଭାରତୀୟ ଋତୁ, ମାଟି ଏବଂ ବଜାର ଅବସ୍ଥା ଅନୁସାରେ 3-5 ଟି ଫସଲର ସୁପାରିଶ କରନ୍ତୁ, ସର୍ବାଧିକ ଲାଭଜନକ ଫସଲ ପ୍ରଥମେ ରଖନ୍ତୁ |"#,
            schema = schema(&ODIA_SCHEMA),
        ),
    }
}

/// Example values shown to the model for each schema key.
struct SchemaHints {
    crop_name: &'static str,
    profit_potential: &'static str,
    estimated_roi: &'static str,
    investment_required: &'static str,
    growing_period: &'static str,
    key_benefits: [&'static str; 3],
    considerations: [&'static str; 2],
    market_price_range: &'static str,
    general_advice: &'static str,
    seasonal_notes: &'static str,
}

const ENGLISH_SCHEMA: SchemaHints = SchemaHints {
    crop_name: "Crop Name",
    profit_potential: "High/Medium/Low",
    estimated_roi: "percentage",
    investment_required: "amount",
    growing_period: "time in months",
    key_benefits: ["benefit1", "benefit2", "benefit3"],
    considerations: ["consideration1", "consideration2"],
    market_price_range: "market rate",
    general_advice: "General advice",
    seasonal_notes: "Seasonal notes",
};

const SIDEBAR_SCHEMA: SchemaHints = SchemaHints {
    crop_name: "Crop Name",
    profit_potential: "High/Medium/Low",
    estimated_roi: "percentage",
    investment_required: "amount",
    growing_period: "duration in months",
    key_benefits: ["benefit1", "benefit2", "benefit3"],
    considerations: ["consideration1", "consideration2"],
    market_price_range: "price range per unit",
    general_advice: "Overall farming advice for the given conditions",
    seasonal_notes: "Important seasonal considerations",
};

const HINDI_SCHEMA: SchemaHints = SchemaHints {
    crop_name: "फसल का नाम",
    profit_potential: "उच्च/मध्यम/कम",
    estimated_roi: "प्रतिशत में",
    investment_required: "राशि",
    growing_period: "महीनों में समय",
    key_benefits: ["लाभ1", "लाभ2", "लाभ3"],
    considerations: ["विचार1", "विचार2"],
    market_price_range: "बाजार दर",
    general_advice: "सामान्य सलाह हिंदी में",
    seasonal_notes: "मौसमी टिप्पणी हिंदी में",
};

const ODIA_SCHEMA: SchemaHints = SchemaHints {
    crop_name: "ଫସଲର ନାମ",
    profit_potential: "High/Medium/Low",
    estimated_roi: "ପ୍ରତିଶତ",
    investment_required: "ପରିମାଣ",
    growing_period: "ମାସରେ ସମୟ",
    key_benefits: ["ଲାଭ1", "ଲାଭ2", "ଲାଭ3"],
    considerations: ["ସତର୍କତା1", "ସତର୍କତା2"],
    market_price_range: "ବଜାର ଦର",
    general_advice: "ସାଧାରଣ ପରାମର୍ଶ",
    seasonal_notes: "ଋତୁଗତ ନୋଟ୍ସ",
};

fn quoted_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("\"{item}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

fn schema(hints: &SchemaHints) -> String {
    format!(
        r#"{{
    "recommendations": [
        {{
            "crop_name": "{}",
            "profit_potential": "{}",
            "estimated_roi": "{}",
            "investment_required": "{}",
            "growing_period": "{}",
            "key_benefits": [{}],
            "considerations": [{}],
            "market_price_range": "{}"
        }}
    ],
    "general_advice": "{}",
    "seasonal_notes": "{}"
}}"#,
        hints.crop_name,
        hints.profit_potential,
        hints.estimated_roi,
        hints.investment_required,
        hints.growing_period,
        quoted_list(&hints.key_benefits),
        quoted_list(&hints.considerations),
        hints.market_price_range,
        hints.general_advice,
        hints.seasonal_notes,
    )
}
