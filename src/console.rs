// Line-oriented front end: asks for each field, runs the pipeline once and
// prints the recommendations as plain text.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::error::AdvisorError;
use crate::llm_interaction::GeminiClient;
use crate::models::{ExperienceLevel, FarmSize, Month, RequestForm};
use crate::pipeline::{recommend, Advice};
use crate::variant::{ApiKeySource, Variant};
use crate::view::ResultsView;

/// Runs one interactive session. Returns `Ok(None)` when the input ends
/// before a valid request was entered.
pub async fn run_console<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    client: &GeminiClient,
    variant: Variant,
    api_key: Option<&str>,
) -> Result<Option<Advice>> {
    info!(%variant, "Starting console session");
    let texts = variant.texts();
    writeln!(writer, "{}\n{}\n", texts.title, texts.subtitle)?;

    let (request, form) = loop {
        let Some(form) = read_form(&mut reader, &mut writer, variant)? else {
            writeln!(writer)?;
            return Ok(None);
        };
        match form.to_request(variant) {
            Ok(request) => break (request, form),
            Err(e) => {
                warn!(error = %e, "Console input rejected");
                writeln!(writer, "{}\n", variant.error_message(&AdvisorError::from(e)))?;
            }
        }
    };

    let api_key = match variant.api_key_source() {
        ApiKeySource::Environment => api_key.unwrap_or_default().to_string(),
        ApiKeySource::Form => form.api_key.unwrap_or_default(),
    };

    match recommend(client, variant, &api_key, request).await {
        Ok(advice) => {
            print_advice(&mut writer, &advice)?;
            Ok(Some(advice))
        }
        Err(e) => {
            writeln!(writer, "{}", variant.error_message(&e))?;
            Err(e).context("Recommendation run failed")
        }
    }
}

/// Prompts for one line. `None` means the input is exhausted.
fn ask<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
    default: &str,
) -> Result<Option<String>> {
    if default.is_empty() {
        write!(writer, "{label}: ")?;
    } else {
        write!(writer, "{label} [{default}]: ")?;
    }
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn read_form<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    variant: Variant,
) -> Result<Option<RequestForm>> {
    let texts = variant.texts();
    let mut form = RequestForm::default();

    let month_hint = variant.month_label(Month::current());
    let Some(month) = ask(reader, writer, texts.month, month_hint)? else {
        return Ok(None);
    };
    form.month = month;

    let Some(location) = ask(reader, writer, texts.location, "")? else {
        return Ok(None);
    };
    form.location = location;

    let budget_hint = variant.default_budget().to_string();
    let Some(budget) = ask(reader, writer, texts.budget, &budget_hint)? else {
        return Ok(None);
    };
    form.budget = budget;

    let levels = ExperienceLevel::ALL.map(|level| variant.experience_label(level));
    let label = format!("{} ({})", texts.experience, levels.join(" / "));
    let Some(experience) = ask(reader, writer, &label, levels[0])? else {
        return Ok(None);
    };
    form.experience = experience;

    let sizes = FarmSize::ALL.map(|size| variant.farm_size_label(size));
    let label = format!("{} ({})", texts.farm_size, sizes.join(" / "));
    let Some(farm_size) = ask(reader, writer, &label, sizes[0])? else {
        return Ok(None);
    };
    form.farm_size = farm_size;

    let label = format!("{} ({}/{})", texts.organic, texts.yes, texts.no);
    let Some(organic) = ask(reader, writer, &label, texts.no)? else {
        return Ok(None);
    };
    let organic = organic.to_lowercase();
    if organic == "y" || organic == "yes" || organic == texts.yes.to_lowercase() {
        form.organic = Some("yes".to_string());
    }

    if variant.api_key_source() == ApiKeySource::Form {
        let Some(key) = ask(reader, writer, texts.api_key, "")? else {
            return Ok(None);
        };
        form.api_key = Some(key);
    }

    Ok(Some(form))
}

fn print_advice<W: Write>(writer: &mut W, advice: &Advice) -> Result<()> {
    let texts = advice.variant.texts();
    let view = ResultsView::new(advice);

    writeln!(writer, "\n{}\n", texts.success)?;
    for metric in &view.metrics {
        writeln!(writer, "{}: {}", metric.label, metric.value)?;
    }

    writeln!(writer, "\n{}", texts.recommended_crops)?;
    for card in &view.cards {
        writeln!(writer, "\n#{} {} ({})", card.rank, card.crop_name, card.profit_potential)?;
        writeln!(writer, "  {}: {}", texts.roi, card.estimated_roi)?;
        writeln!(writer, "  {}: {}", texts.investment_required, card.investment_required)?;
        writeln!(writer, "  {}: {}", texts.growing_period, card.growing_period)?;
        writeln!(writer, "  {}: {}", texts.market_rate, card.market_price_range)?;
        writeln!(writer, "  {}", texts.key_benefits)?;
        for benefit in &card.key_benefits {
            writeln!(writer, "    - {benefit}")?;
        }
        writeln!(writer, "  {}", texts.considerations)?;
        for consideration in &card.considerations {
            writeln!(writer, "    - {consideration}")?;
        }
    }

    if let Some(chart) = &view.chart {
        writeln!(writer, "\n{}", texts.profit_analysis)?;
        for bar in chart {
            let label = texts.profit_levels[usize::from(bar.ordinal - 1)];
            writeln!(
                writer,
                "  {:<24} {} {}",
                bar.crop_name,
                "#".repeat(usize::from(bar.ordinal) * 4),
                label
            )?;
        }
    }

    writeln!(writer, "\n{}\n{}", texts.general_advice, view.general_advice)?;
    writeln!(writer, "\n{}\n{}", texts.seasonal_notes, view.seasonal_notes)?;
    writeln!(writer, "\n{}", texts.additional_tips)?;
    for tip in view.tips {
        writeln!(writer, "  {tip}")?;
    }
    writer.flush()?;
    Ok(())
}
