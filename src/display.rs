use std::fmt::Write as _;
use std::str::FromStr;

use crate::core::{Recommendation, RecommendationReport};
use crate::error::{RecommenderError, Result};

pub const NO_RESULTS: &str = "No games found based on input, try again.";

/// How a report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = RecommenderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(RecommenderError::InvalidInput(format!(
                "unknown output format '{}'",
                other
            ))),
        }
    }
}

pub fn render(report: &RecommendationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(report.to_json()?),
    }
}

/// Numbered list, one indented block of details per game
pub fn render_text(report: &RecommendationReport) -> String {
    if report.is_empty() {
        return NO_RESULTS.to_string();
    }

    let multi = report.references.len() > 1;
    let mut out = String::new();
    for (index, rec) in report.recommendations.iter().enumerate() {
        let _ = writeln!(out, "{} {}", index + 1, rec.name);
        let _ = writeln!(out, "\tprice: {:.2}", rec.price);
        let _ = writeln!(out, "\trating_score: {}", format_rating(rec));
        let _ = writeln!(out, "\tplatform: {}", format_platforms(rec));
        let _ = writeln!(out, "\tsimilarity: {}", format_score(rec.score));
        if multi {
            let _ = writeln!(
                out,
                "\tmatched: {} of {} games",
                rec.frequency,
                report.references.len()
            );
        }
    }
    out.truncate(out.trim_end().len());
    out
}

fn format_rating(rec: &Recommendation) -> String {
    rec.rating_score
        .map(|r| format!("{:.1}", r))
        .unwrap_or_else(|| "n/a".to_string())
}

fn format_platforms(rec: &Recommendation) -> String {
    if rec.platforms.is_empty() {
        return "n/a".to_string();
    }
    rec.platforms
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Whole numbers without decimals (match counts), fractions with two
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        format!("{:.2}", score)
    }
}
