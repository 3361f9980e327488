//! Terminal rendering of one analysis: verdict, explanation and agent cards.

use maya_core::entities::AnalysisRecord;
use maya_core::enums::Confidence;
use maya_core::ids::short_id;

use super::table::paint;
use super::{format_size, format_timestamp};

const BAR_WIDTH: usize = 20;
const TEXT_WIDTH: usize = 76;

/// `[██████████░░░░░░░░░░]` filled in proportion to `confidence`.
#[must_use]
pub fn confidence_bar(confidence: Confidence, width: usize) -> String {
    let filled = (usize::from(confidence.get()) * width + 50) / 100;
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(width.saturating_sub(filled))
    )
}

/// Greedy word wrap, each line prefixed with `indent`.
fn wrap(text: &str, width: usize, indent: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(format!("{indent}{current}"));
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(format!("{indent}{current}"));
    }
    lines
}

fn thumbnail_summary(record: &AnalysisRecord) -> String {
    record.thumbnail.as_deref().map_or_else(
        || String::from("none"),
        |url| {
            let content_type = url
                .strip_prefix("data:")
                .and_then(|rest| rest.split(';').next())
                .unwrap_or("unknown");
            format!("embedded ({content_type}, {})", format_size(url.len() as u64))
        },
    )
}

/// Results view for `record`.
#[must_use]
pub fn render_results(record: &AnalysisRecord, color: bool) -> String {
    let verdict = record.verdict.as_str();
    let verdict_word = if color {
        paint(&verdict.to_uppercase(), verdict)
    } else {
        verdict.to_uppercase()
    };

    let mut out = vec![
        format!("MAYAVIHIN ANALYSIS  {}", short_id(&record.id)),
        format!(
            "File        {} ({}, {})",
            record.file_name,
            record.file_type,
            format_size(record.file_size)
        ),
        format!("Analyzed    {}", format_timestamp(&record.timestamp)),
        format!("Thumbnail   {}", thumbnail_summary(record)),
        String::new(),
        format!(
            "VERDICT: {verdict_word}  {} confidence",
            record.overall_confidence
        ),
        confidence_bar(record.overall_confidence, BAR_WIDTH * 2),
        String::new(),
        String::from("Explanation"),
    ];
    out.extend(wrap(&record.explanation, TEXT_WIDTH, "  "));
    out.push(String::new());
    out.push(format!("Agents ({})", record.agents.len()));

    let name_width = record
        .agents
        .iter()
        .map(|agent| agent.name.chars().count())
        .max()
        .unwrap_or(0);
    for agent in &record.agents {
        let agent_verdict = agent.verdict.as_str();
        let padded_verdict = format!("{agent_verdict:<9}");
        let shown_verdict = if color {
            paint(&padded_verdict, agent_verdict)
        } else {
            padded_verdict
        };
        out.push(format!(
            "  {:<name_width$}  {shown_verdict}  {} {:>4}",
            agent.name,
            confidence_bar(agent.confidence, BAR_WIDTH),
            agent.confidence.to_string(),
        ));
        out.extend(wrap(&agent.reasoning, TEXT_WIDTH - 4, "      "));
    }

    out.join("\n")
}
