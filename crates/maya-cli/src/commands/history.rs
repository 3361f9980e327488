use maya_app::filter::filter_history;
use maya_core::entities::AnalysisRecord;
use maya_core::ids::short_id;
use maya_core::responses::HistoryListResponse;

use crate::cli::{GlobalFlags, root_commands::HistoryArgs};
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::{format_size, format_timestamp, output_rows};

const HEADERS: [&str; 7] = ["id", "analyzed", "file", "type", "size", "verdict", "confidence"];

pub fn handle(args: &HistoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let response = list(ctx.state.history(), args.filter.as_deref(), limit)?;
    let rows = response.records.iter().map(row).collect::<Vec<_>>();
    output_rows(&response, &HEADERS, &rows, flags.format)
}

fn list(
    records: &[AnalysisRecord],
    filter: Option<&str>,
    limit: Option<usize>,
) -> anyhow::Result<HistoryListResponse> {
    let mut matched = filter_history(records, filter);
    matched.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    let total_matches = u32::try_from(matched.len())?;
    let records = matched
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect();
    Ok(HistoryListResponse {
        records,
        total_matches,
    })
}

fn row(record: &AnalysisRecord) -> Vec<String> {
    vec![
        short_id(&record.id).to_string(),
        format_timestamp(&record.timestamp),
        record.file_name.clone(),
        record.file_type.to_string(),
        format_size(record.file_size),
        record.verdict.to_string(),
        record.overall_confidence.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use maya_core::entities::AgentResult;
    use maya_core::enums::{Confidence, MediaType, Verdict};

    use super::*;

    fn record(id: &str, file_name: &str, verdict: Verdict, millis: i64) -> AnalysisRecord {
        AnalysisRecord {
            id: id.into(),
            timestamp: Utc.timestamp_millis_opt(millis).single().unwrap(),
            file_name: file_name.into(),
            file_size: 2048,
            file_type: MediaType::Audio,
            thumbnail: None,
            verdict,
            overall_confidence: Confidence::new(64).unwrap(),
            agents: vec![AgentResult {
                id: "agent-0".into(),
                name: "Audio Analysis".into(),
                verdict,
                confidence: Confidence::new(64).unwrap(),
                reasoning: "r".into(),
            }],
            explanation: "e".into(),
        }
    }

    fn records() -> Vec<AnalysisRecord> {
        vec![
            record("c-3", "voice.wav", Verdict::Fake, 3_000),
            record("b-2", "podcast.mp3", Verdict::Real, 2_000),
            record("a-1", "fake_call.wav", Verdict::Real, 1_000),
        ]
    }

    #[test]
    fn limit_applies_after_filter() {
        let response = list(&records(), Some("fake"), Some(1)).unwrap();
        assert_eq!(response.total_matches, 2);
        assert_eq!(response.records.len(), 1);
        assert_eq!(response.records[0].id, "c-3");
    }

    #[test]
    fn newest_first_even_when_stored_out_of_order() {
        let mut stored = records();
        stored.reverse();
        let response = list(&stored, None, Some(2)).unwrap();
        let ids: Vec<_> = response.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["c-3", "b-2"]);
    }

    #[test]
    fn unlimited_returns_everything() {
        let response = list(&records(), None, None).unwrap();
        assert_eq!(response.total_matches, 3);
        assert_eq!(response.records.len(), 3);
    }

    #[test]
    fn row_has_one_cell_per_header() {
        let cells = row(&records()[0]);
        assert_eq!(cells.len(), HEADERS.len());
        assert_eq!(cells[0], "c-3");
        assert_eq!(cells[4], "2.0 KB");
        assert_eq!(cells[5], "Fake");
        assert_eq!(cells[6], "64%");
    }
}
