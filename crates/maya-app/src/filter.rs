//! Text filters of the history and activity log views.
//!
//! Matching is a case-insensitive substring test. A missing or blank filter
//! matches everything. Order is preserved.

use maya_core::entities::{AnalysisRecord, SystemLog};

fn needle(filter: Option<&str>) -> Option<&str> {
    filter.map(str::trim).filter(|f| !f.is_empty())
}

/// Records whose file name or verdict contains `filter`.
pub fn filter_history<'a>(
    records: &'a [AnalysisRecord],
    filter: Option<&str>,
) -> Vec<&'a AnalysisRecord> {
    match needle(filter) {
        Some(needle) => records.iter().filter(|r| r.matches(needle)).collect(),
        None => records.iter().collect(),
    }
}

/// Log entries whose action type or message contains `filter`.
pub fn filter_logs<'a>(logs: &'a [SystemLog], filter: Option<&str>) -> Vec<&'a SystemLog> {
    match needle(filter) {
        Some(needle) => logs.iter().filter(|l| l.matches(needle)).collect(),
        None => logs.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use maya_core::entities::AgentResult;
    use maya_core::enums::{Confidence, LogAction, LogStatus, MediaType, Verdict};
    use rstest::rstest;

    use super::*;

    fn record(file_name: &str, verdict: Verdict) -> AnalysisRecord {
        AnalysisRecord {
            id: file_name.into(),
            timestamp: Utc::now(),
            file_name: file_name.into(),
            file_size: 1,
            file_type: MediaType::Video,
            thumbnail: None,
            verdict,
            overall_confidence: Confidence::new(50).unwrap(),
            agents: vec![AgentResult {
                id: "agent-0".into(),
                name: "Consistency".into(),
                verdict,
                confidence: Confidence::new(50).unwrap(),
                reasoning: "n/a".into(),
            }],
            explanation: "contains the word fake but is not matched".into(),
        }
    }

    fn history() -> Vec<AnalysisRecord> {
        vec![
            record("Interview.MP4", Verdict::Fake),
            record("beach.png", Verdict::Real),
            record("speech.wav", Verdict::Uncertain),
        ]
    }

    #[rstest]
    #[case(None, 3)]
    #[case(Some(""), 3)]
    #[case(Some("   "), 3)]
    #[case(Some("interview"), 1)]
    #[case(Some("FAKE"), 1)]
    #[case(Some("real"), 1)]
    #[case(Some(".png"), 1)]
    #[case(Some("e"), 3)]
    #[case(Some("nothing"), 0)]
    fn history_filter(#[case] filter: Option<&str>, #[case] expected: usize) {
        let records = history();
        assert_eq!(filter_history(&records, filter).len(), expected);
    }

    #[test]
    fn history_filter_ignores_explanation() {
        let records = vec![record("a.png", Verdict::Real)];
        assert!(filter_history(&records, Some("word")).is_empty());
    }

    #[test]
    fn history_filter_preserves_order() {
        let records = history();
        let names: Vec<_> = filter_history(&records, Some("e"))
            .iter()
            .map(|r| r.file_name.as_str())
            .collect();
        assert_eq!(names, ["Interview.MP4", "beach.png", "speech.wav"]);
    }

    #[rstest]
    #[case(Some("upload"), 1)]
    #[case(Some("ERROR"), 1)]
    #[case(Some("clip.mp4"), 2)]
    #[case(Some("verdict: fake"), 1)]
    #[case(None, 3)]
    fn log_filter(#[case] filter: Option<&str>, #[case] expected: usize) {
        let logs = vec![
            SystemLog::new(
                LogAction::Upload,
                LogStatus::Success,
                "Started upload of clip.mp4",
                Some("clip.mp4".into()),
            ),
            SystemLog::new(
                LogAction::Analysis,
                LogStatus::Success,
                "Completed analysis for clip.mp4. Verdict: Fake",
                Some("clip.mp4".into()),
            ),
            SystemLog::new(
                LogAction::Error,
                LogStatus::Error,
                "Analysis failed: timeout",
                Some("other.png".into()),
            ),
        ];
        assert_eq!(filter_logs(&logs, filter).len(), expected);
    }
}
