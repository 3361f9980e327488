//! File-backed persistence of both collections.

use chrono::TimeZone;
use maya_core::entities::{AgentResult, AnalysisRecord, SystemLog};
use maya_core::enums::{Confidence, LogAction, LogStatus, MediaType, Verdict};
use maya_store::{Collection, FileBackend, Storage};
use pretty_assertions::assert_eq;

fn record(id: &str, file_name: &str) -> AnalysisRecord {
    AnalysisRecord {
        id: id.into(),
        timestamp: chrono::Utc
            .timestamp_millis_opt(1_767_225_600_123)
            .single()
            .unwrap(),
        file_name: file_name.into(),
        file_size: 1024,
        file_type: MediaType::Audio,
        thumbnail: None,
        verdict: Verdict::Real,
        overall_confidence: Confidence::new(91).unwrap(),
        agents: vec![AgentResult {
            id: "agent-0".into(),
            name: "Audio Analysis".into(),
            verdict: Verdict::Real,
            confidence: Confidence::new(91).unwrap(),
            reasoning: "Natural breathing pauses.".into(),
        }],
        explanation: "No cloning artifacts found.".into(),
    }
}

#[test]
fn history_roundtrips_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::new(FileBackend::new(dir.path()));

    let history = vec![record("b", "second.wav"), record("a", "first.wav")];
    storage.save_history(&history).unwrap();

    let reopened = Storage::new(FileBackend::new(dir.path()));
    assert_eq!(reopened.load_history(), history);
}

#[test]
fn logs_roundtrip_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::new(FileBackend::new(dir.path()));

    let logs = vec![
        SystemLog::new(
            LogAction::Error,
            LogStatus::Error,
            "Analysis failed: timeout",
            Some("clip.mp4".into()),
        ),
        SystemLog::new(LogAction::Upload, LogStatus::Success, "Started upload", None),
    ];
    storage.save_logs(&logs).unwrap();
    assert_eq!(storage.load_logs(), logs);
}

#[test]
fn save_overwrites_whole_collection() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::new(FileBackend::new(dir.path()));

    storage
        .save_history(&[record("a", "a.wav"), record("b", "b.wav")])
        .unwrap();
    storage.save_history(&[record("c", "c.wav")]).unwrap();

    let loaded = storage.load_history();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "c");
}

#[test]
fn corrupt_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(format!("{}.json", Collection::History.key())),
        "[{\"id\": 1",
    )
    .unwrap();

    let storage = Storage::new(FileBackend::new(dir.path()));
    assert!(storage.load_history().is_empty());
}

#[test]
fn empty_collection_roundtrips() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::new(FileBackend::new(dir.path()));
    storage.save_logs(&[]).unwrap();
    assert!(storage.load_logs().is_empty());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("mayavihin_logs.json")).unwrap(),
        "[]"
    );
}

#[test]
fn lowercase_verdicts_from_older_histories_still_load() {
    let dir = tempfile::tempdir().unwrap();
    let legacy = r#"[{
        "id": "5f0c",
        "timestamp": 1767225600123,
        "fileName": "call.wav",
        "fileSize": 1024,
        "fileType": "audio",
        "verdict": "fake",
        "overallConfidence": 77,
        "agents": [{
            "id": "agent-0",
            "name": "Audio Analysis",
            "verdict": "FAKE",
            "confidence": 77,
            "reasoning": "Spectral seams at word boundaries."
        }],
        "explanation": "Voice clone."
    }]"#;
    std::fs::write(dir.path().join("mayavihin_history.json"), legacy).unwrap();

    let history = Storage::new(FileBackend::new(dir.path())).load_history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].verdict, Verdict::Fake);
    assert_eq!(history[0].agents[0].verdict, Verdict::Fake);
}
