//! The upload flow: from raw file bytes to a stored analysis.
//!
//! Split in two halves around the analysis call so a caller can run the call
//! on its own task (progress ticking, cancellation) while the state is only
//! touched from the calling task:
//!
//! 1. [`begin`] validates the media kind, logs the upload, encodes the
//!    payload and logs the start of the analysis.
//! 2. [`finish`] records the outcome: a new history entry and a completion
//!    log on success, an error log and nothing else on failure.
//!
//! [`run_upload`] chains both halves around an [`Analyzer`].

use maya_core::entities::AnalysisRecord;
use maya_core::enums::{LogAction, LogStatus, MediaType};
use maya_core::errors::CoreError;
use maya_gemini::{AnalysisError, AnalysisRequest, Analyzer};
use maya_store::KeyValueBackend;

use crate::state::AppState;

/// How an upload ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The analysis succeeded and was added to history.
    Completed(AnalysisRecord),
    /// The analysis failed with this user-facing message.
    Failed(String),
}

/// Start an upload of `bytes` declared as `content_type`.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] when the content type is not image,
/// video or audio. Nothing is logged in that case.
pub fn begin<B: KeyValueBackend>(
    state: &mut AppState<B>,
    file_name: &str,
    content_type: &str,
    bytes: &[u8],
) -> Result<AnalysisRequest, CoreError> {
    if MediaType::from_content_type(content_type).is_none() {
        return Err(CoreError::Validation(format!(
            "{file_name}: unsupported content type {content_type:?} (expected image/*, video/* or audio/*)"
        )));
    }

    state.append_log(
        LogAction::Upload,
        LogStatus::Success,
        format!("Started upload of {file_name}"),
        Some(file_name.to_string()),
    );

    let request = AnalysisRequest::from_bytes(file_name, content_type, bytes)?;

    state.append_log(
        LogAction::Analysis,
        LogStatus::Success,
        format!("Initializing multi-agent analysis for {file_name}"),
        Some(file_name.to_string()),
    );
    Ok(request)
}

/// Record the result of the analysis call started by [`begin`].
pub fn finish<B: KeyValueBackend>(
    state: &mut AppState<B>,
    request: &AnalysisRequest,
    result: Result<AnalysisRecord, AnalysisError>,
) -> UploadOutcome {
    let file_name = &request.file_name;
    match result {
        Ok(record) => {
            let verdict = record.verdict;
            state.record_completed_analysis(record.clone());
            state.append_log(
                LogAction::Analysis,
                LogStatus::Success,
                format!("Completed analysis for {file_name}. Verdict: {verdict}"),
                Some(file_name.clone()),
            );
            UploadOutcome::Completed(record)
        }
        Err(error) => {
            let message = error.to_string();
            tracing::warn!(file = %file_name, %message, "analysis failed");
            state.append_log(
                LogAction::Error,
                LogStatus::Error,
                format!("Analysis failed: {message}"),
                Some(file_name.clone()),
            );
            UploadOutcome::Failed(message)
        }
    }
}

/// Run one upload end to end against `analyzer`.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] for content types that cannot be
/// analyzed. Analysis failures are not errors here: they are recorded and
/// reported as [`UploadOutcome::Failed`].
pub async fn run_upload<A, B>(
    state: &mut AppState<B>,
    analyzer: &A,
    file_name: &str,
    content_type: &str,
    bytes: &[u8],
) -> Result<UploadOutcome, CoreError>
where
    A: Analyzer,
    B: KeyValueBackend,
{
    let request = begin(state, file_name, content_type, bytes)?;
    let result = analyzer.analyze(&request).await;
    Ok(finish(state, &request, result))
}
