use std::future::Future;
use std::path::Path;

use anyhow::Context;
use maya_app::progress::TICK_INTERVAL;
use maya_app::{SimulatedProgress, UploadOutcome, upload};
use maya_core::entities::AnalysisRecord;
use maya_core::enums::MediaType;
use maya_core::media::content_type_for_path;
use maya_gemini::{AnalysisError, Analyzer, GeminiClient};
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

use crate::cli::{GlobalFlags, root_commands::AnalyzeArgs};
use crate::commands::show::print_results;
use crate::context::AppContext;
use crate::output::format_size;
use crate::progress::Progress;
use crate::ui;

type AnalysisTask = JoinHandle<Result<AnalysisRecord, AnalysisError>>;

/// How the wait for a spawned analysis ended.
enum Wait {
    Finished(Result<AnalysisRecord, AnalysisError>),
    /// Ctrl-C arrived first. The task is still running.
    Cancelled(AnalysisTask),
}

pub async fn handle(
    args: &AnalyzeArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let path = Path::new(&args.path);
    let content_type = resolve_content_type(path, args.content_type.as_deref())?;
    let file_name = display_name(path)?;

    let metadata = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("no file at '{}'", path.display()))?;
    if !metadata.is_file() {
        anyhow::bail!("'{}' is not a file", path.display());
    }
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read '{}'", path.display()))?;

    let size = bytes.len() as u64;
    if ctx.config.general.exceeds_upload_limit(size) {
        tracing::warn!(file = %file_name, size, limit_mb = ctx.config.general.max_upload_mb, "file exceeds advisory upload limit");
        ui::notice(&format!(
            "warning: {file_name} is {}, above the {} MB advisory limit; sending it anyway",
            format_size(size),
            ctx.config.general.max_upload_mb
        ));
    }

    let client = GeminiClient::new(&ctx.config.gemini)?;

    let mut progress = SimulatedProgress::started();
    let bar = Progress::percent(&format!("Uploading {file_name}"));
    bar.set(progress.value());

    let request = upload::begin(&mut ctx.state, &file_name, &content_type, &bytes)?;
    drop(bytes);
    bar.set(progress.mark_encoded());
    bar.set_message("Running multi-agent analysis");

    let task: AnalysisTask = tokio::spawn({
        let client = client.clone();
        let request = request.clone();
        async move { client.analyze(&request).await }
    });

    match wait_for_analysis(task, &mut progress, &bar).await? {
        Wait::Finished(result) => match upload::finish(&mut ctx.state, &request, result) {
            UploadOutcome::Completed(record) => {
                bar.set(progress.complete());
                bar.finish_clear();
                print_results(&record, flags.format)
            }
            UploadOutcome::Failed(message) => {
                bar.finish_err("analysis failed");
                anyhow::bail!("analysis of {file_name} failed: {message}")
            }
        },
        Wait::Cancelled(task) => {
            bar.finish_clear();
            ui::notice(
                "Analysis cancelled. The pending request will still finish and be recorded in history; press Ctrl-C again to quit now.",
            );
            match settle_after_cancel(task, tokio::signal::ctrl_c()).await? {
                Some(result) => {
                    let outcome = upload::finish(&mut ctx.state, &request, result);
                    ctx.state.close_results();
                    tracing::debug!(completed = matches!(outcome, UploadOutcome::Completed(_)), "cancelled analysis settled");
                    Ok(())
                }
                None => {
                    tracing::warn!(file = %file_name, "exiting before the pending analysis finished; its outcome is not recorded");
                    std::process::exit(130);
                }
            }
        }
    }
}

/// Wait for a cancelled analysis to settle.
///
/// Returns `None` when `interrupt` fires first. A failing interrupt listener
/// is not an interrupt: the wait continues until the task settles.
async fn settle_after_cancel<F>(
    mut task: AnalysisTask,
    interrupt: F,
) -> anyhow::Result<Option<Result<AnalysisRecord, AnalysisError>>>
where
    F: Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        joined = &mut task => Ok(Some(joined.context("analysis task failed")?)),
        signal = interrupt => match signal {
            Ok(()) => Ok(None),
            Err(error) => {
                tracing::warn!(%error, "cannot listen for a second Ctrl-C; waiting for the analysis");
                Ok(Some(task.await.context("analysis task failed")?))
            }
        },
    }
}

/// Tick the progress bar until the analysis finishes or the user presses Ctrl-C.
async fn wait_for_analysis(
    mut task: AnalysisTask,
    progress: &mut SimulatedProgress,
    bar: &Progress,
) -> anyhow::Result<Wait> {
    let mut ticker = interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
    loop {
        tokio::select! {
            joined = &mut task => {
                return Ok(Wait::Finished(joined.context("analysis task failed")?));
            }
            _ = ticker.tick() => bar.set(progress.tick()),
            signal = tokio::signal::ctrl_c() => {
                signal.context("failed to listen for Ctrl-C")?;
                return Ok(Wait::Cancelled(task));
            }
        }
    }
}

/// Declared content type: `--content-type` if given, else guessed from the extension.
fn resolve_content_type(path: &Path, declared: Option<&str>) -> anyhow::Result<String> {
    let content_type = match declared.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value.to_ascii_lowercase(),
        None => content_type_for_path(path)
            .map(str::to_string)
            .with_context(|| {
                format!(
                    "cannot tell the media type of '{}' from its extension; pass --content-type",
                    path.display()
                )
            })?,
    };

    if MediaType::from_content_type(&content_type).is_none() {
        anyhow::bail!(
            "'{}' is declared as {content_type}; only image, video and audio files can be analyzed",
            path.display()
        );
    }
    Ok(content_type)
}

fn display_name(path: &Path) -> anyhow::Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("'{}' does not name a file", path.display()))
}
