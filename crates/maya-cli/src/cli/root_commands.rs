use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Upload a media file and run the multi-agent analysis.
    Analyze(AnalyzeArgs),
    /// Show the results of a stored analysis.
    Show(ShowArgs),
    /// List past analyses, newest first.
    History(HistoryArgs),
    /// Delete an analysis from history.
    Delete(DeleteArgs),
    /// Show the activity log, newest first.
    Logs(LogsArgs),
    /// Describe the analysis agents.
    Features,
    /// About MAYAVIHIN.
    About,
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Image, video or audio file to analyze.
    pub path: String,
    /// Declared content type (e.g. `video/mp4`). Guessed from the extension if omitted.
    #[arg(long)]
    pub content_type: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Record id, or a unique prefix of it.
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    /// Case-insensitive match on file name or verdict.
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    /// Record id, or a unique prefix of it.
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct LogsArgs {
    /// Case-insensitive match on action type or message.
    #[arg(long)]
    pub filter: Option<String>,
}
