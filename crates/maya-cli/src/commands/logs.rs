use maya_app::filter::filter_logs;
use maya_core::entities::SystemLog;
use maya_core::responses::LogListResponse;

use crate::cli::{GlobalFlags, root_commands::LogsArgs};
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::{format_timestamp, output_rows};

const HEADERS: [&str; 5] = ["time", "action", "status", "file", "message"];

pub fn handle(args: &LogsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let matched = filter_logs(ctx.state.logs(), args.filter.as_deref());
    let response = LogListResponse {
        total_matches: u32::try_from(matched.len())?,
        logs: matched
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect(),
    };
    let rows = response.logs.iter().map(row).collect::<Vec<_>>();
    output_rows(&response, &HEADERS, &rows, flags.format)
}

fn row(log: &SystemLog) -> Vec<String> {
    vec![
        format_timestamp(&log.timestamp),
        log.action_type.to_string(),
        log.status.to_string(),
        log.file_name.clone().unwrap_or_else(|| String::from("-")),
        log.message.clone(),
    ]
}
