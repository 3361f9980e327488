use maya_core::entities::AnalysisRecord;

use crate::cli::{GlobalFlags, OutputFormat, root_commands::ShowArgs};
use crate::context::AppContext;
use crate::output::{output, results::render_results};
use crate::ui;

pub fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ctx.state.resolve_record(&args.id)?;
    print_results(record, flags.format)
}

/// Print the results view, or the record itself for JSON formats.
pub fn print_results(record: &AnalysisRecord, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", render_results(record, ui::prefs().table_color));
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(record, format),
    }
}
