use maya_core::errors::CoreError;
use maya_core::responses::DeleteResponse;

use crate::cli::{GlobalFlags, root_commands::DeleteArgs};
use crate::context::AppContext;
use crate::output::output;

pub fn handle(args: &DeleteArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    // A unique prefix expands to the full id. Unknown ids go through as typed:
    // the deletion is a no-op but still lands in the activity log.
    let id = match ctx.state.resolve_record(&args.id) {
        Ok(record) => record.id.clone(),
        Err(CoreError::NotFound { .. }) => args.id.trim().to_string(),
        Err(error) => return Err(error.into()),
    };

    let removed = ctx.state.delete_record(&id);
    if removed.is_none() {
        tracing::debug!(%id, "no analysis record with this id");
    }

    output(
        &DeleteResponse {
            deleted: removed.is_some(),
            file_name: removed.map(|record| record.file_name),
            id,
        },
        flags.format,
    )
}
