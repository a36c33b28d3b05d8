use tracing::{debug, info};

use crate::context::AppContext;
use crate::domain::change::ChangeTotals;
use crate::error::AppResult;

pub async fn tally_history(ctx: &AppContext) -> AppResult<ChangeTotals> {
    let report = ctx.version_control.fetch_report().await?;
    if report.is_empty() {
        debug!("history report is empty");
    }
    let totals = ChangeTotals::aggregate(&report);
    info!(
        root = %ctx.config.workspace_root.display(),
        insertions = totals.insertions,
        deletions = totals.deletions,
        "tallied history"
    );
    Ok(totals)
}
