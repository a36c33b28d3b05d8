use std::io::{self, Write};

use crate::context::AppContext;
use crate::domain::change::ChangeTotals;
use crate::error::AppResult;
use crate::workflow::totals::tally_history;

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    let totals = tally_history(ctx).await?;
    let mut stdout = io::stdout().lock();
    report(&totals, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

pub fn report(totals: &ChangeTotals, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{totals}")
}
