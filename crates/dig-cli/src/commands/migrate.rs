//! Implementation of the `dig migrate` command.
//!
//! The migration runner is an explicit stub: generated migration files carry
//! a timestamp prefix that fixes their execution order, but no runner
//! consumes it yet. The command reports that and exits successfully so
//! scripts can distinguish "nothing ran" from a real failure.

use tracing::instrument;

use crate::{cli::global::GlobalArgs, error::CliResult, output::OutputManager};

/// Execute the `dig migrate` command.
#[instrument(skip_all)]
pub fn execute(_global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    output.warning("The migration runner is not implemented yet; no migrations were run.")?;
    Ok(())
}
