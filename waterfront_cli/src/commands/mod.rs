//! Subcommand arguments and their execution.
//!
//! Every calculation command turns its flags into a typed core input record
//! before anything is computed; the core never sees raw strings.

pub mod ask;
pub mod batch;
pub mod hydro;
pub mod info;
pub mod structures;

use anyhow::Result;
use tracing::debug;

use waterfront_core::calculations::CalculationItem;

use crate::output::Output;

/// Run one calculation and print its result.
pub fn run_item(item: CalculationItem, out: &Output) -> Result<()> {
    debug!(calc_type = item.calc_type(), "running calculation");
    let result = item.run()?;
    out.emit_calculation(&result)
}
