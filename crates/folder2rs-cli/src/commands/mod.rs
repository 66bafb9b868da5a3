//! CLI command implementations.

mod dry_run;
mod generate;

pub use dry_run::DryRunDiff;
pub use generate::{GenerateArgs, run_generate};
