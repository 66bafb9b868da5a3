//! Core types shared by the CLI commands.

mod errors;

pub use errors::{
    CliError, ConfigNotFoundError, ConfigParseError, InvalidPackageNameError, SourceNotFoundError,
    StaleOutputError,
};
