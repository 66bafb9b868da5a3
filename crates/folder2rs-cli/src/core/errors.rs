//! CLI error types rendered as miette diagnostics.

// Fields in these structs are read by miette's Diagnostic derive macro
#![allow(unused)]

use folder2rs_generate::GenerateError;
use folder2rs_toml::ConfigError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::PathBuf;
use thiserror::Error;

/// Error when the source directory does not exist.
#[derive(Debug, Diagnostic, Error)]
#[error("source directory not found: {}", .path.display())]
#[diagnostic(
    code(folder2rs::source::not_found),
    help("The first argument must name an existing directory")
)]
pub struct SourceNotFoundError {
    pub path: PathBuf,
}

/// Error when the package argument is not a usable identifier.
#[derive(Debug, Diagnostic, Error)]
#[error("invalid package name: '{name}'")]
#[diagnostic(
    code(folder2rs::package::invalid_name),
    help(
        "The last component of the package argument must start with a letter or '_' and contain only ASCII letters, digits and '_'. Rust and Go keywords are not allowed"
    )
)]
pub struct InvalidPackageNameError {
    pub name: String,
}

/// Error when a configuration file given with `--config` is missing.
#[derive(Debug, Diagnostic, Error)]
#[error("configuration file not found: {}", .expected_path.display())]
#[diagnostic(
    code(folder2rs::config::not_found),
    help("Pass an existing file to --config, or drop the option to use ./folder2rs.toml")
)]
pub struct ConfigNotFoundError {
    /// The path where the config was expected.
    pub expected_path: PathBuf,
}

/// Error when parsing the configuration file.
#[derive(Debug, Diagnostic, Error)]
#[error("failed to parse folder2rs.toml configuration")]
#[diagnostic(code(folder2rs::config::parse_error))]
pub struct ConfigParseError {
    /// The source content of the config file.
    #[source_code]
    pub src: NamedSource<String>,

    /// The span where the error occurred.
    #[label("error occurred here")]
    pub span: Option<SourceSpan>,

    /// The underlying parse error message.
    #[help]
    pub help: String,
}

/// `--check` found the output missing or different from a fresh generation.
#[derive(Debug, Diagnostic, Error)]
#[error("generated file is out of date: {}", .path.display())]
#[diagnostic(
    code(folder2rs::check::stale),
    help("Run folder2rs without --check to regenerate it")
)]
pub struct StaleOutputError {
    pub path: PathBuf,
}

#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    SourceNotFound(#[from] SourceNotFoundError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidPackageName(#[from] InvalidPackageNameError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    ConfigNotFound(#[from] ConfigNotFoundError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    ConfigParse(#[from] ConfigParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Stale(#[from] StaleOutputError),

    #[error(transparent)]
    #[diagnostic(code(folder2rs::config))]
    Config(ConfigError),

    #[error(transparent)]
    #[diagnostic(code(folder2rs::generate))]
    Generate(GenerateError),

    #[error("IO error: {0}")]
    #[diagnostic(code(folder2rs::io))]
    Io(#[from] std::io::Error),
}

impl From<GenerateError> for CliError {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::SourceNotFound(path) => SourceNotFoundError { path }.into(),
            GenerateError::InvalidPackageName(name) => InvalidPackageNameError { name }.into(),
            other => CliError::Generate(other),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NotFound(expected_path) => ConfigNotFoundError { expected_path }.into(),
            ConfigError::Parse {
                path,
                content,
                source,
            } => ConfigParseError {
                src: NamedSource::new(path.display().to_string(), content),
                span: source.span().map(SourceSpan::from),
                help: source.message().to_string(),
            }
            .into(),
            other => CliError::Config(other),
        }
    }
}
