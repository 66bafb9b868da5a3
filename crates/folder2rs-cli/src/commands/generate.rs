use super::DryRunDiff;
use crate::core::{CliError, StaleOutputError};
use crate::utils::ui;
use clap::Parser;
use folder2rs_generate::{GenerateConfig, TargetLanguage, package_name_from_arg};
use folder2rs_toml::EmbedConfig;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for generating the embedding file.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Directory whose files are embedded
    pub source: PathBuf,

    /// Package name of the generated file; only the last path component is used
    pub package: String,

    /// Directory receiving the generated file [default: PACKAGE]
    pub output: Option<PathBuf>,

    /// Also generate an HTTP handler serving the embedded files
    #[arg(long)]
    pub handler: bool,

    /// Overwrite the previous output instead of keeping it as <file>.bak
    #[arg(long, visible_alias = "nobackup")]
    pub no_backup: bool,

    /// Language of the generated file
    #[arg(short, long, value_enum)]
    pub lang: Option<TargetLanguage>,

    /// Follow symlinks inside the source directory
    #[arg(long)]
    pub follow_links: bool,

    /// Show what would change without writing anything
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Fail if the generated file is missing or out of date
    #[arg(long)]
    pub check: bool,

    /// Read defaults from this file instead of ./folder2rs.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Hide progress bars
    #[arg(short, long)]
    pub quiet: bool,
}

impl GenerateArgs {
    /// Merges the flags over the file configuration. A flag given on the
    /// command line always wins.
    pub fn to_config(&self, file: EmbedConfig) -> Result<GenerateConfig, CliError> {
        let package = package_name_from_arg(&self.package)?;
        let source_dir = std::path::absolute(&self.source)?;

        Ok(GenerateConfig::builder()
            .source_dir(source_dir)
            .package(package)
            .maybe_output_dir(self.output.clone())
            .language(self.lang.or(file.language).unwrap_or_default())
            .handler(self.handler || file.handler.unwrap_or(false))
            .backup(!self.no_backup && file.backup.unwrap_or(true))
            .maybe_backup_suffix(file.backup_suffix)
            .follow_links(self.follow_links || file.follow_links.unwrap_or(false))
            .build())
    }
}

/// Run the generate command.
pub fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let cwd = std::env::current_dir()?;
    let file_config = EmbedConfig::load(args.config.as_deref(), &cwd)?;
    tracing::debug!("File configuration: {:?}", file_config);
    let config = args.to_config(file_config)?;

    if !args.quiet {
        ui::print_header(&args.source, config.package(), config.language());
    }

    let start = Instant::now();
    let mut progress = ui::FileProgress::new(args.quiet);
    let prepared = config.prepare(&mut progress)?;
    progress.finish();

    if args.check {
        if prepared.is_up_to_date()? {
            ui::print_up_to_date(prepared.output_path());
            return Ok(());
        }
        return Err(StaleOutputError {
            path: prepared.output_path().to_path_buf(),
        }
        .into());
    }

    if args.dry_run {
        let current = prepared.current_contents()?.unwrap_or_default();
        let diff = DryRunDiff::new(current, prepared.contents().to_string());
        if diff.is_empty() {
            ui::print_unchanged(prepared.output_path());
        } else {
            ui::print_would_write(prepared.output_path());
            diff.print();
        }
        return Ok(());
    }

    let file_count = prepared.assets().len();
    let byte_count = prepared.assets().total_bytes();
    let outcome = prepared.write()?;

    if let Some(backup) = &outcome.backup {
        ui::print_backup(&outcome.path, backup);
    }
    ui::print_generated(&outcome.path, start.elapsed(), file_count, byte_count);

    Ok(())
}
