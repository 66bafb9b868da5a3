// CLI output formatting with consistent styling using indicatif and colored.
// Status lines go to stdout; progress bars and logs go to stderr.

use colored::Colorize as _;
use folder2rs_generate::{ProgressObserver, TargetLanguage};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const PD_TICK: Duration = Duration::from_millis(100);

/// Setting this environment variable turns on [`set_e2e_mode`].
pub const E2E_ENV: &str = "FOLDER2RS_E2E";

static E2E_MODE: AtomicBool = AtomicBool::new(false);

/// Enable E2E mode for deterministic output (no colors, fixed durations, hidden progress bars).
pub fn set_e2e_mode(enabled: bool) {
    E2E_MODE.store(enabled, Ordering::SeqCst);
    if enabled {
        colored::control::set_override(false);
    }
}

pub fn is_e2e() -> bool {
    E2E_MODE.load(Ordering::SeqCst)
}

fn format_duration(duration: Duration) -> String {
    if is_e2e() {
        "[DURATION]".to_string()
    } else {
        // Sub-millisecond precision is noise for a human reader.
        let millis = Duration::from_millis(duration.as_millis() as u64);
        humantime::format_duration(millis).to_string()
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!is_e2e())
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

pub fn create_file_progress_bar(len: u64, msg: &str) -> ProgressBar {
    if is_e2e() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(PD_TICK);
    pb
}

/// Shows one progress bar per file while it is being encoded.
pub struct FileProgress {
    quiet: bool,
    current: Option<ProgressBar>,
}

impl FileProgress {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            current: None,
        }
    }

    /// Clears a bar left over from an interrupted run.
    pub fn finish(&mut self) {
        if let Some(pb) = self.current.take() {
            pb.finish_and_clear();
        }
    }
}

impl ProgressObserver for FileProgress {
    fn file_started(&mut self, key: &str, size: u64) {
        self.finish();
        if !self.quiet {
            self.current = Some(create_file_progress_bar(size, key));
        }
    }

    fn chunk_processed(&mut self, bytes: usize) {
        if let Some(pb) = &self.current {
            pb.inc(bytes as u64);
        }
    }

    fn file_finished(&mut self, _key: &str) {
        self.finish();
    }
}

impl Drop for FileProgress {
    fn drop(&mut self) {
        self.finish();
    }
}

pub fn print_header(source: &Path, package: &str, language: TargetLanguage) {
    println!(
        "{} {} {} {}",
        "Embedding".dimmed(),
        source.display(),
        format!("as {} package", language).dimmed(),
        package.green()
    );
}

pub fn print_generated(path: &Path, duration: Duration, file_count: usize, byte_count: u64) {
    println!(
        "{} {} ({} files, {} bytes)",
        format!("{} generated in", path.display()).dimmed(),
        format_duration(duration).green(),
        file_count.to_string().cyan(),
        byte_count.to_string().cyan()
    );
}

pub fn print_backup(path: &Path, backup: &Path) {
    println!(
        "{} {} {} {}",
        "Kept previous".dimmed(),
        path.display(),
        "as".dimmed(),
        backup.display().to_string().yellow()
    );
}

pub fn print_up_to_date(path: &Path) {
    println!("{} {}", "Up to date:".green(), path.display());
}

pub fn print_would_write(path: &Path) {
    println!("{} {}", "Would write:".yellow(), path.display());
}

pub fn print_unchanged(path: &Path) {
    println!("{} {}", "Unchanged:".dimmed(), path.display());
}

pub fn print_diff(old: &str, new: &str) {
    use similar::{ChangeTag, TextDiff};

    let diff = TextDiff::from_lines(old, new);

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!("{}", "  ...".dimmed());
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => "-",
                    ChangeTag::Insert => "+",
                    ChangeTag::Equal => " ",
                };
                let mut line = format!("{} {}", sign, change);
                if change.missing_newline() {
                    line.push('\n');
                }
                match change.tag() {
                    ChangeTag::Delete => print!("{}", line.red()),
                    ChangeTag::Insert => print!("{}", line.green()),
                    ChangeTag::Equal => print!("{}", line.dimmed()),
                }
            }
        }
    }
}
