#![doc = include_str!("../README.md")]

use fs_err as fs;
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

pub mod assets;
pub mod encode;
pub mod error;
pub mod language;
pub mod progress;
pub mod render;
pub mod walk;
pub mod write;

pub use assets::{AssetMap, EncodedAsset};
pub use encode::{HexEncoder, decode_fragment};
pub use error::GenerateError;
pub use language::TargetLanguage;
pub use progress::ProgressObserver;
pub use write::{DEFAULT_BACKUP_SUFFIX, WriteOutcome};

/// Everything one generation run needs.
///
/// ```no_run
/// use folder2rs_generate::{GenerateConfig, TargetLanguage};
///
/// let outcome = GenerateConfig::builder()
///     .source_dir("static")
///     .package("assets")
///     .language(TargetLanguage::Rust)
///     .handler(true)
///     .build()
///     .run(&mut ())?;
/// println!("wrote {}", outcome.path.display());
/// # Ok::<(), folder2rs_generate::GenerateError>(())
/// ```
#[derive(Clone, Debug, bon::Builder)]
pub struct GenerateConfig {
    /// Directory whose files get embedded.
    #[builder(into)]
    source_dir: PathBuf,

    /// Package (module) name, also the generated file's stem.
    #[builder(into)]
    package: String,

    /// Directory receiving the generated file. Defaults to the package name.
    #[builder(into)]
    output_dir: Option<PathBuf>,

    #[builder(default)]
    language: TargetLanguage,

    /// Also generate the HTTP handler.
    #[builder(default)]
    handler: bool,

    /// Keep the previous output next to the new one.
    #[builder(default = true)]
    backup: bool,

    #[builder(into, default = DEFAULT_BACKUP_SUFFIX.to_string())]
    backup_suffix: String,

    /// Follow symlinks while walking the source directory.
    #[builder(default)]
    follow_links: bool,
}

impl GenerateConfig {
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn language(&self) -> TargetLanguage {
        self.language
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.package))
    }

    /// `<output_dir>/<package>.<ext>`
    pub fn output_path(&self) -> PathBuf {
        self.output_dir().join(format!(
            "{}.{}",
            self.package,
            self.language.extension()
        ))
    }

    /// The backup suffix, or `None` when backups are disabled.
    pub fn backup_suffix(&self) -> Option<&str> {
        self.backup.then_some(self.backup_suffix.as_str())
    }

    /// Walks, encodes and renders without touching the output location.
    pub fn prepare<O>(&self, observer: &mut O) -> Result<Prepared, GenerateError>
    where
        O: ProgressObserver + ?Sized,
    {
        validate_package_name(&self.package)?;

        tracing::debug!(
            "Embedding {} as {} package '{}'",
            self.source_dir.display(),
            self.language,
            self.package
        );

        let encoder = HexEncoder::new(self.language.fragment_indent());
        let mut assets = AssetMap::new();
        let generated = self.generated_paths()?;

        for file in walk::walk(&self.source_dir, self.follow_links)? {
            let file = file?;
            if generated.contains(&std::path::absolute(file.path())?) {
                tracing::debug!("Skipping generated file {}", file.path().display());
                continue;
            }
            if assets.contains_key(file.key()) {
                return Err(GenerateError::DuplicateKey(file.key().to_string()));
            }

            observer.file_started(file.key(), file.size());
            let asset = {
                let reader = file.open()?;
                encoder.encode(reader, file.size(), observer)?
            };
            observer.file_finished(file.key());

            tracing::debug!("Encoded {} ({} bytes)", file.key(), asset.len());
            assets.insert(file.key(), asset);
        }

        let contents = render::render(self.language, &self.package, &assets, self.handler)?;

        tracing::info!(
            "Embedded {} file(s), {} byte(s) for package '{}'",
            assets.len(),
            assets.total_bytes(),
            self.package
        );

        Ok(Prepared {
            output_path: self.output_path(),
            contents,
            assets,
            backup_suffix: self.backup_suffix().map(str::to_owned),
        })
    }

    /// The output file and its backup, which are never embedded even when the
    /// output directory lies inside the source tree.
    fn generated_paths(&self) -> Result<[PathBuf; 2], GenerateError> {
        let output_path = self.output_path();
        let backup = write::backup_path(&output_path, &self.backup_suffix);
        Ok([std::path::absolute(&output_path)?, std::path::absolute(backup)?])
    }

    /// Generates and writes the output file.
    pub fn run<O>(&self, observer: &mut O) -> Result<WriteOutcome, GenerateError>
    where
        O: ProgressObserver + ?Sized,
    {
        self.prepare(observer)?.write()
    }
}

/// A rendered output file that has not been written yet.
#[derive(Clone, Debug)]
pub struct Prepared {
    output_path: PathBuf,
    contents: String,
    assets: AssetMap,
    backup_suffix: Option<String>,
}

impl Prepared {
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// The generated source text.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn assets(&self) -> &AssetMap {
        &self.assets
    }

    /// What the output file holds right now, `None` if it does not exist.
    pub fn current_contents(&self) -> Result<Option<String>, GenerateError> {
        match fs::read(&self.output_path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Whether the output file already holds exactly these contents.
    pub fn is_up_to_date(&self) -> Result<bool, GenerateError> {
        Ok(self.current_contents()?.as_deref() == Some(self.contents.as_str()))
    }

    pub fn write(self) -> Result<WriteOutcome, GenerateError> {
        write::write_output(
            &self.output_path,
            &self.contents,
            self.backup_suffix.as_deref(),
        )
    }
}

/// Derives the package name from a command-line argument.
///
/// Only the last path component is used, so `web/assets/` names the package
/// `assets`. The result must be an identifier in both Rust and Go, keywords of
/// either language included.
pub fn package_name_from_arg(arg: &str) -> Result<String, GenerateError> {
    let name = Path::new(arg)
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or(arg);
    validate_package_name(name)?;
    Ok(name.to_string())
}

/// Strict and reserved keywords of the 2024 edition.
const RUST_KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

fn validate_package_name(name: &str) -> Result<(), GenerateError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => true,
        Some('_') => name.len() > 1,
        _ => false,
    } && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid && !RUST_KEYWORDS.contains(&name) && !GO_KEYWORDS.contains(&name) {
        Ok(())
    } else {
        Err(GenerateError::InvalidPackageName(name.to_string()))
    }
}
