use crate::error::GenerateError;
use fs_err as fs;
use std::ffi::OsString;
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// Suffix appended to the previous output when it is kept.
pub const DEFAULT_BACKUP_SUFFIX: &str = ".bak";

/// What [`write_output`] did on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteOutcome {
    /// The file that now holds the generated contents.
    pub path: PathBuf,
    /// Where the previous contents went, if there were any and they were kept.
    pub backup: Option<PathBuf>,
}

/// Returns `path` with `suffix` appended to its file name.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Writes `contents` to `path`, replacing whatever was there.
///
/// Missing parent directories are created. When `backup_suffix` is set and
/// `path` already exists, the old file is renamed to `path` + suffix first. If
/// that rename fails nothing is written. The contents go through a temporary
/// file in the same directory that is then moved over `path`, so readers never
/// observe a partially written file.
pub fn write_output(
    path: &Path,
    contents: &str,
    backup_suffix: Option<&str>,
) -> Result<WriteOutcome, GenerateError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let backup = match backup_suffix {
        Some(suffix) if fs::symlink_metadata(path).is_ok() => {
            let backup = backup_path(path, suffix);
            if backup.exists() {
                tracing::warn!("Replacing older backup {}", backup.display());
            }
            std::fs::rename(path, &backup).map_err(|source| GenerateError::Backup {
                path: path.to_path_buf(),
                backup: backup.clone(),
                source,
            })?;
            tracing::debug!("Backed up {} to {}", path.display(), backup.display());
            Some(backup)
        },
        _ => None,
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".folder2rs-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt as _;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }
    let mut staged = builder
        .tempfile_in(dir)
        .map_err(|err| with_path(err, dir))?;
    staged
        .write_all(contents.as_bytes())
        .and_then(|()| staged.flush())
        .map_err(|err| with_path(err, staged.path()))?;
    staged
        .persist(path)
        .map_err(|err| with_path(err.error, path))?;

    tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());

    Ok(WriteOutcome {
        path: path.to_path_buf(),
        backup,
    })
}

fn with_path(err: std::io::Error, path: &Path) -> GenerateError {
    GenerateError::Io(std::io::Error::new(
        err.kind(),
        format!("{} (path: {})", err, path.display()),
    ))
}
