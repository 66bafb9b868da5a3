//! Directory traversal producing the files to embed.

use crate::error::GenerateError;
use fs_err as fs;
use path_slash::PathExt as _;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A regular file found under the source root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    key: String,
    path: PathBuf,
    size: u64,
}

impl SourceFile {
    /// The path relative to the source root, `/` separated.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The path on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size reported by the filesystem when the file was visited.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn open(&self) -> Result<fs::File, GenerateError> {
        Ok(fs::File::open(&self.path)?)
    }
}

/// Lazily lists every regular file below `root`.
///
/// The root is checked up front. Entries come out sorted by file name within
/// each directory. Symlinks are skipped unless `follow_links` is set, in which
/// case their targets are visited and link cycles surface as errors.
pub fn walk(
    root: &Path,
    follow_links: bool,
) -> Result<impl Iterator<Item = Result<SourceFile, GenerateError>>, GenerateError> {
    let metadata = match fs::metadata(root) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(GenerateError::SourceNotFound(root.to_path_buf()));
        },
        Err(err) => return Err(err.into()),
    };
    if !metadata.is_dir() {
        return Err(GenerateError::NotADirectory(root.to_path_buf()));
    }

    let root = root.to_path_buf();
    let entries = WalkDir::new(&root)
        .follow_links(follow_links)
        .sort_by_file_name()
        .into_iter();

    Ok(entries.filter_map(move |entry| match entry {
        Ok(entry) if entry.file_type().is_file() => Some(source_file(&root, &entry)),
        Ok(_) => None,
        Err(source) => Some(Err(GenerateError::Walk {
            root: root.clone(),
            source,
        })),
    }))
}

fn source_file(root: &Path, entry: &walkdir::DirEntry) -> Result<SourceFile, GenerateError> {
    // walkdir only yields paths below the root it was given
    let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
    let key = relative
        .to_slash()
        .ok_or_else(|| GenerateError::NonUtf8Path(entry.path().to_path_buf()))?
        .into_owned();
    let size = entry
        .metadata()
        .map_err(|source| GenerateError::Walk {
            root: root.to_path_buf(),
            source,
        })?
        .len();

    Ok(SourceFile {
        key,
        path: entry.path().to_path_buf(),
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn keys(root: &Path, follow_links: bool) -> Vec<String> {
        walk(root, follow_links)
            .unwrap()
            .map(|file| file.unwrap().key().to_string())
            .collect()
    }

    #[test]
    fn test_walk_lists_nested_files_with_slash_keys() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("css/vendor")).unwrap();
        fs::write(temp.path().join("index.html"), "<html>").unwrap();
        fs::write(temp.path().join("css/site.css"), "body{}").unwrap();
        fs::write(temp.path().join("css/vendor/reset.css"), "*{}").unwrap();

        assert_eq!(
            keys(temp.path(), false),
            vec!["css/site.css", "css/vendor/reset.css", "index.html"]
        );
    }

    #[test]
    fn test_walk_skips_empty_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a/b/c")).unwrap();
        assert!(keys(temp.path(), false).is_empty());
    }

    #[test]
    fn test_walk_reports_sizes() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("hello.txt"), "hi").unwrap();

        let files: Vec<_> = walk(temp.path(), false)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].size(), 2);
        assert_eq!(files[0].path(), temp.path().join("hello.txt"));
    }

    #[test]
    fn test_walk_missing_root() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        assert!(matches!(
            walk(&missing, false),
            Err(GenerateError::SourceNotFound(path)) if path == missing
        ));
    }

    #[test]
    fn test_walk_root_is_a_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            walk(&file, false),
            Err(GenerateError::NotADirectory(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_symlinks_only_when_following() {
        let temp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("shared.txt"), "shared").unwrap();
        fs::write(temp.path().join("own.txt"), "own").unwrap();
        std::os::unix::fs::symlink(outside.path(), temp.path().join("linked")).unwrap();

        assert_eq!(keys(temp.path(), false), vec!["own.txt"]);
        assert_eq!(
            keys(temp.path(), true),
            vec!["linked/shared.txt", "own.txt"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_reports_link_loops() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("a")).unwrap();
        std::os::unix::fs::symlink(temp.path(), temp.path().join("a/back")).unwrap();

        let err = walk(temp.path(), true)
            .unwrap()
            .find_map(Result::err)
            .unwrap();

        assert!(matches!(&err, GenerateError::Walk { root, .. } if root == temp.path()));
        let prefix = format!("failed to walk {}: ", temp.path().display());
        assert!(err.to_string().starts_with(&prefix), "{err}");
    }
}
