#![doc = include_str!("../README.md")]

use folder2rs_generate::TargetLanguage;
use fs_err as fs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "folder2rs.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse {}: {}", .path.display(), .source.message())]
    Parse {
        path: PathBuf,
        /// The file contents, kept for error reporting.
        content: String,
        #[source]
        source: toml::de::Error,
    },
    /// A value parsed but is not usable.
    #[error("Invalid value for '{key}' in {}: {reason}", .path.display())]
    Invalid {
        path: PathBuf,
        key: &'static str,
        reason: &'static str,
    },
}

/// Defaults for a folder2rs run. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EmbedConfig {
    /// Target language of the generated file.
    pub language: Option<TargetLanguage>,
    /// Generate the HTTP handler.
    pub handler: Option<bool>,
    /// Keep the previous output next to the new one.
    pub backup: Option<bool>,
    /// Suffix of the kept previous output.
    pub backup_suffix: Option<String>,
    /// Follow symlinks inside the source directory.
    pub follow_links: Option<bool>,
}

impl EmbedConfig {
    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::parse(content, path)
    }

    /// Loads `explicit` if given, otherwise `folder2rs.toml` in `dir` when it
    /// exists, otherwise the empty configuration.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::read_from_path(path),
            None => {
                let path = dir.join(CONFIG_FILE_NAME);
                if path.is_file() {
                    Self::read_from_path(path)
                } else {
                    Ok(Self::default())
                }
            },
        }
    }

    fn parse(content: String, path: &Path) -> Result<Self, ConfigError> {
        let config: EmbedConfig = match toml::from_str(&content) {
            Ok(config) => config,
            Err(source) => {
                return Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    content,
                    source,
                });
            },
        };

        if config.backup_suffix.as_deref() == Some("") {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                key: "backup_suffix",
                reason: "the suffix must not be empty",
            });
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_from_path_success() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        let config_content = r#"
language = "go"
handler = true
backup = false
backup_suffix = ".orig"
follow_links = true
"#;
        fs::write(&config_path, config_content).unwrap();

        let config = EmbedConfig::read_from_path(&config_path).unwrap();
        assert_eq!(
            config,
            EmbedConfig {
                language: Some(TargetLanguage::Go),
                handler: Some(true),
                backup: Some(false),
                backup_suffix: Some(".orig".to_string()),
                follow_links: Some(true),
            }
        );
    }

    #[test]
    fn test_read_from_path_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "").unwrap();

        let config = EmbedConfig::read_from_path(&config_path).unwrap();
        assert_eq!(config, EmbedConfig::default());
    }

    #[test]
    fn test_read_from_path_file_not_found() {
        let non_existent_path = Path::new("/non/existent/path/folder2rs.toml");
        let result = EmbedConfig::read_from_path(non_existent_path);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_read_from_path_unknown_key() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "handlr = true\n").unwrap();

        let result = EmbedConfig::read_from_path(&config_path);
        assert!(matches!(
            result,
            Err(ConfigError::Parse { ref content, .. }) if content == "handlr = true\n"
        ));
    }

    #[test]
    fn test_read_from_path_unknown_language() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "language = \"cobol\"\n").unwrap();

        let result = EmbedConfig::read_from_path(&config_path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_read_from_path_empty_backup_suffix() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "backup_suffix = \"\"\n").unwrap();

        let result = EmbedConfig::read_from_path(&config_path);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                key: "backup_suffix",
                ..
            })
        ));
    }

    #[test]
    fn test_load_without_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = EmbedConfig::load(None, temp_dir.path()).unwrap();
        assert_eq!(config, EmbedConfig::default());
    }

    #[test]
    fn test_load_discovers_file_in_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "handler = true\n").unwrap();

        let config = EmbedConfig::load(None, temp_dir.path()).unwrap();
        assert_eq!(config.handler, Some(true));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("custom.toml");

        let result = EmbedConfig::load(Some(&missing), temp_dir.path());
        assert!(matches!(result, Err(ConfigError::NotFound(path)) if path == missing));
    }
}
