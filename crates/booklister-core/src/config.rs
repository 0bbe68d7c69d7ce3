/// Run configuration — which roots to scan and how to name the reports.
///
/// Frontends build a `RunConfig` from flags, a JSON file, interactive
/// prompts or any mix of them, then pass it to [`crate::pipeline::run`].
use crate::error::ConfigError;
use crate::export::NamingPolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// What to do when a single file or subdirectory cannot be read mid-scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileErrorPolicy {
    /// Report the entry, leave it out, keep scanning.
    #[default]
    Skip,
    /// Abort the scan of the current root.
    Abort,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Root directories, processed in order.
    pub roots: Vec<PathBuf>,
    pub naming: NamingPolicy,
    pub on_file_error: FileErrorPolicy,
    /// Directory the CSV files are written to. `None` is the working directory.
    pub output_dir: Option<PathBuf>,
}

impl RunConfig {
    pub fn new(roots: Vec<PathBuf>, naming: NamingPolicy) -> Self {
        Self {
            roots,
            naming,
            ..Self::default()
        }
    }

    /// Load a config from a JSON file.
    ///
    /// ```json
    /// { "roots": ["/books"], "naming": { "fixed_base": "mylist" } }
    /// ```
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check the config is runnable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roots.is_empty() {
            return Err(ConfigError::NoRoots);
        }
        if let NamingPolicy::FixedBase(base) = &self.naming {
            if crate::export::base_stem(base).is_empty() {
                return Err(ConfigError::EmptyBaseName);
            }
        }
        Ok(())
    }
}

/// Split a pipe-delimited line of paths into roots.
///
/// Each part is trimmed. Empty parts are kept so every root keeps its
/// position in the line; they fail later as invalid directories. A line with
/// no path at all yields no roots.
pub fn parse_roots(line: &str) -> Vec<PathBuf> {
    if line.trim().is_empty() {
        return Vec::new();
    }
    line.split('|').map(str::trim).map(PathBuf::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_roots_splits_and_trims() {
        let roots = parse_roots(" /books |relative/dir|  C:\\Ebooks  ");
        assert_eq!(
            roots,
            vec![
                PathBuf::from("/books"),
                PathBuf::from("relative/dir"),
                PathBuf::from("C:\\Ebooks"),
            ]
        );
    }

    #[test]
    fn parse_roots_keeps_empty_parts_in_position() {
        assert_eq!(
            parse_roots("/a||/b|"),
            vec![
                PathBuf::from("/a"),
                PathBuf::new(),
                PathBuf::from("/b"),
                PathBuf::new(),
            ]
        );
    }

    #[test]
    fn blank_line_has_no_roots() {
        assert!(parse_roots("").is_empty());
        assert!(parse_roots("   ").is_empty());
    }

    #[test]
    fn parse_roots_keeps_inner_spaces() {
        assert_eq!(parse_roots("My Books"), vec![PathBuf::from("My Books")]);
    }

    #[test]
    fn defaults_are_random_and_skip() {
        let config = RunConfig::default();
        assert_eq!(config.naming, NamingPolicy::Random);
        assert_eq!(config.on_file_error, FileErrorPolicy::Skip);
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn validate_rejects_missing_roots() {
        assert!(matches!(
            RunConfig::default().validate(),
            Err(ConfigError::NoRoots)
        ));
    }

    #[test]
    fn validate_rejects_empty_base() {
        let config = RunConfig::new(
            vec![PathBuf::from("/books")],
            NamingPolicy::FixedBase(" .csv ".into()),
        );
        assert!(matches!(config.validate(), Err(ConfigError::EmptyBaseName)));
    }

    #[test]
    fn json_config_round_trips_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"roots": ["/a", "/b"], "naming": {{"fixed_base": "mylist"}}, "on_file_error": "abort", "output_dir": "out"}}"#
        )
        .unwrap();

        let config = RunConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.roots, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
        assert_eq!(config.naming, NamingPolicy::FixedBase("mylist".into()));
        assert_eq!(config.on_file_error, FileErrorPolicy::Abort);
        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
        config.validate().unwrap();
    }

    #[test]
    fn json_config_accepts_unit_naming() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"roots": ["/a"], "naming": "folder_name"}}"#).unwrap();
        let config = RunConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.naming, NamingPolicy::FolderName);
    }

    #[test]
    fn json_config_rejects_unknown_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"roots": [], "colour": "blue"}}"#).unwrap();
        assert!(matches!(
            RunConfig::from_json_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_config_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            RunConfig::from_json_file(&dir.path().join("nope.json")),
            Err(ConfigError::Read { .. })
        ));
    }
}
