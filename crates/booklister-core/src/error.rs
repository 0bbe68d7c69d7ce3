/// Error types for scanning, exporting and configuration.
///
/// An empty scan result is not an error; see [`crate::scanner::ScanOutcome`].
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to scan one root directory.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The root does not exist or is not a directory.
    #[error("'{}' is not a valid directory.", .0.display())]
    NotADirectory(PathBuf),

    /// Size lookup failed for a matched file (abort policy only).
    #[error("could not read size of {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory below the root could not be listed (abort policy only).
    #[error("could not read directory {path}: {message}")]
    Walk { path: String, message: String },
}

/// Failure to write one CSV report.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to flush {}: {source}", path.display())]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// The report path the failed write targeted.
    pub fn path(&self) -> &Path {
        match self {
            Self::Create { path, .. } | Self::Write { path, .. } | Self::Flush { path, .. } => path,
        }
    }
}

/// Invalid or unreadable run configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no root directories were given")]
    NoRoots,

    #[error("the base file name is empty")]
    EmptyBaseName,

    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_directory_message_quotes_path() {
        let err = ScanError::NotADirectory(PathBuf::from("/nope"));
        assert_eq!(err.to_string(), "'/nope' is not a valid directory.");
    }

    #[test]
    fn file_access_keeps_source() {
        let err = ScanError::FileAccess {
            path: PathBuf::from("/x/a.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/x/a.pdf"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
