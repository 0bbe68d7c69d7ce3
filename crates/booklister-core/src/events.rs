/// Diagnostics emitted while a run progresses.
///
/// The scanner and pipeline never print. They hand `RunEvent`s to a caller
/// supplied sink; the `Display` impl renders the console line a frontend
/// shows for each one.
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    /// A requested root does not exist or is not a directory.
    InvalidDirectory { root: PathBuf },
    /// A matched file could not be sized and was left out.
    FileSkipped { path: PathBuf, message: String },
    /// A directory below the root could not be listed and was left out.
    DirectorySkipped { path: String, message: String },
    /// The root contains no ebook files at any depth.
    NoEbooksFound { root: PathBuf },
    /// The scan of a root was aborted under the abort policy.
    ScanAborted { root: PathBuf, message: String },
    /// A CSV report was written.
    Exported {
        root: PathBuf,
        output: PathBuf,
        records: usize,
    },
    /// A CSV report could not be written.
    ExportFailed {
        root: PathBuf,
        output: PathBuf,
        message: String,
    },
}

impl RunEvent {
    /// `true` for events that describe something going wrong.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDirectory { .. } | Self::ScanAborted { .. } | Self::ExportFailed { .. }
        )
    }
}

impl fmt::Display for RunEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDirectory { root } => {
                write!(f, "Error: '{}' is not a valid directory.", root.display())
            }
            Self::FileSkipped { path, message } => {
                write!(f, "Skipping file due to error: {} ({message})", path.display())
            }
            Self::DirectorySkipped { path, message } => {
                write!(f, "Skipping directory due to error: {path} ({message})")
            }
            Self::NoEbooksFound { root } => write!(
                f,
                "No ebook files found in '{}' or its subdirectories.",
                root.display()
            ),
            Self::ScanAborted { root, message } => {
                write!(f, "Scan of '{}' aborted: {message}", root.display())
            }
            Self::Exported { root, output, .. } => write!(
                f,
                "Results for '{}' exported to '{}'",
                root.display(),
                output.display()
            ),
            Self::ExportFailed {
                root,
                output,
                message,
            } => write!(
                f,
                "Failed to export results for '{}' to '{}': {message}",
                root.display(),
                output.display()
            ),
        }
    }
}
