/// One row of a scan report and the ordered table that holds them.
///
/// Field declaration order on [`FileRecord`] *is* the CSV column order:
/// `Subfolder, Filename, Filesize (MB), Filepath`.
use compact_str::CompactString;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::size::format_megabytes;

/// Subfolder value used for files that sit directly in the scan root.
pub const ROOT_SUBFOLDER: &str = "Root Directory";

/// A single matched ebook file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Containing directory relative to the scan root, or [`ROOT_SUBFOLDER`].
    #[serde(rename = "Subfolder")]
    pub subfolder: CompactString,

    /// Base name including extension.
    #[serde(rename = "Filename")]
    pub filename: CompactString,

    /// Size in MB, always two decimals.
    #[serde(rename = "Filesize (MB)")]
    pub filesize_mb: String,

    /// Full path as encountered during traversal.
    #[serde(rename = "Filepath")]
    pub filepath: String,

    /// Raw size in bytes. Not exported.
    #[serde(skip)]
    pub size_bytes: u64,
}

impl FileRecord {
    /// Build a record from its parts, deriving the MB column from `size_bytes`.
    pub fn new(
        subfolder: impl Into<CompactString>,
        filename: impl Into<CompactString>,
        filepath: impl Into<String>,
        size_bytes: u64,
    ) -> Self {
        Self {
            subfolder: subfolder.into(),
            filename: filename.into(),
            filesize_mb: format_megabytes(size_bytes),
            filepath: filepath.into(),
            size_bytes,
        }
    }
}

/// Ordered scan results for exactly one scan root.
///
/// Rows are kept sorted by `(subfolder, filename)` using plain `str`
/// ordering. The sort is stable, so identical keys keep traversal order.
#[derive(Debug, Clone)]
pub struct ResultTable {
    root: PathBuf,
    records: Vec<FileRecord>,
}

impl ResultTable {
    /// Create a table from unsorted records and sort them.
    pub fn new(root: impl Into<PathBuf>, mut records: Vec<FileRecord>) -> Self {
        records.sort_by(|a, b| {
            a.subfolder
                .as_str()
                .cmp(b.subfolder.as_str())
                .then_with(|| a.filename.as_str().cmp(b.filename.as_str()))
        });
        Self {
            root: root.into(),
            records,
        }
    }

    /// The scan root every record belongs to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of the raw byte sizes of every record.
    pub fn total_bytes(&self) -> u64 {
        self.records.iter().map(|r| r.size_bytes).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a FileRecord;
    type IntoIter = std::slice::Iter<'a, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
