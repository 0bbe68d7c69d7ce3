/// Export module — names and writes one CSV report per scan root.
///
/// - [`NamingPolicy`] decides the output file name.
/// - [`csv_writer`] serialises a [`ResultTable`] with a fixed column order.
pub mod csv_writer;

use crate::error::ExportError;
use crate::model::ResultTable;
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

pub use csv_writer::{write_table, write_table_to_path, CSV_HEADER};

/// Extension appended to every report name.
const CSV_SUFFIX: &str = ".csv";

/// Stem used by [`NamingPolicy::FolderName`] when a root has no final component.
const FALLBACK_FOLDER_NAME: &str = "root";

/// How output CSV files are named.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingPolicy {
    /// `<uuid>.csv`, a fresh v4 UUID per root.
    #[default]
    Random,
    /// `<base>_<index>.csv` with `index` the root's position in the run.
    FixedBase(String),
    /// `<root folder name>.csv`.
    FolderName,
}

impl NamingPolicy {
    /// File name (no directory) for the root at `index` in the current run.
    pub fn file_name(&self, root: &Path, index: usize) -> String {
        match self {
            Self::Random => format!("{}{CSV_SUFFIX}", uuid::Uuid::new_v4()),
            Self::FixedBase(base) => format!("{}_{index}{CSV_SUFFIX}", base_stem(base)),
            Self::FolderName => format!("{}{CSV_SUFFIX}", folder_name(root)),
        }
    }
}

/// Trim `base` and strip every trailing `.csv` (any case).
pub fn base_stem(base: &str) -> &str {
    let mut stem = base.trim();
    while stem.len() >= CSV_SUFFIX.len() {
        let split = stem.len() - CSV_SUFFIX.len();
        match stem.get(split..) {
            Some(tail) if tail.eq_ignore_ascii_case(CSV_SUFFIX) => stem = stem[..split].trim_end(),
            _ => break,
        }
    }
    stem
}

/// Last path component of the root, resolving `.`/`..` through the filesystem
/// when possible.
fn folder_name(root: &Path) -> String {
    let resolved = std::fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    resolved
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name),
            _ => None,
        })
        .last()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_FOLDER_NAME.to_string())
}

/// Write `table` to a CSV named by `naming`.
///
/// The file is created (or truncated) in `output_dir`, or in the working
/// directory when `output_dir` is `None`. Returns the path written.
pub fn export(
    table: &ResultTable,
    index: usize,
    naming: &NamingPolicy,
    output_dir: Option<&Path>,
) -> Result<PathBuf, ExportError> {
    let path = output_path(table.root(), index, naming, output_dir);
    debug!(
        "Exporting {} records for {} to {}",
        table.len(),
        table.root().display(),
        path.display()
    );
    write_table_to_path(table, &path)?;
    Ok(path)
}

/// Path `export` would write to. With `Random` naming every call differs.
pub fn output_path(
    root: &Path,
    index: usize,
    naming: &NamingPolicy,
    output_dir: Option<&Path>,
) -> PathBuf {
    let name = naming.file_name(root, index);
    match output_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}
