/// Scanner module — finds ebook files under a single root.
///
/// The walk is recursive and strictly sequential. Per-entry failures are
/// handled according to [`FileErrorPolicy`]; everything the user should see
/// is reported through the `on_event` sink as a [`RunEvent`].
pub mod walk;

use crate::config::FileErrorPolicy;
use crate::error::ScanError;
use crate::events::RunEvent;
use crate::model::ResultTable;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Knobs for a single scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub on_file_error: FileErrorPolicy,
}

/// Result of a successful scan.
#[derive(Debug)]
pub enum ScanOutcome {
    /// At least one ebook was found; the table is sorted.
    Found(ResultTable),
    /// The tree holds no ebook files at any depth.
    Empty,
}

/// Scan `root` recursively for ebook files.
///
/// Emits `InvalidDirectory` before returning `ScanError::NotADirectory`, and
/// `NoEbooksFound` before returning `ScanOutcome::Empty`.
pub fn scan(
    root: &Path,
    options: &ScanOptions,
    on_event: &mut dyn FnMut(&RunEvent),
) -> Result<ScanOutcome, ScanError> {
    if !root.is_dir() {
        on_event(&RunEvent::InvalidDirectory {
            root: root.to_path_buf(),
        });
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let start = Instant::now();
    debug!("Starting scan of {}", root.display());

    let (records, stats) = walk::collect_records(root, options.on_file_error, on_event)?;

    debug!(
        "Scan of {} complete: {} entries, {} dirs, {} matched, {} skipped in {:?}",
        root.display(),
        stats.entries_seen,
        stats.dirs_seen,
        stats.files_matched,
        stats.files_skipped + stats.dirs_skipped,
        start.elapsed()
    );

    if records.is_empty() {
        on_event(&RunEvent::NoEbooksFound {
            root: root.to_path_buf(),
        });
        return Ok(ScanOutcome::Empty);
    }

    Ok(ScanOutcome::Found(ResultTable::new(root, records)))
}
