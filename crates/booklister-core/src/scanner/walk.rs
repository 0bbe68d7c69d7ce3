/// Serial directory walker using `jwalk`.
///
/// `jwalk` runs with `Parallelism::Serial`, so the whole traversal happens on
/// the calling thread. Entries come back sorted by name, which keeps the
/// order of skip diagnostics stable between runs.
use crate::analysis::is_ebook_file;
use crate::config::FileErrorPolicy;
use crate::error::ScanError;
use crate::events::RunEvent;
use crate::model::{FileRecord, ROOT_SUBFOLDER};
use compact_str::CompactString;
use std::path::Path;
use tracing::warn;

/// Running totals for one walk, used for logging.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkStats {
    pub entries_seen: u64,
    pub dirs_seen: u64,
    pub files_matched: u64,
    pub files_skipped: u64,
    pub dirs_skipped: u64,
}

/// Walk `root` and collect a record for every readable ebook file.
///
/// Records come back in traversal order; sorting is the table's job.
pub fn collect_records(
    root: &Path,
    policy: FileErrorPolicy,
    on_event: &mut dyn FnMut(&RunEvent),
) -> Result<(Vec<FileRecord>, WalkStats), ScanError> {
    let mut records = Vec::new();
    let mut stats = WalkStats::default();

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        stats.entries_seen += 1;

        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                // jwalk errors are directory read failures below the root.
                let path = err
                    .path()
                    .map(|p| p.to_string_lossy().into_owned())
                    .unwrap_or_else(|| root.to_string_lossy().into_owned());
                let message = err.to_string();
                if policy == FileErrorPolicy::Abort {
                    return Err(ScanError::Walk { path, message });
                }
                warn!("Skipping unreadable directory {path}: {message}");
                stats.dirs_skipped += 1;
                on_event(&RunEvent::DirectorySkipped { path, message });
                continue;
            }
        };

        if entry.file_type().is_dir() {
            stats.dirs_seen += 1;
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !is_ebook_file(&file_name) {
            continue;
        }

        let path = entry.path();

        // Follows symlinks, so a dangling link lands in the error arm.
        let size = match std::fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => continue,
            Ok(meta) => meta.len(),
            Err(source) => {
                if policy == FileErrorPolicy::Abort {
                    return Err(ScanError::FileAccess { path, source });
                }
                warn!("Skipping {}: {source}", path.display());
                stats.files_skipped += 1;
                on_event(&RunEvent::FileSkipped {
                    message: source.to_string(),
                    path,
                });
                continue;
            }
        };

        let subfolder = path
            .parent()
            .map(|dir| relative_subfolder(root, dir))
            .unwrap_or_else(|| CompactString::new(ROOT_SUBFOLDER));

        records.push(FileRecord::new(
            subfolder,
            &*file_name,
            path.to_string_lossy().into_owned(),
            size,
        ));
        stats.files_matched += 1;
    }

    Ok((records, stats))
}

/// Path of `dir` relative to `root`, or [`ROOT_SUBFOLDER`] for the root itself.
pub fn relative_subfolder(root: &Path, dir: &Path) -> CompactString {
    match dir.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => CompactString::new(ROOT_SUBFOLDER),
        Ok(rel) => CompactString::new(rel.to_string_lossy()),
        Err(_) => CompactString::new(dir.to_string_lossy()),
    }
}
