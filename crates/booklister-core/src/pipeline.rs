/// Pipeline — scan then export, once per requested root.
///
/// Roots are handled one after another and independently: an invalid root,
/// an aborted scan, an empty result or a failed export only affects that
/// root. Nothing is retried.
use crate::analysis::{format_breakdown, FormatStats};
use crate::config::RunConfig;
use crate::error::ScanError;
use crate::events::RunEvent;
use crate::export;
use crate::model::{format_count, format_size};
use crate::scanner::{self, ScanOptions, ScanOutcome};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What happened to one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootOutcome {
    /// Report written.
    Exported {
        output: PathBuf,
        records: usize,
        total_bytes: u64,
        formats: Vec<FormatStats>,
    },
    /// No ebook files; nothing written.
    Empty,
    /// Root missing or not a directory.
    InvalidDirectory,
    /// Scan aborted under the abort policy.
    ScanFailed { message: String },
    /// Scan succeeded but the report could not be written.
    ExportFailed { output: PathBuf, message: String },
}

/// Per-root outcomes of a whole run, in the order roots were given.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub roots: Vec<(PathBuf, RootOutcome)>,
}

impl RunSummary {
    /// Paths of every report written.
    pub fn outputs(&self) -> Vec<&PathBuf> {
        self.roots
            .iter()
            .filter_map(|(_, outcome)| match outcome {
                RootOutcome::Exported { output, .. } => Some(output),
                _ => None,
            })
            .collect()
    }

    pub fn exported_count(&self) -> usize {
        self.outputs().len()
    }

    /// Roots that failed outright (empty results are not failures).
    pub fn failed_count(&self) -> usize {
        self.roots
            .iter()
            .filter(|(_, outcome)| {
                matches!(
                    outcome,
                    RootOutcome::InvalidDirectory
                        | RootOutcome::ScanFailed { .. }
                        | RootOutcome::ExportFailed { .. }
                )
            })
            .count()
    }
}

/// Run every root in `config` through scan and export.
///
/// The config is not validated here; an empty root list yields an empty
/// summary.
pub fn run(config: &RunConfig, on_event: &mut dyn FnMut(&RunEvent)) -> RunSummary {
    let options = ScanOptions {
        on_file_error: config.on_file_error,
    };
    let mut summary = RunSummary::default();

    for (index, root) in config.roots.iter().enumerate() {
        let outcome = process_root(config, &options, index, root, on_event);
        summary.roots.push((root.clone(), outcome));
    }

    info!(
        "Run complete: {} of {} roots exported, {} failed",
        summary.exported_count(),
        summary.roots.len(),
        summary.failed_count()
    );
    summary
}

fn process_root(
    config: &RunConfig,
    options: &ScanOptions,
    index: usize,
    root: &Path,
    on_event: &mut dyn FnMut(&RunEvent),
) -> RootOutcome {
    let table = match scanner::scan(root, options, on_event) {
        Ok(ScanOutcome::Found(table)) => table,
        Ok(ScanOutcome::Empty) => return RootOutcome::Empty,
        Err(ScanError::NotADirectory(_)) => return RootOutcome::InvalidDirectory,
        Err(err) => {
            warn!("Scan of {} aborted: {err}", root.display());
            let message = err.to_string();
            on_event(&RunEvent::ScanAborted {
                root: root.to_path_buf(),
                message: message.clone(),
            });
            return RootOutcome::ScanFailed { message };
        }
    };

    info!(
        "{}: {} ebook files, {}",
        root.display(),
        format_count(table.len() as u64),
        format_size(table.total_bytes())
    );
    let formats = format_breakdown(&table);
    for stats in &formats {
        info!(
            "  {}: {} files, {}",
            stats.format.label(),
            format_count(stats.file_count),
            format_size(stats.total_size)
        );
    }

    match export::export(&table, index, &config.naming, config.output_dir.as_deref()) {
        Ok(output) => {
            on_event(&RunEvent::Exported {
                root: root.to_path_buf(),
                output: output.clone(),
                records: table.len(),
            });
            RootOutcome::Exported {
                output,
                records: table.len(),
                total_bytes: table.total_bytes(),
                formats,
            }
        }
        Err(err) => {
            warn!("Export of {} failed: {err}", root.display());
            let output = err.path().to_path_buf();
            let message = err.to_string();
            on_event(&RunEvent::ExportFailed {
                root: root.to_path_buf(),
                output: output.clone(),
                message: message.clone(),
            });
            RootOutcome::ExportFailed { output, message }
        }
    }
}
