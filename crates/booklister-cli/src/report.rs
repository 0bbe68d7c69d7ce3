/// Console output for run events and the optional per-format summary.
use booklister_core::model::{format_count, format_size};
use booklister_core::{RootOutcome, RunEvent, RunSummary};
use std::io::{self, Write};

/// Print one event as its console line.
pub fn write_event<W: Write>(out: &mut W, event: &RunEvent) -> io::Result<()> {
    writeln!(out, "{event}")
}

/// Print per-format totals for every exported root, then a one-line tally.
pub fn write_summary<W: Write>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    for (root, outcome) in &summary.roots {
        let RootOutcome::Exported {
            records,
            total_bytes,
            formats,
            ..
        } = outcome
        else {
            continue;
        };
        writeln!(
            out,
            "{}: {} files, {}",
            root.display(),
            format_count(*records as u64),
            format_size(*total_bytes)
        )?;
        for stats in formats {
            writeln!(
                out,
                "  {:<5} {:>8} files  {}",
                stats.format.label(),
                format_count(stats.file_count),
                format_size(stats.total_size)
            )?;
        }
    }
    writeln!(
        out,
        "Exported {} of {} directories.",
        summary.exported_count(),
        summary.roots.len()
    )
}
