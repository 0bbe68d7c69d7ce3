/// Data model for scan results.
///
/// Re-exports the record/table types and the size formatting helpers.
pub mod record;
pub mod size;

pub use record::{FileRecord, ResultTable, ROOT_SUBFOLDER};
pub use size::{format_count, format_megabytes, format_size};
