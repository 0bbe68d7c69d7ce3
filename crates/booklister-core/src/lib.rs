/// booklister core — scanning, analysis, export and run orchestration.
///
/// This crate contains all business logic with zero terminal I/O.
/// Frontends receive diagnostics as [`events::RunEvent`] values and decide
/// how to present them.
///
/// # Modules
///
/// - [`model`] — `FileRecord` / `ResultTable` and size formatting.
/// - [`scanner`] — Recursive ebook discovery under a single root.
/// - [`analysis`] — Extension allowlist and per-format breakdowns.
/// - [`export`] — Output naming policies and CSV serialisation.
/// - [`config`] — `RunConfig` and its validation / loading.
/// - [`events`] — Diagnostics emitted while a run progresses.
/// - [`pipeline`] — Scan-then-export over every requested root.
pub mod analysis;
pub mod config;
pub mod error;
pub mod events;
pub mod export;
pub mod model;
pub mod pipeline;
pub mod scanner;

pub use config::{FileErrorPolicy, RunConfig};
pub use error::{ConfigError, ExportError, ScanError};
pub use events::RunEvent;
pub use export::NamingPolicy;
pub use model::{FileRecord, ResultTable};
pub use pipeline::{run, RootOutcome, RunSummary};
pub use scanner::{scan, ScanOptions, ScanOutcome};
