/// Analysis modules — ebook format recognition and per-format totals.

pub mod formats;

pub use formats::{format_breakdown, is_ebook_file, EbookFormat, FormatStats};
