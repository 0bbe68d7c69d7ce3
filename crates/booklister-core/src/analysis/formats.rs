/// Ebook format recognition based on file extensions.
///
/// The allowlist is fixed: pdf, epub, doc, txt, djvu, cbz, cbr. Matching is
/// case-insensitive and never inspects file contents.
use crate::model::ResultTable;
use std::collections::HashMap;

/// The ebook formats recognised by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EbookFormat {
    Pdf,
    Epub,
    Doc,
    Txt,
    Djvu,
    Cbz,
    Cbr,
}

impl EbookFormat {
    /// Every recognised format, in allowlist order.
    pub const ALL: [EbookFormat; 7] = [
        Self::Pdf,
        Self::Epub,
        Self::Doc,
        Self::Txt,
        Self::Djvu,
        Self::Cbz,
        Self::Cbr,
    ];

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Epub => "EPUB",
            Self::Doc => "DOC",
            Self::Txt => "TXT",
            Self::Djvu => "DjVu",
            Self::Cbz => "CBZ",
            Self::Cbr => "CBR",
        }
    }

    /// Lowercase extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Epub => "epub",
            Self::Doc => "doc",
            Self::Txt => "txt",
            Self::Djvu => "djvu",
            Self::Cbz => "cbz",
            Self::Cbr => "cbr",
        }
    }

    /// Map an extension (without the dot, any case) to a format.
    ///
    /// Lowercases into a fixed-size stack buffer; anything longer than the
    /// longest allowlisted extension is rejected up front.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let bytes = ext.as_bytes();
        if bytes.len() > 4 {
            return None;
        }

        let mut lower = [0u8; 4];
        for (dest, &src) in lower.iter_mut().zip(bytes.iter()) {
            *dest = src.to_ascii_lowercase();
        }

        match &lower[..bytes.len()] {
            b"pdf" => Some(Self::Pdf),
            b"epub" => Some(Self::Epub),
            b"doc" => Some(Self::Doc),
            b"txt" => Some(Self::Txt),
            b"djvu" => Some(Self::Djvu),
            b"cbz" => Some(Self::Cbz),
            b"cbr" => Some(Self::Cbr),
            _ => None,
        }
    }

    /// Format of a file name, judged by the text after its last dot.
    ///
    /// A name that is only an extension (`".pdf"`) still matches.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        Self::from_extension(ext)
    }
}

/// `true` if `name` carries one of the allowlisted ebook extensions.
pub fn is_ebook_file(name: &str) -> bool {
    EbookFormat::from_file_name(name).is_some()
}

/// Count and size totals for a single format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatStats {
    pub format: EbookFormat,
    pub total_size: u64,
    pub file_count: u64,
}

/// Compute per-format size and count stats for a result table.
///
/// Sorted by total size descending, ties broken by allowlist order.
pub fn format_breakdown(table: &ResultTable) -> Vec<FormatStats> {
    let mut map: HashMap<EbookFormat, FormatStats> = HashMap::with_capacity(EbookFormat::ALL.len());

    for record in table {
        let Some(format) = EbookFormat::from_file_name(&record.filename) else {
            continue;
        };
        let entry = map.entry(format).or_insert(FormatStats {
            format,
            total_size: 0,
            file_count: 0,
        });
        entry.total_size += record.size_bytes;
        entry.file_count += 1;
    }

    let mut results: Vec<FormatStats> = map.into_values().collect();
    results.sort_by(|a, b| {
        b.total_size
            .cmp(&a.total_size)
            .then_with(|| a.format.cmp(&b.format))
    });
    results
}
