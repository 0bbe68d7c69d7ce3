/// Size formatting utilities.
///
/// All internal sizes are `u64` bytes. The CSV column is produced with
/// integer arithmetic so the rendered string never depends on float
/// formatting; floating point is only used for the human-readable log form.

/// Bytes per megabyte as used by the report (binary MiB).
pub const BYTES_PER_MB: u64 = 1_048_576;

/// Format a byte count as megabytes with exactly two decimals.
///
/// `bytes / 1_048_576` rounded half-to-even at the second decimal, e.g.
/// `1_048_576 -> "1.00"`, `131_072 -> "0.12"`, `0 -> "0.00"`.
pub fn format_megabytes(bytes: u64) -> String {
    let scaled = u128::from(bytes) * 100;
    let divisor = u128::from(BYTES_PER_MB);
    let mut hundredths = scaled / divisor;
    let remainder = scaled % divisor;

    // Exact ties go to the even neighbour.
    let twice = remainder * 2;
    if twice > divisor || (twice == divisor && hundredths % 2 == 1) {
        hundredths += 1;
    }

    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

/// Format a byte count into a human-readable string with appropriate unit.
///
/// Uses binary units (KiB = 1024) but labels them with common short forms
/// (KB, MB, GB, TB).
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;
    const TB: f64 = GB * 1024.0;

    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else if b < GB {
        format!("{:.1} MB", b / MB)
    } else if b < TB {
        format!("{:.2} GB", b / GB)
    } else {
        format!("{:.2} TB", b / TB)
    }
}

/// Format a file count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
