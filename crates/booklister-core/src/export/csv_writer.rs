/// CSV serialisation of a [`ResultTable`].
///
/// Header comes from the serde names on `FileRecord`; quoting is minimal and
/// rows end in `\n` so reports are byte-identical across platforms.
use crate::error::ExportError;
use crate::model::ResultTable;
use std::io;
use std::path::Path;

/// The header row every report starts with.
pub const CSV_HEADER: [&str; 4] = ["Subfolder", "Filename", "Filesize (MB)", "Filepath"];

fn builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder
        .has_headers(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary);
    builder
}

/// Header plus one row per record. The caller flushes.
fn write_records<W: io::Write>(
    wtr: &mut csv::Writer<W>,
    table: &ResultTable,
) -> Result<(), csv::Error> {
    if table.is_empty() {
        // serde only emits the header alongside the first record.
        wtr.write_record(CSV_HEADER)?;
    }
    for record in table {
        wtr.serialize(record)?;
    }
    Ok(())
}

/// Serialise `table` into any writer.
pub fn write_table<W: io::Write>(table: &ResultTable, writer: W) -> Result<(), csv::Error> {
    let mut wtr = builder().from_writer(writer);
    write_records(&mut wtr, table)?;
    wtr.flush()?;
    Ok(())
}

/// Create or truncate `path` and write `table` to it.
pub fn write_table_to_path(table: &ResultTable, path: &Path) -> Result<(), ExportError> {
    let mut wtr = builder()
        .from_path(path)
        .map_err(|source| ExportError::Create {
            path: path.to_path_buf(),
            source,
        })?;
    write_records(&mut wtr, table).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    wtr.flush().map_err(|source| ExportError::Flush {
        path: path.to_path_buf(),
        source,
    })
}
