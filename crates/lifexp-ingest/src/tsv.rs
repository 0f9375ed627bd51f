use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use lifexp_model::RawTable;

use crate::error::{IngestError, Result};

/// Strip a UTF-8 BOM from the first header cell, nothing else. Cell values
/// keep their whitespace: only the year/value cleaning stages trim.
fn strip_bom(raw: &str) -> &str {
    raw.strip_prefix('\u{feff}').unwrap_or(raw)
}

/// Read a tab-separated file into a [`RawTable`].
///
/// The first record becomes the header row; every following record becomes a
/// data row padded (or truncated) to the header width. Returns
/// [`IngestError::FileNotFound`] when the path does not exist.
pub fn read_tsv_table(path: &Path) -> Result<RawTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::TsvParse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut records = reader.records();
    let Some(first) = records.next() else {
        return Ok(RawTable::new(Vec::new()));
    };
    let first = first.map_err(|source| IngestError::TsvParse {
        path: path.to_path_buf(),
        source,
    })?;
    let headers: Vec<String> = first
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            if idx == 0 {
                strip_bom(cell).to_string()
            } else {
                cell.to_string()
            }
        })
        .collect();

    let mut table = RawTable::new(headers);
    for record in records {
        let record = record.map_err(|source| IngestError::TsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        // Blank lines are not data rows.
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(table.headers.len());
        for idx in 0..table.headers.len() {
            let value = record.get(idx).unwrap_or("");
            row.push(value.to_string());
        }
        table.push_row(row);
    }
    debug!(
        path = %path.display(),
        column_count = table.headers.len(),
        row_count = table.rows.len(),
        "raw table loaded"
    );
    Ok(table)
}
