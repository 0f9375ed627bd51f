//! The core cleaning transform.
//!
//! Four sequential stages over a fully materialized in-memory table:
//! 1. **Split**: the first column's composite key becomes unit/sex/age/region
//! 2. **Reshape**: one candidate record per (row, year column) pair
//! 3. **Clean**: year header -> i32 (hard failure), cell value -> f64 (missing
//!    on failure)
//! 4. **Filter**: keep the target region, drop missing values
//!
//! Pure and deterministic: no I/O, no shared state, same output for the same
//! input and region.

use tracing::debug;

use lifexp_model::{CompositeKey, LongRecord, LongTable, RawTable};

use crate::error::Result;
use crate::normalization::{clean_value, clean_year};

/// Reshape and clean the raw wide-format table, keeping only records for
/// `target_region`.
///
/// Output order is the reshape traversal order: every year column of row 0
/// (in original column order), then every year column of row 1, and so on.
///
/// # Errors
///
/// Fails on a composite key that does not split into exactly four fields and
/// on a year header that does not parse as an integer. An unparseable cell
/// value is not an error; the record is dropped instead.
pub fn transform(raw: &RawTable, target_region: &str) -> Result<LongTable> {
    let year_headers = raw.year_headers();
    let mut output = LongTable::new();

    for (row_idx, row) in raw.rows.iter().enumerate() {
        let composite = row.first().map(String::as_str).unwrap_or("");
        let key = CompositeKey::parse(composite, row_idx)?;

        for (col_idx, header) in year_headers.iter().enumerate() {
            let year = clean_year(header)?;
            let raw_value = row.get(col_idx + 1).map(String::as_str).unwrap_or("");
            let value = clean_value(raw_value);

            if key.region != target_region {
                continue;
            }
            let Some(value) = value else {
                continue;
            };
            output.push(LongRecord {
                unit: key.unit.clone(),
                sex: key.sex.clone(),
                age: key.age.clone(),
                region: key.region.clone(),
                year,
                value,
            });
        }
    }

    debug!(
        target_region,
        input_rows = raw.rows.len(),
        year_columns = year_headers.len(),
        output_records = output.record_count(),
        "transform complete"
    );
    Ok(output)
}
