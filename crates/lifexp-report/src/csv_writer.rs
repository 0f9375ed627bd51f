//! Comma-separated output for the cleaned long-format table.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use lifexp_model::{LongTable, OUTPUT_COLUMNS};
use lifexp_transform::format_numeric;

/// Render the cleaned table as CSV text: the fixed
/// `unit,sex,age,region,year,value` header plus one row per record.
pub fn render_long_csv(table: &LongTable) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(OUTPUT_COLUMNS)
        .context("write csv header")?;
    for record in &table.records {
        writer
            .write_record([
                record.unit.as_str(),
                record.sex.as_str(),
                record.age.as_str(),
                record.region.as_str(),
                &record.year.to_string(),
                &format_numeric(record.value),
            ])
            .context("write csv record")?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| error.into_error())
        .context("flush csv buffer")?;
    String::from_utf8(bytes).context("csv output is not valid UTF-8")
}

/// Write the cleaned table to `path`, creating intermediate directories.
///
/// Returns the written path.
pub fn write_long_csv(path: &Path, table: &LongTable) -> Result<PathBuf> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    let rendered = render_long_csv(table)?;
    fs::write(path, rendered).with_context(|| format!("write csv: {}", path.display()))?;
    Ok(path.to_path_buf())
}
