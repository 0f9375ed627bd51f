//! Cleaning pipeline with explicit stages: load -> transform -> save.
//!
//! Paths and region are carried by an explicit [`CleanConfig`] value built in
//! the CLI layer; nothing here reads module-level or environment state.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use lifexp_ingest::read_tsv_table;
use lifexp_model::{CompositeKey, LongTable, RawTable};
use lifexp_report::write_long_csv;
use lifexp_transform::transform;

/// Region the zero-argument invocation filters by.
pub const DEFAULT_REGION: &str = "PT";

/// File name of the raw Eurostat extract inside the data directory.
pub const RAW_FILENAME: &str = "eu_life_expectancy_raw.tsv";

/// Explicit configuration for one cleaning run.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub region: String,
}

impl CleanConfig {
    /// Default paths for a data directory: raw TSV in,
    /// `<region>_life_expectancy.csv` out.
    pub fn for_data_dir(data_dir: &Path, region: &str) -> Self {
        Self {
            input: data_dir.join(RAW_FILENAME),
            output: data_dir.join(format!("{}_life_expectancy.csv", region.to_lowercase())),
            region: region.to_string(),
        }
    }
}

/// Result of a cleaning run, including the cleaned table for callers that
/// want more than the written file.
#[derive(Debug)]
pub struct CleanSummary {
    pub region: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub input_rows: usize,
    pub year_columns: usize,
    pub output_records: usize,
    pub cleaned: LongTable,
}

/// Run load -> transform -> save for one region.
///
/// Hard failures (missing input, malformed key, malformed year header) abort
/// before any output file is written.
pub fn run_clean(config: &CleanConfig) -> Result<CleanSummary> {
    let clean_span = info_span!("clean", region = %config.region);
    let _clean_guard = clean_span.enter();
    let clean_start = Instant::now();

    let load_start = Instant::now();
    let raw = info_span!("load")
        .in_scope(|| read_tsv_table(&config.input))
        .with_context(|| format!("load raw dataset {}", config.input.display()))?;
    debug!(
        input = %config.input.display(),
        input_rows = raw.rows.len(),
        year_columns = raw.year_headers().len(),
        duration_ms = load_start.elapsed().as_millis(),
        "load complete"
    );

    let transform_start = Instant::now();
    let cleaned = info_span!("transform")
        .in_scope(|| transform(&raw, &config.region))
        .context("transform raw dataset")?;
    debug!(
        region = %config.region,
        output_records = cleaned.record_count(),
        duration_ms = transform_start.elapsed().as_millis(),
        "transform complete"
    );

    let save_start = Instant::now();
    let written = info_span!("save")
        .in_scope(|| write_long_csv(&config.output, &cleaned))
        .with_context(|| format!("save cleaned table {}", config.output.display()))?;
    debug!(
        output = %written.display(),
        duration_ms = save_start.elapsed().as_millis(),
        "save complete"
    );

    info!(
        region = %config.region,
        input_rows = raw.rows.len(),
        output_records = cleaned.record_count(),
        output = %written.display(),
        duration_ms = clean_start.elapsed().as_millis(),
        "clean complete"
    );

    Ok(CleanSummary {
        region: config.region.clone(),
        input: config.input.clone(),
        output: written,
        input_rows: raw.rows.len(),
        year_columns: raw.year_headers().len(),
        output_records: cleaned.record_count(),
        cleaned,
    })
}

/// Explicit configuration for a fixture-sampling run.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub input: PathBuf,
    pub fixtures_dir: PathBuf,
    pub region: String,
    pub rows_per_side: usize,
}

/// Result of a fixture-sampling run.
#[derive(Debug)]
pub struct SampleSummary {
    pub sample_path: PathBuf,
    pub expected_path: PathBuf,
    pub matching_rows: usize,
    pub non_matching_rows: usize,
    pub expected_records: usize,
}

/// Sample the raw dataset into test fixtures.
///
/// Keeps the first `rows_per_side` raw rows whose composite key names the
/// target region and the first `rows_per_side` that do not, writes the sample
/// as a TSV fixture, then runs the core transform on the sample to produce
/// the expected cleaned CSV fixture.
pub fn run_sample(config: &SampleConfig) -> Result<SampleSummary> {
    let sample_span = info_span!("sample", region = %config.region);
    let _sample_guard = sample_span.enter();

    let raw = read_tsv_table(&config.input)
        .with_context(|| format!("load raw dataset {}", config.input.display()))?;

    let mut sample = RawTable::new(raw.headers.clone());
    let mut matching_rows = 0usize;
    let mut non_matching_rows = 0usize;
    for row in &raw.rows {
        let composite = row.first().map(String::as_str).unwrap_or("");
        let matches = CompositeKey::parse(composite, 0)
            .map(|key| key.region == config.region)
            .unwrap_or(false);
        if matches && matching_rows < config.rows_per_side {
            matching_rows += 1;
            sample.push_row(row.clone());
        } else if !matches && non_matching_rows < config.rows_per_side {
            non_matching_rows += 1;
            sample.push_row(row.clone());
        }
        if matching_rows == config.rows_per_side && non_matching_rows == config.rows_per_side {
            break;
        }
    }

    std::fs::create_dir_all(&config.fixtures_dir).with_context(|| {
        format!("create fixtures directory {}", config.fixtures_dir.display())
    })?;
    let sample_path = config.fixtures_dir.join(RAW_FILENAME);
    write_tsv_table(&sample_path, &sample)?;

    let expected = transform(&sample, &config.region).context("transform sample")?;
    let expected_path = config.fixtures_dir.join(format!(
        "{}_life_expectancy_expected.csv",
        config.region.to_lowercase()
    ));
    write_long_csv(&expected_path, &expected)
        .with_context(|| format!("save expected fixture {}", expected_path.display()))?;

    info!(
        region = %config.region,
        matching_rows,
        non_matching_rows,
        expected_records = expected.record_count(),
        sample = %sample_path.display(),
        expected = %expected_path.display(),
        "fixtures written"
    );

    Ok(SampleSummary {
        sample_path,
        expected_path,
        matching_rows,
        non_matching_rows,
        expected_records: expected.record_count(),
    })
}

fn write_tsv_table(path: &Path, table: &RawTable) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .with_context(|| format!("write tsv: {}", path.display()))?;
    writer
        .write_record(&table.headers)
        .context("write tsv header")?;
    for row in &table.rows {
        writer.write_record(row).context("write tsv row")?;
    }
    writer.flush().context("flush tsv")?;
    Ok(())
}
