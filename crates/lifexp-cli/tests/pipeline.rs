//! End-to-end pipeline tests: raw TSV in, cleaned CSV out.

use std::fs;
use std::path::Path;

use lifexp_cli::pipeline::{
    CleanConfig, DEFAULT_REGION, RAW_FILENAME, SampleConfig, run_clean, run_sample,
};

const RAW_FIXTURE: &str = "unit,sex,age,geo\\time\t2019 \t2020\n\
                           YR,F,Y65,PT\t80.1\t: \n\
                           YR,M,Y65,PT\t74.2 e\t-\n\
                           YR,T,Y65,FR\t82.0\t82.3\n";

const EXPECTED_PT: &str = "unit,sex,age,region,year,value\n\
                           YR,F,Y65,PT,2019,80.1\n\
                           YR,M,Y65,PT,2019,74.2\n";

fn write_raw(data_dir: &Path) {
    fs::create_dir_all(data_dir).expect("create data dir");
    fs::write(data_dir.join(RAW_FILENAME), RAW_FIXTURE).expect("write raw fixture");
}

#[test]
fn clean_writes_expected_csv_for_default_region() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data_dir = dir.path().join("data");
    write_raw(&data_dir);

    let config = CleanConfig::for_data_dir(&data_dir, DEFAULT_REGION);
    let summary = run_clean(&config).expect("run clean");

    assert_eq!(summary.region, "PT");
    assert_eq!(summary.input_rows, 3);
    assert_eq!(summary.year_columns, 2);
    assert_eq!(summary.output_records, 2);
    assert_eq!(summary.output, data_dir.join("pt_life_expectancy.csv"));
    assert_eq!(summary.cleaned.record_count(), 2);

    let written = fs::read_to_string(&summary.output).expect("read output");
    assert_eq!(written, EXPECTED_PT);
}

#[test]
fn clean_with_non_matching_region_writes_header_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data_dir = dir.path().join("data");
    write_raw(&data_dir);

    let config = CleanConfig::for_data_dir(&data_dir, "ES");
    let summary = run_clean(&config).expect("run clean");
    assert_eq!(summary.output_records, 0);

    let written = fs::read_to_string(&summary.output).expect("read output");
    assert_eq!(written, "unit,sex,age,region,year,value\n");
}

#[test]
fn clean_fails_fast_on_missing_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data_dir = dir.path().join("data");
    fs::create_dir_all(&data_dir).expect("create data dir");

    let config = CleanConfig::for_data_dir(&data_dir, DEFAULT_REGION);
    let error = run_clean(&config).expect_err("missing input");
    assert!(error.to_string().contains("load raw dataset"));
    // No partial output.
    assert!(!data_dir.join("pt_life_expectancy.csv").exists());
}

#[test]
fn clean_aborts_without_output_on_malformed_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data_dir = dir.path().join("data");
    fs::create_dir_all(&data_dir).expect("create data dir");
    fs::write(
        data_dir.join(RAW_FILENAME),
        "metadata\t2019\nYR,F,Y65\t80.1\n",
    )
    .expect("write raw fixture");

    let config = CleanConfig::for_data_dir(&data_dir, DEFAULT_REGION);
    assert!(run_clean(&config).is_err());
    assert!(!data_dir.join("pt_life_expectancy.csv").exists());
}

#[test]
fn sample_produces_raw_and_expected_fixtures() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data_dir = dir.path().join("data");
    write_raw(&data_dir);

    let config = SampleConfig {
        input: data_dir.join(RAW_FILENAME),
        fixtures_dir: data_dir.join("fixtures"),
        region: "PT".to_string(),
        rows_per_side: 1,
    };
    let summary = run_sample(&config).expect("run sample");

    assert_eq!(summary.matching_rows, 1);
    assert_eq!(summary.non_matching_rows, 1);
    assert_eq!(summary.expected_records, 1);

    let sample = fs::read_to_string(&summary.sample_path).expect("read sample fixture");
    let mut lines = sample.lines();
    assert_eq!(lines.next(), Some("unit,sex,age,geo\\time\t2019 \t2020"));
    assert_eq!(sample.lines().count(), 3);

    let expected = fs::read_to_string(&summary.expected_path).expect("read expected fixture");
    assert_eq!(
        expected,
        "unit,sex,age,region,year,value\nYR,F,Y65,PT,2019,80.1\n"
    );
}
