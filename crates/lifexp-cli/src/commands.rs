use anyhow::Result;

use crate::cli::{CleanArgs, SampleArgs};
use crate::pipeline::{
    CleanConfig, CleanSummary, SampleConfig, SampleSummary, run_clean, run_sample,
};

pub fn clean(args: &CleanArgs) -> Result<CleanSummary> {
    let mut config = CleanConfig::for_data_dir(&args.data_dir, &args.region);
    if let Some(input) = &args.input {
        config.input = input.clone();
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    run_clean(&config)
}

pub fn sample(args: &SampleArgs) -> Result<SampleSummary> {
    let config = SampleConfig {
        input: args.data_dir.join(crate::pipeline::RAW_FILENAME),
        fixtures_dir: args
            .fixtures_dir
            .clone()
            .unwrap_or_else(|| args.data_dir.join("fixtures")),
        region: args.region.clone(),
        rows_per_side: args.rows_per_side,
    };
    run_sample(&config)
}
