use super::explain;
use crate::output;
use crate::types::OutputFormat;
use anyhow::Result;
use calltally_engine::{CsvOptions, PipelinePaths, run_pipeline};

pub fn handle(paths: &PipelinePaths, options: &CsvOptions, format: OutputFormat) -> Result<()> {
    let summary = run_pipeline(paths, options).map_err(explain)?;
    output::print_run_summary(&summary, paths, format)
}
