use crate::cli::args::Cli;
use crate::error::{ProcessingError, Result};
use crate::processors::CityProcessor;
use crate::utils::constants::MISSING_COLUMNS_MESSAGE;
use crate::utils::init_logging;
use anyhow::Context;
use std::io::Write;
use tracing::warn;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref()).context("failed to initialise logging")?;

    let processor = CityProcessor::new(&cli.data_dir);
    let stdout = std::io::stdout();
    execute(&processor, &mut stdout.lock()).with_context(|| {
        format!(
            "failed to merge city lists in {}",
            processor.data_dir().display()
        )
    })
}

/// Run the pipeline and print the report to `out`.
///
/// Missing required columns is reported as a single line and is not an
/// error; every other failure propagates.
pub fn execute(processor: &CityProcessor, out: &mut impl Write) -> Result<()> {
    match processor.run() {
        Ok(outcome) => {
            for line in outcome.report_lines() {
                writeln!(out, "{}", line)?;
            }
            Ok(())
        }
        Err(ProcessingError::MissingColumns(missing)) => {
            warn!(missing = ?missing, "required columns missing, no output written");
            writeln!(out, "{}", MISSING_COLUMNS_MESSAGE)?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}
