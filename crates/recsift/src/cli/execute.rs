//! Command execution: run the pipeline and print the result.

use anyhow::Result;
use std::io;

use crate::app::App;
use crate::output::{self, OutputConfig, OutputMode};

/// Run the query held by `app` and print the selected records to stdout.
///
/// The output file is written before anything is printed, so a failed
/// write never leaves a report on screen.
pub async fn execute_query(app: &App, mode: OutputMode, config: &OutputConfig) -> Result<()> {
    let records = app.run().await?;
    tracing::debug!(count = records.len(), mode = ?mode, "Printing results");

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    output::print_records(&mut handle, &records, mode, config)?;
    Ok(())
}
