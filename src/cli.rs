//! Shared entrypoint for the command-line binaries.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Args;

use crate::ingestion::{ReportObserver, StdOutObserver};
use crate::pipeline::{PipelineOptions, ReportPipeline, ReportTool};

/// Positional input files shared by every binary.
#[derive(Debug, Clone, Args)]
pub struct InputFiles {
    /// Files to process, one value per line.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Run `tool` over `files` with stdout diagnostics and map the outcome to an exit code.
///
/// Skipped files do not affect the exit code; [`crate::ReportError::NoValidFiles`] and write
/// failures do.
pub fn run_main<T: ReportTool>(tool: T, files: &[PathBuf]) -> ExitCode {
    let observer: Arc<dyn ReportObserver> = Arc::new(StdOutObserver);
    let pipeline = ReportPipeline::new(
        tool,
        PipelineOptions {
            observer: Some(observer),
            ..Default::default()
        },
    );

    let mut console = io::stdout().lock();
    match pipeline.run(files, &mut console) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
