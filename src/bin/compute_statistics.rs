use std::process::ExitCode;

use clap::Parser;

use report_tools::cli::{run_main, InputFiles};
use report_tools::pipeline::StatisticsTool;

/// Count, mean, median, mode, variance and standard deviation of each file's numbers.
#[derive(Debug, Parser)]
#[command(name = "compute_statistics", version)]
struct Cli {
    #[command(flatten)]
    input: InputFiles,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    run_main(StatisticsTool::default(), &cli.input.files)
}
