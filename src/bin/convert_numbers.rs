use std::process::ExitCode;

use clap::Parser;

use report_tools::cli::{run_main, InputFiles};
use report_tools::pipeline::ConversionTool;

/// Binary and hexadecimal forms of each file's integers (decimals are truncated).
#[derive(Debug, Parser)]
#[command(name = "convert_numbers", version)]
struct Cli {
    #[command(flatten)]
    input: InputFiles,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    run_main(ConversionTool, &cli.input.files)
}
