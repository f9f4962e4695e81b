use std::process::ExitCode;

use clap::Parser;

use report_tools::cli::{run_main, InputFiles};
use report_tools::pipeline::WordCountTool;

/// Word frequencies of each file, punctuation stripped, case preserved.
#[derive(Debug, Parser)]
#[command(name = "count_words", version)]
struct Cli {
    #[command(flatten)]
    input: InputFiles,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    run_main(WordCountTool::default(), &cli.input.files)
}
