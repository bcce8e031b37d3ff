use clap::Parser;
use dirsort::cli::{Cli, run};
use dirsort::output::OutputFormatter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        OutputFormatter::error(&e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
