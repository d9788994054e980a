use std::process::ExitCode;

use clap::Parser;
use loop_runner::cli;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match cli.run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("loop-runner: {err:#}");
            ExitCode::FAILURE
        }
    }
}
