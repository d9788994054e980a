use std::io;
use std::process::ExitCode;

use clap::Parser;

use crate::logging;
use crate::runner::{COMPLETION_EXIT_CODE, DEFAULT_LOOPS, LoopConfig, LoopRunner};

#[derive(Parser, Debug)]
#[command(name = "loop-runner")]
#[command(
    about = "Print elapsed time once per second for a number of loops, then exit with status 10",
    version
)]
pub struct Cli {
    #[arg(
        value_name = "LOOPS",
        help = "Number of iterations to run (non-negative integer, default 5)."
    )]
    loops: Option<u64>,
}

impl Cli {
    pub fn loops(&self) -> u64 {
        self.loops.unwrap_or(DEFAULT_LOOPS)
    }

    pub fn run(self) -> anyhow::Result<ExitCode> {
        logging::init_tracing();
        let runner = LoopRunner::new(LoopConfig::with_loops(self.loops()));
        let stdout = io::stdout();
        let mut out = stdout.lock();
        runner.run(&mut out)?;
        Ok(ExitCode::from(COMPLETION_EXIT_CODE))
    }
}
