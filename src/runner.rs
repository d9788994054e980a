use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Context;
use tracing::{debug, info};

pub const DEFAULT_LOOPS: u64 = 5;
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);
/// Status the process exits with after printing `done`.
pub const COMPLETION_EXIT_CODE: u8 = 10;

const PROGRESS_PREFIX: &str = "looping...";
const DONE_LINE: &str = "done";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LoopConfig {
    pub loops: u64,
    pub delay: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            loops: DEFAULT_LOOPS,
            delay: DEFAULT_DELAY,
        }
    }
}

impl LoopConfig {
    pub fn with_loops(loops: u64) -> Self {
        Self {
            loops,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LoopSummary {
    pub iterations: u64,
    pub elapsed: Duration,
}

#[derive(Clone, Debug)]
pub struct LoopRunner {
    config: LoopConfig,
}

impl LoopRunner {
    pub fn new(config: LoopConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> LoopConfig {
        self.config
    }

    /// Writes one progress line per iteration, sleeping `delay` after each,
    /// then the `done` line. Every line is flushed as soon as it is written.
    pub fn run<W: Write>(&self, out: &mut W) -> anyhow::Result<LoopSummary> {
        let LoopConfig { loops, delay } = self.config;
        info!(loops, "starting loop");

        let start = Instant::now();
        for index in 0..loops {
            let elapsed = start.elapsed();
            debug!(index, elapsed_secs = elapsed.as_secs_f64(), "iteration");
            write_line(out, &format_progress(elapsed))?;
            std::thread::sleep(delay);
        }
        write_line(out, DONE_LINE)?;

        let elapsed = start.elapsed();
        info!(
            iterations = loops,
            elapsed_secs = elapsed.as_secs_f64(),
            "loop finished"
        );
        Ok(LoopSummary {
            iterations: loops,
            elapsed,
        })
    }
}

/// Renders the progress line for a given elapsed time, e.g. `looping...1.000213`.
pub fn format_progress(elapsed: Duration) -> String {
    format!("{PROGRESS_PREFIX}{:.6}", elapsed.as_secs_f64())
}

/// Extracts the elapsed seconds from a progress line, if it is one.
pub fn parse_progress(line: &str) -> Option<f64> {
    line.strip_prefix(PROGRESS_PREFIX)?.trim().parse().ok()
}

fn write_line<W: Write>(out: &mut W, line: &str) -> anyhow::Result<()> {
    writeln!(out, "{line}").context("failed to write to output")?;
    out.flush().context("failed to flush output")
}
