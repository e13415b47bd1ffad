//! Command-line arguments and the runtime settings derived from them
use std::time::Duration;

use clap::Parser;

use crate::duration;

/// How long each frame stays on screen.
pub const TICK: Duration = Duration::from_secs(1);

/// Countdown from the given duration to 0.
#[derive(Parser, Debug)]
#[command(
    name = "countdown",
    version,
    after_help = "Examples of DURATION:\n  5m     (5 minutes)\n  45s    (45 seconds)\n  2m30s  (2 minutes and 30 seconds)"
)]
pub struct Cli {
    /// A number followed by m or s for minutes or seconds, e.g. 2m30s
    #[arg(value_name = "DURATION", value_parser = duration::parse)]
    pub duration: u64,
}

#[derive(Debug)]
pub struct Config {
    pub duration_secs: u64,
    pub tick: Duration,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            duration_secs: cli.duration,
            tick: TICK,
        }
    }
}
