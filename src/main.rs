mod config;
mod duration;
mod glyphs;
mod render;
mod screen;
mod session;
mod timer;

use std::io;
use std::sync::mpsc;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use config::{Cli, Config};
use screen::LiveTerminal;
use timer::{InterruptibleSleep, Outcome};

fn main() -> Result<()> {
    // Invalid arguments exit here with status 2, before the terminal is touched
    let config = Config::from(Cli::parse());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Ctrl-C cancels the countdown instead of killing the process, so the
    // terminal always gets restored.
    let (interrupt_tx, interrupt_rx) = mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = interrupt_tx.send(());
    })
    .context("failed to install Ctrl-C handler")?;

    enable_ansi_escape_codes();

    let mut sleeper = InterruptibleSleep::new(interrupt_rx);
    let outcome = timer::run(
        io::stdout().lock(),
        &LiveTerminal,
        &mut sleeper,
        config.duration_secs,
        config.tick,
    )
    .context("countdown failed")?;

    if outcome == Outcome::Completed {
        debug!("countdown of {}s complete", config.duration_secs);
    }
    Ok(())
}

#[cfg(windows)]
fn enable_ansi_escape_codes() {
    if !crossterm::ansi_support::supports_ansi() {
        log::warn!("console does not support ANSI escape codes");
    }
}

#[cfg(not(windows))]
fn enable_ansi_escape_codes() {}
