//! Countdown loop: one big-digit frame per tick until zero or Ctrl-C
use std::io::{self, Write};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use log::debug;

use crate::render::render;
use crate::screen::{TerminalSize, paint};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Elapsed,
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Interrupted,
}

/// Blocks for one tick, or less if the countdown is cancelled meanwhile.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration) -> Tick;
}

/// Sleeps on a channel fed by the Ctrl-C handler.
pub struct InterruptibleSleep {
    interrupts: Receiver<()>,
}

impl InterruptibleSleep {
    pub fn new(interrupts: Receiver<()>) -> Self {
        Self { interrupts }
    }
}

impl Sleeper for InterruptibleSleep {
    fn sleep(&mut self, duration: Duration) -> Tick {
        match self.interrupts.recv_timeout(duration) {
            Ok(()) => Tick::Interrupted,
            Err(RecvTimeoutError::Timeout) => Tick::Elapsed,
            Err(RecvTimeoutError::Disconnected) => {
                thread::sleep(duration);
                Tick::Elapsed
            }
        }
    }
}

/// Counts down from `total_seconds` to zero inside an alternate-screen session.
///
/// Every frame, including the final `00:00`, is followed by one tick of
/// sleep. The terminal is restored before this returns, whatever the
/// outcome.
pub fn run<W, T, S>(
    out: W,
    terminal: &T,
    sleeper: &mut S,
    total_seconds: u64,
    tick: Duration,
) -> io::Result<Outcome>
where
    W: Write,
    T: TerminalSize + ?Sized,
    S: Sleeper + ?Sized,
{
    let mut session = Session::enter(out)?;
    let outcome = countdown(session.out(), terminal, sleeper, total_seconds, tick)?;
    session.leave()?;
    Ok(outcome)
}

fn countdown<W, T, S>(
    out: &mut W,
    terminal: &T,
    sleeper: &mut S,
    total_seconds: u64,
    tick: Duration,
) -> io::Result<Outcome>
where
    W: Write,
    T: TerminalSize + ?Sized,
    S: Sleeper + ?Sized,
{
    debug!("counting down from {total_seconds}s");
    for remaining in (0..=total_seconds).rev() {
        let frame = render(remaining);
        paint(out, terminal, frame.rows())?;
        if sleeper.sleep(tick) == Tick::Interrupted {
            return Ok(Outcome::Interrupted);
        }
    }
    Ok(Outcome::Completed)
}
