//! Alternate screen and cursor state for the lifetime of a countdown.

use std::io::{self, Write};

use log::debug;

pub const ENTER_ALT_BUFFER: &str = "\x1b[?1049h";
pub const LEAVE_ALT_BUFFER: &str = "\x1b[?1049l";
pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// RAII guard that owns the output while the alternate screen is active.
///
/// The terminal is restored exactly once: by [`Session::leave`] on the
/// normal path, or on drop when the session ends through an error or a
/// panic.
pub struct Session<W: Write> {
    out: W,
    active: bool,
}

impl<W: Write> Session<W> {
    pub fn enter(mut out: W) -> io::Result<Self> {
        out.write_all(ENTER_ALT_BUFFER.as_bytes())?;
        out.write_all(HIDE_CURSOR.as_bytes())?;
        out.flush()?;
        debug!("entered alternate screen");
        Ok(Self { out, active: true })
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Restores the terminal, reporting any write failure.
    pub fn leave(mut self) -> io::Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.out.write_all(SHOW_CURSOR.as_bytes())?;
        self.out.write_all(LEAVE_ALT_BUFFER.as_bytes())?;
        self.out.flush()?;
        debug!("left alternate screen");
        Ok(())
    }
}

impl<W: Write> Drop for Session<W> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
