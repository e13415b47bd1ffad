//! Full-screen repaint of a block of text, centered in the terminal.

use std::io::{self, Write};

use crossterm::tty::IsTty;
use log::debug;

/// Clears the screen and homes the cursor.
pub const CLEAR: &str = "\x1b[H\x1b[J";

/// Used when the size cannot be queried, e.g. when stdout is not a terminal.
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Source of the current terminal dimensions as `(columns, rows)`.
pub trait TerminalSize {
    fn size(&self) -> io::Result<(u16, u16)>;
}

/// Queries the terminal on every call when stdout is one.
pub struct LiveTerminal;

impl TerminalSize for LiveTerminal {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok(stdout_size(io::stdout().is_tty(), crossterm::terminal::size))
    }
}

/// Size of the terminal stdout is attached to, or [`FALLBACK_SIZE`].
///
/// `query` is only consulted when stdout is a terminal, so redirected output
/// is laid out for 80x24 regardless of any controlling terminal.
fn stdout_size<F>(stdout_is_tty: bool, query: F) -> (u16, u16)
where
    F: FnOnce() -> io::Result<(u16, u16)>,
{
    if !stdout_is_tty {
        return FALLBACK_SIZE;
    }
    match query() {
        Ok(size) => size,
        Err(e) => {
            debug!("terminal size unavailable ({e}), using {FALLBACK_SIZE:?}");
            FALLBACK_SIZE
        }
    }
}

/// Left and top padding needed to center `lines` in a `columns` x `rows` screen.
///
/// Every line gets the same left margin, measured from the widest line.
/// Both values clamp at zero when the content does not fit.
pub fn padding<S: AsRef<str>>(columns: u16, rows: u16, lines: &[S]) -> (usize, usize) {
    let widest = lines
        .iter()
        .map(|line| line.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    let left = usize::from(columns).saturating_sub(widest) / 2;
    let top = usize::from(rows).saturating_sub(lines.len() + 2) / 2;
    (left, top)
}

pub fn paint<W, T, S>(out: &mut W, terminal: &T, lines: &[S]) -> io::Result<()>
where
    W: Write,
    T: TerminalSize + ?Sized,
    S: AsRef<str>,
{
    let (columns, rows) = terminal.size()?;
    let (left, top) = padding(columns, rows, lines);

    let margin = " ".repeat(left);
    let mut screen = String::from(CLEAR);
    screen.push_str(&"\n".repeat(top));
    for line in lines {
        screen.push_str(&margin);
        screen.push_str(line.as_ref());
        screen.push('\n');
    }

    out.write_all(screen.as_bytes())?;
    out.flush()
}
