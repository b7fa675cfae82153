//! `CrosstermBackend`: Keys from crossterm events, bytes to stdout.

use super::{Backend, DEFAULT_WIDTH};
use crate::error::{Error, Result};
use crate::input::{decode_event, Decoded, Key};
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste};
use crossterm::{execute, terminal};
use std::io::{self, Stdout, Write};

/// Backend for the process's own terminal.
///
/// Raw mode and bracketed paste are only held while an interaction is
/// running, so progress output and plain prints keep the terminal's
/// normal line discipline. Outside a key read Ctrl+C raises SIGINT, which
/// the process-wide [`InterruptFlag`] handler turns into an exit or, while
/// a live region is open, into a cancellation.
///
/// [`InterruptFlag`]: crate::InterruptFlag
#[derive(Debug)]
pub struct CrosstermBackend {
    out: Stdout,
    /// Fixed width overriding what the terminal reports.
    width_override: Option<u16>,
    raw: bool,
}

impl CrosstermBackend {
    /// Create a backend writing to stdout.
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            width_override: None,
            raw: false,
        }
    }

    /// Render for a fixed width instead of the terminal's own.
    #[must_use]
    pub const fn with_width(mut self, width: u16) -> Self {
        self.width_override = Some(width);
        self
    }
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for CrosstermBackend {
    fn read_key(&mut self) -> Result<Key> {
        loop {
            match decode_event(event::read()?) {
                Decoded::Key(key) => return Ok(key),
                Decoded::Interrupt => return Err(Error::Interrupted),
                Decoded::Skip => {}
            }
        }
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.out.write_all(bytes)?;
        self.out.flush()?;
        Ok(())
    }

    fn width(&self) -> u16 {
        self.width_override.unwrap_or_else(|| {
            terminal::size()
                .map(|(w, _)| w)
                .ok()
                .filter(|w| *w > 0)
                .unwrap_or(DEFAULT_WIDTH)
        })
    }

    fn begin_interaction(&mut self) -> Result<()> {
        if !self.raw {
            terminal::enable_raw_mode()?;
            self.raw = true;
            // a paste arrives as one Key::Text instead of a burst of keys
            execute!(self.out, EnableBracketedPaste)?;
        }
        Ok(())
    }

    fn end_interaction(&mut self) -> Result<()> {
        if self.raw {
            self.raw = false;
            execute!(self.out, DisableBracketedPaste)?;
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        // Ensure the terminal is usable again even when unwinding
        if self.raw {
            let _ = execute!(self.out, DisableBracketedPaste);
            let _ = terminal::disable_raw_mode();
        }
    }
}
