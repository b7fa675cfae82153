//! Terminal module: Escape-sequence output and the key/byte backend seam.
//!
//! This module contains:
//! - [`OutputBuffer`]: accumulates ANSI sequences for one write
//! - [`Backend`]: blocking key source + byte sink + width
//! - [`CrosstermBackend`]: the real terminal
//! - [`ScriptedBackend`]: canned keys and captured output, for tests and demos

mod crossterm_backend;
mod output;
mod scripted;

pub use crossterm_backend::CrosstermBackend;
pub use output::OutputBuffer;
pub use scripted::ScriptedBackend;

use crate::error::Result;
use crate::input::Key;

/// Width assumed when the terminal cannot report one.
pub const DEFAULT_WIDTH: u16 = 80;

/// Everything the render loop needs from a terminal.
///
/// `read_key` is the only suspension point of an interaction. It blocks
/// until one key arrives and reports Ctrl+C as [`Error::Interrupted`].
///
/// [`Error::Interrupted`]: crate::Error::Interrupted
pub trait Backend {
    /// Block until one logical key is available.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Interrupted`] on Ctrl+C, or an I/O /
    /// input-closed error when no key can be produced.
    fn read_key(&mut self) -> Result<Key>;

    /// Write a chunk of bytes and flush it.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying sink fails.
    fn write_all(&mut self, bytes: &[u8]) -> Result<()>;

    /// Current terminal width in columns.
    fn width(&self) -> u16;

    /// Called once before the first key of an interaction is read.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be prepared.
    fn begin_interaction(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called once after an interaction ends, successfully or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be restored.
    fn end_interaction(&mut self) -> Result<()> {
        Ok(())
    }
}
