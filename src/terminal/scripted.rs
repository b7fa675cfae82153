//! `ScriptedBackend`: A backend that replays canned keys and records output.
//!
//! # Example
//!
//! ```
//! use rivet::{Key, ScriptedBackend};
//!
//! let backend = ScriptedBackend::new()
//!     .type_text("John")
//!     .press(Key::Enter);
//! assert_eq!(backend.keys_remaining(), 5);
//! ```

use super::{Backend, DEFAULT_WIDTH};
use crate::error::{Error, Result};
use crate::input::Key;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Step {
    Key(Key),
    Interrupt,
}

/// Canned key source plus an in-memory byte sink.
#[derive(Debug, Clone)]
pub struct ScriptedBackend {
    steps: VecDeque<Step>,
    output: Vec<u8>,
    width: u16,
    interactions: usize,
}

impl ScriptedBackend {
    /// An empty script at the default width.
    pub fn new() -> Self {
        Self {
            steps: VecDeque::new(),
            output: Vec::new(),
            width: DEFAULT_WIDTH,
            interactions: 0,
        }
    }

    /// Pretend the terminal is `width` columns wide.
    #[must_use]
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width.max(1);
        self
    }

    /// Queue one key per character of `text`.
    #[must_use]
    pub fn type_text(mut self, text: &str) -> Self {
        self.steps.extend(Key::chars(text).map(Step::Key));
        self
    }

    /// Queue a single key.
    #[must_use]
    pub fn press(mut self, key: Key) -> Self {
        self.steps.push_back(Step::Key(key));
        self
    }

    /// Queue a Ctrl+C.
    #[must_use]
    pub fn interrupt(mut self) -> Self {
        self.steps.push_back(Step::Interrupt);
        self
    }

    /// Keys (and interrupts) not consumed yet.
    pub fn keys_remaining(&self) -> usize {
        self.steps.len()
    }

    /// Every byte written so far.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Output decoded as UTF-8, replacing invalid sequences.
    pub fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Drop the captured output.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Number of interactions started on this backend.
    pub const fn interactions(&self) -> usize {
        self.interactions
    }
}

impl Default for ScriptedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for ScriptedBackend {
    fn read_key(&mut self) -> Result<Key> {
        match self.steps.pop_front() {
            Some(Step::Key(key)) => Ok(key),
            Some(Step::Interrupt) => Err(Error::Interrupted),
            None => Err(Error::InputClosed),
        }
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.output.extend_from_slice(bytes);
        Ok(())
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn begin_interaction(&mut self) -> Result<()> {
        self.interactions += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order() {
        let mut backend = ScriptedBackend::new().type_text("ab").press(Key::Enter).interrupt();

        assert_eq!(backend.read_key().unwrap(), Key::Char('a'));
        assert_eq!(backend.read_key().unwrap(), Key::Char('b'));
        assert_eq!(backend.read_key().unwrap(), Key::Enter);
        assert!(matches!(backend.read_key(), Err(Error::Interrupted)));
        assert!(matches!(backend.read_key(), Err(Error::InputClosed)));
    }

    #[test]
    fn test_captures_output() {
        let mut backend = ScriptedBackend::new().with_width(0);
        backend.write_all(b"hello").unwrap();
        assert_eq!(backend.output_text(), "hello");
        assert_eq!(backend.width(), 1);
        backend.clear_output();
        assert!(backend.output().is_empty());
    }
}
