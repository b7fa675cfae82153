//! `OutputBuffer`: Single-write output buffer for ANSI sequences.
//!
//! The live region only ever moves the cursor relative to where it is,
//! so there is no absolute positioning here. Everything is accumulated
//! and handed to the backend in one write.

use crate::text::{Line, Modifiers, Rgb, Style};
use std::io::Write;

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// All output is accumulated here, then flushed in a single write
/// to prevent terminal flickering.
#[derive(Debug)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical prompt (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Move the cursor up `n` rows. Zero is a no-op.
    #[inline]
    pub fn cursor_up(&mut self, n: usize) {
        if n > 0 {
            let _ = write!(self.data, "\x1b[{n}A");
        }
    }

    /// Move the cursor down `n` rows. Zero is a no-op.
    #[inline]
    pub fn cursor_down(&mut self, n: usize) {
        if n > 0 {
            let _ = write!(self.data, "\x1b[{n}B");
        }
    }

    /// Move the cursor to a 0-based column on the current row.
    #[inline]
    pub fn move_to_column(&mut self, col: usize) {
        let _ = write!(self.data, "\x1b[{}G", col + 1);
    }

    /// Return to column 0.
    #[inline]
    pub fn carriage_return(&mut self) {
        self.data.push(b'\r');
    }

    /// Start a new row at column 0.
    #[inline]
    pub fn newline(&mut self) {
        self.data.extend_from_slice(b"\r\n");
    }

    /// Erase the whole current row.
    #[inline]
    pub fn erase_line(&mut self) {
        self.data.extend_from_slice(b"\x1b[2K");
    }

    /// Hide cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Show cursor.
    #[inline]
    pub fn cursor_show(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25h");
    }

    /// Set foreground color (true color).
    #[inline]
    pub fn set_fg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
    }

    /// Set background color (true color).
    #[inline]
    pub fn set_bg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b);
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Emit SGR sequences for a style. Plain styles emit nothing.
    pub fn set_style(&mut self, style: Style) {
        emit_modifier_set(&mut self.data, style.modifiers);
        if let Some(fg) = style.fg {
            self.set_fg(fg);
        }
        if let Some(bg) = style.bg {
            self.set_bg(bg);
        }
    }

    /// Write a styled line, resetting attributes after every styled span.
    pub fn write_line(&mut self, line: &Line) {
        for span in &line.spans {
            if span.style.is_plain() {
                self.write_str(&span.content);
            } else {
                self.set_style(span.style);
                self.write_str(&span.content);
                self.reset_attrs();
            }
        }
    }

    /// Flush to a writer in a single call.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Emit SGR codes for a set of modifiers.
fn emit_modifier_set(output: &mut Vec<u8>, modifiers: Modifiers) {
    if modifiers.contains(Modifiers::BOLD) {
        output.extend_from_slice(b"\x1b[1m");
    }
    if modifiers.contains(Modifiers::DIM) {
        output.extend_from_slice(b"\x1b[2m");
    }
    if modifiers.contains(Modifiers::ITALIC) {
        output.extend_from_slice(b"\x1b[3m");
    }
    if modifiers.contains(Modifiers::UNDERLINE) {
        output.extend_from_slice(b"\x1b[4m");
    }
    if modifiers.contains(Modifiers::REVERSED) {
        output.extend_from_slice(b"\x1b[7m");
    }
    if modifiers.contains(Modifiers::STRIKETHROUGH) {
        output.extend_from_slice(b"\x1b[9m");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Span;

    #[test]
    fn test_zero_moves_skipped() {
        let mut out = OutputBuffer::new();
        out.cursor_up(0);
        out.cursor_down(0);
        assert!(out.is_empty());

        out.cursor_up(3);
        out.cursor_down(1);
        assert_eq!(out.as_bytes(), b"\x1b[3A\x1b[1B");
    }

    #[test]
    fn test_move_to_column_is_one_based() {
        let mut out = OutputBuffer::new();
        out.move_to_column(0);
        out.move_to_column(9);
        assert_eq!(out.as_bytes(), b"\x1b[1G\x1b[10G");
    }

    #[test]
    fn test_write_line_styles() {
        let mut out = OutputBuffer::new();
        let line = Line::raw("a ").push(Span::styled("b", Style::fg(Rgb::new(1, 2, 3)).bold()));
        out.write_line(&line);
        assert_eq!(out.as_bytes(), b"a \x1b[1m\x1b[38;2;1;2;3mb\x1b[0m");
    }

    #[test]
    fn test_flush_to() {
        let mut out = OutputBuffer::new();
        out.write_str("hi");
        out.newline();
        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"hi\r\n");
        out.clear();
        assert_eq!(out.len(), 0);
    }
}
