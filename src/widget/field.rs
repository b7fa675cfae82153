//! `TextField`: The single-line editing state machine.
//!
//! Owns a text buffer and a cursor. The cursor is stored as a byte offset
//! that always sits on a char boundary within `[0, text.len()]`.

use crate::input::Key;
use unicode_width::UnicodeWidthStr;

/// Editable single-line text with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    /// Byte offset of the cursor.
    cursor: usize,
}

impl TextField {
    /// An empty field.
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the field is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Cursor position in characters, always within `[0, len()]`.
    pub fn cursor(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }

    /// Display column of the cursor.
    pub fn cursor_column(&self) -> usize {
        UnicodeWidthStr::width(&self.text[..self.cursor])
    }

    /// Replace the content, moving the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.cursor = 0;
        self.insert_str(text);
    }

    /// Empty the field.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Apply one key. Returns `true` if the key was an editing key.
    ///
    /// Up and Down are consumed without effect; Enter, Tab and the
    /// remaining keys are left to the caller.
    pub fn handle_key(&mut self, key: &Key) -> bool {
        match key {
            Key::Char(c) => {
                self.insert_char(*c);
                true
            }
            Key::Text(text) => {
                self.insert_str(text);
                true
            }
            Key::Backspace => {
                self.backspace();
                true
            }
            Key::Delete => {
                self.delete();
                true
            }
            Key::Left => {
                self.cursor_left();
                true
            }
            Key::Right => {
                self.cursor_right();
                true
            }
            Key::Home => {
                self.cursor = 0;
                true
            }
            Key::End => {
                self.cursor = self.text.len();
                true
            }
            Key::Up | Key::Down => true,
            _ => false,
        }
    }

    /// Insert a character at the cursor. Control characters are ignored.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert every printable character of `text` at the cursor.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            self.insert_char(c);
        }
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.text.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    /// Move cursor left.
    pub fn cursor_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    /// Move cursor right.
    pub fn cursor_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .last()
            .map_or(0, |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut field = TextField::new();
        field.insert_char('H');
        field.insert_char('i');
        assert_eq!(field.text(), "Hi");
        assert_eq!(field.cursor(), 2);

        field.backspace();
        assert_eq!(field.text(), "H");
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn test_mid_string_edit() {
        let mut field = TextField::new();
        field.set_text("secret");
        field.cursor_left();
        field.cursor_left();
        field.insert_char('X');
        assert_eq!(field.text(), "secrXet");
        assert_eq!(field.cursor(), 5);

        field.delete();
        assert_eq!(field.text(), "secrXt");
        assert_eq!(field.cursor(), 5);
    }

    #[test]
    fn test_cursor_clamped() {
        let mut field = TextField::new();
        field.cursor_left();
        field.backspace();
        assert_eq!(field.cursor(), 0);

        field.set_text("ab");
        field.cursor_right();
        field.delete();
        assert_eq!(field.cursor(), 2);
        assert_eq!(field.text(), "ab");
    }

    #[test]
    fn test_paste_filters_control_chars() {
        let mut field = TextField::new();
        assert!(field.handle_key(&Key::Text("a\u{7}b\nc".into())));
        assert_eq!(field.text(), "abc");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn test_up_down_are_noops() {
        let mut field = TextField::new();
        field.set_text("abc");
        field.cursor_left();
        assert!(field.handle_key(&Key::Up));
        assert!(field.handle_key(&Key::Down));
        assert_eq!(field.cursor(), 2);
        assert!(!field.handle_key(&Key::Enter));
        assert!(!field.handle_key(&Key::Tab));
    }

    #[test]
    fn test_wide_char_column() {
        let mut field = TextField::new();
        field.set_text("日本");
        assert_eq!(field.cursor(), 2);
        assert_eq!(field.cursor_column(), 4);
        field.handle_key(&Key::Home);
        assert_eq!(field.cursor_column(), 0);
        field.handle_key(&Key::End);
        assert_eq!(field.cursor(), 2);
    }
}
