//! Symbolic key tokens.
//!
//! This is the only vocabulary widgets see. Escape-sequence decoding
//! happens before a key reaches a container.

/// One logical key press.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A single character.
    Char(char),
    /// Several characters delivered at once (bracketed paste).
    Text(String),
    /// Enter/Return key.
    Enter,
    /// Tab key.
    Tab,
    /// Backtab (Shift+Tab).
    BackTab,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Escape key.
    Esc,
}

impl Key {
    /// Check if this key moves focus between widgets.
    pub const fn is_navigation(&self) -> bool {
        matches!(self, Self::Tab | Self::BackTab)
    }

    /// Split a string into one [`Key::Char`] per character.
    ///
    /// Handy for scripting keystrokes: `Key::chars("John")`.
    pub fn chars(text: &str) -> impl Iterator<Item = Self> + '_ {
        text.chars().map(Self::Char)
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chars() {
        let keys: Vec<Key> = Key::chars("ab").collect();
        assert_eq!(keys, vec![Key::Char('a'), Key::Char('b')]);
    }

    #[test]
    fn test_navigation() {
        assert!(Key::Tab.is_navigation());
        assert!(Key::BackTab.is_navigation());
        assert!(!Key::Enter.is_navigation());
    }
}
