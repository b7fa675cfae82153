//! Decoder: Turn crossterm terminal events into [`Key`] tokens.
//!
//! Release/repeat events, mouse, focus and resize events produce nothing.
//! Ctrl+C is not a key: it is reported as an interrupt so the container
//! can paint its cancelled state. A bracketed paste becomes one
//! [`Key::Text`].

use super::key::Key;
use crossterm::event::{self, Event, KeyEventKind, KeyModifiers};

/// Outcome of decoding a single terminal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// A key the widgets understand.
    Key(Key),
    /// The user asked to abort (Ctrl+C).
    Interrupt,
    /// Nothing a widget cares about.
    Skip,
}

/// Convert a crossterm event to a [`Decoded`] token.
pub fn decode_event(event: Event) -> Decoded {
    match event {
        Event::Key(key_event) => {
            // Only process key press events (not release or repeat)
            if key_event.kind != KeyEventKind::Press {
                return Decoded::Skip;
            }

            let control = key_event.modifiers.contains(KeyModifiers::CONTROL);
            if control && matches!(key_event.code, event::KeyCode::Char('c' | 'C')) {
                return Decoded::Interrupt;
            }

            // Other control/alt chords are not text
            if let event::KeyCode::Char(_) = key_event.code {
                if control || key_event.modifiers.contains(KeyModifiers::ALT) {
                    return Decoded::Skip;
                }
            }

            convert_key_code(key_event.code).map_or(Decoded::Skip, Decoded::Key)
        }

        Event::Paste(text) => Decoded::Key(Key::Text(text)),

        _ => Decoded::Skip,
    }
}

/// Convert crossterm `KeyCode` to our [`Key`].
fn convert_key_code(code: event::KeyCode) -> Option<Key> {
    Some(match code {
        event::KeyCode::Char(c) => Key::Char(c),
        event::KeyCode::Backspace => Key::Backspace,
        event::KeyCode::Enter => Key::Enter,
        event::KeyCode::Left => Key::Left,
        event::KeyCode::Right => Key::Right,
        event::KeyCode::Up => Key::Up,
        event::KeyCode::Down => Key::Down,
        event::KeyCode::Home => Key::Home,
        event::KeyCode::End => Key::End,
        event::KeyCode::Tab => Key::Tab,
        event::KeyCode::BackTab => Key::BackTab,
        event::KeyCode::Delete => Key::Delete,
        event::KeyCode::Esc => Key::Esc,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_decode_printable() {
        assert_eq!(
            decode_event(press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Decoded::Key(Key::Char('a'))
        );
        assert_eq!(
            decode_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Decoded::Key(Key::Char('A'))
        );
    }

    #[test]
    fn test_decode_ctrl_c_is_interrupt() {
        assert_eq!(
            decode_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Decoded::Interrupt
        );
        assert_eq!(
            decode_event(press(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            Decoded::Skip
        );
    }

    #[test]
    fn test_decode_navigation() {
        assert_eq!(
            decode_event(press(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Decoded::Key(Key::BackTab)
        );
        assert_eq!(
            decode_event(press(KeyCode::Delete, KeyModifiers::NONE)),
            Decoded::Key(Key::Delete)
        );
        assert_eq!(decode_event(press(KeyCode::F(1), KeyModifiers::NONE)), Decoded::Skip);
    }

    #[test]
    fn test_decode_release_skipped() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(decode_event(event), Decoded::Skip);
    }

    #[test]
    fn test_decode_paste() {
        assert_eq!(
            decode_event(Event::Paste("hi".into())),
            Decoded::Key(Key::Text("hi".into()))
        );
        assert_eq!(decode_event(Event::FocusGained), Decoded::Skip);
    }
}
