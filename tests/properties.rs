//! Property tests for the editing state machine and the render engine.

use proptest::prelude::*;
use rivet::widget::TextField;
use rivet::{
    Backend, BorderedStyle, Container, Decoration, FancyStyle, Frame, Key, Message, MinimalStyle, ScriptedBackend,
    TaggedStyle, TextInput, Widget,
};
use std::rc::Rc;

fn edit_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        4 => prop::char::range('a', 'z').prop_map(Key::Char),
        1 => Just(Key::Char('é')),
        1 => Just(Key::Char('中')),
        1 => Just(Key::Backspace),
        1 => Just(Key::Delete),
        1 => Just(Key::Left),
        1 => Just(Key::Right),
        1 => Just(Key::Home),
        1 => Just(Key::End),
    ]
}

/// Single-width keys only: a wide glyph at the right edge wraps early.
fn narrow_edit_key() -> impl Strategy<Value = Key> {
    edit_key().prop_filter("single-width", |key| *key != Key::Char('中'))
}

fn style(index: usize) -> Rc<dyn Decoration> {
    match index {
        0 => Rc::new(MinimalStyle::new()),
        1 => Rc::new(TaggedStyle::new("rivet")),
        2 => Rc::new(BorderedStyle::new()),
        _ => Rc::new(FancyStyle::new()),
    }
}

proptest! {
    #[test]
    fn prop_cursor_stays_in_text(keys in prop::collection::vec(edit_key(), 0..64)) {
        let mut field = TextField::new();
        for key in &keys {
            field.handle_key(key);
            prop_assert!(field.cursor() <= field.len());
            prop_assert_eq!(field.len(), field.text().chars().count());
        }
    }

    #[test]
    fn prop_render_is_idempotent(text in "[a-z ]{0,40}", width in 10u16..120, style_index in 0usize..4) {
        let style = style(style_index);
        let mut input = TextInput::new("Name");
        input.set_text(&text);
        let widgets: [&dyn Widget; 1] = [&input];

        let first = Frame::compose(&widgets, &*style, 0, false, true, width);
        let second = Frame::compose(&widgets, &*style, 0, false, true, width);
        prop_assert_eq!(&first.heights, &second.heights);
        prop_assert_eq!(first.cursor_row, second.cursor_row);
        prop_assert_eq!(first.cursor_col, second.cursor_col);
        prop_assert!(first.cursor_row < first.total_rows());
        prop_assert!(first.cursor_col < usize::from(width));
    }

    #[test]
    fn prop_screen_matches_last_frame(
        keys in prop::collection::vec(narrow_edit_key(), 1..32),
        intro in "[a-z]{0,90}",
    ) {
        let mut container = Container::new(Rc::new(MinimalStyle::new()));
        container.push(Message::new(&intro));
        container.push(TextInput::new("Name"));

        let mut backend = keys.iter().cloned().fold(ScriptedBackend::new().with_width(30), ScriptedBackend::press);
        let _ = container.run(&mut backend);

        let field_text = container.widgets()[1].value().unwrap_or_default();
        let frame = container.frame(backend.width());

        let mut parser = vt100::Parser::new(40, backend.width(), 0);
        parser.process(backend.output());
        let screen = parser.screen();

        prop_assert_eq!(screen.cursor_position(), (frame.cursor_row as u16, frame.cursor_col as u16));
        let rows: Vec<String> = screen.rows(0, backend.width()).map(|r| r.trim_end().to_string()).collect();
        let total = frame.total_rows();
        prop_assert!(rows[total..].iter().all(String::is_empty));
        if field_text.chars().all(|c| c.is_ascii()) && !field_text.is_empty() && field_text.len() < 30 {
            prop_assert!(rows.iter().any(|r| r == field_text.trim_end()));
        }
    }
}
