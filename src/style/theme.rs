//! Theme: The color roles shared by widgets and decorations.

use crate::text::{Rgb, Style};

/// Color roles used across the toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Typed text.
    pub text: Rgb,
    /// Placeholder text.
    pub placeholder: Rgb,
    /// Selected menu entry.
    pub selected: Rgb,
    /// Final values shown once an interaction is done.
    pub result: Rgb,
    /// Labels and borders of the focused widget.
    pub active: Rgb,
    /// Validation messages and failed progress.
    pub error: Rgb,
    /// Cancelled widgets.
    pub cancelled: Rgb,
    /// Progress accent; animations are ramps of this color.
    pub progress: Rgb,
    /// Tag column for ordinary widgets.
    pub tag: Style,
    /// Tag column for titles.
    pub tag_title: Style,
    /// Inactive borders.
    pub border: Rgb,
    /// Connecting glyphs of the fancy style.
    pub glyph: Rgb,
    /// Terminal foreground, the base for faded plain text.
    pub foreground: Rgb,
    /// Terminal background, what faded text blends into.
    pub background: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Rgb::WHITE,
            placeholder: Rgb::from_u32(0x9E9E9E),
            selected: Rgb::from_u32(0x5FD75F),
            result: Rgb::from_u32(0xAAAAAA),
            active: Rgb::from_u32(0x5FD75F),
            error: Rgb::from_u32(0xE05252),
            cancelled: Rgb::from_u32(0xE05252),
            progress: Rgb::from_u32(0x893AE3),
            tag: Style::fg(Rgb::WHITE).with_bg(Rgb::from_u32(0x893AE3)).bold(),
            tag_title: Style::fg(Rgb::BLACK).with_bg(Rgb::from_u32(0xA7E3A2)).bold(),
            border: Rgb::from_u32(0x6C6C6C),
            glyph: Rgb::from_u32(0x00AFD7),
            foreground: Rgb::WHITE,
            background: Rgb::BLACK,
        }
    }
}

impl Theme {
    /// Bold label in the active color.
    pub fn active_label(&self) -> Style {
        Style::fg(self.active).bold()
    }

    /// Bold text in the error color.
    pub fn error_label(&self) -> Style {
        Style::fg(self.error).bold()
    }

    /// Placeholder text.
    pub fn placeholder_style(&self) -> Style {
        Style::fg(self.placeholder)
    }

    /// Final value text.
    pub fn result_style(&self) -> Style {
        Style::fg(self.result)
    }
}
