//! Widget trait and the small types every widget shares.
//!
//! A widget is the unit of focus inside a container. It renders its own
//! state into a [`Block`], reports where the cursor belongs inside that
//! block, and reacts to single keys. Decoration and placement on screen
//! are the container's and the style's business.

use crate::input::Key;
use crate::style::{Decoration, Theme};
use crate::text::Block;

/// Position of the terminal cursor inside a rendered block.
///
/// `top` is a 1-based row number (row 1 is the block's first line),
/// `left` a 0-based column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorOffset {
    /// 1-based row within the block.
    pub top: usize,
    /// 0-based column within the row.
    pub left: usize,
}

impl CursorOffset {
    /// First row, first column.
    pub const ORIGIN: Self = Self::new(1, 0);

    /// Create an offset.
    pub const fn new(top: usize, left: usize) -> Self {
        Self { top, left }
    }

    /// Shift down by `rows` and right by `cols`.
    #[must_use]
    pub const fn shifted(self, rows: usize, cols: usize) -> Self {
        Self::new(self.top + rows, self.left + cols)
    }
}

impl Default for CursorOffset {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// Result of the last validation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Validity {
    /// Never validated.
    #[default]
    Unknown,
    /// Passed validation.
    Valid,
    /// Failed validation; styles render it in the error color.
    Invalid,
}

impl Validity {
    /// Check for [`Validity::Invalid`].
    pub const fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Map a boolean check onto valid/invalid.
    pub const fn from_bool(valid: bool) -> Self {
        if valid {
            Self::Valid
        } else {
            Self::Invalid
        }
    }
}

/// What a widget did with a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyOutcome {
    /// Not handled; the container may act on it.
    Ignored,
    /// Handled; re-render and keep going.
    Consumed,
    /// An Enter the widget refuses; focus stays put.
    Reject,
    /// The widget asks the container to finish.
    Submit,
}

/// Variant tag styles use to pick a decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Text input; `inline` puts label and value on one line.
    Input {
        /// Label and value share a row.
        inline: bool,
    },
    /// Single-select menu.
    Menu,
    /// Push button.
    Button,
    /// Progress / log stream.
    Progress,
    /// Static text; `title` marks a heading.
    Message {
        /// Rendered as a heading.
        title: bool,
    },
    /// Container-owned filler (spacer lines); never decorated.
    Raw,
}

/// Everything a widget needs to know to render itself.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Style in effect, for theme colors and log-line fading.
    pub style: &'a dyn Decoration,
    /// The widget has focus.
    pub is_active: bool,
    /// The interaction has finished; render the final state.
    pub done: bool,
    /// Render the widget's own label. Bordered boxes turn this off.
    pub show_label: bool,
    /// Terminal width in columns.
    pub width: u16,
}

impl<'a> RenderContext<'a> {
    /// A context for an inactive, running widget.
    pub fn new(style: &'a dyn Decoration, width: u16) -> Self {
        Self {
            style,
            is_active: false,
            done: false,
            show_label: true,
            width,
        }
    }

    /// Set the focus flag.
    #[must_use]
    pub const fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Set the done flag.
    #[must_use]
    pub const fn done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Hide the widget's own label.
    #[must_use]
    pub const fn without_label(mut self) -> Self {
        self.show_label = false;
        self
    }

    /// The style's color theme.
    pub fn theme(&self) -> &'a Theme {
        self.style.theme()
    }
}

impl std::fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("is_active", &self.is_active)
            .field("done", &self.done)
            .field("show_label", &self.show_label)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

/// A UI element that can be rendered, focused and fed keys.
///
/// Only [`Widget::kind`] and [`Widget::render`] are mandatory; every
/// other capability has a neutral default.
pub trait Widget {
    /// Variant tag used by styles.
    fn kind(&self) -> WidgetKind;

    /// Render the current state.
    ///
    /// The same state and context must always produce the same block.
    fn render(&self, ctx: &RenderContext<'_>) -> Block;

    /// Cursor position inside the block returned by [`Widget::render`]
    /// for the same context.
    fn cursor_offset(&self, _ctx: &RenderContext<'_>) -> CursorOffset {
        CursorOffset::ORIGIN
    }

    /// Key under which the widget's value is collected.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Label or title, used by styles that draw it themselves.
    fn title(&self) -> Option<&str> {
        None
    }

    /// Per-widget tag for the tagged style.
    fn tag(&self) -> Option<&str> {
        None
    }

    /// Whether the blinking cursor is wanted while this widget has focus.
    fn should_show_cursor(&self) -> bool {
        false
    }

    /// Whether Tab can land on this widget.
    fn is_focusable(&self) -> bool {
        true
    }

    /// React to one key.
    fn handle_key(&mut self, _key: &Key) -> KeyOutcome {
        KeyOutcome::Ignored
    }

    /// Focus is leaving this widget.
    fn on_blur(&mut self) {
        self.validate();
    }

    /// Run validation and record the result.
    fn validate(&mut self) -> Validity {
        Validity::Valid
    }

    /// Result of the last validation.
    fn validity(&self) -> Validity {
        Validity::Unknown
    }

    /// Switch to the cancelled state.
    fn cancel(&mut self) {}

    /// Check for the cancelled state.
    fn is_cancelled(&self) -> bool {
        false
    }

    /// Collected value, for widgets that produce one.
    fn value(&self) -> Option<String> {
        None
    }

    /// Whether the rendering changes from frame to frame on its own.
    fn is_animated(&self) -> bool {
        false
    }
}

impl<W: Widget + ?Sized> Widget for &mut W {
    fn kind(&self) -> WidgetKind {
        (**self).kind()
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Block {
        (**self).render(ctx)
    }

    fn cursor_offset(&self, ctx: &RenderContext<'_>) -> CursorOffset {
        (**self).cursor_offset(ctx)
    }

    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn title(&self) -> Option<&str> {
        (**self).title()
    }

    fn tag(&self) -> Option<&str> {
        (**self).tag()
    }

    fn should_show_cursor(&self) -> bool {
        (**self).should_show_cursor()
    }

    fn is_focusable(&self) -> bool {
        (**self).is_focusable()
    }

    fn handle_key(&mut self, key: &Key) -> KeyOutcome {
        (**self).handle_key(key)
    }

    fn on_blur(&mut self) {
        (**self).on_blur();
    }

    fn validate(&mut self) -> Validity {
        (**self).validate()
    }

    fn validity(&self) -> Validity {
        (**self).validity()
    }

    fn cancel(&mut self) {
        (**self).cancel();
    }

    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }

    fn value(&self) -> Option<String> {
        (**self).value()
    }

    fn is_animated(&self) -> bool {
        (**self).is_animated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_offset_shift() {
        assert_eq!(CursorOffset::ORIGIN.shifted(2, 3), CursorOffset::new(3, 3));
        assert_eq!(CursorOffset::default(), CursorOffset::ORIGIN);
    }

    #[test]
    fn test_validity() {
        assert_eq!(Validity::from_bool(true), Validity::Valid);
        assert!(Validity::from_bool(false).is_invalid());
        assert!(!Validity::Unknown.is_invalid());
    }
}
