//! Text Input Widget: Labeled single-line input with validation.
//!
//! Block layout puts the label on its own row above the value; inline
//! layout puts `label value` on one row. An invalid input grows one more
//! row carrying the validation message.

use super::field::TextField;
use super::traits::{CursorOffset, KeyOutcome, RenderContext, Validity, Widget, WidgetKind};
use crate::input::Key;
use crate::text::{Block, Line, Modifiers, Span, Style};
use unicode_width::UnicodeWidthStr;

/// Message shown under an input that failed validation.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Character drawn in place of each password character.
const MASK: char = '*';

/// A labeled text input.
#[derive(Debug, Clone)]
pub struct TextInput {
    label: Option<String>,
    placeholder: Option<String>,
    default: Option<String>,
    default_as_placeholder: bool,
    required: bool,
    password: bool,
    inline: bool,
    name: Option<String>,
    tag: Option<String>,
    field: TextField,
    valid: Validity,
    cancelled: bool,
}

impl Default for TextInput {
    fn default() -> Self {
        Self {
            label: None,
            placeholder: None,
            default: None,
            default_as_placeholder: true,
            required: true,
            password: false,
            inline: false,
            name: None,
            tag: None,
            field: TextField::new(),
            valid: Validity::Unknown,
            cancelled: false,
        }
    }
}

impl TextInput {
    /// Create a required block input with a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Create an input without a label.
    pub fn unlabeled() -> Self {
        Self::default()
    }

    /// Text shown while the input is empty.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Value used when the user leaves the input empty.
    #[must_use]
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Show the default value as the placeholder (on by default).
    #[must_use]
    pub const fn default_as_placeholder(mut self, enabled: bool) -> Self {
        self.default_as_placeholder = enabled;
        self
    }

    /// Require a non-blank value (on by default).
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Mask the typed text.
    #[must_use]
    pub const fn password(mut self, password: bool) -> Self {
        self.password = password;
        self
    }

    /// Put label and value on one row.
    #[must_use]
    pub const fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// Key for collected form data. Defaults to the label.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Tag shown by the tagged style.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// The typed text.
    pub fn text(&self) -> &str {
        self.field.text()
    }

    /// Replace the typed text, cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.field.set_text(text);
    }

    /// The editing state.
    pub const fn field(&self) -> &TextField {
        &self.field
    }

    /// The label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Check the inline flag.
    pub const fn is_inline(&self) -> bool {
        self.inline
    }

    /// Placeholder actually displayed: the default wins when configured.
    pub fn effective_placeholder(&self) -> Option<&str> {
        let default = self.default.as_deref().filter(|d| !d.is_empty());
        match default {
            Some(default) if self.default_as_placeholder => Some(default),
            _ => self.placeholder.as_deref(),
        }
    }

    /// Typed text, falling back to the default when nothing was typed.
    pub fn value_or_default(&self) -> String {
        match self.default.as_deref() {
            Some(default) if self.field.is_empty() => default.to_string(),
            _ => self.field.text().to_string(),
        }
    }

    fn shows_label(&self, ctx: &RenderContext<'_>) -> bool {
        ctx.show_label && self.label.as_deref().is_some_and(|l| !l.is_empty())
    }

    fn display_text(&self) -> String {
        if self.password {
            std::iter::repeat(MASK).take(self.field.len()).collect()
        } else {
            self.field.text().to_string()
        }
    }

    fn cursor_column(&self) -> usize {
        if self.password {
            self.field.cursor()
        } else {
            self.field.cursor_column()
        }
    }

    fn label_style(&self, ctx: &RenderContext<'_>) -> Style {
        let theme = ctx.theme();
        if ctx.done {
            Style::PLAIN
        } else if ctx.is_active {
            theme.active_label()
        } else if self.valid.is_invalid() {
            theme.error_label()
        } else {
            Style::PLAIN
        }
    }

    fn value_span(&self, ctx: &RenderContext<'_>) -> Span {
        let theme = ctx.theme();

        if self.cancelled {
            let shown = if self.field.is_empty() {
                self.effective_placeholder().unwrap_or(" ").to_string()
            } else {
                self.display_text()
            };
            return Span::styled(shown, theme.placeholder_style().with_modifiers(Modifiers::STRIKETHROUGH));
        }

        if ctx.done {
            let shown = if self.field.is_empty() {
                self.default.clone().unwrap_or_default()
            } else {
                self.display_text()
            };
            return Span::styled(shown, theme.result_style());
        }

        if self.field.is_empty() {
            // A space keeps the cursor cell on screen
            let shown = self.effective_placeholder().unwrap_or(" ");
            Span::styled(shown, theme.placeholder_style())
        } else {
            Span::styled(self.display_text(), Style::fg(theme.text))
        }
    }
}

impl Widget for TextInput {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Input { inline: self.inline }
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Block {
        let mut block = Block::new();
        let value = self.value_span(ctx);
        let label = self
            .label
            .as_deref()
            .filter(|_| self.shows_label(ctx))
            .map(|l| Span::styled(l, self.label_style(ctx)));

        match label {
            Some(label) if self.inline => {
                block.push(Line::from(label).push(Span::raw(" ")).push(value));
            }
            Some(label) => {
                block.push(Line::from(label));
                block.push(Line::from(value));
            }
            None => block.push(Line::from(value)),
        }

        if self.valid.is_invalid() && !ctx.done {
            block.push(Line::styled(REQUIRED_MESSAGE, ctx.theme().error_label()));
        }

        block
    }

    fn cursor_offset(&self, ctx: &RenderContext<'_>) -> CursorOffset {
        let shows_label = self.shows_label(ctx);
        let top = if self.inline || !shows_label { 1 } else { 2 };
        let label_cols = match self.label.as_deref() {
            Some(label) if self.inline && shows_label => UnicodeWidthStr::width(label) + 1,
            _ => 0,
        };
        CursorOffset::new(top, self.cursor_column() + label_cols)
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref().or(self.label.as_deref())
    }

    fn title(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    fn should_show_cursor(&self) -> bool {
        true
    }

    fn handle_key(&mut self, key: &Key) -> KeyOutcome {
        if self.field.handle_key(key) {
            KeyOutcome::Consumed
        } else {
            KeyOutcome::Ignored
        }
    }

    fn validate(&mut self) -> Validity {
        let valid = !self.required
            || !self.field.text().trim().is_empty()
            || self.default.as_deref().is_some_and(|d| !d.is_empty());
        self.valid = Validity::from_bool(valid);
        tracing::debug!(input = ?self.name(), valid, "validated input");
        self.valid
    }

    fn validity(&self) -> Validity {
        self.valid
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn value(&self) -> Option<String> {
        Some(self.field.text().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::MinimalStyle;

    fn typed(input: &mut TextInput, text: &str) {
        for key in Key::chars(text) {
            input.handle_key(&key);
        }
    }

    #[test]
    fn test_block_render_and_offset() {
        let style = MinimalStyle::new();
        let ctx = RenderContext::new(&style, 80).active(true);
        let mut input = TextInput::new("Name");
        typed(&mut input, "John");

        assert_eq!(input.render(&ctx).plain_lines(), vec!["Name", "John"]);
        assert_eq!(input.cursor_offset(&ctx), CursorOffset::new(2, 4));
    }

    #[test]
    fn test_inline_render_and_offset() {
        let style = MinimalStyle::new();
        let ctx = RenderContext::new(&style, 80).active(true);
        let mut input = TextInput::new("Name:").inline(true);
        typed(&mut input, "Jo");
        input.handle_key(&Key::Left);

        assert_eq!(input.render(&ctx).plain_lines(), vec!["Name: Jo"]);
        assert_eq!(input.cursor_offset(&ctx), CursorOffset::new(1, 7));

        let hidden = ctx.without_label();
        assert_eq!(input.render(&hidden).plain_lines(), vec!["Jo"]);
        assert_eq!(input.cursor_offset(&hidden), CursorOffset::new(1, 1));
    }

    #[test]
    fn test_placeholder_and_default() {
        let style = MinimalStyle::new();
        let ctx = RenderContext::new(&style, 80);

        let input = TextInput::new("Port").placeholder("e.g. 80");
        assert_eq!(input.render(&ctx).plain_lines()[1], "e.g. 80");

        let input = TextInput::new("Port").placeholder("e.g. 80").default_value("8080");
        assert_eq!(input.render(&ctx).plain_lines()[1], "8080");
        assert_eq!(input.value_or_default(), "8080");

        let input = TextInput::new("Port")
            .placeholder("e.g. 80")
            .default_value("8080")
            .default_as_placeholder(false);
        assert_eq!(input.effective_placeholder(), Some("e.g. 80"));

        let bare = TextInput::unlabeled();
        assert_eq!(bare.render(&ctx).plain_lines(), vec![" "]);
        assert_eq!(bare.cursor_offset(&ctx), CursorOffset::ORIGIN);
    }

    #[test]
    fn test_password_mask_follows_edits() {
        let style = MinimalStyle::new();
        let ctx = RenderContext::new(&style, 80);
        let mut input = TextInput::new("Password").password(true);
        typed(&mut input, "secret");
        input.handle_key(&Key::Left);
        input.handle_key(&Key::Left);
        input.handle_key(&Key::Backspace);

        assert_eq!(input.text(), "secet");
        assert_eq!(input.render(&ctx).plain_lines()[1], "*****");
        assert_eq!(input.cursor_offset(&ctx).left, 3);
    }

    #[test]
    fn test_validation_rules() {
        let mut input = TextInput::new("Name");
        assert_eq!(input.validity(), Validity::Unknown);
        assert_eq!(input.validate(), Validity::Invalid);

        typed(&mut input, "   ");
        assert_eq!(input.validate(), Validity::Invalid);

        typed(&mut input, "x");
        assert_eq!(input.validate(), Validity::Valid);

        let mut optional = TextInput::new("Nick").required(false);
        assert_eq!(optional.validate(), Validity::Valid);

        let mut defaulted = TextInput::new("Port").default_value("80");
        assert_eq!(defaulted.validate(), Validity::Valid);
    }

    #[test]
    fn test_invalid_render_adds_message() {
        let style = MinimalStyle::new();
        let ctx = RenderContext::new(&style, 80);
        let mut input = TextInput::new("Name");
        input.on_blur();

        let block = input.render(&ctx);
        assert_eq!(block.len(), 3);
        assert_eq!(block.lines[2].plain(), REQUIRED_MESSAGE);
        assert_eq!(block.lines[0].spans[0].style, ctx.theme().error_label());
    }

    #[test]
    fn test_done_render_uses_result_color() {
        let style = MinimalStyle::new();
        let ctx = RenderContext::new(&style, 80).done(true);
        let mut input = TextInput::new("Name").placeholder("who?");
        typed(&mut input, "Ada");

        let block = input.render(&ctx);
        assert_eq!(block.plain_lines(), vec!["Name", "Ada"]);
        assert_eq!(block.lines[1].spans[0].style, ctx.theme().result_style());
    }

    #[test]
    fn test_render_idempotent() {
        let style = MinimalStyle::new();
        let ctx = RenderContext::new(&style, 80).active(true);
        let mut input = TextInput::new("Name");
        typed(&mut input, "abc");
        assert_eq!(input.render(&ctx), input.render(&ctx));
        assert_eq!(input.cursor_offset(&ctx), input.cursor_offset(&ctx));
    }
}
