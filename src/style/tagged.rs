//! Tagged style: a fixed-width tag column to the left of every widget.
//!
//! The tag sits on the widget's first row, right-aligned with one column
//! of gap before the content. Later rows get a blank column of the same
//! width. Tag text is measured in display columns, so emoji tags keep the
//! content aligned.

use super::{animation_colors, is_decorated, AnimationClock, AnimationState, Decorated, Decoration, Theme};
use crate::text::{Block, Line, Span, Style};
use crate::widget::{RenderContext, Widget, WidgetKind};

/// Cells in the animated progress tag.
const ANIMATION_STEPS: usize = 5;

/// Configuration for [`TaggedStyle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedConfig {
    /// Tag used for widgets without their own.
    pub tag: String,
    /// Width of the tag column in terminal columns.
    pub tag_width: usize,
}

impl Default for TaggedConfig {
    fn default() -> Self {
        Self {
            tag: String::new(),
            tag_width: 12,
        }
    }
}

/// Decoration with a tag column.
#[derive(Debug, Default)]
pub struct TaggedStyle {
    config: TaggedConfig,
    theme: Theme,
    clock: AnimationClock,
}

impl TaggedStyle {
    /// Create with a default tag and the default column width.
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_config(TaggedConfig {
            tag: tag.into(),
            ..TaggedConfig::default()
        })
    }

    /// Create with custom configuration.
    pub fn with_config(config: TaggedConfig) -> Self {
        Self {
            config,
            theme: Theme::default(),
            clock: AnimationClock::new(),
        }
    }

    /// Replace the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Width of the tag column.
    pub const fn tag_width(&self) -> usize {
        self.config.tag_width
    }

    /// The tag cell for a widget's first row, exactly `tag_width` wide.
    fn tag_cell(&self, widget: &dyn Widget, ctx: &RenderContext<'_>) -> Line {
        let width = self.config.tag_width;
        let inner = width.saturating_sub(1);

        let label = match AnimationState::of(widget, ctx) {
            AnimationState::Started if widget.kind() == WidgetKind::Progress => {
                let colors = animation_colors(&self.theme, ANIMATION_STEPS, AnimationState::Started, self.clock.frame());
                colors
                    .into_iter()
                    .fold(Line::empty(), |line, color| line.push(Span::styled("█", Style::fg(color))))
            }
            state => {
                let tag = widget.tag().unwrap_or(&self.config.tag);
                if tag.is_empty() {
                    Line::empty()
                } else {
                    let mut style = match widget.kind() {
                        WidgetKind::Message { title: true } => self.theme.tag_title,
                        _ => self.theme.tag,
                    };
                    if state == AnimationState::Error && widget.kind() == WidgetKind::Progress {
                        style = style.with_bg(self.theme.error);
                    }
                    Line::styled(format!(" {tag} "), style)
                }
            }
        };

        let label = label.truncate(inner);
        let mut cell = Line::raw(" ".repeat(inner - label.width()));
        cell.spans.extend(label.spans);
        cell.pad_to(width, Style::PLAIN)
    }
}

impl Decoration for TaggedStyle {
    fn decorate(&self, widget: &dyn Widget, ctx: &RenderContext<'_>) -> Decorated {
        if !is_decorated(widget.kind()) {
            return Decorated::plain(widget, ctx);
        }

        let Decorated { block, cursor } = Decorated::plain(widget, ctx);
        let blank = " ".repeat(self.config.tag_width);

        let lines = block.lines.into_iter().enumerate().map(|(i, mut line)| {
            if i == 0 {
                line.prepend(self.tag_cell(widget, ctx).spans);
            } else {
                line.prepend([Span::raw(blank.clone())]);
            }
            line
        });

        Decorated {
            block: lines.collect::<Block>(),
            cursor: cursor.shifted(0, self.config.tag_width),
        }
    }

    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn clock(&self) -> &AnimationClock {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{CursorOffset, Message, Progress, TextInput};

    #[test]
    fn test_tag_column_alignment() {
        let style = TaggedStyle::new("name");
        let mut input = TextInput::new("Name");
        input.set_text("Jo");
        let ctx = RenderContext::new(&style, 80).active(true);

        let decorated = style.decorate(&input, &ctx);
        let lines = decorated.block.plain_lines();
        assert_eq!(lines[0], "      name  Name");
        assert_eq!(lines[1], "            Jo");
        assert_eq!(decorated.cursor, CursorOffset::new(2, 14));
    }

    #[test]
    fn test_emoji_tag_keeps_width() {
        let style = TaggedStyle::new("🚀");
        let message = Message::new("hello");
        let ctx = RenderContext::new(&style, 80);

        let decorated = style.decorate(&message, &ctx);
        let first = &decorated.block.lines[0];
        assert_eq!(first.width(), 12 + 5);
        assert!(first.plain().ends_with(" 🚀  hello"));
    }

    #[test]
    fn test_long_tag_truncated_to_column() {
        let style = TaggedStyle::with_config(TaggedConfig {
            tag: "a-very-long-tag".into(),
            tag_width: 6,
        });
        let message = Message::new("x");
        let decorated = style.decorate(&message, &RenderContext::new(&style, 80));
        assert_eq!(decorated.block.lines[0].width(), 7);
    }

    #[test]
    fn test_active_progress_animates() {
        let style = TaggedStyle::new("work");
        let progress = Progress::new("Building");
        let ctx = RenderContext::new(&style, 80);

        let decorated = style.decorate(&progress, &ctx);
        assert!(decorated.block.lines[0].plain().contains("█████"));

        let done = style.decorate(&progress, &ctx.done(true));
        assert!(done.block.lines[0].plain().contains(" work "));
    }
}
