//! Fancy style: a two-column glyph gutter joining widgets together.
//!
//! ```text
//! ┌ Title
//! ◆ single-line widget
//! ◆ first line
//! │ middle
//! └ last line
//! ```
//!
//! An active progress widget gets an animated diamond; cancelled or
//! failed widgets a diamond in the error color.

use super::{animation_colors, is_decorated, AnimationClock, AnimationState, Decorated, Decoration, Theme};
use crate::text::{Block, Line, Span, Style};
use crate::widget::{RenderContext, Widget, WidgetKind};

/// Width of the glyph gutter.
const GUTTER: usize = 2;
/// Steps in the diamond's color cycle.
const ANIMATION_STEPS: usize = 5;

/// Decoration with a connecting glyph gutter.
#[derive(Debug, Default)]
pub struct FancyStyle {
    theme: Theme,
    clock: AnimationClock,
}

impl FancyStyle {
    /// Create with the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn diamond_style(&self, widget: &dyn Widget, ctx: &RenderContext<'_>) -> Style {
        let state = AnimationState::of(widget, ctx);
        match state {
            AnimationState::Error => Style::fg(self.theme.error),
            AnimationState::Started => {
                let colors = animation_colors(&self.theme, ANIMATION_STEPS, state, self.clock.frame());
                Style::fg(colors[0])
            }
            AnimationState::Stopped if widget.kind() == WidgetKind::Progress => Style::fg(self.theme.progress),
            AnimationState::Stopped => Style::fg(self.theme.glyph),
        }
    }
}

impl Decoration for FancyStyle {
    fn decorate(&self, widget: &dyn Widget, ctx: &RenderContext<'_>) -> Decorated {
        if !is_decorated(widget.kind()) {
            return Decorated::plain(widget, ctx);
        }

        let Decorated { block, cursor } = Decorated::plain(widget, ctx);
        let is_title = matches!(widget.kind(), WidgetKind::Message { title: true });
        let glyph_style = Style::fg(self.theme.glyph);
        let last = block.len().saturating_sub(1);

        let lines = block.lines.into_iter().enumerate().map(|(i, mut line)| {
            let glyph = if i == 0 {
                if is_title {
                    Span::styled("┌ ", glyph_style)
                } else {
                    Span::styled("◆ ", self.diamond_style(widget, ctx))
                }
            } else if i == last {
                Span::styled("└ ", glyph_style)
            } else {
                Span::styled("│ ", glyph_style)
            };
            line.prepend([glyph]);
            line
        });

        Decorated {
            block: lines.collect::<Block>(),
            cursor: cursor.shifted(0, GUTTER),
        }
    }

    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    fn empty_line(&self) -> Line {
        Line::styled("│", Style::fg(self.theme.glyph))
    }
}
