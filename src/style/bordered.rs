//! Bordered style: every widget inside a fixed-width box.
//!
//! ```text
//! ┌──────────────┐
//! │              │
//! │ Title        │
//! │ body …       │
//! │              │
//! └──────────────┘
//! ```
//!
//! The widget's title moves onto its own row inside the box and the
//! widget renders its body with its own label hidden. Body lines wider
//! than the box wrap inside it. The cursor lands two rows down (border,
//! padding) plus the title row, and two columns right (border, padding),
//! after following the body cursor into its wrapped row.

use super::{is_decorated, AnimationClock, Decorated, Decoration, Theme};
use crate::text::{Block, Line, Span, Style};
use crate::widget::{CursorOffset, RenderContext, Widget};

/// Configuration for [`BorderedStyle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderedConfig {
    /// Total box width including both borders.
    pub width: usize,
}

impl Default for BorderedConfig {
    fn default() -> Self {
        Self { width: 50 }
    }
}

/// Decoration drawing a box around each widget.
#[derive(Debug, Default)]
pub struct BorderedStyle {
    config: BorderedConfig,
    theme: Theme,
    clock: AnimationClock,
}

/// Rows above the body not counting the title: border + padding.
const TOP_ROWS: usize = 2;
/// Columns left of the body: border + padding.
const LEFT_COLS: usize = 2;

impl BorderedStyle {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration.
    pub fn with_config(config: BorderedConfig) -> Self {
        Self {
            config: BorderedConfig {
                width: config.width.max(LEFT_COLS * 2 + 1),
            },
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

    /// Columns available to the body.
    const fn inner_width(&self) -> usize {
        self.config.width.saturating_sub(LEFT_COLS * 2)
    }

    fn border_style(&self, widget: &dyn Widget, ctx: &RenderContext<'_>) -> Style {
        if widget.validity().is_invalid() {
            Style::fg(self.theme.error)
        } else if widget.is_cancelled() {
            Style::fg(self.theme.cancelled)
        } else if ctx.is_active && !ctx.done {
            Style::fg(self.theme.active)
        } else {
            Style::fg(self.theme.border)
        }
    }

    fn title_style(&self, widget: &dyn Widget, ctx: &RenderContext<'_>) -> Style {
        if ctx.done {
            self.theme.result_style().bold()
        } else if widget.validity().is_invalid() {
            self.theme.error_label()
        } else if widget.is_cancelled() {
            Style::fg(self.theme.cancelled).bold()
        } else if ctx.is_active {
            self.theme.active_label()
        } else {
            Style::fg(self.theme.text).bold()
        }
    }

    fn edge(&self, left: char, right: char, border: Style) -> Line {
        let fill = "─".repeat(self.config.width.saturating_sub(2));
        Line::styled(format!("{left}{fill}{right}"), border)
    }

    fn boxed(&self, content: Line, border: Style) -> Line {
        let inner = self.inner_width();
        let mut line = Line::styled("│ ", border);
        line.spans.extend(content.pad_to(inner, Style::PLAIN).spans);
        line.push(Span::styled(" │", border))
    }
}

/// Wrap body lines to the box and move the cursor into the wrapped rows.
///
/// A cursor sitting right after a full-width row gets an empty row of its
/// own so it never lands on the padding column.
fn wrap_body(body: &Block, cursor: CursorOffset, inner: usize) -> (Vec<Line>, CursorOffset) {
    let cursor_line = cursor.top.saturating_sub(1);
    let mut rows = Vec::with_capacity(body.len());
    let mut placed = cursor;

    for (index, line) in body.lines.iter().enumerate() {
        let wrapped = line.wrap(inner);
        if index == cursor_line {
            let (row, col, grow) = locate(&wrapped, cursor.left, inner);
            placed = CursorOffset::new(rows.len() + row + 1, col);
            rows.extend(wrapped);
            if grow {
                rows.push(Line::empty());
            }
        } else {
            rows.extend(wrapped);
        }
    }
    (rows, placed)
}

/// Row and column of display column `left` within wrapped rows, and
/// whether an extra row is needed to hold it.
fn locate(rows: &[Line], left: usize, inner: usize) -> (usize, usize, bool) {
    let mut remaining = left;
    let last = rows.len().saturating_sub(1);
    for (row, line) in rows.iter().enumerate() {
        let width = line.width();
        if remaining < width {
            return (row, remaining, false);
        }
        if row == last {
            if remaining >= inner {
                return (row + 1, remaining - width, true);
            }
            return (row, remaining, false);
        }
        remaining -= width;
    }
    (0, left.min(inner.saturating_sub(1)), false)
}

impl Decoration for BorderedStyle {
    fn decorate(&self, widget: &dyn Widget, ctx: &RenderContext<'_>) -> Decorated {
        if !is_decorated(widget.kind()) {
            return Decorated::plain(widget, ctx);
        }

        let body_ctx = ctx.without_label();
        let body = widget.render(&body_ctx);
        let body_cursor = widget.cursor_offset(&body_ctx);
        let border = self.border_style(widget, ctx);

        let title = widget.title().filter(|t| !t.is_empty());
        let title_rows = usize::from(title.is_some());

        let mut block = Block::new();
        block.push(self.edge('┌', '┐', border));
        block.push(self.boxed(Line::empty(), border));
        if let Some(title) = title {
            let title = Line::styled(title, self.title_style(widget, ctx));
            block.push(self.boxed(title, border));
        }
        let (rows, cursor) = wrap_body(&body, body_cursor, self.inner_width());
        for line in rows {
            block.push(self.boxed(line, border));
        }
        block.push(self.boxed(Line::empty(), border));
        block.push(self.edge('└', '┘', border));

        Decorated {
            block,
            cursor: cursor.shifted(TOP_ROWS + title_rows, LEFT_COLS),
        }
    }

    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn clock(&self) -> &AnimationClock {
        &self.clock
    }
}
