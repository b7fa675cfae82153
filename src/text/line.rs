//! Spans, lines and blocks: the styled text every widget renders into.
//!
//! A [`Block`] is what the container measures. Its height at a given
//! terminal width is the number of physical rows the terminal will use
//! once long lines soft-wrap, and that figure is the only one the cursor
//! accounting trusts.

use super::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    /// The text content. Never contains a newline.
    pub content: String,
    /// Style applied to the whole run.
    pub style: Style,
}

impl Span {
    /// Create an unstyled span.
    pub fn raw(content: impl Into<String>) -> Self {
        Self::styled(content, Style::PLAIN)
    }

    /// Create a styled span.
    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        UnicodeWidthStr::width(self.content.as_str())
    }
}

/// One logical line of styled text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    /// The spans, left to right.
    pub spans: Vec<Span>,
}

impl Line {
    /// An empty line (still occupies one row).
    pub const fn empty() -> Self {
        Self { spans: Vec::new() }
    }

    /// A line made of a single unstyled span.
    pub fn raw(content: impl Into<String>) -> Self {
        Self::from(Span::raw(content))
    }

    /// A line made of a single styled span.
    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self::from(Span::styled(content, style))
    }

    /// Append a span.
    #[must_use]
    pub fn push(mut self, span: Span) -> Self {
        self.push_span(span);
        self
    }

    /// Append a span in place. Empty spans are dropped.
    pub fn push_span(&mut self, span: Span) {
        if !span.content.is_empty() {
            self.spans.push(span);
        }
    }

    /// Prepend spans, keeping their order.
    pub fn prepend(&mut self, spans: impl IntoIterator<Item = Span>) {
        let mut front: Vec<Span> = spans.into_iter().filter(|s| !s.content.is_empty()).collect();
        front.append(&mut self.spans);
        self.spans = front;
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Plain text with styles dropped.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.content.as_str()).collect()
    }

    /// Number of physical rows this line occupies at the given terminal width.
    ///
    /// Empty lines still take one row. A line exactly `width` columns wide
    /// takes one row: the terminal holds the wrap until the next character.
    pub fn rows(&self, width: u16) -> usize {
        let width = usize::from(width.max(1));
        self.width().div_ceil(width).max(1)
    }

    /// Cut the line to at most `max_width` columns, never splitting a grapheme.
    #[must_use]
    pub fn truncate(mut self, max_width: usize) -> Self {
        let mut remaining = max_width;
        let mut kept = Vec::with_capacity(self.spans.len());

        for span in self.spans.drain(..) {
            if remaining == 0 {
                break;
            }
            let span_width = span.width();
            if span_width <= remaining {
                remaining -= span_width;
                kept.push(span);
                continue;
            }

            let mut content = String::new();
            for grapheme in span.content.graphemes(true) {
                let w = UnicodeWidthStr::width(grapheme);
                if w > remaining {
                    break;
                }
                remaining -= w;
                content.push_str(grapheme);
            }
            kept.push(Span::styled(content, span.style));
            break;
        }

        self.spans = kept;
        self
    }

    /// Split into lines of at most `width` columns, never splitting a
    /// grapheme. Always yields at least one line.
    pub fn wrap(&self, width: usize) -> Vec<Self> {
        let width = width.max(1);
        let mut rows = vec![Self::empty()];
        let mut used = 0;

        for span in &self.spans {
            let mut content = String::new();
            for grapheme in span.content.graphemes(true) {
                let w = UnicodeWidthStr::width(grapheme);
                if used + w > width && used > 0 {
                    if let Some(row) = rows.last_mut() {
                        row.push_span(Span::styled(std::mem::take(&mut content), span.style));
                    }
                    rows.push(Self::empty());
                    used = 0;
                }
                used += w;
                content.push_str(grapheme);
            }
            if let Some(row) = rows.last_mut() {
                row.push_span(Span::styled(content, span.style));
            }
        }
        rows
    }

    /// Pad with spaces (in `style`) up to `width` columns.
    #[must_use]
    pub fn pad_to(mut self, width: usize, style: Style) -> Self {
        let current = self.width();
        if current < width {
            self.push_span(Span::styled(" ".repeat(width - current), style));
        }
        self
    }

    /// Re-style every span through `f`.
    #[must_use]
    pub fn map_styles(mut self, f: impl Fn(Style) -> Style) -> Self {
        for span in &mut self.spans {
            span.style = f(span.style);
        }
        self
    }
}

impl From<Span> for Line {
    fn from(span: Span) -> Self {
        let mut line = Self::empty();
        line.push_span(span);
        line
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Self::raw(s)
    }
}

impl From<String> for Line {
    fn from(s: String) -> Self {
        Self::raw(s)
    }
}

/// Measured footprint of a block: widest line and physical row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shape {
    /// Widest line in columns.
    pub width: usize,
    /// Physical rows, counting soft wraps.
    pub height: usize,
}

/// A vertical stack of lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    /// The lines, top to bottom.
    pub lines: Vec<Line>,
}

impl Block {
    /// A block with no lines at all (zero height).
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append a line.
    pub fn push(&mut self, line: impl Into<Line>) {
        self.lines.push(line.into());
    }

    /// Append every line of another block.
    pub fn extend(&mut self, other: Self) {
        self.lines.extend(other.lines);
    }

    /// Number of logical lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check whether the block has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Physical rows occupied by the first `count` lines.
    pub fn rows_before(&self, count: usize, width: u16) -> usize {
        self.lines.iter().take(count).map(|l| l.rows(width)).sum()
    }

    /// Measure the block at the given terminal width.
    pub fn shape(&self, width: u16) -> Shape {
        Shape {
            width: self.lines.iter().map(Line::width).max().unwrap_or(0),
            height: self.rows_before(self.lines.len(), width),
        }
    }

    /// Plain text lines with styles dropped.
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines.iter().map(Line::plain).collect()
    }
}

impl From<Line> for Block {
    fn from(line: Line) -> Self {
        Self { lines: vec![line] }
    }
}

impl From<Vec<Line>> for Block {
    fn from(lines: Vec<Line>) -> Self {
        Self { lines }
    }
}

impl FromIterator<Line> for Block {
    fn from_iter<T: IntoIterator<Item = Line>>(iter: T) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Rgb;

    #[test]
    fn test_line_width_wide_chars() {
        let line = Line::raw("日本").push(Span::raw("ab"));
        assert_eq!(line.width(), 6);
        assert_eq!(line.plain(), "日本ab");
    }

    #[test]
    fn test_line_rows_wrap() {
        let line = Line::raw("x".repeat(25));
        assert_eq!(line.rows(10), 3);
        assert_eq!(Line::raw("x".repeat(10)).rows(10), 1);
        assert_eq!(Line::empty().rows(10), 1);
    }

    #[test]
    fn test_truncate_keeps_graphemes() {
        let line = Line::raw("ab").push(Span::raw("日本語"));
        let cut = line.truncate(5);
        assert_eq!(cut.plain(), "ab日");
        assert_eq!(cut.width(), 4);
    }

    #[test]
    fn test_wrap_keeps_styles_and_graphemes() {
        let bold = Style::PLAIN.bold();
        let line = Line::raw("abc").push(Span::styled("de日本", bold));
        let rows = line.wrap(4);
        let plain: Vec<String> = rows.iter().map(Line::plain).collect();
        assert_eq!(plain, vec!["abcd", "e日", "本"]);
        assert_eq!(rows[1].spans[0].style, bold);
        assert_eq!(Line::empty().wrap(4), vec![Line::empty()]);
        assert_eq!(Line::raw("abcd").wrap(4).len(), 1);
    }

    #[test]
    fn test_pad_to() {
        let padded = Line::raw("abc").pad_to(6, Style::PLAIN);
        assert_eq!(padded.plain(), "abc   ");
        assert_eq!(Line::raw("abcdef").pad_to(3, Style::PLAIN).plain(), "abcdef");
    }

    #[test]
    fn test_block_shape() {
        let mut block = Block::new();
        block.push("short");
        block.push(Line::styled("a".repeat(30), Style::fg(Rgb::WHITE)));
        block.push(Line::empty());

        let shape = block.shape(20);
        assert_eq!(shape.width, 30);
        assert_eq!(shape.height, 4);
        assert_eq!(block.rows_before(2, 20), 3);
    }

    #[test]
    fn test_empty_spans_dropped() {
        let line = Line::raw("").push(Span::raw("x"));
        assert_eq!(line.spans.len(), 1);
    }
}
