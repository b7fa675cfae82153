//! Message Widget: static, non-focusable text.

use super::traits::{RenderContext, Widget, WidgetKind};
use crate::text::{Block, Line, Style};

/// One or more lines of static text, or a heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    lines: Vec<Line>,
    is_title: bool,
    tag: Option<String>,
}

impl Message {
    /// Plain text; `\n` starts a new line.
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(Line::raw).collect(),
            is_title: false,
            tag: None,
        }
    }

    /// A heading.
    pub fn heading(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(|l| Line::styled(l, Style::PLAIN.bold())).collect(),
            is_title: true,
            tag: None,
        }
    }

    /// Pre-styled lines.
    pub fn lines(lines: impl IntoIterator<Item = Line>) -> Self {
        Self {
            lines: lines.into_iter().collect(),
            is_title: false,
            tag: None,
        }
    }

    /// Tag shown by the tagged style.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

impl Widget for Message {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Message { title: self.is_title }
    }

    fn render(&self, _ctx: &RenderContext<'_>) -> Block {
        Block::from(self.lines.clone())
    }

    fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    fn is_focusable(&self) -> bool {
        false
    }
}

/// Container-owned filler: rendered as-is by every style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLines {
    lines: Vec<Line>,
}

impl RawLines {
    /// `count` empty lines.
    pub fn blank(count: usize) -> Self {
        Self {
            lines: vec![Line::empty(); count],
        }
    }

    /// Arbitrary lines.
    pub fn new(lines: impl IntoIterator<Item = Line>) -> Self {
        Self {
            lines: lines.into_iter().collect(),
        }
    }
}

impl Widget for RawLines {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Raw
    }

    fn render(&self, _ctx: &RenderContext<'_>) -> Block {
        Block::from(self.lines.clone())
    }

    fn is_focusable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Decoration, TaggedStyle};

    #[test]
    fn test_message_lines() {
        let style = TaggedStyle::new("info");
        let ctx = RenderContext::new(&style, 80);
        let message = Message::new("one\ntwo");
        assert_eq!(message.render(&ctx).plain_lines(), vec!["one", "two"]);
        assert!(!message.is_focusable());
    }

    #[test]
    fn test_raw_lines_undecorated() {
        let style = TaggedStyle::new("info");
        let ctx = RenderContext::new(&style, 80);
        let spacer = RawLines::blank(1);
        let decorated = style.decorate(&spacer, &ctx);
        assert_eq!(decorated.block.plain_lines(), vec![""]);
        assert_eq!(decorated.block.shape(80).height, 1);
    }
}
