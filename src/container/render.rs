//! Cursor accounting: measuring a render pass and repainting it in place.
//!
//! A [`Frame`] is one full render of a widget list: the decorated lines,
//! the physical height of every widget at the current terminal width and
//! the cell the cursor belongs in. [`LiveRegion`] turns successive frames
//! into escape sequences. It remembers exactly one generation of the
//! previous frame ([`RenderSnapshot`]) so it can walk back over that
//! footprint before printing the next one.

use crate::error::Result;
use crate::style::Decoration;
use crate::terminal::{Backend, OutputBuffer};
use crate::text::Line;
use crate::widget::{RenderContext, Widget};

/// One measured render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    /// Every line of the region, top to bottom.
    pub lines: Vec<Line>,
    /// Physical rows occupied by each entry (widgets, then any spacer).
    pub heights: Vec<usize>,
    /// 0-based region row of the cursor.
    pub cursor_row: usize,
    /// 0-based column of the cursor.
    pub cursor_col: usize,
    /// Whether the cursor should blink there.
    pub show_cursor: bool,
}

impl Frame {
    /// A frame with nothing in it; painting it erases the region.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Render and measure `widgets` with `style`.
    ///
    /// Advances the style's animation clock once. `focus` selects the
    /// widget whose cursor offset positions the terminal cursor. With
    /// `spacer` a blank raw line is appended below the widgets.
    pub fn compose(
        widgets: &[&dyn Widget],
        style: &dyn Decoration,
        focus: usize,
        done: bool,
        spacer: bool,
        width: u16,
    ) -> Self {
        style.clock().tick();

        let columns = usize::from(width.max(1));
        let mut frame = Self::empty();
        let mut rows_above = 0;

        for (i, widget) in widgets.iter().enumerate() {
            let ctx = RenderContext::new(style, width).active(i == focus).done(done);
            let decorated = style.decorate(*widget, &ctx);
            let height = decorated.block.shape(width).height;

            if i == focus {
                let cursor = decorated.cursor;
                let line_row = decorated.block.rows_before(cursor.top.saturating_sub(1), width);
                frame.cursor_row = rows_above + line_row + cursor.left / columns;
                frame.cursor_col = cursor.left % columns;
                frame.show_cursor = !done && widget.should_show_cursor();
            }

            rows_above += height;
            frame.heights.push(height);
            frame.lines.extend(decorated.block.lines);
        }

        if spacer {
            frame.lines.push(Line::empty());
            frame.heights.push(1);
        }

        let total = frame.total_rows();
        frame.cursor_row = frame.cursor_row.min(total.saturating_sub(1));

        debug_assert_eq!(
            total,
            frame.lines.iter().map(|l| l.rows(width)).sum::<usize>(),
            "measured heights disagree with printed rows"
        );
        tracing::trace!(
            heights = ?frame.heights,
            total,
            cursor_row = frame.cursor_row,
            cursor_col = frame.cursor_col,
            "composed frame"
        );
        frame
    }

    /// Total physical rows.
    pub fn total_rows(&self) -> usize {
        self.heights.iter().sum()
    }
}

/// What the previous paint left on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSnapshot {
    /// Physical rows of each entry.
    pub heights: Vec<usize>,
    /// Focused widget index.
    pub focus: usize,
    /// Region row the cursor was left on.
    pub cursor_row: usize,
}

impl RenderSnapshot {
    /// Total physical rows.
    pub fn total_rows(&self) -> usize {
        self.heights.iter().sum()
    }
}

/// A block of terminal rows repainted in place.
#[derive(Debug, Default)]
pub struct LiveRegion {
    snapshot: Option<RenderSnapshot>,
    out: OutputBuffer,
}

impl LiveRegion {
    /// A region with nothing painted yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The footprint of the last paint, if the region is live.
    pub const fn snapshot(&self) -> Option<&RenderSnapshot> {
        self.snapshot.as_ref()
    }

    /// Erase the previous footprint and paint `frame` in its place.
    ///
    /// A running paint leaves the cursor on the frame's cursor cell. A
    /// done paint leaves it on a fresh line below the frame and forgets
    /// the footprint, so the next paint starts a new region.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn paint<B: Backend + ?Sized>(&mut self, backend: &mut B, frame: &Frame, focus: usize, done: bool) -> Result<()> {
        self.out.clear();
        self.out.cursor_hide();
        self.erase_previous();

        for (i, line) in frame.lines.iter().enumerate() {
            if i > 0 {
                self.out.newline();
            }
            self.out.write_line(line);
        }

        let total = frame.total_rows();
        if done {
            if total > 0 {
                self.out.newline();
            }
            self.out.cursor_show();
            self.snapshot = None;
        } else {
            self.out.cursor_up(total.saturating_sub(1).saturating_sub(frame.cursor_row));
            self.out.move_to_column(frame.cursor_col);
            if frame.show_cursor {
                self.out.cursor_show();
            }
            self.snapshot = Some(RenderSnapshot {
                heights: frame.heights.clone(),
                focus,
                cursor_row: frame.cursor_row,
            });
        }

        backend.write_all(self.out.as_bytes())
    }

    /// Walk from the previous cursor row to the previous bottom row, then
    /// erase upwards until the cursor sits on region row 0, column 0.
    fn erase_previous(&mut self) {
        let Some(previous) = self.snapshot.take() else {
            self.out.carriage_return();
            return;
        };

        let total = previous.total_rows();
        if total == 0 {
            self.out.carriage_return();
            return;
        }

        self.out.cursor_down(total - 1 - previous.cursor_row.min(total - 1));
        self.out.carriage_return();
        self.out.erase_line();
        for _ in 1..total {
            self.out.cursor_up(1);
            self.out.erase_line();
        }
    }
}
