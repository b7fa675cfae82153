//! Style module: Decoration strategies wrapping widget output.
//!
//! A decoration takes a widget's rendered block and its intrinsic cursor
//! offset and returns the framed block plus the cursor offset corrected
//! for whatever rows and columns the framing added.
//!
//! - [`MinimalStyle`]: pass-through
//! - [`TaggedStyle`]: fixed-width tag column on the left
//! - [`BorderedStyle`]: fixed-width box with the label as title row
//! - [`FancyStyle`]: connecting glyph column with animated accents
//!
//! Container-owned filler ([`WidgetKind::Raw`]) is never decorated.

mod bordered;
mod fancy;
mod minimal;
mod tagged;
mod theme;

pub use bordered::{BorderedConfig, BorderedStyle};
pub use fancy::FancyStyle;
pub use minimal::MinimalStyle;
pub use tagged::{TaggedConfig, TaggedStyle};
pub use theme::Theme;

use crate::text::{color, Block, Line, Rgb};
use crate::widget::{CursorOffset, RenderContext, Widget, WidgetKind};
use std::cell::Cell;

/// A decorated block and the cursor position inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorated {
    /// The framed lines.
    pub block: Block,
    /// Cursor position inside `block`.
    pub cursor: CursorOffset,
}

impl Decorated {
    /// The widget's own rendering, unframed.
    pub fn plain(widget: &dyn Widget, ctx: &RenderContext<'_>) -> Self {
        Self {
            block: widget.render(ctx),
            cursor: widget.cursor_offset(ctx),
        }
    }
}

/// Frame counter shared by every widget a style decorates.
///
/// The container advances it once per full render pass so that all
/// animated widgets stay in step.
#[derive(Debug, Default)]
pub struct AnimationClock {
    frame: Cell<u64>,
}

impl AnimationClock {
    /// A clock at frame zero.
    pub const fn new() -> Self {
        Self { frame: Cell::new(0) }
    }

    /// Current frame.
    pub fn frame(&self) -> u64 {
        self.frame.get()
    }

    /// Advance one frame.
    pub fn tick(&self) {
        self.frame.set(self.frame.get().wrapping_add(1));
    }
}

/// State of an animated accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Work in progress: a moving ramp of the progress color.
    Started,
    /// Finished: the flat progress color.
    Stopped,
    /// Failed or cancelled: the flat error color.
    Error,
}

impl AnimationState {
    /// Derive the state from a widget and its render context.
    pub fn of(widget: &dyn Widget, ctx: &RenderContext<'_>) -> Self {
        if widget.is_cancelled() || widget.validity().is_invalid() {
            Self::Error
        } else if widget.is_animated() && !ctx.done {
            Self::Started
        } else {
            Self::Stopped
        }
    }
}

/// Lightening per animation step.
const BRIGHTNESS_STEP: f32 = 0.1;

/// Colors of an animated accent, `steps` long, rotated by `frame`.
pub fn animation_colors(theme: &Theme, steps: usize, state: AnimationState, frame: u64) -> Vec<Rgb> {
    match state {
        AnimationState::Started => {
            let mut colors = color::ramp(theme.progress, steps, BRIGHTNESS_STEP);
            if !colors.is_empty() {
                #[allow(clippy::cast_possible_truncation)]
                let shift = (frame % colors.len() as u64) as usize;
                colors.rotate_right(shift);
            }
            colors
        }
        AnimationState::Stopped => vec![theme.progress; steps],
        AnimationState::Error => vec![theme.error; steps],
    }
}

/// Brightness floor of the oldest visible log line.
const MIN_BRIGHTNESS: f32 = 0.4;

/// Brightness of log line `index` out of `shown` with a window of `max_lines`.
///
/// The floor rises by 0.1 per unused window slot so a sparse window
/// fades less.
#[allow(clippy::cast_precision_loss)]
pub fn log_line_brightness(index: usize, max_lines: usize, total_lines: usize) -> f32 {
    let shown = total_lines.min(max_lines).max(1);
    let floor = (MIN_BRIGHTNESS + shown.abs_diff(max_lines) as f32 * 0.1).clamp(MIN_BRIGHTNESS, 1.0);
    ((index + 1) as f32 / shown as f32) * (1.0 - floor) + floor
}

/// A decoration strategy shared by every widget of a container.
pub trait Decoration {
    /// Frame `widget` and correct its cursor offset.
    ///
    /// `ctx.style` is `self`.
    fn decorate(&self, widget: &dyn Widget, ctx: &RenderContext<'_>) -> Decorated;

    /// Color theme.
    fn theme(&self) -> &Theme;

    /// Frame counter for animations.
    fn clock(&self) -> &AnimationClock;

    /// A separator line in this style.
    fn empty_line(&self) -> Line {
        Line::empty()
    }

    /// Render one progress log line, faded by its age.
    ///
    /// `index` counts from the oldest visible line. Without a window
    /// (`max_lines` is `None`) the line is returned unchanged.
    fn render_log_line(&self, line: Line, index: usize, max_lines: Option<usize>, total_lines: usize) -> Line {
        let Some(max_lines) = max_lines else {
            return line;
        };
        let theme = self.theme();
        let brightness = log_line_brightness(index, max_lines, total_lines);
        color::fade_line(line, theme.foreground, theme.background, brightness)
    }
}

/// Whether a widget kind gets framed at all.
pub(crate) const fn is_decorated(kind: WidgetKind) -> bool {
    !matches!(kind, WidgetKind::Raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_ticks() {
        let clock = AnimationClock::new();
        clock.tick();
        clock.tick();
        assert_eq!(clock.frame(), 2);
    }

    #[test]
    fn test_brightness_monotonic_and_bounded() {
        for total in 1..=8 {
            let shown = total.min(5);
            let values: Vec<f32> = (0..shown).map(|i| log_line_brightness(i, 5, total)).collect();
            for pair in values.windows(2) {
                assert!(pair[1] > pair[0]);
            }
            assert!(values.iter().all(|b| *b > 0.39 && *b < 1.0001));
            assert!((values[shown - 1] - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_full_window_fades_more() {
        let sparse = log_line_brightness(0, 5, 2);
        let full = log_line_brightness(0, 5, 5);
        assert!(full < sparse);
        assert!((full - 0.52).abs() < 1e-5);
    }

    #[test]
    fn test_animation_colors() {
        let theme = Theme::default();
        let started = animation_colors(&theme, 5, AnimationState::Started, 0);
        assert_eq!(started[0], theme.progress);
        let shifted = animation_colors(&theme, 5, AnimationState::Started, 1);
        assert_eq!(shifted[1], theme.progress);
        assert_eq!(animation_colors(&theme, 3, AnimationState::Error, 7), vec![theme.error; 3]);
        assert_eq!(animation_colors(&theme, 2, AnimationState::Stopped, 7), vec![theme.progress; 2]);
    }
}
