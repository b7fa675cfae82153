//! Minimal style: widgets render exactly as they are.

use super::{AnimationClock, Decorated, Decoration, Theme};
use crate::widget::{RenderContext, Widget};

/// Pass-through decoration.
#[derive(Debug, Default)]
pub struct MinimalStyle {
    theme: Theme,
    clock: AnimationClock,
}

impl MinimalStyle {
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
}

impl Decoration for MinimalStyle {
    fn decorate(&self, widget: &dyn Widget, ctx: &RenderContext<'_>) -> Decorated {
        Decorated::plain(widget, ctx)
    }

    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn clock(&self) -> &AnimationClock {
        &self.clock
    }
}
