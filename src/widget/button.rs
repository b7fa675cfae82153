//! Button Widget: Activated with Enter.
//!
//! A button without a callback, or whose callback returns `true`, asks
//! the container to finish. A callback returning `false` is a side
//! effect only and the interaction keeps running.

use super::traits::{KeyOutcome, RenderContext, Widget, WidgetKind};
use crate::input::Key;
use crate::text::{Block, Line, Style};

/// Callback run when a button is activated.
pub type ButtonCallback<'a> = Box<dyn FnMut() -> bool + 'a>;

/// A push button.
pub struct Button<'a> {
    label: String,
    name: Option<String>,
    tag: Option<String>,
    callback: Option<ButtonCallback<'a>>,
}

impl<'a> Button<'a> {
    /// A button that submits when activated.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: None,
            tag: None,
            callback: None,
        }
    }

    /// Run `callback` on activation; its result decides whether to submit.
    #[must_use]
    pub fn on_press(mut self, callback: impl FnMut() -> bool + 'a) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Identifier of the button.
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

    /// The button text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Activate the button. Returns `true` when the container may finish.
    pub fn activate(&mut self) -> bool {
        self.callback.as_mut().map_or(true, |callback| callback())
    }
}

impl std::fmt::Debug for Button<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("name", &self.name)
            .field("has_callback", &self.callback.is_some())
            .finish_non_exhaustive()
    }
}

impl Widget for Button<'_> {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Button
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Block {
        let style = if ctx.is_active && !ctx.done {
            ctx.theme().active_label()
        } else {
            Style::PLAIN
        };
        Block::from(Line::styled(format!("[ {} ]", self.label), style))
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    fn handle_key(&mut self, key: &Key) -> KeyOutcome {
        if *key != Key::Enter {
            return KeyOutcome::Ignored;
        }
        if self.activate() {
            KeyOutcome::Submit
        } else {
            tracing::debug!(button = %self.label, "button callback declined submit");
            KeyOutcome::Consumed
        }
    }
}
