//! Container module: Owns widgets, routes keys and drives the live region.
//!
//! This module contains:
//! - [`Container`]: ordered widgets, focus and the blocking run loop
//! - [`Form`]: a titled container that collects its values by name
//! - [`Live`], [`ProgressHandle`], [`LogStream`]: regions updated by the
//!   program instead of by keystrokes
//! - [`Frame`], [`LiveRegion`]: the cursor-accounting render engine

mod form;
mod live;
mod render;

pub use form::{Form, FormData};
pub use live::{Live, LogStream, ProgressHandle, StreamView};
pub use render::{Frame, LiveRegion, RenderSnapshot};

use crate::error::{Error, Result};
use crate::input::Key;
use crate::style::Decoration;
use crate::terminal::Backend;
use crate::widget::{KeyOutcome, Widget};
use std::rc::Rc;

/// Lifecycle of a container interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunState {
    /// Reading keys.
    #[default]
    Running,
    /// Accepted.
    Done,
    /// Interrupted.
    Cancelled,
}

/// Direction of a focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// An ordered list of widgets sharing one live region.
///
/// Exactly one focusable widget has focus while running. Keys go to that
/// widget; Tab and Shift+Tab move focus, Enter advances or submits.
pub struct Container<'a> {
    widgets: Vec<Box<dyn Widget + 'a>>,
    focus: usize,
    style: Rc<dyn Decoration>,
    region: LiveRegion,
    state: RunState,
    validate_on_submit: bool,
}

impl std::fmt::Debug for Container<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("widgets", &self.widgets.len())
            .field("focus", &self.focus)
            .field("state", &self.state)
            .field("validate_on_submit", &self.validate_on_submit)
            .finish_non_exhaustive()
    }
}

impl<'a> Container<'a> {
    /// An empty container decorated by `style`.
    pub fn new(style: Rc<dyn Decoration>) -> Self {
        Self {
            widgets: Vec::new(),
            focus: 0,
            style,
            region: LiveRegion::new(),
            state: RunState::Running,
            validate_on_submit: false,
        }
    }

    /// Validate every widget before accepting a submit.
    #[must_use]
    pub const fn validate_on_submit(mut self, enabled: bool) -> Self {
        self.validate_on_submit = enabled;
        self
    }

    /// Append a widget.
    pub fn push(&mut self, widget: impl Widget + 'a) {
        self.widgets.push(Box::new(widget));
    }

    /// Append an already boxed widget.
    pub fn push_boxed(&mut self, widget: Box<dyn Widget + 'a>) {
        self.widgets.push(widget);
    }

    /// The widgets, in order.
    pub fn widgets(&self) -> &[Box<dyn Widget + 'a>] {
        &self.widgets
    }

    /// Mutable access to the widgets.
    pub fn widgets_mut(&mut self) -> &mut [Box<dyn Widget + 'a>] {
        &mut self.widgets
    }

    /// Index of the focused widget.
    pub const fn focus(&self) -> usize {
        self.focus
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// The decoration in use.
    pub fn style(&self) -> &Rc<dyn Decoration> {
        &self.style
    }

    /// `(name, value)` of every widget that has both, in order.
    pub fn values(&self) -> Vec<(String, String)> {
        self.widgets
            .iter()
            .filter_map(|w| Some((w.name()?.to_string(), w.value()?)))
            .collect()
    }

    /// Focus the first focusable widget and mark the container running.
    pub fn reset(&mut self) {
        self.state = RunState::Running;
        self.focus = self.widgets.iter().position(|w| w.is_focusable()).unwrap_or(0);
    }

    /// Render every widget once at `width`.
    pub fn frame(&self, width: u16) -> Frame {
        let done = self.state != RunState::Running;
        let widgets: Vec<&dyn Widget> = self.widgets.iter().map(|w| &**w as &dyn Widget).collect();
        Frame::compose(&widgets, &*self.style, self.focus, done, !done, width)
    }

    /// Repaint the region with the current state.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn refresh<B: Backend + ?Sized>(&mut self, backend: &mut B) -> Result<()> {
        let frame = self.frame(backend.width());
        let done = self.state != RunState::Running;
        self.region.paint(backend, &frame, self.focus, done)
    }

    /// Feed one key; returns the state afterwards.
    pub fn handle_key(&mut self, key: &Key) -> RunState {
        if self.state != RunState::Running || self.widgets.is_empty() {
            return self.state;
        }
        tracing::trace!(?key, focus = self.focus, "key");

        match key {
            Key::Tab => self.move_focus(Direction::Forward),
            Key::BackTab => self.move_focus(Direction::Backward),
            _ => {}
        }

        let outcome = self.widgets[self.focus].handle_key(key);
        if *key != Key::Enter {
            return self.state;
        }

        match outcome {
            KeyOutcome::Reject => {
                tracing::debug!(focus = self.focus, "enter rejected by widget");
            }
            KeyOutcome::Submit => self.submit(),
            KeyOutcome::Consumed => {}
            KeyOutcome::Ignored if self.is_last_focusable(self.focus) => self.submit(),
            KeyOutcome::Ignored => {
                if !self.widgets[self.focus].validate().is_invalid() {
                    self.advance();
                }
            }
        }
        self.state
    }

    /// Cancel every widget and mark the container cancelled.
    pub fn cancel_all(&mut self) {
        for widget in &mut self.widgets {
            widget.cancel();
        }
        self.state = RunState::Cancelled;
    }

    /// Run until submitted or interrupted.
    ///
    /// Paints once, then reads keys and repaints after each one. The
    /// accepted state is painted before returning.
    ///
    /// # Errors
    ///
    /// - [`Error::Interrupted`] on Ctrl+C, after painting the cancelled state
    /// - [`Error::NoWidgets`] if the container is empty
    /// - backend errors as they occur
    pub fn run<B: Backend + ?Sized>(&mut self, backend: &mut B) -> Result<()> {
        if self.widgets.is_empty() {
            return Err(Error::NoWidgets);
        }

        backend.begin_interaction()?;
        let result = self.run_loop(backend);
        let restored = backend.end_interaction();
        result.and(restored)
    }

    fn run_loop<B: Backend + ?Sized>(&mut self, backend: &mut B) -> Result<()> {
        self.reset();
        self.refresh(backend)?;

        loop {
            let key = match backend.read_key() {
                Ok(key) => key,
                Err(Error::Interrupted) => {
                    tracing::debug!("interaction interrupted");
                    self.cancel_all();
                    self.refresh(backend)?;
                    return Err(Error::Interrupted);
                }
                Err(e) => return Err(e),
            };

            let state = self.handle_key(&key);
            self.refresh(backend)?;
            if state == RunState::Done {
                return Ok(());
            }
        }
    }

    fn submit(&mut self) {
        if self.validate_on_submit {
            let mut valid = true;
            for widget in &mut self.widgets {
                // every widget validates so each one shows its own message
                if widget.validate().is_invalid() {
                    valid = false;
                }
            }
            if !valid {
                tracing::debug!("submit rejected by validation");
                return;
            }
        }
        self.state = RunState::Done;
    }

    fn move_focus(&mut self, direction: Direction) {
        self.widgets[self.focus].on_blur();
        if let Some(next) = self.next_focusable(direction, true) {
            self.focus = next;
        }
    }

    fn advance(&mut self) {
        if let Some(next) = self.next_focusable(Direction::Forward, false) {
            self.focus = next;
        }
    }

    fn next_focusable(&self, direction: Direction, wrap: bool) -> Option<usize> {
        let len = self.widgets.len();
        (1..len)
            .map(|step| match direction {
                Direction::Forward => self.focus + step,
                Direction::Backward => self.focus + len - step,
            })
            .filter(|&i| wrap || i < len)
            .map(|i| i % len)
            .find(|&i| self.widgets[i].is_focusable())
    }

    fn is_last_focusable(&self, index: usize) -> bool {
        !self.widgets[index + 1..].iter().any(|w| w.is_focusable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::MinimalStyle;
    use crate::terminal::ScriptedBackend;
    use crate::widget::{Button, Menu, MenuOption, Message, TextInput, Validity};
    use std::cell::Cell;

    fn container<'a>() -> Container<'a> {
        Container::new(Rc::new(MinimalStyle::new()))
    }

    #[test]
    fn test_focus_skips_passive_widgets() {
        let mut c = container();
        c.push(Message::heading("Setup"));
        c.push(TextInput::new("Name"));
        c.push(Message::new("between"));
        c.push(TextInput::new("Email"));
        c.reset();
        assert_eq!(c.focus(), 1);

        c.handle_key(&Key::Tab);
        assert_eq!(c.focus(), 3);
        c.handle_key(&Key::Tab);
        assert_eq!(c.focus(), 1);
        c.handle_key(&Key::BackTab);
        assert_eq!(c.focus(), 3);
    }

    #[test]
    fn test_tab_blur_validates() {
        let mut c = container();
        c.push(TextInput::new("Name"));
        c.push(TextInput::new("Email"));
        c.reset();
        c.handle_key(&Key::Tab);
        assert_eq!(c.widgets()[0].validity(), Validity::Invalid);
    }

    #[test]
    fn test_enter_advances_then_submits() {
        let mut c = container();
        c.push(TextInput::new("Name"));
        c.push(TextInput::new("Email"));
        c.reset();

        for key in Key::chars("Jo") {
            c.handle_key(&key);
        }
        assert_eq!(c.handle_key(&Key::Enter), RunState::Running);
        assert_eq!(c.focus(), 1);
        assert_eq!(c.handle_key(&Key::Enter), RunState::Done);
    }

    #[test]
    fn test_enter_blocked_by_invalid_field() {
        let mut c = container();
        c.push(TextInput::new("Name"));
        c.push(TextInput::new("Email"));
        c.reset();
        assert_eq!(c.handle_key(&Key::Enter), RunState::Running);
        assert_eq!(c.focus(), 0);
    }

    #[test]
    fn test_validate_on_submit_checks_everything() {
        let mut c = container().validate_on_submit(true);
        c.push(TextInput::new("Name"));
        c.push(TextInput::new("Email"));
        c.reset();
        c.handle_key(&Key::Tab);
        for key in Key::chars("a@b") {
            c.handle_key(&key);
        }
        assert_eq!(c.handle_key(&Key::Enter), RunState::Running);
        assert_eq!(c.widgets()[0].validity(), Validity::Invalid);
    }

    #[test]
    fn test_button_submit_and_consume() {
        let pressed = Cell::new(0);
        let mut c = container();
        c.push(Button::new("Retry").on_press(|| {
            pressed.set(pressed.get() + 1);
            false
        }));
        c.push(Button::new("Done"));
        c.reset();

        assert_eq!(c.handle_key(&Key::Enter), RunState::Running);
        assert_eq!(c.focus(), 0);
        c.handle_key(&Key::Tab);
        assert_eq!(c.handle_key(&Key::Enter), RunState::Done);
        drop(c);
        assert_eq!(pressed.get(), 1);
    }

    #[test]
    fn test_menu_reject() {
        let mut c = container();
        let menu = Menu::new("Framework", ["React", "Vue"].map(MenuOption::from)).filtering(true);
        c.push(menu);
        c.reset();
        for key in Key::chars("zz") {
            c.handle_key(&key);
        }
        assert_eq!(c.handle_key(&Key::Enter), RunState::Running);
    }

    #[test]
    fn test_run_interrupt_paints_cancelled() {
        let mut c = container();
        c.push(TextInput::new("Name"));
        let mut backend = ScriptedBackend::new().type_text("J").interrupt();

        let result = c.run(&mut backend);
        assert!(matches!(result, Err(Error::Interrupted)));
        assert_eq!(c.state(), RunState::Cancelled);
        assert!(c.widgets()[0].is_cancelled());
        assert_eq!(backend.interactions(), 1);
        assert!(backend.output_text().ends_with("\r\n\x1b[?25h"));
    }

    #[test]
    fn test_run_empty() {
        let mut c = container();
        let mut backend = ScriptedBackend::new();
        assert!(matches!(c.run(&mut backend), Err(Error::NoWidgets)));
    }

    #[test]
    fn test_values_in_order() {
        let mut c = container();
        let mut name = TextInput::new("Name").with_name("name");
        name.set_text("John");
        c.push(Message::new("intro"));
        c.push(name);
        c.push(Menu::new("Pick", ["a", "b"].map(MenuOption::from)).with_name("pick"));
        assert_eq!(
            c.values(),
            vec![("name".to_string(), "John".to_string()), ("pick".to_string(), "a".to_string())]
        );
    }
}
