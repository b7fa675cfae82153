//! Toolkit: One-call prompts, menus, forms and progress over a backend.
//!
//! The facade owns a [`Backend`] and a decoration style and builds a
//! fresh container for every call. Each interaction leaves its accepted
//! (or cancelled) state printed above the cursor, so successive calls
//! read like a transcript.

use crate::container::{Container, Form, FormData, Frame, Live, LiveRegion, LogStream, ProgressHandle};
use crate::error::{Error, Result};
use crate::interrupt::{InterruptFlag, INTERRUPT_EXIT_CODE};
use crate::style::Decoration;
use crate::terminal::{Backend, CrosstermBackend};
use crate::widget::{Menu, MenuOption, Message, Progress, RawLines, TextInput, Widget};
use std::rc::Rc;

/// Configuration for the [`Toolkit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolkitConfig {
    /// Fixed render width for the crossterm backend.
    pub width: Option<u16>,
    /// Exit with status 130 when the user interrupts.
    pub exit_on_interrupt: bool,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            width: None,
            exit_on_interrupt: true,
        }
    }
}

/// Application facade.
///
/// # Example
///
/// ```
/// use rivet::{Key, MinimalStyle, ScriptedBackend, Toolkit, ToolkitConfig};
///
/// let backend = ScriptedBackend::new().type_text("Ada").press(Key::Enter);
/// let mut toolkit = Toolkit::with_backend(MinimalStyle::new(), backend, ToolkitConfig::default());
/// assert_eq!(toolkit.input("Name").unwrap(), "Ada");
/// ```
pub struct Toolkit<B: Backend = CrosstermBackend> {
    backend: B,
    style: Rc<dyn Decoration>,
    config: ToolkitConfig,
    interrupt: InterruptFlag,
}

impl<B: Backend + std::fmt::Debug> std::fmt::Debug for Toolkit<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toolkit")
            .field("backend", &self.backend)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Toolkit<CrosstermBackend> {
    /// Toolkit on the process's terminal with default configuration.
    pub fn new(style: impl Decoration + 'static) -> Self {
        Self::with_config(style, ToolkitConfig::default())
    }

    /// Toolkit on the process's terminal.
    ///
    /// Progress handles and log streams observe the process-wide SIGINT
    /// flag. Outside of them Ctrl+C exits with status 130.
    pub fn with_config(style: impl Decoration + 'static, config: ToolkitConfig) -> Self {
        let mut backend = CrosstermBackend::new();
        if let Some(width) = config.width {
            backend = backend.with_width(width);
        }
        Self {
            backend,
            style: Rc::new(style),
            config,
            interrupt: InterruptFlag::global(),
        }
    }
}

impl<B: Backend> Toolkit<B> {
    /// Toolkit on a custom backend, with a private interrupt flag.
    pub fn with_backend(style: impl Decoration + 'static, backend: B, config: ToolkitConfig) -> Self {
        Self {
            backend,
            style: Rc::new(style),
            config,
            interrupt: InterruptFlag::new(),
        }
    }

    /// Observe `flag` instead of the current interrupt flag.
    #[must_use]
    pub fn with_interrupt_flag(mut self, flag: InterruptFlag) -> Self {
        self.interrupt = flag;
        self
    }

    /// The interrupt flag progress handles and log streams observe.
    pub const fn interrupt_flag(&self) -> &InterruptFlag {
        &self.interrupt
    }

    /// The backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// A handle to the decoration style.
    pub fn style(&self) -> Rc<dyn Decoration> {
        Rc::clone(&self.style)
    }

    /// Configuration in effect.
    pub const fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// Ask for one line of required text.
    pub fn input(&mut self, label: &str) -> Result<String> {
        self.input_with(TextInput::new(label))
    }

    /// Run a configured text input; an empty answer yields its default.
    pub fn input_with(&mut self, mut input: TextInput) -> Result<String> {
        let result = self.run_single(&mut input);
        self.settle(result)?;
        Ok(input.value_or_default())
    }

    /// Inline Yes/No question.
    pub fn confirm(&mut self, label: &str) -> Result<bool> {
        let options = [MenuOption::new("Yes", true), MenuOption::new("No", false)];
        self.ask_menu(Menu::new(label, options).inline(true))
    }

    /// Pick one of `options`.
    pub fn ask<T>(&mut self, label: &str, options: impl IntoIterator<Item = MenuOption<T>>) -> Result<T> {
        self.ask_menu(Menu::new(label, options))
    }

    /// Run a configured menu and return the selected value.
    ///
    /// A menu without options fails with [`Error::NoSelection`] before
    /// anything is drawn.
    pub fn ask_menu<T>(&mut self, mut menu: Menu<T>) -> Result<T> {
        if menu.visible().is_empty() {
            return Err(Error::NoSelection);
        }
        let result = self.run_single(&mut menu);
        self.settle(result)?;
        menu.into_selected().ok_or(Error::NoSelection)
    }

    /// Start a progress with default configuration.
    pub fn progress(&mut self, title: &str) -> Result<ProgressHandle<'_, B>> {
        self.progress_with(Progress::new(title))
    }

    /// Start a configured progress.
    pub fn progress_with(&mut self, progress: Progress) -> Result<ProgressHandle<'_, B>> {
        let exit = self.config.exit_on_interrupt;
        let handle = ProgressHandle::start(progress, Rc::clone(&self.style), &mut self.backend, self.interrupt.clone())?;
        Ok(handle.exit_on_interrupt(exit))
    }

    /// Start a log stream headed by `title`.
    ///
    /// Like a progress, the stream observes the interrupt flag.
    pub fn log_stream(&mut self, title: &str) -> Result<LogStream<'_, B>> {
        let exit = self.config.exit_on_interrupt;
        let stream = Live::stream(title, Rc::clone(&self.style), &mut self.backend)?;
        Ok(stream.watch_interrupt(self.interrupt.clone()).exit_on_interrupt(exit))
    }

    /// An empty form in this toolkit's style.
    pub fn form<'a>(&self, title: &str) -> Form<'a> {
        Form::new(title, self.style())
    }

    /// Run `form` on this toolkit's backend.
    pub fn run_form(&mut self, form: &mut Form<'_>) -> Result<FormData> {
        let result = form.run(&mut self.backend);
        self.settle(result)
    }

    /// Print decorated text.
    pub fn print(&mut self, text: &str) -> Result<()> {
        self.print_widget(&Message::new(text))
    }

    /// Print a heading, with an optional tag for the tagged style.
    pub fn print_title(&mut self, title: &str, tag: Option<&str>) -> Result<()> {
        let mut heading = Message::heading(title);
        if let Some(tag) = tag {
            heading = heading.with_tag(tag);
        }
        self.print_widget(&heading)
    }

    /// Print the style's empty line.
    pub fn print_line(&mut self) -> Result<()> {
        let line = RawLines::new([self.style.empty_line()]);
        self.print_widget(&line)
    }

    /// Print any widget in its done state.
    pub fn print_widget(&mut self, widget: &dyn Widget) -> Result<()> {
        let frame = Frame::compose(&[widget], &*self.style, 0, true, false, self.backend.width());
        LiveRegion::new().paint(&mut self.backend, &frame, 0, true)
    }

    fn run_single(&mut self, widget: &mut dyn Widget) -> Result<()> {
        let mut container = Container::new(Rc::clone(&self.style)).validate_on_submit(true);
        container.push(widget);
        container.run(&mut self.backend)
    }

    fn settle<T>(&self, result: Result<T>) -> Result<T> {
        if matches!(result, Err(Error::Interrupted)) && self.config.exit_on_interrupt {
            std::process::exit(INTERRUPT_EXIT_CODE);
        }
        result
    }
}
