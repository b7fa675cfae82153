//! Regions updated by the program rather than by keystrokes.
//!
//! A [`Live`] owns one widget and repaints it after every mutation made
//! through [`Live::update`], so no paint ever sees a half-applied change.
//! Dropping a live region paints its final state, also when unwinding.
//! A region watching an [`InterruptFlag`] turns a pending Ctrl+C into a
//! cancelled final paint on its next update.

use super::render::{Frame, LiveRegion};
use crate::error::{Error, Result};
use crate::interrupt::{InterruptFlag, INTERRUPT_EXIT_CODE};
use crate::style::Decoration;
use crate::terminal::Backend;
use crate::text::{Block, Line, Span, Style};
use crate::widget::{Progress, RenderContext, Widget, WidgetKind, CANCELLED_SUFFIX};
use std::rc::Rc;

/// A single widget repainted in place.
pub struct Live<'b, W: Widget, B: Backend + ?Sized> {
    widget: W,
    style: Rc<dyn Decoration>,
    backend: &'b mut B,
    region: LiveRegion,
    finished: bool,
    interrupt: Option<InterruptFlag>,
    exit_on_interrupt: bool,
}

impl<W: Widget + std::fmt::Debug, B: Backend + ?Sized> std::fmt::Debug for Live<'_, W, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Live")
            .field("widget", &self.widget)
            .field("finished", &self.finished)
            .field("exit_on_interrupt", &self.exit_on_interrupt)
            .finish_non_exhaustive()
    }
}

impl<'b, W: Widget, B: Backend + ?Sized> Live<'b, W, B> {
    /// Paint `widget` and keep it live.
    ///
    /// # Errors
    ///
    /// Returns an error if the first paint fails.
    pub fn start(widget: W, style: Rc<dyn Decoration>, backend: &'b mut B) -> Result<Self> {
        let mut live = Self {
            widget,
            style,
            backend,
            region: LiveRegion::new(),
            finished: false,
            interrupt: None,
            exit_on_interrupt: false,
        };
        live.refresh()?;
        Ok(live)
    }

    /// Observe `flag` until the region closes.
    #[must_use]
    pub fn watch_interrupt(mut self, flag: InterruptFlag) -> Self {
        flag.arm();
        if let Some(previous) = self.interrupt.replace(flag) {
            previous.disarm();
        }
        self
    }

    /// Exit the process instead of returning [`Error::Interrupted`].
    #[must_use]
    pub const fn exit_on_interrupt(mut self, exit: bool) -> Self {
        self.exit_on_interrupt = exit;
        self
    }

    /// The widget.
    pub const fn widget(&self) -> &W {
        &self.widget
    }

    /// Apply `f` to the widget, then repaint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interrupted`] if Ctrl+C was pressed, in which case
    /// `f` is not applied, or an error if the repaint fails.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut W) -> R) -> Result<R> {
        self.check_interrupt()?;
        let result = f(&mut self.widget);
        self.refresh()?;
        Ok(result)
    }

    /// Repaint without changing anything, advancing animations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interrupted`] if Ctrl+C was pressed, or an error
    /// if the backend write fails.
    pub fn refresh(&mut self) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.check_interrupt()?;
        let frame = self.frame(false);
        self.region.paint(&mut *self.backend, &frame, 0, false)
    }

    /// Paint the final state, or erase the region when `erase` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn finish(mut self, erase: bool) -> Result<()> {
        self.close(erase)
    }

    fn frame(&self, done: bool) -> Frame {
        let widgets: [&dyn Widget; 1] = [&self.widget];
        Frame::compose(&widgets, &*self.style, 0, done, false, self.backend.width())
    }

    fn close(&mut self, erase: bool) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        if let Some(flag) = &self.interrupt {
            flag.disarm();
        }
        let frame = if erase { Frame::empty() } else { self.frame(true) };
        self.region.paint(&mut *self.backend, &frame, 0, true)
    }

    fn interrupt_pending(&self) -> bool {
        self.interrupt.as_ref().is_some_and(InterruptFlag::is_tripped)
    }

    fn check_interrupt(&mut self) -> Result<()> {
        if self.finished || !self.interrupt.as_ref().is_some_and(InterruptFlag::reset) {
            return Ok(());
        }
        tracing::debug!("live region interrupted");
        self.widget.cancel();
        self.close(false)?;
        if self.exit_on_interrupt {
            std::process::exit(INTERRUPT_EXIT_CODE);
        }
        Err(Error::Interrupted)
    }
}

impl<W: Widget, B: Backend + ?Sized> Drop for Live<'_, W, B> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if std::thread::panicking() || self.interrupt_pending() {
            self.widget.cancel();
        }
        if let Err(e) = self.close(false) {
            tracing::warn!(error = %e, "failed to paint final live region");
        }
    }
}

/// Handle to a running [`Progress`].
///
/// Every call checks the interrupt flag first. A tripped flag cancels the
/// progress, paints it and returns [`Error::Interrupted`], or exits the
/// process with status 130 when configured to.
pub struct ProgressHandle<'b, B: Backend + ?Sized> {
    live: Live<'b, Progress, B>,
}

impl<B: Backend + ?Sized> std::fmt::Debug for ProgressHandle<'_, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressHandle").field("live", &self.live).finish()
    }
}

impl<'b, B: Backend + ?Sized> ProgressHandle<'b, B> {
    /// Start `progress` on `backend`.
    ///
    /// # Errors
    ///
    /// Returns an error if the first paint fails.
    pub fn start(progress: Progress, style: Rc<dyn Decoration>, backend: &'b mut B, interrupt: InterruptFlag) -> Result<Self> {
        Ok(Self {
            live: Live::start(progress, style, backend)?.watch_interrupt(interrupt),
        })
    }

    /// Exit the process instead of returning [`Error::Interrupted`].
    #[must_use]
    pub const fn exit_on_interrupt(mut self, exit: bool) -> Self {
        self.live.exit_on_interrupt = exit;
        self
    }

    /// The progress widget.
    pub const fn progress(&self) -> &Progress {
        self.live.widget()
    }

    /// Log a line (or replace the status, without inline logs).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interrupted`] if Ctrl+C was pressed, or a backend error.
    pub fn log(&mut self, line: impl Into<Line>) -> Result<()> {
        self.live.update(|p| p.log(line))
    }

    /// Switch to the error state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interrupted`] if Ctrl+C was pressed, or a backend error.
    pub fn set_error(&mut self, message: impl Into<Line>) -> Result<()> {
        self.live.update(|p| p.set_error(message))
    }

    /// Repaint, advancing the animation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interrupted`] if Ctrl+C was pressed, or a backend error.
    pub fn tick(&mut self) -> Result<()> {
        self.live.refresh()
    }

    /// Mark cancelled and paint the final state.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn cancel(mut self) -> Result<()> {
        self.live.widget.cancel();
        self.live.close(false)
    }

    /// Paint the final state, or erase it if the progress is transient.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn finish(mut self) -> Result<()> {
        let erase = self.progress().is_transient();
        self.live.close(erase)
    }
}

impl<B: Backend + ?Sized> Drop for ProgressHandle<'_, B> {
    fn drop(&mut self) {
        if self.live.finished {
            return;
        }
        if std::thread::panicking() || self.live.interrupt_pending() {
            self.live.widget.cancel();
        }
        let erase = !self.progress().is_cancelled() && self.progress().is_transient();
        if let Err(e) = self.live.close(erase) {
            tracing::warn!(error = %e, "failed to finish progress");
        }
    }
}

/// An append-only log under a title, with an optional footer line.
#[derive(Debug, Clone, Default)]
pub struct StreamView {
    title: String,
    logs: Vec<Line>,
    footer: Option<Line>,
    cancelled: bool,
}

impl StreamView {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Lines logged so far.
    pub fn logs(&self) -> &[Line] {
        &self.logs
    }

    /// The footer, if set.
    pub const fn footer(&self) -> Option<&Line> {
        self.footer.as_ref()
    }
}

impl Widget for StreamView {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Message { title: false }
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Block {
        let theme = ctx.theme();
        let cancelled = Span::styled(format!(" {CANCELLED_SUFFIX}"), Style::fg(theme.cancelled).bold());
        let mut block = Block::new();
        if ctx.show_label {
            if self.cancelled {
                block.push(Line::styled(self.title.clone(), Style::fg(theme.cancelled).bold()).push(cancelled));
            } else {
                block.push(Line::styled(self.title.clone(), theme.active_label()));
            }
        } else if self.cancelled {
            block.push(Line::from(cancelled));
        }
        block.extend(self.logs.iter().cloned().collect());
        if let Some(footer) = &self.footer {
            block.push(footer.clone());
        }
        if block.is_empty() {
            block.push(ctx.style.empty_line());
        }
        block
    }

    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn is_focusable(&self) -> bool {
        false
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// A live log that grows without bound.
pub type LogStream<'b, B> = Live<'b, StreamView, B>;

impl<'b, B: Backend + ?Sized> Live<'b, StreamView, B> {
    /// Start an empty stream headed by `title`.
    ///
    /// # Errors
    ///
    /// Returns an error if the first paint fails.
    pub fn stream(title: impl Into<String>, style: Rc<dyn Decoration>, backend: &'b mut B) -> Result<Self> {
        Self::start(StreamView::new(title), style, backend)
    }

    /// Append a line.
    ///
    /// # Errors
    ///
    /// Returns an error if the repaint fails.
    pub fn log(&mut self, line: impl Into<Line>) -> Result<()> {
        let line = line.into();
        self.update(|view| view.logs.push(line))
    }

    /// Replace the footer line.
    ///
    /// # Errors
    ///
    /// Returns an error if the repaint fails.
    pub fn set_footer(&mut self, footer: Option<Line>) -> Result<()> {
        self.update(|view| view.footer = footer)
    }
}
