//! Progress Widget: Status line or tail of a growing log.
//!
//! Without inline logs every `log` call replaces the status line. With
//! inline logs the widget shows its title and a window of the most recent
//! lines, older lines faded towards the background by the style.

use super::traits::{RenderContext, Validity, Widget, WidgetKind};
use crate::text::{Block, Line, Modifiers, Span, Style};
use std::time::{Duration, Instant};

/// Text appended to the title of a cancelled progress.
pub const CANCELLED_SUFFIX: &str = "Cancelled.";

/// Configuration for the progress widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressConfig {
    /// Keep every log line instead of replacing the status.
    pub inline_logs: bool,
    /// Window of log lines shown; `None` shows all of them.
    pub lines_to_show: Option<usize>,
    /// Erase the widget once finished.
    pub transient: bool,
    /// Erase the widget once finished with an error.
    pub transient_on_error: bool,
    /// Prefix log lines with the time since the start.
    pub show_timestamps: bool,
}

/// One logged line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// The text.
    pub line: Line,
    /// Time since the progress started.
    pub elapsed: Duration,
}

/// A long-running operation's status.
#[derive(Debug, Clone)]
pub struct Progress {
    title: String,
    current: Line,
    logs: Vec<LogLine>,
    config: ProgressConfig,
    started: Instant,
    is_error: bool,
    cancelled: bool,
    tag: Option<String>,
}

impl Progress {
    /// Create with default configuration.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_config(title, ProgressConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(title: impl Into<String>, config: ProgressConfig) -> Self {
        let title = title.into();
        Self {
            current: Line::raw(title.clone()),
            title,
            logs: Vec::new(),
            config,
            started: Instant::now(),
            is_error: false,
            cancelled: false,
            tag: None,
        }
    }

    /// Tag shown by the tagged style.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Record a message: appended with inline logs, replaces the status otherwise.
    pub fn log(&mut self, line: impl Into<Line>) {
        let line = line.into();
        if self.config.inline_logs {
            self.logs.push(LogLine {
                line,
                elapsed: self.started.elapsed(),
            });
        } else {
            self.current = line;
        }
    }

    /// Switch to the error state with `message` as the status.
    pub fn set_error(&mut self, message: impl Into<Line>) {
        self.current = message.into();
        self.is_error = true;
        tracing::debug!(title = %self.title, "progress failed");
    }

    /// Check the error state.
    pub const fn is_error(&self) -> bool {
        self.is_error
    }

    /// The logged lines, oldest first.
    pub fn logs(&self) -> &[LogLine] {
        &self.logs
    }

    /// Current status line.
    pub const fn current_message(&self) -> &Line {
        &self.current
    }

    /// Configuration in effect.
    pub const fn config(&self) -> &ProgressConfig {
        &self.config
    }

    /// Whether the widget should disappear once finished.
    pub const fn is_transient(&self) -> bool {
        if self.is_error {
            self.config.transient_on_error
        } else {
            self.config.transient
        }
    }

    fn accent(&self, ctx: &RenderContext<'_>) -> Style {
        let theme = ctx.theme();
        if self.cancelled || self.is_error {
            Style::fg(theme.error)
        } else {
            Style::fg(theme.progress)
        }
    }

    fn cancelled_span(&self, ctx: &RenderContext<'_>) -> Span {
        Span::styled(format!(" {CANCELLED_SUFFIX}"), Style::fg(ctx.theme().cancelled).bold())
    }

    fn log_line(&self, log: &LogLine) -> Line {
        if !self.config.show_timestamps {
            return log.line.clone();
        }
        let mut line = log.line.clone();
        let stamp = format!("[{:>6.2}s] ", log.elapsed.as_secs_f64());
        line.prepend([Span::styled(stamp, Style::PLAIN.with_modifiers(Modifiers::DIM))]);
        line
    }

    fn render_status(&self, ctx: &RenderContext<'_>) -> Block {
        let mut line = self.current.clone();
        if self.is_error {
            line = line.map_styles(|s| s.patch(Style::fg(ctx.theme().error)));
        }
        if self.cancelled {
            line.push_span(self.cancelled_span(ctx));
        }
        Block::from(line)
    }

    fn render_logs(&self, ctx: &RenderContext<'_>) -> Block {
        let mut block = Block::new();

        if ctx.show_label {
            let mut title = Line::styled(self.title.clone(), self.accent(ctx).bold());
            if self.cancelled {
                title.push_span(self.cancelled_span(ctx));
            }
            block.push(title);
        } else if self.cancelled {
            block.push(Line::from(self.cancelled_span(ctx)));
        }

        let window = self.config.lines_to_show.unwrap_or(self.logs.len());
        let start = self.logs.len().saturating_sub(window);
        let tail = &self.logs[start..];
        for (i, log) in tail.iter().enumerate() {
            let line = self.log_line(log);
            block.push(ctx.style.render_log_line(line, i, self.config.lines_to_show, self.logs.len()));
        }

        if self.is_error {
            let error = self.current.clone().map_styles(|s| s.patch(Style::fg(ctx.theme().error)));
            block.push(error);
        }

        if block.is_empty() {
            block.push(self.current.clone());
        }
        block
    }
}

impl Widget for Progress {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Progress
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Block {
        if self.config.inline_logs {
            self.render_logs(ctx)
        } else {
            self.render_status(ctx)
        }
    }

    fn title(&self) -> Option<&str> {
        self.config.inline_logs.then_some(self.title.as_str())
    }

    fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    fn is_focusable(&self) -> bool {
        false
    }

    fn validity(&self) -> Validity {
        if self.is_error {
            Validity::Invalid
        } else {
            Validity::Unknown
        }
    }

    fn cancel(&mut self) {
        if !self.cancelled {
            tracing::debug!(title = %self.title, "progress cancelled");
        }
        self.cancelled = true;
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn is_animated(&self) -> bool {
        !self.cancelled && !self.is_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Decoration, MinimalStyle};

    fn inline_logs(lines: Option<usize>) -> ProgressConfig {
        ProgressConfig {
            inline_logs: true,
            lines_to_show: lines,
            ..ProgressConfig::default()
        }
    }

    #[test]
    fn test_status_replaced() {
        let style = MinimalStyle::new();
        let ctx = RenderContext::new(&style, 80);
        let mut progress = Progress::new("Installing");
        assert_eq!(progress.render(&ctx).plain_lines(), vec!["Installing"]);

        progress.log("fetching");
        progress.log("linking");
        assert_eq!(progress.render(&ctx).plain_lines(), vec!["linking"]);
        assert!(progress.logs().is_empty());
        assert_eq!(progress.title(), None);
    }

    #[test]
    fn test_log_window() {
        let style = MinimalStyle::new();
        let ctx = RenderContext::new(&style, 80);
        let mut progress = Progress::with_config("Build", inline_logs(Some(2)));
        for i in 0..5 {
            progress.log(format!("step {i}"));
        }

        assert_eq!(progress.render(&ctx).plain_lines(), vec!["Build", "step 3", "step 4"]);
        assert_eq!(progress.logs().len(), 5);
        assert_eq!(progress.title(), Some("Build"));
    }

    #[test]
    fn test_log_fade_order() {
        let style = MinimalStyle::new();
        let ctx = RenderContext::new(&style, 80);
        let mut progress = Progress::with_config("Build", inline_logs(Some(3)));
        for i in 0..3 {
            progress.log(format!("line {i}"));
        }

        let block = progress.render(&ctx);
        let oldest = block.lines[1].spans[0].style.fg.unwrap();
        let newest = block.lines[3].spans[0].style.fg.unwrap();
        assert!(oldest.r < newest.r);
        assert_eq!(newest, style.theme().foreground);
    }

    #[test]
    fn test_cancel_marks_title_and_accent() {
        let style = MinimalStyle::new();
        let ctx = RenderContext::new(&style, 80);
        let mut progress = Progress::with_config("Deploy", inline_logs(Some(5)));
        progress.log("uploading");
        progress.cancel();

        let block = progress.render(&ctx);
        assert!(block.plain_lines()[0].contains(CANCELLED_SUFFIX));
        assert_eq!(block.lines[0].spans[0].style.fg, Some(style.theme().error));
        assert!(progress.is_cancelled());
        assert!(!progress.is_animated());

        let hidden = progress.render(&ctx.without_label());
        assert_eq!(hidden.plain_lines()[0].trim(), CANCELLED_SUFFIX);
    }

    #[test]
    fn test_error_state() {
        let style = MinimalStyle::new();
        let ctx = RenderContext::new(&style, 80);
        let mut progress = Progress::with_config(
            "Deploy",
            ProgressConfig {
                transient: true,
                ..ProgressConfig::default()
            },
        );
        assert!(progress.is_transient());

        progress.set_error("upload failed");
        assert!(progress.is_error());
        assert!(!progress.is_transient());
        assert_eq!(progress.validity(), Validity::Invalid);

        let block = progress.render(&ctx);
        assert_eq!(block.plain_lines(), vec!["upload failed"]);
        assert_eq!(block.lines[0].spans[0].style.fg, Some(style.theme().error));
    }

    #[test]
    fn test_timestamps() {
        let style = MinimalStyle::new();
        let ctx = RenderContext::new(&style, 80);
        let mut progress = Progress::with_config(
            "Build",
            ProgressConfig {
                show_timestamps: true,
                ..inline_logs(None)
            },
        );
        progress.log("compiled");
        let lines = progress.render(&ctx).plain_lines();
        assert!(lines[1].starts_with('['));
        assert!(lines[1].ends_with("s] compiled"));
    }
}
