//! Menu Widget: Single-select list with optional live filtering.
//!
//! Options move with arrows or vi keys (`j`/`k` vertical, `h`/`l`
//! inline). While filtering is on, letters belong to the filter, so only
//! arrows navigate.

use super::field::TextField;
use super::traits::{CursorOffset, KeyOutcome, RenderContext, Validity, Widget, WidgetKind};
use crate::input::Key;
use crate::text::{Block, Line, Modifiers, Span, Style};
use unicode_width::UnicodeWidthStr;

/// Prompt in front of the filter text.
pub const FILTER_PROMPT: &str = "Filter: ";
/// Shown instead of the list when the filter matches nothing.
pub const NO_RESULTS: &str = "No results found";

const SELECTED_BULLET: &str = "● ";
const BULLET: &str = "○ ";
/// Gap between options of an inline menu.
const INLINE_GAP: &str = "    ";

/// One selectable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption<T> {
    /// Display name; also what the filter matches against.
    pub name: String,
    /// Value handed back when selected.
    pub value: T,
}

impl<T> MenuOption<T> {
    /// Create an option.
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl From<&str> for MenuOption<String> {
    fn from(name: &str) -> Self {
        Self::new(name, name.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Next,
    Prev,
}

/// A single-select menu.
#[derive(Debug, Clone)]
pub struct Menu<T> {
    title: String,
    options: Vec<MenuOption<T>>,
    inline: bool,
    allow_filtering: bool,
    /// Index into the visible (filtered) options.
    selected: usize,
    filter: TextField,
    name: Option<String>,
    tag: Option<String>,
    valid: Validity,
    cancelled: bool,
}

impl<T> Menu<T> {
    /// Create a vertical menu.
    pub fn new(title: impl Into<String>, options: impl IntoIterator<Item = MenuOption<T>>) -> Self {
        Self {
            title: title.into(),
            options: options.into_iter().collect(),
            inline: false,
            allow_filtering: false,
            selected: 0,
            filter: TextField::new(),
            name: None,
            tag: None,
            valid: Validity::Unknown,
            cancelled: false,
        }
    }

    /// Lay options out on one row.
    #[must_use]
    pub const fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// Enable the live filter.
    #[must_use]
    pub const fn filtering(mut self, allow: bool) -> Self {
        self.allow_filtering = allow;
        self
    }

    /// Key for collected form data. Defaults to the title.
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

    /// Options matching the filter, in order.
    pub fn visible(&self) -> Vec<&MenuOption<T>> {
        if !self.allow_filtering || self.filter.is_empty() {
            return self.options.iter().collect();
        }
        let needle = self.filter.text().to_lowercase();
        self.options
            .iter()
            .filter(|o| o.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Index of the selection within [`Menu::visible`].
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected option, if any option is visible.
    pub fn selected_option(&self) -> Option<&MenuOption<T>> {
        self.visible().get(self.selected).copied()
    }

    /// Current filter text.
    pub fn filter_text(&self) -> &str {
        self.filter.text()
    }

    /// Consume the menu, returning the selected value.
    pub fn into_selected(self) -> Option<T> {
        let name = self.selected_option()?.name.clone();
        self.options.into_iter().find(|o| o.name == name).map(|o| o.value)
    }

    fn step(&mut self, step: Step) {
        let len = self.visible().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = match step {
            Step::Next => (self.selected + 1) % len,
            Step::Prev if self.selected == 0 => len - 1,
            Step::Prev => self.selected - 1,
        };
    }

    fn step_for(&self, key: &Key) -> Option<Step> {
        let letters = !self.allow_filtering;
        match (self.inline, key) {
            (false, Key::Down) | (true, Key::Right) => Some(Step::Next),
            (false, Key::Up) | (true, Key::Left) => Some(Step::Prev),
            (false, Key::Char('j')) | (true, Key::Char('l')) if letters => Some(Step::Next),
            (false, Key::Char('k')) | (true, Key::Char('h')) if letters => Some(Step::Prev),
            _ => None,
        }
    }

    /// Keep the previously selected name selected if it is still visible.
    fn reselect(&mut self, previous: Option<String>) {
        let index = {
            let visible = self.visible();
            previous
                .and_then(|name| visible.iter().position(|o| o.name == name))
                .unwrap_or(0)
        };
        self.selected = index;
    }

    fn option_line(&self, option: &MenuOption<T>, selected: bool, ctx: &RenderContext<'_>) -> Line {
        let theme = ctx.theme();
        if selected {
            Line::styled(format!("{SELECTED_BULLET}{}", option.name), Style::fg(theme.selected))
        } else {
            Line::styled(format!("{BULLET}{}", option.name), Style::fg(theme.text))
        }
    }

    fn render_result(&self, ctx: &RenderContext<'_>) -> Line {
        let theme = ctx.theme();
        let mut line = Line::empty();
        if ctx.show_label {
            line.push_span(Span::raw(self.title.clone()));
            line.push_span(Span::raw(" "));
        }
        let chosen = self.selected_option().map(|o| o.name.clone()).unwrap_or_default();
        let style = if self.cancelled {
            theme.placeholder_style().with_modifiers(Modifiers::STRIKETHROUGH)
        } else {
            theme.result_style()
        };
        line.push(Span::styled(chosen, style))
    }
}

impl<T> Widget for Menu<T> {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Menu
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Block {
        if ctx.done {
            return Block::from(self.render_result(ctx));
        }

        let theme = ctx.theme();
        let mut block = Block::new();

        if ctx.show_label {
            let style = if ctx.is_active { theme.active_label() } else { Style::PLAIN.bold() };
            block.push(Line::styled(self.title.clone(), style));
        }

        if self.allow_filtering {
            block.push(Line::styled(format!("{FILTER_PROMPT}{}", self.filter.text()), Style::fg(theme.text)));
        }

        let visible = self.visible();
        if visible.is_empty() {
            block.push(Line::styled(NO_RESULTS, Style::fg(theme.text)));
        } else if self.inline {
            let mut row = Line::empty();
            for (i, option) in visible.iter().enumerate() {
                if i > 0 {
                    row.push_span(Span::raw(INLINE_GAP));
                }
                row.spans.extend(self.option_line(option, i == self.selected, ctx).spans);
            }
            block.push(row);
        } else {
            for (i, option) in visible.iter().enumerate() {
                block.push(self.option_line(option, i == self.selected, ctx));
            }
        }

        block
    }

    fn cursor_offset(&self, ctx: &RenderContext<'_>) -> CursorOffset {
        if !self.allow_filtering {
            return CursorOffset::ORIGIN;
        }
        let top = if ctx.show_label { 2 } else { 1 };
        CursorOffset::new(top, UnicodeWidthStr::width(FILTER_PROMPT) + self.filter.cursor_column())
    }

    fn name(&self) -> Option<&str> {
        Some(self.name.as_deref().unwrap_or(&self.title))
    }

    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    fn should_show_cursor(&self) -> bool {
        self.allow_filtering
    }

    fn handle_key(&mut self, key: &Key) -> KeyOutcome {
        if *key == Key::Enter {
            if self.allow_filtering && !self.filter.is_empty() && self.visible().is_empty() {
                tracing::debug!(filter = self.filter.text(), "menu rejected enter: no matches");
                return KeyOutcome::Reject;
            }
            return KeyOutcome::Ignored;
        }

        if let Some(step) = self.step_for(key) {
            self.step(step);
            return KeyOutcome::Consumed;
        }

        if self.allow_filtering {
            let previous = self.selected_option().map(|o| o.name.clone());
            if self.filter.handle_key(key) {
                self.reselect(previous);
                return KeyOutcome::Consumed;
            }
        }

        KeyOutcome::Ignored
    }

    fn validate(&mut self) -> Validity {
        self.valid = Validity::from_bool(!self.visible().is_empty());
        self.valid
    }

    fn validity(&self) -> Validity {
        self.valid
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn value(&self) -> Option<String> {
        self.selected_option().map(|o| o.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::MinimalStyle;

    fn frameworks() -> Menu<String> {
        Menu::new("Framework", ["React", "Vue", "Svelte"].map(MenuOption::from))
    }

    fn names(menu: &Menu<String>) -> Vec<&str> {
        menu.visible().iter().map(|o| o.name.as_str()).collect()
    }

    #[test]
    fn test_wraparound() {
        let mut menu = frameworks();
        assert_eq!(menu.handle_key(&Key::Up), KeyOutcome::Consumed);
        assert_eq!(menu.selected_index(), 2);
        menu.handle_key(&Key::Down);
        assert_eq!(menu.selected_index(), 0);
        menu.handle_key(&Key::Char('k'));
        assert_eq!(menu.selected_index(), 2);
        menu.handle_key(&Key::Char('j'));
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn test_inline_keys() {
        let mut menu = frameworks().inline(true);
        menu.handle_key(&Key::Right);
        assert_eq!(menu.selected_index(), 1);
        menu.handle_key(&Key::Char('h'));
        assert_eq!(menu.selected_index(), 0);
        assert_eq!(menu.handle_key(&Key::Down), KeyOutcome::Ignored);
    }

    #[test]
    fn test_filter_narrows_and_accepts() {
        let mut menu = frameworks().filtering(true);
        menu.handle_key(&Key::Char('V'));
        assert_eq!(names(&menu), vec!["Vue", "Svelte"]);
        menu.handle_key(&Key::Char('u'));

        assert_eq!(names(&menu), vec!["Vue"]);
        assert_eq!(menu.selected_index(), 0);
        assert_eq!(menu.handle_key(&Key::Enter), KeyOutcome::Ignored);
        assert_eq!(menu.into_selected().as_deref(), Some("Vue"));
    }

    #[test]
    fn test_filter_without_matches_rejects_enter() {
        let mut menu = frameworks().filtering(true);
        menu.handle_key(&Key::Char('z'));
        menu.handle_key(&Key::Char('z'));

        assert!(menu.visible().is_empty());
        assert_eq!(menu.handle_key(&Key::Enter), KeyOutcome::Reject);

        let style = MinimalStyle::new();
        let block = menu.render(&RenderContext::new(&style, 80));
        assert_eq!(block.plain_lines(), vec!["Framework", "Filter: zz", NO_RESULTS]);
    }

    #[test]
    fn test_filter_keeps_selection_by_name() {
        let mut menu = frameworks().filtering(true);
        menu.handle_key(&Key::Down);
        menu.handle_key(&Key::Down);
        assert_eq!(menu.selected_option().map(|o| o.name.as_str()), Some("Svelte"));

        menu.handle_key(&Key::Char('e'));
        assert_eq!(names(&menu), vec!["React", "Vue", "Svelte"]);
        assert_eq!(menu.selected_index(), 2);

        menu.handle_key(&Key::Char('a'));
        assert_eq!(names(&menu), vec!["React"]);
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn test_letters_filter_instead_of_navigating() {
        let mut menu = frameworks().filtering(true);
        menu.handle_key(&Key::Char('j'));
        assert_eq!(menu.filter_text(), "j");
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn test_render_and_cursor() {
        let style = MinimalStyle::new();
        let ctx = RenderContext::new(&style, 80).active(true);
        let mut menu = frameworks().filtering(true);
        menu.handle_key(&Key::Char('e'));

        let block = menu.render(&ctx);
        assert_eq!(
            block.plain_lines(),
            vec!["Framework", "Filter: e", "● React", "○ Vue", "○ Svelte"]
        );
        assert_eq!(menu.cursor_offset(&ctx), CursorOffset::new(2, 9));
        assert_eq!(menu.cursor_offset(&ctx.without_label()), CursorOffset::new(1, 9));
    }

    #[test]
    fn test_inline_render_and_result() {
        let style = MinimalStyle::new();
        let ctx = RenderContext::new(&style, 80);
        let mut menu = Menu::new("Continue?", [MenuOption::new("Yes", true), MenuOption::new("No", false)]).inline(true);
        assert_eq!(menu.render(&ctx).plain_lines(), vec!["Continue?", "● Yes    ○ No"]);

        menu.handle_key(&Key::Right);
        assert_eq!(menu.render(&ctx.done(true)).plain_lines(), vec!["Continue? No"]);
        assert_eq!(menu.value().as_deref(), Some("No"));
        assert_eq!(menu.into_selected(), Some(false));
    }
}
