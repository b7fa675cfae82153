//! Form: a titled, validating container that returns its values by name.

use super::Container;
use crate::error::Result;
use crate::style::Decoration;
use crate::terminal::Backend;
use crate::widget::{Button, Menu, Message, TextInput, Widget};
use std::rc::Rc;

/// Values collected by a submitted form, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    /// Value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    /// Entries in form order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check for an empty form.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `(name, value)` pairs.
    pub fn into_vec(self) -> Vec<(String, String)> {
        self.entries
    }
}

impl From<Vec<(String, String)>> for FormData {
    fn from(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for FormData {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A heading followed by inputs, menus and buttons.
///
/// Submitting validates every widget; the form only completes once all of
/// them are valid.
///
/// # Example
///
/// ```
/// use rivet::{Form, Key, MinimalStyle, ScriptedBackend, TextInput};
/// use std::rc::Rc;
///
/// let mut form = Form::new("Sign up", Rc::new(MinimalStyle::new()));
/// form.add_input(TextInput::new("Name").with_name("name"));
///
/// let mut backend = ScriptedBackend::new().type_text("Ada").press(Key::Enter);
/// let data = form.run(&mut backend).unwrap();
/// assert_eq!(data.get("name"), Some("Ada"));
/// ```
#[derive(Debug)]
pub struct Form<'a> {
    container: Container<'a>,
}

impl<'a> Form<'a> {
    /// A form headed by `title`.
    pub fn new(title: &str, style: Rc<dyn Decoration>) -> Self {
        let mut container = Container::new(style).validate_on_submit(true);
        container.push(Message::heading(title));
        Self { container }
    }

    /// Append a text input; its value is collected under its name.
    pub fn add_input(&mut self, input: TextInput) -> &mut Self {
        self.container.push(input);
        self
    }

    /// Append a menu; the selected option's name is collected.
    pub fn add_menu<T: 'a>(&mut self, menu: Menu<T>) -> &mut Self {
        self.container.push(menu);
        self
    }

    /// Append a button.
    pub fn add_button(&mut self, button: Button<'a>) -> &mut Self {
        self.container.push(button);
        self
    }

    /// Append any other widget.
    pub fn add_widget(&mut self, widget: impl Widget + 'a) -> &mut Self {
        self.container.push(widget);
        self
    }

    /// The underlying container.
    pub const fn container(&self) -> &Container<'a> {
        &self.container
    }

    /// Run until every widget validates and the form is submitted.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Interrupted`] on Ctrl+C and backend errors
    /// as they occur.
    pub fn run<B: Backend + ?Sized>(&mut self, backend: &mut B) -> Result<FormData> {
        self.container.run(backend)?;
        let data = FormData::from(self.container.values());
        tracing::debug!(fields = data.len(), "form submitted");
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::input::Key;
    use crate::style::MinimalStyle;
    use crate::terminal::ScriptedBackend;
    use crate::widget::MenuOption;

    fn style() -> Rc<dyn Decoration> {
        Rc::new(MinimalStyle::new())
    }

    #[test]
    fn test_collects_by_name() {
        let mut form = Form::new("Login", style());
        form.add_input(TextInput::new("Name").with_name("name"))
            .add_input(TextInput::new("Password").with_name("password").password(true));

        let mut backend = ScriptedBackend::new()
            .type_text("John")
            .press(Key::Enter)
            .type_text("secret")
            .press(Key::Enter);
        let data = form.run(&mut backend).unwrap();

        assert_eq!(data.get("name"), Some("John"));
        assert_eq!(data.get("password"), Some("secret"));
        assert_eq!(data.len(), 2);
        assert!(!backend.output_text().contains("secret"));
    }

    #[test]
    fn test_required_blocks_submit() {
        let mut form = Form::new("Login", style());
        form.add_input(TextInput::new("Name").with_name("name"));

        let mut backend = ScriptedBackend::new().press(Key::Enter);
        assert!(matches!(form.run(&mut backend), Err(Error::InputClosed)));
        assert!(backend.output_text().contains(crate::widget::REQUIRED_MESSAGE));
    }

    #[test]
    fn test_menu_value_collected() {
        let mut form = Form::new("Project", style());
        form.add_menu(Menu::new("Framework", ["React", "Vue", "Svelte"].map(MenuOption::from)).with_name("fw"));

        let mut backend = ScriptedBackend::new().press(Key::Down).press(Key::Enter);
        let data = form.run(&mut backend).unwrap();
        assert_eq!(data.get("fw"), Some("Vue"));
    }
}
