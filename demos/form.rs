//! Form demo: a bordered login form with a button.
//!
//! Run with `cargo run --example form`.

use rivet::{BorderedStyle, Button, TextInput, Toolkit};

fn main() -> rivet::Result<()> {
    let mut app = Toolkit::new(BorderedStyle::new());

    let mut form = app.form("Login");
    form.add_input(TextInput::new("Username").with_name("username"))
        .add_input(TextInput::new("Password").with_name("password").password(true))
        .add_button(Button::new("Sign in"));

    let data = app.run_form(&mut form)?;
    for (name, value) in data.iter() {
        let shown = if name == "password" { "*".repeat(value.chars().count()) } else { value.to_string() };
        app.print(&format!("{name}: {shown}"))?;
    }
    Ok(())
}
