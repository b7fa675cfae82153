//! Basic usage: one prompt of each kind in the tagged style.
//!
//! Run with `cargo run --example basic_usage`. Set `RIVET_LOG=rivet.log`
//! to write diagnostics to a file.

use rivet::{MenuOption, TaggedStyle, TextInput, Toolkit};
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging() {
    let Some(path) = std::env::var_os("RIVET_LOG") else {
        return;
    };
    let Ok(file) = File::create(path) else {
        return;
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rivet=debug")))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .init();
}

fn main() -> rivet::Result<()> {
    init_logging();

    let mut app = Toolkit::new(TaggedStyle::new("rivet"));
    app.print_title("Create a new project", Some("rivet"))?;
    app.print_line()?;

    let name = app.input_with(TextInput::new("Project name").placeholder("my-app"))?;
    let framework = app.ask(
        "Framework",
        [
            MenuOption::new("React", "react"),
            MenuOption::new("Vue", "vue"),
            MenuOption::new("Svelte", "svelte"),
        ],
    )?;
    let typescript = app.confirm("Use TypeScript?")?;

    app.print_line()?;
    app.print(&format!("Creating {name} with {framework} (typescript: {typescript})"))?;
    Ok(())
}
