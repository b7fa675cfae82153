//! Progress demo: a fading inline log in the fancy style.
//!
//! Run with `cargo run --example progress_log` and press Ctrl+C midway to
//! see the cancelled state.

use rivet::{FancyStyle, Progress, ProgressConfig, Toolkit};
use std::thread;
use std::time::Duration;

const STEPS: &[&str] = &[
    "Resolving dependencies",
    "Downloading crossterm",
    "Downloading unicode-width",
    "Compiling bitflags",
    "Compiling crossterm",
    "Compiling rivet",
    "Linking",
];

fn main() -> rivet::Result<()> {
    let mut app = Toolkit::new(FancyStyle::new());
    app.print_title("Build", None)?;

    let config = ProgressConfig {
        inline_logs: true,
        lines_to_show: Some(4),
        show_timestamps: true,
        ..ProgressConfig::default()
    };
    let mut progress = app.progress_with(Progress::with_config("Building project", config))?;
    for step in STEPS {
        for _ in 0..5 {
            progress.tick()?;
            thread::sleep(Duration::from_millis(60));
        }
        progress.log(*step)?;
    }
    progress.finish()?;

    let mut quick = app.progress("Cleaning up")?;
    thread::sleep(Duration::from_millis(300));
    quick.log("Removed 12 temporary files")?;
    quick.finish()?;
    Ok(())
}
