//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors raised while driving an interactive widget.
///
/// Validation failures are not errors: they are rendered in place and the
/// interaction keeps running.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing to or reading from the terminal failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The user interrupted the interaction (Ctrl+C / SIGINT).
    ///
    /// By the time this is returned the cancelled state has been painted.
    #[error("interrupted by user")]
    Interrupted,

    /// The key source has no more keys to give.
    #[error("input stream closed")]
    InputClosed,

    /// A container was run without any widget in it.
    #[error("container has no widgets")]
    NoWidgets,

    /// A menu was submitted with no option to select.
    #[error("menu has no option to select")]
    NoSelection,

    /// Installing the interrupt handler failed.
    #[error("failed to install interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
