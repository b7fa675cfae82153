//! Cooperative Ctrl+C handling for work done outside a key read.
//!
//! While a key read is blocking, Ctrl+C arrives as a key and is decoded
//! directly. Live regions are driven by caller code between reads, so
//! while one is open the signal is recorded in an [`InterruptFlag`] and
//! observed on its next update. With no live region open, or on a second
//! Ctrl+C while the first is still pending, the process exits at once.

use crate::error::Result;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

/// Exit status used when the user aborts.
pub const INTERRUPT_EXIT_CODE: i32 = 130;

static GLOBAL: OnceLock<InterruptFlag> = OnceLock::new();

/// A shared "the user asked to stop" flag.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag {
    tripped: Arc<AtomicBool>,
    /// Open live regions that will observe the flag.
    armed: Arc<AtomicUsize>,
}

impl InterruptFlag {
    /// A private flag no signal handler knows about.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide flag wired to SIGINT.
    ///
    /// The handler is installed on first use. If installation fails the
    /// failure is logged and the returned flag simply never trips.
    pub fn global() -> Self {
        GLOBAL
            .get_or_init(|| {
                let flag = Self::new();
                if let Err(err) = flag.install() {
                    tracing::warn!(error = %err, "interrupt handler not installed");
                }
                flag
            })
            .clone()
    }

    /// Route SIGINT to this flag.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Signal`] if a handler is already installed
    /// or the platform refuses one.
    pub fn install(&self) -> Result<()> {
        let tripped = Arc::clone(&self.tripped);
        let armed = Arc::clone(&self.armed);
        ctrlc::set_handler(move || {
            if should_exit(&tripped, &armed) {
                std::process::exit(INTERRUPT_EXIT_CODE);
            }
        })?;
        tracing::debug!("interrupt handler installed");
        Ok(())
    }

    /// Mark the flag as tripped.
    pub fn trip(&self) {
        self.tripped.store(true, Ordering::SeqCst);
    }

    /// Check whether an interrupt is pending.
    pub fn is_tripped(&self) -> bool {
        self.tripped.load(Ordering::SeqCst)
    }

    /// Clear a pending interrupt, returning whether one was pending.
    pub fn reset(&self) -> bool {
        self.tripped.swap(false, Ordering::SeqCst)
    }

    /// Register an observer. Clears any press left over from earlier work.
    pub fn arm(&self) {
        self.tripped.store(false, Ordering::SeqCst);
        self.armed.fetch_add(1, Ordering::SeqCst);
    }

    /// Unregister an observer.
    pub fn disarm(&self) {
        let _ = self
            .armed
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }

    /// Check whether any observer is registered.
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst) > 0
    }

    /// Record one SIGINT. Returns `true` when the process should exit:
    /// nobody observes the flag, or an earlier press is still pending.
    pub fn signal(&self) -> bool {
        should_exit(&self.tripped, &self.armed)
    }
}

fn should_exit(tripped: &AtomicBool, armed: &AtomicUsize) -> bool {
    if armed.load(Ordering::SeqCst) == 0 {
        return true;
    }
    tripped.swap(true, Ordering::SeqCst)
}
