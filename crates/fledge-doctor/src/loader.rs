//! Terminal Spinner
//!
//! Single progress handle shared by the doctor phases. At most one message
//! is active at a time; succeed/fail leave a persistent status line behind.

use std::time::Duration;

use console::{style, Term};
use indicatif::ProgressBar;

/// Spinner handle passed through diagnostics, selection and each fix in turn.
pub struct Loader {
    bar: Option<ProgressBar>,
    message: String,
    enabled: bool,
}

impl Loader {
    /// Create a loader that renders to the terminal.
    pub fn new() -> Self {
        Self {
            bar: None,
            message: String::new(),
            enabled: true,
        }
    }

    /// Create a silent loader; used by tests and non-interactive runs.
    pub fn hidden() -> Self {
        Self {
            bar: None,
            message: String::new(),
            enabled: false,
        }
    }

    /// Start spinning with a message, replacing any previous one.
    pub fn start(&mut self, message: impl Into<String>) {
        self.clear();
        self.message = message.into();
        if self.enabled {
            let bar = ProgressBar::new_spinner();
            bar.set_message(self.message.clone());
            bar.enable_steady_tick(Duration::from_millis(100));
            self.bar = Some(bar);
        }
    }

    /// Current message, if a spinner was started.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Stop and clear without leaving a status line.
    pub fn stop(&mut self) {
        self.clear();
        self.message.clear();
    }

    /// Mark the current message as done.
    pub fn succeed(&mut self) {
        let message = self.message.clone();
        self.finish_with(&style("✓").green().to_string(), &message);
    }

    /// Mark as done with a different message.
    pub fn succeed_with(&mut self, message: &str) {
        self.finish_with(&style("✓").green().to_string(), message);
    }

    /// Mark the current message as failed.
    pub fn fail(&mut self) {
        let message = self.message.clone();
        self.finish_with(&style("✖").red().to_string(), &message);
    }

    /// Mark as failed with a different message.
    pub fn fail_with(&mut self, message: &str) {
        self.finish_with(&style("✖").red().to_string(), message);
    }

    fn finish_with(&mut self, symbol: &str, message: &str) {
        self.clear();
        if self.enabled {
            // A failed status write must not interrupt the phase owning the spinner
            let _ = Term::stdout().write_line(&format!(" {symbol} {message}"));
        }
        self.message.clear();
    }

    fn clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Loader {
    fn drop(&mut self) {
        self.clear();
    }
}
