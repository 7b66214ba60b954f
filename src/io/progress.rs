//! Progress reporting for long fill operations

use crate::io::configuration::PROGRESS_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {msg} [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner shown while hole values are synthesized
///
/// Quiet mode suppresses all output; every method is then a no-op.
pub struct FillProgress {
    bar: Option<ProgressBar>,
}

impl FillProgress {
    /// Create a progress reporter
    pub fn new(quiet: bool) -> Self {
        let bar = (!quiet).then(|| {
            let bar = ProgressBar::new_spinner();
            bar.set_style(SPINNER_STYLE.clone());
            bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
            bar
        });

        Self { bar }
    }

    /// Whether progress output is being displayed
    pub const fn is_enabled(&self) -> bool {
        self.bar.is_some()
    }

    /// Announce the operation being timed
    pub fn start(&self, message: &'static str) {
        if let Some(bar) = &self.bar {
            bar.set_message(message);
        }
    }

    /// Stop the spinner and report how many holes were filled
    pub fn finish(&self, filled: usize) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(format!("filled {filled} holes"));
        }
    }
}
