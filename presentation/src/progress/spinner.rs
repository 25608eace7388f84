//! "Consulting the chef..." indicator shown while a reply is pending

use concierge_application::THINKING_INDICATOR;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner for one pending reply.
///
/// Lives outside the transcript; it is cleared before the reply is printed.
pub struct ThinkingSpinner {
    bar: Option<ProgressBar>,
}

impl ThinkingSpinner {
    /// Start spinning, or print a plain line when `animated` is false
    pub fn start(animated: bool) -> Self {
        if !animated {
            println!("{}", THINKING_INDICATOR);
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(THINKING_INDICATOR);
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    /// A spinner that shows nothing
    pub fn hidden() -> Self {
        Self { bar: None }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.yellow} {msg:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Remove the spinner line
    pub fn finish(mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for ThinkingSpinner {
    fn drop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
