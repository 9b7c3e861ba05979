use anyhow::Result;
use crossterm::tty::IsTty;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::LlmClient;
use crate::deadline::Deadline;

/// Decorator that shows a stderr spinner while a model call is in flight.
pub struct SpinnerClient {
    inner: Box<dyn LlmClient>,
    enabled: bool,
}

impl SpinnerClient {
    /// Wrap `inner`; the spinner only draws when stderr is a terminal.
    pub fn wrap(inner: Box<dyn LlmClient>) -> Self {
        let enabled = std::io::stderr().is_tty();
        SpinnerClient { inner, enabled }
    }

    fn start(&self, model: &str) -> Option<ProgressBar> {
        if !self.enabled {
            return None;
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠸", "⠴", "⠦", "⠇", "✓"])
            .template("{spinner} {msg} {elapsed}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(format!("waiting for {model}"));
        spinner.enable_steady_tick(Duration::from_millis(100));
        Some(spinner)
    }
}

impl LlmClient for SpinnerClient {
    fn generate(&self, deadline: &Deadline, model: &str, prompt: &str) -> Result<String> {
        let spinner = self.start(model);
        let result = self.inner.generate(deadline, model, prompt);
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        result
    }
}
