pub mod noop;
pub mod ollama;
pub mod openai;
pub mod prompt_builder;
pub(crate) mod prompts;
pub mod spinner;

use crate::deadline::Deadline;
use anyhow::{anyhow, Result};
use std::time::Duration;

/// Trait for talking to a text-completion backend.
pub trait LlmClient: Send + Sync {
    /// Complete `prompt` with `model`, finishing before `deadline`.
    fn generate(&self, deadline: &Deadline, model: &str, prompt: &str) -> Result<String>;
}

/// Per-request timeout for an HTTP call made under `deadline`.
pub(crate) fn request_timeout(deadline: &Deadline) -> Result<Duration> {
    deadline
        .remaining()
        .ok_or_else(|| anyhow!("deadline exceeded before the model request was sent"))
}

/// Truncate long strings for debug logging.
pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((idx, _)) => format!(
            "{}...\n[truncated {} chars]",
            &s[..idx],
            s[idx..].chars().count()
        ),
    }
}
