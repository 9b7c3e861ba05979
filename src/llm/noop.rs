use anyhow::Result;

use super::LlmClient;
use crate::deadline::Deadline;

/// Header returned for every commit or shortening prompt.
pub const DUMMY_HEADER: &str = "chore: update staged changes";

/// No-op / dummy model client for development with --no-model or model=none.
pub struct NoopClient;

impl LlmClient for NoopClient {
    fn generate(&self, _deadline: &Deadline, model: &str, prompt: &str) -> Result<String> {
        log::debug!("NoopClient answering prompt for {model:?} without a model call");
        if prompt.contains("Conventional Commit") {
            return Ok(DUMMY_HEADER.to_string());
        }
        if prompt.starts_with("Write table-driven tests") {
            return Ok("// Dummy tests for testing (LLM disabled)".to_string());
        }
        Ok("Dummy review for testing\n\n(LLM disabled)".to_string())
    }
}
