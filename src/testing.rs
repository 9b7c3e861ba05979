//! Test doubles for the model and git collaborators.

use anyhow::{anyhow, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use crate::cli_args::Provider;
use crate::commit::PipelineObserver;
use crate::config::Config;
use crate::deadline::Deadline;
use crate::files::{is_stdin, Files};
use crate::git::GitClient;
use crate::llm::LlmClient;

/// Replays scripted answers and records every prompt it receives.
pub struct ScriptedClient {
    answers: Mutex<Vec<Result<String>>>,
    fallback: Option<String>,
    delay: Option<Duration>,
    prompts: Mutex<Vec<String>>,
    models: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn new(answers: Vec<Result<String>>) -> Self {
        ScriptedClient {
            answers: Mutex::new(answers.into_iter().rev().collect()),
            fallback: None,
            delay: None,
            prompts: Mutex::new(Vec::new()),
            models: Mutex::new(Vec::new()),
        }
    }

    /// Answer every prompt with `answer`.
    pub fn always(answer: &str) -> Self {
        ScriptedClient {
            fallback: Some(answer.to_string()),
            ..ScriptedClient::new(Vec::new())
        }
    }

    /// Sleep for `delay` before every answer, like a slow model.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Model names passed with each prompt.
    pub fn models(&self) -> Vec<String> {
        self.models.lock().unwrap().clone()
    }
}

impl LlmClient for ScriptedClient {
    fn generate(&self, _deadline: &Deadline, model: &str, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.models.lock().unwrap().push(model.to_string());
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
        match self.answers.lock().unwrap().pop() {
            Some(answer) => answer,
            None => self
                .fallback
                .clone()
                .ok_or_else(|| anyhow!("no scripted answer left")),
        }
    }
}

/// In-memory git: a fixed diff, recorded commits and edit messages.
#[derive(Default)]
pub struct FakeGit {
    pub diff: String,
    pub diff_args: RefCell<Vec<Vec<String>>>,
    pub commits: RefCell<Vec<String>>,
    pub edit_messages: RefCell<Vec<String>>,
}

impl FakeGit {
    pub fn with_diff(diff: &str) -> Self {
        FakeGit {
            diff: diff.to_string(),
            ..FakeGit::default()
        }
    }
}

impl GitClient for FakeGit {
    fn diff(&self, args: &[&str]) -> Result<String> {
        self.diff_args
            .borrow_mut()
            .push(args.iter().map(|a| a.to_string()).collect());
        Ok(self.diff.clone())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.commits.borrow_mut().push(message.to_string());
        Ok(())
    }

    fn write_edit_message(&self, message: &str) -> Result<()> {
        self.edit_messages.borrow_mut().push(message.to_string());
        Ok(())
    }
}

/// Observer that stays quiet.
pub struct SilentObserver;

impl PipelineObserver for SilentObserver {}

/// Offline config with distinct model names per role.
pub fn test_config() -> Config {
    Config {
        provider: Provider::Offline,
        model: "test-model".into(),
        model_reason: "test-reason".into(),
        model_coder: "test-coder".into(),
        ollama_host: "http://localhost:11434".into(),
        openai_api_key: None,
        openai_base_url: "https://api.openai.com".into(),
        timeout: Duration::from_secs(30),
        max_summary_len: 72,
    }
}

/// In-memory files and stdin.
#[derive(Default)]
pub struct MemoryFiles {
    files: HashMap<String, String>,
    stdin: String,
    interactive: bool,
    written: RefCell<HashMap<String, String>>,
}

impl MemoryFiles {
    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files.insert(path.to_string(), contents.to_string());
        self
    }

    pub fn with_stdin(mut self, contents: &str, interactive: bool) -> Self {
        self.stdin = contents.to_string();
        self.interactive = interactive;
        self
    }

    pub fn written(&self, path: &str) -> Option<String> {
        self.written.borrow().get(path).cloned()
    }
}

impl Files for MemoryFiles {
    fn read(&self, path: &str) -> Result<String> {
        if is_stdin(path) {
            return Ok(self.stdin.clone());
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("failed to read {path}"))
    }

    fn write(&self, path: &str, contents: &str) -> Result<()> {
        self.written
            .borrow_mut()
            .insert(path.to_string(), contents.to_string());
        Ok(())
    }

    fn stdin_is_interactive(&self) -> bool {
        self.interactive
    }
}
