use super::diff::{prepare_diff, MAX_DIFF_LEN};
use super::error::CommitError;
use super::normalize::{apply_prefix, extract_header, normalize_message};
use super::observer::PipelineObserver;
use super::validate::is_conventional_commit;
use crate::deadline::Deadline;
use crate::llm::prompt_builder;
use crate::llm::LlmClient;

/// Attempts made before a caller is asked to fix the header by hand.
pub const MAX_ATTEMPTS: usize = 3;

/// Where the attempt loop stands.
#[derive(Debug, PartialEq, Eq)]
enum State {
    Attempt { number: usize, last_candidate: String },
    Success(String),
    Exhausted(String),
}

/// Turns a staged diff into a validated Conventional Commit header.
pub struct CommitPipeline<'a> {
    pub llm: &'a dyn LlmClient,
    pub observer: &'a dyn PipelineObserver,
    pub model: &'a str,
    pub max_summary_len: usize,
    pub max_diff_len: usize,
    pub max_attempts: usize,
}

impl<'a> CommitPipeline<'a> {
    pub fn new(
        llm: &'a dyn LlmClient,
        observer: &'a dyn PipelineObserver,
        model: &'a str,
        max_summary_len: usize,
    ) -> Self {
        CommitPipeline {
            llm,
            observer,
            model,
            max_summary_len,
            max_diff_len: MAX_DIFF_LEN,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Run the bounded attempt loop over `raw_diff`.
    ///
    /// Model failures end the run immediately; only headers that fail
    /// validation lead to another attempt with the stricter prompt.
    pub fn run(
        &self,
        raw_diff: &str,
        prefix: &str,
        deadline: &Deadline,
    ) -> Result<String, CommitError> {
        if raw_diff.trim().is_empty() {
            return Err(CommitError::NoStagedChanges);
        }

        let diff = prepare_diff(raw_diff, self.max_diff_len);
        let mut state = State::Attempt {
            number: 1,
            last_candidate: String::new(),
        };

        loop {
            state = match state {
                State::Attempt { number, last_candidate } => {
                    self.attempt(number, last_candidate, &diff, prefix, deadline)?
                }
                State::Success(header) => {
                    self.observer.succeeded(&header);
                    return Ok(header);
                }
                State::Exhausted(last_candidate) => {
                    self.observer.exhausted(&last_candidate);
                    return Err(CommitError::Exhausted { last_candidate });
                }
            };
        }
    }

    fn attempt(
        &self,
        number: usize,
        last_candidate: String,
        diff: &str,
        prefix: &str,
        deadline: &Deadline,
    ) -> Result<State, CommitError> {
        if deadline.is_expired() {
            log::debug!(
                "Deadline expired before attempt {number}; last candidate {last_candidate:?}"
            );
            return Err(CommitError::DeadlineExceeded);
        }

        self.observer.attempt_started(number, self.max_attempts);
        let prompt = prompt_builder::commit_prompt(number, diff, self.max_summary_len);
        let raw = self.call(deadline, &prompt)?;

        let message = apply_prefix(&normalize_message(&raw), prefix);
        self.observer.candidate_received(number, &message);

        let mut header = extract_header(&message).to_string();
        let length = header.chars().count();
        if length > self.max_summary_len {
            self.observer.shortening_requested(length, self.max_summary_len);
            if let Some(short) = self.shorten(&header, deadline) {
                header = short;
            }
        }

        if is_conventional_commit(&header) {
            return Ok(State::Success(header));
        }

        self.observer.candidate_rejected(number, &header);
        if number >= self.max_attempts {
            Ok(State::Exhausted(header))
        } else {
            Ok(State::Attempt {
                number: number + 1,
                last_candidate: header,
            })
        }
    }

    fn call(&self, deadline: &Deadline, prompt: &str) -> Result<String, CommitError> {
        self.llm.generate(deadline, self.model, prompt).map_err(|err| {
            if deadline.is_expired() {
                log::debug!("Model call failed after the deadline: {err:#}");
                CommitError::DeadlineExceeded
            } else {
                CommitError::Oracle(err)
            }
        })
    }

    /// One best-effort request to compress an overlong header.
    fn shorten(&self, header: &str, deadline: &Deadline) -> Option<String> {
        let prompt = prompt_builder::shorten_prompt(header, self.max_summary_len);
        match self.llm.generate(deadline, self.model, &prompt) {
            Ok(answer) => {
                let short = extract_header(&answer);
                if short.is_empty() {
                    None
                } else {
                    Some(short.to_string())
                }
            }
            Err(err) => {
                log::warn!("Shortening failed, keeping the original header: {err:#}");
                None
            }
        }
    }
}
