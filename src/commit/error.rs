use thiserror::Error;

/// Ways the commit-message pipeline can fail.
#[derive(Debug, Error)]
pub enum CommitError {
    /// The staged diff was empty or whitespace only.
    #[error("no staged changes")]
    NoStagedChanges,

    /// The model backend failed; never retried.
    #[error(transparent)]
    Oracle(anyhow::Error),

    /// The command deadline expired before the pipeline finished.
    #[error("timed out waiting for the model (deadline exceeded)")]
    DeadlineExceeded,

    /// Every attempt produced a header that failed validation.
    #[error("failed to generate a valid conventional commit message; please edit manually")]
    Exhausted { last_candidate: String },
}
