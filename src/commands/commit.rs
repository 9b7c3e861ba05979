use anyhow::Result;
use std::io::Write;

use crate::cli_args::CommitArgs;
use crate::commit::{CommitError, CommitPipeline, PipelineObserver};
use crate::config::Config;
use crate::deadline::Deadline;
use crate::git::GitClient;
use crate::llm::LlmClient;

/// Generate a Conventional Commit header from the staged diff and print it.
///
/// On exhaustion the last candidate is still printed so it can be edited by
/// hand, and the exhaustion error is returned.
pub fn run(
    args: &CommitArgs,
    cfg: &Config,
    git: &dyn GitClient,
    llm: &dyn LlmClient,
    observer: &dyn PipelineObserver,
    out: &mut dyn Write,
) -> Result<()> {
    let deadline = Deadline::after(cfg.timeout);

    log::info!("Evaluating the staged diff");
    let diff = git.diff(&["--staged"])?;
    if diff.trim().is_empty() {
        return Err(CommitError::NoStagedChanges.into());
    }

    let pipeline = CommitPipeline::new(llm, observer, &cfg.model, cfg.max_summary_len);
    let header = match pipeline.run(&diff, &args.prefix, &deadline) {
        Ok(header) => header,
        Err(CommitError::Exhausted { last_candidate }) => {
            writeln!(out, "{last_candidate}")?;
            return Err(CommitError::Exhausted { last_candidate }.into());
        }
        Err(err) => return Err(err.into()),
    };

    writeln!(out, "{header}")?;

    if args.apply {
        git.write_edit_message(&header)?;
        log::info!("Wrote commit header to COMMIT_EDITMSG");
    }

    if args.autocommit {
        log::info!("Running git commit with the generated header");
        git.commit(&header)?;
        log::info!("Commit recorded");
    }

    Ok(())
}
