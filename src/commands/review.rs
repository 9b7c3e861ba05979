use anyhow::{anyhow, Result};
use std::io::Write;

use crate::commit::diff::{prepare_diff, MAX_DIFF_LEN};
use crate::config::{Config, ModelRole};
use crate::deadline::Deadline;
use crate::git::GitClient;
use crate::llm::{prompt_builder, LlmClient};

/// Review the current branch against `base` and print the model's answer.
pub fn run(
    base: &str,
    cfg: &Config,
    git: &dyn GitClient,
    llm: &dyn LlmClient,
    out: &mut dyn Write,
) -> Result<()> {
    let deadline = Deadline::after(cfg.timeout);

    log::info!("Calculating diff against {base}");
    let range = format!("{base}...HEAD");
    let diff = git.diff(&[range.as_str()])?;
    if diff.trim().is_empty() {
        return Err(anyhow!("no diff vs base"));
    }

    let diff = prepare_diff(&diff, MAX_DIFF_LEN);
    let prompt = prompt_builder::review_prompt(base, &diff);

    let model = cfg.model_for(ModelRole::Reason);
    log::info!("Asking {model} for a review");
    let review = llm.generate(&deadline, model, &prompt)?;

    writeln!(out, "{}", review.trim_end())?;
    log::info!("Review complete");
    Ok(())
}
