use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::PathBuf;
use std::process::Command as GitCommand;

/// Diff source and commit sink used by the commands.
pub trait GitClient {
    /// Output of `git diff <args>`.
    fn diff(&self, args: &[&str]) -> Result<String>;

    /// Record a commit with `message`.
    fn commit(&self, message: &str) -> Result<()>;

    /// Leave `message` in COMMIT_EDITMSG for the next `git commit`.
    fn write_edit_message(&self, message: &str) -> Result<()>;
}

/// `GitClient` backed by the local `git` binary.
pub struct CliGit;

impl GitClient for CliGit {
    fn diff(&self, args: &[&str]) -> Result<String> {
        let mut full = vec!["diff"];
        full.extend_from_slice(args);
        git_output(&full)
    }

    fn commit(&self, message: &str) -> Result<()> {
        git_output(&["commit", "-m", message]).context("git commit failed")?;
        Ok(())
    }

    fn write_edit_message(&self, message: &str) -> Result<()> {
        write_commit_editmsg(message)
    }
}

/// Run a git command and capture stdout as String.
fn git_output(args: &[&str]) -> Result<String> {
    let output = GitCommand::new("git")
        .args(args)
        .output()
        .with_context(|| format!("failed to run git {:?}", args))?;

    if !output.status.success() {
        return Err(anyhow!(
            "git {:?} exited with status {:?}\n{}",
            args,
            output.status.code(),
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Get the path to the Git directory (e.g. .git)
fn git_dir() -> Result<PathBuf> {
    let dir = git_output(&["rev-parse", "--git-dir"])?.trim().to_string();
    Ok(PathBuf::from(dir))
}

/// Write the commit message into .git/COMMIT_EDITMSG so the next `git commit`
/// will use it as the default message in the editor.
fn write_commit_editmsg(message: &str) -> Result<()> {
    let path = git_dir()?.join("COMMIT_EDITMSG");
    fs::write(&path, format!("{message}\n"))
        .with_context(|| format!("failed to write commit message to {:?}", path))?;
    Ok(())
}
