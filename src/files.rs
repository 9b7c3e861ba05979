use anyhow::{anyhow, Context, Result};
use crossterm::tty::IsTty;
use std::fs;
use std::io::{self, Read};

/// File and stdin access used by the report and test generation commands.
pub trait Files {
    /// Contents of `path`, or of stdin when `path` is `-` or empty.
    fn read(&self, path: &str) -> Result<String>;

    fn write(&self, path: &str, contents: &str) -> Result<()>;

    /// Whether stdin is a terminal rather than a pipe or file.
    fn stdin_is_interactive(&self) -> bool;
}

pub fn is_stdin(path: &str) -> bool {
    matches!(path.trim(), "" | "-")
}

/// `Files` backed by the host filesystem and the process stdin.
pub struct OsFiles;

impl Files for OsFiles {
    fn read(&self, path: &str) -> Result<String> {
        if is_stdin(path) {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| anyhow!("failed to read stdin: {e}"))?;
            return Ok(buf);
        }
        fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
    }

    fn write(&self, path: &str, contents: &str) -> Result<()> {
        fs::write(path, contents).with_context(|| format!("failed to write {path}"))
    }

    fn stdin_is_interactive(&self) -> bool {
        io::stdin().is_tty()
    }
}
