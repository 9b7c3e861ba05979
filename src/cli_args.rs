use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use std::time::Duration;

use crate::config::parse_duration;

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "commitcraft",
    version,
    about = "LLM-assisted Conventional Commit headers, reviews and reports"
)]
#[command(group(
    ArgGroup::new("model_group")
        .args(["model", "no_model"])
        .multiple(false)
))]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Model backend to call
    #[arg(long, value_enum, global = true)]
    pub provider: Option<Provider>,

    /// Model name to use (e.g. llama3.1:8b). If 'none', acts like --no-model.
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Model for reasoning-heavy commands (review, gen-tests, pprof-analyze)
    #[arg(long, global = true)]
    pub model_reason: Option<String>,

    /// Model for code-editing commands (lint-fixes)
    #[arg(long, global = true)]
    pub model_coder: Option<String>,

    /// Disable model calls; return dummy responses instead
    #[arg(long, global = true)]
    pub no_model: bool,

    /// API key for the OpenAI provider (otherwise uses OPENAI_API_KEY env var)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Ollama API host (e.g. http://localhost:11434)
    #[arg(long, global = true)]
    pub ollama_host: Option<String>,

    /// Deadline for the whole command (e.g. 90s, 2m)
    #[arg(long, value_parser = parse_duration, global = true)]
    pub timeout: Option<Duration>,

    /// Maximum commit header length before shortening is requested
    #[arg(long, global = true)]
    pub max_summary_len: Option<usize>,

    /// Subcommand (defaults to 'commit')
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Model backends.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Ollama,
    #[value(name = "openai")]
    OpenAi,
    #[value(name = "none")]
    Offline,
}

/// Subcommands, e.g. `commitcraft commit --prefix WIT-341`
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a Conventional Commit header from staged changes
    #[command(alias = "llm-commit")]
    Commit(CommitArgs),

    /// Structured code review of the current branch against a base ref
    #[command(alias = "pr-review")]
    Review {
        /// Base ref to diff against
        #[arg(long, default_value = "origin/main")]
        base: String,
    },

    /// Diagnose logs and propose next debugging steps
    ExplainLogs(ReportArgs),

    /// Explain a PostgreSQL EXPLAIN ANALYZE plan and suggest indexes or rewrites
    ExplainAnalyze(ReportArgs),

    /// Analyze `pprof -top` output and suggest concrete optimizations
    #[command(alias = "pprof")]
    PprofAnalyze(ReportArgs),

    /// Review a Postgres migration for safety and downtime risks
    ReviewMigration(ReportArgs),

    /// Propose the smallest code changes for linter findings
    LintFixes(ReportArgs),

    /// Generate table-driven tests for one function of a source file
    GenTests(GenTestsArgs),
}

/// Input for the report commands.
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Path to the input file, or '-' for stdin
    #[arg(long = "in", value_name = "PATH", default_value = "-")]
    pub input: String,
}

#[derive(Args, Debug, Clone)]
pub struct GenTestsArgs {
    /// Source file containing the function
    #[arg(long)]
    pub file: String,

    /// Name of the function to test
    #[arg(long = "func", value_name = "NAME")]
    pub function: String,

    /// Output file (default <func>_test.<ext of --file>)
    #[arg(long)]
    pub out: Option<String>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct CommitArgs {
    /// Text prepended to the first line of the generated commit message
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Run git commit with the accepted header
    #[arg(long)]
    pub autocommit: bool,

    /// Write the accepted header into .git/COMMIT_EDITMSG (no commit is created)
    #[arg(long)]
    pub apply: bool,
}
