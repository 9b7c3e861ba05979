use anyhow::{anyhow, Result};
use std::io::Write;

use crate::config::{Config, ModelRole};
use crate::deadline::Deadline;
use crate::files::{is_stdin, Files};
use crate::llm::{prompt_builder, prompts, LlmClient};

/// Commands that send one text input to a model and print its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    ExplainLogs,
    ExplainAnalyze,
    PprofAnalyze,
    ReviewMigration,
    LintFixes,
}

impl ReportKind {
    fn instructions(self) -> &'static str {
        match self {
            ReportKind::ExplainLogs => prompts::EXPLAIN_LOGS,
            ReportKind::ExplainAnalyze => prompts::EXPLAIN_ANALYZE,
            ReportKind::PprofAnalyze => prompts::PPROF_ANALYZE,
            ReportKind::ReviewMigration => prompts::REVIEW_MIGRATION,
            ReportKind::LintFixes => prompts::LINT_FIXES,
        }
    }

    fn role(self) -> ModelRole {
        match self {
            ReportKind::PprofAnalyze => ModelRole::Reason,
            ReportKind::LintFixes => ModelRole::Coder,
            _ => ModelRole::General,
        }
    }

    /// What the input is called in messages.
    fn subject(self) -> &'static str {
        match self {
            ReportKind::ExplainLogs => "logs",
            ReportKind::ExplainAnalyze => "query plan",
            ReportKind::PprofAnalyze => "pprof output",
            ReportKind::ReviewMigration => "migration",
            ReportKind::LintFixes => "lint findings",
        }
    }
}

/// Read `input` (a path or `-` for stdin), ask the model for a `kind` report
/// and write it to `out`.
///
/// Reading from a terminal would block until EOF, so a stdin input is refused
/// when nothing is piped in.
pub fn run(
    kind: ReportKind,
    input: &str,
    cfg: &Config,
    files: &dyn Files,
    llm: &dyn LlmClient,
    out: &mut dyn Write,
) -> Result<()> {
    let subject = kind.subject();
    if is_stdin(input) && files.stdin_is_interactive() {
        return Err(anyhow!("no {subject} provided; pipe them on stdin or pass --in <file>"));
    }

    let deadline = Deadline::after(cfg.timeout);
    let source = if is_stdin(input) { "stdin" } else { input };
    log::info!("Reading {subject} from {source}");
    let text = files.read(input)?;
    if text.trim().is_empty() {
        return Err(anyhow!("no {subject} found in {source}"));
    }
    log::info!("Read {} bytes of {subject}", text.len());

    let model = cfg.model_for(kind.role());
    log::info!("Asking {model} for a report");
    let prompt = prompt_builder::report_prompt(kind.instructions(), &text);
    let report = llm.generate(&deadline, model, &prompt)?;

    writeln!(out, "{}", report.trim_end())?;
    log::info!("Report complete");
    Ok(())
}
