mod cli_args;
mod commands;
mod commit;
mod config;
mod deadline;
mod files;
mod git;
mod llm;
mod logging;
mod setup;
mod snippet;
#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};

use crate::cli_args::{Cli, Command, CommitArgs};
use crate::commands::report::ReportKind;
use crate::commit::LogObserver;
use crate::config::Config;
use crate::files::OsFiles;
use crate::git::CliGit;
use crate::logging::init_logger;
use crate::setup::build_llm_client;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let cfg = Config::from_sources(&cli)?;
    log::debug!(
        "Resolved config: provider={:?}, model={}, reason={}, coder={}, timeout={:?}, max_summary_len={}",
        cfg.provider,
        cfg.model,
        cfg.model_reason,
        cfg.model_coder,
        cfg.timeout,
        cfg.max_summary_len
    );

    let llm = build_llm_client(&cfg)?;
    let git = CliGit;
    let mut stdout = io::stdout().lock();

    let report = |kind: ReportKind, input: &str, out: &mut dyn Write| {
        commands::report::run(kind, input, &cfg, &OsFiles, llm.as_ref(), out)
    };

    match &cli.command {
        Some(Command::Review { base }) => {
            commands::review::run(base, &cfg, &git, llm.as_ref(), &mut stdout)
        }
        Some(Command::ExplainLogs(args)) => report(ReportKind::ExplainLogs, &args.input, &mut stdout),
        Some(Command::ExplainAnalyze(args)) => {
            report(ReportKind::ExplainAnalyze, &args.input, &mut stdout)
        }
        Some(Command::PprofAnalyze(args)) => {
            report(ReportKind::PprofAnalyze, &args.input, &mut stdout)
        }
        Some(Command::ReviewMigration(args)) => {
            report(ReportKind::ReviewMigration, &args.input, &mut stdout)
        }
        Some(Command::LintFixes(args)) => report(ReportKind::LintFixes, &args.input, &mut stdout),
        Some(Command::GenTests(args)) => {
            let path = commands::gen_tests::run(args, &cfg, &OsFiles, llm.as_ref())?;
            writeln!(stdout, "{path}")?;
            Ok(())
        }
        Some(Command::Commit(args)) => run_commit(args, &cfg, &git, llm.as_ref(), &mut stdout),
        None => run_commit(&CommitArgs::default(), &cfg, &git, llm.as_ref(), &mut stdout),
    }
}

fn run_commit(
    args: &CommitArgs,
    cfg: &Config,
    git: &CliGit,
    llm: &dyn llm::LlmClient,
    out: &mut dyn io::Write,
) -> Result<()> {
    let observer = LogObserver {
        model: cfg.model.clone(),
    };
    commands::commit::run(args, cfg, git, llm, &observer, out)
}
