use assert_cmd::cargo;
use predicates::prelude::*;

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("commit"))
        .stdout(predicate::str::contains("review"))
        .stdout(predicate::str::contains("gen-tests"))
        .stdout(predicate::str::contains("explain-logs"));
}

#[test]
fn prints_version() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn commit_help_lists_flags() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.args(["commit", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--prefix"))
        .stdout(predicate::str::contains("--autocommit"))
        .stdout(predicate::str::contains("--apply"));
}

#[test]
fn legacy_command_aliases_resolve() {
    let mut cmd = cargo::cargo_bin_cmd!();
    cmd.args(["llm-commit", "--help"]).assert().success();

    let mut cmd = cargo::cargo_bin_cmd!();
    cmd.args(["pr-review", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--base"));
}

#[test]
fn model_and_no_model_conflict() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.args(["--model", "llama3.1:8b", "--no-model", "commit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn rejects_bad_timeout() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.args(["--timeout", "soon", "commit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid duration"));
}

#[test]
fn report_commands_take_an_input_flag() {
    let subcommands = [
        "explain-logs",
        "explain-analyze",
        "pprof-analyze",
        "review-migration",
        "lint-fixes",
    ];
    for sub in subcommands {
        let mut cmd = cargo::cargo_bin_cmd!();
        cmd.args([sub, "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--in"));
    }
}

#[test]
fn explain_logs_reads_piped_stdin_offline() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.args(["--no-model", "explain-logs"])
        .write_stdin("ERROR db timeout\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dummy review"));
}

#[test]
fn gen_tests_requires_file_and_func() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.args(["--no-model", "gen-tests", "--func", "run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--file"));
}
