use anyhow::{anyhow, Result};
use std::path::Path;

use crate::cli_args::GenTestsArgs;
use crate::config::{Config, ModelRole};
use crate::deadline::Deadline;
use crate::files::Files;
use crate::llm::{prompt_builder, LlmClient};
use crate::snippet::{extract_function, normalize_code};

/// Generate tests for one function of `args.file` and write them to a file.
///
/// Returns the path the tests were written to.
pub fn run(
    args: &GenTestsArgs,
    cfg: &Config,
    files: &dyn Files,
    llm: &dyn LlmClient,
) -> Result<String> {
    let (file, function) = (args.file.trim(), args.function.trim());
    if file.is_empty() || function.is_empty() {
        return Err(anyhow!("--file and --func are required"));
    }

    let deadline = Deadline::after(cfg.timeout);
    log::info!("Extracting {function} from {file}");
    let src = files.read(file)?;
    let code = extract_function(&src, function)
        .ok_or_else(|| anyhow!("function {function} not found in {file}"))?;

    let extension = Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let prompt = prompt_builder::gen_tests_prompt(extension, code);

    let model = cfg.model_for(ModelRole::Reason);
    log::info!("Asking {model} for tests");
    let answer = llm.generate(&deadline, model, &prompt)?;

    let out = args
        .out
        .clone()
        .filter(|out| !out.trim().is_empty())
        .unwrap_or_else(|| default_output(function, extension));
    files.write(&out, &normalize_code(&answer))?;
    log::info!("Tests written to {out}");
    Ok(out)
}

/// `<func>_test.<ext>`, lowercased, keeping the source extension.
fn default_output(function: &str, extension: &str) -> String {
    let stem = format!("{}_test", function.to_lowercase());
    if extension.is_empty() {
        stem
    } else {
        format!("{stem}.{extension}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{test_config, MemoryFiles, ScriptedClient};

    const GO_SRC: &str = "package demo\n\nfunc Abs(a int) int {\n\tif a < 0 {\n\t\treturn -a\n\t}\n\treturn a\n}\n";

    fn args(file: &str, function: &str, out: Option<&str>) -> GenTestsArgs {
        GenTestsArgs {
            file: file.into(),
            function: function.into(),
            out: out.map(String::from),
        }
    }

    #[test]
    fn writes_normalized_tests_to_the_default_path() {
        let files = MemoryFiles::default().with_file("abs.go", GO_SRC);
        let answer = "```go\nfunc TestAbs(t *testing.T) {}\n```";
        let llm = ScriptedClient::new(vec![Ok(answer.into())]);

        let path = run(&args("abs.go", "Abs", None), &test_config(), &files, &llm).unwrap();

        assert_eq!(path, "abs_test.go");
        assert_eq!(files.written("abs_test.go").unwrap(), "func TestAbs(t *testing.T) {}\n");
        let prompt = &llm.prompts()[0];
        assert!(prompt.contains("this Go function"));
        assert_eq!(llm.models(), vec!["test-reason".to_string()]);
        assert!(prompt.ends_with(GO_SRC.trim_start_matches("package demo\n\n").trim_end()));
    }

    #[test]
    fn explicit_output_path_wins() {
        let files = MemoryFiles::default().with_file("abs.go", GO_SRC);
        let llm = ScriptedClient::always("func TestAbs(t *testing.T) {}");

        let path = run(&args("abs.go", "Abs", Some("math_test.go")), &test_config(), &files, &llm)
            .unwrap();

        assert_eq!(path, "math_test.go");
        assert!(files.written("math_test.go").is_some());
    }

    #[test]
    fn missing_function_is_an_error_before_any_call() {
        let files = MemoryFiles::default().with_file("abs.go", GO_SRC);
        let llm = ScriptedClient::always("unused");

        let err = run(&args("abs.go", "Max", None), &test_config(), &files, &llm).unwrap_err();

        assert_eq!(err.to_string(), "function Max not found in abs.go");
        assert!(llm.prompts().is_empty());
    }

    #[test]
    fn blank_flags_are_rejected() {
        let files = MemoryFiles::default();
        let llm = ScriptedClient::always("unused");

        let err = run(&args(" ", "Abs", None), &test_config(), &files, &llm).unwrap_err();
        assert_eq!(err.to_string(), "--file and --func are required");
    }

    #[test]
    fn default_output_keeps_the_extension() {
        assert_eq!(default_output("ParseHeader", "rs"), "parseheader_test.rs");
        assert_eq!(default_output("run", ""), "run_test");
    }
}
