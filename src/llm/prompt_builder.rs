use crate::llm::prompts;

/// Commit types named in the retry correction.
const CORRECTION_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "chore",
];

fn commit_instructions(max_len: usize) -> String {
    prompts::COMMIT_HEADER.replace("{max_len}", &max_len.to_string())
}

/// Prompt for one commit attempt. Attempts after the first carry the stricter
/// correction clause; every attempt carries the same prepared diff.
pub fn commit_prompt(attempt: usize, diff: &str, max_len: usize) -> String {
    let instructions = commit_instructions(max_len);
    if attempt <= 1 {
        return format!("{instructions}\n\n{diff}");
    }

    let correction = prompts::COMMIT_CORRECTION.replace("{types}", &CORRECTION_TYPES.join(", "));
    format!("{instructions}\n\n{correction}\n\n{diff}")
}

pub fn shorten_prompt(header: &str, max_len: usize) -> String {
    let instructions = prompts::SHORTEN_HEADER.replace("{max_len}", &max_len.to_string());
    format!("{instructions}\n\n{header}")
}

pub fn review_prompt(base: &str, diff: &str) -> String {
    format!(
        "{instructions}\n\nBase ref: {base}\n\nDiff:\n```diff\n{diff}\n```",
        instructions = prompts::BRANCH_REVIEW,
    )
}

/// Instructions followed by the raw input, for the report commands.
pub fn report_prompt(instructions: &str, input: &str) -> String {
    format!("{instructions}\n\n{input}")
}

/// Test generation prompt for `code`, named after the language of `extension`.
pub fn gen_tests_prompt(extension: &str, code: &str) -> String {
    let language = match extension {
        "rs" => "Rust",
        "go" => "Go",
        "py" => "Python",
        "ts" | "tsx" => "TypeScript",
        "js" => "JavaScript",
        _ => "source",
    };
    let instructions = prompts::GEN_TESTS.replace("{language}", language);
    format!("{instructions}\n\n{code}")
}
