pub const COMMIT_HEADER: &str = r#"Write ONLY a single-line Conventional Commit message for the diff below.
Format exactly as "<type(scope)?: >concise summary in lowercase present tense".
Keep the line at or below {max_len} characters; be concise instead of adding follow-up text.
Do not include bullets, explanations, reviews, or multiple lines. Return just the commit header without quotes."#;

pub const COMMIT_CORRECTION: &str = "The previous candidate was invalid. Produce a single-line Conventional Commit summary only. \
Use one of the types: {types}. \
Example: feat(parser): handle edge case";

pub const SHORTEN_HEADER: &str = r#"Shorten the following Conventional Commit summary to <={max_len} characters without changing meaning.
Return only the shortened single-line summary."#;

pub const BRANCH_REVIEW: &str = r#"You are reviewing the changes of a branch before it is merged.
Write a code review with 5 sections: Correctness, Complexity, Style, Tests, Security.
Rules:
- Be specific and cite file:line wherever possible.
- Skip praise and restating the diff; focus on what a reviewer should act on.
- Keep the review under 200 lines."#;

pub const EXPLAIN_LOGS: &str = "You are an SRE. Diagnose cause and next steps from these logs. \
Return: Probable cause, Evidence lines, Next 3 commands to run.";

pub const EXPLAIN_ANALYZE: &str = "Explain the PostgreSQL EXPLAIN ANALYZE below. \
Give: 1) bottlenecks, 2) missing/misused indexes, 3) rewrite suggestion.";

pub const PPROF_ANALYZE: &str = "You're a performance engineer. Analyze this pprof -top output and say \
EXACTLY which functions to attack and how (allocations, pooling, serialization, etc.).";

pub const REVIEW_MIGRATION: &str = "Review this Postgres migration for safety and downtime risk. \
Flag: full table rewrites, enum pitfalls, blocking DDL. Provide safer alternatives.";

pub const LINT_FIXES: &str = "Given these linter findings, propose the smallest code change per issue. \
No broad refactors; targeted patches only.";

pub const GEN_TESTS: &str = "Write table-driven tests for this {language} function using the standard test tooling of the language. \
Keep test names clear. Return only code.";
