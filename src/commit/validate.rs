use regex::Regex;
use std::sync::LazyLock;

/// Commit types accepted by the header grammar.
pub const COMMIT_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "chore", "build", "ci", "revert",
];

static CONVENTIONAL_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"^(?:{})(?:\([^()\r\n]+\))?!?: \S.*$", COMMIT_TYPES.join("|"));
    Regex::new(&pattern).expect("conventional header pattern is valid")
});

/// Whether `header` is a Conventional Commit header, tolerating leading tokens.
///
/// Each whitespace-delimited suffix is tried against the strict
/// `type(scope)?: description` form, so decorations such as `WIT-341` or
/// `[WIP]` in front of a valid header are accepted.
pub fn is_conventional_commit(header: &str) -> bool {
    let mut candidate = header.trim();
    while !candidate.is_empty() {
        if CONVENTIONAL_HEADER.is_match(candidate) {
            return true;
        }
        match candidate.find([' ', '\t']) {
            Some(sep) => candidate = candidate[sep + 1..].trim(),
            None => break,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_scoped_headers() {
        assert!(is_conventional_commit("feat(parser): add validation"));
        assert!(is_conventional_commit("docs: fix typo in readme"));
        assert!(is_conventional_commit("refactor(core)!: drop legacy api"));
    }

    #[test]
    fn accepts_leading_decoration() {
        assert!(is_conventional_commit("WIT-341 fix(service): handle edge case"));
        assert!(is_conventional_commit("[WIP] ABC-1 chore: bump deps"));
    }

    #[test]
    fn rejects_headers_without_grammar() {
        assert!(!is_conventional_commit("WIT-341 missing colon"));
        assert!(!is_conventional_commit("Add a new feature"));
        assert!(!is_conventional_commit("feature: unknown type"));
        assert!(!is_conventional_commit("feat:"));
        assert!(!is_conventional_commit("feat: "));
        assert!(!is_conventional_commit("feat():  empty scope"));
    }

    #[test]
    fn header_pattern_compiles_and_matches_every_type() {
        for ty in COMMIT_TYPES {
            assert!(CONVENTIONAL_HEADER.is_match(&format!("{ty}: describe change")), "{ty}");
        }
    }

    #[test]
    fn rejects_empty() {
        assert!(!is_conventional_commit(""));
        assert!(!is_conventional_commit("   "));
    }
}
