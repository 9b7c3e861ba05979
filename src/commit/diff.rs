/// Upper bound on the diff text embedded into any prompt.
pub const MAX_DIFF_LEN: usize = 10_000;

const FENCE: &str = "```";
// A zero-width space after the first backtick keeps the run from closing a fence.
const BROKEN_FENCE: &str = "`\u{200B}``";

/// Bound a raw diff to its last `max_len` characters and neutralize triple backticks.
///
/// The tail is kept because the most recent hunks are usually the most relevant
/// to the commit being described.
pub fn prepare_diff(raw: &str, max_len: usize) -> String {
    let total = raw.chars().count();
    let bounded = if total > max_len {
        log::info!("Diff truncated to last {max_len} characters for model input");
        let start = raw
            .char_indices()
            .nth(total - max_len)
            .map(|(idx, _)| idx)
            .unwrap_or(raw.len());
        &raw[start..]
    } else {
        raw
    };

    bounded.replace(FENCE, BROKEN_FENCE)
}
