//! Cleanup of free-form model output into a commit message body.

const GREETING_PREFIXES: &[&str] = &["here is", "here's"];
const SUMMARY_PREFIXES: &[&str] = &["this is a code review", "overall,", "overall:"];
const FENCE: &str = "```";
const BOLD: &str = "**";

/// What a single response line contributes to the cleaned message.
enum Line<'a> {
    Blank,
    Dropped,
    Text(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    let mut current = line.trim();
    loop {
        if current.is_empty() {
            return Line::Blank;
        }

        let lower = current.to_lowercase();
        let boilerplate = GREETING_PREFIXES
            .iter()
            .chain(SUMMARY_PREFIXES)
            .any(|prefix| lower.starts_with(prefix));
        if boilerplate || current.starts_with(FENCE) || current.ends_with(FENCE) {
            return Line::Dropped;
        }

        // A stripped bold line is classified again so the result is stable.
        if current.len() > 2 * BOLD.len() && current.starts_with(BOLD) && current.ends_with(BOLD) {
            current = current.trim_matches('*').trim();
            continue;
        }

        return Line::Text(current);
    }
}

/// Strip greetings, closing summaries, fences and bold markers from a model response.
///
/// Blank runs collapse to a single empty line and the result never starts or
/// ends with one. Normalizing an already normalized message returns it unchanged.
pub fn normalize_message(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    let mut cleaned: Vec<&str> = Vec::new();
    for line in raw.split('\n') {
        match classify(line) {
            Line::Blank => {
                if cleaned.last().is_some_and(|last| !last.is_empty()) {
                    cleaned.push("");
                }
            }
            Line::Dropped => {}
            Line::Text(text) => cleaned.push(text),
        }
    }

    while cleaned.last().is_some_and(|last| last.is_empty()) {
        cleaned.pop();
    }

    cleaned.join("\n")
}

/// First line of a message, trimmed. Body lines are ignored.
pub fn extract_header(message: &str) -> &str {
    message.split('\n').next().unwrap_or_default().trim()
}

/// Prepend `prefix` to the first line of `message`, keeping any body as is.
///
/// Applying the same prefix twice doubles it, so callers apply it once per message.
pub fn apply_prefix(message: &str, prefix: &str) -> String {
    let prefix = prefix.trim();
    if prefix.is_empty() || message.is_empty() {
        return message.to_string();
    }

    match message.split_once('\n') {
        Some((first, rest)) => format!("{prefix} {}\n{rest}", first.trim()),
        None => format!("{prefix} {}", message.trim()),
    }
}
