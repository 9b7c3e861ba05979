//! Helpers for passing source code to a model and taking code back.

use regex::Regex;

/// Source text of the function named `name`, from its declaration keyword to
/// the matching closing brace.
///
/// Rust `fn` items (with any visibility or qualifiers) and Go `func`
/// declarations, including methods with a receiver, are recognised.
/// Declarations without a body are skipped.
pub fn extract_function<'a>(src: &'a str, name: &str) -> Option<&'a str> {
    let name = regex::escape(name);
    let pattern = format!(
        r#"(?m)^[ \t]*(?:pub(?:\([^)]*\))?[ \t]+)?(?:(?:const|async|unsafe|extern[ \t]+"[^"]*")[ \t]+)*fn[ \t]+{name}\b|^func[ \t]+(?:\([^)]*\)[ \t]*)?{name}\b"#
    );
    let decl = Regex::new(&pattern).ok()?;

    for found in decl.find_iter(src) {
        let start = found.start() + (found.as_str().len() - found.as_str().trim_start().len());
        if let Some(end) = body_end(src, found.end()) {
            return Some(&src[start..end]);
        }
    }
    None
}

/// Byte offset just past the body that opens at the first `{` after `from`.
/// `None` when a `;` ends the declaration first or the braces never balance.
fn body_end(src: &str, from: usize) -> Option<usize> {
    let bytes = src.as_bytes();
    let mut depth = 0usize;
    let mut i = from;

    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = src[i..].find('\n').map_or(bytes.len(), |n| i + n);
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = src[i + 2..].find("*/").map_or(bytes.len(), |n| i + 2 + n + 2);
                continue;
            }
            b'"' => {
                i = skip_quoted(bytes, i, b'"');
                continue;
            }
            b'`' => {
                i = skip_quoted(bytes, i, b'`');
                continue;
            }
            // Char literal, not a lifetime.
            b'\'' if bytes.get(i + 1) == Some(&b'\\') => {
                i = skip_quoted(bytes, i, b'\'');
                continue;
            }
            b'\'' if bytes.get(i + 2) == Some(&b'\'') => {
                i += 3;
                continue;
            }
            b';' if depth == 0 => return None,
            b'{' => depth += 1,
            b'}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

fn skip_quoted(bytes: &[u8], open: usize, quote: u8) -> usize {
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if quote != b'`' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Strip a surrounding Markdown fence from a model answer and end it with a newline.
pub fn normalize_code(answer: &str) -> String {
    let mut code = answer.trim();
    if code.starts_with("```") {
        if let Some((_, body)) = code.split_once('\n') {
            code = body;
            if let Some((rest, last)) = code.rsplit_once('\n') {
                if last.trim_start().starts_with("```") {
                    code = rest;
                }
            } else if code.trim_start().starts_with("```") {
                code = "";
            }
        }
    }

    let mut out = code.to_string();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
