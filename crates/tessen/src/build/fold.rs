//! vCard line folding (RFC 6350 §3.2).

/// Maximum physical line length.
const MAX_LINE_CHARS: usize = 75;

/// Folds a logical line to the maximum length.
///
/// The first physical line carries up to 75 characters; each continuation
/// line carries a single leading space plus up to 74 characters. Folding
/// operates on the fully assembled (escaped, parameterized) line.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.chars().count() <= MAX_LINE_CHARS {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + line.len() / MAX_LINE_CHARS * 3);
    let mut chars = line.chars();

    result.extend(chars.by_ref().take(MAX_LINE_CHARS));
    loop {
        let chunk: String = chars.by_ref().take(MAX_LINE_CHARS - 1).collect();
        if chunk.is_empty() {
            break;
        }
        result.push_str("\r\n ");
        result.push_str(&chunk);
    }

    result
}
