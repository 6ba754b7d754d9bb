//! Line unfolding and content-line tokenizing (RFC 6350 §3.2, §3.3).
//!
//! vCard folds long lines by inserting CRLF + one space or tab; unfolding
//! strips exactly that one whitespace character and joins the remainder
//! with no separator, so a fold placed mid-escape-sequence reassembles by
//! plain concatenation.

use super::error::{ParseError, ParseResult};
use crate::core::Property;

/// Unfolds raw input into logical lines.
///
/// CRLF and bare LF are both accepted as line breaks. A physical line
/// beginning with a space or tab continues the current logical line.
/// Assembled lines that are empty or all-whitespace are dropped.
#[must_use]
pub fn unfold(input: &str) -> Vec<String> {
    let mut logical = Vec::new();
    let mut current = String::new();

    for line in input.lines() {
        if let Some(rest) = line.strip_prefix([' ', '\t']) {
            current.push_str(rest);
        } else {
            flush(&mut logical, &mut current);
            current.push_str(line);
        }
    }
    flush(&mut logical, &mut current);

    logical
}

fn flush(logical: &mut Vec<String>, current: &mut String) {
    if current.trim().is_empty() {
        current.clear();
    } else {
        logical.push(std::mem::take(current));
    }
}

/// Finds the first occurrence of `target` outside double-quoted spans.
///
/// Quote state toggles on every `"` seen left to right; the target only
/// delimits while the state is off. This one scan backs the colon,
/// semicolon, and comma splitting throughout the tokenizer.
#[must_use]
pub fn find_unquoted(s: &str, target: char) -> Option<usize> {
    let mut in_quotes = false;
    for (i, c) in s.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == target && !in_quotes {
            return Some(i);
        }
    }
    None
}

/// Splits on unquoted occurrences of `delim`, keeping quote characters in
/// the pieces. A piece is emitted at every delimiter (even if empty); a
/// trailing empty piece is not emitted.
fn split_unquoted(s: &str, delim: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;

    for (i, c) in s.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == delim && !in_quotes {
            pieces.push(&s[start..i]);
            start = i + delim.len_utf8();
        }
    }
    if start < s.len() {
        pieces.push(&s[start..]);
    }

    pieces
}

/// Unescapes a vCard text value.
///
/// Recognized escapes: `\n` / `\N` (newline), `\,`, `\;`, `\\`. Any other
/// backslash is kept literally.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some(',') => {
                    chars.next();
                    result.push(',');
                }
                Some(';') => {
                    chars.next();
                    result.push(';');
                }
                Some('\\') => {
                    chars.next();
                    result.push('\\');
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Tokenizes one logical line into a property.
///
/// Format: `NAME[;PARAM=VAL[,VAL...]]*:VALUE`. The property value is
/// unescaped; parameter values are not.
///
/// ## Errors
/// Returns [`ParseError::MalformedProperty`] if the line has no unquoted
/// colon, or [`ParseError::MalformedParameter`] if a parameter segment has
/// no equals sign.
pub fn tokenize(line: &str) -> ParseResult<Property> {
    let colon = find_unquoted(line, ':').ok_or_else(|| ParseError::MalformedProperty {
        line: line.to_string(),
    })?;

    let (name_and_params, rest) = line.split_at(colon);
    let value = unescape_text(&rest[1..]);

    // Property names cannot contain escapes, so the name side is split as-is.
    let (name, params_block) = match find_unquoted(name_and_params, ';') {
        Some(semi) => (
            &name_and_params[..semi],
            Some(&name_and_params[semi + 1..]),
        ),
        None => (name_and_params, None),
    };

    let mut property = Property::new(name, value);
    if let Some(block) = params_block {
        parse_parameters(block, &mut property)?;
    }

    Ok(property)
}

/// Parses a parameter block (everything between the first unquoted `;` and
/// the value colon) into the property's parameter list.
fn parse_parameters(block: &str, property: &mut Property) -> ParseResult<()> {
    for segment in split_unquoted(block, ';') {
        let eq = segment
            .find('=')
            .ok_or_else(|| ParseError::MalformedParameter {
                segment: segment.to_string(),
            })?;

        let name = &segment[..eq];
        for value in parse_param_values(&segment[eq + 1..]) {
            property.add_parameter(name, value);
        }
    }
    Ok(())
}

/// Splits a raw parameter value into its comma-separated values.
///
/// A value wrapped in one outer quote pair is a single value; the wrapping
/// protects every delimiter inside it. Otherwise the value is split on
/// unquoted commas, with quote characters consumed by the scan.
fn parse_param_values(raw: &str) -> Vec<String> {
    if is_quote_wrapped(raw) {
        return vec![raw[1..raw.len() - 1].to_string()];
    }

    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in raw.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == ',' && !in_quotes {
            values.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        values.push(current);
    }

    values
}

/// Returns whether `raw` is fully wrapped in a single matching pair of
/// double quotes.
fn is_quote_wrapped(raw: &str) -> bool {
    raw.len() >= 2
        && raw.starts_with('"')
        && raw.ends_with('"')
        && !raw[1..raw.len() - 1].contains('"')
}
