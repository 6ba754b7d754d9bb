//! vCard document parser (RFC 6350).
//!
//! Drives the unfolder and tokenizer over logical lines, building one card
//! per `BEGIN:VCARD…END:VCARD` block and enforcing the structural and
//! required-property rules.

use super::error::{ParseError, ParseResult};
use super::lexer::{tokenize, unfold};
use crate::core::VCard;

/// Parses all vCards from a string.
///
/// Cards are returned in source order. Any structural or required-property
/// failure aborts the whole parse; the first error in line order wins.
///
/// ## Errors
///
/// Returns an error if the input is not a sequence of well-formed
/// `VERSION:4.0` cards, or contains no card at all.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<Vec<VCard>> {
    let mut lines = unfold(input).into_iter();
    let mut cards = Vec::new();

    loop {
        // Seek the next BEGIN, skipping residual whitespace-only lines.
        let begin = loop {
            match lines.next() {
                None => {
                    if cards.is_empty() {
                        return Err(ParseError::NoDataFound);
                    }
                    tracing::debug!(count = cards.len(), "parsed vCard document");
                    return Ok(cards);
                }
                Some(line) if line.trim().is_empty() => {}
                Some(line) => break line,
            }
        };

        if !begin.eq_ignore_ascii_case("BEGIN:VCARD") {
            return Err(ParseError::ExpectedBegin { line: begin });
        }

        let card = parse_card(&mut lines)?;
        cards.push(card);
    }
}

/// Parses a single vCard from a string.
///
/// Convenience wrapper over [`parse`] returning the first card of the
/// document.
///
/// ## Errors
///
/// Returns an error under the same conditions as [`parse`].
pub fn parse_single(input: &str) -> ParseResult<VCard> {
    let mut cards = parse(input)?;
    // parse() guarantees at least one card on success.
    Ok(cards.swap_remove(0))
}

/// Consumes lines after a BEGIN until the matching END, collecting
/// properties into a new card.
fn parse_card(lines: &mut impl Iterator<Item = String>) -> ParseResult<VCard> {
    let mut card = VCard::new();

    loop {
        let Some(line) = lines.next() else {
            return Err(ParseError::UnexpectedEof {
                component: VCard::COMPONENT.to_string(),
            });
        };

        if let Some(rest) = end_component(&line) {
            let found = rest.to_ascii_uppercase();
            if found != VCard::COMPONENT {
                return Err(ParseError::MismatchedEnd {
                    expected: VCard::COMPONENT.to_string(),
                    found,
                });
            }
            check_required(&card)?;
            return Ok(card);
        }

        card.add_property(tokenize(&line)?);
    }
}

/// Returns the component type of an `END:` line, if this is one
/// (case-insensitive).
fn end_component(line: &str) -> Option<&str> {
    let prefix = line.get(..4)?;
    if prefix.eq_ignore_ascii_case("END:") {
        Some(&line[4..])
    } else {
        None
    }
}

/// Required-property checks run once per closed card, in order; the first
/// failure wins.
fn check_required(card: &VCard) -> ParseResult<()> {
    let Some(version) = card.version() else {
        return Err(ParseError::MissingVersion);
    };
    if version != "4.0" {
        return Err(ParseError::UnsupportedVersion {
            found: version.to_string(),
        });
    }
    if card.formatted_name().is_none() {
        return Err(ParseError::MissingFormattedName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:John Doe\r\nEND:VCARD\r\n";

    #[test]
    fn parse_simple_card() {
        let cards = parse(SIMPLE).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].version(), Some("4.0"));
        assert_eq!(cards[0].formatted_name(), Some("John Doe"));
    }

    #[test]
    fn parse_single_returns_first_card() {
        let card = parse_single(SIMPLE).unwrap();
        assert_eq!(card.formatted_name(), Some("John Doe"));
    }

    #[test]
    fn parse_accepts_bare_lf() {
        let cards = parse("BEGIN:VCARD\nVERSION:4.0\nFN:John Doe\nEND:VCARD").unwrap();
        assert_eq!(cards[0].formatted_name(), Some("John Doe"));
    }

    #[test]
    fn parse_is_case_insensitive_on_delimiters() {
        let cards = parse("begin:vcard\r\nVERSION:4.0\r\nFN:Jane\r\nend:vcard\r\n").unwrap();
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn parse_multiple_cards() {
        let input = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:John Doe\r\nEND:VCARD\r\n\r\nBEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane Smith\r\nEND:VCARD\r\n";
        let cards = parse(input).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].formatted_name(), Some("John Doe"));
        assert_eq!(cards[1].formatted_name(), Some("Jane Smith"));
    }

    #[test]
    fn parse_folded_property() {
        let input = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:John\r\n  Doe\r\nEND:VCARD\r\n";
        let cards = parse(input).unwrap();
        assert_eq!(cards[0].formatted_name(), Some("John Doe"));
    }

    #[test]
    fn parse_properties_keep_order() {
        let input = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:John Doe\r\nTEL;TYPE=work:+1-555-0100\r\nTEL;TYPE=home:+1-555-0199\r\nEND:VCARD\r\n";
        let cards = parse(input).unwrap();
        let tels = cards[0].telephones();
        assert_eq!(tels.len(), 2);
        assert_eq!(tels[0].value, "+1-555-0100");
        assert!(tels[0].has_type("work"));
        assert_eq!(tels[1].value, "+1-555-0199");
        assert!(tels[1].has_type("home"));
    }

    #[test]
    fn parse_missing_begin() {
        let err = parse("VERSION:4.0\r\nFN:John Doe\r\nEND:VCARD\r\n").unwrap_err();
        assert!(matches!(err, ParseError::ExpectedBegin { .. }));
        assert!(err.to_string().contains("BEGIN:VCARD"));
    }

    #[test]
    fn parse_missing_end() {
        let err = parse("BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedEof {
                component: "VCARD".to_string()
            }
        );
    }

    #[test]
    fn parse_mismatched_end() {
        let err = parse("BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\nEND:VCALENDAR\r\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::MismatchedEnd {
                expected: "VCARD".to_string(),
                found: "VCALENDAR".to_string()
            }
        );
    }

    #[test]
    fn parse_empty_input() {
        assert_eq!(parse("").unwrap_err(), ParseError::NoDataFound);
        assert_eq!(parse("\r\n \r\n\t\r\n").unwrap_err(), ParseError::NoDataFound);
    }

    #[test]
    fn parse_missing_version() {
        let err = parse("BEGIN:VCARD\r\nFN:Jane\r\nEND:VCARD\r\n").unwrap_err();
        assert_eq!(err, ParseError::MissingVersion);
    }

    #[test]
    fn parse_unsupported_version() {
        let err = parse("BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Jane\r\nEND:VCARD\r\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnsupportedVersion {
                found: "3.0".to_string()
            }
        );
        let msg = err.to_string();
        assert!(msg.contains("3.0") && msg.contains("4.0"));
    }

    #[test]
    fn parse_missing_formatted_name() {
        let err = parse("BEGIN:VCARD\r\nVERSION:4.0\r\nEND:VCARD\r\n").unwrap_err();
        assert_eq!(err, ParseError::MissingFormattedName);
    }

    #[test]
    fn version_check_runs_before_fn_check() {
        let err = parse("BEGIN:VCARD\r\nEND:VCARD\r\n").unwrap_err();
        assert_eq!(err, ParseError::MissingVersion);
    }

    #[test]
    fn first_error_wins_across_cards() {
        let input = "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Old\r\nEND:VCARD\r\nBEGIN:VCARD\r\nVERSION:4.0\r\nFN:New\r\nEND:VCARD\r\n";
        let err = parse(input).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedVersion { .. }));
    }

    #[test]
    fn bad_property_aborts_parse() {
        let input = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\nNOCOLONHERE\r\nEND:VCARD\r\n";
        let err = parse(input).unwrap_err();
        assert!(matches!(err, ParseError::MalformedProperty { .. }));
    }
}
