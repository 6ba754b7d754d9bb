//! vCard parse error types.
//!
//! Every error is fatal to the parse call that produced it: the first
//! failure in line order aborts the whole parse with no partial-document
//! recovery.

use thiserror::Error;

/// Result type for vCard parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred during vCard parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A card did not start with `BEGIN:VCARD`.
    #[error("Expected BEGIN:VCARD but got: {line}")]
    ExpectedBegin {
        /// The offending logical line.
        line: String,
    },

    /// The closing tag's component type did not match the opening one.
    #[error("Mismatched END tag: expected END:{expected} but got END:{found}")]
    MismatchedEnd {
        /// The component type that was opened.
        expected: String,
        /// The component type found on the END line.
        found: String,
    },

    /// Input ended while a card was still open.
    #[error("Unexpected end of input while parsing {component}")]
    UnexpectedEof {
        /// The component type being parsed.
        component: String,
    },

    /// Zero cards were found in the entire input.
    #[error("No vCard data found")]
    NoDataFound,

    /// A closed card had no VERSION property.
    #[error(
        "Missing required VERSION property (RFC 6350 Section 6.7.9). vCard must include VERSION:4.0"
    )]
    MissingVersion,

    /// A closed card declared a version other than 4.0.
    #[error("Unsupported vCard version: {found}. Only version 4.0 is supported.")]
    UnsupportedVersion {
        /// The version value that was found.
        found: String,
    },

    /// A closed card had no FN property.
    #[error(
        "Missing required FN (Formatted Name) property (RFC 6350 Section 6.2.1). vCard must include FN property."
    )]
    MissingFormattedName,

    /// A property line had no unquoted colon.
    #[error("Invalid property line (missing colon): {line}")]
    MalformedProperty {
        /// The offending logical line.
        line: String,
    },

    /// A parameter segment had no equals sign.
    #[error("Invalid parameter (missing equals): {segment}")]
    MalformedParameter {
        /// The offending parameter segment.
        segment: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_contract_literals() {
        let err = ParseError::ExpectedBegin {
            line: "VERSION:4.0".into(),
        };
        assert!(err.to_string().contains("BEGIN:VCARD"));
        assert!(err.to_string().contains("VERSION:4.0"));

        let err = ParseError::MismatchedEnd {
            expected: "VCARD".into(),
            found: "VCALENDAR".into(),
        };
        assert!(err.to_string().contains("Mismatched END tag"));
        assert!(err.to_string().contains("END:VCARD"));
        assert!(err.to_string().contains("END:VCALENDAR"));

        let err = ParseError::UnexpectedEof {
            component: "VCARD".into(),
        };
        assert!(err.to_string().contains("Unexpected end of input"));
        assert!(err.to_string().contains("VCARD"));

        assert!(ParseError::NoDataFound.to_string().contains("No vCard data found"));

        assert!(ParseError::MissingVersion.to_string().contains("RFC 6350"));

        let err = ParseError::UnsupportedVersion { found: "3.0".into() };
        assert!(err.to_string().contains("Unsupported"));
        assert!(err.to_string().contains("3.0"));
        assert!(err.to_string().contains("4.0"));

        let msg = ParseError::MissingFormattedName.to_string();
        assert!(msg.contains("Formatted Name"));
        assert!(msg.contains("RFC 6350"));

        let err = ParseError::MalformedProperty {
            line: "TEL+1-555-0100".into(),
        };
        assert!(err.to_string().contains("colon"));
        assert!(err.to_string().contains("TEL+1-555-0100"));

        let err = ParseError::MalformedParameter {
            segment: "HOME".into(),
        };
        assert!(err.to_string().contains("parameter"));
        assert!(err.to_string().contains("equals"));
    }
}
