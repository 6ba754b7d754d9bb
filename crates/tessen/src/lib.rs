//! vCard 4.0 implementation (RFC 6350).
//!
//! This crate provides types, parsing, and serialization for the vCard
//! contact-card text format: line unfolding, quote-aware property and
//! parameter tokenizing, value escaping, required-property validation, and
//! 75-character line folding on output.
//!
//! Only vCard 4.0 is accepted; 2.1 and 3.0 inputs are rejected, not
//! translated.
//!
//! ## Parsing
//!
//! ```rust
//! use tessen::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let cards = parse(input).unwrap();
//! assert_eq!(cards[0].formatted_name(), Some("John Doe"));
//! ```
//!
//! ## Serializing
//!
//! ```rust
//! use tessen::{TelType, VCard, serialize_card};
//!
//! let card = VCard::builder()
//!     .version("4.0")
//!     .formatted_name("Jane Doe")
//!     .telephone("+1-555-0100", &[TelType::Work])
//!     .build();
//!
//! let output = serialize_card(&card);
//! assert!(output.starts_with("BEGIN:VCARD\r\nVERSION:4.0\r\n"));
//! assert!(output.contains("TEL;TYPE=work:+1-555-0100\r\n"));
//! ```
//!
//! ## Round-trip fidelity
//!
//! Values are stored unescaped; escaping, folding, and CRLF endings are
//! re-applied deterministically on output, so a parsed card serializes to
//! text that parses back to the same card.
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCard`, `Property`, `Parameter`, structured values)
//! - [`parse`] - Parsing functions and error types
//! - [`build`] - Serialization functions
//! - [`builder`] - Fluent construction API
//! - [`validate`] - Advisory semantic validation

pub mod build;
pub mod builder;
pub mod core;
pub mod parse;
pub mod validate;

// Re-export commonly used types
pub use build::{serialize, serialize_card};
pub use builder::{AdrType, EmailType, TelType, VCardBuilder};
pub use crate::core::{Parameter, Property, StructuredAddress, StructuredName, VCard};
pub use parse::{ParseError, ParseResult, parse, parse_single};
pub use validate::{ValidationReport, validate};
