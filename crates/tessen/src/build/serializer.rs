//! vCard serialization (RFC 6350).
//!
//! Output is deterministic: CRLF line endings, VERSION emitted immediately
//! after BEGIN when present, remaining properties in the card's
//! name-insertion order and occurrence order.

use super::escape::{escape_param_value, escape_text};
use super::fold::fold_line;
use crate::core::{Property, VCard, names};

/// Serializes a single card, terminated by a trailing CRLF.
///
/// Serialization never fails: a card lacking VERSION or FN still produces
/// output, which is simply not guaranteed to re-parse.
#[must_use]
pub fn serialize_card(card: &VCard) -> String {
    let mut lines = Vec::new();

    lines.push(format!("BEGIN:{}", VCard::COMPONENT));

    // VERSION comes first; only the first occurrence is meaningful.
    if let Some(version) = card.get_property(names::VERSION) {
        lines.push(fold_line(&property_line(version)));
    }
    for property in card.properties() {
        if property.name == names::VERSION {
            continue;
        }
        lines.push(fold_line(&property_line(property)));
    }

    lines.push(format!("END:{}", VCard::COMPONENT));

    let mut output = lines.join("\r\n");
    output.push_str("\r\n");
    output
}

/// Serializes cards in document order.
#[must_use]
pub fn serialize(cards: &[VCard]) -> String {
    cards.iter().map(serialize_card).collect()
}

/// Assembles the logical content line for one property.
fn property_line(property: &Property) -> String {
    let mut line = String::new();
    line.push_str(&property.name);

    for param in &property.parameters {
        for value in &param.values {
            line.push(';');
            line.push_str(&param.name);
            line.push('=');
            line.push_str(&escape_param_value(value));
        }
    }

    line.push(':');
    line.push_str(&escape_text(&property.value));
    line
}
