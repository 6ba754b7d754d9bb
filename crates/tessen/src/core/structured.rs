//! Structured vCard values (RFC 6350 §6.2.2, §6.3.1).
//!
//! These types interpret the semicolon-separated component syntax used by
//! the N and ADR properties. They operate on the logical (already
//! unescaped) property value; missing trailing components default to empty.

use std::fmt;

/// Structured name (N property, RFC 6350 §6.2.2).
///
/// Components: family;given;additional;prefixes;suffixes. All optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    /// Family name (surname).
    pub family: String,
    /// Given name (first name).
    pub given: String,
    /// Additional names (middle names).
    pub additional: String,
    /// Honorific prefixes (e.g., "Mr.", "Dr.").
    pub prefixes: String,
    /// Honorific suffixes (e.g., "Jr.", "M.D.").
    pub suffixes: String,
}

impl StructuredName {
    /// Creates an empty structured name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a structured name with family and given names.
    #[must_use]
    pub fn simple(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            given: given.into(),
            ..Self::default()
        }
    }

    /// Parses a structured name from a semicolon-separated value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let mut parts = value.split(';');
        Self {
            family: parts.next().unwrap_or_default().to_string(),
            given: parts.next().unwrap_or_default().to_string(),
            additional: parts.next().unwrap_or_default().to_string(),
            prefixes: parts.next().unwrap_or_default().to_string(),
            suffixes: parts.next().unwrap_or_default().to_string(),
        }
    }

    /// Returns whether all components are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.family.is_empty()
            && self.given.is_empty()
            && self.additional.is_empty()
            && self.prefixes.is_empty()
            && self.suffixes.is_empty()
    }

    /// Formats as a display name (given + family).
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut parts = Vec::new();
        if !self.given.is_empty() {
            parts.push(self.given.as_str());
        }
        if !self.family.is_empty() {
            parts.push(self.family.as_str());
        }
        parts.join(" ")
    }
}

impl fmt::Display for StructuredName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{};{};{};{};{}",
            self.family, self.given, self.additional, self.prefixes, self.suffixes
        )
    }
}

/// Structured address (ADR property, RFC 6350 §6.3.1).
///
/// Components: po_box;extended;street;locality;region;postal_code;country.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredAddress {
    /// Post office box.
    pub po_box: String,
    /// Extended address (e.g., apartment or suite number).
    pub extended: String,
    /// Street address.
    pub street: String,
    /// Locality (city).
    pub locality: String,
    /// Region (state or province).
    pub region: String,
    /// Postal code.
    pub postal_code: String,
    /// Country name.
    pub country: String,
}

impl StructuredAddress {
    /// Creates an empty address.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an address from a semicolon-separated value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let mut parts = value.split(';');
        Self {
            po_box: parts.next().unwrap_or_default().to_string(),
            extended: parts.next().unwrap_or_default().to_string(),
            street: parts.next().unwrap_or_default().to_string(),
            locality: parts.next().unwrap_or_default().to_string(),
            region: parts.next().unwrap_or_default().to_string(),
            postal_code: parts.next().unwrap_or_default().to_string(),
            country: parts.next().unwrap_or_default().to_string(),
        }
    }

    /// Returns whether all components are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.po_box.is_empty()
            && self.extended.is_empty()
            && self.street.is_empty()
            && self.locality.is_empty()
            && self.region.is_empty()
            && self.postal_code.is_empty()
            && self.country.is_empty()
    }

    /// Formats as a single-line address, skipping empty components.
    #[must_use]
    pub fn one_line(&self) -> String {
        [
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

impl fmt::Display for StructuredAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{};{};{};{};{};{};{}",
            self.po_box,
            self.extended,
            self.street,
            self.locality,
            self.region,
            self.postal_code,
            self.country
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_name_parse() {
        let name = StructuredName::parse("Doe;John;Michael;Mr.;Jr.");
        assert_eq!(name.family, "Doe");
        assert_eq!(name.given, "John");
        assert_eq!(name.additional, "Michael");
        assert_eq!(name.prefixes, "Mr.");
        assert_eq!(name.suffixes, "Jr.");
    }

    #[test]
    fn structured_name_parse_partial() {
        let name = StructuredName::parse("Doe;John");
        assert_eq!(name.family, "Doe");
        assert_eq!(name.given, "John");
        assert_eq!(name.additional, "");
        assert!(name.suffixes.is_empty());
    }

    #[test]
    fn structured_name_round_trip() {
        let name = StructuredName::parse("Doe;John;;;");
        assert_eq!(name.to_string(), "Doe;John;;;");
    }

    #[test]
    fn structured_name_display_name() {
        let name = StructuredName::simple("Doe", "John");
        assert_eq!(name.display_name(), "John Doe");
    }

    #[test]
    fn structured_name_empty() {
        assert!(StructuredName::new().is_empty());
        assert!(StructuredName::parse("").is_empty());
    }

    #[test]
    fn address_parse() {
        let adr = StructuredAddress::parse(";;123 Main St;Springfield;IL;62701;USA");
        assert_eq!(adr.po_box, "");
        assert_eq!(adr.street, "123 Main St");
        assert_eq!(adr.locality, "Springfield");
        assert_eq!(adr.region, "IL");
        assert_eq!(adr.postal_code, "62701");
        assert_eq!(adr.country, "USA");
    }

    #[test]
    fn address_round_trip() {
        let value = ";;123 Main St;Springfield;IL;62701;USA";
        assert_eq!(StructuredAddress::parse(value).to_string(), value);
    }

    #[test]
    fn address_one_line() {
        let adr = StructuredAddress::parse(";;123 Main St;Springfield;IL;62701;USA");
        assert_eq!(adr.one_line(), "123 Main St, Springfield, IL, 62701, USA");
    }
}
