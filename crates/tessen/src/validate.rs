//! Advisory semantic validation.
//!
//! The parser already enforces the structural rules; this pass inspects a
//! card's property values and reports problems without failing anything.
//! Errors mark violations of RFC 6350 requirements, warnings mark values
//! that are legal but suspicious.

use std::fmt;

use crate::core::{Property, VCard};

const VALID_TEL_TYPES: &[&str] = &[
    "work",
    "home",
    "text",
    "voice",
    "fax",
    "cell",
    "video",
    "pager",
    "textphone",
];

/// Result of validating one card.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// RFC violations.
    pub errors: Vec<String>,
    /// Suspicious but legal values.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Returns whether validation passed (no errors; warnings allowed).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Validation Result: {}",
            if self.is_valid() { "VALID" } else { "INVALID" }
        )?;
        writeln!(f, "Errors: {}", self.errors.len())?;
        writeln!(f, "Warnings: {}", self.warnings.len())?;
        for error in &self.errors {
            writeln!(f, "  - {error}")?;
        }
        for warning in &self.warnings {
            writeln!(f, "  - {warning}")?;
        }
        Ok(())
    }
}

/// Validates a card, collecting errors and warnings.
#[must_use]
pub fn validate(card: &VCard) -> ValidationReport {
    let mut report = ValidationReport::default();

    match card.version() {
        None => report.error("Required property VERSION is missing"),
        Some(version) if version != "4.0" => {
            report.error(format!("VERSION must be 4.0, found: {version}"));
        }
        Some(_) => {}
    }

    match card.formatted_name() {
        None => report.error("Required property FN is missing"),
        Some(formatted_name) if formatted_name.trim().is_empty() => {
            report.error("FN (Formatted Name) cannot be empty");
        }
        Some(_) => {}
    }

    for tel in card.telephones() {
        validate_telephone(tel, &mut report);
    }
    for email in card.emails() {
        validate_email(email, &mut report);
    }
    for adr in card.addresses() {
        validate_address(adr, &mut report);
    }
    for url in card.urls() {
        validate_url(url, &mut report);
    }

    report
}

fn validate_telephone(prop: &Property, report: &mut ValidationReport) {
    if prop.value.trim().is_empty() {
        report.error("TEL property cannot be empty");
    }

    if let Some(types) = prop.get_parameters("TYPE") {
        for type_value in types {
            if !VALID_TEL_TYPES
                .iter()
                .any(|t| t.eq_ignore_ascii_case(type_value))
            {
                report.warning(format!(
                    "TEL TYPE parameter has non-standard value: {type_value}"
                ));
            }
        }
    }
}

fn validate_email(prop: &Property, report: &mut ValidationReport) {
    if prop.value.trim().is_empty() {
        report.error("EMAIL property cannot be empty");
        return;
    }

    if !looks_like_email(&prop.value) {
        report.warning(format!(
            "EMAIL property may not be a valid email address: {}",
            prop.value
        ));
    }
}

// local@domain with a dot in the domain; whitespace disqualifies.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && domain.contains('.')
        }
        None => false,
    }
}

fn validate_address(prop: &Property, report: &mut ValidationReport) {
    let components = prop.value.split(';').count();
    if components != 7 {
        report.warning(format!(
            "ADR property should have exactly 7 components, found {components}: {}",
            prop.value
        ));
    }
}

fn validate_url(prop: &Property, report: &mut ValidationReport) {
    if prop.value.trim().is_empty() {
        report.error("URL property cannot be empty");
        return;
    }

    if !["http://", "https://", "ftp://"]
        .iter()
        .any(|scheme| prop.value.starts_with(scheme))
    {
        report.warning(format!(
            "URL property may not be a valid URL: {}",
            prop.value
        ));
    }
}
