//! vCard property types (RFC 6350 §6).

use super::parameter::Parameter;

/// A vCard property: one `NAME[;params]:value` unit inside a card.
///
/// The value is stored in its logical (unescaped) form; escaping is applied
/// on output only. Parameters form an ordered multimap: first-appearance
/// order of parameter names is preserved, and each name keeps its values in
/// order of appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name (normalized to uppercase, never empty for parsed input).
    pub name: String,
    /// Logical (unescaped) value.
    pub value: String,
    /// Parameters in order of first appearance.
    pub parameters: Vec<Parameter>,
}

impl Property {
    /// Creates a property with the given name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: value.into(),
            parameters: Vec::new(),
        }
    }

    /// Adds a parameter value, appending to an existing parameter of the
    /// same name if one is present.
    pub fn add_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into().to_ascii_uppercase();
        if let Some(param) = self.parameters.iter_mut().find(|p| p.name == name) {
            param.values.push(value.into());
        } else {
            self.parameters.push(Parameter {
                name,
                values: vec![value.into()],
            });
        }
    }

    /// Adds a whole parameter as a new entry, preserving insertion order.
    pub fn add_param(&mut self, param: Parameter) {
        self.parameters.push(param);
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        let name = name.to_ascii_uppercase();
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Returns the first value of the named parameter.
    #[must_use]
    pub fn get_parameter(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Returns all values of the named parameter.
    #[must_use]
    pub fn get_parameters(&self, name: &str) -> Option<&[String]> {
        self.get_param(name).map(|p| p.values.as_slice())
    }

    /// Returns whether this property carries the given TYPE value
    /// (case-insensitive).
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.get_param("TYPE")
            .is_some_and(|p| p.has_value(type_value))
    }

    /// Returns the PREF value if present (1-100, lower is preferred).
    #[must_use]
    pub fn pref(&self) -> Option<u8> {
        self.get_parameter("PREF").and_then(|v| v.parse().ok())
    }
}

/// Common property names as constants.
pub mod names {
    // Identification properties
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const NICKNAME: &str = "NICKNAME";
    pub const PHOTO: &str = "PHOTO";
    pub const BDAY: &str = "BDAY";
    pub const ANNIVERSARY: &str = "ANNIVERSARY";
    pub const GENDER: &str = "GENDER";

    // Delivery addressing
    pub const ADR: &str = "ADR";

    // Communications
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";

    // Organizational
    pub const TITLE: &str = "TITLE";
    pub const ROLE: &str = "ROLE";
    pub const ORG: &str = "ORG";

    // Explanatory
    pub const CATEGORIES: &str = "CATEGORIES";
    pub const NOTE: &str = "NOTE";
    pub const REV: &str = "REV";
    pub const UID: &str = "UID";
    pub const URL: &str = "URL";

    // General/structural
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_normalizes_name() {
        let prop = Property::new("fn", "John Doe");
        assert_eq!(prop.name, "FN");
        assert_eq!(prop.value, "John Doe");
    }

    #[test]
    fn add_parameter_merges_by_name() {
        let mut prop = Property::new("TEL", "+1-555-0100");
        prop.add_parameter("type", "work");
        prop.add_parameter("TYPE", "voice");
        prop.add_parameter("PREF", "1");

        assert_eq!(prop.parameters.len(), 2);
        assert_eq!(
            prop.get_parameters("TYPE"),
            Some(&["work".to_string(), "voice".to_string()][..])
        );
        assert_eq!(prop.get_parameter("PREF"), Some("1"));
    }

    #[test]
    fn duplicate_parameter_values_preserved() {
        let mut prop = Property::new("TEL", "+1-555-0100");
        prop.add_parameter("TYPE", "work");
        prop.add_parameter("TYPE", "work");
        assert_eq!(
            prop.get_parameters("TYPE"),
            Some(&["work".to_string(), "work".to_string()][..])
        );
    }

    #[test]
    fn has_type_is_case_insensitive() {
        let mut prop = Property::new("TEL", "+1-555-0100");
        prop.add_parameter("TYPE", "home");
        assert!(prop.has_type("home"));
        assert!(prop.has_type("HOME"));
        assert!(!prop.has_type("work"));
    }
}
