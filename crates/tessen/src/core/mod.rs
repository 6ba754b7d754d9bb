//! Core vCard types.
//!
//! A [`VCard`] is an ordered multimap of property name to properties:
//! distinct names keep their first-appearance order, and the properties
//! under one name keep their order of appearance. Both orders survive a
//! parse/serialize round trip.

mod parameter;
mod property;
mod structured;

pub use parameter::{Parameter, types};
pub use property::{Property, names};
pub use structured::{StructuredAddress, StructuredName};

use crate::builder::VCardBuilder;

/// A single vCard: one `BEGIN:VCARD…END:VCARD` block and its properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VCard {
    // Ordered name -> properties groups; linear lookup is fine at
    // contact-card sizes.
    groups: Vec<(String, Vec<Property>)>,
}

impl VCard {
    /// The component type delimited by BEGIN/END tags.
    pub const COMPONENT: &'static str = "VCARD";

    /// Creates an empty card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing a card with a fluent API.
    #[must_use]
    pub fn builder() -> VCardBuilder {
        VCardBuilder::new()
    }

    /// Adds a property, appending to the existing group for its name or
    /// opening a new group at the end.
    pub fn add_property(&mut self, property: Property) {
        if let Some((_, props)) = self.groups.iter_mut().find(|(n, _)| *n == property.name) {
            props.push(property);
        } else {
            self.groups.push((property.name.clone(), vec![property]));
        }
    }

    /// Returns the first property with the given name (case-insensitive).
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.get_properties(name)?.first()
    }

    /// Returns all properties with the given name (case-insensitive).
    #[must_use]
    pub fn get_properties(&self, name: &str) -> Option<&[Property]> {
        let name = name.to_ascii_uppercase();
        self.groups
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, props)| props.as_slice())
    }

    /// Iterates over all properties in name-insertion order, and within a
    /// name in occurrence order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.groups.iter().flat_map(|(_, props)| props.iter())
    }

    /// Returns whether the card has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn first_value(&self, name: &str) -> Option<&str> {
        self.get_property(name).map(|p| p.value.as_str())
    }

    /// Returns the VERSION value (first occurrence wins).
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.first_value(names::VERSION)
    }

    /// Returns the formatted name (FN).
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.first_value(names::FN)
    }

    /// Returns the raw structured name value (N).
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.first_value(names::N)
    }

    /// Returns the structured name (N) parsed into components.
    #[must_use]
    pub fn structured_name(&self) -> Option<StructuredName> {
        self.name().map(StructuredName::parse)
    }

    /// Returns the nickname (NICKNAME).
    #[must_use]
    pub fn nickname(&self) -> Option<&str> {
        self.first_value(names::NICKNAME)
    }

    /// Returns the photo URI (PHOTO).
    #[must_use]
    pub fn photo(&self) -> Option<&str> {
        self.first_value(names::PHOTO)
    }

    /// Returns the birthday (BDAY).
    #[must_use]
    pub fn birthday(&self) -> Option<&str> {
        self.first_value(names::BDAY)
    }

    /// Returns the organization (ORG).
    #[must_use]
    pub fn organization(&self) -> Option<&str> {
        self.first_value(names::ORG)
    }

    /// Returns the job title (TITLE).
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.first_value(names::TITLE)
    }

    /// Returns all telephone properties (TEL).
    #[must_use]
    pub fn telephones(&self) -> &[Property] {
        self.get_properties(names::TEL).unwrap_or(&[])
    }

    /// Returns all email properties (EMAIL).
    #[must_use]
    pub fn emails(&self) -> &[Property] {
        self.get_properties(names::EMAIL).unwrap_or(&[])
    }

    /// Returns all address properties (ADR).
    #[must_use]
    pub fn addresses(&self) -> &[Property] {
        self.get_properties(names::ADR).unwrap_or(&[])
    }

    /// Returns all ADR values parsed into components.
    #[must_use]
    pub fn structured_addresses(&self) -> Vec<StructuredAddress> {
        self.addresses()
            .iter()
            .map(|p| StructuredAddress::parse(&p.value))
            .collect()
    }

    /// Returns all URL properties.
    #[must_use]
    pub fn urls(&self) -> &[Property] {
        self.get_properties(names::URL).unwrap_or(&[])
    }
}
