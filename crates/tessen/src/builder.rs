//! Fluent construction API for vCards.
//!
//! The builder is a plain accumulator over [`VCard`]'s mutators; `build`
//! hands back the finished card. It performs no validation: a card built
//! without VERSION or FN serializes fine but will not re-parse.

use crate::core::{Property, StructuredAddress, StructuredName, VCard, names};

/// Telephone TYPE parameter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelType {
    /// Text telephone.
    Text,
    /// Voice telephone.
    Voice,
    /// Fax number.
    Fax,
    /// Cell phone.
    Cell,
    /// Video conference.
    Video,
    /// Pager.
    Pager,
    /// Text phone (TTY).
    TextPhone,
    /// Work telephone.
    Work,
    /// Home telephone.
    Home,
}

impl TelType {
    /// Returns the vCard TYPE value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Voice => "voice",
            Self::Fax => "fax",
            Self::Cell => "cell",
            Self::Video => "video",
            Self::Pager => "pager",
            Self::TextPhone => "textphone",
            Self::Work => "work",
            Self::Home => "home",
        }
    }
}

/// Email TYPE parameter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailType {
    /// Work email.
    Work,
    /// Home email.
    Home,
    /// Internet email.
    Internet,
}

impl EmailType {
    /// Returns the vCard TYPE value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Home => "home",
            Self::Internet => "internet",
        }
    }
}

/// Address TYPE parameter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdrType {
    /// Work address.
    Work,
    /// Home address.
    Home,
    /// Postal address.
    Postal,
    /// Parcel delivery address.
    Parcel,
    /// Domestic address.
    Dom,
    /// International address.
    Intl,
}

impl AdrType {
    /// Returns the vCard TYPE value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Home => "home",
            Self::Postal => "postal",
            Self::Parcel => "parcel",
            Self::Dom => "dom",
            Self::Intl => "intl",
        }
    }
}

/// Builder for constructing vCards with a fluent, type-safe API.
#[derive(Debug, Default)]
pub struct VCardBuilder {
    card: VCard,
}

impl VCardBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the vCard version (typically "4.0").
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.card.add_property(Property::new(names::VERSION, version));
        self
    }

    /// Sets the formatted name (FN).
    #[must_use]
    pub fn formatted_name(mut self, name: impl Into<String>) -> Self {
        self.card.add_property(Property::new(names::FN, name));
        self
    }

    /// Sets the structured name (N) from a raw
    /// `family;given;additional;prefixes;suffixes` value.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.card.add_property(Property::new(names::N, name));
        self
    }

    /// Sets the structured name (N) from components.
    #[must_use]
    pub fn structured_name(self, name: &StructuredName) -> Self {
        self.name(name.to_string())
    }

    /// Adds a telephone number (TEL) with TYPE parameters.
    #[must_use]
    pub fn telephone(mut self, number: impl Into<String>, types: &[TelType]) -> Self {
        let mut prop = Property::new(names::TEL, number);
        for tel_type in types {
            prop.add_parameter("TYPE", tel_type.as_str());
        }
        self.card.add_property(prop);
        self
    }

    /// Adds an email address (EMAIL) with TYPE parameters.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>, types: &[EmailType]) -> Self {
        let mut prop = Property::new(names::EMAIL, email);
        for email_type in types {
            prop.add_parameter("TYPE", email_type.as_str());
        }
        self.card.add_property(prop);
        self
    }

    /// Adds a delivery address (ADR) from a raw
    /// `po_box;extended;street;locality;region;postal_code;country` value.
    #[must_use]
    pub fn address(mut self, address: impl Into<String>, types: &[AdrType]) -> Self {
        let mut prop = Property::new(names::ADR, address);
        for adr_type in types {
            prop.add_parameter("TYPE", adr_type.as_str());
        }
        self.card.add_property(prop);
        self
    }

    /// Adds a delivery address (ADR) from components.
    #[must_use]
    pub fn structured_address(self, address: &StructuredAddress, types: &[AdrType]) -> Self {
        self.address(address.to_string(), types)
    }

    /// Sets the nickname (NICKNAME).
    #[must_use]
    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.card.add_property(Property::new(names::NICKNAME, nickname));
        self
    }

    /// Sets the photo URI (PHOTO).
    #[must_use]
    pub fn photo(mut self, uri: impl Into<String>) -> Self {
        self.card.add_property(Property::new(names::PHOTO, uri));
        self
    }

    /// Sets the birthday (BDAY), e.g. `19850415` or `1985-04-15`.
    #[must_use]
    pub fn birthday(mut self, date: impl Into<String>) -> Self {
        self.card.add_property(Property::new(names::BDAY, date));
        self
    }

    /// Sets the anniversary (ANNIVERSARY).
    #[must_use]
    pub fn anniversary(mut self, date: impl Into<String>) -> Self {
        self.card.add_property(Property::new(names::ANNIVERSARY, date));
        self
    }

    /// Sets the gender (GENDER).
    #[must_use]
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.card.add_property(Property::new(names::GENDER, gender));
        self
    }

    /// Sets the organization (ORG).
    #[must_use]
    pub fn organization(mut self, org: impl Into<String>) -> Self {
        self.card.add_property(Property::new(names::ORG, org));
        self
    }

    /// Sets the job title (TITLE).
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.card.add_property(Property::new(names::TITLE, title));
        self
    }

    /// Sets the role (ROLE).
    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.card.add_property(Property::new(names::ROLE, role));
        self
    }

    /// Adds a URL.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.card.add_property(Property::new(names::URL, url));
        self
    }

    /// Sets the note (NOTE).
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.card.add_property(Property::new(names::NOTE, note));
        self
    }

    /// Sets the unique identifier (UID).
    #[must_use]
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.card.add_property(Property::new(names::UID, uid));
        self
    }

    /// Sets the categories (CATEGORIES).
    #[must_use]
    pub fn categories(mut self, categories: impl Into<String>) -> Self {
        self.card
            .add_property(Property::new(names::CATEGORIES, categories));
        self
    }

    /// Sets the revision timestamp (REV).
    #[must_use]
    pub fn revision(mut self, rev: impl Into<String>) -> Self {
        self.card.add_property(Property::new(names::REV, rev));
        self
    }

    /// Adds an arbitrary property (for extension properties not covered by
    /// the typed methods).
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.card.add_property(Property::new(name, value));
        self
    }

    /// Returns the finished card.
    #[must_use]
    pub fn build(self) -> VCard {
        self.card
    }
}
