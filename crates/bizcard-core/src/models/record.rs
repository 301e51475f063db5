//! Contact record model: nine fixed fields extracted from a card.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BizcardError;

/// Sentinel stored when no fragment was assigned to a field.
///
/// Fields are never empty and never absent: a field without a value holds
/// exactly this string.
pub const MISSING: &str = "NA";

/// One of the nine semantic fields composing a contact record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Designation,
    CompanyName,
    Contact,
    Email,
    Website,
    Address,
    State,
    Pincode,
}

impl Field {
    /// All fields in display/storage order.
    pub const ALL: [Field; 9] = [
        Field::Name,
        Field::Designation,
        Field::CompanyName,
        Field::Contact,
        Field::Email,
        Field::Website,
        Field::Address,
        Field::State,
        Field::Pincode,
    ];

    /// Display label (uppercase, as shown to the user).
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "NAME",
            Field::Designation => "DESIGNATION",
            Field::CompanyName => "COMPANY_NAME",
            Field::Contact => "CONTACT",
            Field::Email => "EMAIL",
            Field::Website => "WEBSITE",
            Field::Address => "ADDRESS",
            Field::State => "STATE",
            Field::Pincode => "PINCODE",
        }
    }

    /// Storage column name in the `bizcard_info` table.
    pub fn column(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Designation => "designation",
            Field::CompanyName => "company_name",
            Field::Contact => "contact",
            Field::Email => "email",
            Field::Website => "website",
            Field::Address => "address",
            Field::State => "state",
            Field::Pincode => "pincode",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Field {
    type Err = BizcardError;

    /// Accepts the display label or the column name, case-insensitively.
    /// Spaces and dashes are treated as underscores ("company name" works).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "NAME" => Ok(Field::Name),
            "DESIGNATION" => Ok(Field::Designation),
            "COMPANY_NAME" | "COMPANY" => Ok(Field::CompanyName),
            "CONTACT" => Ok(Field::Contact),
            "EMAIL" => Ok(Field::Email),
            "WEBSITE" => Ok(Field::Website),
            "ADDRESS" => Ok(Field::Address),
            "STATE" => Ok(Field::State),
            "PINCODE" => Ok(Field::Pincode),
            _ => Err(BizcardError::UnknownField(s.to_string())),
        }
    }
}

/// A structured contact extracted from one business card.
///
/// Invariant: every field is present; a field with no assigned fragment holds
/// the literal [`MISSING`] sentinel, never an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub designation: String,
    pub company_name: String,
    pub contact: String,
    pub email: String,
    pub website: String,
    pub address: String,
    pub state: String,
    pub pincode: String,
}

impl ContactRecord {
    /// Record with every field set to the [`MISSING`] sentinel.
    pub fn na() -> Self {
        Self {
            name: MISSING.to_string(),
            designation: MISSING.to_string(),
            company_name: MISSING.to_string(),
            contact: MISSING.to_string(),
            email: MISSING.to_string(),
            website: MISSING.to_string(),
            address: MISSING.to_string(),
            state: MISSING.to_string(),
            pincode: MISSING.to_string(),
        }
    }

    /// Value of a field by tag.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Designation => &self.designation,
            Field::CompanyName => &self.company_name,
            Field::Contact => &self.contact,
            Field::Email => &self.email,
            Field::Website => &self.website,
            Field::Address => &self.address,
            Field::State => &self.state,
            Field::Pincode => &self.pincode,
        }
    }

    /// Set a field by tag. An empty value is stored as [`MISSING`] so the
    /// never-empty invariant holds through edits.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let value = if value.is_empty() {
            MISSING.to_string()
        } else {
            value
        };
        match field {
            Field::Name => self.name = value,
            Field::Designation => self.designation = value,
            Field::CompanyName => self.company_name = value,
            Field::Contact => self.contact = value,
            Field::Email => self.email = value,
            Field::Website => self.website = value,
            Field::Address => self.address = value,
            Field::State => self.state = value,
            Field::Pincode => self.pincode = value,
        }
    }

    /// Iterate fields and values in display order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// The (name, designation, company_name) triple used for duplicate
    /// detection in storage.
    pub fn duplicate_key(&self) -> (&str, &str, &str) {
        (&self.name, &self.designation, &self.company_name)
    }
}

impl Default for ContactRecord {
    fn default() -> Self {
        Self::na()
    }
}
