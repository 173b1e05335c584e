//! ContactField enumeration.

use serde::Serialize;
use std::fmt;

/// Names one of the fields of a contact.
///
/// Used by [`ContactError`](crate::error::ContactError) to report which
/// value was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    FirstName,
    LastName,
    PhoneNumber,
}

impl ContactField {
    /// All fields, in the order they are checked.
    pub const ALL: [ContactField; 3] = [Self::FirstName, Self::LastName, Self::PhoneNumber];

    /// The serialized key of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::PhoneNumber => "phoneNumber",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::PhoneNumber => "phone number",
        };
        write!(f, "{}", label)
    }
}
