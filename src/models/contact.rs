//! Contact data model.

use serde::Serialize;
use std::fmt;

/// A person's first name, last name and phone number.
///
/// Contacts are immutable. They are created by the manager's add path
/// (see [`NewContact::validate`](crate::domain::NewContact::validate)), so a
/// `Contact` never holds an absent field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    first_name: String,
    last_name: String,
    phone_number: String,
}

impl Contact {
    pub(crate) fn new(first_name: String, last_name: String, phone_number: String) -> Self {
        Self {
            first_name,
            last_name,
            phone_number,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Whether all three fields equal the given values.
    pub fn matches(&self, first_name: &str, last_name: &str, phone_number: &str) -> bool {
        self.first_name == first_name
            && self.last_name == last_name
            && self.phone_number == phone_number
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.first_name, self.last_name, self.phone_number
        )
    }
}
