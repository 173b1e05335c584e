//! NewContact input parameters.

use super::field::ContactField;
use crate::error::{ContactError, ContactResult};
use crate::models::Contact;

/// The input to a contact addition.
///
/// Every field is optional here so that an absent value can be represented
/// and rejected explicitly. [`NewContact::validate`] is the only way to turn
/// it into a [`Contact`].
///
/// # Example
///
/// ```
/// use contact_manager::domain::{ContactField, NewContact};
///
/// let complete = NewContact::new(Some("Atul"), Some("Sharma"), Some("09383934549"));
/// assert!(complete.validate().is_ok());
///
/// let missing = NewContact::new(Some("Atul"), None, Some("09383934549"));
/// assert_eq!(missing.validate().unwrap_err().field(), ContactField::LastName);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContact {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

impl NewContact {
    /// Build parameters from borrowed, possibly absent values.
    pub fn new(
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
    ) -> Self {
        Self {
            first_name: first_name.map(str::to_string),
            last_name: last_name.map(str::to_string),
            phone_number: phone_number.map(str::to_string),
        }
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn phone_number(mut self, value: impl Into<String>) -> Self {
        self.phone_number = Some(value.into());
        self
    }

    /// Check that every field is present and build the contact.
    ///
    /// Fields are checked in the order first name, last name, phone number;
    /// the first absent one is reported. Present values are taken as-is:
    /// empty strings and unformatted phone numbers are accepted.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidArgument` naming the first absent field.
    pub fn validate(self) -> ContactResult<Contact> {
        let first_name = require(self.first_name, ContactField::FirstName)?;
        let last_name = require(self.last_name, ContactField::LastName)?;
        let phone_number = require(self.phone_number, ContactField::PhoneNumber)?;

        Ok(Contact::new(first_name, last_name, phone_number))
    }
}

fn require(value: Option<String>, field: ContactField) -> ContactResult<String> {
    value.ok_or(ContactError::InvalidArgument { field })
}
