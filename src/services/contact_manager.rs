//! In-memory contact registry.

use crate::config::Config;
use crate::domain::NewContact;
use crate::error::ContactResult;
use crate::models::Contact;
use std::slice;

/// An in-memory, insertion-ordered registry of contacts.
///
/// A manager starts empty and only grows: contacts are added through
/// [`add_contact`](Self::add_contact) or [`add`](Self::add) and listed
/// through [`get_all_contacts`](Self::get_all_contacts). Nothing is
/// persisted; the contacts live as long as the manager.
///
/// # Example
///
/// ```
/// use contact_manager::ContactManager;
///
/// let mut manager = ContactManager::new();
/// manager.add_contact(Some("Atul"), Some("Sharma"), Some("09383934549")).unwrap();
///
/// let contacts = manager.get_all_contacts();
/// assert_eq!(contacts.len(), 1);
/// assert_eq!(contacts[0].first_name(), "Atul");
///
/// assert!(manager.add_contact(None, Some("Sharma"), Some("01123456789")).is_err());
/// assert_eq!(manager.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactManager {
    contacts: Vec<Contact>,
}

impl ContactManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty manager with room for `capacity` contacts.
    ///
    /// The capacity is a sizing hint, not a limit.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contacts: Vec::with_capacity(capacity),
        }
    }

    /// Create an empty manager sized from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Add a contact from possibly absent values.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidArgument` naming the first absent field
    /// (checked in the order first name, last name, phone number). The
    /// manager is left unchanged on error.
    pub fn add_contact(
        &mut self,
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
    ) -> ContactResult<()> {
        self.add(NewContact::new(first_name, last_name, phone_number))
    }

    /// Add a contact from prepared parameters.
    ///
    /// # Errors
    ///
    /// Same as [`add_contact`](Self::add_contact).
    pub fn add(&mut self, new_contact: NewContact) -> ContactResult<()> {
        let contact = match new_contact.validate() {
            Ok(contact) => contact,
            Err(e) => {
                tracing::warn!(field = %e.field(), "Rejected contact: {}", e);
                return Err(e);
            }
        };

        self.contacts.push(contact);
        tracing::debug!(count = self.contacts.len(), "Contact added");
        Ok(())
    }

    /// All contacts added so far, in insertion order.
    pub fn get_all_contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Iterate over the contacts in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Number of contacts added so far.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether no contact has been added yet.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl<'a> IntoIterator for &'a ContactManager {
    type Item = &'a Contact;
    type IntoIter = slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
