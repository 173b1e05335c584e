//! Domain value objects and types.
//!
//! This module contains the types that sit at the call boundary of the
//! manager: field names used in error reporting and the possibly-incomplete
//! input to an addition. Absent values are rejected here, before a
//! [`Contact`](crate::models::Contact) is ever constructed.

pub mod field;
pub mod new_contact;

pub use field::ContactField;
pub use new_contact::NewContact;
