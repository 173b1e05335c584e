//! Contact Manager - an in-memory registry of contacts.
//!
//! A [`ContactManager`] stores contacts (first name, last name, phone number)
//! in insertion order and lists them back. Absent values are rejected when a
//! contact is added; nothing else about the values is validated.
//!
//! # Architecture
//!
//! - **models**: The immutable `Contact` record
//! - **domain**: Call-boundary types (`NewContact`, `ContactField`)
//! - **services**: The `ContactManager` registry
//! - **intake**: Bulk addition from CSV rows
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod intake;
pub mod models;
pub mod services;

pub use config::Config;
pub use domain::{ContactField, NewContact};
pub use error::{ConfigError, ContactError, IntakeError};
pub use intake::{import_rows, phone_numbers_from_csv, ContactRow, IntakeReport};
pub use models::Contact;
pub use services::ContactManager;
