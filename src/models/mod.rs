//! Data models for contact manager entities.

pub mod contact;

pub use contact::Contact;
