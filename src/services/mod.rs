//! Application service layer.
//!
//! Services own the in-memory state and enforce the invariants of the
//! domain types before anything is stored.

mod contact_manager;

pub use contact_manager::ContactManager;
