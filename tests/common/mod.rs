//! Shared setup, teardown and assertions for contact manager tests.
//!
//! Each test case gets a freshly constructed manager from [`setup`] and
//! hands it back to [`teardown`] when done. Parameterized cases are plain
//! slices driven through [`for_each_case`].

use contact_manager::{Contact, ContactManager};
use std::sync::Once;

pub mod fixtures;

static SETUP_ALL: Once = Once::new();

/// One-time setup shared by every test in the binary.
///
/// Installs a test-writer subscriber so library logs show up in failing
/// test output. Set `RUST_LOG=debug` to see them.
pub fn setup_all() {
    SETUP_ALL.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
        tracing::debug!("Test suite setup complete");
    });
}

/// Per-test setup: a fresh, empty manager.
pub fn setup() -> ContactManager {
    setup_all();
    ContactManager::new()
}

/// Per-test teardown.
#[allow(dead_code)]
pub fn teardown(manager: ContactManager) {
    tracing::debug!(contacts = manager.len(), "Test case finished");
}

/// Run `case` once per parameter, each time on a fresh manager.
#[allow(dead_code)]
pub fn for_each_case<P, F>(params: &[P], mut case: F)
where
    P: AsRef<str>,
    F: FnMut(&mut ContactManager, &str),
{
    for param in params {
        let mut manager = setup();
        case(&mut manager, param.as_ref());
        teardown(manager);
    }
}

/// Assert that `contacts` holds exactly one contact with the given values.
#[allow(dead_code)]
pub fn assert_single_contact(
    contacts: &[Contact],
    first_name: &str,
    last_name: &str,
    phone_number: &str,
) {
    assert!(!contacts.is_empty(), "Contact list should not be empty");
    assert_eq!(contacts.len(), 1, "Expected exactly one contact");
    assert!(
        contacts
            .iter()
            .any(|c| c.matches(first_name, last_name, phone_number)),
        "No contact matching {} {} ({}) in {:?}",
        first_name,
        last_name,
        phone_number,
        contacts
    );
}
