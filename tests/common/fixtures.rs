//! Test fixtures and parameter tables.

use contact_manager::phone_numbers_from_csv;

/// Phone numbers used by the inline value-list cases.
#[allow(dead_code)]
pub const VALUE_PHONE_NUMBERS: [&str; 4] =
    ["09123456789", "09123456789", "09123450679", "09123456780"];

/// Inline CSV, one phone number per row.
#[allow(dead_code)]
pub const INLINE_CSV: &str = "09123456789\n09123456789\n09412345679\n09123456783\n";

/// The one-phone-number-per-row fixture file.
#[allow(dead_code)]
const DATA_CSV: &str = include_str!("../fixtures/data.csv");

/// Mixed valid and invalid contact rows.
#[allow(dead_code)]
pub const CONTACTS_CSV: &str = include_str!("../fixtures/contacts.csv");

/// Phone numbers produced by a generator function.
#[allow(dead_code)]
pub fn phone_numbers() -> Vec<String> {
    ["09123456789", "09123456789", "09412345679", "09123456783"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Phone numbers read from `tests/fixtures/data.csv`.
#[allow(dead_code)]
pub fn data_csv_phone_numbers() -> Vec<String> {
    phone_numbers_from_csv(DATA_CSV)
}
