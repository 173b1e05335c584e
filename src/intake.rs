//! Bulk addition of contacts from CSV rows.
//!
//! Rows hold `first_name,last_name,phone_number`. Cells are trimmed and an
//! empty cell stands for an absent value, so a row with a blank cell is
//! rejected by the manager exactly as a direct call with `None` would be.
//! Cells may be double-quoted, which allows commas inside a value. Blank
//! lines and lines starting with `#` are skipped.

use crate::domain::NewContact;
use crate::error::{IntakeError, IntakeResult};
use crate::services::ContactManager;
use csv::{Reader, ReaderBuilder, StringRecord, Trim};

const CELLS_PER_ROW: usize = 3;

/// One parsed input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    /// 1-based line number in the input
    pub line: usize,
    pub contact: NewContact,
}

impl ContactRow {
    /// Parse a single CSV line.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::MalformedRow` if the line is not valid CSV or
    /// does not have exactly three cells.
    pub fn parse(line: usize, text: &str) -> IntakeResult<Self> {
        let mut record = StringRecord::new();
        let found = csv_reader(text)
            .read_record(&mut record)
            .map_err(|e| IntakeError::MalformedRow {
                line,
                reason: e.to_string(),
            })?;

        if !found {
            return Err(IntakeError::MalformedRow {
                line,
                reason: "empty row".to_string(),
            });
        }

        Self::from_record(line, &record)
    }

    fn from_record(line: usize, record: &StringRecord) -> IntakeResult<Self> {
        if record.len() != CELLS_PER_ROW {
            return Err(IntakeError::MalformedRow {
                line,
                reason: format!("expected {} cells, got {}", CELLS_PER_ROW, record.len()),
            });
        }

        Ok(Self {
            line,
            contact: NewContact::new(cell(&record[0]), cell(&record[1]), cell(&record[2])),
        })
    }
}

fn cell(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn csv_reader(input: &str) -> Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input.as_bytes())
}

fn record_line(record: &StringRecord) -> usize {
    record
        .position()
        .map(|pos| pos.line() as usize)
        .unwrap_or_default()
}

fn malformed(err: &csv::Error) -> IntakeError {
    let line = err
        .position()
        .map(|pos| pos.line() as usize)
        .unwrap_or_default();
    IntakeError::MalformedRow {
        line,
        reason: err.to_string(),
    }
}

/// A line holding only whitespace reads as one empty cell.
fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

/// Outcome of [`import_rows`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeReport {
    /// Number of contacts added
    pub added: usize,

    /// One entry per row that was not added, in input order
    pub failures: Vec<IntakeError>,
}

impl IntakeReport {
    /// Whether every row was added.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Add every row of `input` to `manager`.
///
/// Blank lines and lines starting with `#` are skipped. A failing row does
/// not stop the import; it is recorded in the report instead.
pub fn import_rows(manager: &mut ContactManager, input: &str) -> IntakeReport {
    let mut report = IntakeReport::default();

    for result in csv_reader(input).records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                let err = malformed(&e);
                tracing::warn!(line = err.line(), "Skipping row: {}", err);
                report.failures.push(err);
                continue;
            }
        };
        if is_blank(&record) {
            continue;
        }
        let line = record_line(&record);

        let row = match ContactRow::from_record(line, &record) {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!(line, "Skipping row: {}", e);
                report.failures.push(e);
                continue;
            }
        };

        match manager.add(row.contact) {
            Ok(()) => report.added += 1,
            Err(source) => report.failures.push(IntakeError::Rejected { line, source }),
        }
    }

    tracing::info!(
        added = report.added,
        failed = report.failures.len(),
        "Contact import finished"
    );
    report
}

/// Read phone numbers from a one-number-per-row CSV.
///
/// The trimmed, unquoted first cell of each row is taken; other cells are
/// ignored. Blank lines and `#` comment lines are skipped, as are rows that
/// cannot be read.
pub fn phone_numbers_from_csv(input: &str) -> Vec<String> {
    csv_reader(input)
        .records()
        .filter_map(|result| match result {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping unreadable phone number row: {}", e);
                None
            }
        })
        .filter(|record| !is_blank(record))
        .filter_map(|record| record.get(0).map(str::to_string))
        .collect()
}
