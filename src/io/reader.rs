//! Streaming CSV reader for operation records
//!
//! Provides an iterator over the operations in a batch input file. CSV format
//! concerns are delegated to the csv_format module.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, unreadable header) are returned from `open()`
//! - Individual record errors are yielded as `Err(LedgerError::ParseError)` with
//!   the 1-based line number, and iteration continues with the next record
//!
//! ```no_run
//! use account_ledger::io::reader::OperationReader;
//! use std::path::Path;
//!
//! let reader = OperationReader::open(Path::new("operations.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Applying operation: {:?}", record),
//!         Err(e) => eprintln!("Skipping: {}", e),
//!     }
//! }
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{LedgerError, OperationRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Operation record reader
///
/// Reads one CSV row at a time; memory use does not grow with the file.
#[derive(Debug)]
pub struct OperationReader<R = File> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    row: StringRecord,
    finished: bool,
}

impl OperationReader<File> {
    /// Open a CSV file for streaming iteration
    ///
    /// # Errors
    ///
    /// * `FileNotFound` if nothing exists at `path`
    /// * `IoError` / `ParseError` if the file or its header cannot be read
    pub fn open(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LedgerError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => LedgerError::from(e),
        })?;

        Self::from_reader(file)
    }
}

impl<R: Read> OperationReader<R> {
    /// Wrap any reader producing operation CSV
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (trailing amount and destination may be omitted)
    pub fn from_reader(input: R) -> Result<Self, LedgerError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(input);

        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            row: StringRecord::new(),
            finished: false,
        })
    }

    fn parse_row(&self) -> Result<OperationRecord, LedgerError> {
        let line = self.row.position().map(|pos| pos.line());

        let csv_record: CsvRecord = self
            .row
            .deserialize(Some(&self.headers))
            .map_err(|e| LedgerError::ParseError {
                line,
                message: e.to_string(),
            })?;

        convert_csv_record(csv_record).map_err(|message| LedgerError::ParseError { line, message })
    }
}

impl<R: Read> Iterator for OperationReader<R> {
    type Item = Result<OperationRecord, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.reader.read_record(&mut self.row) {
            Ok(true) => Some(self.parse_row()),
            Ok(false) => {
                self.finished = true;
                None
            }
            Err(e) => {
                // An I/O failure would repeat forever; stop after reporting it
                if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                    self.finished = true;
                }
                Some(Err(e.into()))
            }
        }
    }
}
