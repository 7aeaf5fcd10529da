//! Batch operation processor
//!
//! Orchestrates a batch run, delegating:
//! - CSV parsing to `OperationReader` (iterator interface)
//! - Balance rules to `LedgerEngine`
//! - Journal lines to `Journal`, when one is configured
//! - Balance output to `csv_format::write_balances_csv`
//!
//! Records are streamed one at a time. A record that fails to parse, names an
//! unknown customer or account, or is declined is logged and skipped; the run
//! continues with the next record.

use crate::core::{CustomerDirectory, CustomerStore, LedgerEngine};
use crate::io::csv_format::write_balances_csv;
use crate::io::journal::Journal;
use crate::io::reader::OperationReader;
use crate::types::{LedgerError, OperationRecord};
use std::io::Write;
use std::path::Path;

/// Counts of record outcomes in a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Operations that changed balances (interest on cheque included)
    pub applied: usize,
    /// Withdrawals or transfers refused by an account's rules
    pub declined: usize,
    /// Records that could not be applied at all (parse, validation, lookup)
    pub rejected: usize,
}

impl ProcessSummary {
    pub fn total(&self) -> usize {
        self.applied + self.declined + self.rejected
    }
}

/// Batch processor over a customer store
pub struct OperationProcessor<S = CustomerDirectory> {
    engine: LedgerEngine<S>,
    journal: Option<Journal>,
}

impl<S: CustomerStore> OperationProcessor<S> {
    pub fn new(store: S) -> Self {
        OperationProcessor {
            engine: LedgerEngine::new(store),
            journal: None,
        }
    }

    /// Append journal lines for every applied operation
    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn engine(&self) -> &LedgerEngine<S> {
        &self.engine
    }

    pub fn into_store(self) -> S {
        self.engine.into_store()
    }

    /// Apply one record and journal it
    ///
    /// # Returns
    ///
    /// * `Ok(Ok(()))` - applied
    /// * `Ok(Err(e))` - declined or rejected; balances unchanged
    /// * `Err(e)` - the journal could not be written (fatal)
    fn apply(&mut self, record: OperationRecord) -> Result<Result<(), LedgerError>, LedgerError> {
        let entries = match self.engine.process(record) {
            Ok(entries) => entries,
            Err(e) => return Ok(Err(e)),
        };

        if let Some(journal) = &self.journal {
            journal.append_all(&entries)?;
        }
        for entry in &entries {
            tracing::debug!(
                account = %entry.account_number,
                balance = %entry.new_balance,
                "{:?} applied",
                entry.kind
            );
        }

        Ok(Ok(()))
    }

    /// Apply a stream of parsed records
    ///
    /// # Errors
    ///
    /// Only journal write failures abort the run.
    pub fn process_records<I>(&mut self, records: I) -> Result<ProcessSummary, LedgerError>
    where
        I: IntoIterator<Item = Result<OperationRecord, LedgerError>>,
    {
        let mut summary = ProcessSummary::default();

        for result in records {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!("Skipping malformed record: {}", e);
                    summary.rejected += 1;
                    continue;
                }
            };

            match self.apply(record)? {
                Ok(()) => summary.applied += 1,
                Err(e) if e.is_decline() => {
                    tracing::warn!("Operation declined: {}", e);
                    summary.declined += 1;
                }
                Err(e) => {
                    tracing::warn!("Operation rejected: {}", e);
                    summary.rejected += 1;
                }
            }
        }

        tracing::info!(
            applied = summary.applied,
            declined = summary.declined,
            rejected = summary.rejected,
            "batch processed"
        );
        Ok(summary)
    }

    /// Stream the operations CSV at `input_path` through the engine
    pub fn process_file(&mut self, input_path: &Path) -> Result<ProcessSummary, LedgerError> {
        let reader = OperationReader::open(input_path)?;
        self.process_records(reader)
    }

    /// Write every account's balance as CSV
    pub fn write_balances(&self, output: &mut dyn Write) -> Result<(), LedgerError> {
        let customers = self.engine.store().all_customers();
        write_balances_csv(&customers, output)
    }

    /// Process the input file, then write the balances
    pub fn run(&mut self, input_path: &Path, output: &mut dyn Write) -> Result<ProcessSummary, LedgerError> {
        let summary = self.process_file(input_path)?;
        self.write_balances(output)?;
        Ok(summary)
    }
}
