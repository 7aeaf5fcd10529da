//! Ledger engine
//!
//! This module provides the LedgerEngine that applies operation records to the
//! customers held by a `CustomerStore`.
//!
//! The engine enforces:
//! - Customer and account resolution (codes are uppercased before lookup)
//! - Presence of an amount for deposits, withdrawals and transfers
//! - Per-variant account rules, by delegating to `Transactable`
//!
//! It never writes the journal itself: every successful operation returns the
//! journal entries describing it, and the caller decides where they go. An
//! interest run that accrues nothing returns no entries.

use crate::core::directory::CustomerDirectory;
use crate::core::traits::{CustomerStore, Transactable};
use crate::types::{
    Customer, EntryKind, JournalEntry, LedgerError, OperationRecord, OperationType,
};
use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;

/// Operation processing engine
///
/// Owns the customer store for the duration of a run.
pub struct LedgerEngine<S = CustomerDirectory> {
    store: S,
}

impl<S: CustomerStore> LedgerEngine<S> {
    /// Create an engine over an already populated store
    pub fn new(store: S) -> Self {
        LedgerEngine { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Apply a single operation record, stamped with the local time
    ///
    /// # Returns
    ///
    /// * `Ok(entries)` - journal entries for the completed operation
    /// * `Err(LedgerError)` - the operation was rejected or declined; no
    ///   balance changed
    pub fn process(&mut self, record: OperationRecord) -> Result<Vec<JournalEntry>, LedgerError> {
        self.process_at(record, Local::now().naive_local())
    }

    /// Apply a single operation record with an explicit timestamp
    pub fn process_at(
        &mut self,
        record: OperationRecord,
        timestamp: NaiveDateTime,
    ) -> Result<Vec<JournalEntry>, LedgerError> {
        let code = record.customer.trim().to_uppercase();
        let customer = self
            .store
            .find_by_code_mut(&code)
            .ok_or_else(|| LedgerError::customer_not_found(&code))?;

        match record.op_type {
            OperationType::Deposit => process_deposit(customer, &record, timestamp),
            OperationType::Withdrawal => process_withdrawal(customer, &record, timestamp),
            OperationType::Transfer => process_transfer(customer, &record, timestamp),
            OperationType::Interest => process_interest(customer, &record, timestamp),
        }
    }
}

impl Default for LedgerEngine<CustomerDirectory> {
    fn default() -> Self {
        Self::new(CustomerDirectory::new())
    }
}

fn required_amount(record: &OperationRecord, operation: &str) -> Result<Decimal, LedgerError> {
    record
        .amount
        .ok_or_else(|| LedgerError::missing_amount(operation, &record.account))
}

fn process_deposit(
    customer: &mut Customer,
    record: &OperationRecord,
    timestamp: NaiveDateTime,
) -> Result<Vec<JournalEntry>, LedgerError> {
    let amount = required_amount(record, "deposit")?;
    let code = customer.customer_code().to_string();
    let account = customer
        .account_mut(&record.account)
        .ok_or_else(|| LedgerError::account_not_found(&code, &record.account))?;

    let new_balance = account.deposit(amount)?;

    Ok(vec![JournalEntry {
        timestamp,
        kind: EntryKind::Deposit,
        account_type: account.account_type(),
        account_number: record.account.clone(),
        amount,
        new_balance,
    }])
}

fn process_withdrawal(
    customer: &mut Customer,
    record: &OperationRecord,
    timestamp: NaiveDateTime,
) -> Result<Vec<JournalEntry>, LedgerError> {
    let amount = required_amount(record, "withdrawal")?;
    let code = customer.customer_code().to_string();
    let account = customer
        .account_mut(&record.account)
        .ok_or_else(|| LedgerError::account_not_found(&code, &record.account))?;

    let new_balance = account.withdraw(amount)?;

    Ok(vec![JournalEntry {
        timestamp,
        kind: EntryKind::Withdrawal,
        account_type: account.account_type(),
        account_number: record.account.clone(),
        amount,
        new_balance,
    }])
}

fn process_transfer(
    customer: &mut Customer,
    record: &OperationRecord,
    timestamp: NaiveDateTime,
) -> Result<Vec<JournalEntry>, LedgerError> {
    let amount = required_amount(record, "transfer")?;
    let receipt = customer.transfer(&record.account, record.destination.as_deref(), amount)?;

    Ok(vec![
        JournalEntry {
            timestamp,
            kind: EntryKind::TransferOut {
                counterparty: receipt.destination.clone(),
                counterparty_type: receipt.destination_type,
            },
            account_type: receipt.source_type,
            account_number: receipt.source.clone(),
            amount,
            new_balance: receipt.source_balance,
        },
        JournalEntry {
            timestamp,
            kind: EntryKind::TransferIn {
                counterparty: receipt.source,
                counterparty_type: receipt.source_type,
            },
            account_type: receipt.destination_type,
            account_number: receipt.destination,
            amount,
            new_balance: receipt.destination_balance,
        },
    ])
}

fn process_interest(
    customer: &mut Customer,
    record: &OperationRecord,
    timestamp: NaiveDateTime,
) -> Result<Vec<JournalEntry>, LedgerError> {
    let code = customer.customer_code().to_string();
    let account = customer
        .account_mut(&record.account)
        .ok_or_else(|| LedgerError::account_not_found(&code, &record.account))?;

    let accrued = account.apply_interest();
    // Nothing accrued (cheque accounts, zero balance): nothing to journal
    if accrued.is_zero() {
        return Ok(Vec::new());
    }

    Ok(vec![JournalEntry {
        timestamp,
        kind: EntryKind::Interest,
        account_type: account.account_type(),
        account_number: record.account.clone(),
        amount: accrued,
        new_balance: account.balance(),
    }])
}
