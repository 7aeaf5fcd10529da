//! Account Ledger Library
//! # Overview
//!
//! This library keeps customers' bank accounts and applies deposits,
//! withdrawals, transfers and monthly interest to them, each under the rules of
//! the account's variant.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, Customer, JournalEntry, errors)
//! - [`core`] - Business logic components:
//!   - [`core::account_ops`] - Per-variant withdrawal and interest rules
//!   - [`core::transfer`] - All-or-nothing transfers between two accounts
//!   - [`core::directory`] - Customer store keyed by customer code
//!   - [`core::session`] - Login sessions
//!   - [`core::engine`] - Applies operation records, producing journal entries
//! - [`io`] - CSV input and output, journal files, TOML seed data
//! - [`processor`] - Batch driver tying the reader, engine and journal together
//! - [`cli`] / [`logging`] - Binary support
//!
//! # Account Variants
//!
//! - **Savings**: withdrawals need the full amount; a result below 100.00 costs
//!   a flat 10.00 fee. Earns monthly interest.
//! - **Cheque**: may go negative down to its overdraft limit. Earns nothing.
//! - **Investment**: every withdrawal pays a 5% penalty, which the balance must
//!   cover. Earns its expected return monthly.
//!
//! A declined operation never changes a balance.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod processor;
pub mod types;

pub use core::{CustomerDirectory, CustomerStore, LedgerEngine, Session, Transactable};
pub use io::write_balances_csv;
pub use processor::{OperationProcessor, ProcessSummary};
pub use types::{
    Account, AccountKind, AccountType, Customer, JournalEntry, LedgerError, OperationRecord,
    OperationType, RiskLevel,
};
