//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account and its variants
//! - `customer`: Customer and owned accounts
//! - `operation`: Operations applied by the batch driver
//! - `journal`: Journal entries describing completed balance changes
//! - `error`: Error types for the ledger

pub mod account;
pub mod customer;
pub mod error;
pub mod journal;
pub mod operation;

pub use account::{Account, AccountKind, AccountType, RiskLevel};
pub use customer::Customer;
pub use error::LedgerError;
pub use journal::{EntryKind, JournalEntry};
pub use operation::{OperationRecord, OperationType};
