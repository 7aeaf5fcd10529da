//! Core business logic module
//!
//! This module contains the ledger components:
//! - `traits` - Account and customer-store abstractions
//! - `account_ops` - Per-variant deposit, withdrawal and interest rules
//! - `transfer` - All-or-nothing transfers between two accounts
//! - `directory` - In-memory customer store keyed by customer code
//! - `session` - Explicit login session for the active customer
//! - `engine` - Applies operation records and produces journal entries

pub mod account_ops;
pub mod directory;
pub mod engine;
pub mod session;
pub mod traits;
pub mod transfer;

pub use account_ops::{MIN_BALANCE_FEE, MIN_BALANCE_THRESHOLD, WITHDRAWAL_PENALTY_RATE};
pub use directory::CustomerDirectory;
pub use engine::LedgerEngine;
pub use session::Session;
pub use traits::{CustomerStore, Transactable};
pub use transfer::{transfer, TransferReceipt};
