//! Operation-related types for the account ledger
//!
//! This module defines the operations a caller can apply to a customer's
//! accounts, as read from the batch input file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Operation types supported by the ledger engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account under its variant's withdrawal policy
    Withdrawal,

    /// Move funds between two accounts owned by the same customer
    ///
    /// Both balances change together or not at all.
    Transfer,

    /// Apply one month of interest or expected return
    ///
    /// Carries no amount. Cheque accounts accrue nothing.
    Interest,
}

/// Input operation record
///
/// `amount` is absent for interest; `destination` is only meaningful for
/// transfers and may be missing, in which case the engine declines the
/// transfer with a validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    pub op_type: OperationType,

    /// Customer code as written in the input (matched case-insensitively)
    pub customer: String,

    /// Account the operation applies to (the source for transfers)
    pub account: String,

    pub amount: Option<Decimal>,

    /// Destination account number for transfers
    pub destination: Option<String>,
}
