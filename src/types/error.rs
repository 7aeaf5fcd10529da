//! Error types for the account ledger
//!
//! This module defines every error that can surface from ledger operations and
//! from the batch driver around them.
//!
//! # Error Categories
//!
//! - **Validation**: non-positive amounts, missing or invalid transfer destination
//! - **Declines**: insufficient funds, overdraft limit, penalty shortfall
//! - **Lookups**: unknown customer code or account number (caller level only)
//! - **Session**: wrong password, password confirmation mismatch
//! - **Arithmetic**: overflow in balance calculations
//! - **I/O**: file, CSV and seed parsing failures in the driver

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
///
/// Declines are ordinary outcomes, not faults: an operation returning a
/// decline leaves every balance unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Amount is zero or negative
    ///
    /// Rejected before any balance check.
    #[error("Invalid {operation} amount {amount}: must be greater than zero")]
    InvalidAmount {
        /// Operation that received the amount
        operation: String,
        /// The rejected amount
        amount: Decimal,
    },

    /// Operation that moves money was given no amount
    #[error("{operation} on account {account} requires an amount")]
    MissingAmount {
        /// Operation missing its amount
        operation: String,
        /// Account number
        account: String,
    },

    /// Transfer requested without a destination account
    #[error("Transfer from account {source_account} requires a destination account")]
    MissingDestination {
        /// Source account number
        source_account: String,
    },

    /// Transfer destination is the source account itself
    #[error("Cannot transfer from account {account} to itself")]
    SameAccount {
        /// The account number used on both sides
        account: String,
    },

    /// Balance does not cover the requested withdrawal
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account number
        account: String,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Withdrawal would take a cheque account past its overdraft limit
    #[error("Withdrawal of {requested} from account {account} exceeds overdraft limit {limit}: balance {balance}")]
    OverdraftLimitExceeded {
        /// Account number
        account: String,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
        /// Overdraft limit of the account
        limit: Decimal,
    },

    /// Balance covers the amount but not the early withdrawal penalty
    #[error("Insufficient funds in account {account} to cover {requested} plus penalty {penalty}: balance {balance}")]
    PenaltyNotCovered {
        /// Account number
        account: String,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
        /// Penalty that would have been charged
        penalty: Decimal,
    },

    /// Customer code not present in the directory
    #[error("Customer '{code}' not found")]
    CustomerNotFound {
        /// The customer code that was looked up
        code: String,
    },

    /// Account number not owned by the customer
    #[error("Account {account} not found for customer '{customer}'")]
    AccountNotFound {
        /// Customer code
        customer: String,
        /// The account number that was looked up
        account: String,
    },

    /// Password does not match the stored one
    #[error("Invalid credentials for customer '{code}'")]
    InvalidCredentials {
        /// Customer code
        code: String,
    },

    /// New password and its confirmation differ
    #[error("New password and confirmation do not match for customer '{code}'")]
    PasswordMismatch {
        /// Customer code
        code: String,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected to keep the account intact.
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error
    ///
    /// The malformed record is skipped and processing continues.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Seed file could not be interpreted
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the problem
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for LedgerError {
    fn from(error: toml::de::Error) -> Self {
        LedgerError::ConfigError {
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(operation: &str, amount: Decimal) -> Self {
        LedgerError::InvalidAmount {
            operation: operation.to_string(),
            amount,
        }
    }

    /// Create a MissingAmount error
    pub fn missing_amount(operation: &str, account: &str) -> Self {
        LedgerError::MissingAmount {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }

    /// Create a MissingDestination error
    pub fn missing_destination(source_account: &str) -> Self {
        LedgerError::MissingDestination {
            source_account: source_account.to_string(),
        }
    }

    /// Create a SameAccount error
    pub fn same_account(account: &str) -> Self {
        LedgerError::SameAccount {
            account: account.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &str, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account: account.to_string(),
            balance,
            requested,
        }
    }

    /// Create an OverdraftLimitExceeded error
    pub fn overdraft_limit_exceeded(
        account: &str,
        balance: Decimal,
        requested: Decimal,
        limit: Decimal,
    ) -> Self {
        LedgerError::OverdraftLimitExceeded {
            account: account.to_string(),
            balance,
            requested,
            limit,
        }
    }

    /// Create a PenaltyNotCovered error
    pub fn penalty_not_covered(
        account: &str,
        balance: Decimal,
        requested: Decimal,
        penalty: Decimal,
    ) -> Self {
        LedgerError::PenaltyNotCovered {
            account: account.to_string(),
            balance,
            requested,
            penalty,
        }
    }

    /// Create a CustomerNotFound error
    pub fn customer_not_found(code: &str) -> Self {
        LedgerError::CustomerNotFound {
            code: code.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(customer: &str, account: &str) -> Self {
        LedgerError::AccountNotFound {
            customer: customer.to_string(),
            account: account.to_string(),
        }
    }

    /// Create an InvalidCredentials error
    pub fn invalid_credentials(code: &str) -> Self {
        LedgerError::InvalidCredentials {
            code: code.to_string(),
        }
    }

    /// Create a PasswordMismatch error
    pub fn password_mismatch(code: &str) -> Self {
        LedgerError::PasswordMismatch {
            code: code.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }

    /// Create a ConfigError error
    pub fn config_error(message: impl Into<String>) -> Self {
        LedgerError::ConfigError {
            message: message.into(),
        }
    }

    /// Whether this is a business-rule decline (funds, overdraft, penalty)
    pub fn is_decline(&self) -> bool {
        matches!(
            self,
            LedgerError::InsufficientFunds { .. }
                | LedgerError::OverdraftLimitExceeded { .. }
                | LedgerError::PenaltyNotCovered { .. }
        )
    }

    /// Whether the request itself was malformed (rejected before any balance check)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidAmount { .. }
                | LedgerError::MissingAmount { .. }
                | LedgerError::MissingDestination { .. }
                | LedgerError::SameAccount { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::invalid_amount(
        LedgerError::InvalidAmount { operation: "deposit".to_string(), amount: Decimal::new(-500, 2) },
        "Invalid deposit amount -5.00: must be greater than zero"
    )]
    #[case::missing_destination(
        LedgerError::MissingDestination { source_account: "S1001".to_string() },
        "Transfer from account S1001 requires a destination account"
    )]
    #[case::missing_amount(
        LedgerError::MissingAmount { operation: "transfer".to_string(), account: "S1001".to_string() },
        "transfer on account S1001 requires an amount"
    )]
    #[case::same_account(
        LedgerError::SameAccount { account: "C1001".to_string() },
        "Cannot transfer from account C1001 to itself"
    )]
    #[case::insufficient_funds(
        LedgerError::InsufficientFunds { account: "S1001".to_string(), balance: Decimal::new(5000, 2), requested: Decimal::new(10000, 2) },
        "Insufficient funds in account S1001: balance 50.00, requested 100.00"
    )]
    #[case::overdraft_limit_exceeded(
        LedgerError::OverdraftLimitExceeded {
            account: "C1001".to_string(),
            balance: Decimal::new(-400, 0),
            requested: Decimal::new(200, 0),
            limit: Decimal::new(500, 0),
        },
        "Withdrawal of 200 from account C1001 exceeds overdraft limit 500: balance -400"
    )]
    #[case::penalty_not_covered(
        LedgerError::PenaltyNotCovered {
            account: "I1001".to_string(),
            balance: Decimal::new(510, 0),
            requested: Decimal::new(500, 0),
            penalty: Decimal::new(2500, 2),
        },
        "Insufficient funds in account I1001 to cover 500 plus penalty 25.00: balance 510"
    )]
    #[case::customer_not_found(
        LedgerError::CustomerNotFound { code: "UNKNOWN".to_string() },
        "Customer 'UNKNOWN' not found"
    )]
    #[case::account_not_found(
        LedgerError::AccountNotFound { customer: "JSMITH".to_string(), account: "X9".to_string() },
        "Account X9 not found for customer 'JSMITH'"
    )]
    #[case::arithmetic_overflow(
        LedgerError::ArithmeticOverflow { operation: "deposit".to_string(), account: "S1001".to_string() },
        "Arithmetic overflow in deposit for account S1001"
    )]
    #[case::parse_error_with_line(
        LedgerError::ParseError { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::parse_error_without_line(
        LedgerError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::insufficient_funds(
        LedgerError::insufficient_funds("S1", Decimal::ONE, Decimal::TEN),
        LedgerError::InsufficientFunds { account: "S1".to_string(), balance: Decimal::ONE, requested: Decimal::TEN }
    )]
    #[case::same_account(
        LedgerError::same_account("C1"),
        LedgerError::SameAccount { account: "C1".to_string() }
    )]
    #[case::account_not_found(
        LedgerError::account_not_found("JDOE", "I9"),
        LedgerError::AccountNotFound { customer: "JDOE".to_string(), account: "I9".to_string() }
    )]
    #[case::password_mismatch(
        LedgerError::password_mismatch("JDOE"),
        LedgerError::PasswordMismatch { code: "JDOE".to_string() }
    )]
    #[case::config_error(
        LedgerError::config_error("duplicate customer code JDOE"),
        LedgerError::ConfigError { message: "duplicate customer code JDOE".to_string() }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case::insufficient_funds(LedgerError::insufficient_funds("S1", Decimal::ONE, Decimal::TEN), true, false)]
    #[case::overdraft(LedgerError::overdraft_limit_exceeded("C1", Decimal::ZERO, Decimal::TEN, Decimal::ONE), true, false)]
    #[case::penalty(LedgerError::penalty_not_covered("I1", Decimal::TEN, Decimal::TEN, Decimal::ONE), true, false)]
    #[case::invalid_amount(LedgerError::invalid_amount("withdrawal", Decimal::ZERO), false, true)]
    #[case::missing_destination(LedgerError::missing_destination("S1"), false, true)]
    #[case::missing_amount(LedgerError::missing_amount("deposit", "S1"), false, true)]
    #[case::customer_not_found(LedgerError::customer_not_found("NOPE"), false, false)]
    fn test_error_classification(
        #[case] error: LedgerError,
        #[case] decline: bool,
        #[case] validation: bool,
    ) {
        assert_eq!(error.is_decline(), decline);
        assert_eq!(error.is_validation(), validation);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Table>("customers = [").unwrap_err();
        let error: LedgerError = toml_error.into();
        assert!(matches!(error, LedgerError::ConfigError { .. }));
    }
}
