//! Account-related types for the account ledger
//!
//! This module defines the Account structure and the closed set of account
//! variants. Balance-changing behaviour lives in `core::account_ops`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default portfolio description shown for investment accounts
pub const DEFAULT_INVESTMENT_DETAILS: &str =
    "Diversified portfolio of 60% technology ETFs and 40% government bonds.";

/// Discriminant of the account variants
///
/// Used for typed lookups on a customer and to route journal entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Savings,
    Cheque,
    Investment,
}

impl AccountType {
    /// Name of the journal file collecting entries for this account type
    pub fn journal_file_name(&self) -> &'static str {
        match self {
            AccountType::Savings => "savings.txt",
            AccountType::Cheque => "cheque.txt",
            AccountType::Investment => "investment.txt",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccountType::Savings => "Savings",
            AccountType::Cheque => "Cheque",
            AccountType::Investment => "Investment",
        };
        f.write_str(name)
    }
}

/// Risk classification of an investment account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        f.write_str(name)
    }
}

/// Variant-specific data of an account
///
/// Each variant carries the parameters its withdrawal and accrual policies need.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountKind {
    /// Interest-bearing account with a minimum balance fee
    Savings {
        /// Annual interest rate as a fraction (0.02 for 2%)
        annual_interest_rate: Decimal,
    },

    /// Transaction account that may go negative down to its overdraft limit
    Cheque {
        /// Maximum amount the balance may go below zero (never negative)
        overdraft_limit: Decimal,
    },

    /// Account with an expected return and a penalty on every withdrawal
    Investment {
        /// Expected annual return rate as a fraction
        annual_return_rate: Decimal,
        risk_level: RiskLevel,
        /// Free-text portfolio description
        details: String,
    },
}

/// A customer account
///
/// `account_number` and `branch` are fixed at construction. Outside the crate
/// the balance is read-only; it only changes through the `Transactable`
/// operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub(crate) account_number: String,
    pub(crate) branch: String,
    pub(crate) balance: Decimal,
    pub(crate) kind: AccountKind,
}

impl Account {
    /// Create a savings account
    ///
    /// # Arguments
    ///
    /// * `account_number` - Unique account identifier
    /// * `balance` - Starting balance
    /// * `annual_interest_rate` - Annual rate as a fraction (0.02 for 2%)
    /// * `branch` - Branch holding the account
    pub fn savings(
        account_number: impl Into<String>,
        balance: Decimal,
        annual_interest_rate: Decimal,
        branch: impl Into<String>,
    ) -> Self {
        Account {
            account_number: account_number.into(),
            branch: branch.into(),
            balance,
            kind: AccountKind::Savings {
                annual_interest_rate,
            },
        }
    }

    /// Create a cheque account
    ///
    /// A negative overdraft limit is clamped to zero.
    pub fn cheque(
        account_number: impl Into<String>,
        balance: Decimal,
        overdraft_limit: Decimal,
        branch: impl Into<String>,
    ) -> Self {
        Account {
            account_number: account_number.into(),
            branch: branch.into(),
            balance,
            kind: AccountKind::Cheque {
                overdraft_limit: overdraft_limit.max(Decimal::ZERO),
            },
        }
    }

    /// Create an investment account with medium risk and the default portfolio description
    pub fn investment(
        account_number: impl Into<String>,
        balance: Decimal,
        annual_return_rate: Decimal,
        branch: impl Into<String>,
    ) -> Self {
        Account {
            account_number: account_number.into(),
            branch: branch.into(),
            balance,
            kind: AccountKind::Investment {
                annual_return_rate,
                risk_level: RiskLevel::default(),
                details: DEFAULT_INVESTMENT_DETAILS.to_string(),
            },
        }
    }

    /// Replace the risk profile of an investment account
    ///
    /// Has no effect on other account types.
    pub fn with_risk_profile(mut self, level: RiskLevel, description: impl Into<String>) -> Self {
        if let AccountKind::Investment {
            risk_level,
            details,
            ..
        } = &mut self.kind
        {
            *risk_level = level;
            *details = description.into();
        }
        self
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn account_type(&self) -> AccountType {
        match self.kind {
            AccountKind::Savings { .. } => AccountType::Savings,
            AccountKind::Cheque { .. } => AccountType::Cheque,
            AccountKind::Investment { .. } => AccountType::Investment,
        }
    }

    /// Overdraft limit, for cheque accounts only
    pub fn overdraft_limit(&self) -> Option<Decimal> {
        match self.kind {
            AccountKind::Cheque { overdraft_limit } => Some(overdraft_limit),
            _ => None,
        }
    }

    /// Annual interest rate, for savings accounts only
    pub fn annual_interest_rate(&self) -> Option<Decimal> {
        match self.kind {
            AccountKind::Savings {
                annual_interest_rate,
            } => Some(annual_interest_rate),
            _ => None,
        }
    }

    /// Expected annual return rate, for investment accounts only
    pub fn expected_annual_return(&self) -> Option<Decimal> {
        match self.kind {
            AccountKind::Investment {
                annual_return_rate, ..
            } => Some(annual_return_rate),
            _ => None,
        }
    }

    pub fn risk_level(&self) -> Option<RiskLevel> {
        match self.kind {
            AccountKind::Investment { risk_level, .. } => Some(risk_level),
            _ => None,
        }
    }

    pub fn investment_details(&self) -> Option<&str> {
        match &self.kind {
            AccountKind::Investment { details, .. } => Some(details),
            _ => None,
        }
    }
}
