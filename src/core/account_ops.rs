//! Balance operations for every account variant
//!
//! This module implements `Transactable` for `Account`. Deposits are shared;
//! withdrawals and accruals dispatch on `AccountKind`:
//!
//! - **Savings**: withdraw up to the balance; a result below 100.00 incurs a
//!   flat 10.00 fee, which may take the balance negative
//! - **Cheque**: withdraw down to `-overdraft_limit`; no interest
//! - **Investment**: every withdrawal is surcharged 5% of the amount, and the
//!   balance must cover amount plus surcharge
//!
//! Every operation computes the new balance with checked arithmetic first and
//! assigns it only once all checks have passed, so an `Err` never leaves a
//! partially updated account behind.

use crate::core::traits::Transactable;
use crate::types::{Account, AccountKind, LedgerError};
use rust_decimal::Decimal;

/// Savings balance below which a withdrawal incurs the minimum balance fee
pub const MIN_BALANCE_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// Flat fee charged when a savings withdrawal leaves the balance below the threshold
pub const MIN_BALANCE_FEE: Decimal = Decimal::TEN;

/// Surcharge on investment withdrawals, as a fraction of the amount (5%)
pub const WITHDRAWAL_PENALTY_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

impl Account {
    fn savings_withdrawal(&self, amount: Decimal) -> Result<Decimal, LedgerError> {
        if self.balance < amount {
            return Err(LedgerError::insufficient_funds(
                &self.account_number,
                self.balance,
                amount,
            ));
        }

        let remaining = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("withdrawal", &self.account_number))?;

        if remaining >= MIN_BALANCE_THRESHOLD {
            return Ok(remaining);
        }

        // Not re-validated: the fee may push the balance below zero
        tracing::debug!(
            account = %self.account_number,
            fee = %MIN_BALANCE_FEE,
            threshold = %MIN_BALANCE_THRESHOLD,
            "minimum balance fee applied"
        );
        remaining
            .checked_sub(MIN_BALANCE_FEE)
            .ok_or_else(|| LedgerError::arithmetic_overflow("withdrawal", &self.account_number))
    }

    fn cheque_withdrawal(
        &self,
        amount: Decimal,
        overdraft_limit: Decimal,
    ) -> Result<Decimal, LedgerError> {
        let remaining = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("withdrawal", &self.account_number))?;

        if remaining < -overdraft_limit {
            return Err(LedgerError::overdraft_limit_exceeded(
                &self.account_number,
                self.balance,
                amount,
                overdraft_limit,
            ));
        }

        Ok(remaining)
    }

    fn investment_withdrawal(&self, amount: Decimal) -> Result<Decimal, LedgerError> {
        // Two distinct checks: the amount alone, then amount plus penalty
        if self.balance < amount {
            return Err(LedgerError::insufficient_funds(
                &self.account_number,
                self.balance,
                amount,
            ));
        }

        let overflow = || LedgerError::arithmetic_overflow("withdrawal", &self.account_number);
        let penalty = amount
            .checked_mul(WITHDRAWAL_PENALTY_RATE)
            .ok_or_else(overflow)?;
        let total = amount.checked_add(penalty).ok_or_else(overflow)?;

        if self.balance < total {
            return Err(LedgerError::penalty_not_covered(
                &self.account_number,
                self.balance,
                amount,
                penalty,
            ));
        }

        tracing::debug!(account = %self.account_number, %penalty, "withdrawal penalty applied");
        self.balance.checked_sub(total).ok_or_else(overflow)
    }

    fn monthly_accrual(&self, annual_rate: Decimal) -> Option<(Decimal, Decimal)> {
        let accrual = annual_rate
            .checked_div(MONTHS_PER_YEAR)
            .and_then(|monthly| self.balance.checked_mul(monthly))?;
        let new_balance = self.balance.checked_add(accrual)?;
        Some((accrual, new_balance))
    }
}

impl Transactable for Account {
    /// Deposit funds into the account
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0` (no mutation)
    /// - `ArithmeticOverflow` if the balance cannot hold the result
    fn deposit(&mut self, amount: Decimal) -> Result<Decimal, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount("deposit", amount));
        }

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", &self.account_number))?;

        self.balance = new_balance;
        tracing::debug!(account = %self.account_number, %amount, balance = %new_balance, "deposited");

        Ok(new_balance)
    }

    /// Withdraw funds under the account variant's policy
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0`, checked before any balance rule
    /// - `InsufficientFunds` for savings, or investment when the balance is below the amount
    /// - `OverdraftLimitExceeded` for cheque accounts
    /// - `PenaltyNotCovered` for investment when the surcharge is not covered
    /// - `ArithmeticOverflow` if the result cannot be represented
    fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount("withdrawal", amount));
        }

        let outcome = match self.kind {
            AccountKind::Savings { .. } => self.savings_withdrawal(amount),
            AccountKind::Cheque { overdraft_limit } => {
                self.cheque_withdrawal(amount, overdraft_limit)
            }
            AccountKind::Investment { .. } => self.investment_withdrawal(amount),
        };

        match outcome {
            Ok(new_balance) => {
                self.balance = new_balance;
                tracing::debug!(account = %self.account_number, %amount, balance = %new_balance, "withdrew");
                Ok(new_balance)
            }
            Err(e) => {
                tracing::debug!(account = %self.account_number, %amount, "withdrawal declined: {}", e);
                Err(e)
            }
        }
    }

    /// Apply one month of interest (savings) or expected return (investment)
    ///
    /// Cheque accounts accrue nothing. If the accrual overflows, the balance
    /// is left unchanged and zero is returned.
    fn apply_interest(&mut self) -> Decimal {
        let annual_rate = match self.kind {
            AccountKind::Savings {
                annual_interest_rate,
            } => annual_interest_rate,
            AccountKind::Investment {
                annual_return_rate, ..
            } => annual_return_rate,
            AccountKind::Cheque { .. } => {
                tracing::debug!(account = %self.account_number, "no interest for cheque account");
                return Decimal::ZERO;
            }
        };

        match self.monthly_accrual(annual_rate) {
            Some((accrual, new_balance)) => {
                self.balance = new_balance;
                tracing::debug!(account = %self.account_number, %accrual, balance = %new_balance, "monthly accrual applied");
                accrual
            }
            None => {
                tracing::warn!(account = %self.account_number, "accrual overflowed, balance left unchanged");
                Decimal::ZERO
            }
        }
    }

    fn balance(&self) -> Decimal {
        Account::balance(self)
    }
}
