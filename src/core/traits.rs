//! Core traits for balance operations and customer storage
//!
//! These are the seams between the ledger core and its callers: the engine
//! works against `CustomerStore`, and every account variant is driven through
//! `Transactable`.

use crate::types::{Customer, LedgerError};
use rust_decimal::Decimal;

/// Balance operations shared by every account variant
///
/// `deposit` behaves identically for all variants; `withdraw` and
/// `apply_interest` dispatch on the variant's policy.
pub trait Transactable {
    /// Credit a positive amount and return the new balance
    fn deposit(&mut self, amount: Decimal) -> Result<Decimal, LedgerError>;

    /// Debit a positive amount under the variant's policy and return the new balance
    ///
    /// A declined withdrawal leaves the balance unchanged.
    fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, LedgerError>;

    /// Apply one month of accrual and return the amount accrued
    fn apply_interest(&mut self) -> Decimal;

    /// Current balance
    fn balance(&self) -> Decimal;
}

/// Trait for looking up and updating customers by login code
pub trait CustomerStore {
    /// Exact, case-sensitive lookup
    fn find_by_code(&self, code: &str) -> Option<&Customer>;

    /// Exact, case-sensitive lookup for in-place balance mutation
    fn find_by_code_mut(&mut self, code: &str) -> Option<&mut Customer>;

    /// All customers, sorted by customer code
    fn all_customers(&self) -> Vec<&Customer>;

    /// Replace an existing customer record; never inserts
    fn update_customer(&mut self, customer: Customer) -> bool;
}
