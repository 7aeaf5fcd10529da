//! Fund transfers between two accounts
//!
//! A transfer is a withdrawal from the source followed by a deposit into the
//! destination, each under the accounts' own rules. Both steps run against
//! staged copies and are committed together, so a failure in either step
//! leaves both accounts untouched: funds are never withdrawn without being
//! deposited.

use crate::core::traits::Transactable;
use crate::types::{Account, AccountType, Customer, LedgerError};
use rust_decimal::Decimal;

/// Result of a committed transfer
#[derive(Debug, Clone, PartialEq)]
pub struct TransferReceipt {
    /// Source account number
    pub source: String,
    pub source_type: AccountType,
    /// Destination account number
    pub destination: String,
    pub destination_type: AccountType,
    /// Amount moved (any savings fee or investment penalty is charged on top
    /// and only shows in `source_balance`)
    pub amount: Decimal,
    pub source_balance: Decimal,
    pub destination_balance: Decimal,
}

/// Move `amount` from `source` to `destination`
///
/// # Errors
///
/// Validation errors are returned before anything is touched:
/// - `InvalidAmount` if `amount <= 0`
/// - `MissingDestination` if no destination was selected
/// - `SameAccount` if the destination has the source's account number
///
/// Otherwise the source's withdrawal decline (or an arithmetic overflow on
/// either side) is returned, with both accounts unchanged.
pub fn transfer(
    source: &mut Account,
    destination: Option<&mut Account>,
    amount: Decimal,
) -> Result<TransferReceipt, LedgerError> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::invalid_amount("transfer", amount));
    }

    let destination =
        destination.ok_or_else(|| LedgerError::missing_destination(&source.account_number))?;

    if destination.account_number == source.account_number {
        return Err(LedgerError::same_account(&source.account_number));
    }

    let mut staged_source = source.clone();
    let mut staged_destination = destination.clone();

    let source_balance = staged_source.withdraw(amount)?;
    let destination_balance = staged_destination.deposit(amount)?;

    // Commit both sides together
    *source = staged_source;
    *destination = staged_destination;

    tracing::debug!(
        source = %source.account_number,
        destination = %destination.account_number,
        %amount,
        "transfer committed"
    );

    Ok(TransferReceipt {
        source: source.account_number.clone(),
        source_type: source.account_type(),
        destination: destination.account_number.clone(),
        destination_type: destination.account_type(),
        amount,
        source_balance,
        destination_balance,
    })
}

/// Two disjoint mutable borrows into the same slice
fn pair_mut(accounts: &mut [Account], first: usize, second: usize) -> (&mut Account, &mut Account) {
    debug_assert_ne!(first, second);
    if first < second {
        let (left, right) = accounts.split_at_mut(second);
        (&mut left[first], &mut right[0])
    } else {
        let (left, right) = accounts.split_at_mut(first);
        (&mut right[0], &mut left[second])
    }
}

impl Customer {
    fn account_index(&self, account_number: &str) -> Result<usize, LedgerError> {
        self.accounts
            .iter()
            .position(|account| account.account_number == account_number)
            .ok_or_else(|| LedgerError::account_not_found(&self.customer_code, account_number))
    }

    /// Transfer between two of this customer's accounts, identified by number
    ///
    /// # Errors
    ///
    /// Same as [`transfer`], plus `AccountNotFound` when either number is not
    /// owned by this customer.
    pub fn transfer(
        &mut self,
        source_number: &str,
        destination_number: Option<&str>,
        amount: Decimal,
    ) -> Result<TransferReceipt, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount("transfer", amount));
        }
        let Some(destination_number) = destination_number else {
            return Err(LedgerError::missing_destination(source_number));
        };
        if destination_number == source_number {
            return Err(LedgerError::same_account(source_number));
        }

        let source_index = self.account_index(source_number)?;
        let destination_index = self.account_index(destination_number)?;

        let (source, destination) = pair_mut(&mut self.accounts, source_index, destination_index);
        transfer(source, Some(destination), amount)
    }
}
