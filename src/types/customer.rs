//! Customer type for the account ledger
//!
//! A customer exclusively owns an ordered list of accounts. Transfers between
//! a customer's own accounts are in `core::transfer`.

use super::account::{Account, AccountType};
use super::error::LedgerError;
use chrono::NaiveDate;

/// A bank customer and the accounts they own
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub email: String,
    /// Unique login key; directory entries are keyed by it
    pub(crate) customer_code: String,
    pub(crate) password: String,
    pub(crate) accounts: Vec<Account>,
}

impl Customer {
    /// Create a customer with no accounts
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: NaiveDate,
        phone_number: impl Into<String>,
        email: impl Into<String>,
        customer_code: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Customer {
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth,
            phone_number: phone_number.into(),
            email: email.into(),
            customer_code: customer_code.into(),
            password: password.into(),
            accounts: Vec::new(),
        }
    }

    pub fn customer_code(&self) -> &str {
        &self.customer_code
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Append an account
    ///
    /// No deduplication and no limit on accounts of the same type.
    pub fn add_account(&mut self, account: Account) {
        tracing::debug!(
            customer = %self.customer_code,
            account = %account.account_number,
            "account added"
        );
        self.accounts.push(account);
    }

    /// All accounts in insertion order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// First account of the requested type, in insertion order
    ///
    /// Later accounts of the same type are never returned here; use
    /// [`Customer::accounts_by_type`] to see all of them.
    pub fn account_by_type(&self, account_type: AccountType) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.account_type() == account_type)
    }

    pub fn account_by_type_mut(&mut self, account_type: AccountType) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.account_type() == account_type)
    }

    /// Every account of the requested type, in insertion order
    pub fn accounts_by_type(&self, account_type: AccountType) -> impl Iterator<Item = &Account> {
        self.accounts
            .iter()
            .filter(move |account| account.account_type() == account_type)
    }

    pub fn account(&self, account_number: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.account_number == account_number)
    }

    pub fn account_mut(&mut self, account_number: &str) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.account_number == account_number)
    }

    /// Accounts eligible to receive a transfer from `source_number`
    ///
    /// Every owned account except the source itself.
    pub fn transfer_destinations<'a>(
        &'a self,
        source_number: &'a str,
    ) -> impl Iterator<Item = &'a Account> + 'a {
        self.accounts
            .iter()
            .filter(move |account| account.account_number != source_number)
    }

    /// Plain equality check against the stored password
    pub fn verify_password(&self, password: &str) -> bool {
        self.password == password
    }

    /// Change the password after checking the current one
    ///
    /// # Errors
    ///
    /// - `InvalidCredentials` if `current` is wrong
    /// - `PasswordMismatch` if `new` and `confirm` differ
    pub fn change_password(
        &mut self,
        current: &str,
        new: &str,
        confirm: &str,
    ) -> Result<(), LedgerError> {
        if !self.verify_password(current) {
            return Err(LedgerError::invalid_credentials(&self.customer_code));
        }
        if new != confirm {
            return Err(LedgerError::password_mismatch(&self.customer_code));
        }

        self.password = new.to_string();
        tracing::info!(customer = %self.customer_code, "password changed");
        Ok(())
    }

    /// Update contact details; `None` keeps the current value
    pub fn update_contact(&mut self, email: Option<&str>, phone_number: Option<&str>) {
        if let Some(email) = email {
            self.email = email.to_string();
        }
        if let Some(phone_number) = phone_number {
            self.phone_number = phone_number.to_string();
        }
    }
}
