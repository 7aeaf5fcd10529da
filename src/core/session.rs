//! Login sessions
//!
//! A `Session` is an explicit value identifying the active customer. Callers
//! pass it to whatever needs the current customer instead of reading a
//! process-wide "logged in" slot.

use crate::core::traits::CustomerStore;
use crate::types::{Customer, LedgerError};

/// The customer a caller is acting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    customer_code: String,
}

impl Session {
    /// Authenticate a customer by code and password
    ///
    /// The code is uppercased before lookup. Passwords are compared as-is.
    ///
    /// # Errors
    ///
    /// - `CustomerNotFound` if no customer has the code
    /// - `InvalidCredentials` if the password does not match
    pub fn login<S: CustomerStore>(
        store: &S,
        customer_code: &str,
        password: &str,
    ) -> Result<Session, LedgerError> {
        let code = customer_code.trim().to_uppercase();

        let customer = store
            .find_by_code(&code)
            .ok_or_else(|| LedgerError::customer_not_found(&code))?;

        if !customer.verify_password(password) {
            tracing::warn!(customer = %code, "login rejected: invalid password");
            return Err(LedgerError::invalid_credentials(&code));
        }

        tracing::info!(customer = %code, "login succeeded");
        Ok(Session {
            customer_code: code,
        })
    }

    pub fn customer_code(&self) -> &str {
        &self.customer_code
    }

    /// The session's customer, if still present in the store
    pub fn customer<'a, S: CustomerStore>(&self, store: &'a S) -> Option<&'a Customer> {
        store.find_by_code(&self.customer_code)
    }

    pub fn customer_mut<'a, S: CustomerStore>(&self, store: &'a mut S) -> Option<&'a mut Customer> {
        store.find_by_code_mut(&self.customer_code)
    }
}
