//! Customer directory
//!
//! This module provides the `CustomerDirectory` struct, the in-memory source
//! of truth for customers and their account balances during a run.
//!
//! The directory is responsible for:
//! - Exact lookup of customers by login code
//! - Listing customers in a deterministic order for output
//! - Replacing an existing customer record (never inserting through update)

use crate::core::traits::CustomerStore;
use crate::types::Customer;
use std::collections::HashMap;

/// Maps customer codes to customers
///
/// Populated once from seed data; afterwards customers are only replaced via
/// `update_customer` or mutated in place through `find_by_code_mut`.
#[derive(Debug, Default)]
pub struct CustomerDirectory {
    /// Map of customer codes to customers
    customers: HashMap<String, Customer>,
}

impl CustomerDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        CustomerDirectory {
            customers: HashMap::new(),
        }
    }

    /// Build a directory from seed customers
    ///
    /// If two customers share a code, the later one wins and a warning is logged.
    pub fn from_customers(customers: impl IntoIterator<Item = Customer>) -> Self {
        let mut directory = CustomerDirectory::new();
        for customer in customers {
            let code = customer.customer_code.clone();
            if directory.customers.insert(code.clone(), customer).is_some() {
                tracing::warn!(customer = %code, "duplicate customer code in seed data, keeping the last one");
            }
        }
        directory
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

impl CustomerStore for CustomerDirectory {
    /// Exact-match lookup; the caller normalizes case
    fn find_by_code(&self, code: &str) -> Option<&Customer> {
        self.customers.get(code)
    }

    fn find_by_code_mut(&mut self, code: &str) -> Option<&mut Customer> {
        self.customers.get_mut(code)
    }

    /// All customers sorted by customer code
    fn all_customers(&self) -> Vec<&Customer> {
        let mut customers: Vec<&Customer> = self.customers.values().collect();
        customers.sort_by(|a, b| a.customer_code.cmp(&b.customer_code));
        customers
    }

    /// Replace the record stored under `customer.customer_code`
    ///
    /// Returns `false` without inserting when the code is unknown.
    fn update_customer(&mut self, customer: Customer) -> bool {
        match self.customers.get_mut(&customer.customer_code) {
            Some(existing) => {
                *existing = customer;
                true
            }
            None => {
                tracing::debug!(customer = %customer.customer_code, "update ignored for unknown customer");
                false
            }
        }
    }
}
