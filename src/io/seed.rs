//! Seed data for the customer directory
//!
//! Customers and their accounts are loaded from TOML:
//!
//! ```toml
//! branch = "Central Branch"
//!
//! [[customers]]
//! code = "JSMITH"
//! password = "1234"
//! first_name = "John"
//! last_name = "Smith"
//! date_of_birth = "1980-01-01"
//! phone_number = "123-456-7890"
//! email = "john@example.com"
//!
//! [[customers.accounts]]
//! type = "savings"
//! number = "S1001"
//! balance = "5500.00"
//! annual_interest_rate = "0.02"
//! ```
//!
//! Money and rates are quoted so they parse as exact decimals. Account types
//! are `savings`, `cheque` (with `overdraft_limit`) and `investment` (with
//! `annual_return_rate` and optional `risk_level` and `details`). An account
//! may override the file-level `branch`.

use crate::core::directory::CustomerDirectory;
use crate::types::account::DEFAULT_INVESTMENT_DETAILS;
use crate::types::{Account, Customer, LedgerError, RiskLevel};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

/// Branch used when a seed file does not name one
pub const DEFAULT_BRANCH: &str = "Central Branch";

const DEMO_SEED: &str = include_str!("demo_seed.toml");

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

/// Top-level seed document
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedFile {
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default)]
    pub customers: Vec<CustomerSeed>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomerSeed {
    pub code: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub accounts: Vec<AccountSeed>,
}

/// One account, tagged by `type`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AccountSeed {
    Savings {
        number: String,
        balance: Decimal,
        annual_interest_rate: Decimal,
        #[serde(default)]
        branch: Option<String>,
    },
    Cheque {
        number: String,
        balance: Decimal,
        overdraft_limit: Decimal,
        #[serde(default)]
        branch: Option<String>,
    },
    Investment {
        number: String,
        balance: Decimal,
        annual_return_rate: Decimal,
        #[serde(default)]
        risk_level: RiskLevel,
        #[serde(default)]
        details: Option<String>,
        #[serde(default)]
        branch: Option<String>,
    },
}

impl AccountSeed {
    pub fn number(&self) -> &str {
        match self {
            AccountSeed::Savings { number, .. }
            | AccountSeed::Cheque { number, .. }
            | AccountSeed::Investment { number, .. } => number,
        }
    }

    fn into_account(self, default_branch: &str) -> Account {
        match self {
            AccountSeed::Savings {
                number,
                balance,
                annual_interest_rate,
                branch,
            } => Account::savings(
                number,
                balance,
                annual_interest_rate,
                branch.unwrap_or_else(|| default_branch.to_string()),
            ),
            AccountSeed::Cheque {
                number,
                balance,
                overdraft_limit,
                branch,
            } => {
                if overdraft_limit < Decimal::ZERO {
                    tracing::warn!(account = %number, %overdraft_limit, "negative overdraft limit clamped to zero");
                }
                Account::cheque(
                    number,
                    balance,
                    overdraft_limit,
                    branch.unwrap_or_else(|| default_branch.to_string()),
                )
            }
            AccountSeed::Investment {
                number,
                balance,
                annual_return_rate,
                risk_level,
                details,
                branch,
            } => {
                let account = Account::investment(
                    number,
                    balance,
                    annual_return_rate,
                    branch.unwrap_or_else(|| default_branch.to_string()),
                );
                account.with_risk_profile(
                    risk_level,
                    details.unwrap_or_else(|| DEFAULT_INVESTMENT_DETAILS.to_string()),
                )
            }
        }
    }
}

impl SeedFile {
    /// Load a seed document from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, LedgerError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LedgerError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => LedgerError::from(e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, LedgerError> {
        Ok(toml::from_str(content)?)
    }

    /// Check codes and account numbers
    ///
    /// Customer codes must be non-empty and unique (compared uppercased).
    /// Account numbers must be non-empty and unique within their customer.
    pub fn validate(&self) -> Result<(), LedgerError> {
        let mut codes = HashSet::new();

        for customer in &self.customers {
            let code = customer.code.trim().to_uppercase();
            if code.is_empty() {
                return Err(LedgerError::config_error("customer code must not be empty"));
            }
            if !codes.insert(code.clone()) {
                return Err(LedgerError::config_error(format!(
                    "duplicate customer code {}",
                    code
                )));
            }

            let mut numbers = HashSet::new();
            for account in &customer.accounts {
                let number = account.number().trim();
                if number.is_empty() {
                    return Err(LedgerError::config_error(format!(
                        "customer {} has an account without a number",
                        code
                    )));
                }
                if !numbers.insert(number) {
                    return Err(LedgerError::config_error(format!(
                        "customer {} has duplicate account number {}",
                        code, number
                    )));
                }
            }
        }

        Ok(())
    }

    /// Validate and build the customer directory
    ///
    /// Customer codes are stored uppercased so they match logins.
    pub fn into_directory(self) -> Result<CustomerDirectory, LedgerError> {
        self.validate()?;

        let branch = self.branch;
        let customers = self.customers.into_iter().map(|seed| {
            let mut customer = Customer::new(
                seed.first_name,
                seed.last_name,
                seed.date_of_birth,
                seed.phone_number,
                seed.email,
                seed.code.trim().to_uppercase(),
                seed.password,
            );
            for account in seed.accounts {
                customer.add_account(account.into_account(&branch));
            }
            customer
        });

        let directory = CustomerDirectory::from_customers(customers);
        tracing::info!(customers = directory.len(), "customer directory seeded");
        Ok(directory)
    }
}

/// Load and validate a seed file into a directory
pub fn load_seed(path: &Path) -> Result<CustomerDirectory, LedgerError> {
    SeedFile::from_file(path)?.into_directory()
}

/// Parse seed TOML into a directory
pub fn parse_seed(content: &str) -> Result<CustomerDirectory, LedgerError> {
    SeedFile::from_toml_str(content)?.into_directory()
}

/// The built-in demo customers
pub fn demo_directory() -> Result<CustomerDirectory, LedgerError> {
    parse_seed(DEMO_SEED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::CustomerStore;
    use crate::types::AccountType;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SMALL_SEED: &str = r#"
branch = "North"

[[customers]]
code = "ghall"
password = "grace"
first_name = "Grace"
last_name = "Hall"
date_of_birth = "1985-09-01"

[[customers.accounts]]
type = "savings"
number = "S9009"
balance = "1200.00"
annual_interest_rate = "0.01"

[[customers.accounts]]
type = "cheque"
number = "C9009"
balance = "620.00"
overdraft_limit = "-150.00"
branch = "South"

[[customers.accounts]]
type = "investment"
number = "I9009"
balance = "900.00"
annual_return_rate = "0.03"
risk_level = "high"
details = "Emerging markets"
"#;

    #[test]
    fn test_parse_seed_builds_accounts() {
        let directory = parse_seed(SMALL_SEED).unwrap();

        let customer = directory.find_by_code("GHALL").unwrap();
        assert_eq!(customer.full_name(), "Grace Hall");
        assert_eq!(customer.date_of_birth, NaiveDate::from_ymd_opt(1985, 9, 1).unwrap());
        assert!(customer.verify_password("grace"));

        let types: Vec<_> = customer.accounts().iter().map(|a| a.account_type()).collect();
        assert_eq!(types, vec![AccountType::Savings, AccountType::Cheque, AccountType::Investment]);

        let savings = customer.account("S9009").unwrap();
        assert_eq!(savings.balance(), Decimal::new(120000, 2));
        assert_eq!(savings.annual_interest_rate(), Some(Decimal::new(1, 2)));
        assert_eq!(savings.branch(), "North");

        let cheque = customer.account("C9009").unwrap();
        assert_eq!(cheque.overdraft_limit(), Some(Decimal::ZERO));
        assert_eq!(cheque.branch(), "South");

        let investment = customer.account("I9009").unwrap();
        assert_eq!(investment.risk_level(), Some(RiskLevel::High));
        assert_eq!(investment.investment_details(), Some("Emerging markets"));
    }

    #[test]
    fn test_demo_directory_has_ten_customers() {
        let directory = demo_directory().unwrap();

        assert_eq!(directory.len(), 10);
        let jsmith = directory.find_by_code("JSMITH").unwrap();
        assert_eq!(jsmith.accounts().len(), 3);
        assert_eq!(jsmith.account("C1001").unwrap().balance(), Decimal::new(125075, 2));
        assert_eq!(jsmith.account("C1001").unwrap().overdraft_limit(), Some(Decimal::new(500, 0)));
        assert_eq!(jsmith.account("I1001").unwrap().risk_level(), Some(RiskLevel::Medium));
        assert!(directory
            .all_customers()
            .iter()
            .flat_map(|c| c.accounts())
            .all(|a| a.branch() == DEFAULT_BRANCH));
    }

    #[test]
    fn test_load_seed_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SMALL_SEED.as_bytes()).unwrap();
        file.flush().unwrap();

        let directory = load_seed(file.path()).unwrap();

        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_load_seed_missing_file() {
        let result = load_seed(Path::new("no-such-seed.toml"));
        assert!(matches!(result, Err(LedgerError::FileNotFound { .. })));
    }

    #[test]
    fn test_branch_defaults_when_absent() {
        let seed = r#"
[[customers]]
code = "X"
password = "p"
first_name = "A"
last_name = "B"
date_of_birth = "2000-01-01"

[[customers.accounts]]
type = "cheque"
number = "C1"
balance = "0"
overdraft_limit = "0"
"#;
        let directory = parse_seed(seed).unwrap();
        let account = directory.find_by_code("X").unwrap().account("C1").unwrap();
        assert_eq!(account.branch(), DEFAULT_BRANCH);
    }

    #[rstest]
    #[case::duplicate_customer(
        "[[customers]]\ncode = \"a\"\npassword = \"p\"\nfirst_name = \"A\"\nlast_name = \"B\"\ndate_of_birth = \"2000-01-01\"\n\
         [[customers]]\ncode = \"A\"\npassword = \"p\"\nfirst_name = \"A\"\nlast_name = \"B\"\ndate_of_birth = \"2000-01-01\"\n",
        "duplicate customer code A"
    )]
    #[case::empty_code(
        "[[customers]]\ncode = \" \"\npassword = \"p\"\nfirst_name = \"A\"\nlast_name = \"B\"\ndate_of_birth = \"2000-01-01\"\n",
        "must not be empty"
    )]
    #[case::duplicate_account(
        "[[customers]]\ncode = \"A\"\npassword = \"p\"\nfirst_name = \"A\"\nlast_name = \"B\"\ndate_of_birth = \"2000-01-01\"\n\
         [[customers.accounts]]\ntype = \"savings\"\nnumber = \"S1\"\nbalance = \"1\"\nannual_interest_rate = \"0\"\n\
         [[customers.accounts]]\ntype = \"cheque\"\nnumber = \"S1\"\nbalance = \"1\"\noverdraft_limit = \"0\"\n",
        "duplicate account number S1"
    )]
    fn test_validation_errors(#[case] seed: &str, #[case] expected: &str) {
        match parse_seed(seed) {
            Err(LedgerError::ConfigError { message }) => assert!(message.contains(expected), "{}", message),
            other => panic!("expected config error, got {:?}", other.map(|d| d.len())),
        }
    }

    #[rstest]
    #[case::unknown_account_type(
        "[[customers]]\ncode = \"A\"\npassword = \"p\"\nfirst_name = \"A\"\nlast_name = \"B\"\ndate_of_birth = \"2000-01-01\"\n\
         [[customers.accounts]]\ntype = \"crypto\"\nnumber = \"X1\"\nbalance = \"1\"\n"
    )]
    #[case::bad_date(
        "[[customers]]\ncode = \"A\"\npassword = \"p\"\nfirst_name = \"A\"\nlast_name = \"B\"\ndate_of_birth = \"01/01/1980\"\n"
    )]
    #[case::missing_rate(
        "[[customers]]\ncode = \"A\"\npassword = \"p\"\nfirst_name = \"A\"\nlast_name = \"B\"\ndate_of_birth = \"2000-01-01\"\n\
         [[customers.accounts]]\ntype = \"savings\"\nnumber = \"S1\"\nbalance = \"1\"\n"
    )]
    fn test_malformed_seed_is_config_error(#[case] seed: &str) {
        assert!(matches!(parse_seed(seed), Err(LedgerError::ConfigError { .. })));
    }
}
