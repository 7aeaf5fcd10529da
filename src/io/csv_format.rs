//! CSV format handling for operation records and balance output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Balance output serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::journal::money;
use crate::types::{Customer, LedgerError, OperationRecord, OperationType};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Header of the balances output
pub const BALANCES_HEADER: [&str; 5] = ["customer", "account", "type", "branch", "balance"];

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: type, customer, account, amount, destination.
/// `amount` is empty for interest and `destination` is only used by transfers.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub op_type: String,
    pub customer: String,
    pub account: String,
    pub amount: Option<String>,
    pub destination: Option<String>,
}

/// Convert a CsvRecord to an OperationRecord
///
/// This function:
/// - Parses the operation type (case-insensitive)
/// - Parses the amount into a Decimal (if present)
/// - Validates that amounts are present for deposit, withdrawal and transfer
///
/// A transfer without a destination is passed through; the engine rejects it.
///
/// # Returns
///
/// * `Ok(OperationRecord)` - Successfully converted record
/// * `Err(String)` - Description of the conversion failure
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<OperationRecord, String> {
    let op_type = match csv_record.op_type.to_lowercase().as_str() {
        "deposit" => OperationType::Deposit,
        "withdrawal" => OperationType::Withdrawal,
        "transfer" => OperationType::Transfer,
        "interest" => OperationType::Interest,
        _ => {
            return Err(format!(
                "Invalid operation type: '{}' for account {}",
                csv_record.op_type, csv_record.account
            ))
        }
    };

    let amount = match csv_record.amount.as_deref().map(str::trim) {
        Some(amount_str) if !amount_str.is_empty() => match Decimal::from_str(amount_str) {
            Ok(decimal) => Some(decimal),
            Err(_) => {
                return Err(format!(
                    "Invalid amount '{}' for account {}",
                    amount_str, csv_record.account
                ))
            }
        },
        _ => None,
    };

    match op_type {
        OperationType::Deposit | OperationType::Withdrawal | OperationType::Transfer => {
            if amount.is_none() {
                return Err(format!(
                    "{:?} on account {} for customer {} requires an amount",
                    op_type, csv_record.account, csv_record.customer
                ));
            }
        }
        // Interest carries no amount; any value given is ignored
        OperationType::Interest => {}
    }

    let destination = csv_record
        .destination
        .map(|destination| destination.trim().to_string())
        .filter(|destination| !destination.is_empty());

    Ok(OperationRecord {
        op_type,
        customer: csv_record.customer,
        account: csv_record.account,
        amount: if op_type == OperationType::Interest { None } else { amount },
        destination,
    })
}

/// Write every account balance to CSV
///
/// Writes one row per account with columns: customer, account, type, branch, balance.
/// Customers are sorted by code; accounts keep their insertion order.
/// Balances are rendered with two decimals, rounding half away from zero.
pub fn write_balances_csv(customers: &[&Customer], output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(BALANCES_HEADER)?;

    let mut sorted_customers = customers.to_vec();
    sorted_customers.sort_by(|a, b| a.customer_code().cmp(b.customer_code()));

    for customer in sorted_customers {
        for account in customer.accounts() {
            let account_type = account.account_type().to_string();
            let balance = money(account.balance());
            writer.write_record([
                customer.customer_code(),
                account.account_number(),
                account_type.as_str(),
                account.branch(),
                balance.as_str(),
            ])?;
        }
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Account;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn csv_record(op_type: &str, amount: Option<&str>, destination: Option<&str>) -> CsvRecord {
        CsvRecord {
            op_type: op_type.to_string(),
            customer: "jsmith".to_string(),
            account: "S1001".to_string(),
            amount: amount.map(|s| s.to_string()),
            destination: destination.map(|s| s.to_string()),
        }
    }

    fn customer(code: &str, accounts: Vec<Account>) -> Customer {
        let mut customer = Customer::new(
            "Test",
            "Customer",
            NaiveDate::from_ymd_opt(1990, 4, 4).unwrap(),
            "555-000-0000",
            "test@example.com",
            code,
            "secret",
        );
        for account in accounts {
            customer.add_account(account);
        }
        customer
    }

    #[rstest]
    #[case("deposit", OperationType::Deposit)]
    #[case("withdrawal", OperationType::Withdrawal)]
    #[case("transfer", OperationType::Transfer)]
    #[case("DEPOSIT", OperationType::Deposit)] // case insensitive
    #[case("Withdrawal", OperationType::Withdrawal)]
    fn test_convert_csv_record_valid_with_amount(
        #[case] op_type: &str,
        #[case] expected_type: OperationType,
    ) {
        let record = convert_csv_record(csv_record(op_type, Some("100.0"), Some("C1001"))).unwrap();

        assert_eq!(record.op_type, expected_type);
        assert_eq!(record.customer, "jsmith");
        assert_eq!(record.account, "S1001");
        assert_eq!(record.amount, Some(Decimal::new(1000, 1)));
        assert_eq!(record.destination.as_deref(), Some("C1001"));
    }

    #[rstest]
    #[case::no_amount(None)]
    #[case::ignored_amount(Some("25.00"))]
    fn test_convert_csv_record_interest_has_no_amount(#[case] amount: Option<&str>) {
        let record = convert_csv_record(csv_record("interest", amount, None)).unwrap();

        assert_eq!(record.op_type, OperationType::Interest);
        assert_eq!(record.amount, None);
    }

    #[rstest]
    #[case::invalid_type("refund", Some("100.0"), "Invalid operation type")]
    #[case::deposit_missing_amount("deposit", None, "requires an amount")]
    #[case::withdrawal_missing_amount("withdrawal", None, "requires an amount")]
    #[case::transfer_missing_amount("transfer", None, "requires an amount")]
    #[case::invalid_amount("deposit", Some("ten dollars"), "Invalid amount")]
    #[case::empty_amount("deposit", Some(""), "requires an amount")]
    #[case::whitespace_amount("deposit", Some("  "), "requires an amount")]
    fn test_convert_csv_record_errors(
        #[case] op_type: &str,
        #[case] amount: Option<&str>,
        #[case] expected_error: &str,
    ) {
        let result = convert_csv_record(csv_record(op_type, amount, None));
        assert!(result.unwrap_err().contains(expected_error));
    }

    #[rstest]
    #[case::absent(None)]
    #[case::empty(Some(""))]
    #[case::blank(Some("   "))]
    fn test_convert_csv_record_blank_destination_is_none(#[case] destination: Option<&str>) {
        let record = convert_csv_record(csv_record("transfer", Some("5"), destination)).unwrap();
        assert_eq!(record.destination, None);
    }

    #[rstest]
    #[case("  100.0  ", Decimal::new(1000, 1))]
    #[case("-5", Decimal::new(-5, 0))] // sign is left for the engine to reject
    #[case("100.1234", Decimal::new(1001234, 4))]
    fn test_convert_csv_record_amount_parsing(#[case] amount_str: &str, #[case] expected: Decimal) {
        let record = convert_csv_record(csv_record("deposit", Some(amount_str), None)).unwrap();
        assert_eq!(record.amount, Some(expected));
    }

    #[test]
    fn test_write_balances_csv_sorted_by_customer_then_insertion_order() {
        let jdoe = customer(
            "JDOE",
            vec![
                Account::savings("S2002", Decimal::new(150, 0), Decimal::new(1, 2), "Central Branch"),
                Account::cheque("C2002", Decimal::new(5000, 0), Decimal::new(200, 0), "Central Branch"),
            ],
        );
        let ajohn = customer(
            "AJOHN",
            vec![
                Account::investment("I3003", Decimal::new(50000, 0), Decimal::new(45, 3), "North"),
                Account::savings("S3003", Decimal::new(10000, 0), Decimal::new(15, 3), "North"),
            ],
        );

        let mut output = Vec::new();
        write_balances_csv(&[&jdoe, &ajohn], &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "customer,account,type,branch,balance\n\
             AJOHN,I3003,Investment,North,50000.00\n\
             AJOHN,S3003,Savings,North,10000.00\n\
             JDOE,S2002,Savings,Central Branch,150.00\n\
             JDOE,C2002,Cheque,Central Branch,5000.00\n"
        );
    }

    #[rstest]
    #[case::rounds_half_away_from_zero(Decimal::new(5509165, 3), "5509.17")]
    #[case::negative_overdraft(Decimal::new(-400, 0), "-400.00")]
    #[case::zero(Decimal::ZERO, "0.00")]
    fn test_write_balances_csv_rounding(#[case] balance: Decimal, #[case] expected: &str) {
        let holder = customer(
            "JSMITH",
            vec![Account::cheque("C1001", balance, Decimal::new(500, 0), "Central Branch")],
        );

        let mut output = Vec::new();
        write_balances_csv(&[&holder], &mut output).unwrap();

        let expected_output = format!(
            "customer,account,type,branch,balance\nJSMITH,C1001,Cheque,Central Branch,{}\n",
            expected
        );
        assert_eq!(String::from_utf8(output).unwrap(), expected_output);
    }

    #[test]
    fn test_write_balances_csv_empty() {
        let mut output = Vec::new();
        write_balances_csv(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "customer,account,type,branch,balance\n");
    }
}
