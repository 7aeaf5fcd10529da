//! Journal entry types for the account ledger
//!
//! A journal entry describes one completed balance change in the plain-text
//! line format appended to the per-account-type journal files. Entries are
//! produced by the engine and written by `io::journal`.

use super::account::AccountType;
use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Timestamp format used at the start of every journal line
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// What happened to the account
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    Deposit,
    Withdrawal,
    Interest,

    /// Funds left this account for `counterparty`
    TransferOut {
        counterparty: String,
        counterparty_type: AccountType,
    },

    /// Funds arrived from `counterparty`
    TransferIn {
        counterparty: String,
        counterparty_type: AccountType,
    },
}

/// One line of an account-type journal
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub timestamp: NaiveDateTime,
    pub kind: EntryKind,
    pub account_type: AccountType,
    pub account_number: String,
    /// Amount requested (for interest, the amount accrued)
    pub amount: Decimal,
    /// Balance after the operation, including any fee or penalty
    pub new_balance: Decimal,
}

/// Two-decimal rendering, rounding half away from zero
pub fn money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return "0.00".to_string();
    }
    format!("{:.2}", rounded)
}

/// Two-decimal rendering with thousands separators ("12,345.67")
pub fn grouped_money(amount: Decimal) -> String {
    let plain = money(amount);
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", sign, grouped, fraction)
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timestamp = self.timestamp.format(TIMESTAMP_FORMAT);
        let tail = format!(
            "Amount: ${} | New Balance: ${}",
            money(self.amount),
            grouped_money(self.new_balance)
        );

        match &self.kind {
            EntryKind::TransferOut {
                counterparty,
                counterparty_type,
            } => write!(
                f,
                "[{}] TRANSFER OUT | Type: {} | To Account: {} ({}) | {}",
                timestamp, self.account_type, counterparty, counterparty_type, tail
            ),
            EntryKind::TransferIn {
                counterparty,
                counterparty_type,
            } => write!(
                f,
                "[{}] TRANSFER IN | Type: {} | From Account: {} ({}) | {}",
                timestamp, self.account_type, counterparty, counterparty_type, tail
            ),
            simple => {
                let label = match simple {
                    EntryKind::Deposit => "DEPOSIT",
                    EntryKind::Withdrawal => "WITHDRAWAL",
                    _ => "INTEREST",
                };
                write!(
                    f,
                    "[{}] {} | Account Type: {} | Account: {} | {}",
                    timestamp, label, self.account_type, self.account_number, tail
                )
            }
        }
    }
}
