use std::path::Path;

use anyhow::Result;
use chrono::{Days, NaiveDate};
use serde_json::{json, Value};

/// Fixture writer producing Open Finance shaped JSON files.
#[derive(Debug, Default)]
pub struct Fixtures {
    accounts: Vec<Value>,
    balances: Vec<Value>,
    transactions: Vec<Value>,
}

impl Fixtures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(mut self, id: &str, nickname: &str, included: bool) -> Self {
        self.accounts.push(json!({
            "AccountId": id,
            "Nickname": nickname,
            "AccountType": "Retail",
            "AccountSubType": "CurrentAccount",
            "Currency": "AED",
            "Status": "Enabled",
            "IncludeInNetWorth": included,
        }));
        self
    }

    pub fn balance(mut self, account: &str, kind: &str, at: &str, amount: &str, indicator: &str) -> Self {
        self.balances.push(json!({
            "AccountId": account,
            "Type": kind,
            "DateTime": at,
            "Amount": {"Amount": amount, "Currency": "AED"},
            "CreditDebitIndicator": indicator,
        }));
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn transaction(
        mut self,
        id: &str,
        account: &str,
        day: NaiveDate,
        amount: &str,
        indicator: &str,
        sub_type: &str,
        status: &str,
    ) -> Self {
        self.transactions.push(json!({
            "TransactionId": id,
            "AccountId": account,
            "TransactionDateTime": format!("{day}T09:15:00Z"),
            "TransactionType": "POS",
            "SubTransactionType": sub_type,
            "CreditDebitIndicator": indicator,
            "Status": status,
            "Amount": {"Amount": amount, "Currency": "AED"},
        }));
        self
    }

    /// Write the three fixture files, each in a different envelope style.
    pub fn write(&self, dir: &Path) -> Result<()> {
        std::fs::write(
            dir.join("accounts.json"),
            serde_json::to_string_pretty(&json!({"Data": {"Account": self.accounts}}))?,
        )?;
        std::fs::write(
            dir.join("balances.json"),
            serde_json::to_string_pretty(&json!({"Balance": self.balances}))?,
        )?;
        std::fs::write(
            dir.join("transactions.json"),
            serde_json::to_string_pretty(&self.transactions)?,
        )?;
        Ok(())
    }
}

pub fn days_before(today: NaiveDate, days: u64) -> NaiveDate {
    today - Days::new(days)
}

/// Two included accounts (checking in credit, card in debit) and one
/// excluded savings account, with history relative to `today`.
pub fn household(today: NaiveDate) -> Fixtures {
    let at = format!("{today}T06:00:00Z");
    Fixtures::new()
        .account("chk", "Checking", true)
        .account("card", "Credit Card", true)
        .account("sav", "Savings", false)
        .balance("chk", "InterimAvailable", &at, "9999.99", "Credit")
        .balance("chk", "ClosingBooked", &at, "5000.00", "Credit")
        .balance("card", "ClosingAvailable", &at, "300.00", "Debit")
        .balance("sav", "ClosingAvailable", &at, "20000", "Credit")
        .transaction("t1", "chk", days_before(today, 2), "200", "Credit", "Deposit", "Booked")
        .transaction("t2", "chk", days_before(today, 1), "50", "Debit", "Purchase", "Booked")
        .transaction("t3", "chk", days_before(today, 1), "75", "Debit", "Purchase", "Pending")
        .transaction("t4", "card", days_before(today, 1), "120", "Debit", "Purchase", "Booked")
        .transaction("t5", "sav", days_before(today, 3), "1000", "Credit", "Deposit", "Booked")
}
