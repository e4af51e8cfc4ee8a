use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::{parse_magnitude, parse_timestamp};
use super::{AccountId, CreditDebitIndicator, ParseError, RawAmount};

/// Kind of reported balance, as defined by the Open Finance account-information API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BalanceType {
    ClosingAvailable,
    ClosingBooked,
    ClosingCleared,
    InterimAvailable,
    ForwardAvailable,
    OpeningAvailable,
    OpeningBooked,
    OpeningCleared,
    Expected,
    PreviouslyClosedBooked,
    Information,
    /// A type this crate does not rank. Only used by the resolver's fallback.
    Other(String),
}

impl BalanceType {
    pub fn as_str(&self) -> &str {
        match self {
            BalanceType::ClosingAvailable => "ClosingAvailable",
            BalanceType::ClosingBooked => "ClosingBooked",
            BalanceType::ClosingCleared => "ClosingCleared",
            BalanceType::InterimAvailable => "InterimAvailable",
            BalanceType::ForwardAvailable => "ForwardAvailable",
            BalanceType::OpeningAvailable => "OpeningAvailable",
            BalanceType::OpeningBooked => "OpeningBooked",
            BalanceType::OpeningCleared => "OpeningCleared",
            BalanceType::Expected => "Expected",
            BalanceType::PreviouslyClosedBooked => "PreviouslyClosedBooked",
            BalanceType::Information => "Information",
            BalanceType::Other(raw) => raw,
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "ClosingAvailable" => BalanceType::ClosingAvailable,
            "ClosingBooked" => BalanceType::ClosingBooked,
            "ClosingCleared" => BalanceType::ClosingCleared,
            "InterimAvailable" => BalanceType::InterimAvailable,
            "ForwardAvailable" => BalanceType::ForwardAvailable,
            "OpeningAvailable" => BalanceType::OpeningAvailable,
            "OpeningBooked" => BalanceType::OpeningBooked,
            "OpeningCleared" => BalanceType::OpeningCleared,
            "Expected" => BalanceType::Expected,
            "PreviouslyClosedBooked" => BalanceType::PreviouslyClosedBooked,
            "Information" => BalanceType::Information,
            other => BalanceType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for BalanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BalanceType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BalanceType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(BalanceType::parse(&raw))
    }
}

/// One balance record exactly as it appears in a balances fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBalance {
    #[serde(rename = "AccountId")]
    pub account_id: String,
    #[serde(rename = "Type")]
    pub balance_type: String,
    #[serde(rename = "DateTime")]
    pub date_time: String,
    #[serde(rename = "Amount")]
    pub amount: RawAmount,
    #[serde(rename = "CreditDebitIndicator")]
    pub credit_debit_indicator: String,
}

/// A validated balance fact for an account at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    pub account_id: AccountId,
    pub balance_type: BalanceType,
    pub date_time: DateTime<Utc>,
    /// Unsigned magnitude; the sign lives in `credit_debit`.
    pub amount: Decimal,
    pub currency: String,
    pub credit_debit: CreditDebitIndicator,
}

impl BalanceSnapshot {
    pub fn new(
        account_id: impl Into<AccountId>,
        balance_type: BalanceType,
        date_time: DateTime<Utc>,
        amount: Decimal,
        credit_debit: CreditDebitIndicator,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            balance_type,
            date_time,
            amount,
            currency: String::new(),
            credit_debit,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn signed_amount(&self) -> Decimal {
        self.credit_debit.signed(self.amount)
    }
}

impl TryFrom<RawBalance> for BalanceSnapshot {
    type Error = ParseError;

    fn try_from(raw: RawBalance) -> Result<Self, Self::Error> {
        let record = format!("balance {} ({})", raw.account_id, raw.balance_type);
        Ok(Self {
            amount: parse_magnitude(&record, &raw.amount.amount)?,
            date_time: parse_timestamp(&record, &raw.date_time)?,
            credit_debit: CreditDebitIndicator::parse(&record, &raw.credit_debit_indicator)?,
            balance_type: BalanceType::parse(&raw.balance_type),
            currency: raw.amount.currency,
            account_id: AccountId::from(raw.account_id),
        })
    }
}
