use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::{parse_magnitude, parse_timestamp};
use super::{AccountId, CreditDebitIndicator, ParseError, RawAmount};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransactionStatus {
    Booked,
    Pending,
    Rejected,
    Other(String),
}

impl TransactionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionStatus::Booked => "Booked",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Rejected => "Rejected",
            TransactionStatus::Other(raw) => raw,
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "Booked" => TransactionStatus::Booked,
            "Pending" => TransactionStatus::Pending,
            "Rejected" => TransactionStatus::Rejected,
            other => TransactionStatus::Other(other.to_string()),
        }
    }
}

/// Fine-grained transaction classifier (`SubTransactionType` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SubTransactionType {
    Purchase,
    Deposit,
    Withdrawal,
    Refund,
    Reversal,
    Transfer,
    Payment,
    Fee,
    Interest,
    Other(String),
}

impl SubTransactionType {
    pub fn as_str(&self) -> &str {
        match self {
            SubTransactionType::Purchase => "Purchase",
            SubTransactionType::Deposit => "Deposit",
            SubTransactionType::Withdrawal => "Withdrawal",
            SubTransactionType::Refund => "Refund",
            SubTransactionType::Reversal => "Reversal",
            SubTransactionType::Transfer => "Transfer",
            SubTransactionType::Payment => "Payment",
            SubTransactionType::Fee => "Fee",
            SubTransactionType::Interest => "Interest",
            SubTransactionType::Other(raw) => raw,
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "Purchase" => SubTransactionType::Purchase,
            "Deposit" => SubTransactionType::Deposit,
            "Withdrawal" => SubTransactionType::Withdrawal,
            "Refund" => SubTransactionType::Refund,
            "Reversal" => SubTransactionType::Reversal,
            "Transfer" => SubTransactionType::Transfer,
            "Payment" => SubTransactionType::Payment,
            "Fee" => SubTransactionType::Fee,
            "Interest" => SubTransactionType::Interest,
            other => SubTransactionType::Other(other.to_string()),
        }
    }
}

// Both enums travel as their plain wire strings (in JSON output and TOML config).
macro_rules! string_serde {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok(<$ty>::parse(&raw))
            }
        }
    };
}

string_serde!(TransactionStatus);
string_serde!(SubTransactionType);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMerchantDetails {
    #[serde(rename = "MerchantName", default, skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    #[serde(
        rename = "MerchantCategoryCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub merchant_category_code: Option<String>,
}

/// One transaction record exactly as it appears in a transactions fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTransaction {
    #[serde(rename = "TransactionId", default)]
    pub transaction_id: String,
    #[serde(rename = "AccountId")]
    pub account_id: String,
    #[serde(rename = "TransactionDateTime")]
    pub transaction_date_time: String,
    #[serde(rename = "Amount")]
    pub amount: RawAmount,
    #[serde(rename = "CreditDebitIndicator")]
    pub credit_debit_indicator: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "TransactionType", default)]
    pub transaction_type: String,
    #[serde(rename = "SubTransactionType", default)]
    pub sub_transaction_type: String,
    #[serde(rename = "MerchantDetails", default, skip_serializing_if = "Option::is_none")]
    pub merchant_details: Option<RawMerchantDetails>,
}

/// A validated ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub account_id: AccountId,
    pub date_time: DateTime<Utc>,
    /// Unsigned magnitude; the sign lives in `credit_debit`.
    pub amount: Decimal,
    pub currency: String,
    pub credit_debit: CreditDebitIndicator,
    pub status: TransactionStatus,
    pub transaction_type: String,
    pub sub_type: SubTransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
}

impl Transaction {
    /// A booked transaction with no type information; use the `with_*` builders to refine.
    pub fn new(
        transaction_id: impl Into<String>,
        account_id: impl Into<AccountId>,
        date_time: DateTime<Utc>,
        amount: Decimal,
        credit_debit: CreditDebitIndicator,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            account_id: account_id.into(),
            date_time,
            amount,
            currency: String::new(),
            credit_debit,
            status: TransactionStatus::Booked,
            transaction_type: String::new(),
            sub_type: SubTransactionType::Other(String::new()),
            merchant_name: None,
        }
    }

    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_sub_type(mut self, sub_type: SubTransactionType) -> Self {
        self.sub_type = sub_type;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// `+amount` for credits, `-amount` for debits.
    pub fn signed_amount(&self) -> Decimal {
        self.credit_debit.signed(self.amount)
    }

    /// Calendar day of the transaction (UTC).
    pub fn day(&self) -> NaiveDate {
        self.date_time.date_naive()
    }
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = ParseError;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        let record = if raw.transaction_id.is_empty() {
            format!("transaction on account {}", raw.account_id)
        } else {
            format!("transaction {}", raw.transaction_id)
        };
        Ok(Self {
            amount: parse_magnitude(&record, &raw.amount.amount)?,
            date_time: parse_timestamp(&record, &raw.transaction_date_time)?,
            credit_debit: CreditDebitIndicator::parse(&record, &raw.credit_debit_indicator)?,
            status: TransactionStatus::parse(&raw.status),
            sub_type: SubTransactionType::parse(&raw.sub_transaction_type),
            transaction_type: raw.transaction_type,
            currency: raw.amount.currency,
            merchant_name: raw
                .merchant_details
                .and_then(|m| m.merchant_name)
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty()),
            account_id: AccountId::from(raw.account_id),
            transaction_id: raw.transaction_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "TransactionId": "tx-100",
        "AccountId": "acc-1",
        "TransactionDateTime": "2025-02-10T21:30:00+04:00",
        "TransactionReference": "REF",
        "TransactionType": "POS",
        "SubTransactionType": "Purchase",
        "CreditDebitIndicator": "Debit",
        "Status": "Booked",
        "Amount": {"Amount": "45.90", "Currency": "AED"},
        "MerchantDetails": {"MerchantName": " Carrefour "}
    }"#;

    #[test]
    fn raw_transaction_converts_to_typed_model() {
        let raw: RawTransaction = serde_json::from_str(SAMPLE).unwrap();
        let tx = Transaction::try_from(raw).unwrap();

        assert_eq!(tx.transaction_id, "tx-100");
        assert_eq!(tx.status, TransactionStatus::Booked);
        assert_eq!(tx.sub_type, SubTransactionType::Purchase);
        assert_eq!(tx.signed_amount(), Decimal::new(-45_90, 2));
        assert_eq!(tx.merchant_name.as_deref(), Some("Carrefour"));
        assert_eq!(tx.day(), NaiveDate::from_ymd_opt(2025, 2, 10).unwrap());
    }

    #[test]
    fn day_uses_the_utc_calendar_date() {
        let mut raw: RawTransaction = serde_json::from_str(SAMPLE).unwrap();
        raw.transaction_date_time = "2025-02-11T01:00:00+04:00".to_string();
        let tx = Transaction::try_from(raw).unwrap();
        assert_eq!(tx.day(), NaiveDate::from_ymd_opt(2025, 2, 10).unwrap());
    }

    #[test]
    fn malformed_amount_names_the_transaction() {
        let mut raw: RawTransaction = serde_json::from_str(SAMPLE).unwrap();
        raw.amount.amount = "NaN".to_string();
        let err = Transaction::try_from(raw).unwrap_err();
        assert_eq!(err.record(), "transaction tx-100");
    }

    #[test]
    fn sub_types_round_trip_through_toml_strings() {
        #[derive(Deserialize)]
        struct Wrapper {
            kinds: Vec<SubTransactionType>,
        }
        let parsed: Wrapper = toml::from_str(r#"kinds = ["Deposit", "Cashback"]"#).unwrap();
        assert_eq!(
            parsed.kinds,
            vec![
                SubTransactionType::Deposit,
                SubTransactionType::Other("Cashback".to_string())
            ]
        );
    }
}
