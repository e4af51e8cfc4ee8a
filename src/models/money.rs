use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ParseError;

/// Whether a reported figure adds to (`Credit`) or takes from (`Debit`) an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditDebitIndicator {
    Credit,
    Debit,
}

impl CreditDebitIndicator {
    /// Apply the indicator to an unsigned magnitude.
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            CreditDebitIndicator::Credit => amount,
            CreditDebitIndicator::Debit => -amount,
        }
    }

    pub(crate) fn parse(record: &str, value: &str) -> Result<Self, ParseError> {
        match value.trim() {
            v if v.eq_ignore_ascii_case("credit") => Ok(CreditDebitIndicator::Credit),
            v if v.eq_ignore_ascii_case("debit") => Ok(CreditDebitIndicator::Debit),
            _ => Err(ParseError::UnknownIndicator {
                record: record.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for CreditDebitIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreditDebitIndicator::Credit => f.write_str("Credit"),
            CreditDebitIndicator::Debit => f.write_str("Debit"),
        }
    }
}

/// Wire shape of an Open Finance amount: `{"Amount": "12.50", "Currency": "AED"}`.
///
/// The amount stays a string until validation to avoid floating point drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAmount {
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "Currency", default)]
    pub currency: String,
}

impl RawAmount {
    pub fn new(amount: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency: currency.into(),
        }
    }
}

/// Parse an unsigned decimal magnitude.
pub(crate) fn parse_magnitude(record: &str, value: &str) -> Result<Decimal, ParseError> {
    let amount = Decimal::from_str(value.trim()).map_err(|_| ParseError::InvalidAmount {
        record: record.to_string(),
        value: value.to_string(),
    })?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ParseError::NegativeAmount {
            record: record.to_string(),
            value: value.to_string(),
        });
    }
    Ok(amount)
}

/// Parse a fixture timestamp into a UTC instant.
///
/// Accepts RFC 3339 with an offset, a naive date-time (taken as UTC), or a bare
/// `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(record: &str, value: &str) -> Result<DateTime<Utc>, ParseError> {
    let trimmed = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    Err(ParseError::InvalidDateTime {
        record: record.to_string(),
        value: value.to_string(),
    })
}
