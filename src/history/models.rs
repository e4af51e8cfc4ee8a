use chrono::{Months, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Decimal places every recorded balance is rounded to.
pub const CURRENCY_DECIMALS: u32 = 2;

/// Round a currency value to two places, half away from zero.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Balance of one account at the end of one calendar day (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDayBalance {
    pub date: NaiveDate,
    pub balance: Decimal,
}

impl AccountDayBalance {
    pub fn new(date: NaiveDate, balance: Decimal) -> Self {
        Self { date, balance }
    }
}

/// One point of the consolidated series.
///
/// `net_worth == assets - debt`, and both `assets` and `debt` are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetWorthPoint {
    pub date: NaiveDate,
    pub net_worth: Decimal,
    pub assets: Decimal,
    pub debt: Decimal,
}

/// Trailing window the aggregate series is clipped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryWindow {
    pub months: u32,
}

impl Default for HistoryWindow {
    fn default() -> Self {
        Self { months: 6 }
    }
}

impl HistoryWindow {
    pub fn months(months: u32) -> Self {
        Self { months }
    }

    /// First date kept by the window. Month arithmetic clamps to the end of
    /// shorter months (Aug 31 minus 6 months is Feb 28/29).
    pub fn start(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_months(Months::new(self.months))
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        date >= self.start(today)
    }
}
