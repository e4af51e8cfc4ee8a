use serde::Serialize;

/// JSON output for accounts
#[derive(Debug, Serialize)]
pub struct AccountOutput {
    pub id: String,
    pub name: String,
    pub account_type: String,
    pub account_sub_type: String,
    pub currency: String,
    pub balance: String,
    pub balance_display: String,
    pub included_in_net_worth: bool,
}

/// JSON output for a resolved current balance
#[derive(Debug, Serialize)]
pub struct BalanceOutput {
    pub account_id: String,
    pub balance: String,
    pub balance_display: String,
    /// Snapshot the balance was taken from; absent when the account has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<BalanceSourceOutput>,
}

#[derive(Debug, Serialize)]
pub struct BalanceSourceOutput {
    #[serde(rename = "type")]
    pub balance_type: String,
    pub date_time: String,
    pub credit_debit_indicator: String,
    pub currency: String,
}

#[derive(Debug, Serialize)]
pub struct DayBalanceOutput {
    pub date: String,
    pub balance: String,
}

/// JSON output for one account's reconstructed history
#[derive(Debug, Serialize)]
pub struct AccountHistoryOutput {
    pub account_id: String,
    pub current_balance: String,
    /// Balance before the earliest qualifying transaction.
    pub opening_balance: String,
    pub activity: ActivityOutput,
    pub points: Vec<DayBalanceOutput>,
}

#[derive(Debug, Serialize)]
pub struct ActivityOutput {
    pub transaction_count: usize,
    pub credits: String,
    pub debits: String,
    pub net: String,
}

#[derive(Debug, Serialize)]
pub struct NetWorthPointOutput {
    pub date: String,
    pub net_worth: String,
    pub assets: String,
    pub debt: String,
}

#[derive(Debug, Serialize)]
pub struct NetWorthSummaryOutput {
    pub start_date: String,
    pub end_date: String,
    pub net_worth_change: String,
    pub assets_change: String,
    pub debt_change: String,
}

#[derive(Debug, Serialize)]
pub struct PositionOutput {
    pub assets: String,
    pub liabilities: String,
    pub net_worth: String,
    pub net_worth_display: String,
    pub account_count: usize,
}

/// JSON output for the consolidated net-worth history
#[derive(Debug, Serialize)]
pub struct NetWorthOutput {
    pub currency: String,
    pub as_of: String,
    pub window_start: String,
    pub included_accounts: Vec<String>,
    pub current: PositionOutput,
    pub points: Vec<NetWorthPointOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<NetWorthSummaryOutput>,
}
