//! Use-cases behind the CLI: load fixtures, run the history engine, shape JSON output.

mod config;
mod history;
mod list;
mod types;

pub use config::config_output;
pub use history::{account_balance, account_history, net_worth_history, NetWorthRequest};
pub use list::list_accounts;
pub use types::{
    AccountHistoryOutput, AccountOutput, ActivityOutput, BalanceOutput, BalanceSourceOutput,
    DayBalanceOutput, NetWorthOutput, NetWorthPointOutput, NetWorthSummaryOutput, PositionOutput,
};
