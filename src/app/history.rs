use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::clock::Clock;
use crate::config::ResolvedConfig;
use crate::format::{format_amount, format_currency_display};
use crate::history::{
    account_activity, aggregate_included, current_position, opening_balance, reconstruct_history,
    resolve_balance, select_snapshot, summarize_history, AccountDayBalance,
};
use crate::models::{Account, AccountId};
use crate::storage::{find_account, Storage};

use super::{
    AccountHistoryOutput, ActivityOutput, BalanceOutput, BalanceSourceOutput, DayBalanceOutput,
    NetWorthOutput, NetWorthPointOutput, NetWorthSummaryOutput, PositionOutput,
};

/// Caller overrides of which accounts count towards net worth.
#[derive(Debug, Clone, Default)]
pub struct NetWorthRequest {
    /// Accounts to add even if excluded by flag or config.
    pub include: Vec<String>,
    /// Accounts to leave out; applied after `include`.
    pub exclude: Vec<String>,
}

pub(crate) fn display_amount(config: &ResolvedConfig, value: Decimal, currency: &str) -> String {
    format_currency_display(
        value,
        config.display.currency_decimals,
        config.display.currency_grouping,
        currency,
    )
}

/// Accounts flagged for net worth and not excluded by configuration.
pub(crate) fn default_inclusion(accounts: &[Account], config: &ResolvedConfig) -> HashSet<AccountId> {
    accounts
        .iter()
        .filter(|account| account.include_in_net_worth)
        .filter(|account| !config.history.exclude_accounts.contains(&account.account_id))
        .map(|account| account.account_id.clone())
        .collect()
}

fn resolve_inclusion(
    accounts: &[Account],
    config: &ResolvedConfig,
    request: &NetWorthRequest,
) -> HashSet<AccountId> {
    let known: HashSet<&AccountId> = accounts.iter().map(|a| &a.account_id).collect();
    let mut included = default_inclusion(accounts, config);

    for raw in &request.include {
        let id = AccountId::from(raw.as_str());
        if known.contains(&id) {
            included.insert(id);
        } else {
            warn!(account_id = %raw, "Ignoring unknown account in include list");
        }
    }
    for raw in &request.exclude {
        let id = AccountId::from(raw.as_str());
        if !included.remove(&id) && !known.contains(&id) {
            warn!(account_id = %raw, "Ignoring unknown account in exclude list");
        }
    }
    included
}

async fn require_account(storage: &dyn Storage, id_or_name: &str) -> Result<Account> {
    find_account(storage, id_or_name)
        .await?
        .with_context(|| format!("Account not found: {id_or_name}"))
}

pub async fn account_balance(
    storage: &dyn Storage,
    config: &ResolvedConfig,
    id_or_name: &str,
) -> Result<BalanceOutput> {
    let account = require_account(storage, id_or_name).await?;
    let balances = storage.list_balances().await?;

    let source = select_snapshot(&account.account_id, &balances);
    let balance = resolve_balance(&account.account_id, &balances);
    let currency = source
        .map(|s| s.currency.as_str())
        .filter(|c| !c.is_empty())
        .unwrap_or(config.reporting_currency.as_str());

    Ok(BalanceOutput {
        account_id: account.account_id.to_string(),
        balance: format_amount(balance),
        balance_display: display_amount(config, balance, currency),
        source: source.map(|s| BalanceSourceOutput {
            balance_type: s.balance_type.to_string(),
            date_time: s.date_time.to_rfc3339(),
            credit_debit_indicator: s.credit_debit.to_string(),
            currency: s.currency.clone(),
        }),
    })
}

pub async fn account_history(
    storage: &dyn Storage,
    config: &ResolvedConfig,
    clock: &dyn Clock,
    id_or_name: &str,
) -> Result<AccountHistoryOutput> {
    let account = require_account(storage, id_or_name).await?;
    let balances = storage.list_balances().await?;
    let transactions = storage.list_transactions().await?;
    let filter = config.history.filter();
    let today = clock.today();

    let current = resolve_balance(&account.account_id, &balances);
    let history = reconstruct_history(&account.account_id, current, &transactions, &filter, today);
    let opening = opening_balance(&account.account_id, current, &transactions, &filter, today);
    let activity = account_activity(&account, &transactions, &filter);

    Ok(AccountHistoryOutput {
        account_id: account.account_id.to_string(),
        current_balance: format_amount(current),
        opening_balance: format_amount(opening),
        activity: ActivityOutput {
            transaction_count: activity.transaction_count,
            credits: format_amount(activity.credits),
            debits: format_amount(activity.debits),
            net: format_amount(activity.net),
        },
        points: history
            .iter()
            .map(|p| DayBalanceOutput {
                date: p.date.to_string(),
                balance: format_amount(p.balance),
            })
            .collect(),
    })
}

pub async fn net_worth_history(
    storage: &dyn Storage,
    config: &ResolvedConfig,
    clock: &dyn Clock,
    request: &NetWorthRequest,
) -> Result<NetWorthOutput> {
    let accounts = storage.list_accounts().await?;
    let balances = storage.list_balances().await?;
    let transactions = storage.list_transactions().await?;
    let filter = config.history.filter();
    let window = config.history.window();
    let today = clock.today();

    let included = resolve_inclusion(&accounts, config, request);

    let histories: HashMap<AccountId, Vec<AccountDayBalance>> = accounts
        .iter()
        .filter(|account| included.contains(&account.account_id))
        .map(|account| {
            let current = resolve_balance(&account.account_id, &balances);
            let history =
                reconstruct_history(&account.account_id, current, &transactions, &filter, today);
            debug!(
                account_id = %account.account_id,
                points = history.len(),
                "Reconstructed account history"
            );
            (account.account_id.clone(), history)
        })
        .collect();

    let points = aggregate_included(&included, &histories, today, window);
    let summary = summarize_history(&points);

    let mut included_ids: Vec<&AccountId> = included.iter().collect();
    included_ids.sort();
    let position = current_position(included_ids.iter().copied(), &balances);

    Ok(NetWorthOutput {
        currency: config.reporting_currency.clone(),
        as_of: today.to_string(),
        window_start: window.start(today).to_string(),
        included_accounts: included_ids.iter().map(|id| id.to_string()).collect(),
        current: PositionOutput {
            assets: format_amount(position.assets),
            liabilities: format_amount(position.liabilities),
            net_worth: format_amount(position.net_worth),
            net_worth_display: display_amount(
                config,
                position.net_worth,
                &config.reporting_currency,
            ),
            account_count: position.account_count,
        },
        points: points
            .iter()
            .map(|p| NetWorthPointOutput {
                date: p.date.to_string(),
                net_worth: format_amount(p.net_worth),
                assets: format_amount(p.assets),
                debt: format_amount(p.debt),
            })
            .collect(),
        summary: summary.map(|s| NetWorthSummaryOutput {
            start_date: s.start.date.to_string(),
            end_date: s.end.date.to_string(),
            net_worth_change: format_amount(s.net_worth_change),
            assets_change: format_amount(s.assets_change),
            debt_change: format_amount(s.debt_change),
        }),
    })
}
