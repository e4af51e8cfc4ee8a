//! Series summaries, current totals and per-account activity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Account, AccountId, BalanceSnapshot, CreditDebitIndicator, Transaction};

use super::{resolve_balance, round_currency, NetWorthPoint, TransactionFilter};

/// Movement of the consolidated series between its first and last point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetWorthSummary {
    pub start: NetWorthPoint,
    pub end: NetWorthPoint,
    pub net_worth_change: Decimal,
    pub assets_change: Decimal,
    pub debt_change: Decimal,
}

pub fn summarize_history(points: &[NetWorthPoint]) -> Option<NetWorthSummary> {
    let (start, end) = (*points.first()?, *points.last()?);
    Some(NetWorthSummary {
        start,
        end,
        net_worth_change: end.net_worth - start.net_worth,
        assets_change: end.assets - start.assets,
        debt_change: end.debt - start.debt,
    })
}

/// Totals across included accounts at their current resolved balances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetWorthPosition {
    pub assets: Decimal,
    pub liabilities: Decimal,
    pub net_worth: Decimal,
    pub account_count: usize,
}

pub fn current_position<'a>(
    accounts: impl IntoIterator<Item = &'a AccountId>,
    snapshots: &[BalanceSnapshot],
) -> NetWorthPosition {
    let mut assets = Decimal::ZERO;
    let mut liabilities = Decimal::ZERO;
    let mut account_count = 0;
    for account_id in accounts {
        let balance = resolve_balance(account_id, snapshots);
        if balance.is_sign_negative() && !balance.is_zero() {
            liabilities += balance.abs();
        } else {
            assets += balance;
        }
        account_count += 1;
    }
    let assets = round_currency(assets);
    let liabilities = round_currency(liabilities);
    NetWorthPosition {
        assets,
        liabilities,
        net_worth: assets - liabilities,
        account_count,
    }
}

/// Inflow/outflow totals of an account's qualifying transactions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountActivity {
    pub transaction_count: usize,
    pub credits: Decimal,
    pub debits: Decimal,
    pub net: Decimal,
}

pub fn account_activity(
    account: &Account,
    transactions: &[Transaction],
    filter: &dyn TransactionFilter,
) -> AccountActivity {
    let mut activity = transactions
        .iter()
        .filter(|tx| tx.account_id == account.account_id && filter.qualifies(tx))
        .fold(AccountActivity::default(), |mut acc, tx| {
            acc.transaction_count += 1;
            match tx.credit_debit {
                CreditDebitIndicator::Credit => acc.credits += tx.amount,
                CreditDebitIndicator::Debit => acc.debits += tx.amount,
            }
            acc
        });
    activity.credits = round_currency(activity.credits);
    activity.debits = round_currency(activity.debits);
    activity.net = activity.credits - activity.debits;
    activity
}
