//! Backward reconstruction of an account's daily balance series.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{AccountId, Transaction};

use super::{round_currency, AccountDayBalance, TransactionFilter};

/// Net signed effect of qualifying transactions on each UTC calendar day.
pub fn daily_deltas(
    account_id: &AccountId,
    transactions: &[Transaction],
    filter: &dyn TransactionFilter,
) -> BTreeMap<NaiveDate, Decimal> {
    let mut deltas: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for tx in transactions
        .iter()
        .filter(|tx| &tx.account_id == account_id && filter.qualifies(tx))
    {
        *deltas.entry(tx.day()).or_default() += tx.signed_amount();
    }
    deltas
}

/// Rebuild one balance per day from the earliest qualifying transaction up to `today`.
///
/// `current_balance` is taken to already include every transaction up to and
/// including `today`. Walking backward, each day is recorded first and then
/// that day's net movement is undone to obtain the balance the day opened with.
/// The result is ascending, gap-free and ends at `today` with
/// `current_balance` (rounded to cents). Without any qualifying transaction up
/// to `today` the series is the single unrounded point `{today, current_balance}`.
pub fn reconstruct_history(
    account_id: &AccountId,
    current_balance: Decimal,
    transactions: &[Transaction],
    filter: &dyn TransactionFilter,
    today: NaiveDate,
) -> Vec<AccountDayBalance> {
    let deltas = daily_deltas(account_id, transactions, filter);

    let start = match deltas.keys().next() {
        Some(&earliest) if earliest <= today => earliest,
        _ => return vec![AccountDayBalance::new(today, current_balance)],
    };

    let mut history = Vec::with_capacity(((today - start).num_days() + 1) as usize);
    let mut balance = current_balance;
    let mut day = today;
    loop {
        history.push(AccountDayBalance::new(day, round_currency(balance)));
        if let Some(delta) = deltas.get(&day) {
            balance -= *delta;
        }
        if day == start {
            break;
        }
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }

    history.reverse();
    history
}

/// Balance the account held before its earliest qualifying transaction.
///
/// This is the value the backward walk carries out of the first day of the
/// series; it is not itself part of the series.
pub fn opening_balance(
    account_id: &AccountId,
    current_balance: Decimal,
    transactions: &[Transaction],
    filter: &dyn TransactionFilter,
    today: NaiveDate,
) -> Decimal {
    let undone: Decimal = daily_deltas(account_id, transactions, filter)
        .range(..=today)
        .map(|(_, delta)| *delta)
        .sum();
    round_currency(current_balance - undone)
}
