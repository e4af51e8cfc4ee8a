//! Consolidation of per-account series into a net-worth series.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::AccountId;

use super::{round_currency, AccountDayBalance, HistoryWindow, NetWorthPoint};

/// Merge account histories into a net-worth series over `window`.
///
/// Every date present in any history gets a point. An account contributes on a
/// date only if its own history has an entry for that exact date; positive
/// balances count as assets, zero and negative ones as debt.
pub fn aggregate_net_worth(
    histories: &HashMap<AccountId, Vec<AccountDayBalance>>,
    today: NaiveDate,
    window: HistoryWindow,
) -> Vec<NetWorthPoint> {
    let indexed: Vec<BTreeMap<NaiveDate, Decimal>> = histories
        .values()
        .map(|history| history.iter().map(|p| (p.date, p.balance)).collect())
        .collect();

    let dates: BTreeSet<NaiveDate> = indexed
        .iter()
        .flat_map(|by_date| by_date.keys().copied())
        .collect();

    let window_start = window.start(today);
    dates
        .into_iter()
        .filter(|date| *date >= window_start)
        .map(|date| {
            let (assets, debt) = indexed
                .iter()
                .filter_map(|by_date| by_date.get(&date).copied())
                .fold((Decimal::ZERO, Decimal::ZERO), |(assets, debt), balance| {
                    if balance.is_sign_positive() && !balance.is_zero() {
                        (assets + balance, debt)
                    } else {
                        (assets, debt + balance.abs())
                    }
                });
            let assets = round_currency(assets);
            let debt = round_currency(debt);
            NetWorthPoint {
                date,
                net_worth: assets - debt,
                assets,
                debt,
            }
        })
        .collect()
}

/// Aggregate only the accounts in `included`; other histories are ignored.
///
/// Equivalent to calling [`aggregate_net_worth`] on a map holding just the
/// included accounts, so toggling membership and re-running is idempotent.
pub fn aggregate_included(
    included: &HashSet<AccountId>,
    histories: &HashMap<AccountId, Vec<AccountDayBalance>>,
    today: NaiveDate,
    window: HistoryWindow,
) -> Vec<NetWorthPoint> {
    let subset: HashMap<AccountId, Vec<AccountDayBalance>> = histories
        .iter()
        .filter(|(id, _)| included.contains(*id))
        .map(|(id, history)| (id.clone(), history.clone()))
        .collect();
    aggregate_net_worth(&subset, today, window)
}
