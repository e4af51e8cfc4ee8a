//! Selection of the authoritative current balance for an account.

use rust_decimal::Decimal;

use crate::models::{AccountId, BalanceSnapshot, BalanceType};

/// Balance types in order of trust, most authoritative first.
pub const BALANCE_TYPE_PRIORITY: [BalanceType; 11] = [
    BalanceType::ClosingAvailable,
    BalanceType::ClosingBooked,
    BalanceType::ClosingCleared,
    BalanceType::InterimAvailable,
    BalanceType::ForwardAvailable,
    BalanceType::OpeningAvailable,
    BalanceType::OpeningBooked,
    BalanceType::OpeningCleared,
    BalanceType::Expected,
    BalanceType::PreviouslyClosedBooked,
    BalanceType::Information,
];

/// Most recent snapshot among `candidates`.
///
/// Ties on `date_time` keep the earliest candidate in input order.
fn latest<'a>(candidates: impl Iterator<Item = &'a BalanceSnapshot>) -> Option<&'a BalanceSnapshot> {
    candidates.fold(None, |best: Option<&BalanceSnapshot>, snapshot| match best {
        Some(current) if current.date_time >= snapshot.date_time => Some(current),
        _ => Some(snapshot),
    })
}

/// Pick the snapshot that determines `account_id`'s current balance.
///
/// The first type in [`BALANCE_TYPE_PRIORITY`] with any snapshot wins, and
/// within it the most recent one. If the account only has unranked types, the
/// most recent snapshot of any type is used.
pub fn select_snapshot<'a>(
    account_id: &AccountId,
    snapshots: &'a [BalanceSnapshot],
) -> Option<&'a BalanceSnapshot> {
    let for_account = move || snapshots.iter().filter(move |s| &s.account_id == account_id);

    BALANCE_TYPE_PRIORITY
        .iter()
        .find_map(|kind| latest(for_account().filter(move |s| &s.balance_type == kind)))
        .or_else(|| latest(for_account()))
}

/// Current signed balance of `account_id`; zero when it has no snapshots.
pub fn resolve_balance(account_id: &AccountId, snapshots: &[BalanceSnapshot]) -> Decimal {
    select_snapshot(account_id, snapshots)
        .map(BalanceSnapshot::signed_amount)
        .unwrap_or(Decimal::ZERO)
}
