//! Policies deciding which transactions move a reconstructed balance.

use crate::models::{SubTransactionType, Transaction, TransactionStatus};

/// Decides whether a transaction takes part in history reconstruction.
///
/// The account match is applied by the reconstructor itself; implementations
/// only judge the transaction's own attributes.
pub trait TransactionFilter {
    fn qualifies(&self, transaction: &Transaction) -> bool;
}

impl<F> TransactionFilter for F
where
    F: Fn(&Transaction) -> bool,
{
    fn qualifies(&self, transaction: &Transaction) -> bool {
        self(transaction)
    }
}

/// Default policy: booked transactions whose sub-type is whitelisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookedSubtypeFilter {
    sub_types: Vec<SubTransactionType>,
}

impl BookedSubtypeFilter {
    pub fn new(sub_types: impl IntoIterator<Item = SubTransactionType>) -> Self {
        Self {
            sub_types: sub_types.into_iter().collect(),
        }
    }

    pub fn sub_types(&self) -> &[SubTransactionType] {
        &self.sub_types
    }
}

impl Default for BookedSubtypeFilter {
    fn default() -> Self {
        Self::new([SubTransactionType::Purchase, SubTransactionType::Deposit])
    }
}

impl TransactionFilter for BookedSubtypeFilter {
    fn qualifies(&self, transaction: &Transaction) -> bool {
        transaction.status == TransactionStatus::Booked
            && self.sub_types.contains(&transaction.sub_type)
    }
}
