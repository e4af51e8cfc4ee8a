mod account;
mod balance;
mod error;
mod id;
mod money;
mod transaction;

pub use account::Account;
pub use balance::{BalanceSnapshot, BalanceType, RawBalance};
pub use error::ParseError;
pub use id::AccountId;
pub use money::{parse_timestamp, CreditDebitIndicator, RawAmount};
pub use transaction::{
    RawMerchantDetails, RawTransaction, SubTransactionType, Transaction, TransactionStatus,
};
