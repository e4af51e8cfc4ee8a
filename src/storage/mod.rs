mod json_file;
mod lookup;
mod memory;

pub use json_file::JsonFileStorage;
pub use lookup::find_account;
pub use memory::MemoryStorage;

use anyhow::Result;

use crate::models::{Account, AccountId, BalanceSnapshot, Transaction};

/// Read access to the account-information data the history engine consumes.
///
/// Implementations return validated records; a malformed record is an error,
/// never silently dropped.
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    async fn list_accounts(&self) -> Result<Vec<Account>>;

    async fn get_account(&self, id: &AccountId) -> Result<Option<Account>> {
        Ok(self
            .list_accounts()
            .await?
            .into_iter()
            .find(|account| &account.account_id == id))
    }

    /// Every balance snapshot, for all accounts.
    async fn list_balances(&self) -> Result<Vec<BalanceSnapshot>>;

    /// Every transaction, for all accounts.
    async fn list_transactions(&self) -> Result<Vec<Transaction>>;
}
