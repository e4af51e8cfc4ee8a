//! In-memory storage implementation for testing and embedding.

use anyhow::Result;
use tokio::sync::Mutex;

use crate::models::{Account, BalanceSnapshot, Transaction};

use super::Storage;

/// In-memory storage. Accounts keep insertion order.
pub struct MemoryStorage {
    accounts: Mutex<Vec<Account>>,
    balances: Mutex<Vec<BalanceSnapshot>>,
    transactions: Mutex<Vec<Transaction>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(Vec::new()),
            balances: Mutex::new(Vec::new()),
            transactions: Mutex::new(Vec::new()),
        }
    }

    /// Insert an account, replacing any existing account with the same id.
    pub async fn add_account(&self, account: Account) {
        let mut accounts = self.accounts.lock().await;
        match accounts
            .iter_mut()
            .find(|existing| existing.account_id == account.account_id)
        {
            Some(existing) => *existing = account,
            None => accounts.push(account),
        }
    }

    pub async fn add_balances(&self, snapshots: impl IntoIterator<Item = BalanceSnapshot>) {
        self.balances.lock().await.extend(snapshots);
    }

    pub async fn add_transactions(&self, transactions: impl IntoIterator<Item = Transaction>) {
        self.transactions.lock().await.extend(transactions);
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn list_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.accounts.lock().await.clone())
    }

    async fn list_balances(&self) -> Result<Vec<BalanceSnapshot>> {
        Ok(self.balances.lock().await.clone())
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self.transactions.lock().await.clone())
    }
}
