use anyhow::Result;

use crate::models::{Account, AccountId};

use super::Storage;

/// Find an account by exact id, falling back to a case-insensitive nickname match.
pub async fn find_account(storage: &dyn Storage, id_or_name: &str) -> Result<Option<Account>> {
    if let Some(account) = storage.get_account(&AccountId::from(id_or_name)).await? {
        return Ok(Some(account));
    }

    let accounts = storage.list_accounts().await?;
    let mut matches: Vec<Account> = accounts
        .into_iter()
        .filter(|account| {
            account
                .nickname
                .as_deref()
                .is_some_and(|name| name.eq_ignore_ascii_case(id_or_name))
        })
        .collect();

    if matches.len() > 1 {
        let ids: Vec<String> = matches.iter().map(|a| a.account_id.to_string()).collect();
        anyhow::bail!("Multiple accounts named '{id_or_name}'. Use an ID instead: {ids:?}");
    }

    Ok(matches.pop())
}
