use anyhow::Result;

use crate::config::ResolvedConfig;
use crate::format::format_amount;
use crate::history::resolve_balance;
use crate::storage::Storage;

use super::history::{default_inclusion, display_amount};
use super::AccountOutput;

pub async fn list_accounts(
    storage: &dyn Storage,
    config: &ResolvedConfig,
) -> Result<Vec<AccountOutput>> {
    let accounts = storage.list_accounts().await?;
    let balances = storage.list_balances().await?;
    let included = default_inclusion(&accounts, config);

    Ok(accounts
        .iter()
        .map(|account| {
            let balance = resolve_balance(&account.account_id, &balances);
            let currency = if account.currency.is_empty() {
                config.reporting_currency.as_str()
            } else {
                account.currency.as_str()
            };
            AccountOutput {
                id: account.account_id.to_string(),
                name: account.display_name().to_string(),
                account_type: account.account_type.clone(),
                account_sub_type: account.account_sub_type.clone(),
                currency: currency.to_string(),
                balance: format_amount(balance),
                balance_display: display_amount(config, balance, currency),
                included_in_net_worth: included.contains(&account.account_id),
            }
        })
        .collect())
}
