use serde::{Deserialize, Serialize};

use super::AccountId;

/// An account as listed by the account-information provider.
///
/// Only `account_id` matters to the history engine; the rest is display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "AccountId")]
    pub account_id: AccountId,
    #[serde(rename = "Nickname", default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "AccountType", default)]
    pub account_type: String,
    #[serde(rename = "AccountSubType", default)]
    pub account_sub_type: String,
    #[serde(rename = "Currency", default)]
    pub currency: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    /// Whether the account counts towards net worth unless overridden.
    #[serde(rename = "IncludeInNetWorth", alias = "is_in_networth", default = "default_true")]
    pub include_in_net_worth: bool,
}

fn default_true() -> bool {
    true
}

impl Account {
    pub fn new(account_id: impl Into<AccountId>) -> Self {
        Self {
            account_id: account_id.into(),
            nickname: None,
            description: None,
            account_type: String::new(),
            account_sub_type: String::new(),
            currency: String::new(),
            status: String::new(),
            include_in_net_worth: true,
        }
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn excluded_from_net_worth(mut self) -> Self {
        self.include_in_net_worth = false;
        self
    }

    /// Best human-readable label: nickname, then description, then the id.
    pub fn display_name(&self) -> &str {
        let non_blank = |s: &&str| !s.trim().is_empty();
        self.nickname
            .as_deref()
            .filter(non_blank)
            .or_else(|| self.description.as_deref().filter(non_blank))
            .unwrap_or(self.account_id.as_str())
    }
}
