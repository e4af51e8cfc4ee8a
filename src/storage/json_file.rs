use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tokio::fs;

use crate::models::{Account, BalanceSnapshot, ParseError, RawBalance, RawTransaction, Transaction};

use super::Storage;

/// Read-only storage over a directory of Open Finance JSON fixtures.
///
/// Directory structure:
/// ```text
/// data/
///   accounts.json       {"Data": {"Account": [...]}} | {"Account": [...]} | [...]
///   balances.json       {"Data": {"Balance": [...]}} | {"Balance": [...]} | [...]
///   transactions.json   {"Data": {"Transaction": [...]}} | {"Transaction": [...]} | [...]
/// ```
///
/// A missing file reads as an empty collection.
pub struct JsonFileStorage {
    base_path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn accounts_file(&self) -> PathBuf {
        self.base_path.join("accounts.json")
    }

    pub fn balances_file(&self) -> PathBuf {
        self.base_path.join("balances.json")
    }

    pub fn transactions_file(&self) -> PathBuf {
        self.base_path.join("transactions.json")
    }

    async fn read_records<T: DeserializeOwned>(&self, path: &Path, key: &str) -> Result<Vec<T>> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Fixture file missing; treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()))
            }
        };

        let document: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
        let records = extract_records(document, key).with_context(|| {
            format!("{} has no {key:?} array", path.display())
        })?;

        let items: Vec<T> = serde_json::from_value(records)
            .with_context(|| format!("Invalid {key} record in {}", path.display()))?;
        tracing::debug!(path = %path.display(), count = items.len(), "Loaded {key} records");
        Ok(items)
    }
}

/// Find the record array in a fixture document.
///
/// Accepts a bare array, `{key: [...]}`, or the same wrapped in a `Data`/`data` envelope.
fn extract_records(document: serde_json::Value, key: &str) -> Option<serde_json::Value> {
    match document {
        serde_json::Value::Array(_) => Some(document),
        serde_json::Value::Object(mut map) => {
            if let Some(records @ serde_json::Value::Array(_)) = map.remove(key) {
                return Some(records);
            }
            ["Data", "data"]
                .into_iter()
                .find_map(|envelope| map.remove(envelope))
                .and_then(|inner| extract_records(inner, key))
        }
        _ => None,
    }
}

fn validate<R, T>(path: &Path, raw: Vec<R>) -> Result<Vec<T>>
where
    T: TryFrom<R, Error = ParseError>,
{
    raw.into_iter()
        .map(T::try_from)
        .collect::<Result<Vec<T>, ParseError>>()
        .with_context(|| format!("Malformed record in {}", path.display()))
}

#[async_trait::async_trait]
impl Storage for JsonFileStorage {
    async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.read_records(&self.accounts_file(), "Account").await
    }

    async fn list_balances(&self) -> Result<Vec<BalanceSnapshot>> {
        let path = self.balances_file();
        let raw: Vec<RawBalance> = self.read_records(&path, "Balance").await?;
        validate(&path, raw)
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        let path = self.transactions_file();
        let raw: Vec<RawTransaction> = self.read_records(&path, "Transaction").await?;
        validate(&path, raw)
    }
}
