use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::history::{BookedSubtypeFilter, HistoryWindow};
use crate::models::{AccountId, SubTransactionType};

/// Default reporting currency (fixtures are denominated in dirhams).
fn default_reporting_currency() -> String {
    "AED".to_string()
}

/// Display/output formatting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places shown in `*_display` fields. Calculations always keep cents.
    pub currency_decimals: u32,

    /// Insert thousands separators in `*_display` fields.
    pub currency_grouping: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_decimals: 2,
            currency_grouping: true,
        }
    }
}

fn default_window_months() -> u32 {
    6
}

fn default_sub_types() -> Vec<SubTransactionType> {
    BookedSubtypeFilter::default().sub_types().to_vec()
}

/// History reconstruction and aggregation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Trailing window of the net-worth series, in calendar months.
    #[serde(default = "default_window_months")]
    pub window_months: u32,

    /// Booked transactions of these sub-types move reconstructed balances.
    #[serde(default = "default_sub_types")]
    pub sub_types: Vec<SubTransactionType>,

    /// Accounts left out of net worth regardless of their own inclusion flag.
    pub exclude_accounts: Vec<AccountId>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            window_months: default_window_months(),
            sub_types: default_sub_types(),
            exclude_accounts: Vec::new(),
        }
    }
}

impl HistoryConfig {
    pub fn window(&self) -> HistoryWindow {
        HistoryWindow::months(self.window_months)
    }

    pub fn filter(&self) -> BookedSubtypeFilter {
        BookedSubtypeFilter::new(self.sub_types.iter().cloned())
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the JSON fixtures. If relative, resolved from the
    /// config file location; defaults to the config file's directory.
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_reporting_currency")]
    pub reporting_currency: String,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub history: HistoryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            reporting_currency: default_reporting_currency(),
            display: DisplayConfig::default(),
            history: HistoryConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load config from a file, or return default config if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn resolve_data_dir(&self, config_dir: &Path) -> PathBuf {
        match &self.data_dir {
            Some(data_dir) if data_dir.is_absolute() => data_dir.clone(),
            Some(data_dir) => config_dir.join(data_dir),
            None => config_dir.to_path_buf(),
        }
    }
}

/// Loaded configuration with resolved paths.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_dir: PathBuf,
    pub reporting_currency: String,
    pub display: DisplayConfig,
    pub history: HistoryConfig,
}

impl ResolvedConfig {
    pub fn load_or_default(config_path: &Path) -> Result<Self> {
        let config = Config::load_or_default(config_path)?;
        let config_dir = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self::from_config(config, &config_dir))
    }

    pub fn from_config(config: Config, config_dir: &Path) -> Self {
        Self {
            data_dir: config.resolve_data_dir(config_dir),
            reporting_currency: config.reporting_currency,
            display: config.display,
            history: config.history,
        }
    }
}

/// Returns the default config file path.
///
/// Resolution order:
/// 1. `./networth.toml` if it exists in current directory
/// 2. `<data dir>/networth/networth.toml`
pub fn default_config_path() -> PathBuf {
    let local_config = PathBuf::from("networth.toml");
    if local_config.exists() {
        return local_config;
    }

    if let Some(data_dir) = dirs::data_dir() {
        return data_dir.join("networth").join("networth.toml");
    }

    local_config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_behaviour() {
        let config = Config::default();
        assert_eq!(config.reporting_currency, "AED");
        assert_eq!(config.history.window_months, 6);
        assert_eq!(
            config.history.sub_types,
            vec![SubTransactionType::Purchase, SubTransactionType::Deposit]
        );
        assert!(config.history.exclude_accounts.is_empty());
    }

    #[test]
    fn parses_history_section() {
        let config: Config = toml::from_str(
            r#"
data_dir = "fixtures"

[history]
window_months = 3
sub_types = ["Deposit", "Refund"]
exclude_accounts = ["acc-9"]
"#,
        )
        .unwrap();

        assert_eq!(config.history.window(), HistoryWindow::months(3));
        assert_eq!(config.history.exclude_accounts, vec![AccountId::from("acc-9")]);
        assert_eq!(
            config.history.filter().sub_types(),
            &[SubTransactionType::Deposit, SubTransactionType::Refund]
        );
        // Sections that are absent keep their defaults.
        assert_eq!(config.display.currency_decimals, 2);
    }

    #[test]
    fn partial_history_section_keeps_other_defaults() {
        let config: Config = toml::from_str("[history]\nwindow_months = 12\n").unwrap();
        assert_eq!(config.history.window_months, 12);
        assert_eq!(config.history.sub_types.len(), 2);
    }

    #[test]
    fn relative_data_dir_resolves_against_config_dir() {
        let config = Config {
            data_dir: Some(PathBuf::from("fixtures")),
            ..Config::default()
        };
        let resolved = ResolvedConfig::from_config(config, Path::new("/srv/networth"));
        assert_eq!(resolved.data_dir, PathBuf::from("/srv/networth/fixtures"));

        let resolved = ResolvedConfig::from_config(Config::default(), Path::new("/srv/networth"));
        assert_eq!(resolved.data_dir, PathBuf::from("/srv/networth"));
    }
}
