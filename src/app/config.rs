use std::path::Path;

use crate::config::ResolvedConfig;

pub fn config_output(config_path: &Path, config: &ResolvedConfig) -> serde_json::Value {
    serde_json::json!({
        "config_file": config_path.display().to_string(),
        "data_directory": config.data_dir.display().to_string(),
        "reporting_currency": config.reporting_currency,
        "history": {
            "window_months": config.history.window_months,
            "sub_types": config.history.sub_types,
            "exclude_accounts": config.history.exclude_accounts,
        }
    })
}
