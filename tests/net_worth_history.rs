mod support;

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use networth::app::{account_balance, account_history, list_accounts, net_worth_history, NetWorthRequest};
use networth::clock::FixedClock;
use networth::config::{Config, ResolvedConfig};
use networth::storage::JsonFileStorage;
use tempfile::TempDir;

use support::{days_before, household};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 30).unwrap()
}

fn resolved_config(data_dir: &Path) -> ResolvedConfig {
    let config = Config {
        data_dir: Some(data_dir.to_path_buf()),
        ..Config::default()
    };
    ResolvedConfig::from_config(config, data_dir)
}

fn setup() -> Result<(TempDir, JsonFileStorage, ResolvedConfig)> {
    let dir = TempDir::new()?;
    household(today()).write(dir.path())?;
    let storage = JsonFileStorage::new(dir.path());
    let config = resolved_config(dir.path());
    Ok((dir, storage, config))
}

fn point_strings(output: &networth::app::NetWorthOutput) -> Vec<(String, String, String, String)> {
    output
        .points
        .iter()
        .map(|p| {
            (
                p.date.clone(),
                p.net_worth.clone(),
                p.assets.clone(),
                p.debt.clone(),
            )
        })
        .collect()
}

fn row(days: u64, net_worth: &str, assets: &str, debt: &str) -> (String, String, String, String) {
    (
        days_before(today(), days).to_string(),
        net_worth.to_string(),
        assets.to_string(),
        debt.to_string(),
    )
}

#[tokio::test]
async fn balance_uses_highest_priority_snapshot() -> Result<()> {
    let (_dir, storage, config) = setup()?;

    let output = account_balance(&storage, &config, "chk").await?;
    assert_eq!(output.balance, "5000");
    assert_eq!(output.balance_display, "5,000.00 AED");
    assert_eq!(output.source.as_ref().map(|s| s.balance_type.as_str()), Some("ClosingBooked"));

    let card = account_balance(&storage, &config, "Credit Card").await?;
    assert_eq!(card.balance, "-300");
    Ok(())
}

#[tokio::test]
async fn unknown_account_is_an_error() -> Result<()> {
    let (_dir, storage, config) = setup()?;
    let err = account_balance(&storage, &config, "nope").await.unwrap_err();
    assert!(err.to_string().contains("Account not found"));
    Ok(())
}

#[tokio::test]
async fn account_history_matches_worked_example() -> Result<()> {
    let (_dir, storage, config) = setup()?;
    let clock = FixedClock::on(today());

    let output = account_history(&storage, &config, &clock, "chk").await?;
    let points: Vec<(String, String)> = output
        .points
        .iter()
        .map(|p| (p.date.clone(), p.balance.clone()))
        .collect();

    assert_eq!(
        points,
        vec![
            (days_before(today(), 2).to_string(), "5050".to_string()),
            (days_before(today(), 1).to_string(), "5000".to_string()),
            (today().to_string(), "5000".to_string()),
        ]
    );
    assert_eq!(output.current_balance, "5000");
    assert_eq!(output.opening_balance, "4850");
    // The pending purchase is not counted.
    assert_eq!(output.activity.transaction_count, 2);
    assert_eq!(output.activity.net, "150");
    Ok(())
}

#[tokio::test]
async fn net_worth_defaults_to_flagged_accounts() -> Result<()> {
    let (_dir, storage, config) = setup()?;
    let clock = FixedClock::on(today());

    let output = net_worth_history(&storage, &config, &clock, &NetWorthRequest::default()).await?;

    assert_eq!(output.included_accounts, vec!["card", "chk"]);
    assert_eq!(
        point_strings(&output),
        vec![
            row(2, "5050", "5050", "0"),
            row(1, "4700", "5000", "300"),
            row(0, "4700", "5000", "300"),
        ]
    );
    assert_eq!(output.current.net_worth, "4700");
    assert_eq!(output.current.net_worth_display, "4,700.00 AED");
    assert_eq!(output.current.account_count, 2);

    let summary = output.summary.expect("summary");
    assert_eq!(summary.net_worth_change, "-350");
    assert_eq!(summary.debt_change, "300");
    Ok(())
}

#[tokio::test]
async fn inclusion_overrides_change_the_series() -> Result<()> {
    let (_dir, storage, config) = setup()?;
    let clock = FixedClock::on(today());

    let with_savings = NetWorthRequest {
        include: vec!["sav".to_string()],
        exclude: Vec::new(),
    };
    let output = net_worth_history(&storage, &config, &clock, &with_savings).await?;
    assert_eq!(
        point_strings(&output),
        vec![
            row(3, "20000", "20000", "0"),
            row(2, "25050", "25050", "0"),
            row(1, "24700", "25000", "300"),
            row(0, "24700", "25000", "300"),
        ]
    );

    let without_card = NetWorthRequest {
        include: Vec::new(),
        exclude: vec!["card".to_string()],
    };
    let output = net_worth_history(&storage, &config, &clock, &without_card).await?;
    assert_eq!(
        point_strings(&output),
        vec![
            row(2, "5050", "5050", "0"),
            row(1, "5000", "5000", "0"),
            row(0, "5000", "5000", "0"),
        ]
    );

    // Toggling back reproduces the default series.
    let default = net_worth_history(&storage, &config, &clock, &NetWorthRequest::default()).await?;
    let again = net_worth_history(&storage, &config, &clock, &NetWorthRequest::default()).await?;
    assert_eq!(point_strings(&default), point_strings(&again));
    Ok(())
}

#[tokio::test]
async fn config_exclusions_apply_before_requests() -> Result<()> {
    let (dir, storage, _) = setup()?;
    let mut config = resolved_config(dir.path());
    config.history.exclude_accounts = vec!["chk".into()];
    let clock = FixedClock::on(today());

    let output = net_worth_history(&storage, &config, &clock, &NetWorthRequest::default()).await?;
    assert_eq!(output.included_accounts, vec!["card"]);

    let accounts = list_accounts(&storage, &config).await?;
    let chk = accounts.iter().find(|a| a.id == "chk").unwrap();
    assert!(!chk.included_in_net_worth);
    Ok(())
}

#[tokio::test]
async fn window_drops_points_older_than_six_months() -> Result<()> {
    let dir = TempDir::new()?;
    let old_day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    household(today())
        .transaction("old", "chk", old_day, "10", "Credit", "Deposit", "Booked")
        .write(dir.path())?;
    let storage = JsonFileStorage::new(dir.path());
    let config = resolved_config(dir.path());
    let clock = FixedClock::on(today());

    let history = account_history(&storage, &config, &clock, "chk").await?;
    assert_eq!(history.points.first().map(|p| p.date.as_str()), Some("2025-01-15"));

    let output = net_worth_history(&storage, &config, &clock, &NetWorthRequest::default()).await?;
    assert_eq!(output.window_start, "2025-03-30");
    assert_eq!(output.points.first().map(|p| p.date.as_str()), Some("2025-03-30"));
    assert!(output.points.iter().all(|p| p.date.as_str() >= "2025-03-30"));
    Ok(())
}

#[tokio::test]
async fn balance_display_uses_the_snapshot_currency() -> Result<()> {
    use chrono::TimeZone;
    use networth::models::{
        Account, BalanceSnapshot, BalanceType, CreditDebitIndicator, SubTransactionType,
        Transaction,
    };
    use networth::storage::MemoryStorage;
    use rust_decimal::Decimal;

    let storage = MemoryStorage::new();
    storage
        .add_account(Account::new("usd-1").with_nickname("Travel"))
        .await;
    let at = chrono::Utc.with_ymd_and_hms(2025, 9, 29, 8, 0, 0).unwrap();
    storage
        .add_balances([BalanceSnapshot::new(
            "usd-1",
            BalanceType::InterimAvailable,
            at,
            Decimal::new(1_250_50, 2),
            CreditDebitIndicator::Credit,
        )
        .with_currency("USD")])
        .await;
    storage
        .add_transactions([Transaction::new(
            "usd-tx",
            "usd-1",
            at,
            Decimal::new(50_50, 2),
            CreditDebitIndicator::Credit,
        )
        .with_sub_type(SubTransactionType::Deposit)
        .with_currency("USD")])
        .await;

    let dir = TempDir::new()?;
    let config = resolved_config(dir.path());

    let output = account_balance(&storage, &config, "travel").await?;
    assert_eq!(output.balance_display, "1,250.50 USD");
    assert_eq!(output.source.as_ref().map(|s| s.currency.as_str()), Some("USD"));

    let history = account_history(&storage, &config, &FixedClock::on(today()), "usd-1").await?;
    assert_eq!(history.opening_balance, "1200");
    Ok(())
}
