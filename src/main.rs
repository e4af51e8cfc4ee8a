use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use networth::app::{self, NetWorthRequest};
use networth::clock::{Clock, FixedClock, SystemClock};
use networth::config::{default_config_path, ResolvedConfig};
use networth::storage::JsonFileStorage;
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "networth")]
#[command(about = "Account balance history and net worth from open-banking fixtures")]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Pin "today" (YYYY-MM-DD, UTC) instead of reading the system clock
    #[arg(long, hide = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show current configuration
    Config,
    /// List accounts with their current balances
    Accounts,
    /// Show the resolved current balance of an account
    Balance {
        /// Account id or nickname
        account: String,
    },
    /// Reconstruct the daily balance history of an account
    History {
        /// Account id or nickname
        account: String,
    },
    /// Consolidated net-worth history over the configured window
    NetWorth {
        /// Count this account even if it is excluded by default (repeatable)
        #[arg(long = "include", value_name = "ACCOUNT_ID")]
        include: Vec<String>,
        /// Leave this account out (repeatable)
        #[arg(long = "exclude", value_name = "ACCOUNT_ID")]
        exclude: Vec<String>,
    },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init();
    } else {
        tracing_subscriber::registry().with(filter).with(layer).init();
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config_path = cli.config.unwrap_or_else(default_config_path);
    let config = ResolvedConfig::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config: {}", config_path.display()))?;
    let storage = JsonFileStorage::new(&config.data_dir);
    let clock: Box<dyn Clock> = match cli.today {
        Some(date) => Box::new(FixedClock::on(date)),
        None => Box::new(SystemClock),
    };

    match cli.command {
        Command::Config => print_json(&app::config_output(&config_path, &config)),
        Command::Accounts => print_json(&app::list_accounts(&storage, &config).await?),
        Command::Balance { account } => {
            print_json(&app::account_balance(&storage, &config, &account).await?)
        }
        Command::History { account } => {
            print_json(&app::account_history(&storage, &config, clock.as_ref(), &account).await?)
        }
        Command::NetWorth { include, exclude } => {
            let request = NetWorthRequest { include, exclude };
            print_json(&app::net_worth_history(&storage, &config, clock.as_ref(), &request).await?)
        }
    }
}
