//! Command Line Interface for the Francium SDK.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use francium_sdk::prelude::*;
use prettytable::{Table, format, row};
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "francium")]
#[command(about = "TVL, APY and positions for Francium lending and farm pools", long_about = None)]
struct Cli {
    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Solana RPC endpoint (overrides FRANCIUM_RPC_URL)
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// Pool registry JSON file (overrides FRANCIUM_REGISTRY)
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    /// CoinGecko-compatible API base URL (overrides FRANCIUM_PRICE_API)
    #[arg(long, global = true)]
    price_api: Option<String>,

    /// Read token prices from a JSON file instead of the price API
    #[arg(long, global = true)]
    prices_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// TVL, utilization, APR and APY of every lending pool
    LendingTvl,
    /// TVL of every active farm
    FarmTvl,
    /// Lending deposits of a wallet
    UserLending {
        /// Wallet address
        owner: Pubkey,
    },
    /// Leveraged farm positions of a wallet
    UserFarm {
        /// Wallet address
        owner: Pubkey,
    },
    /// Current token prices
    Prices,
    /// TVL of a single pool
    Pool {
        /// Pool id from the registry (e.g. USDC or RAY-USDC)
        id: String,
    },
}

impl Cli {
    fn config(&self) -> Result<SdkConfig> {
        Ok(self.apply_overrides(SdkConfig::from_env()?))
    }

    /// Layers command-line flags over `config`.
    fn apply_overrides(&self, mut config: SdkConfig) -> SdkConfig {
        if let Some(url) = &self.rpc_url {
            config.rpc_url = url.clone();
        }
        if let Some(path) = &self.registry {
            config.registry_path = Some(path.clone());
        }
        if let Some(url) = &self.price_api {
            config.price_api_url = url.clone();
        }
        config
    }
}

fn price_provider(config: &SdkConfig, prices_file: Option<&Path>) -> Result<Arc<dyn PriceProvider>> {
    let provider: Arc<dyn PriceProvider> = match prices_file {
        Some(path) => Arc::new(
            FixedPriceProvider::from_file(path)
                .with_context(|| format!("failed to load prices from {}", path.display()))?,
        ),
        None => Arc::new(CoinGeckoProvider::new(
            config.price_api_url.as_str(),
            config.timeout(),
        )?),
    };
    Ok(provider)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config()?;
    debug!(?config, "Resolved configuration");
    let prices = price_provider(&config, cli.prices_file.as_deref())?;
    let sdk = || -> Result<FranciumSdk> {
        Ok(FranciumSdk::from_config(&config)
            .context("failed to initialise the SDK")?
            .with_price_provider(prices.clone()))
    };

    match &cli.command {
        Commands::Prices => {
            let quotes = prices.token_prices().await?;
            if cli.json {
                print_json(&quotes)?;
            } else {
                print_prices(&quotes);
            }
        }
        Commands::LendingTvl => {
            let tvls = sdk()?.lending_pool_tvl().await?;
            if cli.json {
                print_json(&tvls)?;
            } else {
                print_lending_tvl(&tvls);
            }
        }
        Commands::FarmTvl => {
            let tvls = sdk()?.farm_pool_tvl().await?;
            if cli.json {
                print_json(&tvls)?;
            } else {
                print_farm_tvl(&tvls);
            }
        }
        Commands::UserLending { owner } => {
            let positions = sdk()?.user_lending_positions(owner).await?;
            if cli.json {
                print_json(&positions)?;
            } else {
                print_user_lending(&positions);
            }
        }
        Commands::UserFarm { owner } => {
            let positions = sdk()?.user_farm_positions(owner).await?;
            if cli.json {
                print_json(&positions)?;
            } else {
                print_user_farm(&positions);
            }
        }
        Commands::Pool { id } => {
            let tvl = sdk()?.pool_tvl(id).await?;
            if cli.json {
                print_json(&tvl)?;
            } else {
                match tvl {
                    PoolTvl::Lending(tvl) => print_lending_tvl(&[tvl]),
                    PoolTvl::Farm(tvl) => print_farm_tvl(&[tvl]),
                }
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table
}

fn usd(value: Decimal) -> String {
    format!("${}", value.round_dp(2))
}

fn percent(value: Decimal) -> String {
    format!("{}%", value.round_dp(2))
}

fn print_prices(prices: &PriceMap) {
    let mut quotes: Vec<_> = prices.iter().collect();
    quotes.sort_by(|a, b| a.0.cmp(b.0));

    let mut table = table();
    table.set_titles(row!["Token", "Price"]);
    for (symbol, price) in quotes {
        table.add_row(row![symbol, price]);
    }
    table.printstd();
}

fn print_lending_tvl(tvls: &[LendingPoolTvl]) {
    let mut table = table();
    table.set_titles(row!["Pool", "TVL", "Available", "Utilization", "APR", "APY"]);
    for tvl in tvls {
        table.add_row(row![
            tvl.id,
            usd(tvl.liquidity_locked),
            usd(tvl.available),
            percent(tvl.utilization * Decimal::ONE_HUNDRED),
            percent(tvl.apr * Decimal::ONE_HUNDRED),
            percent(tvl.apy)
        ]);
    }
    table.printstd();
}

fn print_farm_tvl(tvls: &[FarmPoolTvl]) {
    let mut table = table();
    table.set_titles(row!["Farm", "LP tokens", "TVL"]);
    for tvl in tvls {
        table.add_row(row![tvl.id, tvl.lp_amount.round_dp(6), usd(tvl.liquidity_locked)]);
    }
    table.printstd();
}

fn print_user_lending(positions: &[UserLendingPosition]) {
    let mut table = table();
    table.set_titles(row!["Pool", "Staked", "Wallet", "Amount", "Value"]);
    for position in positions {
        table.add_row(row![
            position.pool,
            position.reward_position,
            position.balance_position,
            position.total_amount.round_dp(u32::from(position.scale)),
            usd(position.value)
        ]);
    }
    table.printstd();
}

fn print_user_farm(positions: &[Option<UserFarmPosition>]) {
    let mut table = table();
    table.set_titles(row!["Farm", "LP tokens", "Value", "Debt", "Equity", "Leverage"]);
    for position in positions.iter().flatten() {
        let leverage = position
            .leverage
            .map_or_else(|| "-".to_string(), |leverage| format!("{}x", leverage.round_dp(2)));
        table.add_row(row![
            position.farm,
            position.lp_amount.round_dp(6),
            usd(position.position_value),
            usd(position.debt_value),
            usd(position.equity_value),
            leverage
        ]);
    }
    if table.is_empty() {
        println!("No open farm positions.");
    } else {
        table.printstd();
    }
}
