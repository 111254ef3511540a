/*
[INPUT]:  CLI arguments, YAML configuration file, IMX_PRIVATE_KEY
[OUTPUT]: JSON results of Immutable X operations on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI commands, flags, or startup flow
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use imx_cli::{CliConfig, parse_fee, parse_order_status};
use imx_client::{
    ImxApiClient, ImxClient, KeyDeriver, ListAssetsQuery, ListBalancesQuery, ListOrdersQuery,
    ListTradesQuery,
};

#[derive(Parser, Debug)]
#[command(name = "imx-cli", version, about = "Immutable X command-line client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the derived Stark key pair (public part) and derivation path
    Keys,
    /// Register the Ethereum/Stark key pairing off-chain
    Register,
    /// Transfer tokens to another user
    Transfer {
        #[arg(long)]
        to: String,
        #[arg(long, default_value = "ETH")]
        token: String,
        /// Integer amount in the token's smallest unit (wei for ETH)
        #[arg(long)]
        amount: String,
    },
    /// Fill an existing order
    Trade {
        #[arg(long = "order-id")]
        order_id: i64,
        /// Repeatable ADDRESS:PERCENT
        #[arg(long = "fee", value_name = "ADDR:PCT")]
        fees: Vec<String>,
    },
    /// Token balances (defaults to the configured account)
    Balances {
        #[arg(long)]
        owner: Option<String>,
    },
    Assets {
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        collection: Option<String>,
        #[arg(long = "page-size")]
        page_size: Option<u32>,
    },
    Orders {
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long = "page-size")]
        page_size: Option<u32>,
    },
    Trades {
        #[arg(long = "page-size")]
        page_size: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = load_config(&args.config_path)?;
    info!(
        config_path = %args.config_path.display(),
        environment = ?config.environment,
        "configuration loaded"
    );

    match args.command {
        Command::Keys => {
            let client = connect(&config).await?;
            let path = KeyDeriver::new(config.derivation.clone())
                .account_path(client.eth_address())
                .context("build derivation path")?;
            print_json(&serde_json::json!({
                "eth_address": client.eth_address(),
                "stark_public_key": client.stark_public_key(),
                "derivation_path": path,
            }))
        }
        Command::Register => {
            let client = connect(&config).await?;
            let tx_hash = client.register().await.context("register user")?;
            print_json(&serde_json::json!({ "tx_hash": tx_hash }))
        }
        Command::Transfer { to, token, amount } => {
            let client = connect(&config).await?;
            let transfer_id = client
                .transfer(&to, &token, &amount)
                .await
                .context("create transfer")?;
            print_json(&serde_json::json!({ "transfer_id": transfer_id }))
        }
        Command::Trade { order_id, fees } => {
            let fees = fees
                .iter()
                .map(|raw| parse_fee(raw))
                .collect::<Result<Vec<_>>>()?;
            let fees = (!fees.is_empty()).then_some(fees);

            let client = connect(&config).await?;
            let trade_id = client
                .trade(order_id, fees)
                .await
                .context("create trade")?;
            print_json(&serde_json::json!({ "trade_id": trade_id }))
        }
        Command::Balances { owner } => {
            let page = match owner {
                Some(owner) => api(&config)?
                    .list_balances(&owner, &ListBalancesQuery::default())
                    .await,
                None => connect(&config).await?.balances().await,
            }
            .context("list balances")?;
            print_json(&page)
        }
        Command::Assets {
            user,
            collection,
            page_size,
        } => {
            let query = ListAssetsQuery {
                user,
                collection,
                page_size,
                ..Default::default()
            };
            let page = api(&config)?
                .list_assets(&query)
                .await
                .context("list assets")?;
            print_json(&page)
        }
        Command::Orders {
            user,
            status,
            page_size,
        } => {
            let status = status.as_deref().map(parse_order_status).transpose()?;
            let query = ListOrdersQuery {
                user,
                status,
                page_size,
                ..Default::default()
            };
            let page = api(&config)?
                .list_orders(&query)
                .await
                .context("list orders")?;
            print_json(&page)
        }
        Command::Trades { page_size } => {
            let query = ListTradesQuery {
                page_size,
                ..Default::default()
            };
            let page = api(&config)?
                .list_trades(&query)
                .await
                .context("list trades")?;
            print_json(&page)
        }
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &Path) -> Result<CliConfig> {
    let path_str = path.to_str().context("config path must be valid utf-8")?;
    CliConfig::from_file(path_str).context("load config")
}

/// Client holding the configured key; derives the Stark key, no network
async fn connect(config: &CliConfig) -> Result<ImxClient> {
    let private_key = config.resolve_private_key()?;
    let client = ImxClient::with_options(&private_key, config.client_options())
        .await
        .context("derive keys")?;
    info!(eth_address = client.eth_address(), "client ready");
    Ok(client)
}

/// Unauthenticated client for read-only commands
fn api(config: &CliConfig) -> Result<ImxApiClient> {
    config
        .client_options()
        .build_api()
        .context("build api client")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("render output")?;
    println!("{rendered}");
    Ok(())
}
