//! Total portfolio value for a wallet, with optional position/market counts.
//!
//! GET /value, plus /positions and /traded when `--detailed` is set.

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use polymarket_data_tools::api::{DataClient, PositionsQuery};
use polymarket_data_tools::display::format_usd;
use polymarket_data_tools::ids::normalize_address;

#[derive(Parser)]
#[command(name = "portfolio", about = "Current portfolio value for a Polymarket wallet")]
struct Args {
    /// Wallet address (0x...)
    #[arg(long)]
    address: String,

    /// Show detailed stats (positions count, markets traded)
    #[arg(long)]
    detailed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let address = normalize_address(&args.address)?;
    let client = DataClient::default();

    println!("💰 Portfolio for {address}");
    println!("{}", "=".repeat(80));
    println!();

    let value = match client.portfolio_value(&address).await {
        Ok(v) => v,
        Err(e) => {
            warn!("Failed to fetch portfolio value: {e}");
            println!("Error fetching portfolio value.");
            return Ok(());
        }
    };

    println!("Total Portfolio Value: ${}", format_usd(value));

    if args.detailed {
        println!("\nFetching additional stats...");

        let mut query = PositionsQuery::new(&address);
        query.limit = 500;
        let positions_count = match client.positions(&query).await {
            Ok(positions) => positions.len(),
            Err(e) => {
                warn!("Failed to fetch positions: {e}");
                0
            }
        };
        println!("Active Positions: {positions_count}");

        let markets_count = match client.markets_traded(&address).await {
            Ok(count) => count,
            Err(e) => {
                warn!("Failed to fetch markets traded: {e}");
                0
            }
        };
        println!("Markets Traded: {markets_count}");

        if positions_count > 0 {
            let avg_position = value / positions_count as f64;
            println!("Average Position Size: ${}", format_usd(avg_position));
        }
    }

    println!("\nNote: Value represents current market value of all positions.");
    println!("Use --detailed flag for more statistics.");

    Ok(())
}
