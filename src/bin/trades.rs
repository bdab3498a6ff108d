//! Trade history for a wallet: fills with prices, sizes and timestamps.

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use polymarket_data_tools::api::{DataClient, TradesQuery};
use polymarket_data_tools::display::{format_timestamp, format_usd, short_hash};
use polymarket_data_tools::ids::normalize_address;
use polymarket_data_tools::stats::trade_flow;
use polymarket_data_tools::types::Side;

#[derive(Parser)]
#[command(name = "trades", about = "Polymarket trade history for a wallet")]
struct Args {
    /// Wallet address (0x...)
    #[arg(long)]
    address: String,

    /// Max trades to fetch (max: 10000)
    #[arg(long, default_value_t = 50)]
    limit: u32,

    /// Filter by trade side
    #[arg(long, value_enum)]
    side: Option<Side>,
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

    let filter_text = match args.side {
        Some(side) => format!(" ({} only)", side.as_str()),
        None => String::new(),
    };
    println!("📈 Trading History for {address}{filter_text}");
    println!("{}", "=".repeat(100));
    println!();

    let client = DataClient::default();
    let mut query = TradesQuery::new(&address);
    query.limit = args.limit;
    query.side = args.side;

    let trades = match client.trades(&query).await {
        Ok(trades) => trades,
        Err(e) => {
            warn!("Failed to fetch trades: {e}");
            Vec::new()
        }
    };

    if trades.is_empty() {
        println!("No trading history.");
        return Ok(());
    }

    let flow = trade_flow(&trades);
    println!("Total Trades: {}", trades.len());
    println!("Buys: {} (${})", flow.buy_count, format_usd(flow.buy_volume));
    println!("Sells: {} (${})", flow.sell_count, format_usd(flow.sell_volume));
    println!();
    println!("{}", "=".repeat(100));

    for (i, trade) in trades.iter().enumerate() {
        println!(
            "\n{}. {} {}: {}",
            i + 1,
            trade.side.marker(),
            trade.side.as_str(),
            trade.title
        );
        println!("   Market: {}", if trade.slug.is_empty() { "N/A" } else { &trade.slug });
        println!("   Outcome: {}", if trade.outcome.is_empty() { "N/A" } else { &trade.outcome });

        println!("\n   Size: {} shares", format_usd(trade.size));
        println!("   Price: ${:.4}", trade.price);
        println!("   Total: ${}", format_usd(trade.value()));

        if trade.timestamp != 0 {
            println!("   Time: {}", format_timestamp(trade.timestamp));
        }
        if let Some(tx_hash) = &trade.transaction_hash {
            println!("   TX: {}", short_hash(tx_hash));
        }
        if let Some(name) = trade.trader_name() {
            println!("   Trader: {name}");
        }
    }

    Ok(())
}
