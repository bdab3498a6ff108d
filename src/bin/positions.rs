//! Open positions for a wallet with P&L tracking.
//!
//! The `redeemable` query parameter controls which rows come back:
//! `--active-only` sends redeemable=false, `--include-payouts` sends
//! redeemable=true, and the default sends neither (all positions).

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use polymarket_data_tools::api::{DataClient, PositionsQuery};
use polymarket_data_tools::display::{format_pnl, format_percentage, format_usd};
use polymarket_data_tools::ids::normalize_address;
use polymarket_data_tools::stats::position_totals;
use polymarket_data_tools::types::{PositionSortBy, SortDirection};

#[derive(Parser)]
#[command(name = "positions", about = "Open Polymarket positions for a wallet")]
struct Args {
    /// Wallet address (0x...)
    #[arg(long)]
    address: String,

    /// Max positions to fetch (max: 500)
    #[arg(long, default_value_t = 20)]
    limit: u32,

    /// Sort field
    #[arg(long, value_enum, default_value_t = PositionSortBy::Current)]
    sort: PositionSortBy,

    /// Sort direction
    #[arg(long, value_enum, default_value_t = SortDirection::Desc)]
    direction: SortDirection,

    /// Show only active positions (exclude redeemable/closed)
    #[arg(long, conflicts_with = "include_payouts")]
    active_only: bool,

    /// Show only positions with claimable payouts (redeemable=true)
    #[arg(long, conflicts_with = "active_only")]
    include_payouts: bool,
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

    let (redeemable, filter_description) = if args.active_only {
        (Some(false), "ACTIVE ONLY")
    } else if args.include_payouts {
        (Some(true), "CLAIMABLE PAYOUTS ONLY")
    } else {
        (None, "ALL POSITIONS")
    };

    println!("💼 Positions for {address} ({filter_description})");
    println!("{}", "=".repeat(100));
    println!();

    let client = DataClient::default();
    let mut query = PositionsQuery::new(&address);
    query.limit = args.limit;
    query.sort_by = args.sort;
    query.sort_direction = args.direction;
    query.redeemable = redeemable;

    let positions = match client.positions(&query).await {
        Ok(positions) => positions,
        Err(e) => {
            warn!("Failed to fetch positions: {e}");
            Vec::new()
        }
    };

    if positions.is_empty() {
        println!("No positions found or error occurred.");
        return Ok(());
    }

    let totals = position_totals(&positions);
    println!("Total Positions: {}", positions.len());
    println!("Total Value: ${}", format_usd(totals.total_value));
    println!("Total Unrealized P&L: {}", format_pnl(totals.total_pnl));
    println!();
    println!("{}", "=".repeat(100));

    for (i, position) in positions.iter().enumerate() {
        println!("\n{}. {}", i + 1, position.title);
        println!("   Market: {}", if position.slug.is_empty() { "N/A" } else { &position.slug });
        let opposite = if position.opposite_outcome.is_empty() {
            "N/A"
        } else {
            &position.opposite_outcome
        };
        println!("   Outcome: {} (vs {opposite})", position.outcome);

        println!("\n   Size: {} shares", format_usd(position.size));
        println!("   Avg Price: ${:.4}", position.avg_price);
        println!("   Current Price: ${:.4}", position.cur_price);

        println!("\n   Initial Value: ${}", format_usd(position.initial_value));
        println!("   Current Value: ${}", format_usd(position.current_value));
        println!(
            "   Unrealized P&L: {} ({})",
            format_pnl(position.cash_pnl),
            format_percentage(position.percent_pnl)
        );

        if position.realized_pnl != 0.0 {
            println!(
                "   Realized P&L: {} ({})",
                format_pnl(position.realized_pnl),
                format_percentage(position.percent_realized_pnl)
            );
        }

        if position.redeemable {
            println!("\n   Status: ✓ Redeemable");
        } else if position.mergeable {
            println!("\n   Status: ⚡ Mergeable");
        }

        if let Some(end_date) = &position.end_date {
            println!("   Ends: {end_date}");
        }
    }

    Ok(())
}
