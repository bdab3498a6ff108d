//! Comprehensive trader profile: portfolio value, P&L breakdown, win rate,
//! trading volume, top positions and recent trades, from five endpoints.

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use polymarket_data_tools::api::{ClosedPositionsQuery, DataClient, PositionsQuery, TradesQuery};
use polymarket_data_tools::display::{format_pnl, format_percentage, format_usd, truncate};
use polymarket_data_tools::ids::normalize_address;
use polymarket_data_tools::stats::{profitability, trade_flow};
use polymarket_data_tools::types::PositionSortBy;

#[derive(Parser)]
#[command(name = "analyze-trader", about = "Comprehensive Polymarket trader analysis")]
struct Args {
    /// Wallet address (0x...)
    #[arg(long)]
    address: String,

    /// Number of top positions to display
    #[arg(long, default_value_t = 5)]
    top_positions: usize,
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

    println!("{}", "=".repeat(100));
    println!("COMPREHENSIVE TRADER ANALYSIS");
    println!("{}", "=".repeat(100));
    println!();
    println!("🔍 Analyzing trader {address}...");
    println!();

    let client = DataClient::default();

    let portfolio_value = match client.portfolio_value(&address).await {
        Ok(value) => value,
        Err(e) => {
            warn!("Failed to fetch portfolio value: {e}");
            0.0
        }
    };

    let mut positions_query = PositionsQuery::new(&address);
    positions_query.limit = (args.top_positions * 2) as u32;
    positions_query.sort_by = PositionSortBy::CashPnl;
    let positions = match client.positions(&positions_query).await {
        Ok(positions) => positions,
        Err(e) => {
            warn!("Failed to fetch positions: {e}");
            Vec::new()
        }
    };

    let closed_query = ClosedPositionsQuery::new(&address);
    let closed_positions = match client.closed_positions(&closed_query).await {
        Ok(positions) => positions,
        Err(e) => {
            warn!("Failed to fetch closed positions: {e}");
            Vec::new()
        }
    };

    let mut trades_query = TradesQuery::new(&address);
    trades_query.limit = 100;
    let trades = match client.trades(&trades_query).await {
        Ok(trades) => trades,
        Err(e) => {
            warn!("Failed to fetch trades: {e}");
            Vec::new()
        }
    };

    let markets_count = match client.markets_traded(&address).await {
        Ok(count) => count,
        Err(e) => {
            warn!("Failed to fetch markets traded: {e}");
            0
        }
    };

    let stats = profitability(&positions, &closed_positions);
    let flow = trade_flow(&trades);

    // --- Portfolio summary ---
    println!("📊 PORTFOLIO SUMMARY");
    println!("{}", "-".repeat(100));

    let verdict = if stats.total_pnl > 0.0 {
        "✅ PROFITABLE"
    } else if stats.total_pnl < 0.0 {
        "❌ IN LOSS"
    } else {
        "⚖️  BREAK EVEN"
    };
    println!("Status: {verdict}");
    println!("TOTAL P&L: {}", format_pnl(stats.total_pnl));
    println!();

    println!("Total Portfolio Value: ${}", format_usd(portfolio_value));
    println!("Active Positions: {}", stats.active_count);
    println!("Closed Positions: {}", stats.closed_count);
    println!("Markets Traded: {markets_count}");

    println!("\n💰 P&L Breakdown:");
    println!(
        "  Unrealized P&L: {} (from active positions)",
        format_pnl(stats.unrealized_pnl)
    );
    println!(
        "  Realized P&L:   {} (from closed positions)",
        format_pnl(stats.realized_pnl)
    );
    println!("\n📊 Win/Loss Statistics:");
    println!(
        "  Active - Winning: {} | Losing: {}",
        stats.active.winning, stats.active.losing
    );
    println!(
        "  Closed - Winning: {} | Losing: {}",
        stats.closed.winning, stats.closed.losing
    );
    println!("  Overall Win Rate: {:.1}%", stats.win_rate());

    // --- Trading activity ---
    println!("\n\n📈 TRADING ACTIVITY");
    println!("{}", "-".repeat(100));
    println!("Total Trades: {}", trades.len());
    println!(
        "  Buy Trades: {} (${})",
        flow.buy_count,
        format_usd(flow.buy_volume)
    );
    println!(
        "  Sell Trades: {} (${})",
        flow.sell_count,
        format_usd(flow.sell_volume)
    );
    println!("  Total Volume: ${}", format_usd(flow.total_volume()));

    // --- Top positions ---
    let top_positions = &positions[..positions.len().min(args.top_positions)];
    if !top_positions.is_empty() {
        println!("\n\n💼 TOP {} POSITIONS (by P&L)", top_positions.len());
        println!("{}", "-".repeat(100));

        for (i, pos) in top_positions.iter().enumerate() {
            println!("\n{}. {}", i + 1, pos.title);
            println!("   Outcome: {}", pos.outcome);
            println!(
                "   Size: {} shares @ ${:.4}",
                format_usd(pos.size),
                pos.avg_price
            );
            println!("   Current: ${}", format_usd(pos.current_value));
            println!(
                "   P&L: {} ({})",
                format_pnl(pos.cash_pnl),
                format_percentage(pos.percent_pnl)
            );
        }
    }

    // --- Recent trades ---
    if !trades.is_empty() {
        let recent = &trades[..trades.len().min(10)];
        println!(
            "\n\n📋 RECENT TRADING ACTIVITY (Last {} trades)",
            recent.len()
        );
        println!("{}", "-".repeat(100));

        for (i, trade) in recent.iter().enumerate() {
            let n = i + 1;
            let time_str = if trade.timestamp != 0 {
                chrono::DateTime::from_timestamp(trade.timestamp, 0)
                    .map(|dt| dt.format("%m/%d %H:%M").to_string())
                    .unwrap_or_else(|| "N/A".to_string())
            } else {
                "N/A".to_string()
            };
            let outcome = if trade.outcome.is_empty() { "N/A" } else { &trade.outcome };
            println!(
                "{n:2}. {time_str} | {} {:4} | {:>10} @ ${:.4} | {outcome:3}",
                trade.side.marker(),
                trade.side.as_str(),
                format_usd(trade.size),
                trade.price
            );
            if n == 1 || n % 5 == 0 {
                println!("     {}...", truncate(&trade.title, 70));
            }
        }
    }

    println!("\n{}", "=".repeat(100));
    println!("Analysis complete!");

    Ok(())
}
