//! Win/loss breakdown for a trader: resolved bets won and lost, open
//! positions currently up or down, and markets where they bought high and
//! sold low.

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use polymarket_data_tools::api::{ClosedPositionsQuery, DataClient, PositionsQuery, TradesQuery};
use polymarket_data_tools::display::truncate;
use polymarket_data_tools::ids::normalize_address;
use polymarket_data_tools::stats::{FailedTrade, failed_trades, top_by, win_loss};
use polymarket_data_tools::types::{Position, PositionSortBy};

#[derive(Parser)]
#[command(name = "trade-analysis", about = "Analyze trader win/loss performance")]
struct Args {
    /// Wallet address (0x...)
    #[arg(long)]
    address: String,

    /// Max trades to analyze
    #[arg(long, default_value_t = 500)]
    limit: u32,
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

    println!("🔍 Analyzing trader: {address}");
    println!("⏳ Fetching data...\n");

    let client = DataClient::default();

    // Taker fills only: maker fills would double-count the round trips
    let mut trades_query = TradesQuery::new(&address);
    trades_query.limit = args.limit;
    trades_query.taker_only = true;
    let trades = match client.trades(&trades_query).await {
        Ok(trades) => trades,
        Err(e) => {
            warn!("Failed to fetch trades: {e}");
            Vec::new()
        }
    };

    let mut closed_query = ClosedPositionsQuery::new(&address);
    closed_query.sort_by = PositionSortBy::Timestamp;
    let closed = match client.closed_positions(&closed_query).await {
        Ok(positions) => positions,
        Err(e) => {
            warn!("Failed to fetch closed positions: {e}");
            Vec::new()
        }
    };

    let mut open_query = PositionsQuery::new(&address);
    open_query.limit = 100;
    open_query.redeemable = Some(false);
    let open = match client.positions(&open_query).await {
        Ok(positions) => positions,
        Err(e) => {
            warn!("Failed to fetch open positions: {e}");
            Vec::new()
        }
    };

    let failed = failed_trades(&trades);
    display_analysis(&address, &trades, &closed, &open, &failed);

    Ok(())
}

fn display_analysis(
    address: &str,
    trades: &[polymarket_data_tools::types::Trade],
    closed: &[Position],
    open: &[Position],
    failed: &[FailedTrade],
) {
    println!("{}", "=".repeat(100));
    println!("COMPREHENSIVE TRADE WIN/LOSS ANALYSIS");
    println!("{}", "=".repeat(100));
    println!("\nTrader: {address}\n");

    // --- 1. Closed positions (realized P&L) ---
    println!("{}", "=".repeat(100));
    println!("1. CLOSED POSITIONS (Realized P&L)");
    println!("{}", "=".repeat(100));

    let closed_counts = win_loss(closed, |p| p.realized_pnl);
    let total_won: f64 = closed
        .iter()
        .filter(|p| p.realized_pnl > 0.0)
        .map(|p| p.realized_pnl)
        .sum();
    let total_lost: f64 = closed
        .iter()
        .filter(|p| p.realized_pnl < 0.0)
        .map(|p| p.realized_pnl)
        .sum();
    let net_realized = total_won + total_lost;

    println!("\nTotal Closed Positions: {}", closed.len());
    println!(
        "  ✅ WON:  {} positions (+${total_won:.2})",
        closed_counts.winning
    );
    println!(
        "  ❌ LOST: {} positions (${total_lost:.2})",
        closed_counts.losing
    );
    println!("  📊 NET:  ${net_realized:+.2}");
    if !closed.is_empty() {
        let win_rate = closed_counts.winning as f64 / closed.len() as f64 * 100.0;
        println!("  🎯 Win Rate: {win_rate:.1}%");
    }

    let lost_bets: Vec<Position> = closed
        .iter()
        .filter(|p| p.realized_pnl < 0.0)
        .cloned()
        .collect();
    if !lost_bets.is_empty() {
        println!("\n❌ TOP 10 LOST BETS (worst losses):");
        println!("{}", "-".repeat(100));
        for (i, bet) in top_by(&lost_bets, 10, |p| -p.realized_pnl).iter().enumerate() {
            println!(
                "{:2}. ${:+7.2} | Avg Buy: ${:.3} | {}",
                i + 1,
                bet.realized_pnl,
                bet.avg_price,
                truncate(&bet.title, 60)
            );
        }
    }

    let won_bets: Vec<Position> = closed
        .iter()
        .filter(|p| p.realized_pnl > 0.0)
        .cloned()
        .collect();
    if !won_bets.is_empty() {
        println!("\n✅ TOP 10 WON BETS (best wins):");
        println!("{}", "-".repeat(100));
        for (i, bet) in top_by(&won_bets, 10, |p| p.realized_pnl).iter().enumerate() {
            println!(
                "{:2}. ${:+7.2} | Avg Buy: ${:.3} | {}",
                i + 1,
                bet.realized_pnl,
                bet.avg_price,
                truncate(&bet.title, 60)
            );
        }
    }

    // --- 2. Open positions (unrealized P&L) ---
    println!("\n{}", "=".repeat(100));
    println!("2. OPEN POSITIONS (Unrealized P&L)");
    println!("{}", "=".repeat(100));

    let open_counts = win_loss(open, |p| p.cash_pnl);
    let unrealized_gain: f64 = open
        .iter()
        .filter(|p| p.cash_pnl > 0.0)
        .map(|p| p.cash_pnl)
        .sum();
    let unrealized_loss: f64 = open
        .iter()
        .filter(|p| p.cash_pnl < 0.0)
        .map(|p| p.cash_pnl)
        .sum();
    let net_unrealized = unrealized_gain + unrealized_loss;

    println!("\nTotal Open Positions: {}", open.len());
    println!(
        "  📈 Currently Winning: {} (+${unrealized_gain:.2})",
        open_counts.winning
    );
    println!(
        "  📉 Currently Losing:  {} (${unrealized_loss:.2})",
        open_counts.losing
    );
    println!("  📊 NET Unrealized:    ${net_unrealized:+.2}");

    let losing_open: Vec<Position> = open
        .iter()
        .filter(|p| p.cash_pnl < 0.0)
        .cloned()
        .collect();
    if !losing_open.is_empty() {
        println!("\n📉 BIGGEST UNREALIZED LOSSES (top 10):");
        println!("{}", "-".repeat(100));
        for (i, pos) in top_by(&losing_open, 10, |p| -p.cash_pnl).iter().enumerate() {
            println!(
                "{:2}. ${:+7.2} | {:.0} shares | Buy ${:.3} → Now ${:.3} | {}",
                i + 1,
                pos.cash_pnl,
                pos.size,
                pos.avg_price,
                pos.cur_price,
                truncate(&pos.title, 50)
            );
        }
    }

    // --- 3. Failed trades (bought high, sold low) ---
    println!("\n{}", "=".repeat(100));
    println!("3. FAILED TRADES (Bought High, Sold Low)");
    println!("{}", "=".repeat(100));

    if failed.is_empty() {
        println!("\nNo failed trades found (or insufficient trade data)");
    } else {
        println!(
            "\nMarkets where trader BOUGHT HIGH and SOLD LOW: {}",
            failed.len()
        );
        println!("{}", "-".repeat(100));
        for (i, trade) in failed.iter().take(15).enumerate() {
            println!(
                "{:2}. Loss: ${:.2} | Buy ${:.3} → Sell ${:.3} | {}",
                i + 1,
                trade.loss,
                trade.avg_buy,
                trade.avg_sell,
                truncate(&trade.title, 55)
            );
        }
    }

    // --- Overall summary ---
    println!("\n{}", "=".repeat(100));
    println!("OVERALL SUMMARY");
    println!("{}", "=".repeat(100));

    let total_pnl = net_realized + net_unrealized;
    println!("\n💰 TOTAL P&L:");
    println!("  Realized (closed):   ${net_realized:+.2}");
    println!("  Unrealized (open):   ${net_unrealized:+.2}");
    println!("  {}", "─".repeat(30));
    println!("  TOTAL:               ${total_pnl:+.2}");

    let verdict = if total_pnl > 0.0 {
        "✅ PROFITABLE"
    } else if total_pnl < 0.0 {
        "❌ IN LOSS"
    } else {
        "⚖️  BREAK EVEN"
    };
    println!("\n🎯 VERDICT: {verdict}");

    let resolved = closed_counts.winning + closed_counts.losing;
    if resolved > 0 {
        let win_rate = closed_counts.winning as f64 / resolved as f64 * 100.0;
        println!(
            "📊 Win Rate (Closed): {win_rate:.1}% ({}W / {}L)",
            closed_counts.winning, closed_counts.losing
        );
    }

    if trades.is_empty() {
        println!("\nNote: no taker trades available for round-trip analysis.");
    }

    println!("\n{}", "=".repeat(100));
}
