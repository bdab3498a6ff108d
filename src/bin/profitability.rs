//! Is this trader profitable or in loss?
//!
//! Combines unrealized P&L from active positions with realized P&L from
//! closed positions. The process exit code mirrors the verdict so shell
//! scripts can branch on it: 0 when profitable, 1 otherwise.

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use polymarket_data_tools::api::{ClosedPositionsQuery, DataClient, PositionsQuery};
use polymarket_data_tools::display::{format_pnl, format_percentage, truncate};
use polymarket_data_tools::ids::normalize_address;
use polymarket_data_tools::stats::{ProfitabilityStats, profitability, top_by};
use polymarket_data_tools::types::Position;

#[derive(Parser)]
#[command(name = "profitability", about = "Analyze Polymarket trader profitability")]
struct Args {
    /// Wallet address (0x...)
    #[arg(long)]
    address: String,

    /// Show detailed position breakdown
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

    println!("🔍 Analyzing profitability for {address}...");
    println!();

    let client = DataClient::default();

    let mut active_query = PositionsQuery::new(&address);
    active_query.limit = 500;
    active_query.redeemable = Some(false);
    let active = match client.positions(&active_query).await {
        Ok(positions) => positions,
        Err(e) => {
            warn!("Failed to fetch active positions: {e}");
            Vec::new()
        }
    };

    let closed_query = ClosedPositionsQuery::new(&address);
    let closed = match client.closed_positions(&closed_query).await {
        Ok(positions) => positions,
        Err(e) => {
            warn!("Failed to fetch closed positions: {e}");
            Vec::new()
        }
    };

    let stats = profitability(&active, &closed);
    display_profitability(&stats);

    if args.detailed {
        display_top_positions(&active, &closed);
    }

    println!("\n{}", "=".repeat(100));

    // Verdict doubles as the exit code for scripting
    std::process::exit(if stats.is_profitable() { 0 } else { 1 });
}

fn display_profitability(stats: &ProfitabilityStats) {
    println!("{}", "=".repeat(100));
    println!("TRADER PROFITABILITY ANALYSIS");
    println!("{}", "=".repeat(100));
    println!();

    let (emoji, verdict) = if stats.total_pnl > 0.0 {
        ("🚀", "✅ PROFITABLE")
    } else if stats.total_pnl < 0.0 {
        ("📉", "❌ IN LOSS")
    } else {
        ("➡️", "⚖️  BREAK EVEN")
    };
    println!("{emoji}  {verdict}");
    println!("\nTotal P&L: {}", format_pnl(stats.total_pnl));
    println!();
    println!("{}", "-".repeat(100));

    println!("\n📊 P&L BREAKDOWN");
    println!("{}", "-".repeat(100));
    println!(
        "Unrealized P&L (Active Positions):  {}",
        format_pnl(stats.unrealized_pnl)
    );
    println!(
        "Realized P&L (Closed Positions):    {}",
        format_pnl(stats.realized_pnl)
    );
    println!("{}", "─".repeat(40));
    println!(
        "TOTAL P&L:                           {}",
        format_pnl(stats.total_pnl)
    );

    println!("\n\n📈 POSITION STATISTICS");
    println!("{}", "-".repeat(100));
    println!("Total Positions Traded: {}", stats.total_positions());
    println!("  ├─ Active: {}", stats.active_count);
    println!("  └─ Closed: {}", stats.closed_count);
    println!();
    println!("Winning Positions: {} 📈", stats.total_winning());
    println!("  ├─ Active: {}", stats.active.winning);
    println!("  └─ Closed: {}", stats.closed.winning);
    println!();
    println!("Losing Positions: {} 📉", stats.total_losing());
    println!("  ├─ Active: {}", stats.active.losing);
    println!("  └─ Closed: {}", stats.closed.losing);
    println!();
    println!("Win Rate: {:.1}%", stats.win_rate());
}

fn display_top_positions(active: &[Position], closed: &[Position]) {
    println!("\n\n💼 TOP 10 ACTIVE POSITIONS (by P&L)");
    println!("{}", "-".repeat(100));
    for (i, pos) in top_by(active, 10, |p| p.cash_pnl).iter().enumerate() {
        let status = if pos.cash_pnl > 0.0 { "📈" } else { "📉" };
        println!("{:2}. {status} {}", i + 1, truncate(&pos.title, 60));
        println!(
            "     Unrealized: {} ({})",
            format_pnl(pos.cash_pnl),
            format_percentage(pos.percent_pnl)
        );
        if pos.realized_pnl != 0.0 {
            println!(
                "     Realized (partial sales): {}",
                format_pnl(pos.realized_pnl)
            );
        }
    }

    println!("\n\n💰 TOP 10 CLOSED POSITIONS (by Realized P&L)");
    println!("{}", "-".repeat(100));
    for (i, pos) in top_by(closed, 10, |p| p.realized_pnl).iter().enumerate() {
        let status = if pos.realized_pnl > 0.0 { "📈" } else { "📉" };
        println!("{:2}. {status} {}", i + 1, truncate(&pos.title, 60));
        println!("     Realized P&L: {}", format_pnl(pos.realized_pnl));
    }
}
