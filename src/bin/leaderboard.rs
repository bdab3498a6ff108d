//! Top traders by P&L or volume across categories and time windows.

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use polymarket_data_tools::api::{DataClient, LeaderboardQuery};
use polymarket_data_tools::display::{format_pnl, format_usd};
use polymarket_data_tools::stats::leaderboard_totals;
use polymarket_data_tools::types::{LeaderboardCategory, OrderBy, TimePeriod};

#[derive(Parser)]
#[command(name = "leaderboard", about = "Polymarket trader leaderboard")]
struct Args {
    /// Leaderboard category
    #[arg(long, value_enum, default_value_t = LeaderboardCategory::Overall)]
    category: LeaderboardCategory,

    /// Time period
    #[arg(long, value_enum, default_value_t = TimePeriod::Day)]
    period: TimePeriod,

    /// Order by P&L or volume
    #[arg(long, value_enum, default_value_t = OrderBy::Pnl)]
    order: OrderBy,

    /// Number of traders (max: 50)
    #[arg(long, default_value_t = 25)]
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

    let metric = match args.order {
        OrderBy::Pnl => "P&L",
        OrderBy::Vol => "Volume",
    };
    println!(
        "🏆 {} Leaderboard - {} (Top by {metric})",
        args.category.as_str(),
        args.period.as_str()
    );
    println!("{}", "=".repeat(100));
    println!();

    let client = DataClient::default();
    let query = LeaderboardQuery {
        category: args.category,
        time_period: args.period,
        order_by: args.order,
        limit: args.limit,
        ..Default::default()
    };

    let leaderboard = match client.leaderboard(&query).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Failed to fetch leaderboard: {e}");
            Vec::new()
        }
    };

    if leaderboard.is_empty() {
        println!("No traders found on leaderboard.");
        return Ok(());
    }

    for trader in &leaderboard {
        let medal = match trader.rank.as_str() {
            "1" => "🥇 ",
            "2" => "🥈 ",
            "3" => "🥉 ",
            _ => "",
        };
        let rank = if trader.rank.is_empty() { "?" } else { &trader.rank };

        println!("{medal}#{rank:>3}. {}", trader.display_name());
        println!("       P&L: {}", format_pnl(trader.pnl));
        println!("       Volume: ${}", format_usd(trader.vol));

        if let Some(wallet) = &trader.proxy_wallet {
            println!("       Wallet: {wallet}");
        }
        if let Some(x_username) = &trader.x_username {
            println!("       X: {x_username}");
        }
        if trader.verified_badge {
            println!("       ✓ Verified");
        }
        println!();
    }

    println!("Showing top {} traders", leaderboard.len());

    let (total_pnl, total_volume) = leaderboard_totals(&leaderboard);
    println!("\nCombined Stats:");
    println!("Total P&L: {}", format_pnl(total_pnl));
    println!("Total Volume: ${}", format_usd(total_volume));

    Ok(())
}
