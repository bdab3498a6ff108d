//! Side-by-side comparison of the `redeemable` query parameter:
//! redeemable=false (active only), redeemable=true (claimable payouts),
//! and no parameter at all (everything).

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use polymarket_data_tools::api::{DataClient, PositionsQuery};
use polymarket_data_tools::display::{format_usd, truncate};
use polymarket_data_tools::ids::normalize_address;
use polymarket_data_tools::stats::position_totals;
use polymarket_data_tools::types::{Position, PositionSortBy};

#[derive(Parser)]
#[command(
    name = "redeemable-modes",
    about = "Compare the redeemable parameter behavior on /positions"
)]
struct Args {
    /// Wallet address (0x...)
    #[arg(long)]
    address: String,
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

    println!("Comparing position queries for: {address}");
    println!("{}", "=".repeat(80));

    println!("\n1️⃣  ACTIVE POSITIONS ONLY (redeemable=false)");
    println!("{}", "-".repeat(80));
    let active = fetch_mode(&client, &address, Some(false)).await;
    println!("Found {} active position(s)", active.len());
    if !active.is_empty() {
        let totals = position_totals(&active);
        println!("Total value: ${}", format_usd(totals.total_value));
        println!("\nSample positions:");
        for pos in active.iter().take(3) {
            println!("  - {}", truncate(&pos.title, 60));
            println!(
                "    Value: ${}, Redeemable: {}",
                format_usd(pos.current_value),
                pos.redeemable
            );
        }
    }

    println!("\n\n2️⃣  CLAIMABLE PAYOUTS (redeemable=true)");
    println!("{}", "-".repeat(80));
    let redeemable = fetch_mode(&client, &address, Some(true)).await;
    println!("Found {} redeemable position(s)", redeemable.len());
    if !redeemable.is_empty() {
        let totals = position_totals(&redeemable);
        println!("Total claimable: ${}", format_usd(totals.total_value));
        println!("\nSample redeemable positions:");
        for pos in redeemable.iter().take(3) {
            println!("  - {}", truncate(&pos.title, 60));
            println!(
                "    Claimable: ${}, Redeemable: {}",
                format_usd(pos.current_value),
                pos.redeemable
            );
        }
    }

    println!("\n\n3️⃣  ALL POSITIONS (no redeemable parameter)");
    println!("{}", "-".repeat(80));
    let all_positions = fetch_mode(&client, &address, None).await;
    println!("Found {} total position(s)", all_positions.len());
    if !all_positions.is_empty() {
        let totals = position_totals(&all_positions);
        let active_count = all_positions.iter().filter(|p| !p.redeemable).count();
        let redeemable_count = all_positions.iter().filter(|p| p.redeemable).count();

        println!("Total value: ${}", format_usd(totals.total_value));
        println!("  - Active: {active_count}");
        println!("  - Redeemable: {redeemable_count}");

        println!("\nBreakdown by status:");
        for pos in all_positions.iter().take(5) {
            let status = if pos.redeemable { "💰 Claimable" } else { "🟢 Active" };
            println!("  {status}: {}", truncate(&pos.title, 50));
            println!("    Value: ${}", format_usd(pos.current_value));
        }
    }

    println!("\n\n{}", "=".repeat(80));
    println!("SUMMARY");
    println!("{}", "=".repeat(80));
    println!(
        "
When to use each parameter:

✅ redeemable=false
   → Get ONLY current active positions
   → Use for: portfolio tracking, active position management
   → Example: \"Show me what I'm currently trading\"

💰 redeemable=true
   → Get positions with UNCLAIMED PAYOUTS from resolved markets
   → Use for: finding money to claim, checking old positions
   → Example: \"Do I have any payouts to claim?\"

🔄 No redeemable parameter (or omitted)
   → Get EVERYTHING (active + redeemable)
   → Use for: complete portfolio view
   → Example: \"Show me all my positions and claimable funds\"
"
    );

    Ok(())
}

async fn fetch_mode(client: &DataClient, address: &str, redeemable: Option<bool>) -> Vec<Position> {
    let mut query = PositionsQuery::new(address);
    query.limit = 100;
    query.sort_by = PositionSortBy::Tokens;
    query.size_threshold = Some(1.0);
    query.redeemable = redeemable;

    match client.positions(&query).await {
        Ok(positions) => positions,
        Err(e) => {
            warn!("Failed to fetch positions (redeemable={redeemable:?}): {e}");
            Vec::new()
        }
    }
}
