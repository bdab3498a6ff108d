//! Top position holders for a market, grouped per outcome token.

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use polymarket_data_tools::api::DataClient;
use polymarket_data_tools::display::{format_usd, short_hash, truncate};
use polymarket_data_tools::ids::normalize_condition_id;
use polymarket_data_tools::stats::holder_total;

#[derive(Parser)]
#[command(name = "holders", about = "Top holders for a Polymarket market")]
struct Args {
    /// Market condition ID (0x... 66 chars)
    #[arg(long)]
    market: String,

    /// Max holders per outcome (max: 20)
    #[arg(long, default_value_t = 10)]
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
    let condition_id = normalize_condition_id(&args.market)?;

    println!("👥 Top Holders for Market");
    println!("Condition ID: {condition_id}");
    println!("{}", "=".repeat(100));
    println!();

    let client = DataClient::default();
    let holders_data = match client.holders(&condition_id, args.limit).await {
        Ok(tokens) => tokens,
        Err(e) => {
            warn!("Failed to fetch holders: {e}");
            Vec::new()
        }
    };

    if holders_data.is_empty() {
        println!("No holders found.");
        return Ok(());
    }

    for token_data in &holders_data {
        let holders = &token_data.holders;
        if holders.is_empty() {
            continue;
        }

        // Outcome index 0 is the Yes token on binary markets
        let outcome_name = if holders[0].outcome_index == 0 { "Yes" } else { "No" };

        println!(
            "\n{outcome_name} Holders (Token: {})",
            short_hash(&token_data.token)
        );
        println!("{}", "-".repeat(100));

        let total_amount = holder_total(holders);

        for (i, holder) in holders.iter().enumerate() {
            let percentage = if total_amount > 0.0 {
                holder.amount / total_amount * 100.0
            } else {
                0.0
            };

            println!("\n{:2}. {}", i + 1, holder.display_name());
            println!("    Wallet: {}", holder.proxy_wallet);
            println!(
                "    Amount: {} shares ({percentage:.2}% of {outcome_name})",
                format_usd(holder.amount)
            );

            if let Some(bio) = &holder.bio {
                let bio_short = if bio.chars().count() > 80 {
                    format!("{}...", truncate(bio, 80))
                } else {
                    bio.clone()
                };
                println!("    Bio: {bio_short}");
            }
            if holder.display_username_public {
                println!("    Public Profile: ✓");
            }
        }

        println!(
            "\nTotal {outcome_name} shares tracked: {}",
            format_usd(total_amount)
        );
    }

    println!("\n{}", "=".repeat(100));
    println!("Note: Only shows top holders. Total may not represent entire market.");

    Ok(())
}
