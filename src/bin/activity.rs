//! Full activity feed for a wallet: trades plus splits, merges, redeems,
//! rewards, conversions and maker rebates.

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use polymarket_data_tools::api::{ActivityQuery, DataClient};
use polymarket_data_tools::display::{format_timestamp, format_usd, short_hash, truncate};
use polymarket_data_tools::ids::normalize_address;
use polymarket_data_tools::stats::activity_summary;
use polymarket_data_tools::types::{Activity, ActivitySortBy, ActivityType, Side, SortDirection};

#[derive(Parser)]
#[command(name = "activity", about = "Complete Polymarket activity history for a wallet")]
struct Args {
    /// Wallet address (0x...)
    #[arg(long)]
    address: String,

    /// Max activities to fetch (max: 500)
    #[arg(long, default_value_t = 50)]
    limit: u32,

    /// Pagination offset
    #[arg(long, default_value_t = 0)]
    offset: u32,

    /// Filter by activity types (comma-separated)
    #[arg(long, value_enum, value_delimiter = ',')]
    types: Vec<ActivityType>,

    /// Filter trades by side
    #[arg(long, value_enum)]
    side: Option<Side>,

    /// Sort field
    #[arg(long, value_enum, default_value_t = ActivitySortBy::Timestamp)]
    sort: ActivitySortBy,

    /// Sort direction
    #[arg(long, value_enum, default_value_t = SortDirection::Desc)]
    direction: SortDirection,
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

    println!("🔍 Fetching activity for {address}...");
    if !args.types.is_empty() {
        let names: Vec<&str> = args.types.iter().map(|t| t.as_str()).collect();
        println!("   Filter: {}", names.join(", "));
    }
    if let Some(side) = args.side {
        println!("   Side: {}", side.as_str());
    }

    let client = DataClient::default();
    let mut query = ActivityQuery::new(&address);
    query.limit = args.limit;
    query.offset = args.offset;
    query.sort_by = args.sort;
    query.sort_direction = args.direction;
    query.types = args.types.clone();
    query.side = args.side;

    let activities = match client.activity(&query).await {
        Ok(activities) => activities,
        Err(e) => {
            warn!("Failed to fetch activity: {e}");
            Vec::new()
        }
    };

    if activities.is_empty() {
        println!("No activity found.");
        return Ok(());
    }

    display_activity(&activities);

    // Pagination is left to the user; a full page suggests more rows exist.
    if activities.len() as u32 >= args.limit {
        println!(
            "\n💡 Tip: There may be more activities. Use --offset {} to see more.",
            args.offset + args.limit
        );
    }

    Ok(())
}

fn display_activity(activities: &[Activity]) {
    let summary = activity_summary(activities);

    println!("\n📊 Activity Summary");
    println!("{}", "-".repeat(100));
    println!("Total Activities: {}", activities.len());
    println!("\nBreakdown by Type:");
    let mut counts: Vec<_> = summary.counts.iter().collect();
    counts.sort_by(|a, b| b.1.cmp(a.1));
    for (kind, count) in counts {
        println!("  {} {}: {}", kind.marker(), kind.as_str(), count);
    }
    if summary.trade_volume > 0.0 {
        println!("\nTotal Trade Volume: ${}", format_usd(summary.trade_volume));
    }

    println!("\n{}", "=".repeat(100));
    println!("ACTIVITY HISTORY");
    println!("{}", "=".repeat(100));

    for (i, activity) in activities.iter().enumerate() {
        let n = i + 1;
        println!(
            "\n{}. {} {} | {}",
            n,
            activity.kind.marker(),
            activity.kind.as_str(),
            format_timestamp(activity.timestamp)
        );
        println!("   Market: {}", truncate(&activity.title, 70));
        if !activity.outcome.is_empty() {
            println!("   Outcome: {}", activity.outcome);
        }

        match activity.kind {
            ActivityType::Trade => {
                let side = activity.side.unwrap_or(Side::Unknown);
                println!(
                    "   {} {}: {} shares @ ${:.4}",
                    side.marker(),
                    side.as_str(),
                    format_usd(activity.size),
                    activity.price
                );
                println!("   Value: ${}", format_usd(activity.size * activity.price));
            }
            ActivityType::Split | ActivityType::Merge => {
                println!("   Tokens: {}", format_usd(activity.size));
                println!("   USDC: ${}", format_usd(activity.usdc_size));
            }
            ActivityType::Redeem => {
                println!("   Redeemed: {} tokens", format_usd(activity.size));
                println!("   Received: ${} USDC", format_usd(activity.usdc_size));
            }
            ActivityType::Reward | ActivityType::MakerRebate => {
                println!("   Amount: ${}", format_usd(activity.usdc_size));
            }
            ActivityType::Conversion | ActivityType::Unknown => {}
        }

        if let Some(tx_hash) = &activity.transaction_hash {
            println!("   TX: {}", short_hash(tx_hash));
        }

        // Separator every 5 items for readability
        if n % 5 == 0 && n < activities.len() {
            println!("   {}", "-".repeat(95));
        }
    }
}
