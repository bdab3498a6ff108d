//! Typed records for data API responses plus the enumerated query values.
//!
//! Response structs mirror the wire JSON (camelCase). Fields the API may omit
//! carry `#[serde(default)]` and fall back to zero / empty / `None`, matching
//! what the endpoints actually return for sparse records.

use clap::ValueEnum;
use serde::Deserialize;

/// Trade side, as returned by `/trades` and `/activity` and accepted as a
/// query filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
    /// Anything the API adds later; never offered on the CLI.
    #[serde(other)]
    #[value(skip)]
    Unknown,
}

impl Default for Side {
    fn default() -> Self {
        Side::Unknown
    }
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
            Side::Unknown => "UNKNOWN",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Side::Buy => "🟢",
            Side::Sell => "🔴",
            Side::Unknown => "⚪",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Sort fields accepted by `/positions` and `/closed-positions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PositionSortBy {
    Current,
    CashPnl,
    PercentPnl,
    Title,
    Price,
    Tokens,
    RealizedPnl,
    Timestamp,
}

impl PositionSortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionSortBy::Current => "CURRENT",
            PositionSortBy::CashPnl => "CASHPNL",
            PositionSortBy::PercentPnl => "PERCENTPNL",
            PositionSortBy::Title => "TITLE",
            PositionSortBy::Price => "PRICE",
            PositionSortBy::Tokens => "TOKENS",
            PositionSortBy::RealizedPnl => "REALIZEDPNL",
            PositionSortBy::Timestamp => "TIMESTAMP",
        }
    }
}

/// Sort fields accepted by `/activity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActivitySortBy {
    Timestamp,
    Tokens,
    Cash,
}

impl ActivitySortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivitySortBy::Timestamp => "TIMESTAMP",
            ActivitySortBy::Tokens => "TOKENS",
            ActivitySortBy::Cash => "CASH",
        }
    }
}

/// Leaderboard category filter for `/v1/leaderboard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LeaderboardCategory {
    Overall,
    Politics,
    Sports,
    Crypto,
    Culture,
    Finance,
    Tech,
    Economics,
    Weather,
    Mentions,
}

impl LeaderboardCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaderboardCategory::Overall => "OVERALL",
            LeaderboardCategory::Politics => "POLITICS",
            LeaderboardCategory::Sports => "SPORTS",
            LeaderboardCategory::Crypto => "CRYPTO",
            LeaderboardCategory::Culture => "CULTURE",
            LeaderboardCategory::Finance => "FINANCE",
            LeaderboardCategory::Tech => "TECH",
            LeaderboardCategory::Economics => "ECONOMICS",
            LeaderboardCategory::Weather => "WEATHER",
            LeaderboardCategory::Mentions => "MENTIONS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimePeriod {
    Day,
    Week,
    Month,
    All,
}

impl TimePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimePeriod::Day => "DAY",
            TimePeriod::Week => "WEEK",
            TimePeriod::Month => "MONTH",
            TimePeriod::All => "ALL",
        }
    }
}

/// Leaderboard ranking metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderBy {
    Pnl,
    Vol,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Pnl => "PNL",
            OrderBy::Vol => "VOL",
        }
    }
}

/// Entry kinds in the `/activity` feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Trade,
    Split,
    Merge,
    Redeem,
    Reward,
    Conversion,
    MakerRebate,
    #[serde(other)]
    #[value(skip)]
    Unknown,
}

impl Default for ActivityType {
    fn default() -> Self {
        ActivityType::Unknown
    }
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Trade => "TRADE",
            ActivityType::Split => "SPLIT",
            ActivityType::Merge => "MERGE",
            ActivityType::Redeem => "REDEEM",
            ActivityType::Reward => "REWARD",
            ActivityType::Conversion => "CONVERSION",
            ActivityType::MakerRebate => "MAKER_REBATE",
            ActivityType::Unknown => "UNKNOWN",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            ActivityType::Trade => "📊",
            ActivityType::Split => "✂️",
            ActivityType::Merge => "🔗",
            ActivityType::Redeem => "💰",
            ActivityType::Reward => "🎁",
            ActivityType::Conversion => "🔄",
            ActivityType::MakerRebate => "💵",
            ActivityType::Unknown => "📌",
        }
    }
}

/// A position row from `/positions` or `/closed-positions`.
///
/// Open positions carry unrealized P&L in `cash_pnl`; closed rows carry the
/// final result in `realized_pnl`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub condition_id: String,
    #[serde(default)]
    pub outcome: String,
    #[serde(default)]
    pub opposite_outcome: String,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub avg_price: f64,
    #[serde(default)]
    pub cur_price: f64,
    #[serde(default)]
    pub initial_value: f64,
    #[serde(default)]
    pub current_value: f64,
    #[serde(default)]
    pub cash_pnl: f64,
    #[serde(default)]
    pub percent_pnl: f64,
    #[serde(default)]
    pub realized_pnl: f64,
    #[serde(default)]
    pub percent_realized_pnl: f64,
    #[serde(default)]
    pub redeemable: bool,
    #[serde(default)]
    pub mergeable: bool,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// A fill from `/trades`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub condition_id: String,
    #[serde(default)]
    pub outcome: String,
    #[serde(default)]
    pub side: Side,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub transaction_hash: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub pseudonym: Option<String>,
}

impl Trade {
    /// Notional value of the fill.
    pub fn value(&self) -> f64 {
        self.size * self.price
    }

    /// Display name of the counterparty, if the profile exposes one.
    pub fn trader_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.pseudonym.as_deref())
    }
}

/// One entry from the `/activity` feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type", default)]
    pub kind: ActivityType,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub outcome: String,
    #[serde(default)]
    pub side: Option<Side>,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub usdc_size: f64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub transaction_hash: Option<String>,
}

/// One row from `/v1/leaderboard`. `rank` is a string on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub pnl: f64,
    #[serde(default)]
    pub vol: f64,
    #[serde(default)]
    pub proxy_wallet: Option<String>,
    #[serde(default)]
    pub x_username: Option<String>,
    #[serde(default)]
    pub verified_badge: bool,
}

impl LeaderboardEntry {
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or("Anonymous")
    }
}

/// `/holders` groups holders per outcome token.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenHolders {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub holders: Vec<Holder>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holder {
    #[serde(default)]
    pub proxy_wallet: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub outcome_index: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub pseudonym: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub display_username_public: bool,
}

impl Holder {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.pseudonym.as_deref())
            .unwrap_or("Anonymous")
    }
}

/// `/value` returns an array with a single entry of this shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValue {
    #[serde(default)]
    pub value: f64,
}

/// `/traded` returns the count of distinct markets the user has traded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradedCount {
    #[serde(default)]
    pub traded: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn position_defaults_for_missing_fields() {
        let pos: Position = serde_json::from_value(json!({
            "title": "Will it rain?",
            "outcome": "Yes"
        }))
        .unwrap();
        assert_eq!(pos.title, "Will it rain?");
        assert_eq!(pos.cash_pnl, 0.0);
        assert_eq!(pos.current_value, 0.0);
        assert!(!pos.redeemable);
        assert!(pos.end_date.is_none());
    }

    #[test]
    fn trade_side_and_value() {
        let trade: Trade = serde_json::from_value(json!({
            "title": "T",
            "side": "BUY",
            "size": 10.0,
            "price": 0.4,
            "timestamp": 1700000000
        }))
        .unwrap();
        assert_eq!(trade.side, Side::Buy);
        assert!((trade.value() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn trade_row_without_side_still_deserializes() {
        // A single sparse row must not sink the whole page
        let trades: Vec<Trade> = serde_json::from_value(json!([
            { "title": "A", "side": "SELL", "size": 1.0, "price": 0.5 },
            { "title": "B", "size": 2.0, "price": 0.3 }
        ]))
        .unwrap();
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].side, Side::Sell);
        assert_eq!(trades[1].side, Side::Unknown);
    }

    #[test]
    fn activity_row_without_type_still_deserializes() {
        let activities: Vec<Activity> = serde_json::from_value(json!([
            { "type": "TRADE", "size": 1.0, "price": 0.5 },
            { "size": 2.0, "usdcSize": 2.0 }
        ]))
        .unwrap();
        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].kind, ActivityType::Trade);
        assert_eq!(activities[1].kind, ActivityType::Unknown);
    }

    #[test]
    fn unexpected_side_maps_to_unknown() {
        let trade: Trade = serde_json::from_value(json!({
            "title": "T",
            "side": "LIQUIDATE"
        }))
        .unwrap();
        assert_eq!(trade.side, Side::Unknown);
    }

    #[test]
    fn activity_type_from_wire() {
        let act: Activity = serde_json::from_value(json!({
            "type": "MAKER_REBATE",
            "usdcSize": 1.25
        }))
        .unwrap();
        assert_eq!(act.kind, ActivityType::MakerRebate);
        assert_eq!(act.kind.as_str(), "MAKER_REBATE");
    }

    #[test]
    fn leaderboard_rank_is_string() {
        let entry: LeaderboardEntry = serde_json::from_value(json!({
            "rank": "1",
            "pnl": 10.5,
            "vol": 100.0,
            "verifiedBadge": true
        }))
        .unwrap();
        assert_eq!(entry.rank, "1");
        assert_eq!(entry.display_name(), "Anonymous");
        assert!(entry.verified_badge);
    }

    #[test]
    fn holder_name_falls_back_to_pseudonym() {
        let holder: Holder = serde_json::from_value(json!({
            "proxyWallet": "0xabc",
            "amount": 50.0,
            "pseudonym": "Quiet-Fox"
        }))
        .unwrap();
        assert_eq!(holder.display_name(), "Quiet-Fox");
    }
}
