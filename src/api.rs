//! Thin client for the public Polymarket data API.
//!
//! One GET per operation, fixed per-request timeout, no retries. Non-2xx
//! statuses surface as errors so callers can apply their degrade-to-empty
//! policy at the call site.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use crate::DATA_API_BASE;
use crate::types::{
    Activity, ActivitySortBy, ActivityType, LeaderboardCategory, LeaderboardEntry, OrderBy,
    PortfolioValue, Position, PositionSortBy, Side, SortDirection, TimePeriod, TokenHolders,
    Trade, TradedCount,
};

/// Timeout for scalar endpoints (`/value`, `/traded`).
const SCALAR_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for list endpoints.
const LIST_TIMEOUT: Duration = Duration::from_secs(15);

/// Timeout for the large taker-only trade fetch used by trade analysis.
const BULK_TIMEOUT: Duration = Duration::from_secs(20);

/// The leaderboard endpoint caps `limit` at 50.
pub const LEADERBOARD_MAX_LIMIT: u32 = 50;

/// The holders endpoint caps `limit` at 20 per outcome token.
pub const HOLDERS_MAX_LIMIT: u32 = 20;

/// Parameters for `/positions`. `user` must already be normalized.
#[derive(Debug, Clone)]
pub struct PositionsQuery {
    pub user: String,
    pub limit: u32,
    pub sort_by: PositionSortBy,
    pub sort_direction: SortDirection,
    /// `Some(false)` → active only, `Some(true)` → claimable payouts only,
    /// `None` → everything.
    pub redeemable: Option<bool>,
    pub size_threshold: Option<f64>,
}

impl PositionsQuery {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            limit: 20,
            sort_by: PositionSortBy::Current,
            sort_direction: SortDirection::Desc,
            redeemable: None,
            size_threshold: None,
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("user", self.user.clone()),
            ("limit", self.limit.to_string()),
            ("sortBy", self.sort_by.as_str().to_string()),
            ("sortDirection", self.sort_direction.as_str().to_string()),
        ];
        if let Some(redeemable) = self.redeemable {
            params.push(("redeemable", redeemable.to_string()));
        }
        if let Some(threshold) = self.size_threshold {
            params.push(("sizeThreshold", threshold.to_string()));
        }
        params
    }
}

/// Parameters for `/closed-positions`.
#[derive(Debug, Clone)]
pub struct ClosedPositionsQuery {
    pub user: String,
    pub limit: u32,
    pub sort_by: PositionSortBy,
    pub sort_direction: SortDirection,
}

impl ClosedPositionsQuery {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            limit: 50,
            sort_by: PositionSortBy::RealizedPnl,
            sort_direction: SortDirection::Desc,
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("user", self.user.clone()),
            ("limit", self.limit.to_string()),
            ("sortBy", self.sort_by.as_str().to_string()),
            ("sortDirection", self.sort_direction.as_str().to_string()),
        ]
    }
}

/// Parameters for `/trades`.
#[derive(Debug, Clone)]
pub struct TradesQuery {
    pub user: String,
    pub limit: u32,
    pub side: Option<Side>,
    /// Condition id filter.
    pub market: Option<String>,
    /// Exclude maker fills; used for win/loss trade analysis.
    pub taker_only: bool,
}

impl TradesQuery {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            limit: 50,
            side: None,
            market: None,
            taker_only: false,
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("user", self.user.clone()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(side) = self.side {
            params.push(("side", side.as_str().to_string()));
        }
        if let Some(market) = &self.market {
            params.push(("market", market.clone()));
        }
        if self.taker_only {
            params.push(("takerOnly", "true".to_string()));
        }
        params
    }
}

/// Parameters for `/activity`.
#[derive(Debug, Clone)]
pub struct ActivityQuery {
    pub user: String,
    pub limit: u32,
    pub offset: u32,
    pub sort_by: ActivitySortBy,
    pub sort_direction: SortDirection,
    /// Comma-joined on the wire when non-empty.
    pub types: Vec<ActivityType>,
    pub side: Option<Side>,
}

impl ActivityQuery {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            limit: 50,
            offset: 0,
            sort_by: ActivitySortBy::Timestamp,
            sort_direction: SortDirection::Desc,
            types: Vec::new(),
            side: None,
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("user", self.user.clone()),
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
            ("sortBy", self.sort_by.as_str().to_string()),
            ("sortDirection", self.sort_direction.as_str().to_string()),
        ];
        if !self.types.is_empty() {
            let joined = self
                .types
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(",");
            params.push(("type", joined));
        }
        if let Some(side) = self.side {
            params.push(("side", side.as_str().to_string()));
        }
        params
    }
}

/// Parameters for `/v1/leaderboard`.
#[derive(Debug, Clone)]
pub struct LeaderboardQuery {
    pub category: LeaderboardCategory,
    pub time_period: TimePeriod,
    pub order_by: OrderBy,
    pub limit: u32,
    /// Point lookup by username; takes precedence over `user`.
    pub user_name: Option<String>,
    /// Point lookup by normalized wallet address.
    pub user: Option<String>,
}

impl Default for LeaderboardQuery {
    fn default() -> Self {
        Self {
            category: LeaderboardCategory::Overall,
            time_period: TimePeriod::Day,
            order_by: OrderBy::Pnl,
            limit: 25,
            user_name: None,
            user: None,
        }
    }
}

impl LeaderboardQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("category", self.category.as_str().to_string()),
            ("timePeriod", self.time_period.as_str().to_string()),
            ("orderBy", self.order_by.as_str().to_string()),
            ("limit", self.limit.min(LEADERBOARD_MAX_LIMIT).to_string()),
        ];
        if let Some(user_name) = &self.user_name {
            params.push(("userName", user_name.clone()));
        } else if let Some(user) = &self.user {
            params.push(("user", user.clone()));
        }
        params
    }
}

/// Client for the data API. Cheap to clone; holds only the reqwest client
/// and the base URL.
#[derive(Debug, Clone)]
pub struct DataClient {
    http: reqwest::Client,
    base: String,
}

impl Default for DataClient {
    fn default() -> Self {
        Self::new(DATA_API_BASE)
    }
}

impl DataClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
        timeout: Duration,
    ) -> Result<T> {
        let url = format!("{}{}", self.base, path);
        let resp = self
            .http
            .get(&url)
            .query(params)
            .timeout(timeout)
            .send()
            .await
            .with_context(|| format!("GET {path} failed"))?
            .error_for_status()
            .with_context(|| format!("GET {path} returned an error status"))?;
        let body = resp
            .json()
            .await
            .with_context(|| format!("GET {path} returned malformed JSON"))?;
        Ok(body)
    }

    /// Total current value of the user's positions (`/value`).
    ///
    /// The endpoint responds with an array holding a single object; an empty
    /// array means no positions, so the value is 0.
    pub async fn portfolio_value(&self, user: &str) -> Result<f64> {
        let params = [("user", user.to_string())];
        let rows: Vec<PortfolioValue> = self.get_json("/value", &params, SCALAR_TIMEOUT).await?;
        let value = rows.first().map(|r| r.value).unwrap_or(0.0);
        debug!("Portfolio value for {user}: {value}");
        Ok(value)
    }

    /// Open positions for a user (`/positions`).
    pub async fn positions(&self, query: &PositionsQuery) -> Result<Vec<Position>> {
        let positions: Vec<Position> = self
            .get_json("/positions", &query.params(), LIST_TIMEOUT)
            .await?;
        debug!("Fetched {} positions", positions.len());
        Ok(positions)
    }

    /// Fully closed positions with realized P&L (`/closed-positions`).
    pub async fn closed_positions(&self, query: &ClosedPositionsQuery) -> Result<Vec<Position>> {
        let positions: Vec<Position> = self
            .get_json("/closed-positions", &query.params(), LIST_TIMEOUT)
            .await?;
        debug!("Fetched {} closed positions", positions.len());
        Ok(positions)
    }

    /// Trade history (`/trades`).
    pub async fn trades(&self, query: &TradesQuery) -> Result<Vec<Trade>> {
        let timeout = if query.taker_only {
            BULK_TIMEOUT
        } else {
            LIST_TIMEOUT
        };
        let trades: Vec<Trade> = self.get_json("/trades", &query.params(), timeout).await?;
        debug!("Fetched {} trades", trades.len());
        Ok(trades)
    }

    /// Number of distinct markets the user has traded (`/traded`).
    pub async fn markets_traded(&self, user: &str) -> Result<u64> {
        let params = [("user", user.to_string())];
        let count: TradedCount = self.get_json("/traded", &params, SCALAR_TIMEOUT).await?;
        Ok(count.traded)
    }

    /// Full activity feed including splits, merges, redeems and rewards
    /// (`/activity`).
    pub async fn activity(&self, query: &ActivityQuery) -> Result<Vec<Activity>> {
        let activities: Vec<Activity> = self
            .get_json("/activity", &query.params(), LIST_TIMEOUT)
            .await?;
        debug!("Fetched {} activity entries", activities.len());
        Ok(activities)
    }

    /// Trader rankings (`/v1/leaderboard`).
    pub async fn leaderboard(&self, query: &LeaderboardQuery) -> Result<Vec<LeaderboardEntry>> {
        let entries: Vec<LeaderboardEntry> = self
            .get_json("/v1/leaderboard", &query.params(), LIST_TIMEOUT)
            .await?;
        debug!("Fetched {} leaderboard entries", entries.len());
        Ok(entries)
    }

    /// Top holders per outcome token for a market (`/holders`).
    pub async fn holders(&self, market: &str, limit: u32) -> Result<Vec<TokenHolders>> {
        let params = [
            ("market", market.to_string()),
            ("limit", limit.min(HOLDERS_MAX_LIMIT).to_string()),
        ];
        let tokens: Vec<TokenHolders> = self.get_json("/holders", &params, LIST_TIMEOUT).await?;
        debug!("Fetched holders for {} tokens", tokens.len());
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn positions_query_omits_optional_params() {
        let q = PositionsQuery::new("0xabc");
        let params = q.params();
        assert_eq!(value_of(&params, "sortBy"), Some("CURRENT"));
        assert_eq!(value_of(&params, "sortDirection"), Some("DESC"));
        assert_eq!(value_of(&params, "redeemable"), None);
        assert_eq!(value_of(&params, "sizeThreshold"), None);
    }

    #[test]
    fn positions_query_redeemable_is_lowercase_bool() {
        let mut q = PositionsQuery::new("0xabc");
        q.redeemable = Some(false);
        assert_eq!(value_of(&q.params(), "redeemable"), Some("false"));
        q.redeemable = Some(true);
        assert_eq!(value_of(&q.params(), "redeemable"), Some("true"));
    }

    #[test]
    fn trades_query_filters() {
        let mut q = TradesQuery::new("0xabc");
        q.side = Some(Side::Buy);
        q.taker_only = true;
        q.market = Some("0xcond".to_string());
        let params = q.params();
        assert_eq!(value_of(&params, "side"), Some("BUY"));
        assert_eq!(value_of(&params, "takerOnly"), Some("true"));
        assert_eq!(value_of(&params, "market"), Some("0xcond"));
    }

    #[test]
    fn activity_query_joins_types() {
        let mut q = ActivityQuery::new("0xabc");
        q.types = vec![ActivityType::Trade, ActivityType::Redeem];
        assert_eq!(value_of(&q.params(), "type"), Some("TRADE,REDEEM"));
    }

    #[test]
    fn leaderboard_query_caps_limit() {
        let q = LeaderboardQuery {
            limit: 500,
            ..Default::default()
        };
        assert_eq!(value_of(&q.params(), "limit"), Some("50"));
    }

    #[test]
    fn leaderboard_username_wins_over_user() {
        let q = LeaderboardQuery {
            user_name: Some("noctus".to_string()),
            user: Some("0xabc".to_string()),
            ..Default::default()
        };
        let params = q.params();
        assert_eq!(value_of(&params, "userName"), Some("noctus"));
        assert_eq!(value_of(&params, "user"), None);
    }
}
