//! Linear aggregation over API records: sums, win/loss partitions,
//! sort-and-slice. Everything operates on in-memory slices and is pure.

use std::collections::{BTreeMap, HashMap};

use crate::types::{Activity, ActivityType, Holder, LeaderboardEntry, Position, Side, Trade};

/// Value and unrealized P&L totals over a set of open positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionTotals {
    pub total_value: f64,
    pub total_pnl: f64,
}

/// Sum `currentValue` and `cashPnl`; both are 0 for an empty slice.
pub fn position_totals(positions: &[Position]) -> PositionTotals {
    PositionTotals {
        total_value: positions.iter().map(|p| p.current_value).sum(),
        total_pnl: positions.iter().map(|p| p.cash_pnl).sum(),
    }
}

/// Counts of positions partitioned by the sign of a P&L field.
///
/// Exactly-zero entries land in neither bucket, so
/// `winning + losing + zero == total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WinLoss {
    pub winning: usize,
    pub losing: usize,
    pub zero: usize,
}

impl WinLoss {
    pub fn total(&self) -> usize {
        self.winning + self.losing + self.zero
    }
}

pub fn win_loss(positions: &[Position], pnl: impl Fn(&Position) -> f64) -> WinLoss {
    let mut counts = WinLoss::default();
    for pos in positions {
        let value = pnl(pos);
        if value > 0.0 {
            counts.winning += 1;
        } else if value < 0.0 {
            counts.losing += 1;
        } else {
            counts.zero += 1;
        }
    }
    counts
}

/// Combined profitability over active and closed positions.
///
/// Unrealized P&L comes from `cashPnl` on active positions. Realized P&L is
/// the sum of closed `realizedPnl` plus `realizedPnl` already booked on
/// active positions through partial sales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitabilityStats {
    pub unrealized_pnl: f64,
    pub realized_pnl: f64,
    pub total_pnl: f64,
    pub active: WinLoss,
    pub closed: WinLoss,
    pub active_count: usize,
    pub closed_count: usize,
}

impl ProfitabilityStats {
    pub fn total_positions(&self) -> usize {
        self.active_count + self.closed_count
    }

    pub fn total_winning(&self) -> usize {
        self.active.winning + self.closed.winning
    }

    pub fn total_losing(&self) -> usize {
        self.active.losing + self.closed.losing
    }

    /// Winning positions over all positions, as a percentage. 0 when there
    /// are no positions at all.
    pub fn win_rate(&self) -> f64 {
        let total = self.total_positions();
        if total == 0 {
            return 0.0;
        }
        self.total_winning() as f64 / total as f64 * 100.0
    }

    pub fn is_profitable(&self) -> bool {
        self.total_pnl > 0.0
    }
}

pub fn profitability(active: &[Position], closed: &[Position]) -> ProfitabilityStats {
    let unrealized_pnl: f64 = active.iter().map(|p| p.cash_pnl).sum();
    let partial_realized: f64 = active.iter().map(|p| p.realized_pnl).sum();
    let closed_realized: f64 = closed.iter().map(|p| p.realized_pnl).sum();
    let realized_pnl = closed_realized + partial_realized;

    ProfitabilityStats {
        unrealized_pnl,
        realized_pnl,
        total_pnl: unrealized_pnl + realized_pnl,
        active: win_loss(active, |p| p.cash_pnl),
        closed: win_loss(closed, |p| p.realized_pnl),
        active_count: active.len(),
        closed_count: closed.len(),
    }
}

/// Buy/sell counts and notional volumes over a trade list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TradeFlow {
    pub buy_count: usize,
    pub sell_count: usize,
    pub buy_volume: f64,
    pub sell_volume: f64,
}

impl TradeFlow {
    pub fn total_volume(&self) -> f64 {
        self.buy_volume + self.sell_volume
    }
}

pub fn trade_flow(trades: &[Trade]) -> TradeFlow {
    let mut flow = TradeFlow::default();
    for trade in trades {
        match trade.side {
            Side::Buy => {
                flow.buy_count += 1;
                flow.buy_volume += trade.value();
            }
            Side::Sell => {
                flow.sell_count += 1;
                flow.sell_volume += trade.value();
            }
            Side::Unknown => {}
        }
    }
    flow
}

/// A market where the trader bought at a higher average price than they sold.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedTrade {
    pub title: String,
    pub avg_buy: f64,
    pub avg_sell: f64,
    /// `(avg_buy - avg_sell) * min(bought, sold)` — the round-trip loss
    /// estimate on the overlapping size.
    pub loss: f64,
    pub buy_count: usize,
    pub sell_count: usize,
}

/// Group trades by market and flag every market where the average sell price
/// fell below the average buy price. Markets with only buys or only sells are
/// skipped; there is no round trip to judge.
pub fn failed_trades(trades: &[Trade]) -> Vec<FailedTrade> {
    let mut by_market: HashMap<&str, Vec<&Trade>> = HashMap::new();
    for trade in trades {
        if !trade.condition_id.is_empty() {
            by_market.entry(&trade.condition_id).or_default().push(trade);
        }
    }

    let mut failed = Vec::new();
    for trades_in_market in by_market.values() {
        let buys: Vec<&&Trade> = trades_in_market
            .iter()
            .filter(|t| t.side == Side::Buy)
            .collect();
        let sells: Vec<&&Trade> = trades_in_market
            .iter()
            .filter(|t| t.side == Side::Sell)
            .collect();
        if buys.is_empty() || sells.is_empty() {
            continue;
        }

        let avg_buy = buys.iter().map(|t| t.price).sum::<f64>() / buys.len() as f64;
        let avg_sell = sells.iter().map(|t| t.price).sum::<f64>() / sells.len() as f64;
        if avg_sell >= avg_buy {
            continue;
        }

        let total_bought: f64 = buys.iter().map(|t| t.size).sum();
        let total_sold: f64 = sells.iter().map(|t| t.size).sum();
        failed.push(FailedTrade {
            title: trades_in_market[0].title.clone(),
            avg_buy,
            avg_sell,
            loss: (avg_buy - avg_sell) * total_bought.min(total_sold),
            buy_count: buys.len(),
            sell_count: sells.len(),
        });
    }

    // Worst losses first
    failed.sort_by(|a, b| b.loss.partial_cmp(&a.loss).unwrap_or(std::cmp::Ordering::Equal));
    failed
}

/// Per-type counts and TRADE notional volume over an activity feed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActivitySummary {
    pub counts: BTreeMap<ActivityType, usize>,
    pub trade_volume: f64,
}

pub fn activity_summary(activities: &[Activity]) -> ActivitySummary {
    let mut summary = ActivitySummary::default();
    for activity in activities {
        *summary.counts.entry(activity.kind).or_insert(0) += 1;
        if activity.kind == ActivityType::Trade {
            summary.trade_volume += activity.size * activity.price;
        }
    }
    summary
}

/// Combined P&L and volume across leaderboard entries.
pub fn leaderboard_totals(entries: &[LeaderboardEntry]) -> (f64, f64) {
    let pnl = entries.iter().map(|e| e.pnl).sum();
    let vol = entries.iter().map(|e| e.vol).sum();
    (pnl, vol)
}

/// Total shares held across a holder list.
pub fn holder_total(holders: &[Holder]) -> f64 {
    holders.iter().map(|h| h.amount).sum()
}

/// Sort descending by `key` and keep the top `n`. Stable for NaN-free input.
pub fn top_by<T: Clone>(items: &[T], n: usize, key: impl Fn(&T) -> f64) -> Vec<T> {
    let mut sorted: Vec<T> = items.to_vec();
    sorted.sort_by(|a, b| {
        key(b)
            .partial_cmp(&key(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn make_position(cash_pnl: f64, realized_pnl: f64, current_value: f64) -> Position {
        serde_json::from_value(json!({
            "title": "Test market",
            "outcome": "Yes",
            "cashPnl": cash_pnl,
            "realizedPnl": realized_pnl,
            "currentValue": current_value
        }))
        .expect("valid test Position JSON")
    }

    fn make_trade(condition_id: &str, side: &str, size: f64, price: f64) -> Trade {
        serde_json::from_value(json!({
            "title": "Test market",
            "conditionId": condition_id,
            "side": side,
            "size": size,
            "price": price,
            "timestamp": 1700000000
        }))
        .expect("valid test Trade JSON")
    }

    fn make_entry(pnl: f64, vol: f64) -> LeaderboardEntry {
        serde_json::from_value(json!({ "rank": "1", "pnl": pnl, "vol": vol })).unwrap()
    }

    // ── position_totals ────────────────────────────────────────────

    #[test]
    fn totals_empty_is_zero() {
        let totals = position_totals(&[]);
        assert_eq!(totals.total_value, 0.0);
        assert_eq!(totals.total_pnl, 0.0);
    }

    #[test]
    fn totals_sum_fields() {
        let positions = vec![
            make_position(10.0, 0.0, 100.0),
            make_position(-4.0, 0.0, 50.0),
        ];
        let totals = position_totals(&positions);
        assert!(approx_eq(totals.total_value, 150.0));
        assert!(approx_eq(totals.total_pnl, 6.0));
    }

    // ── win_loss ───────────────────────────────────────────────────

    #[test]
    fn win_loss_partition_is_exact() {
        let positions = vec![
            make_position(5.0, 0.0, 0.0),
            make_position(-2.0, 0.0, 0.0),
            make_position(0.0, 0.0, 0.0),
            make_position(1.0, 0.0, 0.0),
        ];
        let counts = win_loss(&positions, |p| p.cash_pnl);
        assert_eq!(counts.winning, 2);
        assert_eq!(counts.losing, 1);
        assert_eq!(counts.zero, 1);
        assert_eq!(counts.total(), positions.len());
    }

    // ── profitability ──────────────────────────────────────────────

    #[test]
    fn profitability_combines_realized_and_unrealized() {
        let active = vec![
            make_position(10.0, 2.0, 100.0), // partial sale booked 2.0
            make_position(-3.0, 0.0, 20.0),
        ];
        let closed = vec![
            make_position(0.0, 15.0, 0.0),
            make_position(0.0, -5.0, 0.0),
        ];
        let stats = profitability(&active, &closed);
        assert!(approx_eq(stats.unrealized_pnl, 7.0));
        assert!(approx_eq(stats.realized_pnl, 12.0)); // 15 - 5 + 2
        assert!(approx_eq(stats.total_pnl, 19.0));
        assert_eq!(stats.active.winning, 1);
        assert_eq!(stats.active.losing, 1);
        assert_eq!(stats.closed.winning, 1);
        assert_eq!(stats.closed.losing, 1);
        assert!(stats.is_profitable());
        assert!(approx_eq(stats.win_rate(), 50.0));
    }

    #[test]
    fn profitability_empty_inputs() {
        let stats = profitability(&[], &[]);
        assert_eq!(stats.total_pnl, 0.0);
        assert_eq!(stats.win_rate(), 0.0);
        assert!(!stats.is_profitable());
    }

    #[test]
    fn profitability_break_even_is_not_profitable() {
        let active = vec![make_position(5.0, 0.0, 0.0), make_position(-5.0, 0.0, 0.0)];
        let stats = profitability(&active, &[]);
        assert_eq!(stats.total_pnl, 0.0);
        assert!(!stats.is_profitable());
    }

    // ── trade_flow ─────────────────────────────────────────────────

    #[test]
    fn trade_flow_splits_sides() {
        let trades = vec![
            make_trade("c1", "BUY", 10.0, 0.5),  // 5.0
            make_trade("c1", "BUY", 4.0, 0.25),  // 1.0
            make_trade("c2", "SELL", 10.0, 0.8), // 8.0
        ];
        let flow = trade_flow(&trades);
        assert_eq!(flow.buy_count, 2);
        assert_eq!(flow.sell_count, 1);
        assert!(approx_eq(flow.buy_volume, 6.0));
        assert!(approx_eq(flow.sell_volume, 8.0));
        assert!(approx_eq(flow.total_volume(), 14.0));
    }

    // ── failed_trades ──────────────────────────────────────────────

    #[test]
    fn failed_trades_flags_buy_high_sell_low() {
        let trades = vec![
            make_trade("c1", "BUY", 100.0, 0.60),
            make_trade("c1", "SELL", 80.0, 0.40),
        ];
        let failed = failed_trades(&trades);
        assert_eq!(failed.len(), 1);
        assert!(approx_eq(failed[0].avg_buy, 0.60));
        assert!(approx_eq(failed[0].avg_sell, 0.40));
        // (0.60 - 0.40) * min(100, 80)
        assert!(approx_eq(failed[0].loss, 16.0));
    }

    #[test]
    fn failed_trades_ignores_profitable_round_trips() {
        let trades = vec![
            make_trade("c1", "BUY", 100.0, 0.40),
            make_trade("c1", "SELL", 100.0, 0.60),
        ];
        assert!(failed_trades(&trades).is_empty());
    }

    #[test]
    fn failed_trades_requires_both_sides() {
        let trades = vec![
            make_trade("c1", "BUY", 100.0, 0.60),
            make_trade("c2", "SELL", 100.0, 0.40),
        ];
        assert!(failed_trades(&trades).is_empty());
    }

    #[test]
    fn failed_trades_sorted_by_loss_desc() {
        let trades = vec![
            make_trade("c1", "BUY", 10.0, 0.60),
            make_trade("c1", "SELL", 10.0, 0.50), // loss 1.0
            make_trade("c2", "BUY", 100.0, 0.60),
            make_trade("c2", "SELL", 100.0, 0.40), // loss 20.0
        ];
        let failed = failed_trades(&trades);
        assert_eq!(failed.len(), 2);
        assert!(failed[0].loss > failed[1].loss);
    }

    // ── activity_summary ───────────────────────────────────────────

    #[test]
    fn activity_summary_counts_and_volume() {
        let activities: Vec<Activity> = serde_json::from_value(json!([
            { "type": "TRADE", "size": 10.0, "price": 0.5 },
            { "type": "TRADE", "size": 4.0, "price": 0.25 },
            { "type": "REDEEM", "size": 50.0, "usdcSize": 50.0 }
        ]))
        .unwrap();
        let summary = activity_summary(&activities);
        assert_eq!(summary.counts[&ActivityType::Trade], 2);
        assert_eq!(summary.counts[&ActivityType::Redeem], 1);
        assert!(approx_eq(summary.trade_volume, 6.0));
    }

    // ── leaderboard_totals ─────────────────────────────────────────

    #[test]
    fn leaderboard_totals_sums_pnl() {
        let entries = vec![
            make_entry(10.0, 100.0),
            make_entry(-5.0, 200.0),
            make_entry(0.0, 50.0),
        ];
        let (pnl, vol) = leaderboard_totals(&entries);
        assert!(approx_eq(pnl, 5.0));
        assert!(approx_eq(vol, 350.0));
    }

    // ── top_by ─────────────────────────────────────────────────────

    #[test]
    fn top_by_sorts_and_slices() {
        let positions = vec![
            make_position(1.0, 0.0, 0.0),
            make_position(9.0, 0.0, 0.0),
            make_position(5.0, 0.0, 0.0),
        ];
        let top = top_by(&positions, 2, |p| p.cash_pnl);
        assert_eq!(top.len(), 2);
        assert!(approx_eq(top[0].cash_pnl, 9.0));
        assert!(approx_eq(top[1].cash_pnl, 5.0));
    }

    #[test]
    fn holder_total_sums_amounts() {
        let holders: Vec<Holder> = serde_json::from_value(json!([
            { "proxyWallet": "0x1", "amount": 100.0 },
            { "proxyWallet": "0x2", "amount": 25.5 }
        ]))
        .unwrap();
        assert!(approx_eq(holder_total(&holders), 125.5));
    }
}
