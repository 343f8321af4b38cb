use chrono::Datelike;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::models::TradeSet;

/// One ISO (year, week) bucket of trading activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyBucket {
    pub year: i32,
    pub iso_week: u32,
    pub trade_count: usize,
    pub net_profit: f64,
}

/// Group trades by ISO calendar week and return the buckets most recent
/// first. The ISO year is used for the key, so trades near a year boundary
/// land in the week's year, not the date's.
pub fn aggregate(trades: &TradeSet) -> Vec<WeeklyBucket> {
    let mut buckets: HashMap<(i32, u32), WeeklyBucket> = HashMap::new();

    for trade in trades {
        let iso = trade.update_time.iso_week();
        let key = (iso.year(), iso.week());
        let entry = buckets.entry(key).or_insert_with(|| WeeklyBucket {
            year: key.0,
            iso_week: key.1,
            trade_count: 0,
            net_profit: 0.0,
        });
        entry.trade_count += 1;
        entry.net_profit += trade.net_profit();
    }

    let mut weeks: Vec<WeeklyBucket> = buckets.into_values().collect();
    weeks.sort_by(|a, b| (b.year, b.iso_week).cmp(&(a.year, a.iso_week)));

    debug!("Aggregated {} trades into {} weeks", trades.len(), weeks.len());
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::make_trades;

    #[test]
    fn same_week_collapses_to_one_bucket() {
        // 2026-02-16 is a Monday; all three land in ISO week 8 of 2026.
        let trades = make_trades(&[
            (100.0, 0.0, "2026-02-16 10:00:00"),
            (-50.0, 0.0, "2026-02-18 10:00:00"),
            (20.0, 0.0, "2026-02-20 10:00:00"),
        ]);
        let weeks = aggregate(&trades);
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].year, 2026);
        assert_eq!(weeks[0].iso_week, 8);
        assert_eq!(weeks[0].trade_count, 3);
        assert!((weeks[0].net_profit - 70.0).abs() < 1e-9);
    }

    #[test]
    fn different_weeks_sort_most_recent_first() {
        let trades = make_trades(&[
            (10.0, 0.0, "2026-02-09 10:00:00"),
            (20.0, 0.0, "2026-02-16 10:00:00"),
        ]);
        let weeks = aggregate(&trades);
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].iso_week, 8);
        assert_eq!(weeks[1].iso_week, 7);
        assert!(weeks.iter().all(|w| w.trade_count == 1));
    }

    #[test]
    fn buckets_partition_the_trade_set() {
        let trades = make_trades(&[
            (10.0, -1.0, "2026-01-05 10:00:00"),
            (-5.0, 0.0, "2026-01-12 10:00:00"),
            (7.5, 0.0, "2026-01-13 10:00:00"),
            (3.0, -0.5, "2026-02-02 10:00:00"),
        ]);
        let weeks = aggregate(&trades);

        let bucket_count: usize = weeks.iter().map(|w| w.trade_count).sum();
        assert_eq!(bucket_count, trades.len());

        let bucket_sum: f64 = weeks.iter().map(|w| w.net_profit).sum();
        let total: f64 = trades.net_profits().sum();
        assert!((bucket_sum - total).abs() < 1e-9);
    }

    #[test]
    fn year_boundary_uses_iso_year() {
        // 2024-12-30 and 2025-01-02 are both ISO week 1 of 2025.
        let trades = make_trades(&[
            (10.0, 0.0, "2024-12-30 10:00:00"),
            (20.0, 0.0, "2025-01-02 10:00:00"),
        ]);
        let weeks = aggregate(&trades);
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].year, 2025);
        assert_eq!(weeks[0].iso_week, 1);
        assert_eq!(weeks[0].trade_count, 2);
    }

    #[test]
    fn sorts_across_year_boundaries() {
        let trades = make_trades(&[
            (1.0, 0.0, "2025-12-20 10:00:00"), // 2025-W51
            (2.0, 0.0, "2026-01-10 10:00:00"), // 2026-W02
            (3.0, 0.0, "2025-06-01 10:00:00"), // 2025-W22
        ]);
        let weeks = aggregate(&trades);
        let keys: Vec<(i32, u32)> = weeks.iter().map(|w| (w.year, w.iso_week)).collect();
        assert_eq!(keys, vec![(2026, 2), (2025, 51), (2025, 22)]);
    }
}
