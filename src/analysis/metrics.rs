use serde::Serialize;

use crate::models::TradeSet;

/// Aggregate statistics over a filtered trade set. A pure function of the
/// set; the empty case is guarded upstream but still yields zeroed values
/// rather than NaN.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryMetrics {
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub average_pl: f64,
    /// Percentage in [0, 100].
    pub win_rate: f64,
    pub gross_profit: f64,
    pub gross_loss: f64,
    /// `f64::INFINITY` when there are no losing trades.
    pub profit_factor: f64,
    pub max_profit: f64,
    pub max_loss: f64,
}

impl SummaryMetrics {
    pub fn from_trades(trades: &TradeSet) -> Self {
        let total_trades = trades.len();

        // A trade with zero net profit counts as a loss.
        let wins: Vec<f64> = trades.net_profits().filter(|p| *p > 0.0).collect();
        let losses: Vec<f64> = trades.net_profits().filter(|p| *p <= 0.0).collect();

        let win_rate = if total_trades > 0 {
            wins.len() as f64 / total_trades as f64 * 100.0
        } else {
            0.0
        };

        let total_net: f64 = trades.net_profits().sum();
        let average_pl = if total_trades > 0 {
            total_net / total_trades as f64
        } else {
            0.0
        };

        let gross_profit: f64 = wins.iter().sum();
        let gross_loss = losses.iter().sum::<f64>().abs();
        let profit_factor = if gross_loss > 0.0 {
            gross_profit / gross_loss
        } else {
            f64::INFINITY
        };

        let max_profit = trades.net_profits().fold(f64::NEG_INFINITY, f64::max);
        let max_loss = trades.net_profits().fold(f64::INFINITY, f64::min);

        SummaryMetrics {
            total_trades,
            winning_trades: wins.len(),
            losing_trades: losses.len(),
            average_pl,
            win_rate,
            gross_profit,
            gross_loss,
            profit_factor,
            max_profit: if total_trades > 0 { max_profit } else { 0.0 },
            max_loss: if total_trades > 0 { max_loss } else { 0.0 },
        }
    }
}
