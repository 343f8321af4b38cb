use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single executed trade with a recorded profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub symbol: String,
    pub profit: f64,
    pub commission: f64,
    pub update_time: DateTime<Utc>,
}

impl Trade {
    /// Profit after commission. Commissions are recorded as negative
    /// amounts in the export, so this is a plain sum.
    pub fn net_profit(&self) -> f64 {
        self.profit + self.commission
    }
}

/// Ordered set of trades that passed filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TradeSet {
    trades: Vec<Trade>,
}

impl TradeSet {
    pub fn new(trades: Vec<Trade>) -> Self {
        Self { trades }
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trade> {
        self.trades.iter()
    }

    pub fn net_profits(&self) -> impl Iterator<Item = f64> + '_ {
        self.trades.iter().map(Trade::net_profit)
    }
}

impl<'a> IntoIterator for &'a TradeSet {
    type Item = &'a Trade;
    type IntoIter = std::slice::Iter<'a, Trade>;

    fn into_iter(self) -> Self::IntoIter {
        self.trades.iter()
    }
}
