use chrono::{DateTime, NaiveDateTime, Utc};

use crate::loader::RawTrade;
use crate::models::{Trade, TradeSet};

/// Build a trade set from (profit, commission, "Y-m-d H:M:S") triples,
/// all on a neutral symbol.
pub fn make_trades(data: &[(f64, f64, &str)]) -> TradeSet {
    let trades: Vec<Trade> = data
        .iter()
        .map(|&(profit, commission, when)| Trade {
            symbol: "EURUSD".to_string(),
            profit,
            commission,
            update_time: parse(when),
        })
        .collect();
    TradeSet::new(trades)
}

/// A raw CSV row as the loader would produce it.
pub fn raw_row(
    symbol: &str,
    profit: Option<f64>,
    commission: Option<f64>,
    update_time: &str,
) -> RawTrade {
    RawTrade {
        symbol: symbol.to_string(),
        profit,
        commission,
        update_time: update_time.to_string(),
    }
}

pub fn default_excluded() -> Vec<String> {
    vec!["XAGUSD".to_string()]
}

fn parse(when: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(when, "%Y-%m-%d %H:%M:%S")
        .unwrap()
        .and_utc()
}
