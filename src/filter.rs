use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::{debug, info};

use crate::error::ReportError;
use crate::loader::RawTrade;
use crate::models::{Trade, TradeSet};

/// Keep only rows with a recorded profit and a symbol that is not excluded,
/// parsing timestamps for the survivors. Rows dropped here are not errors;
/// a timestamp that cannot be parsed on a surviving row is.
pub fn build_trade_set(
    rows: Vec<RawTrade>,
    excluded_symbols: &[String],
) -> Result<TradeSet, ReportError> {
    let total = rows.len();
    let mut trades = Vec::new();

    for (idx, row) in rows.into_iter().enumerate() {
        let Some(profit) = row.profit else {
            continue;
        };
        if is_excluded(&row.symbol, excluded_symbols) {
            debug!("Dropping excluded symbol {}", row.symbol);
            continue;
        }

        // Line number in the file: 1-based, after the header row.
        let line = idx as u64 + 2;
        let update_time = parse_update_time(&row.update_time, line)?;
        trades.push(Trade {
            symbol: row.symbol,
            profit,
            commission: row.commission.unwrap_or(0.0),
            update_time,
        });
    }

    info!("Retained {} of {} rows after filtering", trades.len(), total);

    if trades.is_empty() {
        return Err(ReportError::EmptyResult);
    }
    Ok(TradeSet::new(trades))
}

/// Re-apply the symbol exclusion to an already-built trade set. A set built
/// by `build_trade_set` passes through unchanged.
pub fn exclude_symbols(set: &TradeSet, excluded_symbols: &[String]) -> TradeSet {
    TradeSet::new(
        set.iter()
            .filter(|t| !is_excluded(&t.symbol, excluded_symbols))
            .cloned()
            .collect(),
    )
}

fn is_excluded(symbol: &str, excluded_symbols: &[String]) -> bool {
    excluded_symbols.iter().any(|s| s == symbol)
}

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse the export's `Update Time` column. RFC 3339 first, then the
/// naive formats brokers actually emit (with or without fractional seconds,
/// taken as UTC).
fn parse_update_time(raw: &str, record: u64) -> Result<DateTime<Utc>, ReportError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(ReportError::Parse {
        record,
        reason: format!("unparseable Update Time: {raw:?}"),
    })
}
