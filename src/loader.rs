use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::ReportError;

/// One row of the broker's order-history export, before filtering.
/// Blank numeric cells deserialize to `None`; the timestamp stays raw
/// until the filter stage decides the row is worth parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrade {
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "Profit")]
    pub profit: Option<f64>,
    #[serde(rename = "Commission")]
    pub commission: Option<f64>,
    #[serde(rename = "Update Time")]
    pub update_time: String,
}

const REQUIRED_COLUMNS: &[&str] = &["Symbol", "Profit", "Commission", "Update Time"];

/// Read the trade-history CSV into memory. The path is checked before any
/// parsing so a missing file reports as such rather than as a CSV error.
pub fn load(path: &Path) -> Result<Vec<RawTrade>, ReportError> {
    if !path.exists() {
        return Err(ReportError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| ReportError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = reader.headers().map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    check_columns(headers)?;

    let mut rows = Vec::new();
    for result in reader.deserialize::<RawTrade>() {
        let row = result.map_err(|err| ReportError::Parse {
            record: err.position().map(|p| p.line()).unwrap_or(0),
            reason: err.to_string(),
        })?;
        rows.push(row);
    }

    info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn check_columns(headers: &csv::StringRecord) -> Result<(), ReportError> {
    debug!("Header columns: {:?}", headers);

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ReportError::Schema { missing })
    }
}
