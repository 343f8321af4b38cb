use serde::{Deserialize, Serialize};

use crate::report::ReportStyle;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Symbols dropped from the trade set before any statistics are computed.
    /// Matching is case-sensitive and exact.
    pub excluded_symbols: Vec<String>,

    /// Output path used when the CLI does not supply one.
    pub default_output: String,

    /// Inline CSS palette for the rendered report.
    pub style: ReportStyle,

    /// Currency prefix for formatted P&L values.
    pub currency_prefix: String,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        let excluded_symbols = env("REPORT_EXCLUDE_SYMBOLS", "XAGUSD")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Config {
            excluded_symbols,
            default_output: env("REPORT_OUTPUT", "trade_analysis.html"),
            style: ReportStyle::parse(&env("REPORT_STYLE", "classic")),
            currency_prefix: env("REPORT_CURRENCY", "$"),
            log_level: env("LOG_LEVEL", "info"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            excluded_symbols: vec!["XAGUSD".to_string()],
            default_output: "trade_analysis.html".to_string(),
            style: ReportStyle::Classic,
            currency_prefix: "$".to_string(),
            log_level: "info".to_string(),
        }
    }
}
