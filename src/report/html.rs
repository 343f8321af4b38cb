use std::fmt::Write as _;
use std::path::Path;

use tracing::info;

use crate::analysis::{SummaryMetrics, WeeklyBucket};
use crate::error::ReportError;
use crate::report::ReportStyle;

/// Render the full self-contained report document. Pure string assembly;
/// writing is a separate step so formatting stays testable on its own.
pub fn render(
    metrics: &SummaryMetrics,
    weeks: &[WeeklyBucket],
    style: ReportStyle,
    currency: &str,
) -> String {
    let mut doc = String::new();

    let _ = write!(
        doc,
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Trade Analysis Report</title>\n\
         <style>\n{css}</style>\n\
         </head>\n\
         <body>\n\
         <div class=\"container\">\n\
         <h1>Trading Execution Analysis</h1>\n",
        css = style.css()
    );

    push_kpi_grid(&mut doc, metrics, currency);
    push_summary_table(&mut doc, metrics, currency);
    push_week_grid(&mut doc, weeks, currency);

    doc.push_str("</div>\n</body>\n</html>\n");
    doc
}

/// Write the rendered document as UTF-8, replacing any existing file.
pub fn write_report(path: &Path, document: &str) -> Result<(), ReportError> {
    std::fs::write(path, document).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} bytes to {}", document.len(), path.display());
    Ok(())
}

fn push_kpi_grid(doc: &mut String, metrics: &SummaryMetrics, currency: &str) {
    let _ = write!(
        doc,
        "<div class=\"metrics-grid\">\n\
         <div class=\"card\"><h3>Total Trades</h3><p>{total}</p></div>\n\
         <div class=\"card\"><h3>Average P&amp;L</h3><p>{avg}</p></div>\n\
         <div class=\"card\"><h3>Winrate</h3><p>{rate:.2}%</p></div>\n\
         <div class=\"card\"><h3>Profit Factor</h3><p>{factor}</p></div>\n\
         </div>\n",
        total = metrics.total_trades,
        avg = fmt_money(metrics.average_pl, currency),
        rate = metrics.win_rate,
        factor = fmt_profit_factor(metrics.profit_factor),
    );
}

fn push_summary_table(doc: &mut String, metrics: &SummaryMetrics, currency: &str) {
    let _ = write!(
        doc,
        "<h2>Summary Statistics</h2>\n\
         <table>\n\
         <tr><td>Total Number of Trades</td><td>{total}</td></tr>\n\
         <tr><td>Highest Profitable Trade</td><td class=\"pos\">{best}</td></tr>\n\
         <tr><td>Highest Loss</td><td class=\"neg\">{worst}</td></tr>\n\
         </table>\n",
        total = metrics.total_trades,
        best = fmt_money(metrics.max_profit, currency),
        worst = fmt_money(metrics.max_loss, currency),
    );
}

fn push_week_grid(doc: &mut String, weeks: &[WeeklyBucket], currency: &str) {
    doc.push_str("<h2>Weekly Activity Calendar</h2>\n<div class=\"week-grid\">\n");
    for week in weeks {
        let _ = write!(
            doc,
            "<div class=\"week-card\">\n\
             <strong>Year {year} Week {week}</strong><br>\n\
             Trades: {count}<br>\n\
             P&amp;L: <span class=\"{class}\">{pnl}</span>\n\
             </div>\n",
            year = week.year,
            week = week.iso_week,
            count = week.trade_count,
            class = sign_class(week.net_profit),
            pnl = fmt_money(week.net_profit, currency),
        );
    }
    doc.push_str("</div>\n");
}

/// `$123.45`, `$-50.00` — sign stays inside the number, after the prefix.
fn fmt_money(value: f64, currency: &str) -> String {
    format!("{currency}{value:.2}")
}

/// Two decimals, except the no-loss case which renders as the infinity
/// symbol instead of tripping up the formatter.
fn fmt_profit_factor(factor: f64) -> String {
    if factor.is_infinite() {
        "\u{221e}".to_string()
    } else {
        format!("{factor:.2}")
    }
}

fn sign_class(value: f64) -> &'static str {
    if value >= 0.0 {
        "pos"
    } else {
        "neg"
    }
}
