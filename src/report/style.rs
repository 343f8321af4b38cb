use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Inline CSS palette for the report. One pipeline, two skins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReportStyle {
    #[default]
    #[serde(rename = "classic")]
    Classic,
    #[serde(rename = "midnight")]
    Midnight,
}

impl ReportStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStyle::Classic => "classic",
            ReportStyle::Midnight => "midnight",
        }
    }

    /// Lenient parse for env configuration; unknown values fall back to
    /// the classic palette with a warning.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "classic" | "" => ReportStyle::Classic,
            "midnight" => ReportStyle::Midnight,
            other => {
                warn!("Unknown REPORT_STYLE {other:?}, using classic");
                ReportStyle::Classic
            }
        }
    }

    /// The full `<style>` body for the document.
    pub fn css(&self) -> &'static str {
        match self {
            ReportStyle::Classic => CLASSIC_CSS,
            ReportStyle::Midnight => MIDNIGHT_CSS,
        }
    }
}

impl fmt::Display for ReportStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const CLASSIC_CSS: &str = "\
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 40px; background-color: #f0f2f5; }
.container { max-width: 1000px; margin: auto; background: white; padding: 30px; border-radius: 12px; box-shadow: 0 4px 20px rgba(0,0,0,0.08); }
h1, h2 { color: #1a73e8; text-align: center; }
.metrics-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 20px; margin: 30px 0; }
.card { background: #f8f9fa; padding: 20px; border-radius: 8px; text-align: center; border: 1px solid #e0e0e0; }
.card h3 { margin: 0; font-size: 0.9em; color: #5f6368; }
.card p { margin: 10px 0 0; font-size: 1.5em; font-weight: bold; color: #202124; }
table { width: 100%; border-collapse: collapse; margin-top: 20px; }
th, td { padding: 12px; text-align: left; border-bottom: 1px solid #eee; }
th { background-color: #f1f3f4; color: #5f6368; }
.pos { color: #1e8e3e; font-weight: bold; }
.neg { color: #d93025; font-weight: bold; }
.week-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 15px; margin-top: 20px; }
.week-card { padding: 15px; border-radius: 8px; border: 1px solid #ddd; background: #fff; }
";

const MIDNIGHT_CSS: &str = "\
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 40px; background-color: #10131a; color: #d5d9e0; }
.container { max-width: 1000px; margin: auto; background: #1a1f2b; padding: 30px; border-radius: 12px; box-shadow: 0 4px 20px rgba(0,0,0,0.5); }
h1, h2 { color: #6ea8fe; text-align: center; }
.metrics-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 20px; margin: 30px 0; }
.card { background: #232a39; padding: 20px; border-radius: 8px; text-align: center; border: 1px solid #313a4d; }
.card h3 { margin: 0; font-size: 0.9em; color: #8b93a3; }
.card p { margin: 10px 0 0; font-size: 1.5em; font-weight: bold; color: #e8ebf0; }
table { width: 100%; border-collapse: collapse; margin-top: 20px; }
th, td { padding: 12px; text-align: left; border-bottom: 1px solid #2b3345; }
th { background-color: #232a39; color: #8b93a3; }
.pos { color: #4cc38a; font-weight: bold; }
.neg { color: #f2555a; font-weight: bold; }
.week-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 15px; margin-top: 20px; }
.week-card { padding: 15px; border-radius: 8px; border: 1px solid #313a4d; background: #1f2533; }
";
