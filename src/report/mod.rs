pub mod html;
pub mod style;

pub use html::{render, write_report};
pub use style::ReportStyle;
