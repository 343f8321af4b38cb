use std::path::{Path, PathBuf};

pub const HEADER: &str = "Symbol,Profit,Commission,Update Time";

/// Write a CSV fixture with the standard header into `dir`.
pub fn write_csv(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut content = String::from(HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    std::fs::write(&path, content).unwrap();
    path
}
