use chrono::{DateTime, Utc};
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader};
use std::path::Path;

/// Create a BufReader that reads from a file denoted by its path
pub fn open_read(path: &Path) -> io::Result<BufReader<File>> {
    let file = OpenOptions::new().read(true).open(path)?;
    Ok(BufReader::new(file))
}

/// Seconds since the epoch followed by the same moment in a readable form
pub fn now_str() -> String {
    let dt: DateTime<Utc> = Utc::now();
    format!("{} ({})", dt.timestamp(), dt.format("%Y-%m-%d %H:%M:%S"))
}
