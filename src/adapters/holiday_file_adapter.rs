//! Holiday list file adapter.
//!
//! Loads an exchange holiday set from a plain text file, one `YYYY-MM-DD`
//! date per line. Blank lines and `#` comments are ignored.

use crate::domain::error::FeedgateError;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub fn load_holidays<P: AsRef<Path>>(path: P) -> Result<HashSet<NaiveDate>, FeedgateError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| FeedgateError::HolidayFile {
        file: path.display().to_string(),
        reason: format!("failed to read: {}", e),
    })?;

    let mut holidays = HashSet::new();
    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let date = NaiveDate::parse_from_str(line, "%Y-%m-%d").map_err(|_| {
            FeedgateError::HolidayFile {
                file: path.display().to_string(),
                reason: format!("invalid date '{}' on line {}", line, i + 1),
            }
        })?;
        holidays.insert(date);
    }

    Ok(holidays)
}
