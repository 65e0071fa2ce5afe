//! File-backed feed adapter.
//!
//! Serves feed streams from a directory of `<SYMBOL>.csv` files, one file
//! per symbol, header line first. Lines are handed over verbatim; all
//! parsing stays in the domain.

use crate::domain::error::FeedgateError;
use crate::ports::feed_port::FeedPort;
use std::fs;
use std::path::PathBuf;

pub struct FileFeedAdapter {
    base_path: PathBuf,
}

impl FileFeedAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn feed_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol))
    }
}

impl FeedPort for FileFeedAdapter {
    fn fetch_lines(&self, symbol: &str) -> Result<Vec<String>, FeedgateError> {
        let path = self.feed_path(symbol);
        let content = fs::read_to_string(&path).map_err(|e| FeedgateError::FeedSource {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        Ok(content.lines().map(str::to_string).collect())
    }

    fn list_symbols(&self) -> Result<Vec<String>, FeedgateError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| FeedgateError::FeedSource {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut symbols = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FeedgateError::FeedSource {
                reason: format!("directory entry error: {}", e),
            })?;

            if !entry.path().is_file() {
                continue;
            }

            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            // A bare ".csv" has no symbol name.
            if let Some(symbol) = name_str.strip_suffix(".csv") {
                if !symbol.is_empty() {
                    symbols.push(symbol.to_string());
                }
            }
        }

        symbols.sort();
        Ok(symbols)
    }
}
