#![allow(dead_code)]

use chrono::NaiveDate;
use feedgate::domain::error::FeedgateError;
use feedgate::ports::feed_port::FeedPort;
use std::collections::HashMap;

pub const OHLCV_HEADER: &str = "Date,Open,High,Low,Close,Volume";

pub struct MockFeedPort {
    pub data: HashMap<String, Vec<String>>,
    pub errors: HashMap<String, String>,
}

impl MockFeedPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_lines(mut self, symbol: &str, lines: &[&str]) -> Self {
        self.data
            .insert(symbol.to_string(), lines.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl FeedPort for MockFeedPort {
    fn fetch_lines(&self, symbol: &str) -> Result<Vec<String>, FeedgateError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(FeedgateError::FeedSource {
                reason: reason.clone(),
            });
        }
        self.data
            .get(symbol)
            .cloned()
            .ok_or_else(|| FeedgateError::FeedSource {
                reason: format!("no feed for {}", symbol),
            })
    }

    fn list_symbols(&self) -> Result<Vec<String>, FeedgateError> {
        let mut symbols: Vec<String> = self.data.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// OHLCV feed stream with the standard header prepended.
pub fn ohlcv_feed(data_lines: &[&str]) -> Vec<String> {
    let mut lines = vec![OHLCV_HEADER.to_string()];
    lines.extend(data_lines.iter().map(|s| s.to_string()));
    lines
}

/// Consecutive calendar-day OHLCV rows starting at `start_date`, close
/// price climbing one unit per day.
pub fn generate_feed(start_date: &str, count: usize, start_price: f64) -> Vec<String> {
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d").unwrap();
    let mut lines = vec![OHLCV_HEADER.to_string()];
    lines.extend((0..count).map(|i| {
        let day = start + chrono::Duration::days(i as i64);
        let close = start_price + i as f64;
        format!(
            "{},{},{},{},{},{}",
            day,
            close - 1.0,
            close + 1.0,
            close - 2.0,
            close,
            1000
        )
    }));
    lines
}
