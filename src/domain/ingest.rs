//! Feed ingestion pipeline.
//!
//! Drives a [`SchemaReader`] over a full feed stream, applies the session
//! policy from an [`ExchangeCalendar`], and reports what was kept, gated,
//! and skipped.

use crate::domain::calendar::ExchangeCalendar;
use crate::domain::error::FeedError;
use crate::domain::reader::SchemaReader;
use crate::domain::record::Record;

/// Which records survive calendar gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPolicy {
    /// Keep every parsed record.
    #[default]
    All,
    /// Keep only records stamped on a trading day.
    TradingDaysOnly,
}

impl SessionPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "trading-days" => Some(Self::TradingDaysOnly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::TradingDaysOnly => "trading-days",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IngestOptions {
    pub policy: SessionPolicy,
    /// Skip lines with recoverable parse errors instead of aborting the
    /// stream. Structural errors abort regardless.
    pub skip_bad_lines: bool,
}

/// Outcome of one stream's ingestion.
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Records kept, in input order.
    pub records: Vec<Record>,
    /// Count of well-formed records dropped by the session policy.
    pub gated: usize,
    /// Skipped lines with their 1-based line numbers (header is line 1).
    pub skipped: Vec<(usize, FeedError)>,
}

/// Run one feed stream through `reader`, gating by `calendar` per the
/// options.
///
/// The first line is the header and learns the schema; an empty stream is
/// [`FeedError::EmptyFeed`]. With `skip_bad_lines` set, recoverable line
/// errors are recorded in the report and the stream continues; structural
/// errors and any error with the flag unset abort with the line untouched.
pub fn ingest_lines<'a, I>(
    reader: &mut SchemaReader,
    calendar: &ExchangeCalendar,
    lines: I,
    options: IngestOptions,
) -> Result<IngestReport, FeedError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut lines = lines.into_iter();
    let header = lines.next().ok_or(FeedError::EmptyFeed)?;
    reader.learn_schema(header)?;

    let mut report = IngestReport::default();
    for (i, line) in lines.enumerate() {
        let line_number = i + 2;
        let record = match reader.parse_line(line) {
            Ok(record) => record,
            Err(err) if options.skip_bad_lines && err.recoverable() => {
                report.skipped.push((line_number, err));
                continue;
            }
            Err(err) => return Err(err),
        };

        match options.policy {
            SessionPolicy::All => report.records.push(record),
            SessionPolicy::TradingDaysOnly => {
                if calendar.is_trading_day(record.timestamp) {
                    report.records.push(record);
                } else {
                    report.gated += 1;
                }
            }
        }
    }

    Ok(report)
}
