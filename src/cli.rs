//! CLI definition and dispatch.

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::file_feed_adapter::FileFeedAdapter;
use crate::adapters::holiday_file_adapter::load_holidays;
use crate::domain::calendar::{ExchangeCalendar, SessionWindow};
use crate::domain::config_validation::{
    validate_calendar_config, validate_feed_config, validate_ingest_config,
    validate_provider_config,
};
use crate::domain::error::FeedgateError;
use crate::domain::ingest::{ingest_lines, IngestOptions, SessionPolicy};
use crate::domain::locator::{FeedLocator, DEFAULT_PROVIDER_HOST};
use crate::domain::reader::{SchemaReader, DEFAULT_DELIMITER, DEFAULT_VALUE_FIELD};
use crate::ports::config_port::ConfigPort;
use crate::ports::feed_port::FeedPort;

#[derive(Parser, Debug)]
#[command(name = "feedgate", about = "Market data feed reader and session gate")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ingest symbol feeds and print records
    Ingest {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        symbol: Option<String>,
        #[arg(long)]
        policy: Option<String>,
        #[arg(long)]
        skip_bad_lines: bool,
    },
    /// Classify a timestamp against the exchange calendar
    Session {
        #[arg(long)]
        at: String,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the provider dataset URL for a symbol
    Locate {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        symbol: String,
    },
    /// List symbols available in the feed directory
    ListSymbols {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Ingest {
            config,
            symbol,
            policy,
            skip_bad_lines,
        } => run_ingest(&config, symbol.as_deref(), policy.as_deref(), skip_bad_lines),
        Command::Session { at, config } => run_session(config.as_ref(), &at),
        Command::Locate { config, symbol } => run_locate(&config, &symbol),
        Command::ListSymbols { config } => run_list_symbols(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = FeedgateError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

fn run_ingest(
    config_path: &PathBuf,
    symbol_override: Option<&str>,
    policy_override: Option<&str>,
    skip_bad_lines: bool,
) -> ExitCode {
    // Stage 1: Load config
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    // Stage 2: Validate config
    if let Err(e) = validate_feed_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    if let Err(e) = validate_calendar_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    if let Err(e) = validate_ingest_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    // Stage 3: Build calendar and reader template
    let calendar = match build_calendar(&adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let reader = build_reader(&adapter);

    // Stage 4: Resolve symbols and options
    let symbols = resolve_symbols(symbol_override, &adapter);
    if symbols.is_empty() {
        eprintln!("error: no symbols configured");
        return ExitCode::from(2);
    }

    let policy = match resolve_policy(policy_override, &adapter) {
        Ok(p) => p,
        Err(code) => return code,
    };
    let options = IngestOptions {
        policy,
        skip_bad_lines: skip_bad_lines || adapter.get_bool("ingest", "skip_bad_lines", false),
    };

    let base_path = adapter.get_string("feed", "base_path").unwrap_or_default();
    let feed_port = FileFeedAdapter::new(PathBuf::from(base_path.trim()));

    eprintln!(
        "Ingesting {} symbols ({} policy)...",
        symbols.len(),
        options.policy.as_str()
    );

    // Stage 5: Run pipeline
    run_ingest_pipeline(&feed_port, &calendar, &reader, &symbols, options)
}

pub fn run_ingest_pipeline(
    feed_port: &dyn FeedPort,
    calendar: &ExchangeCalendar,
    reader: &SchemaReader,
    symbols: &[String],
    options: IngestOptions,
) -> ExitCode {
    let mut total_records = 0usize;
    let mut total_gated = 0usize;
    let mut total_skipped = 0usize;

    for symbol in symbols {
        let lines = match feed_port.fetch_lines(symbol) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("warning: skipping {} ({})", symbol, e);
                continue;
            }
        };

        // Fresh reader per stream: one schema per feed.
        let mut symbol_reader = reader.clone();
        let report = match ingest_lines(
            &mut symbol_reader,
            calendar,
            lines.iter().map(String::as_str),
            options,
        ) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("warning: skipping {} ({})", symbol, e);
                continue;
            }
        };

        for (line, err) in &report.skipped {
            eprintln!("warning: {} line {}: {}", symbol, line, err);
        }

        for record in &report.records {
            println!("{},{},{}", symbol, record.timestamp, record.value);
        }

        eprintln!(
            "{}: {} records, {} gated, {} skipped",
            symbol,
            report.records.len(),
            report.gated,
            report.skipped.len()
        );

        total_records += report.records.len();
        total_gated += report.gated;
        total_skipped += report.skipped.len();
    }

    if total_records == 0 {
        eprintln!("error: no records ingested");
        return ExitCode::from(5);
    }

    eprintln!(
        "Ingested {} records ({} gated, {} skipped)",
        total_records, total_gated, total_skipped
    );
    ExitCode::SUCCESS
}

fn run_session(config_path: Option<&PathBuf>, at: &str) -> ExitCode {
    let calendar = match config_path {
        Some(path) => {
            let adapter = match load_config(path) {
                Ok(a) => a,
                Err(code) => return code,
            };
            if let Err(e) = validate_calendar_config(&adapter) {
                eprintln!("error: {e}");
                return (&e).into();
            }
            match build_calendar(&adapter) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("error: {e}");
                    return (&e).into();
                }
            }
        }
        None => ExchangeCalendar::new(),
    };

    let at = match parse_session_instant(at) {
        Some(t) => t,
        None => {
            eprintln!(
                "error: invalid timestamp '{}', expected YYYY-MM-DD HH:MM:SS",
                at
            );
            return ExitCode::from(2);
        }
    };

    let date = at.date();
    println!("{}", at);
    println!("  trading day:   {}", yes_no(calendar.is_trading_day(date)));
    println!("  regular open:  {}", yes_no(calendar.is_regular_open(at)));
    println!("  extended open: {}", yes_no(calendar.is_extended_open(at)));
    println!("  session open:  {}", calendar.session_open(date));
    println!("  session close: {}", calendar.session_close(date));
    ExitCode::SUCCESS
}

fn run_locate(config_path: &PathBuf, symbol: &str) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_provider_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let url = match locate_url(&adapter, symbol) {
        Ok(u) => u,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    println!("{}", url);
    ExitCode::SUCCESS
}

fn run_list_symbols(config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    if let Err(e) = validate_feed_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let base_path = config.get_string("feed", "base_path").unwrap_or_default();
    let adapter = FileFeedAdapter::new(PathBuf::from(base_path.trim()));

    let symbols = match adapter.list_symbols() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if symbols.is_empty() {
        eprintln!("No symbols found in {}", base_path.trim());
    } else {
        for symbol in &symbols {
            println!("{}", symbol);
        }
        eprintln!("{} symbols found", symbols.len());
    }
    ExitCode::SUCCESS
}

pub fn build_calendar(config: &dyn ConfigPort) -> Result<ExchangeCalendar, FeedgateError> {
    let defaults = SessionWindow::default();
    let window = SessionWindow {
        regular_open: config.get_time("calendar", "regular_open", defaults.regular_open),
        regular_close: config.get_time("calendar", "regular_close", defaults.regular_close),
        extended_open: config.get_time("calendar", "extended_open", defaults.extended_open),
        extended_close: config.get_time("calendar", "extended_close", defaults.extended_close),
    };

    let mut calendar = ExchangeCalendar::new().with_window(window);
    if let Some(path) = config.get_string("calendar", "holiday_file") {
        let path = path.trim();
        if !path.is_empty() {
            calendar.holidays = load_holidays(path)?;
        }
    }
    Ok(calendar)
}

pub fn build_reader(config: &dyn ConfigPort) -> SchemaReader {
    let value_field = config
        .get_string("feed", "value_field")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_VALUE_FIELD.to_string());
    let delimiter = config
        .get_string("feed", "delimiter")
        .and_then(|s| s.trim().chars().next())
        .unwrap_or(DEFAULT_DELIMITER);

    SchemaReader::with_value_field(value_field).with_delimiter(delimiter)
}

pub fn build_locator(config: &dyn ConfigPort) -> Result<FeedLocator, FeedgateError> {
    let host = config
        .get_string("provider", "host")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_PROVIDER_HOST.to_string());

    let token = config
        .get_string("provider", "auth_token")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| FeedgateError::ConfigMissing {
            section: "provider".into(),
            key: "auth_token".into(),
        })?;

    Ok(FeedLocator::with_host(host).with_auth_code(token))
}

/// The provider URL the `locate` command prints. Symbols are upper-cased
/// here, as everywhere at the CLI boundary.
pub fn locate_url(config: &dyn ConfigPort, symbol: &str) -> Result<String, FeedgateError> {
    let locator = build_locator(config)?;
    Ok(locator.dataset_url(&symbol.to_uppercase()))
}

pub fn resolve_symbols(symbol_override: Option<&str>, config: &dyn ConfigPort) -> Vec<String> {
    if let Some(s) = symbol_override {
        return vec![s.to_uppercase()];
    }

    if let Some(symbols_str) = config.get_string("feed", "symbols") {
        return symbols_str
            .split(',')
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect();
    }

    if let Some(symbol) = config.get_string("feed", "symbol") {
        let symbol = symbol.trim().to_uppercase();
        if !symbol.is_empty() {
            return vec![symbol];
        }
    }

    vec![]
}

fn resolve_policy(
    policy_override: Option<&str>,
    config: &dyn ConfigPort,
) -> Result<SessionPolicy, ExitCode> {
    if let Some(p) = policy_override {
        return match SessionPolicy::parse(p) {
            Some(policy) => Ok(policy),
            None => {
                eprintln!(
                    "error: unknown session policy '{}', expected 'all' or 'trading-days'",
                    p
                );
                Err(ExitCode::from(2))
            }
        };
    }

    match config.get_string("ingest", "session_policy") {
        Some(s) => match SessionPolicy::parse(s.trim()) {
            Some(policy) => Ok(policy),
            None => {
                eprintln!("error: unknown session policy '{}'", s);
                Err(ExitCode::from(2))
            }
        },
        None => Ok(SessionPolicy::default()),
    }
}

fn parse_session_instant(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
