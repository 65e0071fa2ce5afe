//! Configuration validation.
//!
//! Strict checks applied before a command runs; the plain config getters
//! stay lenient and default-driven.

use crate::domain::error::FeedgateError;
use crate::domain::ingest::SessionPolicy;
use crate::ports::config_port::ConfigPort;
use chrono::NaiveTime;

pub fn validate_feed_config(config: &dyn ConfigPort) -> Result<(), FeedgateError> {
    validate_base_path(config)?;
    validate_delimiter(config)?;
    validate_value_field(config)?;
    Ok(())
}

pub fn validate_calendar_config(config: &dyn ConfigPort) -> Result<(), FeedgateError> {
    for key in [
        "regular_open",
        "regular_close",
        "extended_open",
        "extended_close",
    ] {
        validate_session_time(config, key)?;
    }
    Ok(())
}

pub fn validate_provider_config(config: &dyn ConfigPort) -> Result<(), FeedgateError> {
    validate_host(config)?;
    validate_auth_token(config)?;
    Ok(())
}

pub fn validate_ingest_config(config: &dyn ConfigPort) -> Result<(), FeedgateError> {
    validate_session_policy(config)?;
    Ok(())
}

fn validate_base_path(config: &dyn ConfigPort) -> Result<(), FeedgateError> {
    match config.get_string("feed", "base_path") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(FeedgateError::ConfigMissing {
            section: "feed".to_string(),
            key: "base_path".to_string(),
        }),
    }
}

fn validate_delimiter(config: &dyn ConfigPort) -> Result<(), FeedgateError> {
    match config.get_string("feed", "delimiter") {
        None => Ok(()),
        Some(s) if s.trim().chars().count() == 1 => Ok(()),
        Some(_) => Err(FeedgateError::ConfigInvalid {
            section: "feed".to_string(),
            key: "delimiter".to_string(),
            reason: "delimiter must be a single character".to_string(),
        }),
    }
}

fn validate_value_field(config: &dyn ConfigPort) -> Result<(), FeedgateError> {
    match config.get_string("feed", "value_field") {
        None => Ok(()),
        Some(s) if !s.trim().is_empty() => Ok(()),
        Some(_) => Err(FeedgateError::ConfigInvalid {
            section: "feed".to_string(),
            key: "value_field".to_string(),
            reason: "value_field must not be blank".to_string(),
        }),
    }
}

fn validate_session_time(config: &dyn ConfigPort, key: &str) -> Result<(), FeedgateError> {
    match config.get_string("calendar", key) {
        None => Ok(()),
        Some(s) if parse_session_time(&s).is_some() => Ok(()),
        Some(_) => Err(FeedgateError::ConfigInvalid {
            section: "calendar".to_string(),
            key: key.to_string(),
            reason: format!("invalid {} format, expected HH:MM or HH:MM:SS", key),
        }),
    }
}

pub fn parse_session_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

fn validate_host(config: &dyn ConfigPort) -> Result<(), FeedgateError> {
    match config.get_string("provider", "host") {
        None => Ok(()),
        Some(s) if !s.trim().is_empty() => Ok(()),
        Some(_) => Err(FeedgateError::ConfigInvalid {
            section: "provider".to_string(),
            key: "host".to_string(),
            reason: "host must not be blank".to_string(),
        }),
    }
}

fn validate_auth_token(config: &dyn ConfigPort) -> Result<(), FeedgateError> {
    match config.get_string("provider", "auth_token") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(FeedgateError::ConfigMissing {
            section: "provider".to_string(),
            key: "auth_token".to_string(),
        }),
    }
}

fn validate_session_policy(config: &dyn ConfigPort) -> Result<(), FeedgateError> {
    match config.get_string("ingest", "session_policy") {
        None => Ok(()),
        Some(s) if SessionPolicy::parse(s.trim()).is_some() => Ok(()),
        Some(_) => Err(FeedgateError::ConfigInvalid {
            section: "ingest".to_string(),
            key: "session_policy".to_string(),
            reason: "session_policy must be 'all' or 'trading-days'".to_string(),
        }),
    }
}
