//! Core domain types and logic.

pub mod schema;
pub mod record;
pub mod reader;
pub mod calendar;
pub mod locator;
pub mod ingest;
pub mod config_validation;
pub mod error;
