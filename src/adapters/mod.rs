//! Concrete adapter implementations for ports.

pub mod file_config_adapter;
pub mod file_feed_adapter;
pub mod holiday_file_adapter;
