//! Port traits decoupling the domain from adapters.

pub mod config_port;
pub mod feed_port;
