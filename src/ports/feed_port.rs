//! Feed access port trait.

use crate::domain::error::FeedgateError;

/// Source of raw feed lines for symbols. Implementations hand back the
/// stream verbatim, header first; parsing belongs to the domain.
pub trait FeedPort {
    fn fetch_lines(&self, symbol: &str) -> Result<Vec<String>, FeedgateError>;

    fn list_symbols(&self) -> Result<Vec<String>, FeedgateError>;
}
