//! Domain error types.

/// Errors raised while learning a feed schema or parsing data lines.
///
/// The per-line variants are recoverable: the caller may skip the offending
/// line and continue the stream. The remaining variants indicate a misframed
/// stream or a misconfigured reader and must abort ingestion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    #[error("empty line")]
    EmptyLine,

    #[error("feed has no header line")]
    EmptyFeed,

    #[error("invalid date token '{token}': expected YYYY-MM-DD")]
    InvalidDate { token: String },

    #[error("invalid numeric token '{token}' for field '{field}'")]
    InvalidNumber { token: String, field: String },

    #[error("line has {actual} fields but schema has {expected}")]
    SchemaMismatch { expected: usize, actual: usize },

    #[error("value field '{field}' not in schema")]
    MissingField { field: String },

    #[error("schema already learned")]
    SchemaAlreadyLearned,

    #[error("schema not learned yet")]
    SchemaNotLearned,
}

impl FeedError {
    /// Whether the error is confined to a single data line.
    ///
    /// Skip-vs-abort remains the caller's policy; this only says which
    /// errors a skip policy may legally apply to.
    pub fn recoverable(&self) -> bool {
        matches!(
            self,
            FeedError::EmptyLine
                | FeedError::InvalidDate { .. }
                | FeedError::InvalidNumber { .. }
                | FeedError::SchemaMismatch { .. }
        )
    }
}

/// Top-level error type for feedgate.
#[derive(Debug, thiserror::Error)]
pub enum FeedgateError {
    #[error("feed source error: {reason}")]
    FeedSource { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("holiday file {file}: {reason}")]
    HolidayFile { file: String, reason: String },

    #[error("no data for {symbol}")]
    NoData { symbol: String },

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&FeedgateError> for std::process::ExitCode {
    fn from(err: &FeedgateError) -> Self {
        let code: u8 = match err {
            FeedgateError::Io(_) => 1,
            FeedgateError::ConfigParse { .. }
            | FeedgateError::ConfigMissing { .. }
            | FeedgateError::ConfigInvalid { .. } => 2,
            FeedgateError::FeedSource { .. } | FeedgateError::HolidayFile { .. } => 3,
            FeedgateError::Feed(_) => 4,
            FeedgateError::NoData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
