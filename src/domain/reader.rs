//! Schema-learning feed reader.
//!
//! One reader owns one feed stream: it learns the column layout from the
//! stream's header line, then converts each data line into a [`Record`]
//! without a hand-written per-feed parser.

use crate::domain::error::FeedError;
use crate::domain::record::Record;
use crate::domain::schema::Schema;
use chrono::NaiveDate;
use std::sync::Arc;

pub const DEFAULT_VALUE_FIELD: &str = "Close";
pub const DEFAULT_DELIMITER: char = ',';

#[derive(Debug, Clone)]
struct LearnedSchema {
    schema: Arc<Schema>,
    value_index: usize,
}

/// Stateful per-stream parser. `learn_schema` must complete before any
/// `parse_line` call; one instance per physical feed stream, never shared
/// across streams.
#[derive(Debug, Clone)]
pub struct SchemaReader {
    delimiter: char,
    value_field: String,
    learned: Option<LearnedSchema>,
}

impl Default for SchemaReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaReader {
    /// Reader with the default delimiter and value field (`Close`).
    pub fn new() -> Self {
        Self::with_value_field(DEFAULT_VALUE_FIELD)
    }

    /// Reader whose canonical value is copied from `value_field`. The choice
    /// is fixed for the lifetime of the reader.
    pub fn with_value_field(value_field: impl Into<String>) -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            value_field: value_field.into(),
            learned: None,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn value_field(&self) -> &str {
        &self.value_field
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// The learned schema, if `learn_schema` has succeeded.
    pub fn schema(&self) -> Option<&Arc<Schema>> {
        self.learned.as_ref().map(|l| &l.schema)
    }

    /// Learn the column layout from the stream's header line.
    ///
    /// Splits on the delimiter, trims each token, and resolves the value
    /// field against the learned names (exact, case-sensitive match). A
    /// value field absent from the header fails with
    /// [`FeedError::MissingField`] and leaves the reader unlearned: the
    /// reader was configured for a different feed and the stream must be
    /// aborted, not retried line by line.
    ///
    /// A second call after a successful learn fails with
    /// [`FeedError::SchemaAlreadyLearned`]; relearning would desynchronize
    /// previously emitted records from the new column mapping.
    pub fn learn_schema(&mut self, header_line: &str) -> Result<(), FeedError> {
        if self.learned.is_some() {
            return Err(FeedError::SchemaAlreadyLearned);
        }

        let schema = Schema::from_header(header_line, self.delimiter)?;
        // The timestamp column cannot serve as the value field.
        let value_index = schema
            .field_index(&self.value_field)
            .filter(|&i| i != 0)
            .ok_or_else(|| FeedError::MissingField {
                field: self.value_field.clone(),
            })?;

        self.learned = Some(LearnedSchema {
            schema: Arc::new(schema),
            value_index,
        });
        Ok(())
    }

    /// Parse one data line against the learned schema.
    ///
    /// Column 0 is the `YYYY-MM-DD` timestamp; columns 1..N are decimal
    /// numbers assigned positionally to schema fields 1..N. Tokens are
    /// trimmed before parsing. A token count that disagrees with the schema
    /// is data corruption for that line and is never truncated or padded.
    pub fn parse_line(&self, line: &str) -> Result<Record, FeedError> {
        let learned = self.learned.as_ref().ok_or(FeedError::SchemaNotLearned)?;

        if line.trim().is_empty() {
            return Err(FeedError::EmptyLine);
        }

        let tokens: Vec<&str> = line.split(self.delimiter).map(str::trim).collect();
        if tokens.len() != learned.schema.len() {
            return Err(FeedError::SchemaMismatch {
                expected: learned.schema.len(),
                actual: tokens.len(),
            });
        }

        let timestamp =
            NaiveDate::parse_from_str(tokens[0], "%Y-%m-%d").map_err(|_| FeedError::InvalidDate {
                token: tokens[0].to_string(),
            })?;

        let mut values = Vec::with_capacity(tokens.len() - 1);
        for (i, token) in tokens.iter().enumerate().skip(1) {
            let parsed: f64 = token.parse().map_err(|_| FeedError::InvalidNumber {
                token: token.to_string(),
                field: learned.schema.fields()[i].clone(),
            })?;
            values.push(parsed);
        }

        // value_index counts the timestamp column; values does not.
        let value = values[learned.value_index - 1];
        Ok(Record::new(
            Arc::clone(&learned.schema),
            timestamp,
            values,
            value,
        ))
    }
}
