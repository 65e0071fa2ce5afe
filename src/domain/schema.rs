//! Feed schema learned from a header line.

use crate::domain::error::FeedError;
use std::collections::HashMap;

/// Ordered field names captured once from a feed's header line.
///
/// Field order and length are fixed for the lifetime of the owning reader.
/// A name-to-index lookup is built at construction; when a header repeats a
/// name, the lookup resolves to the first occurrence while the ordered list
/// keeps every column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<String>,
    index: HashMap<String, usize>,
}

impl Schema {
    /// Learn a schema from a header line, splitting on `delimiter` and
    /// trimming each token.
    pub fn from_header(line: &str, delimiter: char) -> Result<Self, FeedError> {
        if line.trim().is_empty() {
            return Err(FeedError::EmptyLine);
        }

        let fields: Vec<String> = line
            .split(delimiter)
            .map(|token| token.trim().to_string())
            .collect();

        let mut index = HashMap::with_capacity(fields.len());
        for (i, name) in fields.iter().enumerate() {
            index.entry(name.clone()).or_insert(i);
        }

        Ok(Self { fields, index })
    }

    /// Number of columns, including the timestamp column at position 0.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Column index of `name`, matched exactly (case-sensitive, trimmed at
    /// learning time).
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Name of column 0, the timestamp column.
    pub fn timestamp_field(&self) -> &str {
        &self.fields[0]
    }
}
