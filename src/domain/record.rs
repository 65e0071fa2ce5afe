//! Typed record parsed from one feed line.

use crate::domain::schema::Schema;
use chrono::NaiveDate;
use std::sync::Arc;

/// One parsed feed line: a timestamp, the numeric values for schema fields
/// 1..N, and the canonical value copied from the reader's value field.
///
/// Values are stored in a parallel array aligned to the schema, so every
/// record produced by one reader shares the same `Arc<Schema>`. Immutable
/// once constructed.
#[derive(Debug, Clone)]
pub struct Record {
    schema: Arc<Schema>,
    pub timestamp: NaiveDate,
    values: Vec<f64>,
    pub value: f64,
}

impl Record {
    pub(crate) fn new(
        schema: Arc<Schema>,
        timestamp: NaiveDate,
        values: Vec<f64>,
        value: f64,
    ) -> Self {
        Self {
            schema,
            timestamp,
            values,
            value,
        }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Value of the named field, or `None` for an unknown name or for the
    /// timestamp column (column 0 is not stored as a value).
    pub fn get(&self, field: &str) -> Option<f64> {
        let idx = self.schema.field_index(field)?;
        if idx == 0 {
            return None;
        }
        self.values.get(idx - 1).copied()
    }

    /// Number of stored value fields: `schema.len() - 1`.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// (field name, value) pairs in schema order, timestamp column excluded.
    pub fn fields(&self) -> impl Iterator<Item = (&str, f64)> {
        self.schema
            .fields()
            .iter()
            .skip(1)
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}
