//! Column-name keyed view of a single data row.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single data row keyed by column name, in header order.
///
/// Records are derived from a grid, never stored in one: each query builds
/// fresh records, so results from two calls share no storage. Rows shorter
/// than the header are padded with empty strings during derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    /// Derive a record by zipping a header row with one data row.
    ///
    /// When the header repeats a name, the first occurrence wins; cells
    /// under later duplicates are unreachable by name.
    #[must_use]
    pub fn from_row(headers: &[String], row: &[String]) -> Self {
        let mut fields = IndexMap::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            let value = row.get(i).cloned().unwrap_or_default();
            fields.entry(name.clone()).or_insert(value);
        }
        Record { fields }
    }

    /// Look up the value for a column, `None` when the column is unknown.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Column names in header order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterate over `(column, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of addressable columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    /// Build a record directly from pairs; duplicate keys keep the first value.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = IndexMap::new();
        for (key, value) in iter {
            fields.entry(key.into()).or_insert_with(|| value.into());
        }
        Record { fields }
    }
}
