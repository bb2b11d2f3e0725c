//! Column/pattern filters for record searches.

use indexmap::IndexMap;

use crate::record::Record;

/// Search criteria: column-name to substring-pattern pairs.
///
/// A record matches when every pattern occurs case-insensitively in that
/// record's value for the named column. A pattern naming a column absent
/// from the header can never match, and empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    patterns: IndexMap<String, String>,
}

impl Criteria {
    /// Criteria with no constraints; matches every record.
    #[must_use]
    pub fn new() -> Self {
        Criteria::default()
    }

    /// Add one column/pattern constraint. Re-adding a column replaces its
    /// pattern.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.patterns.insert(column.into(), pattern.into());
        self
    }

    /// True when the record satisfies every constraint.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.patterns.iter().all(|(column, pattern)| {
            record
                .get(column)
                .is_some_and(|value| value.to_lowercase().contains(&pattern.to_lowercase()))
        })
    }

    /// Number of constraints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate over `(column, pattern)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.patterns.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Criteria {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut criteria = Criteria::new();
        for (column, pattern) in iter {
            criteria = criteria.with(column, pattern);
        }
        criteria
    }
}
