//! The grid itself and every query over it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::criteria::Criteria;
use crate::record::Record;

/// Header names checked, in priority order, when locating the status column.
pub const STATUS_COLUMNS: [&str; 4] = ["Status", "Email Status", "Processed", "Email Sent"];

/// A rectangular block of string cells as returned by the data source.
///
/// Row 0 is the header row; every later row is a data row. Data rows may be
/// shorter than the header (the source omits trailing empty cells) and are
/// padded back to header width when records are derived. Cells are plain
/// text: the source's rendered values, with no typed interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

/// The processed/unprocessed split produced by [`Grid::classify_by_status`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusGroups {
    pub processed: Vec<Record>,
    pub unprocessed: Vec<Record>,
}

impl Grid {
    /// An empty grid: no header, no data.
    #[must_use]
    pub fn new() -> Self {
        Grid::default()
    }

    /// Build a grid from raw rows, header first.
    #[must_use]
    pub fn from_rows<T: Into<String>>(rows: Vec<Vec<T>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Grid { rows }
    }

    // ===== Shape =====

    /// True when the grid has no rows at all, not even a header.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The header row, empty for an empty grid.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        self.rows.first().map_or(&[], Vec::as_slice)
    }

    /// Number of data rows (everything after the header).
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// All rows including the header, as fetched.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Data rows only.
    #[must_use]
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.split_first().map_or(&[], |(_, rest)| rest)
    }

    /// Index of the first header cell with this exact name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers().iter().position(|h| h == name)
    }

    /// First candidate present in the header, scanning candidates in order.
    ///
    /// Candidate order is a priority ranking: the first hit wins even when
    /// several candidates are present.
    #[must_use]
    pub fn find_column<'c>(&self, candidates: &[&'c str]) -> Option<&'c str> {
        let headers = self.headers();
        candidates
            .iter()
            .find(|name| headers.iter().any(|h| h == *name))
            .copied()
    }

    // ===== Record derivation =====

    /// Derive one record per data row, in sheet order.
    #[must_use]
    pub fn to_records(&self) -> Vec<Record> {
        match self.rows.split_first() {
            Some((headers, data)) => data.iter().map(|row| Record::from_row(headers, row)).collect(),
            None => Vec::new(),
        }
    }

    // ===== Queries =====

    /// The last `n` records in sheet order; all of them when `n` exceeds the
    /// count, none when `n` is zero.
    #[must_use]
    pub fn latest(&self, n: usize) -> Vec<Record> {
        let records = self.to_records();
        let skip = records.len().saturating_sub(n);
        records.into_iter().skip(skip).collect()
    }

    /// Records matching every criterion, in sheet order.
    #[must_use]
    pub fn search(&self, criteria: &Criteria) -> Vec<Record> {
        self.to_records()
            .into_iter()
            .filter(|record| criteria.matches(record))
            .collect()
    }

    /// The status column in effect, if any. See [`STATUS_COLUMNS`].
    #[must_use]
    pub fn status_column(&self) -> Option<&'static str> {
        self.find_column(&STATUS_COLUMNS)
    }

    /// Split records into processed and unprocessed.
    ///
    /// A record is processed when its status value is non-empty after
    /// trimming whitespace. Without a status column every record counts as
    /// processed, so the unprocessed side never invents work to do.
    #[must_use]
    pub fn classify_by_status(&self) -> StatusGroups {
        let records = self.to_records();
        let Some(status) = self.status_column() else {
            return StatusGroups {
                processed: records,
                unprocessed: Vec::new(),
            };
        };
        let mut groups = StatusGroups::default();
        for record in records {
            if record.get(status).is_some_and(|v| !v.trim().is_empty()) {
                groups.processed.push(record);
            } else {
                groups.unprocessed.push(record);
            }
        }
        groups
    }

    /// Count records per email domain, most frequent first.
    ///
    /// The email column is the first of `candidates` present in the header.
    /// A cell contributes when its trimmed value contains `@`; the domain is
    /// everything after the first `@`, lowercased. Ties keep first-seen
    /// order. No email column means an empty histogram.
    #[must_use]
    pub fn domain_histogram(&self, candidates: &[&str]) -> Vec<(String, usize)> {
        let Some(email) = self.find_column(candidates) else {
            return Vec::new();
        };
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for record in self.to_records() {
            let Some(value) = record.get(email) else {
                continue;
            };
            let value = value.trim();
            if let Some(at) = value.find('@') {
                let domain = value[at + 1..].to_lowercase();
                *counts.entry(domain).or_insert(0) += 1;
            }
        }
        let mut histogram: Vec<(String, usize)> = counts.into_iter().collect();
        // Stable sort: equal counts stay in first-seen order.
        histogram.sort_by(|a, b| b.1.cmp(&a.1));
        histogram
    }
}
