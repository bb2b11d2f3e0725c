//! # sheetscout-grid
//!
//! In-memory tabular model for sheetscout. A [`Grid`] holds the rectangular
//! block of string cells a data source returns, header row first, and every
//! query derives [`Record`]s (column-name keyed rows) from it on demand.
//!
//! Queries are pure functions of the grid: they never mutate it, never touch
//! the network, and never fail on a well-formed grid. Callers that want a
//! consistent picture across several queries fetch once and query the same
//! grid.
//!
//! ## Example
//!
//! ```
//! use sheetscout_grid::{Criteria, Grid};
//!
//! let grid = Grid::from_rows(vec![
//!     vec!["Name", "Email"],
//!     vec!["Ada", "ada@example.com"],
//!     vec!["Grace", "grace@navy.mil"],
//! ]);
//!
//! assert_eq!(grid.record_count(), 2);
//!
//! let hits = grid.search(&Criteria::new().with("Email", "EXAMPLE"));
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].get("Name"), Some("Ada"));
//! ```

mod criteria;
mod grid;
mod record;

pub use criteria::Criteria;
pub use grid::{Grid, StatusGroups, STATUS_COLUMNS};
pub use record::Record;
