//! # sheetscout-source
//!
//! Data source adapter for sheetscout. Owns the OAuth credential material,
//! keeps the session token fresh, and fetches sheet ranges from the
//! spreadsheet values API as [`Grid`](sheetscout_grid::Grid)s.
//!
//! A fetch either returns a complete grid or fails with a
//! [`SourceError`]; there is no caching, no retrying, and no partial-result
//! recovery. Repeated fetches may observe different data when the remote
//! sheet changes between calls, so callers wanting one consistent picture
//! fetch once and hand the same grid to every query.

mod auth;
mod client;
mod config;
mod error;
mod range;

pub use auth::{ClientCredentials, StoredToken, TokenManager, READONLY_SCOPE};
pub use client::SheetsClient;
pub use config::{SheetsConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{SourceError, SourceResult};
pub use range::{compose_range, parse_cell, validate_range};
