//! # sheetscout-reports
//!
//! Text reports composed from [`sheetscout_grid`] queries. Each `render_*`
//! function takes a grid snapshot and returns a newline-terminated block of
//! lines; callers print the blocks and put blank lines between them.
//!
//! Rendering never fails and never touches the network. Reports that need
//! the current time take it as a parameter so output is reproducible.

mod activity;
mod domains;
mod overview;
mod search;
mod status;

pub use activity::{parse_timestamp, render_activity, DATE_FORMATS, TIMESTAMP_COLUMNS};
pub use domains::{render_domains, EMAIL_COLUMNS};
pub use overview::render_overview;
pub use search::render_search_examples;
pub use status::render_processing_status;

/// Clip a display value to at most `max_chars` characters.
pub(crate) fn truncate(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}
