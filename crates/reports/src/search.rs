//! Sample searches: a few canned criteria over the grid.

use std::fmt::Write;

use sheetscout_grid::{Criteria, Grid};

/// Render a handful of canned substring searches with sample hits.
#[must_use]
pub fn render_search_examples(grid: &Grid) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Search Examples ===");

    let gmail_users = grid.search(&Criteria::new().with("Email", "gmail"));
    let _ = writeln!(out, "Gmail users: {}", gmail_users.len());

    let johns = grid.search(&Criteria::new().with("Name", "John"));
    let _ = writeln!(out, "Submissions with 'John' in name: {}", johns.len());

    if let Some(first) = gmail_users.first() {
        let _ = writeln!(out, "Sample Gmail user: {}", first.get("Email").unwrap_or("N/A"));
    }
    if let Some(first) = johns.first() {
        let _ = writeln!(
            out,
            "Sample John: {} - {}",
            first.get("Name").unwrap_or("N/A"),
            first.get("Email").unwrap_or("N/A")
        );
    }
    out
}
