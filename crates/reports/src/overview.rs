//! Top-of-report overview: counts, columns, latest submissions.

use std::fmt::Write;

use sheetscout_grid::Grid;

/// Render the sheet overview block.
#[must_use]
pub fn render_overview(grid: &Grid) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Sheet Overview ===");
    let _ = writeln!(out, "Total submissions: {}", grid.record_count());

    let headers = grid.headers();
    let _ = writeln!(out, "Columns available: {}", headers.len());
    let shown = headers
        .iter()
        .take(5)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let suffix = if headers.len() > 5 { "..." } else { "" };
    let _ = writeln!(out, "Column names: {shown}{suffix}");

    let latest = grid.latest(3);
    let _ = writeln!(out, "\nLatest 3 submissions:");
    for (i, record) in latest.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} - {}",
            i + 1,
            record.get("Timestamp").unwrap_or("N/A"),
            record.get("Email").unwrap_or("N/A")
        );
    }
    out
}
