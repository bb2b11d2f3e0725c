//! Email domain distribution report.

use std::fmt::Write;

use sheetscout_grid::Grid;

/// Header names checked, in order, when locating the email column.
pub const EMAIL_COLUMNS: [&str; 3] = ["Email", "email", "Email Address"];

/// Render the domain histogram, top ten domains only.
#[must_use]
pub fn render_domains(grid: &Grid) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Email Domain Analysis ===");

    if grid.is_empty() {
        let _ = writeln!(out, "No data available");
        return out;
    }
    if grid.find_column(&EMAIL_COLUMNS).is_none() {
        let _ = writeln!(out, "No email column found");
        return out;
    }

    let histogram = grid.domain_histogram(&EMAIL_COLUMNS);
    let total = grid.record_count();
    let _ = writeln!(out, "Total unique domains: {}", histogram.len());
    let _ = writeln!(out, "Top 10 domains:");
    for (i, (domain, count)) in histogram.iter().take(10).enumerate() {
        // Percentage of all data rows, not just rows with a parseable email.
        let percentage = *count as f64 / total as f64 * 100.0;
        let _ = writeln!(out, "  {}. {}: {} ({:.1}%)", i + 1, domain, count, percentage);
    }
    out
}
