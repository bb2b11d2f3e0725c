//! Activity window report: how many submissions arrived recently.

use std::fmt::Write;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use sheetscout_grid::Grid;

use crate::truncate;

/// Header names checked, in order, when locating the timestamp column.
pub const TIMESTAMP_COLUMNS: [&str; 4] = ["Timestamp", "Date", "Submitted", "Created"];

/// Accepted timestamp formats, tried in order; the first that parses wins.
pub const DATE_FORMATS: [&str; 3] = ["%m/%d/%Y %H:%M:%S", "%Y-%m-%d %H:%M:%S", "%m/%d/%Y"];

/// Parse a cell value against [`DATE_FORMATS`].
///
/// Date-only formats parse to midnight. `None` means the value matches no
/// accepted format; callers exclude such values instead of reporting them
/// as errors.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
        if let Ok(parsed) = NaiveDate::parse_from_str(value, format) {
            return parsed.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Render submission counts for the window `[now - days, now]`.
///
/// Without a timestamp column the report degrades to listing the latest
/// submissions. `now` is injected so tests can pin the window.
#[must_use]
pub fn render_activity(grid: &Grid, days: i64, now: NaiveDateTime) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Activity Analysis (Last {days} days) ===");

    if grid.is_empty() {
        let _ = writeln!(out, "No data available");
        return out;
    }

    let Some(timestamp_col) = grid.find_column(&TIMESTAMP_COLUMNS) else {
        let _ = writeln!(out, "No timestamp column found - showing latest submissions instead");
        let latest = grid.latest(10);
        let _ = writeln!(out, "Latest {} submissions:", latest.len());
        for (i, record) in latest.iter().enumerate() {
            let email = truncate(record.get("Email").unwrap_or("N/A"), 30);
            let _ = writeln!(out, "  {}. {}", i + 1, email);
        }
        return out;
    };

    let cutoff = now - Duration::days(days);
    let recent = grid
        .to_records()
        .iter()
        .filter_map(|record| record.get(timestamp_col))
        .filter_map(parse_timestamp)
        .filter(|timestamp| *timestamp >= cutoff)
        .count();
    let total = grid.record_count();

    let _ = writeln!(out, "Submissions in last {days} days: {recent}");
    let _ = writeln!(out, "Total submissions: {total}");
    if days > 0 {
        let _ = writeln!(
            out,
            "Average per day (last {days} days): {:.1}",
            recent as f64 / days as f64
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon_march_15() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    // ===== Timestamp Parsing =====

    #[test]
    fn test_parse_timestamp_formats() {
        let full = parse_timestamp("03/14/2024 10:30:00").unwrap();
        assert_eq!(full.to_string(), "2024-03-14 10:30:00");

        let iso = parse_timestamp("2024-03-14 10:30:00").unwrap();
        assert_eq!(iso, full);

        // Date-only parses to midnight.
        let date_only = parse_timestamp("3/14/2024").unwrap();
        assert_eq!(date_only.to_string(), "2024-03-14 00:00:00");
    }

    #[test]
    fn test_parse_timestamp_rejects_unknown_formats() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("14-03-2024"), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("03/14/2024 10:30"), None);
    }

    // ===== Rendering =====

    #[test]
    fn test_render_counts_window_and_skips_unparseable() {
        let grid = Grid::from_rows(vec![
            vec!["Timestamp", "Email"],
            vec!["03/14/2024 10:30:00", "a@x.com"], // in window
            vec!["3/10/2024", "b@x.com"],          // in window (midnight)
            vec!["2024-03-01 08:00:00", "c@x.com"], // before cutoff
            vec!["soon", "d@x.com"],               // unparseable, excluded
        ]);

        let report = render_activity(&grid, 7, noon_march_15());
        let expected = "=== Activity Analysis (Last 7 days) ===\n\
                        Submissions in last 7 days: 2\n\
                        Total submissions: 4\n\
                        Average per day (last 7 days): 0.3\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_cutoff_is_inclusive() {
        let grid = Grid::from_rows(vec![
            vec!["Timestamp"],
            vec!["03/08/2024 12:00:00"], // exactly now - 7 days
        ]);

        let report = render_activity(&grid, 7, noon_march_15());
        assert!(report.contains("Submissions in last 7 days: 1"));
    }

    #[test]
    fn test_render_without_timestamp_column_lists_latest() {
        let grid = Grid::from_rows(vec![
            vec!["Name", "Email"],
            vec!["Ada", "ada@x.com"],
            vec!["Grace", "grace-with-a-very-long-email-address@example.com"],
        ]);

        let report = render_activity(&grid, 7, noon_march_15());
        let expected = "=== Activity Analysis (Last 7 days) ===\n\
                        No timestamp column found - showing latest submissions instead\n\
                        Latest 2 submissions:\n\
                        \x20 1. ada@x.com\n\
                        \x20 2. grace-with-a-very-long-email-a\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_empty_grid() {
        let report = render_activity(&Grid::new(), 7, noon_march_15());
        assert_eq!(
            report,
            "=== Activity Analysis (Last 7 days) ===\nNo data available\n"
        );
    }

    #[test]
    fn test_render_timestamp_column_priority() {
        // "Timestamp" outranks "Date" when both exist.
        let grid = Grid::from_rows(vec![
            vec!["Date", "Timestamp"],
            vec!["01/01/2020", "03/14/2024 10:30:00"],
        ]);

        let report = render_activity(&grid, 7, noon_march_15());
        assert!(report.contains("Submissions in last 7 days: 1"));
    }
}
