//! Processing status report over the status-column partition.

use std::fmt::Write;

use sheetscout_grid::Grid;

use crate::truncate;

/// Render the processed/unprocessed breakdown and the next batch to work.
#[must_use]
pub fn render_processing_status(grid: &Grid) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Processing Status ===");

    let groups = grid.classify_by_status();
    let processed = groups.processed.len();
    let unprocessed = groups.unprocessed.len();
    let total = grid.record_count();

    let _ = writeln!(out, "Total submissions: {total}");
    if total == 0 {
        // No percentages over an empty sheet.
        let _ = writeln!(out, "Processed: 0");
        let _ = writeln!(out, "Unprocessed: 0");
        return out;
    }

    let pct = |n: usize| n as f64 / total as f64 * 100.0;
    let _ = writeln!(out, "Processed: {processed} ({:.1}%)", pct(processed));
    let _ = writeln!(out, "Unprocessed: {unprocessed} ({:.1}%)", pct(unprocessed));

    if !groups.unprocessed.is_empty() {
        let batch = unprocessed.min(5);
        let _ = writeln!(out, "\nNext {batch} to process:");
        for (i, record) in groups.unprocessed.iter().take(5).enumerate() {
            let timestamp = truncate(record.get("Timestamp").unwrap_or("N/A"), 19);
            let email = truncate(record.get("Email").unwrap_or("N/A"), 30);
            let _ = writeln!(out, "  {}. {} - {}", i + 1, timestamp, email);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_status_column() {
        let grid = Grid::from_rows(vec![
            vec!["Timestamp", "Email", "Status"],
            vec!["03/14/2024 10:30:00", "a@x.com", "sent"],
            vec!["03/14/2024 11:00:00", "b@x.com", ""],
            vec!["03/14/2024 11:30:00", "c@x.com", "sent"],
            vec!["03/14/2024 12:00:00", "d@x.com", ""],
        ]);

        let report = render_processing_status(&grid);
        let expected = "=== Processing Status ===\n\
                        Total submissions: 4\n\
                        Processed: 2 (50.0%)\n\
                        Unprocessed: 2 (50.0%)\n\
                        \n\
                        Next 2 to process:\n\
                        \x20 1. 03/14/2024 11:00:00 - b@x.com\n\
                        \x20 2. 03/14/2024 12:00:00 - d@x.com\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_truncates_timestamp_to_nineteen_chars() {
        let grid = Grid::from_rows(vec![
            vec!["Timestamp", "Email", "Status"],
            vec!["03/14/2024 10:30:00.123456", "a@x.com", ""],
        ]);

        let report = render_processing_status(&grid);
        assert!(report.contains("1. 03/14/2024 10:30:00 - a@x.com"));
        assert!(!report.contains(".123456"));
    }

    #[test]
    fn test_render_without_status_column_reports_all_processed() {
        let grid = Grid::from_rows(vec![
            vec!["Email"],
            vec!["a@x.com"],
            vec!["b@x.com"],
        ]);

        let report = render_processing_status(&grid);
        assert!(report.contains("Processed: 2 (100.0%)"));
        assert!(report.contains("Unprocessed: 0 (0.0%)"));
        assert!(!report.contains("Next"));
    }

    #[test]
    fn test_render_empty_sheet_skips_percentages() {
        let report = render_processing_status(&Grid::new());
        let expected = "=== Processing Status ===\n\
                        Total submissions: 0\n\
                        Processed: 0\n\
                        Unprocessed: 0\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_caps_next_batch_at_five() {
        let mut rows = vec![vec!["Email".to_string(), "Status".to_string()]];
        for i in 0..8 {
            rows.push(vec![format!("user{i}@x.com"), String::new()]);
        }
        let grid = Grid::from_rows(rows);

        let report = render_processing_status(&grid);
        assert!(report.contains("Next 5 to process:"));
        assert!(report.contains("5. N/A - user4@x.com"));
        assert!(!report.contains("user5@x.com"));
    }
}
