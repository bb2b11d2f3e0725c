//! Runs every report over a small in-memory grid, no network or
//! credentials required.
//!
//! Run with: cargo run -p sheetscout-cli --example offline_report

use chrono::Local;
use sheetscout_grid::{Criteria, Grid};
use sheetscout_reports as reports;

fn main() {
    let grid = Grid::from_rows(vec![
        vec!["Timestamp", "Name", "Email", "Status"],
        vec!["03/10/2024 09:15:00", "Ada Lovelace", "ada@gmail.com", "sent"],
        vec!["03/11/2024 14:02:00", "Grace Hopper", "grace@navy.mil", ""],
        vec!["03/12/2024 08:47:00", "John Backus", "backus@ibm.com", "sent"],
        vec!["3/13/2024", "Johnny Appleseed", "johnny@gmail.com", ""],
        vec!["03/14/2024 16:30:00", "Joan Clarke", "joan@gchq.gov.uk"],
    ]);

    let now = Local::now().naive_local();
    print!("{}", reports::render_overview(&grid));
    println!();
    print!("{}", reports::render_activity(&grid, 7, now));
    println!();
    print!("{}", reports::render_processing_status(&grid));
    println!();
    print!("{}", reports::render_domains(&grid));
    println!();
    print!("{}", reports::render_search_examples(&grid));
    println!();

    // Direct queries work the same way the reports do
    let gmail = grid.search(&Criteria::new().with("Email", "gmail"));
    println!("Direct query: {} gmail submissions", gmail.len());
    for record in grid.latest(2) {
        println!(
            "Recent: {} <{}>",
            record.get("Name").unwrap_or("?"),
            record.get("Email").unwrap_or("?")
        );
    }
}
