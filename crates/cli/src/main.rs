//! # sheetscout-cli
//!
//! Command-line report runner: fetches one sheet and prints the full
//! report suite.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use sheetscout_reports as reports;
use sheetscout_source::{SheetsClient, SheetsConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// sheetscout - submission reports for a remote spreadsheet
#[derive(Parser)]
#[command(name = "scout")]
#[command(author, version, about = "Read a remote spreadsheet and print submission reports", long_about = None)]
struct Cli {
    /// Spreadsheet document identifier
    #[arg(long = "spreadsheet", value_name = "ID")]
    spreadsheet_id: String,

    /// Sheet (tab) name to read
    #[arg(long, value_name = "NAME")]
    sheet: String,

    /// Path to the OAuth client-secrets file
    #[arg(long, default_value = "auth/credentials.json")]
    credentials: PathBuf,

    /// Path to the cached session token
    #[arg(long, default_value = "auth/token.json")]
    token: PathBuf,

    /// Restrict the fetch to an A1-style range
    #[arg(long, value_name = "RANGE")]
    range: Option<String>,

    /// Activity window in days
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(i64).range(1..))]
    days: i64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    let config = SheetsConfig::new(cli.spreadsheet_id.clone())
        .with_credentials_path(&cli.credentials)
        .with_token_path(&cli.token);
    let mut client = SheetsClient::connect(config)
        .context("failed to set up the data source; check the credential files")?;

    // One snapshot feeds every report, so they all describe the same data.
    let grid = client
        .fetch(&cli.sheet, cli.range.as_deref())
        .await
        .with_context(|| format!("failed to fetch sheet {:?}", cli.sheet))?;

    let now = Local::now().naive_local();
    print!("{}", reports::render_overview(&grid));
    println!();
    print!("{}", reports::render_activity(&grid, cli.days, now));
    println!();
    print!("{}", reports::render_processing_status(&grid));
    println!();
    print!("{}", reports::render_domains(&grid));
    println!();
    print!("{}", reports::render_search_examples(&grid));

    Ok(())
}
