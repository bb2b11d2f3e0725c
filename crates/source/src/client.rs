//! Read-only client for the spreadsheet values endpoint.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;
use sheetscout_grid::Grid;

use crate::auth::TokenManager;
use crate::config::SheetsConfig;
use crate::error::{SourceError, SourceResult};
use crate::range::{compose_range, validate_range};

/// Range fetched by [`SheetsClient::headers`]: the first row across the
/// first 26 columns.
const HEADER_RANGE: &str = "A1:Z1";

/// Read-only client for one spreadsheet document.
///
/// Construction loads credential material from disk and performs no network
/// I/O. Each fetch refreshes the session token when needed and then issues
/// exactly one request: no retries, no caching, no partial results. Callers
/// decide whether a failure aborts the run or degrades to "no data".
#[derive(Debug)]
pub struct SheetsClient {
    config: SheetsConfig,
    http: Client,
    auth: TokenManager,
}

/// Wire shape of the values endpoint response. The `values` key is omitted
/// entirely for an empty range and decodes as an empty grid.
#[derive(Debug, Deserialize)]
struct ValuesResponse {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetsClient {
    /// Build a client from explicit configuration.
    ///
    /// Fails with [`SourceError::CredentialsMissing`] when the client
    /// secrets or cached token are absent, or the token is expired with no
    /// refresh token to recover it.
    pub fn connect(config: SheetsConfig) -> SourceResult<Self> {
        let auth = TokenManager::load(&config.credentials_path, &config.token_path)?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            // Disable system proxy lookup to avoid macOS system-configuration issues
            .no_proxy()
            .build()
            .map_err(|e| SourceError::DataSource(e.to_string()))?;

        Ok(SheetsClient { config, http, auth })
    }

    /// Fetch one sheet, optionally restricted to an A1-style range, as a
    /// [`Grid`].
    ///
    /// The range is validated locally before any network traffic; the sheet
    /// name is passed through verbatim.
    pub async fn fetch(&mut self, sheet: &str, range: Option<&str>) -> SourceResult<Grid> {
        if let Some(range) = range {
            validate_range(range)?;
        }
        let full_range = compose_range(sheet, range);
        let url = self.values_url(&full_range)?;
        let token = self.auth.bearer_token(&self.http).await?;

        tracing::debug!(range = %full_range, "fetching sheet values");
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| SourceError::DataSource(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::DataSource(format!(
                "HTTP {} - {}",
                response.status(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body: ValuesResponse = response
            .json()
            .await
            .map_err(|e| SourceError::DataSource(format!("Failed to parse JSON: {e}")))?;

        Ok(Grid::from_rows(body.values))
    }

    /// Fetch just the header row of a sheet.
    pub async fn headers(&mut self, sheet: &str) -> SourceResult<Vec<String>> {
        let grid = self.fetch(sheet, Some(HEADER_RANGE)).await?;
        Ok(grid.headers().to_vec())
    }

    /// Spreadsheet identifier this client reads from.
    #[must_use]
    pub fn spreadsheet_id(&self) -> &str {
        &self.config.spreadsheet_id
    }

    fn values_url(&self, full_range: &str) -> SourceResult<Url> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| SourceError::DataSource(format!("invalid base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| SourceError::DataSource("base URL cannot hold a path".to_string()))?
            .pop_if_empty()
            .extend([
                "v4",
                "spreadsheets",
                self.config.spreadsheet_id.as_str(),
                "values",
                full_range,
            ]);
        Ok(url)
    }
}
