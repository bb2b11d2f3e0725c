//! Adapter configuration.

use std::path::{Path, PathBuf};

/// Base URL of the hosted spreadsheet API.
pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Explicit configuration for a [`SheetsClient`](crate::SheetsClient).
///
/// Everything here is per-client state so the adapter can be pointed at any
/// spreadsheet, any credential files, or a local mock server.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    /// Identifier of the spreadsheet document.
    pub spreadsheet_id: String,
    /// API endpoint; override to point tests at a mock server.
    pub base_url: String,
    /// Path to the OAuth client-secrets JSON file.
    pub credentials_path: PathBuf,
    /// Path to the cached session token JSON file.
    pub token_path: PathBuf,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl SheetsConfig {
    /// Configuration for one spreadsheet with default endpoint and paths.
    #[must_use]
    pub fn new(spreadsheet_id: impl Into<String>) -> Self {
        SheetsConfig {
            spreadsheet_id: spreadsheet_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials_path: PathBuf::from("auth/credentials.json"),
            token_path: PathBuf::from("auth/token.json"),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Override the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the client-secrets file location.
    #[must_use]
    pub fn with_credentials_path(mut self, path: impl AsRef<Path>) -> Self {
        self.credentials_path = path.as_ref().to_path_buf();
        self
    }

    /// Override the cached token location.
    #[must_use]
    pub fn with_token_path(mut self, path: impl AsRef<Path>) -> Self {
        self.token_path = path.as_ref().to_path_buf();
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SheetsConfig::new("doc-1");
        assert_eq!(config.spreadsheet_id, "doc-1");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.credentials_path, PathBuf::from("auth/credentials.json"));
        assert_eq!(config.token_path, PathBuf::from("auth/token.json"));
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_builder_overrides() {
        let config = SheetsConfig::new("doc-1")
            .with_base_url("http://127.0.0.1:9999")
            .with_credentials_path("/tmp/c.json")
            .with_token_path("/tmp/t.json")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.credentials_path, PathBuf::from("/tmp/c.json"));
        assert_eq!(config.token_path, PathBuf::from("/tmp/t.json"));
        assert_eq!(config.timeout_secs, 5);
    }
}
