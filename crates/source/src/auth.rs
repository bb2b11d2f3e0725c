//! OAuth credential material: client secrets and the cached session token.
//!
//! Token acquisition is never interactive here. The client-secrets file and
//! a previously obtained token must both exist on disk; an expired token is
//! recovered through its refresh token, and anything less is a
//! [`CredentialsMissing`](crate::SourceError::CredentialsMissing) failure
//! telling the user what to fix.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SourceError, SourceResult};

/// OAuth scope requested for read-only spreadsheet access.
pub const READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

const FULL_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Client identity loaded from the OAuth client-secrets file.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// On-disk shape of the client-secrets file: the credential block sits under
/// an `installed` or `web` wrapper key.
#[derive(Debug, Deserialize)]
struct SecretsFile {
    installed: Option<ClientCredentials>,
    web: Option<ClientCredentials>,
}

impl ClientCredentials {
    /// Load client secrets from a JSON file.
    ///
    /// A missing file fails with setup guidance rather than a bare not-found.
    pub fn load(path: &Path) -> SourceResult<Self> {
        if !path.exists() {
            return Err(SourceError::CredentialsMissing(format!(
                "credentials file not found at {}; generate OAuth client credentials and place them there",
                path.display()
            )));
        }
        let raw = fs::read_to_string(path)?;
        let file: SecretsFile = serde_json::from_str(&raw)?;
        file.installed.or(file.web).ok_or_else(|| {
            SourceError::CredentialsMissing(format!(
                "no installed or web client entry in {}",
                path.display()
            ))
        })
    }
}

/// Serialized session token, persisted between runs.
///
/// An explicit schema with an inspectable expiry, in place of an opaque
/// serialized blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
    #[serde(default)]
    pub scopes: Vec<String>,
}

impl StoredToken {
    /// Whether the token is past its recorded expiry at `now`.
    ///
    /// A token without a recorded expiry never counts as expired and is
    /// used as-is.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry.is_some_and(|at| at <= now)
    }

    /// Read a token from a JSON file.
    pub fn load(path: &Path) -> SourceResult<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Persist the token as JSON for the next run.
    pub fn save(&self, path: &Path) -> SourceResult<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Wire shape of a token-endpoint refresh response.
#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    scope: Option<String>,
}

/// Owns the credential material and keeps the session token fresh.
#[derive(Debug)]
pub struct TokenManager {
    credentials: ClientCredentials,
    token: StoredToken,
    token_path: PathBuf,
}

impl TokenManager {
    /// Load client secrets and the cached token.
    ///
    /// Fails when either file is missing, or when the token is already
    /// expired and carries no refresh token to recover it with.
    pub fn load(credentials_path: &Path, token_path: &Path) -> SourceResult<Self> {
        let credentials = ClientCredentials::load(credentials_path)?;
        if !token_path.exists() {
            return Err(SourceError::CredentialsMissing(format!(
                "no cached token at {}; complete the authorization flow once to create it",
                token_path.display()
            )));
        }
        let token = StoredToken::load(token_path)?;
        if token.is_expired(Utc::now()) && token.refresh_token.is_none() {
            return Err(SourceError::CredentialsMissing(format!(
                "cached token at {} is expired and has no refresh token",
                token_path.display()
            )));
        }
        if !token.scopes.is_empty()
            && !token.scopes.iter().any(|s| s == READONLY_SCOPE || s == FULL_SCOPE)
        {
            tracing::warn!("cached token was not granted a spreadsheets scope; fetches may be rejected");
        }
        Ok(TokenManager {
            credentials,
            token,
            token_path: token_path.to_path_buf(),
        })
    }

    /// Current bearer token, refreshing and persisting it first when the
    /// recorded expiry has passed.
    pub async fn bearer_token(&mut self, http: &reqwest::Client) -> SourceResult<&str> {
        if self.token.is_expired(Utc::now()) {
            self.refresh(http).await?;
        }
        Ok(&self.token.access_token)
    }

    async fn refresh(&mut self, http: &reqwest::Client) -> SourceResult<()> {
        let Some(refresh_token) = self.token.refresh_token.clone() else {
            return Err(SourceError::CredentialsMissing(
                "token expired and no refresh token is available".to_string(),
            ));
        };
        tracing::debug!(token_uri = %self.credentials.token_uri, "refreshing expired access token");
        let params = [
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token.as_str()),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
        ];
        let response = http
            .post(&self.credentials.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| SourceError::DataSource(format!("token refresh failed: {e}")))?;
        if !response.status().is_success() {
            return Err(SourceError::DataSource(format!(
                "token refresh failed: HTTP {} - {}",
                response.status(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }
        let refreshed: RefreshResponse = response
            .json()
            .await
            .map_err(|e| SourceError::DataSource(format!("failed to parse token response: {e}")))?;

        let scopes = match refreshed.scope {
            Some(granted) => granted.split_whitespace().map(str::to_string).collect(),
            None => std::mem::take(&mut self.token.scopes),
        };
        self.token = StoredToken {
            access_token: refreshed.access_token,
            // The endpoint may rotate the refresh token; keep the old one
            // when it does not.
            refresh_token: refreshed.refresh_token.or(Some(refresh_token)),
            expiry: refreshed
                .expires_in
                .map(|secs| Utc::now() + Duration::seconds(secs)),
            scopes,
        };
        if let Err(e) = self.token.save(&self.token_path) {
            // The in-memory token is still good; only the next run pays.
            tracing::warn!("failed to persist refreshed token: {e}");
        }
        Ok(())
    }
}
