//! Client configuration: base URL and API key.

use std::fmt;

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "https://apiservice.borsdata.se";

/// Environment variable read when no API key is passed explicitly.
pub const API_KEY_ENV: &str = "BORSDATA_API_KEY";

/// Base URL and API key for a `BorsdataClient`.
///
/// The key is redacted from the `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    api_key: String,
}

impl ClientConfig {
    /// Configuration for the public API with an explicit key.
    ///
    /// A blank key is accepted here and rejected by [`ClientConfig::resolve`];
    /// use `resolve` when the key comes from user input.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Read the key from `BORSDATA_API_KEY`.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::resolve(None)
    }

    /// Use `api_key` when given, otherwise fall back to `BORSDATA_API_KEY`.
    pub fn resolve(api_key: Option<String>) -> Result<Self, ApiError> {
        resolve_with(api_key, std::env::var(API_KEY_ENV).ok())
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

fn resolve_with(explicit: Option<String>, from_env: Option<String>) -> Result<ClientConfig, ApiError> {
    let key = explicit
        .or(from_env)
        .filter(|key| !key.trim().is_empty())
        .ok_or(ApiError::MissingApiKey(API_KEY_ENV))?;
    Ok(ClientConfig::new(key))
}
