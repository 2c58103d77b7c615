//! Blocking client for the Borsdata API.
//!
//! # Design
//! `BorsdataClient` holds the base URL, the API key and a [`Transport`].
//! A request goes through three steps, each usable on its own:
//! [`build`](BorsdataClient::build) renders a [`Call`] into an
//! [`HttpRequest`], the transport executes it, and
//! [`parse`](BorsdataClient::parse) checks the status and decodes the body.
//! The typed endpoint methods live in [`crate::catalog`].
//!
//! The key is sent as `Authorization: Bearer <key>` on every request.
//! Endpoints that additionally want an `authKey` query parameter take it as
//! an explicit argument.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::endpoint::Call;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};

/// Synchronous client; every call blocks until the response is decoded.
#[derive(Debug, Clone)]
pub struct BorsdataClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl BorsdataClient<UreqTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }

    /// Client for the public API keyed from `BORSDATA_API_KEY`.
    pub fn from_env() -> Result<Self, ApiError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }
}

impl<T: Transport> BorsdataClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The key this client authenticates with, for endpoints that also
    /// want it as `authKey`.
    pub fn api_key(&self) -> &str {
        self.config.api_key()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Render a call into a request. No I/O.
    pub fn build(&self, call: &Call) -> Result<HttpRequest, ApiError> {
        let (path, query) = call.render()?;
        Ok(self.request(&path, query))
    }

    /// Check the status and decode the body into `R`.
    pub fn parse<R: DeserializeOwned>(&self, response: HttpResponse) -> Result<R, ApiError> {
        let value = parse_json(response)?;
        decode(value)
    }

    /// GET `path` with `query` and return the body as untyped JSON.
    ///
    /// Fails with `HttpError` on a non-2xx status and with
    /// `DeserializationError` when the body is not JSON.
    pub fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        let query = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let request = self.request(path, query);
        self.send(&request)
    }

    /// Build, execute and decode one call.
    pub fn fetch<R: DeserializeOwned>(&self, call: Call) -> Result<R, ApiError> {
        let request = self.build(&call)?;
        debug!(
            "{}: GET {} ({} query params)",
            call.endpoint().name,
            request.url,
            request.query.len()
        );
        decode(self.send(&request)?)
    }

    fn request(&self, path: &str, query: Vec<(String, String)>) -> HttpRequest {
        HttpRequest {
            url: format!("{}{}", self.config.base_url(), path),
            query,
            headers: vec![(
                "Authorization".to_string(),
                format!("Bearer {}", self.config.api_key()),
            )],
        }
    }

    fn send(&self, request: &HttpRequest) -> Result<Value, ApiError> {
        let response = self.transport.execute(request)?;
        if !response.is_success() {
            warn!("GET {} returned HTTP {}", request.url, response.status);
        }
        parse_json(response)
    }
}

fn parse_json(response: HttpResponse) -> Result<Value, ApiError> {
    if !response.is_success() {
        return Err(ApiError::HttpError {
            status: response.status,
            body: response.body,
        });
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

fn decode<R: DeserializeOwned>(value: Value) -> Result<R, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::DeserializationError(e.to_string()))
}
