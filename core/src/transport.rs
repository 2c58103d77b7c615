//! Network seam between the client and the HTTP stack.
//!
//! `BorsdataClient` builds [`HttpRequest`] values and interprets
//! [`HttpResponse`] values; a `Transport` is the only thing that performs
//! I/O. `UreqTransport` is the blocking production implementation. Tests
//! substitute canned transports.

use log::trace;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Full-market price snapshots exceed ureq's default 10 MB body cap.
pub const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

/// Executes a GET request and returns the raw response.
///
/// Implementations must return non-2xx responses as data, not as `Err`;
/// `Err` is reserved for requests that produced no response at all.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a pooled `ureq::Agent`.
///
/// The agent is cheap to clone and safe to share between threads; every
/// clone reuses the same connection pool.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    body_limit: u64,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::with_body_limit(MAX_BODY_BYTES)
    }

    /// Transport that fails responses whose body exceeds `limit` bytes.
    pub fn with_body_limit(limit: u64) -> Self {
        // Status interpretation belongs to the client.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            body_limit: limit,
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.agent.get(&request.uri());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let bytes = response
            .body_mut()
            .with_config()
            .limit(self.body_limit)
            .read_to_vec()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        trace!("{} -> {} ({} bytes)", request.url, status, bytes.len());

        // A success body must decode; an error body only has to be shown.
        let body = if (200..300).contains(&status) {
            String::from_utf8(bytes)
                .map_err(|e| ApiError::DeserializationError(format!("response body is not UTF-8: {e}")))?
        } else {
            String::from_utf8_lossy(&bytes).into_owned()
        };

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
