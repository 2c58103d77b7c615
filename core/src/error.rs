//! Error types for the Borsdata API client.
//!
//! # Design
//! Failures fall into four families that callers handle differently:
//! configuration (no API key), invalid input (rejected before any request
//! is built), transport (connection failure or a non-2xx status) and decode
//! (the body does not match the expected record). Non-2xx responses keep the
//! raw status code and body; upstream error bodies are RFC 7807 problem
//! documents and can be decoded with [`ApiError::problem_details`].
//!
//! Per-item `error` strings inside batch responses are not errors of the
//! call and never surface here; see [`crate::types::BatchItem`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by `BorsdataClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No API key was passed explicitly and the environment variable is unset.
    #[error("missing API key: pass one explicitly or set {0}")]
    MissingApiKey(&'static str),

    /// A string did not match any literal of a closed parameter set.
    #[error("invalid {name} `{value}`, expected one of: {expected}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        expected: String,
    },

    /// A call does not satisfy its endpoint declaration.
    #[error("invalid request for {endpoint}: {message}")]
    InvalidRequest {
        endpoint: &'static str,
        message: String,
    },

    /// The request never produced an HTTP response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),
}

impl ApiError {
    /// True for connection failures and non-2xx statuses.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::HttpError { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::DeserializationError(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::HttpError { status: 404, .. })
    }

    /// HTTP status of a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Decode the body of an `HttpError` as a problem document.
    ///
    /// Returns `None` for other variants and for bodies that are not
    /// problem documents.
    pub fn problem_details(&self) -> Option<ProblemDetails> {
        match self {
            ApiError::HttpError { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }
}

/// RFC 7807 error body returned by the API on 4xx/5xx.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub status: Option<i64>,
    pub detail: Option<String>,
    pub instance: Option<String>,
}
