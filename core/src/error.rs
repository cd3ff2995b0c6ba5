//! Error types for the payments API client.
//!
//! # Design
//! Callers must be able to tell three situations apart: the remote service
//! answered with a failure status (`Error::Api`), the call never completed
//! (`Error::Transport`), or a success body did not match the expected type
//! (`Error::Decode`). `ApiError` is the structured body of the first case and
//! is what resource façades hand back to their own callers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::redact::redact;

/// Status code used when a failure carries no usable HTTP status.
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// Message stored when an error body is present but cannot be parsed.
pub const UNEXPECTED_RESPONSE: &str = "Unexpected response";

/// Failure reported by the remote API through a non-success status.
///
/// Instances are immutable. `original_request` is redacted on construction
/// and never holds an unmasked password.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    http_status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_help_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    original_request: Option<String>,
}

/// Fields accepted by [`ApiError::new`]. Everything is optional.
#[derive(Debug, Clone, Default)]
pub struct ApiErrorOptions {
    pub status_code: Option<u16>,
    pub custom_code: Option<String>,
    pub message: Option<String>,
    pub description: Option<String>,
    pub error_help_url: Option<String>,
    pub original_request: Option<String>,
}

/// The detail fields the remote API puts in an error body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    custom_code: Option<String>,
    message: Option<String>,
    description: Option<String>,
    error_help_url: Option<String>,
}

impl ApiError {
    /// Build an error from its parts.
    ///
    /// A missing or zero status becomes 500. The original request, if any,
    /// is redacted before it is stored.
    pub fn new(options: ApiErrorOptions) -> Self {
        let http_status_code = match options.status_code {
            Some(status) if status != 0 => status,
            _ => INTERNAL_SERVER_ERROR,
        };
        Self {
            http_status_code,
            custom_code: options.custom_code,
            message: options.message,
            description: options.description,
            error_help_url: options.error_help_url,
            original_request: options
                .original_request
                .map(|body| redact(&body).into_owned()),
        }
    }

    /// Build an error from a failed response.
    ///
    /// Never fails: an empty body yields an error with no detail fields and a
    /// body that is not the expected shape yields [`UNEXPECTED_RESPONSE`] as
    /// the message.
    pub fn from_response(status: u16, body: &str, original_request: Option<&str>) -> Self {
        let detail = if body.trim().is_empty() {
            ErrorBody::default()
        } else {
            serde_json::from_str::<ErrorBody>(body).unwrap_or_else(|_| ErrorBody {
                message: Some(UNEXPECTED_RESPONSE.to_string()),
                ..ErrorBody::default()
            })
        };
        Self::new(ApiErrorOptions {
            status_code: Some(status),
            custom_code: detail.custom_code,
            message: detail.message,
            description: detail.description,
            error_help_url: detail.error_help_url,
            original_request: original_request.map(str::to_string),
        })
    }

    pub fn status_code(&self) -> u16 {
        self.http_status_code
    }

    /// Application error code issued by the API, e.g. `TKN_NOT_FOUND`.
    pub fn custom_code(&self) -> Option<&str> {
        self.custom_code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn error_help_url(&self) -> Option<&str> {
        self.error_help_url.as_deref()
    }

    /// The request body that caused this error, with passwords masked.
    pub fn original_request(&self) -> Option<&str> {
        self.original_request.as_deref()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "API error: {message}"),
            None => write!(f, "API error: HTTP {}", self.http_status_code),
        }
    }
}

impl std::error::Error for ApiError {}

/// What went wrong below the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// DNS resolution or TCP/TLS connection failed.
    Connect,
    /// The connect or read timeout elapsed.
    Timeout,
    /// Reading or writing the stream failed mid-exchange.
    Io,
    /// The request could not be put on the wire (bad URL, bad header).
    InvalidRequest,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportErrorKind::Connect => "connection failed",
            TransportErrorKind::Timeout => "timed out",
            TransportErrorKind::Io => "i/o failure",
            TransportErrorKind::InvalidRequest => "invalid request",
        };
        f.write_str(name)
    }
}

/// The call could not be completed; no response status is available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("transport {kind}: {message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Errors returned by the client and the resource services.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API answered with a status of 300 or above.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The API could not be reached or the exchange broke off.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A success body could not be decoded into the requested type.
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// The request payload could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Encode(String),

    /// A service method was called with an unusable argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// The domain error, if the API reported one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    pub fn is_not_found(&self) -> bool {
        self.api_error().is_some_and(|e| e.status_code() == 404)
    }
}
