use std::fmt;

use classifier_core::Generation;
use thiserror::Error;

/// A successful response body: a JSON object whose fields are not yet trusted.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Settled {
        generation: Generation,
        result: Result<RawResponse, TransportError>,
    },
}

/// The engine thread has exited and no further events will arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("classifier engine is not running")]
pub struct EngineDisconnected;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub(crate) fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The configured base URL does not form a valid endpoint.
    InvalidEndpoint,
    /// Connection refused, DNS failure, transport timeout.
    NetworkFailure,
    /// The service answered with a non-success status.
    HttpError { status: u16 },
    /// The body was too large, not JSON, or not a JSON object.
    MalformedResponse,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportErrorKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            TransportErrorKind::NetworkFailure => write!(f, "network error"),
            // The status line itself travels in the error message.
            TransportErrorKind::HttpError { .. } => write!(f, "failed to classify job posting"),
            TransportErrorKind::MalformedResponse => write!(f, "malformed response"),
        }
    }
}
