//! Error types for the gavel client core.
//!
//! This module provides a unified error type with explicit variants for
//! transport failures, server-reported status failures, and message
//! construction failures.

use std::fmt;
use thiserror::Error;

/// The unified error type for gavel operations.
///
/// Every rejected remote call carries exactly one of these variants.
/// Views never inspect this type directly; failures are converted to an
/// [`Outcome`](crate::Outcome) by the classifier.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, malformed endpoint).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Status failures reported by the manager service.
    #[error("status error: {0}")]
    Status(#[from] StatusError),

    /// Message construction or wire encoding failures.
    ///
    /// These are programmer errors and must never be caught and hidden.
    #[error("construction error: {0}")]
    Construction(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Construction(err.to_string())
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP failure outside the status protocol.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Status code names used by the manager service.
///
/// These mirror the canonical RPC status codes the backend emits in its
/// error bodies. Codes the client has no mapping for land on `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    InvalidArgument,
    Unauthenticated,
    PermissionDenied,
    NotFound,
    AlreadyExists,
    FailedPrecondition,
    Unimplemented,
    Internal,
    Unknown,
}

impl StatusCode {
    /// Map a status code name from an error body. Unrecognized names land
    /// on `Unknown` rather than failing the parse.
    pub fn from_name(name: &str) -> Self {
        match name {
            "InvalidArgument" => StatusCode::InvalidArgument,
            "Unauthenticated" => StatusCode::Unauthenticated,
            "PermissionDenied" => StatusCode::PermissionDenied,
            "NotFound" => StatusCode::NotFound,
            "AlreadyExists" => StatusCode::AlreadyExists,
            "FailedPrecondition" => StatusCode::FailedPrecondition,
            "Unimplemented" => StatusCode::Unimplemented,
            "Internal" => StatusCode::Internal,
            _ => StatusCode::Unknown,
        }
    }

    /// Fallback mapping from a bare HTTP status when the response body
    /// carries no parseable status code.
    pub fn from_http(status: u16) -> Self {
        match status {
            400 => StatusCode::InvalidArgument,
            401 => StatusCode::Unauthenticated,
            403 => StatusCode::PermissionDenied,
            404 => StatusCode::NotFound,
            409 => StatusCode::AlreadyExists,
            500 => StatusCode::Internal,
            501 => StatusCode::Unimplemented,
            _ => StatusCode::Unknown,
        }
    }

    /// The canonical name, as carried in error bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            StatusCode::InvalidArgument => "InvalidArgument",
            StatusCode::Unauthenticated => "Unauthenticated",
            StatusCode::PermissionDenied => "PermissionDenied",
            StatusCode::NotFound => "NotFound",
            StatusCode::AlreadyExists => "AlreadyExists",
            StatusCode::FailedPrecondition => "FailedPrecondition",
            StatusCode::Unimplemented => "Unimplemented",
            StatusCode::Internal => "Internal",
            StatusCode::Unknown => "Unknown",
        }
    }
}

impl serde::Serialize for StatusCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for StatusCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(StatusCode::from_name(&name))
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A status failure reported by the manager service.
#[derive(Debug)]
pub struct StatusError {
    /// The status code classification.
    pub code: StatusCode,
    /// Human-readable message from the server.
    pub message: Option<String>,
}

impl StatusError {
    /// Create a new status error.
    pub fn new(code: StatusCode, message: Option<String>) -> Self {
        Self { code, message }
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for StatusError {}
