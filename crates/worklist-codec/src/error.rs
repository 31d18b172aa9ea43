//! Error types for token decoding.

use thiserror::Error;

/// A URL token could not be decoded into a query.
///
/// The codec never substitutes defaults; recovery (notification, clearing
/// URL parameters, falling back to the default fetch) is the caller's job.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("token is not valid url-safe base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token payload is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("token payload is not a valid query: {0}")]
    Json(#[from] serde_json::Error),
    #[error("token is empty")]
    Empty,
}
