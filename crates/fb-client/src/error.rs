//! Client error types.

use fb_core::MappingError;
use thiserror::Error;

/// Errors raised while talking to the events or facts API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body.
        message: String,
    },

    /// Response body is not the expected JSON shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Response parsed but lacks a required field.
    #[error("response is missing '{0}'")]
    MissingField(&'static str),

    /// Event could not be turned into a fact request.
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// Fact request could not be encoded into a body.
    #[error("encode error: {0}")]
    Encode(String),
}
