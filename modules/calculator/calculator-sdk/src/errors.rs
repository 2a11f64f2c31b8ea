//! Public error types for calculator API clients.

use thiserror::Error;

/// Errors that can be returned by a [`crate::CalculatorApi`] implementation.
#[derive(Error, Debug, Clone)]
pub enum CalculatorError {
    /// The server rejected the request (HTTP 400); `message` is the payload text.
    #[error("{message}")]
    Validation { message: String },

    /// The request never produced a usable response (connection, timeout,
    /// unexpected status).
    #[error("network error: {message}")]
    Transport { message: String },

    /// The response arrived but did not match the wire contract.
    #[error("invalid response: {message}")]
    Decode { message: String },
}

impl CalculatorError {
    /// Create a Validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a Transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a Decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}
