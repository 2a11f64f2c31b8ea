//! Mapping of request failures onto the fixed `{"error": …}` wire payload.

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::domain::ComputeError;

use super::dto::ErrorBody;

/// API-level error for the arithmetic endpoints. Every variant is a client
/// error; internal failures cannot occur in a stateless computation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// One or both query operands were missing or failed to parse.
    #[error("Both parameters must be numbers.")]
    NonNumericOperands,

    /// The computation produced an infinite or NaN value.
    #[error("Result is not a finite number.")]
    NonFiniteResult,
}

impl From<ComputeError> for ApiError {
    fn from(e: ComputeError) -> Self {
        match e {
            ComputeError::NonFinite => ApiError::NonFiniteResult,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
