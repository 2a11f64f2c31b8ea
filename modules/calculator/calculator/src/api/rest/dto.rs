//! REST DTOs for the calculator module.
//!
//! These types are transport-specific (serde + utoipa for REST/OpenAPI).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw query operands. Kept as strings so parse failures map onto the API's
/// fixed validation error rather than the framework's rejection text.
#[derive(Debug, Clone, Deserialize)]
pub struct OperandsQuery {
    /// First operand as a decimal numeric string.
    #[serde(default)]
    pub a: Option<String>,
    /// Second operand as a decimal numeric string.
    #[serde(default)]
    pub b: Option<String>,
}

/// Success payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResultBody {
    /// The computed value.
    pub result: f64,
}

/// Error payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    pub error: String,
}
