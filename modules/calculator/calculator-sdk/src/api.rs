//! Object-safe client boundary for the calculator API.

use async_trait::async_trait;

use crate::errors::CalculatorError;
use crate::models::Operation;

/// Client interface to the arithmetic endpoints.
///
/// Designed for injection as `Arc<dyn CalculatorApi>`; front-ends stay
/// agnostic of the transport behind it.
#[async_trait]
pub trait CalculatorApi: Send + Sync {
    /// Perform `op` on the two operands and return the numeric result.
    ///
    /// # Errors
    /// Returns [`CalculatorError`] when the server rejects the request, the
    /// transport fails, or the response violates the wire contract.
    async fn compute(&self, op: Operation, a: f64, b: f64) -> Result<f64, CalculatorError>;
}
