//! Domain service for the calculator module.
//!
//! Stateless; every computation is a pure function of its operands under
//! IEEE-754 double semantics.

use calculator_sdk::Operation;
use tracing::debug;

use crate::config::CalculatorConfig;

/// Error produced by a computation.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeError {
    /// The operands were numbers but the result is not representable as one.
    #[error("result is not a finite number")]
    NonFinite,
}

/// Domain service that performs arithmetic operations.
#[derive(Debug, Clone, Default)]
pub struct Service {
    config: CalculatorConfig,
}

impl Service {
    /// Create a new service with the given configuration.
    #[must_use]
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Perform `op` on the operands.
    ///
    /// # Errors
    /// Returns [`ComputeError::NonFinite`] when the result is infinite or NaN
    /// and the non-finite guard is enabled.
    pub fn evaluate(&self, op: Operation, a: f64, b: f64) -> Result<f64, ComputeError> {
        let result = match op {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => a / b,
        };
        debug!(op = op.path(), a, b, result, "performed computation");

        if self.config.reject_non_finite && !result.is_finite() {
            return Err(ComputeError::NonFinite);
        }
        Ok(result)
    }
}
