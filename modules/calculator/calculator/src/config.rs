use serde::{Deserialize, Serialize};

/// Configuration for the `calculator` module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Reject computations whose result is not a finite number (divide by
    /// zero reaching the server, multiplication overflow) with a 400 instead
    /// of serializing `null` into the numeric result field.
    #[serde(default = "default_reject_non_finite")]
    pub reject_non_finite: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            reject_non_finite: default_reject_non_finite(),
        }
    }
}

fn default_reject_non_finite() -> bool {
    true
}
