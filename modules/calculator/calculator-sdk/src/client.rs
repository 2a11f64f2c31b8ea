//! HTTP implementation of [`CalculatorApi`].
//!
//! Issues one GET per computation against `{base}/api/{op}?a=&b=` and maps
//! the response onto [`CalculatorError`].

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::api::CalculatorApi;
use crate::errors::CalculatorError;
use crate::models::Operation;

/// Success payload: `{"result": <number>}`.
#[derive(Debug, Deserialize)]
struct ResultBody {
    result: f64,
}

/// Error payload: `{"error": "<message>"}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// reqwest-backed calculator client.
///
/// Cloning is cheap; the inner `reqwest::Client` is an `Arc` internally.
#[derive(Debug, Clone)]
pub struct HttpCalculator {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpCalculator {
    /// Create a client for the given server base URL (e.g. `http://127.0.0.1:8087`).
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Build the endpoint URL with both operands in the query string.
    fn endpoint(&self, op: Operation, a: f64, b: f64) -> Result<Url, CalculatorError> {
        let mut url = self
            .base_url
            .join(&format!("api/{}", op.path()))
            .map_err(|e| CalculatorError::transport(format!("invalid endpoint URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("a", &a.to_string())
            .append_pair("b", &b.to_string());
        Ok(url)
    }
}

#[async_trait]
impl CalculatorApi for HttpCalculator {
    async fn compute(&self, op: Operation, a: f64, b: f64) -> Result<f64, CalculatorError> {
        let url = self.endpoint(op, a, b)?;
        debug!(%url, "sending calculator request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| CalculatorError::transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            let body: ErrorBody = response
                .json()
                .await
                .map_err(|e| CalculatorError::decode(e.to_string()))?;
            return Err(CalculatorError::validation(body.error));
        }
        if !status.is_success() {
            return Err(CalculatorError::transport(format!(
                "unexpected status {status}"
            )));
        }

        let body: ResultBody = response
            .json()
            .await
            .map_err(|e| CalculatorError::decode(e.to_string()))?;

        debug!(result = body.result, "calculator request completed");
        Ok(body.result)
    }
}
