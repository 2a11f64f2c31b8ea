//! Arithmetic HTTP API module.
//!
//! Exposes four stateless GET endpoints under `/api`
//! (`add`, `subtract`, `multiply`, `divide`), each taking two numeric query
//! parameters and returning `{"result": <number>}` on success or a fixed
//! `{"error": …}` payload with status 400 on invalid input.
//!
//! Layering follows the usual module convention: `domain` holds the
//! computation service, `api::rest` the transport-specific DTOs, error
//! mapping, handlers and route registration.

pub mod api;
pub mod config;
pub mod domain;

pub use config::CalculatorConfig;
pub use domain::Service;
