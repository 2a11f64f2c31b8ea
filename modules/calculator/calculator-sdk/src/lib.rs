//! Client SDK for the Abacus calculator API.
//!
//! The SDK owns the pieces both sides of the wire agree on: the
//! [`Operation`] model, the [`CalculatorError`] taxonomy and the object-safe
//! [`CalculatorApi`] boundary. [`HttpCalculator`] is the HTTP implementation
//! used by front-ends; servers and tests can provide their own.

mod api;
mod client;
mod errors;
mod models;

pub use api::CalculatorApi;
pub use client::HttpCalculator;
pub use errors::CalculatorError;
pub use models::Operation;
