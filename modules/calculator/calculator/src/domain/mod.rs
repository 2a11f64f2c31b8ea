//! Domain layer: the arithmetic computation service.

pub mod service;

pub use service::{ComputeError, Service};
