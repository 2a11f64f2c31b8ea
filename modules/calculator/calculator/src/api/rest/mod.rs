//! REST surface: DTOs, error mapping, handlers and route registration.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

pub use routes::{openapi, router};
