//! Route registration and OpenAPI document for the calculator module.

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use utoipa::OpenApi;

use crate::domain::Service;

use super::dto::{ErrorBody, ResultBody};
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Abacus calculator API",
        description = "Stateless arithmetic endpoints"
    ),
    paths(
        handlers::add,
        handlers::subtract,
        handlers::multiply,
        handlers::divide
    ),
    components(schemas(ResultBody, ErrorBody)),
    tags((name = "calculator", description = "Arithmetic endpoints"))
)]
struct ApiDoc;

/// OpenAPI document covering the four arithmetic endpoints.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Register all REST routes for the calculator module.
#[allow(clippy::needless_pass_by_value)] // Arc is intentionally passed by value for Extension layer
#[must_use]
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/api/add", get(handlers::add))
        .route("/api/subtract", get(handlers::subtract))
        .route("/api/multiply", get(handlers::multiply))
        .route("/api/divide", get(handlers::divide))
        .layer(Extension(service))
}
