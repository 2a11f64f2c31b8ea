//! Axum handlers for the arithmetic endpoints.
//!
//! All four endpoints share the same shape: parse both query operands,
//! delegate to the domain [`Service`], wrap the value in the success payload.

use std::sync::Arc;

use axum::extract::Query;
use axum::{Extension, Json};
use calculator_sdk::Operation;

use crate::domain::Service;

use super::dto::{ErrorBody, OperandsQuery, ResultBody};
use super::error::ApiError;

fn parse_operand(raw: Option<&str>) -> Result<f64, ApiError> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .ok_or(ApiError::NonNumericOperands)
}

fn compute(
    svc: &Service,
    op: Operation,
    query: &OperandsQuery,
) -> Result<Json<ResultBody>, ApiError> {
    let a = parse_operand(query.a.as_deref())?;
    let b = parse_operand(query.b.as_deref())?;
    let result = svc.evaluate(op, a, b)?;
    Ok(Json(ResultBody { result }))
}

/// Add two numbers.
#[utoipa::path(
    get,
    path = "/api/add",
    tag = "calculator",
    params(
        ("a" = String, Query, description = "First operand, decimal numeric string"),
        ("b" = String, Query, description = "Second operand, decimal numeric string"),
    ),
    responses(
        (status = 200, description = "Sum of the operands", body = ResultBody),
        (status = 400, description = "Operands are not numbers", body = ErrorBody),
    )
)]
#[tracing::instrument(skip(svc, query), fields(a = query.a.as_deref(), b = query.b.as_deref()))]
#[allow(clippy::unused_async)] // axum handlers must be async
pub async fn add(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<OperandsQuery>,
) -> Result<Json<ResultBody>, ApiError> {
    compute(&svc, Operation::Add, &query)
}

/// Subtract the second number from the first.
#[utoipa::path(
    get,
    path = "/api/subtract",
    tag = "calculator",
    params(
        ("a" = String, Query, description = "First operand, decimal numeric string"),
        ("b" = String, Query, description = "Second operand, decimal numeric string"),
    ),
    responses(
        (status = 200, description = "Difference of the operands", body = ResultBody),
        (status = 400, description = "Operands are not numbers", body = ErrorBody),
    )
)]
#[tracing::instrument(skip(svc, query), fields(a = query.a.as_deref(), b = query.b.as_deref()))]
#[allow(clippy::unused_async)] // axum handlers must be async
pub async fn subtract(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<OperandsQuery>,
) -> Result<Json<ResultBody>, ApiError> {
    compute(&svc, Operation::Subtract, &query)
}

/// Multiply two numbers.
#[utoipa::path(
    get,
    path = "/api/multiply",
    tag = "calculator",
    params(
        ("a" = String, Query, description = "First operand, decimal numeric string"),
        ("b" = String, Query, description = "Second operand, decimal numeric string"),
    ),
    responses(
        (status = 200, description = "Product of the operands", body = ResultBody),
        (status = 400, description = "Operands are not numbers", body = ErrorBody),
    )
)]
#[tracing::instrument(skip(svc, query), fields(a = query.a.as_deref(), b = query.b.as_deref()))]
#[allow(clippy::unused_async)] // axum handlers must be async
pub async fn multiply(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<OperandsQuery>,
) -> Result<Json<ResultBody>, ApiError> {
    compute(&svc, Operation::Multiply, &query)
}

/// Divide the first number by the second.
#[utoipa::path(
    get,
    path = "/api/divide",
    tag = "calculator",
    params(
        ("a" = String, Query, description = "First operand, decimal numeric string"),
        ("b" = String, Query, description = "Second operand, decimal numeric string"),
    ),
    responses(
        (status = 200, description = "Quotient of the operands", body = ResultBody),
        (status = 400, description = "Operands are not numbers or the result is not finite", body = ErrorBody),
    )
)]
#[tracing::instrument(skip(svc, query), fields(a = query.a.as_deref(), b = query.b.as_deref()))]
#[allow(clippy::unused_async)] // axum handlers must be async
pub async fn divide(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<OperandsQuery>,
) -> Result<Json<ResultBody>, ApiError> {
    compute(&svc, Operation::Divide, &query)
}
