//! Router assembly and the HTTP serving loop.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::{Json, Router};
use calculator::domain::Service;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::{AppConfig, CorsConfig};

/// Build the application router: calculator routes, health check, OpenAPI
/// document, and the middleware stack.
///
/// # Errors
/// Returns an error on invalid CORS configuration.
pub fn build_router(config: &AppConfig) -> Result<Router> {
    let service = Arc::new(Service::new(config.calculator.clone()));
    let openapi = serde_json::to_value(calculator::api::rest::openapi())
        .context("serialize OpenAPI document")?;

    let mut router = calculator::api::rest::router(service)
        .route("/health", get(|| async { "ok" }))
        .route(
            "/openapi.json",
            get(move || {
                let doc = openapi.clone();
                async move { Json(doc) }
            }),
        );

    router = router
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(RequestBodyLimitLayer::new(config.server.max_body_bytes));

    if let Some(cors) = &config.server.cors {
        router = router.layer(build_cors_layer(cors)?);
    }

    Ok(router)
}

/// Build a CORS layer from config.
///
/// # Errors
/// Rejects the combination of a wildcard origin with credentials; the CORS
/// specification forbids it and browsers refuse the response.
pub fn build_cors_layer(cfg: &CorsConfig) -> Result<CorsLayer> {
    let has_wildcard_origin = cfg.allowed_origins.iter().any(|o| o == "*");

    if has_wildcard_origin && cfg.allow_credentials {
        anyhow::bail!(
            "CORS misconfiguration: allowed_origins=['*'] cannot be combined with \
             allow_credentials=true"
        );
    }

    if has_wildcard_origin {
        warn!(
            "CORS is configured with allowed_origins=['*']; any website can call the API. \
             Consider explicit origins for production deployments."
        );
    }

    let mut layer = CorsLayer::new();

    if has_wildcard_origin {
        layer = layer.allow_origin(tower_http::cors::Any);
    } else {
        let origins: Vec<http::HeaderValue> = cfg
            .allowed_origins
            .iter()
            .filter_map(|s| http::HeaderValue::from_str(s).ok())
            .collect();
        if !origins.is_empty() {
            layer = layer.allow_origin(origins);
        }
    }

    if cfg.allowed_methods.iter().any(|m| m == "*") {
        layer = layer.allow_methods(tower_http::cors::Any);
    } else {
        let methods: Vec<http::Method> = cfg
            .allowed_methods
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        if !methods.is_empty() {
            layer = layer.allow_methods(methods);
        }
    }

    if cfg.allowed_headers.iter().any(|h| h == "*") {
        layer = layer.allow_headers(tower_http::cors::Any);
    } else {
        let headers: Vec<http::HeaderName> = cfg
            .allowed_headers
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        if !headers.is_empty() {
            layer = layer.allow_headers(headers);
        }
    }

    if cfg.allow_credentials {
        layer = layer.allow_credentials(true);
    }

    if cfg.max_age_seconds > 0 {
        layer = layer.max_age(Duration::from_secs(cfg.max_age_seconds));
    }

    Ok(layer)
}

/// Bind, serve, and shut down gracefully on Ctrl+C/SIGTERM.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run(config: AppConfig) -> Result<()> {
    let router = build_router(&config)?;
    let addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address '{}'", config.server.bind_addr))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("HTTP server bound on {}", listener.local_addr()?);

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if let Err(e) = wait_for_shutdown().await {
                tracing::error!(error = %e, "signal handling failed");
            }
            cancel.cancel();
        });
    }

    let shutdown = async move {
        cancel.cancelled().await;
        info!("HTTP server shutting down gracefully");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}

/// Wait for termination signals (Ctrl+C, SIGTERM).
async fn wait_for_shutdown() -> Result<()> {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .context("install Ctrl+C handler")
    };

    #[cfg(unix)]
    let sigterm = async {
        let mut term = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .context("install SIGTERM handler")?;
        term.recv().await;
        Ok::<(), anyhow::Error>(())
    };
    #[cfg(not(unix))]
    let sigterm = std::future::pending::<Result<()>>();

    tokio::select! {
        result = ctrl_c => result?,
        result = sigterm => result?,
    }
    info!("Shutdown signal received, initiating graceful shutdown");
    Ok(())
}
