//! Local HTTP service boundary.
//!
//! Single-process axum server on loopback. The vault is open before the
//! listener binds; redact/rehydrate handlers run on the blocking pool so
//! vault I/O and regex work never stall the runtime, and an allocation
//! transaction always runs to completion even if the client goes away.

pub mod error;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use cloak_core::traits::Vault;
use cloak_engine::Redactor;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub redactor: Arc<Redactor>,
    pub vault: Arc<dyn Vault>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/redact", post(routes::redact))
        .route("/redact-text", post(routes::redact_text))
        .route("/rehydrate", post(routes::rehydrate))
        .route("/clear", post(routes::clear))
        .route("/health", get(routes::health))
        .route("/sessions", get(routes::sessions))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(redactor: Arc<Redactor>, vault: Arc<dyn Vault>, port: u16) -> anyhow::Result<()> {
    let backend = vault.backend_name();
    let app = build_router(AppState { redactor, vault });

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!(%addr, backend, "pii-redactor sidecar listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    tracing::info!("sidecar stopped");
    Ok(())
}

/// Drain in-flight requests on SIGTERM (supervisor stop) or ctrl-c.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending().await,
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received; draining requests");
}
