//! Router assembly and the serve loop.

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tokio::net::TcpListener;

use crate::cors::cors;
use crate::routes::{audits, auth, checklists, health, reports};
use crate::state::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/checklists/defaults", get(checklists::defaults))
        .route("/api/audits", get(audits::list).post(audits::create))
        .route("/api/reports/{id}/pdf", get(reports::pdf))
        .layer(middleware::from_fn_with_state(state.clone(), cors))
        .with_state(state)
}

/// Serve until the process receives Ctrl-C.
///
/// # Errors
///
/// Returns an error if the listener fails.
pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
