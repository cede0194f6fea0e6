//! Axum server setup: session layer, request tracing, graceful shutdown.

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use super::{auth, routes};
use crate::state::AppState;

/// Build the complete application: routes wrapped in the session and
/// tracing layers. Split out from [`run_server`] so tests can drive the
/// router without binding a socket.
pub fn app(state: AppState) -> anyhow::Result<Router> {
    let key = auth::session_key(&state.config().session_secret)?;

    // Server-side sessions keyed by a signed cookie. `secure` is off so
    // the site works behind plain HTTP during local use; a fronting
    // proxy terminates TLS in deployment.
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_signed(key);

    Ok(routes::router(state)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http()))
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
pub async fn run_server(state: AppState, bind_addr: &str) -> anyhow::Result<()> {
    let app = app(state)?;

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!(addr = %bind_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, starting shutdown");
        }
    }
}
