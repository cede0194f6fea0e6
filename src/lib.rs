//! minipress: minimal single-author blog server.
//!
//! An administrator logs into a private area and creates posts (title,
//! HTML content, category); the public reads published posts via the
//! home listing and per-post pages addressed by slug. Thin glue over
//! axum, sqlx/PostgreSQL and maud.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod render;
pub mod slug;
pub mod state;

pub use config::Config;
pub use http::{app, run_server, PageError};
pub use state::AppState;

/// Wire everything up and serve.
///
/// An unreachable store at startup is logged and tolerated: the pool is
/// lazy, so the failure surfaces per request until the store comes back.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let pool = db::create_pool(&config.database_url)?;

    match db::migrations::run(&pool).await {
        Ok(()) => tracing::info!("database ready"),
        Err(err) => {
            tracing::error!(error = %err, "database unavailable at startup, continuing without it")
        }
    }

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(pool, config);
    run_server(state, &bind_addr).await
}
