//! Application state shared across handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::Config;

/// Shared application state.
///
/// The pool and configuration are injected at startup; handlers never
/// reach for ambient globals.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: PgPool,
    config: Config,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { pool, config }),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
