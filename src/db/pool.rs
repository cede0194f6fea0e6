//! Database connection pool management.
//!
//! The pool is created lazily: a store that is down at startup does not
//! stop the process, it surfaces as per-request query errors until the
//! store comes back.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Maximum connections for the pool. Kept low for a single-author site.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a lazy PostgreSQL connection pool.
///
/// No connection is attempted here; this only fails on a malformed URL.
pub fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_lazy(database_url)
}
