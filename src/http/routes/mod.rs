//! Route definitions.
//!
//! ## Routes
//!
//! - `GET /` - home listing (published posts, newest first)
//! - `GET /health` - health check (JSON)
//! - `GET /admin` - admin view (login or new-post form)
//! - `POST /admin/login` - credential check
//! - `GET /admin/new` - new-post form (guarded)
//! - `POST /admin/create` - create post (guarded)
//! - `GET /admin/logout` - destroy session
//! - `GET /{slug}` - single post or 404
//! - anything else - 404
//!
//! Static paths always win over the `/{slug}` wildcard, and the wildcard
//! only matches a single segment; multi-segment paths hit the fallback.
//! Precedence is the router's, not declaration order.

pub mod admin;
pub mod health;
pub mod home;
pub mod post;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use super::auth;
use crate::state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let guarded = Router::new()
        .route("/admin/new", get(admin::new_post_page))
        .route("/admin/create", post(admin::create_post))
        .route_layer(middleware::from_fn(auth::require_admin));

    Router::new()
        .route("/", get(home::home_page))
        .route("/health", get(health::health_check))
        .route("/admin", get(admin::admin_page))
        .route("/admin/login", post(admin::login))
        .route("/admin/logout", get(admin::logout))
        .merge(guarded)
        .route("/{slug}", get(post::show_post))
        .fallback(post::not_found)
        .with_state(state)
}
