//! Session-backed admin gate.
//!
//! The session holds a single boolean under [`ADMIN_SESSION_KEY`]; the
//! guard redirects to the login page when it is absent or false.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tower_sessions::cookie::Key;
use tower_sessions::Session;

/// Key under which the admin flag is stored in the session.
pub const ADMIN_SESSION_KEY: &str = "admin";

/// Read the admin flag from the session. Any session-store failure reads
/// as "not admin".
pub async fn is_admin(session: &Session) -> bool {
    session
        .get::<bool>(ADMIN_SESSION_KEY)
        .await
        .ok()
        .flatten()
        .unwrap_or(false)
}

/// Middleware guarding the post-creation routes: pass through for an
/// authenticated session, redirect to `/admin` otherwise.
pub async fn require_admin(session: Session, request: Request, next: Next) -> Response {
    if is_admin(&session).await {
        next.run(request).await
    } else {
        Redirect::to("/admin").into_response()
    }
}

/// Derive the cookie signing key from the configured secret.
///
/// `Key::derive_from` wants at least 64 bytes of master material, so the
/// secret is repeated up to that length first.
pub fn session_key(secret: &str) -> anyhow::Result<Key> {
    anyhow::ensure!(!secret.is_empty(), "session secret must not be empty");

    let mut material = Vec::with_capacity(64 + secret.len());
    while material.len() < 64 {
        material.extend_from_slice(secret.as_bytes());
    }
    Ok(Key::derive_from(&material))
}
