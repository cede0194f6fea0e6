//! Public single-post page and the not-found fallback.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use maud::Markup;

use crate::db::PostRepo;
use crate::http::error::PageError;
use crate::render;
use crate::state::AppState;

/// GET /{slug} - look up a post by exact slug.
///
/// The published flag is deliberately ignored here: an unpublished post
/// is reachable by anyone who knows its slug, matching the home listing
/// being the only place the flag applies.
pub async fn show_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Markup, PageError> {
    let post = PostRepo::new(state.pool())
        .find_by_slug(&slug)
        .await?
        .ok_or(PageError::NotFound)?;

    Ok(render::post_page(&post))
}

/// Fallback for anything no route claimed, multi-segment paths included.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, render::not_found_page())
}
