//! Public home listing.

use axum::extract::State;
use maud::Markup;

use crate::db::PostRepo;
use crate::http::error::PageError;
use crate::render;
use crate::state::AppState;

/// GET / - all published posts, newest first.
pub async fn home_page(State(state): State<AppState>) -> Result<Markup, PageError> {
    let posts = PostRepo::new(state.pool()).list_published().await?;
    Ok(render::home_page(&posts))
}
