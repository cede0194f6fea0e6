//! Admin routes: login, logout, post creation.

use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use maud::Markup;
use serde::Deserialize;
use tower_sessions::Session;

use crate::db::PostRepo;
use crate::http::auth::{self, ADMIN_SESSION_KEY};
use crate::http::error::{CreationError, PageError};
use crate::models::{NewPost, PostTitle};
use crate::render;
use crate::slug::slugify;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
}

/// GET /admin - render the admin view unconditionally. The view itself
/// switches between login form and new-post form on the session flag.
pub async fn admin_page(session: Session) -> Markup {
    render::admin_page(auth::is_admin(&session).await)
}

/// GET /admin/new - new-post form. Guarded, so the session is known to
/// be authenticated by the time this runs.
pub async fn new_post_page() -> Markup {
    render::admin_page(true)
}

/// POST /admin/login - exact string comparison against the configured
/// credential. A mismatch redirects back with no detail, same shape as
/// success apart from destination and session state.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, PageError> {
    let config = state.config();

    if form.username == config.admin_user && form.password == config.admin_pass {
        session.insert(ADMIN_SESSION_KEY, true).await?;
        Ok(Redirect::to("/admin/new"))
    } else {
        tracing::debug!("admin login rejected");
        Ok(Redirect::to("/admin"))
    }
}

/// GET /admin/logout - flush the session record and cookie, redirect home.
pub async fn logout(session: Session) -> Result<Redirect, PageError> {
    session.flush().await?;
    Ok(Redirect::to("/"))
}

/// POST /admin/create - guarded. Derives the slug from the title and
/// inserts; author and published flag take schema defaults. Any failure
/// collapses into the uniform creation error.
pub async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<CreatePostForm>,
) -> Result<Redirect, PageError> {
    let title = PostTitle::new(&form.title).map_err(CreationError::from)?;
    let slug = slugify(title.as_str());

    let category = Some(form.category.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_owned);

    let new = NewPost {
        title,
        slug,
        content: form.content,
        category,
    };

    PostRepo::new(state.pool())
        .create(new)
        .await
        .map_err(CreationError::from)?;

    Ok(Redirect::to("/"))
}
