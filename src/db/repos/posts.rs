//! Post repository.
//!
//! Creation relies on the UNIQUE constraint on `slug`: concurrent inserts
//! with a colliding slug are resolved by the database rejecting the
//! second, never by check-then-insert.

use sqlx::PgPool;

use crate::models::{NewPost, Post};

const POST_COLUMNS: &str =
    "id, title, slug, content, category, author, published, created_at, updated_at";

/// Database error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("duplicate slug '{slug}'")]
    Duplicate { slug: String },
}

/// Post repository.
pub struct PostRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a post. Author and published flag take schema defaults.
    ///
    /// A unique-constraint violation on `slug` maps to
    /// [`DbError::Duplicate`]; the first insert wins and nothing is
    /// persisted for the loser.
    pub async fn create(&self, new: NewPost) -> Result<Post, DbError> {
        let sql = format!(
            "INSERT INTO posts (title, slug, content, category)
             VALUES ($1, $2, $3, $4)
             RETURNING {POST_COLUMNS}"
        );

        let result = sqlx::query_as::<_, Post>(&sql)
            .bind(new.title.as_str())
            .bind(&new.slug)
            .bind(&new.content)
            .bind(&new.category)
            .fetch_one(self.pool)
            .await;

        match result {
            Ok(post) => Ok(post),
            Err(sqlx::Error::Database(ref db)) if db.is_unique_violation() => {
                Err(DbError::Duplicate { slug: new.slug })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// List published posts, newest first. No pagination.
    pub async fn list_published(&self) -> Result<Vec<Post>, DbError> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts
             WHERE published
             ORDER BY created_at DESC"
        );

        let posts = sqlx::query_as::<_, Post>(&sql).fetch_all(self.pool).await?;
        Ok(posts)
    }

    /// Find a post by exact slug, regardless of published state.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, DbError> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE slug = $1");

        let post = sqlx::query_as::<_, Post>(&sql)
            .bind(slug)
            .fetch_optional(self.pool)
            .await?;
        Ok(post)
    }
}
