//! Post entity and creation input.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::ValidationError;

/// Maximum length for post titles.
const MAX_TITLE_LEN: usize = 256;

/// Post record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    /// Full HTML, stored and rendered verbatim (trusted author).
    pub content: String,
    pub category: Option<String>,
    pub author: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated post title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    /// Create a post title, rejecting empty (after trimming) and
    /// over-long values.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }
        if trimmed.len() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PostTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Input for creating a post.
///
/// Author and published flag are intentionally absent; they take their
/// schema defaults at insert.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: String,
    pub content: String,
    pub category: Option<String>,
}
