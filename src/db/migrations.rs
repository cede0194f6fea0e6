//! Schema migrations for the posts table.

use sqlx::PgPool;

/// Run all migrations.
///
/// Idempotent; safe to run at every startup.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("running migrations");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            slug TEXT NOT NULL UNIQUE,
            content TEXT NOT NULL DEFAULT '',
            category TEXT,
            author TEXT NOT NULL DEFAULT 'Saurabh Kumar Jha',
            published BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Home listing: published posts, newest first
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_posts_published_created
         ON posts(published, created_at DESC)",
    )
    .execute(pool)
    .await?;

    tracing::info!("migrations complete");
    Ok(())
}
