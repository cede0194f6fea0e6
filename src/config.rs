//! Application configuration loaded from environment variables.

/// Application configuration.
///
/// Credential and secret values are opaque strings; they are compared or
/// consumed elsewhere, never interpreted here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1:3000").
    pub bind_addr: String,

    /// PostgreSQL connection string.
    pub database_url: String,

    /// Key material for signing the session cookie. Must be non-empty.
    pub session_secret: String,

    /// Admin login username.
    pub admin_user: String,

    /// Admin login password.
    pub admin_pass: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `SESSION_SECRET`: session cookie signing secret (non-empty)
    /// - `ADMIN_USER` / `ADMIN_PASS`: the shared admin credential
    ///
    /// Optional:
    /// - `DATABASE_URL`: PostgreSQL URL (default: "postgres://localhost/minipress")
    /// - `MINIPRESS_BIND_ADDR`: listen address (default: "127.0.0.1:3000")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("MINIPRESS_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/minipress".to_string());

        let session_secret = std::env::var("SESSION_SECRET")
            .map_err(|_| anyhow::anyhow!("SESSION_SECRET must be set"))?;
        if session_secret.is_empty() {
            anyhow::bail!("SESSION_SECRET must not be empty");
        }

        let admin_user =
            std::env::var("ADMIN_USER").map_err(|_| anyhow::anyhow!("ADMIN_USER must be set"))?;
        let admin_pass =
            std::env::var("ADMIN_PASS").map_err(|_| anyhow::anyhow!("ADMIN_PASS must be set"))?;

        tracing::info!(
            bind_addr = %bind_addr,
            database_url = %database_url,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            database_url,
            session_secret,
            admin_user,
            admin_pass,
        })
    }
}
