use anyhow::{Context, Result};

/// Portal configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the job board backend, e.g. `http://127.0.0.1:5000/api`.
    pub api_base_url: String,
    /// Credential pair accepted by the static authenticator.
    pub admin_email: String,
    pub admin_password: String,
    /// Directory backing the durable session storage scope.
    pub session_dir: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base_url: std::env::var("PORTAL_API_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000/api".to_string()),
            admin_email: require_env("PORTAL_ADMIN_EMAIL")?,
            admin_password: require_env("PORTAL_ADMIN_PASSWORD")?,
            session_dir: std::env::var("PORTAL_SESSION_DIR")
                .unwrap_or_else(|_| ".portal-session".to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
