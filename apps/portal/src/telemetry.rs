use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes structured logging for an embedding application. `RUST_LOG`
/// wins when set; otherwise the crate logs at `default_filter`.
pub fn init(default_filter: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), default_filter))
        }))
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}
