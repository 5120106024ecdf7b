use anyhow::{Context, Result};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("ANALYZER_BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        // Fail fast on an unparseable address rather than at bind time
        bind_addr
            .parse::<std::net::SocketAddr>()
            .with_context(|| format!("Invalid ANALYZER_BIND_ADDR: {bind_addr}"))?;

        Ok(Self { bind_addr })
    }
}
