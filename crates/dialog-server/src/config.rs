//! Server Configuration

/// Runtime settings read from the environment (and `.env`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: String,

    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            log_filter: "info,tower_http=debug".into(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            log_filter: std::env::var("RUST_LOG").unwrap_or(defaults.log_filter),
        }
    }
}
