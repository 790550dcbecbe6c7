use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "0.0.0.0:5000";
pub const DEFAULT_DATA_DIR: &str = "oftalmoprev-data";
pub const DEFAULT_USER: &str = "consultor";
/// Shipped placeholder; the server warns when it is still in use.
pub const DEFAULT_PASS: &str = "troque_essa_senha";

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub data_dir: PathBuf,
    pub username: String,
    pub password: String,
}

impl ServerConfig {
    /// Read `OFTALMO_BIND`, `OFTALMO_DATA_DIR`, `OFTALMO_USER` and
    /// `OFTALMO_PASS` from the process environment.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source. Unset or blank variables
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |name: &str, default: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind = get("OFTALMO_BIND", DEFAULT_BIND);
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|e| eyre::eyre!("invalid OFTALMO_BIND {bind:?}: {e}"))?;

        let config = Self {
            bind_addr,
            data_dir: PathBuf::from(get("OFTALMO_DATA_DIR", DEFAULT_DATA_DIR)),
            username: get("OFTALMO_USER", DEFAULT_USER),
            password: get("OFTALMO_PASS", DEFAULT_PASS),
        };

        if config.password == DEFAULT_PASS {
            tracing::warn!("OFTALMO_PASS is unset; using the default password");
        }

        Ok(config)
    }
}
