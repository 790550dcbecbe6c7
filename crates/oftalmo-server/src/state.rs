use std::path::PathBuf;
use std::sync::Arc;

use jiff::tz::TimeZone;

use crate::config::ServerConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub credentials: Arc<Credentials>,
    /// Zone used to turn timestamps into the clinic's calendar dates.
    pub tz: TimeZone,
}

/// The single consultant account.
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            credentials: Arc::new(Credentials {
                username: config.username.clone(),
                password: config.password.clone(),
            }),
            tz: TimeZone::system(),
        }
    }
}
