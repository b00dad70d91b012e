use std::env;

use log::warn;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Worker thread count; `None` lets actix pick one per core.
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            workers: None,
        }
    }
}

impl ServerConfig {
    /// Loads `.env` if present, then reads `GARDEN_BIND_ADDR` and `GARDEN_WORKERS`.
    pub fn from_env() -> Self {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                warn!("Ignoring unreadable .env file: {err}");
            }
        }
        Self::from_vars(
            env::var("GARDEN_BIND_ADDR").ok(),
            env::var("GARDEN_WORKERS").ok(),
        )
    }

    fn from_vars(bind_addr: Option<String>, workers: Option<String>) -> Self {
        let defaults = Self::default();
        let bind_addr = bind_addr
            .map(|addr| addr.trim().to_owned())
            .filter(|addr| !addr.is_empty())
            .unwrap_or(defaults.bind_addr);
        let workers = workers.and_then(|raw| match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => Some(n),
            _ => {
                warn!("GARDEN_WORKERS must be a positive integer, got '{raw}'; using the default");
                None
            }
        });
        Self { bind_addr, workers }
    }
}
