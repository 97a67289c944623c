// src/config.rs
use anyhow::{Context, Result};
use dotenv::dotenv;
use log::{info, warn};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_STATIC_DIR: &str = "frontend/build";
const DEFAULT_MAX_BODY_BYTES: u64 = 16 * 1024;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: IpAddr,
    pub port: u16,
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
    pub max_body_bytes: u64,
}

impl Settings {
    /// Reads settings from the environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let host = match env::var("HOST") {
            Ok(raw) => raw.parse().with_context(|| format!("HOST is not an IP address: {}", raw))?,
            Err(_) => IpAddr::from([0, 0, 0, 0]),
        };

        // Heroku-style platforms inject PORT
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().with_context(|| format!("PORT must be a number, got {}", raw))?,
            Err(_) => {
                warn!("$PORT not set, defaulting to {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));
        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR));

        let max_body_bytes = match env::var("MAX_BODY_BYTES") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("MAX_BODY_BYTES must be a number, got {}", raw))?,
            Err(_) => DEFAULT_MAX_BODY_BYTES,
        };

        let settings = Settings {
            host,
            port,
            data_dir,
            static_dir,
            max_body_bytes,
        };
        info!(
            "Settings loaded: data_dir={}, static_dir={}",
            settings.data_dir.display(),
            settings.static_dir.display()
        );
        Ok(settings)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_all_interfaces() {
        let settings = Settings::default();
        assert_eq!(settings.addr().to_string(), "0.0.0.0:5000");
        assert_eq!(settings.data_dir, PathBuf::from("data"));
    }
}
