//! Process settings read from the environment (and `.env` when present).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DB_FILE: &str = "./tienda_api.sqlite";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// SQLite file backing the `productos` table. From `DB_FILE`.
    pub db_file: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            db_file: PathBuf::from(DEFAULT_DB_FILE),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Settings {
    /// Load `.env` if present, then read `DB_FILE`, `HOST` and `PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup. Unset or blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut settings = Settings::default();
        if let Some(db_file) = get("DB_FILE") {
            settings.db_file = PathBuf::from(db_file);
        }
        if let Some(host) = get("HOST") {
            settings.host = host;
        }
        if let Some(port) = get("PORT") {
            settings.port = port.parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: port.clone(),
            })?;
        }
        Ok(settings)
    }

    /// Resolve `HOST:PORT` to a socket address. Hostnames such as `localhost` are looked up.
    pub async fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let invalid = || ConfigError::Invalid {
            key: "HOST",
            value: self.host.clone(),
        };
        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|_| invalid())?
            .next()
            .ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.db_file, PathBuf::from("./tienda_api.sqlite"));
        assert_eq!(settings.port, 3000);
    }

    #[tokio::test]
    async fn reads_db_file_and_port() {
        let settings = Settings::from_lookup(lookup(&[("DB_FILE", "/tmp/x.sqlite"), ("PORT", "8080")])).unwrap();
        assert_eq!(settings.db_file, PathBuf::from("/tmp/x.sqlite"));
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.listen_addr().await.unwrap().port(), 8080);
    }

    #[tokio::test]
    async fn resolves_localhost() {
        let settings = Settings::from_lookup(lookup(&[("HOST", "localhost"), ("PORT", "3100")])).unwrap();
        let addr = settings.listen_addr().await.unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 3100);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let settings = Settings::from_lookup(lookup(&[("PORT", "  "), ("DB_FILE", "")])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = Settings::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[tokio::test]
    async fn rejects_unresolvable_host() {
        let settings = Settings::from_lookup(lookup(&[("HOST", "not a host")])).unwrap();
        let err = settings.listen_addr().await.unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "HOST", .. }));
    }
}
