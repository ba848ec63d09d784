use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;

/// Invalid value found while loading [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
#[error("{var} has an invalid value '{value}': {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: IpAddr,
    /// Bind port (default: `5555`).
    pub port: u16,
    /// Connection string for the relational store (default: `sqlite://app.db`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Insert demo planets, scientists and missions into an empty database.
    pub seed_demo_data: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `127.0.0.1`                |
    /// | `PORT`                 | `5555`                     |
    /// | `DB_URI`               | `sqlite://app.db`          |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SEED_DEMO_DATA`       | `false`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &'static str, default: &str| lookup(var).unwrap_or_else(|| default.into());

        let host = parse("HOST", get("HOST", "127.0.0.1"))?;
        let port = parse("PORT", get("PORT", "5555"))?;
        let database_url = get("DB_URI", "sqlite://app.db");

        let cors_origins = get("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| ConfigError {
                    var: "CORS_ORIGINS",
                    value: origin.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs = parse("REQUEST_TIMEOUT_SECS", get("REQUEST_TIMEOUT_SECS", "30"))?;
        let seed_demo_data = parse("SEED_DEMO_DATA", get("SEED_DEMO_DATA", "false"))?;

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            seed_demo_data,
        })
    }

    /// Socket address the server binds to.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_point_at_local_file_store() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:5555");
        assert_eq!(config.database_url, "sqlite://app.db");
        assert_eq!(config.cors_origins.len(), 1);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn db_uri_overrides_connection_string() {
        let config =
            ServerConfig::from_lookup(lookup(&[("DB_URI", "sqlite::memory:")])).unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = ServerConfig::from_lookup(lookup(&[(
            "CORS_ORIGINS",
            "http://a.test, http://b.test,,",
        )]))
        .unwrap();
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn invalid_port_names_the_variable() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "not-a-port")])).unwrap_err();
        assert_eq!(err.var, "PORT");
        assert_eq!(err.value, "not-a-port");
    }

    #[test]
    fn seed_flag_parses_bool() {
        let config =
            ServerConfig::from_lookup(lookup(&[("SEED_DEMO_DATA", "true")])).unwrap();
        assert!(config.seed_demo_data);
        assert!(ServerConfig::from_lookup(lookup(&[("SEED_DEMO_DATA", "yes")])).is_err());
    }
}
