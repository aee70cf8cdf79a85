//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use clap::ValueEnum;

use super::constants::{DEFAULT_ACTOR, DEFAULT_DATABASE_URL, DEFAULT_QUERY_TIMEOUT_SECS};

/// Data-access implementation used to serve repository calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Backend {
    /// SeaORM entity queries
    Orm,
    /// Hand-written parameterized SQL
    #[default]
    #[value(alias = "raw")]
    Sql,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orm" => Ok(Backend::Orm),
            "sql" | "raw" => Ok(Backend::Sql),
            other => Err(format!("unknown database backend: {}", other)),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub backend: Backend,
    pub query_timeout: Duration,
    pub actor: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("backend", &self.backend)
            .field("query_timeout", &self.query_timeout)
            .field("actor", &self.actor)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            backend: Backend::default(),
            query_timeout: Duration::from_secs(DEFAULT_QUERY_TIMEOUT_SECS),
            actor: DEFAULT_ACTOR.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `.env` and environment variables.
    ///
    /// Unparseable values fall back to their defaults with a warning.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let backend = match env::var("DATABASE_BACKEND") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to sql", e);
                Backend::default()
            }),
            Err(_) => Backend::default(),
        };

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            backend,
            query_timeout: Duration::from_secs(
                env::var("QUERY_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .filter(|secs| *secs > 0)
                    .unwrap_or(DEFAULT_QUERY_TIMEOUT_SECS),
            ),
            actor: env::var("ACTOR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ACTOR.to_string()),
        }
    }

    /// Override the backend (CLI flag wins over the environment).
    pub fn with_backend(mut self, backend: Option<Backend>) -> Self {
        if let Some(backend) = backend {
            self.backend = backend;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_str() {
        assert_eq!("orm".parse::<Backend>().unwrap(), Backend::Orm);
        assert_eq!(" SQL ".parse::<Backend>().unwrap(), Backend::Sql);
        assert_eq!("raw".parse::<Backend>().unwrap(), Backend::Sql);
        assert!("mongo".parse::<Backend>().is_err());
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = Config {
            database_url: "postgres://admin:hunter2@db/app".to_string(),
            ..Config::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_with_backend_override() {
        let config = Config::default().with_backend(Some(Backend::Orm));
        assert_eq!(config.backend, Backend::Orm);

        let config = config.with_backend(None);
        assert_eq!(config.backend, Backend::Orm);
    }
}
