//! Per-service configuration
//!
//! Settings come from, in order of precedence: command line flags, the
//! environment (`TRIO_<SERVICE>_DATABASE_URL`, then `DATABASE_URL`), the TOML
//! file at `~/.trio/config.toml`, and finally built-in defaults.
//!
//! ```toml
//! [trivia]
//! bind = "0.0.0.0:8080"
//! database_url = "sqlite:///var/lib/trio/trivia.db"
//! cors_permissive = true
//! ```

use std::fmt;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http::ServerConfig;

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// The three services shipped in this workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Booking,
    Todo,
    Trivia,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 3] = [Self::Booking, Self::Todo, Self::Trivia];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::Todo => "todo",
            Self::Trivia => "trivia",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            Self::Booking => 5000,
            Self::Todo => 5001,
            Self::Trivia => 5002,
        }
    }

    pub fn default_database_url(&self) -> String {
        format!("sqlite://trio-{}.db", self.as_str())
    }

    /// Service-specific database URL variable, e.g. `TRIO_TRIVIA_DATABASE_URL`.
    pub fn database_url_env(&self) -> String {
        format!("TRIO_{}_DATABASE_URL", self.as_str().to_uppercase())
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional settings for one service; unset fields fall through to the next source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceSettings {
    pub bind: Option<SocketAddr>,
    pub database_url: Option<String>,
    pub cors_permissive: Option<bool>,
}

/// Contents of the config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrioConfig {
    #[serde(default)]
    pub booking: ServiceSettings,
    #[serde(default)]
    pub todo: ServiceSettings,
    #[serde(default)]
    pub trivia: ServiceSettings,
}

/// Fully resolved settings for running one service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedService {
    pub service: ServiceKind,
    pub bind: SocketAddr,
    pub database_url: String,
    pub cors_permissive: bool,
}

impl ResolvedService {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
        }
    }
}

impl TrioConfig {
    /// Default config file path: ~/.trio/config.toml
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".trio/config.toml")
    }

    /// Load the config file.
    ///
    /// An explicitly given path must exist; a missing default file yields
    /// the empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::from_file(path)
            }
            None => {
                let path = Self::default_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    tracing::debug!(path = %path.display(), "No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn settings(&self, service: ServiceKind) -> &ServiceSettings {
        match service {
            ServiceKind::Booking => &self.booking,
            ServiceKind::Todo => &self.todo,
            ServiceKind::Trivia => &self.trivia,
        }
    }

    /// Resolve settings for `service` against the process environment.
    pub fn resolve(&self, service: ServiceKind, flags: &ServiceSettings) -> ResolvedService {
        self.resolve_with_env(service, flags, |key| std::env::var(key).ok())
    }

    /// Resolve settings with an injectable environment lookup.
    pub fn resolve_with_env<F>(
        &self,
        service: ServiceKind,
        flags: &ServiceSettings,
        env: F,
    ) -> ResolvedService
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = self.settings(service);

        let bind = flags
            .bind
            .or(file.bind)
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], service.default_port())));

        let database_url = flags
            .database_url
            .clone()
            .or_else(|| env(&service.database_url_env()))
            .or_else(|| env("DATABASE_URL"))
            .or_else(|| file.database_url.clone())
            .unwrap_or_else(|| service.default_database_url());

        let cors_permissive = flags
            .cors_permissive
            .or(file.cors_permissive)
            .unwrap_or(false);

        ResolvedService {
            service,
            bind,
            database_url,
            cors_permissive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_per_service() {
        let config = TrioConfig::default();
        let resolved = config.resolve_with_env(ServiceKind::Trivia, &ServiceSettings::default(), no_env);

        assert_eq!(resolved.bind.port(), 5002);
        assert_eq!(resolved.database_url, "sqlite://trio-trivia.db");
        assert!(!resolved.cors_permissive);
    }

    #[test]
    fn parses_sections() {
        let config = TrioConfig::parse(
            r#"
            [booking]
            bind = "0.0.0.0:8000"
            cors_permissive = true

            [todo]
            database_url = "sqlite://todo.db"
            "#,
        )
        .unwrap();

        assert_eq!(config.booking.bind, Some("0.0.0.0:8000".parse().unwrap()));
        assert_eq!(config.booking.cors_permissive, Some(true));
        assert_eq!(config.todo.database_url.as_deref(), Some("sqlite://todo.db"));
        assert_eq!(config.trivia, ServiceSettings::default());
    }

    #[test]
    fn precedence_flags_env_file_default() {
        let config = TrioConfig::parse(
            r#"
            [todo]
            database_url = "sqlite://from-file.db"
            "#,
        )
        .unwrap();

        let env: HashMap<&str, &str> = [
            ("DATABASE_URL", "sqlite://generic.db"),
            ("TRIO_TODO_DATABASE_URL", "sqlite://specific.db"),
        ]
        .into_iter()
        .collect();
        let lookup = |k: &str| env.get(k).map(|v| v.to_string());

        let resolved = config.resolve_with_env(ServiceKind::Todo, &ServiceSettings::default(), lookup);
        assert_eq!(resolved.database_url, "sqlite://specific.db");

        let flags = ServiceSettings {
            database_url: Some("sqlite://flag.db".into()),
            ..Default::default()
        };
        let resolved = config.resolve_with_env(ServiceKind::Todo, &flags, lookup);
        assert_eq!(resolved.database_url, "sqlite://flag.db");

        let resolved = config.resolve_with_env(ServiceKind::Todo, &ServiceSettings::default(), no_env);
        assert_eq!(resolved.database_url, "sqlite://from-file.db");
    }

    #[test]
    fn service_kind_names() {
        let names: Vec<String> = ServiceKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, vec!["booking", "todo", "trivia"]);
        assert_eq!(ServiceKind::Booking.database_url_env(), "TRIO_BOOKING_DATABASE_URL");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            TrioConfig::load(Some(&missing)),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn loads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[trivia]\nbind = \"127.0.0.1:9000\"\n").unwrap();

        let config = TrioConfig::load(Some(&path)).unwrap();
        assert_eq!(config.trivia.bind.unwrap().port(), 9000);
    }

    #[test]
    fn invalid_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[trivia\n").unwrap();

        let err = TrioConfig::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
