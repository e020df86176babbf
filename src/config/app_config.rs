use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::errors::{PoorboxError, Result};
use crate::core::models::connection::SslMode;
use crate::core::models::endpoint::{DEFAULT_PG_ENDPOINT, Endpoint};

/// Default postgres identity file: username and password separated by a newline.
pub const DEFAULT_PG_IDENTITY_FILE: &str = "./pg-secret";

/// Default TMDB API key file.
pub const DEFAULT_TMDB_KEY_FILE: &str = "./tmdb-secret";

/// Default TCP connect timeout for the postgres endpoint.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Values supplied on the command line. `None` means the flag was not given.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub pg_endpoint: Option<String>,
    pub pg_identity_file: Option<PathBuf>,
    pub tmdb_key_file: Option<PathBuf>,
}

/// Effective configuration, built once at startup and passed down by reference.
///
/// Precedence for each value: command-line flag, then config file, then
/// the built-in default.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub postgres: PostgresConfig,
    pub tmdb: TmdbConfig,
    /// Config file the values were read from, if any.
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub endpoint: Endpoint,
    pub identity_file: PathBuf,
    pub ssl_mode: SslMode,
    pub connect_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub key_file: PathBuf,
    /// True when the path came from a flag or the config file rather
    /// than the default, making the key file mandatory for `check`.
    pub explicit: bool,
}

impl AppConfig {
    /// Build the effective configuration from flags and an optional file.
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self> {
        let file = match &overrides.config_file {
            Some(path) => Self::load_file(path)?,
            None => ConfigFile::default(),
        };
        let pg = file.postgres.unwrap_or_default();
        let tmdb = file.tmdb.unwrap_or_default();

        let endpoint = overrides
            .pg_endpoint
            .as_deref()
            .or(pg.endpoint.as_deref())
            .unwrap_or(DEFAULT_PG_ENDPOINT)
            .parse::<Endpoint>()?;

        let identity_file = overrides
            .pg_identity_file
            .clone()
            .or(pg.identity_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PG_IDENTITY_FILE));

        let timeout_secs = pg.connect_timeout_secs.unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(PoorboxError::InvalidConfig {
                detail: "postgres.connect_timeout_secs must be greater than 0".into(),
            });
        }

        let (key_file, explicit) = match overrides.tmdb_key_file.clone().or(tmdb.key_file) {
            Some(path) => (path, true),
            None => (PathBuf::from(DEFAULT_TMDB_KEY_FILE), false),
        };

        Ok(Self {
            postgres: PostgresConfig {
                endpoint,
                identity_file,
                ssl_mode: pg.ssl_mode.unwrap_or_default(),
                connect_timeout: Duration::from_secs(timeout_secs),
            },
            tmdb: TmdbConfig { key_file, explicit },
            source: overrides.config_file.clone(),
        })
    }

    /// Parse a TOML config file.
    pub fn load_file(path: &Path) -> Result<ConfigFile> {
        if !path.is_file() {
            return Err(PoorboxError::InvalidConfig {
                detail: format!("config file not found: {}", path.display()),
            });
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| PoorboxError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })
    }
}

/// On-disk layout of the optional config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub postgres: Option<PostgresSection>,
    pub tmdb: Option<TmdbSection>,
}

/// The `[postgres]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostgresSection {
    pub endpoint: Option<String>,
    pub identity_file: Option<PathBuf>,
    pub ssl_mode: Option<SslMode>,
    pub connect_timeout_secs: Option<u64>,
}

/// The `[tmdb]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TmdbSection {
    pub key_file: Option<PathBuf>,
}
