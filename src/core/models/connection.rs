use std::fmt;
use std::net::SocketAddr;

use serde::Deserialize;

use crate::core::models::credentials::PgCredentials;
use crate::core::models::endpoint::Endpoint;

/// TLS policy requested from the database server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SslMode {
    /// Plain connection; postgres under local docker has no certificate.
    #[default]
    Disable,
    Require,
}

impl fmt::Display for SslMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SslMode::Disable => f.write_str("disable"),
            SslMode::Require => f.write_str("require"),
        }
    }
}

/// Everything a connector needs to open a database session.
#[derive(Debug)]
pub struct ConnectParams<'a> {
    pub credentials: &'a PgCredentials,
    pub endpoint: &'a Endpoint,
    pub ssl_mode: SslMode,
}

/// An established connection, as reported back to the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub peer: SocketAddr,
    pub username: String,
    pub ssl_mode: SslMode,
}
