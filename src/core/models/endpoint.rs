use std::fmt;
use std::net::{SocketAddr, ToSocketAddrs};
use std::str::FromStr;

use crate::core::errors::PoorboxError;

/// Default network location of postgres.
pub const DEFAULT_PG_ENDPOINT: &str = "localhost:5432";

/// A `HOST:PORT` network location. IPv6 hosts are written in brackets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    /// Resolve the host to the socket addresses to try, in resolver order.
    pub fn socket_addrs(&self) -> std::io::Result<Vec<SocketAddr>> {
        Ok((self.host.as_str(), self.port).to_socket_addrs()?.collect())
    }
}

impl FromStr for Endpoint {
    type Err = PoorboxError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = |detail: &str| PoorboxError::InvalidEndpoint {
            endpoint: raw.to_string(),
            detail: detail.to_string(),
        };

        let trimmed = raw.trim();
        let Some((host, port)) = trimmed.rsplit_once(':') else {
            return Err(invalid("missing port"));
        };

        let host = match host.strip_prefix('[') {
            Some(inner) => inner
                .strip_suffix(']')
                .ok_or_else(|| invalid("unterminated '[' in host"))?,
            None if host.contains(':') => {
                return Err(invalid("IPv6 hosts must be enclosed in brackets"));
            }
            None => host,
        };

        if host.is_empty() {
            return Err(invalid("missing host"));
        }

        let port: u16 = port
            .parse()
            .map_err(|_| invalid("port must be a number between 1 and 65535"))?;
        if port == 0 {
            return Err(invalid("port must be a number between 1 and 65535"));
        }

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}
