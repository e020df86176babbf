use std::io;
use std::net::TcpStream;
use std::time::Duration;

use crate::core::errors::{PoorboxError, Result};
use crate::core::models::connection::{ConnectParams, Connection};
use crate::core::traits::connector::Connector;

/// Connector that checks the postgres endpoint accepts TCP connections.
///
/// Tries every address the host resolves to, in order, and reports the
/// first one that answers within `timeout`.
pub struct TcpConnector {
    timeout: Duration,
}

impl TcpConnector {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Connector for TcpConnector {
    fn connect(&self, params: &ConnectParams<'_>) -> Result<Connection> {
        let failed = |reason: String| PoorboxError::ConnectionFailed {
            endpoint: params.endpoint.to_string(),
            reason,
        };

        let addrs = params
            .endpoint
            .socket_addrs()
            .map_err(|e| failed(format!("cannot resolve host: {e}")))?;

        let mut last_err: Option<io::Error> = None;
        for addr in addrs {
            tracing::debug!(%addr, timeout_ms = self.timeout.as_millis() as u64, "trying postgres address");
            match TcpStream::connect_timeout(&addr, self.timeout) {
                Ok(stream) => {
                    let peer = stream.peer_addr().unwrap_or(addr);
                    tracing::info!(%peer, user = params.credentials.username(), "postgres endpoint reachable");
                    return Ok(Connection {
                        peer,
                        username: params.credentials.username().to_string(),
                        ssl_mode: params.ssl_mode,
                    });
                }
                Err(e) => {
                    tracing::debug!(%addr, error = %e, "address did not answer");
                    last_err = Some(e);
                }
            }
        }

        Err(failed(
            last_err
                .map(|e| e.to_string())
                .unwrap_or_else(|| "host resolved to no addresses".into()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::connection::SslMode;
    use crate::core::models::credentials::PgCredentials;
    use crate::core::models::endpoint::Endpoint;
    use std::net::TcpListener;
    use zeroize::Zeroizing;

    fn creds() -> PgCredentials {
        PgCredentials::new(Zeroizing::new("alice".into()), Zeroizing::new("pw".into()))
    }

    #[test]
    fn connects_to_listening_port() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let endpoint: Endpoint = addr.to_string().parse().unwrap();
        let creds = creds();

        let conn = TcpConnector::new(Duration::from_secs(2))
            .connect(&ConnectParams {
                credentials: &creds,
                endpoint: &endpoint,
                ssl_mode: SslMode::Disable,
            })
            .unwrap();

        assert_eq!(conn.peer, addr);
        assert_eq!(conn.username, "alice");
        assert_eq!(conn.ssl_mode, SslMode::Disable);
    }

    #[test]
    fn closed_port_is_connection_failure() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let endpoint = Endpoint {
            host: "127.0.0.1".into(),
            port,
        };
        let creds = creds();

        let err = TcpConnector::new(Duration::from_secs(2))
            .connect(&ConnectParams {
                credentials: &creds,
                endpoint: &endpoint,
                ssl_mode: SslMode::Disable,
            })
            .unwrap_err();

        assert!(matches!(err, PoorboxError::ConnectionFailed { .. }));
    }
}
