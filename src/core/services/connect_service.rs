use crate::config::app_config::PostgresConfig;
use crate::core::errors::Result;
use crate::core::models::connection::{ConnectParams, Connection};
use crate::core::services::secret_service::SecretService;
use crate::core::traits::connector::Connector;
use crate::core::traits::secret_reader::SecretReader;

/// Startup path: load the postgres identity file, then hand the
/// credentials to the connector.
///
/// Fails fast. A missing or short identity file stops here and the
/// connector is never called.
pub struct ConnectService<R: SecretReader, C: Connector> {
    pub secrets: SecretService<R>,
    pub connector: C,
}

impl<R: SecretReader, C: Connector> ConnectService<R, C> {
    pub fn connect(&self, config: &PostgresConfig) -> Result<Connection> {
        let credentials = self.secrets.pg_credentials(&config.identity_file)?;

        self.connector.connect(&ConnectParams {
            credentials: &credentials,
            endpoint: &config.endpoint,
            ssl_mode: config.ssl_mode,
        })
    }
}
