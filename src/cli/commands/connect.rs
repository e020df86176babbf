use crate::adapters::connectors::tcp_connector::TcpConnector;
use crate::adapters::readers::line_file_reader::LineFileReader;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::services::connect_service::ConnectService;
use crate::core::services::secret_service::SecretService;

/// Execute the `poorbox connect` command.
///
/// Reads the postgres identity file and connects to the configured
/// endpoint. Any failure aborts with a non-zero exit status; there is no
/// retry and no fallback credential source.
pub fn execute(config: &AppConfig) -> Result<()> {
    let pg = &config.postgres;
    let service = ConnectService {
        secrets: SecretService {
            reader: LineFileReader,
        },
        connector: TcpConnector::new(pg.connect_timeout),
    };

    let conn = service.connect(pg)?;

    output::success(&format!(
        "Connected to postgres at {} ({}) as {}",
        pg.endpoint, conn.peer, conn.username
    ));
    output::field("sslmode", &conn.ssl_mode.to_string());

    Ok(())
}
