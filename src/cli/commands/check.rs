use crate::adapters::readers::line_file_reader::LineFileReader;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::services::secret_service::SecretService;

/// Execute the `poorbox check` command.
///
/// Loads every secret file the backend needs and stops at the first one
/// that fails. Values are never printed. The TMDB key file is only
/// required when its path was configured explicitly.
pub fn execute(config: &AppConfig) -> Result<()> {
    let service = SecretService {
        reader: LineFileReader,
    };

    output::header("🔍 poorbox check");

    let pg_path = &config.postgres.identity_file;
    let creds = service.pg_credentials(pg_path)?;
    output::success(&format!(
        "Postgres credentials: {} (user {})",
        pg_path.display(),
        creds.username()
    ));
    if creds.password().is_empty() {
        output::warning("Postgres password line is empty");
    }

    let key_path = &config.tmdb.key_file;
    if !config.tmdb.explicit && !key_path.exists() {
        output::warning(&format!(
            "TMDB API key: {} not found (optional, set --tmdb-key-file to require it)",
            key_path.display()
        ));
        return Ok(());
    }

    let key = service.api_key(key_path)?;
    if key.expose().is_empty() {
        output::warning(&format!("TMDB API key: {} is empty", key_path.display()));
    } else {
        output::success(&format!("TMDB API key: {}", key_path.display()));
    }

    Ok(())
}
