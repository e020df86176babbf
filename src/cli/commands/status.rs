use std::path::Path;

use colored::Colorize;

use crate::adapters::readers::line_file_reader::LineFileReader;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::{PoorboxError, Result};
use crate::core::models::secret_shape::SecretShape;
use crate::core::services::secret_service::SecretService;

/// Execute the `poorbox status` command.
///
/// Reports the effective configuration and the state of each secret
/// file. Problems are shown as warnings; this command itself only fails
/// on I/O errors writing the report.
pub fn execute(config: &AppConfig) -> Result<()> {
    output::header("poorbox status");
    let source = config
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(defaults and flags)".into());
    output::field("Config", &source);
    output::field("Endpoint", &config.postgres.endpoint.to_string());
    output::field("SSL mode", &config.postgres.ssl_mode.to_string());
    output::field(
        "Timeout",
        &format!("{}s", config.postgres.connect_timeout.as_secs()),
    );

    let service = SecretService {
        reader: LineFileReader,
    };

    println!("\n{}", "  Secret files".bold());
    print_secret_state(&service, &config.postgres.identity_file, SecretShape::POSTGRES);
    print_secret_state(&service, &config.tmdb.key_file, SecretShape::API_KEY);

    Ok(())
}

/// Print one line describing whether `path` loads as `shape`.
fn print_secret_state(service: &SecretService<LineFileReader>, path: &Path, shape: SecretShape) {
    let label = format!("{} ({})", shape.name, path.display());

    match service.read_shape(path, shape) {
        Ok(parsed) => {
            output::success(&format!("{label}: {} field(s)", parsed.field_count()));
            if let Some(mode) = loose_permissions(path) {
                output::warning(&format!(
                    "{} is readable by other users (mode {mode:o}); consider chmod 600",
                    path.display()
                ));
            }
        }
        Err(PoorboxError::SecretOpen { source, .. }) => {
            output::warning(&format!("{label}: cannot open ({source})"));
        }
        Err(PoorboxError::SecretTooShort {
            expected, found, ..
        }) => {
            output::warning(&format!(
                "{label}: too short ({found} of {expected} line(s))"
            ));
        }
        Err(e) => {
            output::warning(&format!("{label}: {e}"));
        }
    }
}

/// Permission bits when group or other can read the file (Unix only).
#[cfg(unix)]
fn loose_permissions(path: &Path) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;

    let mode = std::fs::metadata(path).ok()?.permissions().mode() & 0o777;
    (mode & 0o077 != 0).then_some(mode)
}

#[cfg(not(unix))]
fn loose_permissions(_path: &Path) -> Option<u32> {
    None
}
