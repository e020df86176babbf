use std::path::PathBuf;

/// All domain errors for poorbox.
///
/// Secret-file failures are split so an operator can tell a wrong path
/// (`SecretOpen`) from a truncated or malformed secret (`SecretTooShort`).
#[derive(Debug, thiserror::Error)]
pub enum PoorboxError {
    #[error(
        "Cannot open secret file: {path}\n\n  \
         Check that the path is correct and readable by this user.\n  \
         Use --pg-identity-file / --tmdb-key-file to point at another file."
    )]
    SecretOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Didn't parse enough lines from secret file: {path}\n\n  \
         Expected {expected} line(s), found {found}.\n  \
         Credential files hold one value per line (e.g. username, then password)."
    )]
    SecretTooShort {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("Failed to read secret file {path}: {source}")]
    SecretRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(
        "Invalid endpoint '{endpoint}': {detail}\n\n  \
         Expected HOST:PORT, e.g. localhost:5432 or [::1]:5432"
    )]
    InvalidEndpoint { endpoint: String, detail: String },

    #[error(
        "Connection to {endpoint} failed: {reason}\n\n  \
         Poorbox expects postgres to be running (typically under docker on port 5432).\n  \
         Check the endpoint with --pg-endpoint and that the server is up."
    )]
    ConnectionFailed { endpoint: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PoorboxError>;
