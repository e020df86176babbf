use std::path::Path;

use crate::core::errors::{PoorboxError, Result};
use crate::core::models::credentials::{ApiKey, PgCredentials};
use crate::core::models::parsed_secret::ParsedSecret;
use crate::core::models::secret_shape::SecretShape;
use crate::core::traits::secret_reader::SecretReader;

/// Loads secret files through a `SecretReader` backend and gives the
/// positional lines their names.
///
/// No recovery happens here: every reader failure reaches the caller
/// unchanged.
pub struct SecretService<R: SecretReader> {
    pub reader: R,
}

impl<R: SecretReader> SecretService<R> {
    /// Read a file laid out as `shape`.
    pub fn read_shape(&self, path: &Path, shape: SecretShape) -> Result<ParsedSecret> {
        tracing::debug!(path = %path.display(), shape = shape.name, "loading secret file");
        let lines = self.reader.read_lines(path, shape.line_count())?;
        ParsedSecret::new(shape, path, lines)
    }

    /// Load the postgres username and password.
    pub fn pg_credentials(&self, path: &Path) -> Result<PgCredentials> {
        let mut parsed = self.read_shape(path, SecretShape::POSTGRES)?;
        let username = required(&mut parsed, "username")?;
        let password = required(&mut parsed, "password")?;
        Ok(PgCredentials::new(username, password))
    }

    /// Load the metadata provider API key.
    pub fn api_key(&self, path: &Path) -> Result<ApiKey> {
        let mut parsed = self.read_shape(path, SecretShape::API_KEY)?;
        Ok(ApiKey::new(required(&mut parsed, "api_key")?))
    }
}

fn required(parsed: &mut ParsedSecret, field: &str) -> Result<zeroize::Zeroizing<String>> {
    parsed
        .take(field)
        .ok_or_else(|| PoorboxError::SecretTooShort {
            path: parsed.source_path().to_path_buf(),
            expected: parsed.shape().line_count(),
            found: parsed.field_count(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::readers::line_file_reader::LineFileReader;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use zeroize::Zeroizing;

    /// In-memory reader with the same short-file contract as the file reader.
    struct MemoryReader {
        files: HashMap<PathBuf, Vec<&'static str>>,
    }

    impl SecretReader for MemoryReader {
        fn read_lines(&self, path: &Path, count: usize) -> Result<Vec<Zeroizing<String>>> {
            let lines = self
                .files
                .get(path)
                .ok_or_else(|| PoorboxError::SecretOpen {
                    path: path.to_path_buf(),
                    source: std::io::ErrorKind::NotFound.into(),
                })?;
            if lines.len() < count {
                return Err(PoorboxError::SecretTooShort {
                    path: path.to_path_buf(),
                    expected: count,
                    found: lines.len(),
                });
            }
            Ok(lines[..count]
                .iter()
                .map(|l| Zeroizing::new(l.trim().to_string()))
                .collect())
        }
    }

    fn memory_service(files: &[(&str, Vec<&'static str>)]) -> SecretService<MemoryReader> {
        SecretService {
            reader: MemoryReader {
                files: files
                    .iter()
                    .map(|(p, l)| (PathBuf::from(p), l.clone()))
                    .collect(),
            },
        }
    }

    fn file_service() -> SecretService<LineFileReader> {
        SecretService {
            reader: LineFileReader,
        }
    }

    #[test]
    fn pg_credentials_maps_username_then_password() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pg-secret");
        std::fs::write(&path, "alice\nsecret123\n").unwrap();

        let creds = file_service().pg_credentials(&path).unwrap();
        assert_eq!(creds.username(), "alice");
        assert_eq!(creds.password(), "secret123");
    }

    #[test]
    fn pg_credentials_short_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pg-secret");
        std::fs::write(&path, "onlyoneline\n").unwrap();

        let err = file_service().pg_credentials(&path).unwrap_err();
        assert!(matches!(&err, PoorboxError::SecretTooShort { path: p, .. } if *p == path));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn api_key_without_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tmdb-secret");
        std::fs::write(&path, "key-abc-123").unwrap();

        let key = file_service().api_key(&path).unwrap();
        assert_eq!(key.expose(), "key-abc-123");
    }

    #[test]
    fn missing_file_propagates_open_failure() {
        let svc = memory_service(&[]);
        assert!(matches!(
            svc.pg_credentials(Path::new("./pg-secret")),
            Err(PoorboxError::SecretOpen { .. })
        ));
        assert!(matches!(
            svc.api_key(Path::new("./tmdb-secret")),
            Err(PoorboxError::SecretOpen { .. })
        ));
    }

    #[test]
    fn read_shape_keys_values_by_field() {
        let svc = memory_service(&[("pg", vec!["bob", "pw", "ignored"])]);
        let mut parsed = svc.read_shape(Path::new("pg"), SecretShape::POSTGRES).unwrap();

        assert_eq!(parsed.field_count(), 2);
        assert_eq!(parsed.take("username").unwrap().as_str(), "bob");
        assert_eq!(parsed.take("password").unwrap().as_str(), "pw");
    }

    #[test]
    fn empty_password_is_not_rejected() {
        let svc = memory_service(&[("pg", vec!["bob", "   "])]);
        let creds = svc.pg_credentials(Path::new("pg")).unwrap();
        assert_eq!(creds.username(), "bob");
        assert_eq!(creds.password(), "");
    }
}
