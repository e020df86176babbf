use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use zeroize::Zeroizing;

use crate::core::errors::{PoorboxError, Result};
use crate::core::traits::secret_reader::SecretReader;

/// Reads secrets from plain text files, one value per line.
///
/// Surrounding whitespace on each line is dropped, so `alice  \r\n`
/// yields `alice`. A whitespace-only line is an empty value, not a
/// missing one. Lines past the requested count are never read.
///
/// Example `pg-secret`:
/// ```text
/// alice
/// secret123
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFileReader;

impl LineFileReader {
    /// Open `path` for reading, rejecting directories up front.
    ///
    /// Some platforms allow opening a directory and only fail on the
    /// first read, which would otherwise surface as a short file.
    fn open(path: &Path) -> Result<File> {
        let open_failed = |source: io::Error| PoorboxError::SecretOpen {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(open_failed)?;
        let metadata = file.metadata().map_err(open_failed)?;
        if metadata.is_dir() {
            return Err(open_failed(io::Error::new(
                io::ErrorKind::IsADirectory,
                "path is a directory",
            )));
        }

        Ok(file)
    }
}

impl SecretReader for LineFileReader {
    fn read_lines(&self, path: &Path, count: usize) -> Result<Vec<Zeroizing<String>>> {
        let file = Self::open(path)?;
        if count == 0 {
            return Ok(Vec::new());
        }

        let mut lines = Vec::with_capacity(count);
        for line in BufReader::new(file).lines().take(count) {
            let raw = Zeroizing::new(line.map_err(|source| PoorboxError::SecretRead {
                path: path.to_path_buf(),
                source,
            })?);
            lines.push(Zeroizing::new(raw.trim().to_string()));
        }

        if lines.len() < count {
            tracing::debug!(
                path = %path.display(),
                expected = count,
                found = lines.len(),
                "secret file ended early"
            );
            return Err(PoorboxError::SecretTooShort {
                path: path.to_path_buf(),
                expected: count,
                found: lines.len(),
            });
        }

        tracing::trace!(path = %path.display(), lines = count, "read secret file");
        Ok(lines)
    }
}
