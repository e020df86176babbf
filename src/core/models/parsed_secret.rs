use std::fmt;
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::core::errors::{PoorboxError, Result};
use crate::core::models::secret_shape::SecretShape;

/// Values read from a secret file, keyed by the field names of its shape.
///
/// Always holds exactly `shape.line_count()` values in file order. Values
/// are zeroed when dropped and never shown by `Debug`.
pub struct ParsedSecret {
    shape: SecretShape,
    source_path: PathBuf,
    values: Vec<(&'static str, Zeroizing<String>)>,
}

impl ParsedSecret {
    /// Pair each line with the field at the same position in `shape`.
    ///
    /// # Errors
    ///
    /// `SecretTooShort` if fewer lines than fields were supplied.
    pub fn new(shape: SecretShape, source_path: &Path, lines: Vec<Zeroizing<String>>) -> Result<Self> {
        if lines.len() < shape.line_count() {
            return Err(PoorboxError::SecretTooShort {
                path: source_path.to_path_buf(),
                expected: shape.line_count(),
                found: lines.len(),
            });
        }

        let values = shape.fields.iter().copied().zip(lines).collect();

        Ok(Self {
            shape,
            source_path: source_path.to_path_buf(),
            values,
        })
    }

    pub fn shape(&self) -> SecretShape {
        self.shape
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Number of values held (equal to the shape's line count).
    pub fn field_count(&self) -> usize {
        self.values.len()
    }

    /// Move a field's value out, leaving an empty string in its place.
    pub fn take(&mut self, field: &str) -> Option<Zeroizing<String>> {
        self.values
            .iter_mut()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| std::mem::take(value))
    }
}

impl fmt::Debug for ParsedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.values.iter().map(|(name, _)| *name).collect();
        f.debug_struct("ParsedSecret")
            .field("shape", &self.shape.name)
            .field("source_path", &self.source_path)
            .field("fields", &fields)
            .finish()
    }
}
