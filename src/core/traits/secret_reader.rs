use std::path::Path;

use zeroize::Zeroizing;

use crate::core::errors::Result;

/// Port for reading fixed-arity secret files.
pub trait SecretReader {
    /// Read exactly `count` whitespace-trimmed lines from `path`, in order.
    ///
    /// Implementations must fail with `SecretOpen` when the source cannot
    /// be opened and `SecretTooShort` when it ends before `count` lines.
    /// A partial result is never returned.
    fn read_lines(&self, path: &Path, count: usize) -> Result<Vec<Zeroizing<String>>>;
}
