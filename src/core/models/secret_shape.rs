/// Declares the layout of a secret file: one named field per line, in order.
///
/// The number of lines to read is always `fields.len()`, so a shape can
/// never disagree with the values it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretShape {
    pub name: &'static str,
    pub fields: &'static [&'static str],
}

impl SecretShape {
    /// Postgres identity file: username, then password.
    pub const POSTGRES: SecretShape = SecretShape {
        name: "postgres credentials",
        fields: &["username", "password"],
    };

    /// TMDB API key file: a single line holding the key.
    pub const API_KEY: SecretShape = SecretShape {
        name: "tmdb api key",
        fields: &["api_key"],
    };

    /// Number of lines a file of this shape must contain.
    pub fn line_count(&self) -> usize {
        self.fields.len()
    }
}
