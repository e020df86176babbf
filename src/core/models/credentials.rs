use std::fmt;

use zeroize::Zeroizing;

/// Postgres username and password read from the identity file.
///
/// Both values are zeroed on drop. `Debug` prints the username only.
#[derive(Clone)]
pub struct PgCredentials {
    username: Zeroizing<String>,
    password: Zeroizing<String>,
}

impl PgCredentials {
    pub fn new(username: Zeroizing<String>, password: Zeroizing<String>) -> Self {
        Self { username, password }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for PgCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgCredentials")
            .field("username", &self.username.as_str())
            .field("password", &"<redacted>")
            .finish()
    }
}

/// API key for the metadata provider.
#[derive(Clone)]
pub struct ApiKey(Zeroizing<String>);

impl ApiKey {
    pub fn new(key: Zeroizing<String>) -> Self {
        Self(key)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_accessors() {
        let creds = PgCredentials::new(
            Zeroizing::new("alice".into()),
            Zeroizing::new("secret123".into()),
        );
        assert_eq!(creds.username(), "alice");
        assert_eq!(creds.password(), "secret123");
    }

    #[test]
    fn credentials_debug_redacts_password() {
        let creds = PgCredentials::new(
            Zeroizing::new("alice".into()),
            Zeroizing::new("secret123".into()),
        );
        let debug = format!("{creds:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("secret123"));
    }

    #[test]
    fn api_key_debug_redacts_key() {
        let key = ApiKey::new(Zeroizing::new("key-abc-123".into()));
        assert_eq!(key.expose(), "key-abc-123");
        assert_eq!(format!("{key:?}"), "ApiKey(<redacted>)");
    }
}
