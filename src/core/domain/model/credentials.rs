use crate::core::domain::error::{ReportError, ReportResult};

/// Environment key of the API host.
pub const HOST_KEY: &str = "HOST";
/// Environment key of the token's user (e.g. `root@pam`).
pub const USER_KEY: &str = "USER";
/// Environment key of the API token name.
pub const TOKEN_NAME_KEY: &str = "TOKEN_NAME";
/// Environment key of the API token secret.
pub const TOKEN_VALUE_KEY: &str = "TOKEN_VALUE";

/// Raw connection settings, read once per process.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub host: String,
    pub user: String,
    pub token_name: String,
    pub token_value: String,
}

impl Credentials {
    /// Reads the four settings from the process environment.
    pub fn from_env() -> ReportResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the four settings through `lookup`.
    ///
    /// A key that is absent or empty counts as missing. All missing keys
    /// are reported together.
    pub fn from_lookup<F>(lookup: F) -> ReportResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut read = |key: &'static str| match lookup(key) {
            Some(value) if !value.is_empty() => value,
            _ => {
                missing.push(key);
                String::new()
            }
        };

        let credentials = Self {
            host: read(HOST_KEY),
            user: read(USER_KEY),
            token_name: read(TOKEN_NAME_KEY),
            token_value: read(TOKEN_VALUE_KEY),
        };

        if missing.is_empty() {
            Ok(credentials)
        } else {
            Err(ReportError::Configuration { missing })
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("token_name", &self.token_name)
            .field("token_value", &"<redacted>")
            .finish()
    }
}
