use crate::core::domain::error::ValidationError;

/// A Proxmox API token: `<user>!<token name>=<secret>`.
///
/// The secret is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ProxmoxApiToken {
    user: String,
    token_name: String,
    token_value: String,
}

impl ProxmoxApiToken {
    /// Creates a new token after validating each part.
    pub fn new(
        user: impl Into<String>,
        token_name: impl Into<String>,
        token_value: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let token = Self {
            user: user.into(),
            token_name: token_name.into(),
            token_value: token_value.into(),
        };
        validate_token_part("USER", &token.user)?;
        validate_token_part("TOKEN_NAME", &token.token_name)?;
        validate_token_part("TOKEN_VALUE", &token.token_value)?;
        Ok(token)
    }

    /// Returns the user the token belongs to (e.g. `root@pam`).
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the token name.
    #[must_use]
    pub fn token_name(&self) -> &str {
        &self.token_name
    }

    /// Formats the token as an `Authorization` header value.
    #[must_use]
    pub fn as_authorization_header(&self) -> String {
        format!(
            "PVEAPIToken={}!{}={}",
            self.user, self.token_name, self.token_value
        )
    }
}

impl std::fmt::Debug for ProxmoxApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxmoxApiToken")
            .field("user", &self.user)
            .field("token_name", &self.token_name)
            .field("token_value", &"<redacted>")
            .finish()
    }
}

fn validate_token_part(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Field {
            field: field.to_string(),
            message: "Value cannot be empty".to_string(),
        });
    }
    // Header values cannot carry control characters.
    if value.chars().any(char::is_control) {
        return Err(ValidationError::Format(format!(
            "{} contains control characters",
            field
        )));
    }
    Ok(())
}
