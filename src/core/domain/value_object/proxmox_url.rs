use crate::core::domain::error::ValidationError;
use url::Url;

/// Default port of the Proxmox VE API.
pub const DEFAULT_API_PORT: u16 = 8006;

/// Represents a validated Proxmox API base URL
///
/// Built from the `HOST` setting, which may be a bare hostname, a
/// `host:port` pair, or a full `http(s)://` URL. Bare hosts default to
/// https on port 8006.
///
/// # Examples
///
/// ```
/// use pve_report::ProxmoxUrl;
///
/// let url = ProxmoxUrl::parse("pve.example.com").unwrap();
/// assert_eq!(url.as_str(), "https://pve.example.com:8006/");
/// assert_eq!(
///     url.endpoint(&["nodes"]).as_str(),
///     "https://pve.example.com:8006/api2/json/nodes"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxmoxUrl(Url);

impl ProxmoxUrl {
    /// Parses and validates a `HOST` value.
    pub fn parse(host: &str) -> Result<Self, ValidationError> {
        validate_url(host)?;
        let host = host.trim();

        let candidate = if host.contains("://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        };

        let mut url = Url::parse(&candidate)
            .map_err(|e| ValidationError::Format(format!("Invalid host '{}': {}", host, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ValidationError::Field {
                field: "HOST".to_string(),
                message: format!("Unsupported scheme '{}'", url.scheme()),
            });
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(ValidationError::Field {
                field: "HOST".to_string(),
                message: "Host name is missing".to_string(),
            });
        }
        if url.port().is_none() && !host.contains("://") && !has_explicit_port(host) {
            url.set_port(Some(DEFAULT_API_PORT))
                .map_err(|_| ValidationError::Format(format!("Cannot set port on '{}'", host)))?;
        }

        url.set_path("/");
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self(url))
    }

    /// Returns the base URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Builds the URL of a JSON API endpoint below `/api2/json/`.
    ///
    /// Each element of `segments` becomes exactly one path segment and is
    /// percent-encoded on its own, so a `/` inside a node name stays part
    /// of that name.
    #[must_use]
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.0.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.clear().push("api2").push("json");
            for segment in segments {
                path.push(segment);
            }
        }
        url
    }
}

/// `url` elides a port equal to the scheme default, so look at the raw text.
fn has_explicit_port(host: &str) -> bool {
    let authority = host.split('/').next().unwrap_or_default();
    if authority.ends_with(']') {
        return false;
    }
    authority
        .rsplit_once(':')
        .is_some_and(|(_, port)| !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()))
}

/// Validates a raw `HOST` value before parsing.
pub(crate) fn validate_url(host: &str) -> Result<(), ValidationError> {
    let trimmed = host.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Field {
            field: "HOST".to_string(),
            message: "Host cannot be empty".to_string(),
        });
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(ValidationError::Format(format!(
            "Host '{}' contains whitespace",
            trimmed
        )));
    }
    Ok(())
}
