use crate::{ApiClient, Credentials, ProxmoxConnection, ReportResult};
use tracing::{debug, info};

/// Turns credentials into a ready-to-use [`ApiClient`].
///
/// No request is sent here: the API token is attached to every call, so
/// the first report is also the first contact with the server.
pub struct ConnectService;

impl ConnectService {
    pub fn new() -> Self {
        Self
    }

    /// Reads credentials from the process environment and connects.
    ///
    /// # Errors
    /// `Configuration` naming every missing key, `Validation` if a value is
    /// unusable, or `Connection` if the HTTP client cannot be built.
    pub fn execute_from_env(&self) -> ReportResult<ApiClient> {
        let credentials = Credentials::from_env()?;
        self.execute(&credentials)
    }

    pub fn execute(&self, credentials: &Credentials) -> ReportResult<ApiClient> {
        debug!(?credentials, "validating credentials");
        let connection = ProxmoxConnection::from_credentials(credentials)?;
        let client = ApiClient::new(connection)?;
        info!(
            url = client.connection().proxmox_url().as_str(),
            user = client.connection().api_token().user(),
            "API client ready"
        );
        Ok(client)
    }
}

impl Default for ConnectService {
    fn default() -> Self {
        Self::new()
    }
}
