use crate::core::domain::{
    error::ReportResult,
    model::credentials::Credentials,
    value_object::{ProxmoxApiToken, ProxmoxUrl},
};

/// Validated connection details: where the API lives and how to authenticate.
#[derive(Debug, Clone)]
pub struct ProxmoxConnection {
    proxmox_url: ProxmoxUrl,
    api_token: ProxmoxApiToken,
    accept_invalid_certs: bool,
}

impl ProxmoxConnection {
    pub fn new(proxmox_url: ProxmoxUrl, api_token: ProxmoxApiToken) -> Self {
        Self {
            proxmox_url,
            api_token,
            accept_invalid_certs: true,
        }
    }

    /// Validates raw credentials into a connection.
    pub fn from_credentials(credentials: &Credentials) -> ReportResult<Self> {
        let url = ProxmoxUrl::parse(&credentials.host)?;
        let token = ProxmoxApiToken::new(
            credentials.user.as_str(),
            credentials.token_name.as_str(),
            credentials.token_value.as_str(),
        )?;
        Ok(Self::new(url, token))
    }

    pub fn proxmox_url(&self) -> &ProxmoxUrl {
        &self.proxmox_url
    }

    pub fn api_token(&self) -> &ProxmoxApiToken {
        &self.api_token
    }

    /// Certificate validation is always off.
    pub fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }
}
