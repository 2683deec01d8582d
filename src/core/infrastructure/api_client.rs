//! HTTP client for the Proxmox VE JSON API, authenticated with an API token.

use crate::core::domain::{
    cluster_api::ClusterApi,
    error::{ReportError, ReportResult},
    model::{
        container_list_item::ContainerListItem, node_list_item::NodeListItem,
        proxmox_connection::ProxmoxConnection, storage_list_item::StorageListItem,
    },
};
use async_trait::async_trait;
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::Deserialize;
use tracing::debug;

/// Every API response wraps its payload in a `data` member.
#[derive(Deserialize)]
struct ApiResponse<T> {
    data: T,
}

/// HTTP implementation of [`ClusterApi`].
///
/// The API token is sent as a default `Authorization` header on every
/// request, so there is no login round-trip and no session state.
#[derive(Debug)]
pub struct ApiClient {
    http_client: Client,
    connection: ProxmoxConnection,
}

impl ApiClient {
    /// Creates a new `ApiClient`. No request is made until the first call.
    ///
    /// # Errors
    /// Returns `ReportError::Connection` if the HTTP client cannot be built
    /// or the token cannot be encoded as a header value.
    pub fn new(connection: ProxmoxConnection) -> ReportResult<Self> {
        let mut auth_value =
            HeaderValue::from_str(&connection.api_token().as_authorization_header())
                .map_err(|e| ReportError::Connection(format!("Invalid API token header: {}", e)))?;
        auth_value.set_sensitive(true);

        let mut default_headers = HeaderMap::new();
        default_headers.insert(AUTHORIZATION, auth_value);
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .danger_accept_invalid_certs(connection.accept_invalid_certs())
            .default_headers(default_headers)
            .build()
            .map_err(|e| ReportError::Connection(e.to_string()))?;

        Ok(Self {
            http_client,
            connection,
        })
    }

    /// Returns a reference to the underlying connection details.
    pub fn connection(&self) -> &ProxmoxConnection {
        &self.connection
    }

    /// Performs a GET request and unwraps the `data` envelope.
    ///
    /// `path` lists the segments below `/api2/json/`, one element per segment.
    ///
    /// # Errors
    /// - `Connection` if the request cannot be sent
    /// - `Authentication` on 401/403
    /// - `Api` on any other non-success status
    /// - `Decode` if the body is not the expected JSON
    pub async fn get<T>(&self, path: &[&str]) -> ReportResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.connection.proxmox_url().endpoint(path);
        debug!(%url, "GET");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ReportError::Connection(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        debug!(%status, path = ?path, "response");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ReportError::Authentication(format!(
                "API token rejected ({})",
                status
            )));
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            return Err(ReportError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<ApiResponse<T>>()
            .await
            .map(|envelope| envelope.data)
            .map_err(|e| ReportError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ClusterApi for ApiClient {
    async fn list_nodes(&self) -> ReportResult<Vec<NodeListItem>> {
        self.get(&["nodes"]).await
    }

    async fn list_containers(&self, node: &str) -> ReportResult<Vec<ContainerListItem>> {
        self.get(&["nodes", node, "lxc"]).await
    }

    async fn list_storage(&self, node: &str) -> ReportResult<Vec<StorageListItem>> {
        self.get(&["nodes", node, "storage"]).await
    }
}
