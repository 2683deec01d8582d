
use crate::{ApiClient, ProxmoxApiToken, ProxmoxConnection, ProxmoxUrl};
use wiremock::MockServer;

pub(crate) fn create_test_client(mock_server: &MockServer) -> ApiClient {
    let url = ProxmoxUrl::parse(&mock_server.uri()).unwrap();
    let token = ProxmoxApiToken::new("root@pam", "monitor", "secret").unwrap();
    ApiClient::new(ProxmoxConnection::new(url, token)).unwrap()
}
