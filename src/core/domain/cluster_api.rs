//! The read-only operations the reports need from the cluster API.

use crate::core::domain::{
    error::ReportResult,
    model::{
        container_list_item::ContainerListItem, node_list_item::NodeListItem,
        storage_list_item::StorageListItem,
    },
};
use async_trait::async_trait;

/// Read access to a Proxmox VE cluster.
///
/// Implemented over HTTP by [`ApiClient`](crate::ApiClient); tests use the
/// generated `MockClusterApi`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClusterApi: Send + Sync {
    /// Lists all nodes in the cluster, in API order.
    async fn list_nodes(&self) -> ReportResult<Vec<NodeListItem>>;

    /// Lists the LXC containers hosted on `node`.
    async fn list_containers(&self, node: &str) -> ReportResult<Vec<ContainerListItem>>;

    /// Lists the storage pools visible to `node`.
    async fn list_storage(&self, node: &str) -> ReportResult<Vec<StorageListItem>>;
}
