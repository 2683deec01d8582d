//! Report generators: fetch records and format one line per record.
//!
//! A failing API call never propagates out of a generator; it becomes the
//! single line of the returned report instead.

use crate::{
    ClusterApi, ContainerIdFilter, ContainerListItem, NodeListItem, ReportError,
    StorageListItem,
};
use tracing::warn;

/// Formats one node line.
pub fn format_node(node: &NodeListItem) -> String {
    format!("Node: {} - Status: {}", node.node, node.status)
}

/// Formats one container line.
pub fn format_container(container: &ContainerListItem) -> String {
    format!(
        " - {} (VMID: {}) - status: {}",
        container.display_name(),
        container.vmid,
        container.status
    )
}

/// Formats one storage line.
pub fn format_storage(storage: &StorageListItem) -> String {
    format!(
        " - {} (Type: {}) - status: {}",
        storage.storage,
        storage.type_label(),
        storage.status_label()
    )
}

/// Lists every node with its status.
pub async fn node_report(api: &dyn ClusterApi) -> Vec<String> {
    match api.list_nodes().await {
        Ok(nodes) => nodes.iter().map(format_node).collect(),
        Err(e) => vec![error_line("Error retrieving nodes", &e)],
    }
}

/// Lists the containers on `node`.
///
/// With `filter`, only containers whose id is in the set are kept; an
/// empty set keeps nothing.
pub async fn container_report(
    api: &dyn ClusterApi,
    node: &str,
    filter: Option<&ContainerIdFilter>,
) -> Vec<String> {
    let containers = match api.list_containers(node).await {
        Ok(containers) => containers,
        Err(e) => {
            return vec![error_line(
                &format!("Error retrieving LXCs from node '{}'", node),
                &e,
            )];
        }
    };

    containers
        .iter()
        .filter(|ct| filter.is_none_or(|ids| ids.contains(&ct.vmid.to_string())))
        .map(format_container)
        .collect()
}

/// Lists the storage pools visible to `node`.
pub async fn storage_report(api: &dyn ClusterApi, node: &str) -> Vec<String> {
    match api.list_storage(node).await {
        Ok(pools) => pools.iter().map(format_storage).collect(),
        Err(e) => vec![error_line(
            &format!("Error retrieving storage from node '{}'", node),
            &e,
        )],
    }
}

pub(crate) fn error_line(context: &str, error: &ReportError) -> String {
    warn!(kind = ?error.kind(), %error, "{}", context);
    format!("{}: {}", context, error)
}
