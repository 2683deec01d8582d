//! Domain model for node list items from the `/nodes` endpoint.

use serde::{Deserialize, Serialize};

/// A node in the Proxmox cluster.
///
/// Only the fields the node report needs are modelled; the API returns
/// more (cpu, memory, uptime) and those are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NodeListItem {
    /// The node name (e.g., "pve1").
    pub node: String,
    /// Current node status (e.g., "online", "offline", "unknown").
    #[serde(default = "default_status")]
    pub status: String,
}

impl NodeListItem {
    pub fn new(node: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            status: status.into(),
        }
    }
}

fn default_status() -> String {
    "unknown".to_string()
}
