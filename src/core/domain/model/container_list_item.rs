//! Domain model for LXC containers from the `/nodes/{node}/lxc` endpoint.

use crate::core::domain::value_object::serde_helpers;
use serde::{Deserialize, Serialize};

/// An LXC container hosted on a node.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ContainerListItem {
    /// The container identifier (unique per cluster).
    #[serde(deserialize_with = "serde_helpers::vmid::deserialize")]
    pub vmid: u32,
    /// Hostname of the container, if set.
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient_string::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    /// Current status (e.g., "running", "stopped").
    #[serde(default = "default_status")]
    pub status: String,
}

impl ContainerListItem {
    pub fn new(vmid: u32, name: Option<&str>, status: impl Into<String>) -> Self {
        Self {
            vmid,
            name: name.map(str::to_string),
            status: status.into(),
        }
    }

    /// Returns the name to show, falling back to `ct<vmid>` when the API
    /// sent no name at all.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("ct{}", self.vmid))
    }
}

fn default_status() -> String {
    "unknown".to_string()
}
