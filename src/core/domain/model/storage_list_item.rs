//! Domain model for storage pools from the `/nodes/{node}/storage` endpoint.

use serde::{Deserialize, Serialize};

/// A storage pool available to a node.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageListItem {
    /// Storage identifier (e.g., `local`, `nfs-backup`).
    pub storage: String,
    /// Storage plugin type (e.g., `dir`, `zfspool`, `nfs`).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    /// Status string, when the API provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl StorageListItem {
    pub fn new(storage: impl Into<String>, storage_type: Option<&str>, status: Option<&str>) -> Self {
        Self {
            storage: storage.into(),
            storage_type: storage_type.map(str::to_string),
            status: status.map(str::to_string),
        }
    }

    /// Returns the storage type, or `unknown`.
    #[must_use]
    pub fn type_label(&self) -> &str {
        self.storage_type.as_deref().unwrap_or("unknown")
    }

    /// Returns the status, or `N/A`.
    #[must_use]
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("N/A")
    }
}
