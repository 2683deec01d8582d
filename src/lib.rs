//! Read-only reporting for Proxmox VE clusters.
//!
//! Lists cluster nodes, LXC containers and storage pools through the PVE
//! JSON API, optionally restricting containers to the ids in a local file.
//!
//! # Examples
//!
//! ```no_run
//! use pve_report::{ConnectService, ReportResult, report::generator};
//!
//! #[tokio::main]
//! async fn main() -> ReportResult<()> {
//!     let client = ConnectService::new().execute_from_env()?;
//!     for line in generator::node_report(&client).await {
//!         println!("{}", line);
//!     }
//!     Ok(())
//! }
//! ```

mod auth;
pub mod cli;
mod core;
pub mod report;

#[cfg(test)]
mod tests;

pub use crate::{
    auth::application::service::connect_service::ConnectService,
    cli::{Action, Cli},
    core::{
        domain::{
            cluster_api::ClusterApi,
            error::{ErrorKind, ReportError, ReportResult, ValidationError},
            model::{
                container_list_item::ContainerListItem,
                credentials::{Credentials, HOST_KEY, TOKEN_NAME_KEY, TOKEN_VALUE_KEY, USER_KEY},
                node_list_item::NodeListItem,
                proxmox_connection::ProxmoxConnection,
                storage_list_item::StorageListItem,
            },
            value_object::{DEFAULT_API_PORT, ProxmoxApiToken, ProxmoxUrl},
        },
        infrastructure::api_client::ApiClient,
    },
    report::{
        dispatcher::{Dispatcher, Outcome},
        filter::ContainerIdFilter,
    },
};
