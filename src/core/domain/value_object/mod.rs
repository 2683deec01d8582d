mod proxmox_api_token;
mod proxmox_url;
pub(crate) mod serde_helpers;

pub use proxmox_api_token::ProxmoxApiToken;
pub use proxmox_url::{DEFAULT_API_PORT, ProxmoxUrl};
