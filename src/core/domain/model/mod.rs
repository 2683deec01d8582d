pub mod container_list_item;
pub mod credentials;
pub mod node_list_item;
pub mod proxmox_connection;
pub mod storage_list_item;
