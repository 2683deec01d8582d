//! Command-line flags.

use crate::report::filter::DEFAULT_FILTER_FILE;
use clap::{Parser, builder::NonEmptyStringValueParser};
use std::path::PathBuf;

/// Proxmox monitoring script
///
/// Reports cluster nodes, LXC containers and storage pools. Connection
/// settings come from HOST, USER, TOKEN_NAME and TOKEN_VALUE (a `.env`
/// file in the working directory is loaded first).
#[derive(Parser, Debug, Clone)]
#[command(name = "pve-report", version, about, long_about = None)]
pub struct Cli {
    /// List all nodes
    #[arg(long)]
    pub nodes: bool,

    /// List all LXCs
    #[arg(long)]
    pub lxc: bool,

    /// List all storage
    #[arg(long)]
    pub storage: bool,

    /// List data about the LXCs named in the filter file
    #[arg(long = "lxc-list")]
    pub lxc_list: bool,

    /// List nodes, LXCs, and storage info for all nodes
    #[arg(long)]
    pub all: bool,

    /// Restrict LXC and storage reports to this node
    #[arg(long, value_name = "NAME", value_parser = NonEmptyStringValueParser::new())]
    pub node: Option<String>,

    /// Container-id file used by --lxc-list
    #[arg(long, value_name = "PATH", default_value = DEFAULT_FILTER_FILE)]
    pub filter_file: PathBuf,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// A report category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Action {
    Nodes,
    Lxc,
    LxcList,
    Storage,
}

impl Cli {
    /// Returns the requested report categories, in run order.
    ///
    /// `--all` implies nodes, lxc and storage. An empty result means nothing
    /// was asked for.
    pub fn actions(&self) -> Vec<Action> {
        [
            (Action::Nodes, self.nodes || self.all),
            (Action::Lxc, self.lxc || self.all),
            (Action::LxcList, self.lxc_list),
            (Action::Storage, self.storage || self.all),
        ]
        .into_iter()
        .filter_map(|(action, enabled)| enabled.then_some(action))
        .collect()
    }
}
