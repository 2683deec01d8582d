//! Runs the requested reports and writes them out.

use crate::{
    Action, Cli, ClusterApi, ReportError, ReportResult,
    report::{filter, generator},
};
use std::io::Write;
use std::path::Path;
use tracing::{debug, error};

const SEPARATOR: &str = "====================";

/// Printed when no report category was requested.
pub const USAGE_HINT: &str = "No arguments provided. Use --help for usage information.";

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// All requested reports were written. Individual reports may still
    /// contain error lines.
    Completed,
    /// Nothing was requested; the usage hint was written.
    NoAction,
    /// Setup failed; the message was written and no report ran.
    SetupFailed(ReportError),
}

/// Full run: connect, check that something was requested, dispatch.
///
/// `connect` is only called once; its failure ends the run before any
/// report, even when no category was requested.
///
/// # Errors
/// Only `ReportError::Output`, when `out` cannot be written.
pub async fn run<A, F, W>(cli: &Cli, connect: F, out: &mut W) -> ReportResult<Outcome>
where
    A: ClusterApi,
    F: FnOnce() -> ReportResult<A>,
    W: Write,
{
    let api = match connect() {
        Ok(api) => api,
        Err(e) => {
            error!(kind = ?e.kind(), error = %e, "setup failed");
            writeln!(out, "Failed to connect to Proxmox API: {}", e)?;
            return Ok(Outcome::SetupFailed(e));
        }
    };

    let actions = cli.actions();
    if actions.is_empty() {
        writeln!(out, "{}", USAGE_HINT)?;
        return Ok(Outcome::NoAction);
    }

    Dispatcher::new(&api, cli.node.as_deref(), &cli.filter_file)
        .run(&actions, out)
        .await?;
    Ok(Outcome::Completed)
}

/// Writes report sections for a set of [`Action`]s.
pub struct Dispatcher<'a> {
    api: &'a dyn ClusterApi,
    node: Option<&'a str>,
    filter_file: &'a Path,
}

impl<'a> Dispatcher<'a> {
    /// `node` scopes the LXC and storage reports to one node; without it
    /// they run once per node in the cluster.
    pub fn new(api: &'a dyn ClusterApi, node: Option<&'a str>, filter_file: &'a Path) -> Self {
        Self {
            api,
            node,
            filter_file,
        }
    }

    pub async fn run<W: Write>(&self, actions: &[Action], out: &mut W) -> ReportResult<()> {
        for action in actions {
            debug!(?action, node = self.node, "running report");
            match action {
                Action::Nodes => self.nodes(out).await?,
                Action::Lxc => self.lxc(out).await?,
                Action::LxcList => self.lxc_list(out).await?,
                Action::Storage => self.storage(out).await?,
            }
        }
        Ok(())
    }

    async fn nodes<W: Write>(&self, out: &mut W) -> ReportResult<()> {
        banner(out, "Nodes in the Proxmox cluster:")?;
        lines(out, generator::node_report(self.api).await)
    }

    async fn lxc<W: Write>(&self, out: &mut W) -> ReportResult<()> {
        match self.node {
            Some(node) => {
                banner(out, &format!("LXCs on node {}:", node))?;
                lines(out, generator::container_report(self.api, node, None).await)
            }
            None => {
                banner(out, "LXCs on all nodes:")?;
                let Some(nodes) = self.node_names(out, "LXC listing").await? else {
                    return Ok(());
                };
                for node in nodes {
                    subheader(out, "LXCs", &node)?;
                    lines(out, generator::container_report(self.api, &node, None).await)?;
                }
                Ok(())
            }
        }
    }

    async fn lxc_list<W: Write>(&self, out: &mut W) -> ReportResult<()> {
        banner(
            out,
            &format!("Filtered LXC list from {}:", self.filter_file.display()),
        )?;

        let (ids, load_error) = filter::load_container_ids(self.filter_file).await;
        if let Some(e) = load_error {
            writeln!(out, "Error loading container IDs from {}", e)?;
        }

        let nodes = match self.node {
            Some(node) => vec![node.to_string()],
            None => match self.node_names(out, "filtered LXC listing").await? {
                Some(nodes) => nodes,
                None => return Ok(()),
            },
        };
        for node in nodes {
            subheader(out, "LXCs", &node)?;
            lines(
                out,
                generator::container_report(self.api, &node, Some(&ids)).await,
            )?;
        }
        Ok(())
    }

    async fn storage<W: Write>(&self, out: &mut W) -> ReportResult<()> {
        match self.node {
            Some(node) => {
                banner(out, &format!("Storage on node {}:", node))?;
                lines(out, generator::storage_report(self.api, node).await)
            }
            None => {
                banner(out, "Storage on all nodes:")?;
                let Some(nodes) = self.node_names(out, "storage listing").await? else {
                    return Ok(());
                };
                for node in nodes {
                    subheader(out, "Storage", &node)?;
                    lines(out, generator::storage_report(self.api, &node).await)?;
                }
                Ok(())
            }
        }
    }

    /// Enumerates node names, writing an error line and returning `None`
    /// when the listing fails.
    async fn node_names<W: Write>(
        &self,
        out: &mut W,
        purpose: &str,
    ) -> ReportResult<Option<Vec<String>>> {
        match self.api.list_nodes().await {
            Ok(nodes) => Ok(Some(nodes.into_iter().map(|n| n.node).collect())),
            Err(e) => {
                let line =
                    generator::error_line(&format!("Error retrieving nodes for {}", purpose), &e);
                writeln!(out, "{}", line)?;
                Ok(None)
            }
        }
    }
}

fn banner<W: Write>(out: &mut W, title: &str) -> ReportResult<()> {
    writeln!(out)?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", SEPARATOR)?;
    Ok(())
}

fn subheader<W: Write>(out: &mut W, category: &str, node: &str) -> ReportResult<()> {
    writeln!(out)?;
    writeln!(out, "-- {} on {} --", category, node)?;
    Ok(())
}

fn lines<W: Write>(out: &mut W, lines: Vec<String>) -> ReportResult<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
