use super::{cli, refused};
use crate::{
    ContainerListItem, NodeListItem, Outcome, ReportError, StorageListItem,
    core::domain::cluster_api::MockClusterApi, report::dispatcher,
};
use std::io::Write;

async fn run_with(args: &[&str], api: MockClusterApi) -> (Outcome, String) {
    let cli = cli(args);
    let mut out = Vec::new();
    let outcome = dispatcher::run(&cli, || Ok(api), &mut out).await.unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

fn one_node() -> Vec<NodeListItem> {
    vec![NodeListItem::new("node1", "online")]
}

#[tokio::test]
async fn test_nodes_only() {
    let mut api = MockClusterApi::new();
    api.expect_list_nodes().times(1).returning(|| {
        Ok(vec![
            NodeListItem::new("node1", "online"),
            NodeListItem::new("node2", "offline"),
        ])
    });

    let (outcome, output) = run_with(&["--nodes"], api).await;
    assert!(matches!(outcome, Outcome::Completed));
    assert_eq!(
        output,
        "\n====================\nNodes in the Proxmox cluster:\n====================\n\
         Node: node1 - Status: online\nNode: node2 - Status: offline\n"
    );
    assert!(!output.contains("LXCs"));
    assert!(!output.contains("Storage"));
}

#[tokio::test]
async fn test_lxc_on_single_node() {
    let mut api = MockClusterApi::new();
    api.expect_list_nodes().never();
    api.expect_list_containers()
        .withf(|node| node == "node1")
        .times(1)
        .returning(|_| Ok(vec![ContainerListItem::new(100, Some("web"), "running")]));

    let (_, output) = run_with(&["--lxc", "--node", "node1"], api).await;
    assert!(output.contains("LXCs on node node1:"));
    assert!(output.contains(" - web (VMID: 100) - status: running"));
    assert!(!output.contains("-- LXCs on"));
}

#[tokio::test]
async fn test_storage_on_single_node() {
    let mut api = MockClusterApi::new();
    api.expect_list_storage()
        .withf(|node| node == "node1")
        .returning(|_| Ok(vec![StorageListItem::new("local", Some("dir"), Some("available"))]));

    let (_, output) = run_with(&["--storage", "--node", "node1"], api).await;
    assert!(output.contains("Storage on node node1:"));
    assert!(output.contains(" - local (Type: dir) - status: available"));
}

#[tokio::test]
async fn test_all_with_one_node() {
    let mut api = MockClusterApi::new();
    api.expect_list_nodes().times(3).returning(|| Ok(one_node()));
    api.expect_list_containers()
        .withf(|node| node == "node1")
        .times(1)
        .returning(|_| Ok(vec![ContainerListItem::new(100, Some("web"), "running")]));
    api.expect_list_storage()
        .withf(|node| node == "node1")
        .times(1)
        .returning(|_| Ok(vec![StorageListItem::new("local", Some("dir"), Some("available"))]));

    let (outcome, output) = run_with(&["--all"], api).await;
    assert!(matches!(outcome, Outcome::Completed));

    let nodes = output.find("Nodes in the Proxmox cluster:").unwrap();
    let lxc = output.find("-- LXCs on node1 --").unwrap();
    let storage = output.find("-- Storage on node1 --").unwrap();
    assert!(nodes < lxc && lxc < storage);
    assert!(output.contains("LXCs on all nodes:"));
    assert!(output.contains("Storage on all nodes:"));
    assert!(output.contains("Node: node1 - Status: online"));
    assert!(output.contains(" - web (VMID: 100) - status: running"));
    assert!(output.contains(" - local (Type: dir) - status: available"));
    assert!(!output.contains("Filtered LXC list"));
}

#[tokio::test]
async fn test_enumeration_failure_does_not_stop_other_categories() {
    let mut api = MockClusterApi::new();
    api.expect_list_nodes().times(3).returning(|| Err(refused()));
    api.expect_list_containers().never();
    api.expect_list_storage().never();

    let (outcome, output) = run_with(&["--nodes", "--lxc", "--storage"], api).await;
    assert!(matches!(outcome, Outcome::Completed));
    assert!(output.contains("Error retrieving nodes: Connection error"));
    assert!(output.contains("Error retrieving nodes for LXC listing: Connection error"));
    assert!(output.contains("Error retrieving nodes for storage listing: Connection error"));
    assert!(output.contains("Storage on all nodes:"));
}

#[tokio::test]
async fn test_per_node_failure_does_not_stop_sibling_nodes() {
    let mut api = MockClusterApi::new();
    api.expect_list_nodes().returning(|| {
        Ok(vec![
            NodeListItem::new("node1", "offline"),
            NodeListItem::new("node2", "online"),
        ])
    });
    api.expect_list_storage()
        .withf(|node| node == "node1")
        .returning(|_| Err(refused()));
    api.expect_list_storage()
        .withf(|node| node == "node2")
        .returning(|_| Ok(vec![StorageListItem::new("local", Some("dir"), None)]));

    let (_, output) = run_with(&["--storage"], api).await;
    assert!(output.contains("-- Storage on node1 --\nError retrieving storage from node 'node1'"));
    assert!(output.contains("-- Storage on node2 --\n - local (Type: dir) - status: N/A"));
}

#[tokio::test]
async fn test_lxc_list_filters_by_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "100\nnot-an-id\n").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let mut api = MockClusterApi::new();
    api.expect_list_nodes().times(1).returning(|| Ok(one_node()));
    api.expect_list_containers().times(1).returning(|_| {
        Ok(vec![
            ContainerListItem::new(100, Some("web"), "running"),
            ContainerListItem::new(101, None, "stopped"),
        ])
    });

    let (_, output) = run_with(&["--lxc-list", "--filter-file", path.as_str()], api).await;
    assert!(output.contains(&format!("Filtered LXC list from {}:", path)));
    assert!(output.contains("-- LXCs on node1 --"));
    assert!(output.contains(" - web (VMID: 100) - status: running"));
    assert!(!output.contains("VMID: 101"));
}

#[tokio::test]
async fn test_lxc_list_single_node_has_subheader() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "101\n").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let mut api = MockClusterApi::new();
    api.expect_list_nodes().never();
    api.expect_list_containers()
        .withf(|node| node == "node7")
        .returning(|_| Ok(vec![ContainerListItem::new(101, None, "stopped")]));

    let args = ["--lxc-list", "--node", "node7", "--filter-file", path.as_str()];
    let (_, output) = run_with(&args, api).await;
    assert!(output.contains("-- LXCs on node7 --\n - ct101 (VMID: 101) - status: stopped\n"));
}

#[tokio::test]
async fn test_lxc_list_missing_file_reports_and_shows_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lxc.csv");
    let path = path.to_str().unwrap().to_string();

    let mut api = MockClusterApi::new();
    api.expect_list_containers()
        .returning(|_| Ok(vec![ContainerListItem::new(100, Some("web"), "running")]));

    let args = ["--lxc-list", "--node", "node1", "--filter-file", path.as_str()];
    let (outcome, output) = run_with(&args, api).await;
    assert!(matches!(outcome, Outcome::Completed));
    assert!(output.contains(&format!("Error loading container IDs from {}: ", path)));
    assert!(output.contains("-- LXCs on node1 --"));
    assert!(!output.contains("VMID: 100"));
}

#[tokio::test]
async fn test_no_action_prints_usage() {
    let api = MockClusterApi::new();
    let (outcome, output) = run_with(&["--node", "node1"], api).await;
    assert!(matches!(outcome, Outcome::NoAction));
    assert_eq!(output, format!("{}\n", dispatcher::USAGE_HINT));
}

#[tokio::test]
async fn test_setup_failure_runs_nothing() {
    let cli = cli(&["--all"]);
    let mut out = Vec::new();
    let outcome = dispatcher::run::<MockClusterApi, _, _>(
        &cli,
        || {
            Err(ReportError::Configuration {
                missing: vec!["HOST", "TOKEN_VALUE"],
            })
        },
        &mut out,
    )
    .await
    .unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(matches!(
        outcome,
        Outcome::SetupFailed(ReportError::Configuration { .. })
    ));
    assert!(output.starts_with("Failed to connect to Proxmox API: Missing required environment variables"));
    assert!(output.contains("HOST, TOKEN_VALUE"));
    assert!(!output.contains("===================="));
}

#[tokio::test]
async fn test_setup_failure_precedes_usage_hint() {
    let cli = cli(&[]);
    let mut out = Vec::new();
    let outcome = dispatcher::run::<MockClusterApi, _, _>(
        &cli,
        || Err(ReportError::Configuration { missing: vec!["USER"] }),
        &mut out,
    )
    .await
    .unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(matches!(outcome, Outcome::SetupFailed(_)));
    assert!(!output.contains(dispatcher::USAGE_HINT));
}
