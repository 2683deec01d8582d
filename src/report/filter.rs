//! Loading the container-id filter file.

use crate::{ReportError, ReportResult};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Default filter file, relative to the working directory.
pub const DEFAULT_FILTER_FILE: &str = "lxc.csv";

/// Set of container ids (decimal strings) a filtered report keeps.
pub type ContainerIdFilter = HashSet<String>;

/// Reads `path` and returns every line that is purely decimal digits.
///
/// Lines are trimmed first. Blank lines and anything else are dropped.
///
/// # Errors
/// `ReportError::Io` if the file cannot be opened or read.
pub async fn try_load_container_ids(path: impl AsRef<Path>) -> ReportResult<ContainerIdFilter> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let ids = parse_container_ids(&contents);
    debug!(path = %path.display(), count = ids.len(), "loaded container ids");
    Ok(ids)
}

/// Like [`try_load_container_ids`], but a read failure yields an empty set
/// together with the error, so the caller can report it and carry on.
pub async fn load_container_ids(path: impl AsRef<Path>) -> (ContainerIdFilter, Option<ReportError>) {
    match try_load_container_ids(path).await {
        Ok(ids) => (ids, None),
        Err(e) => {
            warn!(error = %e, "filter file unreadable, filtered reports will be empty");
            (ContainerIdFilter::new(), Some(e))
        }
    }
}

/// Parses filter file contents.
pub fn parse_container_ids(contents: &str) -> ContainerIdFilter {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}
