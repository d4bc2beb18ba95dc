//! Topology store
//!
//! A directory of JSON files, one per saved topology, named `<id>.json`.
//! Saving under an existing id replaces the previous entry.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::graph::Graph;

const ENTRY_EXTENSION: &str = "json";
const DEFAULT_NAME_PREFIX: &str = "topo-";
const DEFAULT_NAME_ID_CHARS: usize = 6;

/// A saved topology with its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTopology {
    pub id: String,
    pub name: String,
    pub topology: Graph,
    pub created_at: DateTime<Utc>,
}

/// Listing row for [`TopologyStore::list`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopologySummary {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub nodes: usize,
    pub edges: usize,
}

impl From<&StoredTopology> for TopologySummary {
    fn from(entry: &StoredTopology) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            created_at: entry.created_at,
            nodes: entry.topology.node_count(),
            edges: entry.topology.edge_count(),
        }
    }
}

#[derive(Debug)]
pub struct TopologyStore {
    root: PathBuf,
}

impl TopologyStore {
    /// Open the store at `root`, creating the directory if needed
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn open(root: &Path) -> Result<Self> {
        fs::create_dir_all(root)
            .map_err(|e| RouteError::io_operation("create store directory", root.display(), e))?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Persist `graph` and return its id.
    ///
    /// Without an explicit id a ULID is generated. Without a name the entry
    /// is called `topo-` followed by the first six id characters.
    pub fn save(&self, graph: &Graph, name: Option<&str>, id: Option<&str>) -> Result<String> {
        let id = match id {
            Some(id) => {
                validate_id(id)?;
                id.to_string()
            }
            None => ulid::Ulid::new().to_string(),
        };
        let name = match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => name.to_string(),
            None => default_name(&id),
        };

        let entry = StoredTopology {
            id: id.clone(),
            name,
            topology: graph.clone(),
            created_at: Utc::now(),
        };

        let path = self.entry_path(&id);
        if path.exists() {
            tracing::debug!(id = %id, "replacing existing topology");
        }
        let content = serde_json::to_string_pretty(&entry)?;
        fs::write(&path, content)
            .map_err(|e| RouteError::io_operation("write topology", path.display(), e))?;

        tracing::debug!(id = %id, nodes = graph.node_count(), "topology saved");
        Ok(id)
    }

    pub fn load(&self, id: &str) -> Result<StoredTopology> {
        validate_id(id).map_err(|_| RouteError::not_found("topology", id))?;
        let path = self.entry_path(id);
        if !path.is_file() {
            return Err(RouteError::not_found("topology", id));
        }
        read_entry(&path)
    }

    /// Summaries of every readable entry, oldest first (ties broken by id).
    /// Entries that fail to parse are skipped with a warning.
    pub fn list(&self) -> Result<Vec<TopologySummary>> {
        let dir = fs::read_dir(&self.root)
            .map_err(|e| RouteError::io_operation("read store directory", self.root.display(), e))?;

        let mut summaries = Vec::new();
        for dir_entry in dir {
            let path = dir_entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(ENTRY_EXTENSION) {
                continue;
            }
            match read_entry(&path) {
                Ok(entry) => summaries.push(TopologySummary::from(&entry)),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable topology")
                }
            }
        }

        summaries.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(summaries)
    }

    fn entry_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.{ENTRY_EXTENSION}"))
    }
}

fn read_entry(path: &Path) -> Result<StoredTopology> {
    let content = fs::read_to_string(path)
        .map_err(|e| RouteError::io_operation("read topology", path.display(), e))?;
    Ok(serde_json::from_str(&content)?)
}

/// Ids become file names, so only `[A-Za-z0-9_-]` is accepted
fn validate_id(id: &str) -> Result<()> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        crate::bail_invalid!("topology id", id);
    }
    Ok(())
}

fn default_name(id: &str) -> String {
    let prefix: String = id.chars().take(DEFAULT_NAME_ID_CHARS).collect();
    format!("{DEFAULT_NAME_PREFIX}{prefix}")
}
