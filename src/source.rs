//! Inventory snapshot loading
//!
//! The management-API fetch lives outside this tool; what arrives here is
//! a JSON snapshot document with the already-retrieved collections:
//!
//! ```json
//! { "alerts": [...], "nodes": [...] }
//! ```
//!
//! Loading is a single read-and-parse, no retries and no partial
//! delivery. `-` reads the snapshot from stdin.

use crate::entity::{Alert, ComputeNode};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;

/// One fully populated inventory snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(default)]
    pub nodes: Vec<ComputeNode>,
}

impl Snapshot {
    /// Load a snapshot from a file path, or from stdin when `path` is `-`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let contents = if path_ref.as_os_str() == "-" {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read snapshot from stdin")?;
            buffer
        } else {
            if !path_ref.exists() {
                bail!("Snapshot file not found: {}", path_ref.display());
            }
            fs::read_to_string(path_ref)
                .with_context(|| format!("Failed to read snapshot file {}", path_ref.display()))?
        };

        let snapshot: Snapshot =
            serde_json::from_str(&contents).context("Invalid snapshot JSON")?;
        Ok(snapshot)
    }
}
