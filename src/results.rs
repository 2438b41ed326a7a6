use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Outcome of a successful scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Address the scan started from
    pub target_url: String,

    /// Address the build manifest was fetched from
    pub manifest_url: String,

    /// Unique route paths found in the manifest (unordered)
    pub routes: HashSet<String>,
}

impl ScanReport {
    /// Create a new scan report
    pub fn new(target_url: String, manifest_url: String, routes: HashSet<String>) -> Self {
        Self {
            target_url,
            manifest_url,
            routes,
        }
    }

    /// Routes joined with newlines, in set order
    pub fn render(&self) -> String {
        self.routes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
