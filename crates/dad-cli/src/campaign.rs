//! Campaign persistence: the roster and the move log as one JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use dad_core::Roster;
use dad_table::MoveLog;

/// A saved campaign: the dads at the table plus every move resolved so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    /// Campaign name.
    pub name: String,
    /// The roster of dads.
    pub roster: Roster,
    /// Moves resolved across sessions.
    #[serde(default)]
    pub log: MoveLog,
}

impl Campaign {
    /// Create an empty campaign.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roster: Roster::new(),
            log: MoveLog::new(),
        }
    }

    /// Load a campaign from a JSON file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        serde_json::from_str(&content).map_err(|e| format!("cannot parse {}: {e}", path.display()))
    }

    /// Write the campaign back to disk as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("cannot serialize campaign: {e}"))?;
        fs::write(path, content).map_err(|e| format!("cannot write {}: {e}", path.display()))
    }
}
