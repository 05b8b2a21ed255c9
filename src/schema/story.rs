use serde::{Deserialize, Serialize};
use std::path::Path;

use super::node::{Node, NodeId};

/// A complete story document: the static node graph plus its entry point.
///
/// Owned by the caller and read-only for the lifetime of a session. The
/// engine does not validate well-formedness here; that is the story
/// linter's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    #[serde(default)]
    pub title: String,
    pub start: NodeId,
    pub nodes: Vec<Node>,
}

impl Story {
    /// Look up a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == *id)
    }

    /// Parse a story from RON source.
    pub fn parse_ron(src: &str) -> Result<Story, StoryError> {
        Ok(ron::from_str(src)?)
    }

    /// Load a story from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Story, StoryError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}
