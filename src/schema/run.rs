use serde::{Deserialize, Serialize};

use super::node::NodeId;
use super::vars::Vars;

/// The session state threaded through the engine: where the reader is,
/// the current variable bag, and an append-only log of event strings.
///
/// Mutable by replacement only — every transition produces a fresh
/// `RunState`; nothing in the engine updates one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub node_id: NodeId,
    pub vars: Vars,
    #[serde(default)]
    pub log: Vec<String>,
}

impl RunState {
    /// Session-initial state at `start` with the engine baseline
    /// (`mut` and `klarheit` at zero) and an empty log.
    pub fn new(start: NodeId) -> Self {
        Self::with_baseline(start, Vars::baseline())
    }

    /// Session-initial state with an explicit baseline, for stories that
    /// override or extend the default variable set.
    pub fn with_baseline(start: NodeId, baseline: Vars) -> Self {
        Self {
            node_id: start,
            vars: baseline,
            log: Vec::new(),
        }
    }
}
