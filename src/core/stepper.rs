//! The pure transition engine.
//!
//! Both operations here take the current run state by reference and
//! return fresh values. Same inputs, same outputs — no I/O, no
//! randomness, no mutation of the story graph or the input state.

use crate::schema::node::{Choice, Node, NodeId};
use crate::schema::run::RunState;
use crate::schema::vars::Vars;

/// Result of a single `step`.
///
/// A dangling `choice.to` is not an error: the engine fails closed and
/// hands back an unchanged state, tagged so callers and tests can still
/// see that the authored target was missing.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// The target node exists: effects applied, position moved, log extended.
    Advanced(RunState),
    /// `to` matched no node. `state` equals the input state.
    MissingTarget { state: RunState, to: NodeId },
}

impl StepOutcome {
    /// The state to keep going with, whichever way the step went.
    pub fn state(&self) -> &RunState {
        match self {
            Self::Advanced(state) => state,
            Self::MissingTarget { state, .. } => state,
        }
    }

    pub fn into_state(self) -> RunState {
        match self {
            Self::Advanced(state) => state,
            Self::MissingTarget { state, .. } => state,
        }
    }

    pub fn advanced(&self) -> bool {
        matches!(self, Self::Advanced(_))
    }
}

/// Apply a bag of variable deltas to a run state.
///
/// Each effect key's new value is the prior value (0.0 if absent) plus
/// the delta; variables untouched by `effects` carry through. Position
/// and log are unchanged. Repeated application accumulates — this is
/// deliberately not idempotent for nonzero effects.
pub fn apply_effects(state: &RunState, effects: &Vars) -> RunState {
    RunState {
        node_id: state.node_id.clone(),
        vars: state.vars.plus(effects),
        log: state.log.clone(),
    }
}

/// Compute the next run state from a chosen edge.
///
/// The choice is assumed to belong to the node at `state.node_id`; that
/// is not verified here (the session shell resolves choices, and the
/// linter checks authored data).
pub fn step(state: &RunState, nodes: &[Node], choice: &Choice) -> StepOutcome {
    let Some(target) = nodes.iter().find(|n| n.id == choice.to) else {
        return StepOutcome::MissingTarget {
            state: state.clone(),
            to: choice.to.clone(),
        };
    };

    let mut next = apply_effects(state, &choice.effects);
    next.node_id = target.id.clone();
    next.log.push(format!("Choice: {}", choice.label));
    StepOutcome::Advanced(next)
}
