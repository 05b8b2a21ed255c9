//! Session — the imperative shell around the pure stepper.
//!
//! Owns a story plus the current run state, resolves choices by id
//! against the current node, and replaces its state with each step's
//! result. The core stays pure; all the lookup plumbing lives here.

use crate::core::stepper::{step, StepOutcome};
use crate::schema::lens::Lens;
use crate::schema::node::{Choice, Node, NodeId};
use crate::schema::run::RunState;
use crate::schema::story::Story;
use crate::schema::vars::Vars;

/// A single reader's walk through one story.
#[derive(Debug, Clone)]
pub struct Session {
    story: Story,
    baseline: Vars,
    state: RunState,
}

impl Session {
    /// Open a session at the story's start node with the engine baseline.
    pub fn new(story: Story) -> Self {
        Self::with_baseline(story, Vars::baseline())
    }

    /// Open a session with a story-specific baseline variable bag.
    pub fn with_baseline(story: Story, baseline: Vars) -> Self {
        let state = RunState::with_baseline(story.start.clone(), baseline.clone());
        Self {
            story,
            baseline,
            state,
        }
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// The node the reader is currently at.
    pub fn current_node(&self) -> Result<&Node, SessionError> {
        self.story
            .node(&self.state.node_id)
            .ok_or_else(|| SessionError::NodeNotFound(self.state.node_id.clone()))
    }

    /// The current node's outgoing choices, in presentation order.
    pub fn choices(&self) -> Result<&[Choice], SessionError> {
        Ok(&self.current_node()?.choices)
    }

    /// The current node's text through a lens, falling back to base.
    pub fn text(&self, lens: Lens) -> Result<&str, SessionError> {
        Ok(self.current_node()?.text.get(lens))
    }

    /// Take a choice on the current node by id.
    ///
    /// Id-lookup misses are shell errors; a choice whose target node is
    /// missing is not — that surfaces as `StepOutcome::MissingTarget`
    /// and leaves the session where it was.
    pub fn choose(&mut self, choice_id: &str) -> Result<StepOutcome, SessionError> {
        let node = self
            .story
            .node(&self.state.node_id)
            .ok_or_else(|| SessionError::NodeNotFound(self.state.node_id.clone()))?;
        let choice = node.choice(choice_id).ok_or_else(|| SessionError::ChoiceNotFound {
            node: node.id.clone(),
            choice: choice_id.to_string(),
        })?;

        let outcome = step(&self.state, &self.story.nodes, choice);
        if let StepOutcome::Advanced(next) = &outcome {
            self.state = next.clone();
        }
        Ok(outcome)
    }

    /// Back to the start node with a fresh state from the stored baseline.
    pub fn restart(&mut self) {
        self.state = RunState::with_baseline(self.story.start.clone(), self.baseline.clone());
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
    #[error("choice '{choice}' not found on node '{node}'")]
    ChoiceNotFound { node: NodeId, choice: String },
}
