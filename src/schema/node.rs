use serde::{Deserialize, Serialize};
use std::fmt;

use super::lens::LensText;
use super::vars::Vars;

/// Newtype wrapper for node IDs. Unique across a whole story.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

/// Newtype wrapper for choice IDs. Unique only within the owning node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ChoiceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&str> for ChoiceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An outgoing edge of a node: a labeled transition to a target node,
/// carrying the variable deltas applied when it is taken.
///
/// `to` should name an existing node, but the engine tolerates a
/// dangling target (see the stepper's missing-target outcome).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: ChoiceId,
    pub label: String,
    pub to: NodeId,
    #[serde(default)]
    pub effects: Vars,
}

/// A narrative unit: lens-keyed text plus an ordered choice list.
/// Choice order is presentation order, nothing more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub title: String,
    pub text: LensText,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl Node {
    /// Look up an outgoing choice by id.
    pub fn choice(&self, id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id.as_str() == id)
    }

    /// A node with no choices is a dead end — no step can leave it.
    pub fn is_dead_end(&self) -> bool {
        self.choices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::lens::LensText;

    fn make_node() -> Node {
        Node {
            id: NodeId::from("start"),
            title: "The Door".to_string(),
            text: LensText {
                base: "A door stands ajar.".to_string(),
                narrator: None,
                observer: None,
            },
            choices: vec![
                Choice {
                    id: ChoiceId::from("c1"),
                    label: "Go left".to_string(),
                    to: NodeId::from("left"),
                    effects: Vars::from_iter([("mut", 2.0)]),
                },
                Choice {
                    id: ChoiceId::from("c2"),
                    label: "Wait".to_string(),
                    to: NodeId::from("start"),
                    effects: Vars::new(),
                },
            ],
        }
    }

    #[test]
    fn choice_lookup_by_id() {
        let node = make_node();
        assert_eq!(node.choice("c1").unwrap().label, "Go left");
        assert!(node.choice("c9").is_none());
    }

    #[test]
    fn dead_end_detection() {
        let mut node = make_node();
        assert!(!node.is_dead_end());
        node.choices.clear();
        assert!(node.is_dead_end());
    }

    #[test]
    fn choice_effects_default_empty_in_ron() {
        let choice: Choice =
            ron::from_str(r#"(id: "c1", label: "Go", to: "left")"#).unwrap();
        assert!(choice.effects.is_empty());
        assert_eq!(choice.to, NodeId::from("left"));
    }

    #[test]
    fn node_choices_default_empty_in_ron() {
        let node: Node =
            ron::from_str(r#"(id: "end", title: "End", text: (base: "Fin."))"#).unwrap();
        assert!(node.is_dead_end());
    }
}
