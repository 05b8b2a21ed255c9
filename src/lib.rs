//! Storylens — a branching-story runtime with switchable narrative lenses.
//!
//! Walks a reader through a directed graph of story nodes, applying numeric
//! effects to a variable bag as choices are taken and rendering each node's
//! text through one of several interchangeable lenses. The transition engine
//! is pure: every step produces a fresh run state from the previous one.

pub mod core;
pub mod schema;
