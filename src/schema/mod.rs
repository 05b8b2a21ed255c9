//! Story data contracts — vars, lenses, nodes, stories, and run state.

pub mod lens;
pub mod node;
pub mod run;
pub mod story;
pub mod vars;
