//! Behavior-bearing components — the pure stepper and the session shell.

pub mod session;
pub mod stepper;
