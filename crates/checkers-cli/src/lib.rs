//! Terminal front-end for the checkers engine.
//!
//! # Modules
//!
//! - [`render`] - text rendering of boards and move lists
//! - [`session`] - command parsing and the interactive game session

pub mod render;
pub mod session;
