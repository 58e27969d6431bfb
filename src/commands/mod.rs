//! Command implementations
//!
//! Each command is an `impl Console` block:
//!
//! - `diff`: one diff call between a baseline and the next full text
//! - `replay`: successive versions of a text applied through one session

pub mod diff;
pub mod replay;
