//! Stateful collaborators around the diff engine
//!
//! - `session`: one streamed text, its baseline and its id generator
//! - `console`: command line output, rendering settings and diff options

pub mod console;
pub mod session;
