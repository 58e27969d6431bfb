//! Data structures and algorithms
//!
//! - `core`: Shared utilities (pager wrapper, logging setup)
//! - `diff`: The incremental line diff engine (Myers' diff, modification merging)
//! - `lines`: Lines, diff rows, stable ids and status filters

pub mod core;
pub mod diff;
pub mod lines;
