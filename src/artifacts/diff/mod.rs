//! Incremental line diff engine
//!
//! This module implements the pieces of the line diff, leaf first:
//!
//! - `normalize`: canonical line text used for comparisons
//! - `tokenize`: comparison tokens with SQL punctuation isolated
//! - `similarity`: Jaccard / Levenshtein line similarity
//! - `myers`: Myers' shortest edit script over exact line equality
//! - `merger`: pairing of deleted and inserted lines into modifications
//! - `line_diff`: the orchestrator producing display rows and the next baseline
//!
//! Every operation here is a pure function of its inputs; the only state
//! carried between calls is the baseline the caller threads through.

pub mod line_diff;
pub mod merger;
pub mod myers;
pub mod normalize;
pub mod similarity;
pub mod tokenize;

pub use line_diff::{DiffOptions, DiffStats, LineDiff, build_sql_line_diff, join_lines, split_lines};
