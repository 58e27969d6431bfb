//! Incremental line diff for re-streamed SQL text
//!
//! Each call diffs the previous rendered state against the full new text and
//! returns render-ready rows (`unchanged`, `added`, `removed`, `modified`)
//! with stable ids, plus the baseline for the next call.
//!
//! ```
//! use sqldiff::artifacts::diff::{DiffOptions, build_sql_line_diff};
//! use sqldiff::artifacts::lines::{LineStatus, SequentialIdGenerator};
//!
//! let mut ids = SequentialIdGenerator::new("line-".to_string());
//! let options = DiffOptions::default();
//!
//! let first = build_sql_line_diff(&[], "SELECT a\nFROM t WHERE x = 1", &options, &mut ids);
//! let second = build_sql_line_diff(&first.next_previous, "SELECT a\nFROM t WHERE x = 2", &options, &mut ids);
//!
//! assert_eq!(second.display_lines[1].status, LineStatus::Modified);
//! assert_eq!(second.display_lines[1].id, first.display_lines[1].id);
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
