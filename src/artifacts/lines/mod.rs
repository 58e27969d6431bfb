//! Line model shared by the diff engine and its consumers
//!
//! - `line`: baseline lines, rendered diff rows and their status
//! - `line_id`: stable line identity and pluggable id generators
//! - `status_filter`: status selection for printing rows

pub mod line;
pub mod line_id;
pub mod status_filter;

pub use line::{DiffLine, Line, LineStatus};
pub use line_id::{IdGenerator, LineId, SequentialIdGenerator, TimestampIdGenerator};
pub use status_filter::StatusFilter;
