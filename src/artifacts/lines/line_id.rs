use chrono::Utc;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static GENERATOR_INSTANCES: AtomicU64 = AtomicU64::new(0);

/// Opaque, stable identity of one rendered line.
///
/// Ids survive across diff calls for lines judged unchanged or modified in
/// place, so a renderer can key its rows by them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LineId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LineId {
    fn from(value: &str) -> Self {
        LineId(value.to_string())
    }
}

impl From<String> for LineId {
    fn from(value: String) -> Self {
        LineId(value)
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of fresh ids for added and modified lines.
///
/// Generators are owned by the caller (usually a session) and passed into
/// every diff call, so independent sessions never share a counter.
pub trait IdGenerator {
    fn next_id(&mut self) -> LineId;
}

impl<F> IdGenerator for F
where
    F: FnMut() -> LineId,
{
    fn next_id(&mut self) -> LineId {
        self()
    }
}

/// Default generator: the creation timestamp, an instance number and a
/// monotonically increasing counter.
///
/// The instance number separates generators created within the same
/// microsecond of one process, the timestamp separates runs.
#[derive(Debug, Clone)]
pub struct TimestampIdGenerator {
    epoch: i64,
    instance: u64,
    counter: u64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        TimestampIdGenerator {
            epoch: Utc::now().timestamp_micros(),
            instance: GENERATOR_INSTANCES.fetch_add(1, Ordering::Relaxed),
            counter: 0,
        }
    }
}

impl Default for TimestampIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self) -> LineId {
        self.counter += 1;
        LineId(format!(
            "sql-line-{:x}-{:x}-{}",
            self.epoch, self.instance, self.counter
        ))
    }
}

/// Deterministic generator producing `<prefix>1`, `<prefix>2`, ...
#[derive(Debug, Clone, new)]
pub struct SequentialIdGenerator {
    prefix: String,
    #[new(default)]
    counter: u64,
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> LineId {
        self.counter += 1;
        LineId(format!("{}{}", self.prefix, self.counter))
    }
}
