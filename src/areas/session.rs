use crate::artifacts::diff::{DiffOptions, LineDiff, build_sql_line_diff};
use crate::artifacts::lines::{IdGenerator, Line, TimestampIdGenerator};

/// One stream of successive versions of a text, e.g. one panel showing a
/// statement while it is being generated.
///
/// The session owns its baseline and id generator, so calls are applied in
/// order through `&mut self` and separate sessions share no state.
pub struct DiffSession {
    options: DiffOptions,
    baseline: Vec<Line>,
    ids: Box<dyn IdGenerator + Send>,
}

impl DiffSession {
    pub fn new(options: DiffOptions) -> Self {
        Self::with_generator(options, Box::new(TimestampIdGenerator::new()))
    }

    pub fn with_generator(options: DiffOptions, ids: Box<dyn IdGenerator + Send>) -> Self {
        DiffSession {
            options,
            baseline: Vec::new(),
            ids,
        }
    }

    /// Resumes a stream from a persisted baseline.
    pub fn from_baseline(
        options: DiffOptions,
        baseline: Vec<Line>,
        ids: Box<dyn IdGenerator + Send>,
    ) -> Self {
        DiffSession {
            options,
            baseline,
            ids,
        }
    }

    pub fn baseline(&self) -> &[Line] {
        &self.baseline
    }

    /// Diffs the current baseline against the full `next_text` and makes the
    /// result's next baseline current.
    pub fn apply(&mut self, next_text: &str) -> LineDiff {
        let line_diff =
            build_sql_line_diff(&self.baseline, next_text, &self.options, self.ids.as_mut());
        self.baseline = line_diff.next_previous.clone();
        line_diff
    }

    /// Forgets the baseline; the next call reports every line as added.
    pub fn reset(&mut self) {
        self.baseline.clear();
    }
}

impl Default for DiffSession {
    fn default() -> Self {
        Self::new(DiffOptions::default())
    }
}
