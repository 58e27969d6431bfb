use crate::artifacts::diff::merger::{
    DEFAULT_LOOKAHEAD, DEFAULT_SIMILARITY_THRESHOLD, MergedEdit, ModificationMerger,
};
use crate::artifacts::diff::myers::{DiffAlgorithm, Edit, MyersDiff};
use crate::artifacts::diff::normalize::unify_line_endings;
use crate::artifacts::lines::{DiffLine, IdGenerator, Line, LineStatus, StatusFilter};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Tuning knobs of the modification merger. Out-of-range values are accepted
/// and only shift the balance between modified and added/removed lines.
#[derive(Debug, Clone, Copy, PartialEq, new)]
pub struct DiffOptions {
    pub modified_similarity_threshold: f64,
    pub modified_lookahead: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions::new(DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_LOOKAHEAD)
    }
}

impl DiffOptions {
    pub fn merger(&self) -> ModificationMerger {
        ModificationMerger::new(self.modified_similarity_threshold, self.modified_lookahead)
    }
}

/// Result of one diff call: every row to render, and the baseline to pass to
/// the next call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineDiff {
    pub display_lines: Vec<DiffLine>,
    pub next_previous: Vec<Line>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DiffStats {
    pub unchanged: usize,
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl DiffStats {
    pub fn has_changes(&self) -> bool {
        self.added + self.removed + self.modified > 0
    }
}

impl std::fmt::Display for DiffStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} unchanged, {} added, {} removed, {} modified",
            self.unchanged, self.added, self.removed, self.modified
        )
    }
}

impl LineDiff {
    fn push(&mut self, row: DiffLine) {
        if !row.is_removed() {
            self.next_previous.push(row.to_line());
        }
        self.display_lines.push(row);
    }

    /// Narrows the rows to `filter`. The next baseline is kept whole, so the
    /// result can still be threaded into the next call.
    pub fn filtered(&self, filter: StatusFilter) -> LineDiff {
        LineDiff {
            display_lines: self
                .display_lines
                .iter()
                .filter(|row| filter.matches(row.status))
                .cloned()
                .collect(),
            next_previous: self.next_previous.clone(),
        }
    }

    pub fn stats(&self) -> DiffStats {
        self.display_lines
            .iter()
            .fold(DiffStats::default(), |mut stats, row| {
                match row.status {
                    LineStatus::Unchanged => stats.unchanged += 1,
                    LineStatus::Added => stats.added += 1,
                    LineStatus::Removed => stats.removed += 1,
                    LineStatus::Modified => stats.modified += 1,
                }
                stats
            })
    }
}

/// Splits raw text into display lines on unified newlines, without trimming.
/// Empty text has no lines; a trailing newline yields a trailing empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    unify_line_endings(text)
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// Joins baseline lines back into the text they were split from.
pub fn join_lines(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|line| line.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A run of consecutive deletes and inserts waiting for the next equal line.
#[derive(Debug, Default)]
struct PendingBlock {
    deletes: Vec<Line>,
    inserts: Vec<String>,
}

impl PendingBlock {
    fn is_empty(&self) -> bool {
        self.deletes.is_empty() && self.inserts.is_empty()
    }

    fn flush(&mut self, merger: &ModificationMerger, ids: &mut dyn IdGenerator, out: &mut LineDiff) {
        if self.is_empty() {
            return;
        }

        trace!(
            deletes = self.deletes.len(),
            inserts = self.inserts.len(),
            "merging non-equal block"
        );

        for edit in merger.merge(&self.deletes, &self.inserts) {
            let row = match edit {
                MergedEdit::Removed { id, content } => {
                    DiffLine::new(id, content, LineStatus::Removed)
                }
                MergedEdit::Added { content } => {
                    DiffLine::new(ids.next_id(), content, LineStatus::Added)
                }
                MergedEdit::Modified { id, content } => {
                    DiffLine::new(id, content, LineStatus::Modified)
                }
            };
            out.push(row);
        }

        self.deletes.clear();
        self.inserts.clear();
    }
}

/// Diffs the `previous` baseline against the full `next_text`.
///
/// The structural diff compares raw line content exactly; only the pairing of
/// deleted and inserted lines into modifications compares normalized text.
/// Unchanged and modified rows keep their baseline id, added rows get a fresh
/// one from `ids`, removed rows appear in `display_lines` only.
pub fn build_sql_line_diff(
    previous: &[Line],
    next_text: &str,
    options: &DiffOptions,
    ids: &mut dyn IdGenerator,
) -> LineDiff {
    let next_lines = split_lines(next_text);
    let old_contents = previous
        .iter()
        .map(|line| line.content.as_str())
        .collect::<Vec<_>>();
    let new_contents = next_lines.iter().map(String::as_str).collect::<Vec<_>>();

    let edits = MyersDiff::new(&old_contents, &new_contents).diff();

    let merger = options.merger();
    let mut pending = PendingBlock::default();
    let mut line_diff = LineDiff::default();

    for edit in edits {
        match edit {
            Edit::Delete { old_index } => pending.deletes.push(previous[old_index].clone()),
            Edit::Insert { new_index } => pending.inserts.push(next_lines[new_index].clone()),
            Edit::Equal {
                old_index,
                new_index,
            } => {
                pending.flush(&merger, ids, &mut line_diff);

                let id = previous
                    .get(old_index)
                    .map(|line| line.id.clone())
                    .unwrap_or_else(|| ids.next_id());
                line_diff.push(DiffLine::new(
                    id,
                    next_lines[new_index].clone(),
                    LineStatus::Unchanged,
                ));
            }
        }
    }
    pending.flush(&merger, ids, &mut line_diff);

    debug!(
        previous = previous.len(),
        next = next_lines.len(),
        stats = %line_diff.stats(),
        "built line diff"
    );

    line_diff
}
