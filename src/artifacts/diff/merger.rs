//! Pairing of deleted and inserted lines into modifications
//!
//! A maximal run of non-equal edits is split into its deleted lines (which
//! carry their baseline id) and its inserted contents. The merger walks both
//! with two cursors and greedily decides, at every step, whether the current
//! pair is one edited line or whether one side should be emitted on its own:
//!
//! 1. If the pair scores at least the threshold it becomes `Modified`.
//! 2. Otherwise the best insert for the current delete, and the best delete for
//!    the current insert, are searched within the lookahead window.
//! 3. If both searches point back at the current pair and the score clears the
//!    threshold, the pair becomes `Modified`.
//! 4. Otherwise the side with the weaker future match is emitted alone: the
//!    insert as `Added` when the delete has a stronger match further on,
//!    else the delete as `Removed`.
//!
//! The alignment is local and order preserving, not a global optimum.
//!
//! ## Debugging
//!
//! Every pairing decision is traced when built with the `debug_merge` feature
//! (`cargo build --features debug_merge`).

use crate::artifacts::diff::similarity::similarity;
use crate::artifacts::lines::{Line, LineId};
use derive_new::new;

macro_rules! merge_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_merge")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.62;
pub const DEFAULT_LOOKAHEAD: usize = 3;

/// Output of merging one non-equal block, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergedEdit {
    Removed { id: LineId, content: String },
    Added { content: String },
    Modified { id: LineId, content: String },
}

#[derive(Debug, Clone, Copy, PartialEq, new)]
pub struct ModificationMerger {
    threshold: f64,
    lookahead: usize,
}

impl Default for ModificationMerger {
    fn default() -> Self {
        ModificationMerger::new(DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_LOOKAHEAD)
    }
}

impl ModificationMerger {
    pub fn merge(&self, deletes: &[Line], inserts: &[String]) -> Vec<MergedEdit> {
        let mut merged = Vec::with_capacity(deletes.len().max(inserts.len()));
        let (mut i, mut j) = (0, 0);

        while i < deletes.len() && j < inserts.len() {
            let (deleted, inserted) = (&deletes[i], &inserts[j]);
            let direct = similarity(&deleted.content, inserted);

            if direct >= self.threshold {
                merge_trace!(i, j, score = direct, "paired directly");
                merged.push(Self::modified(deleted, inserted));
                i += 1;
                j += 1;
                continue;
            }

            let (best_j, best_del_score) =
                self.best_match(&deleted.content, inserts.iter().map(String::as_str), j, direct);
            let (best_i, best_ins_score) = self.best_match(
                inserted,
                deletes.iter().map(|line| line.content.as_str()),
                i,
                direct,
            );

            if best_j == j && best_i == i && best_del_score >= self.threshold {
                merge_trace!(i, j, score = best_del_score, "paired as mutual best");
                merged.push(Self::modified(deleted, inserted));
                i += 1;
                j += 1;
            } else if best_del_score > best_ins_score {
                merge_trace!(
                    i,
                    j,
                    best_j,
                    best_del_score,
                    best_ins_score,
                    "insert emitted, delete deferred"
                );
                merged.push(MergedEdit::Added {
                    content: inserted.clone(),
                });
                j += 1;
            } else {
                merge_trace!(
                    i,
                    j,
                    best_i,
                    best_del_score,
                    best_ins_score,
                    "delete emitted"
                );
                merged.push(MergedEdit::Removed {
                    id: deleted.id.clone(),
                    content: deleted.content.clone(),
                });
                i += 1;
            }
        }

        merged.extend(deletes[i..].iter().map(|line| MergedEdit::Removed {
            id: line.id.clone(),
            content: line.content.clone(),
        }));
        merged.extend(inserts[j..].iter().map(|content| MergedEdit::Added {
            content: content.clone(),
        }));

        merged
    }

    /// Best scoring candidate in `[start, start + lookahead]`; the first one
    /// wins ties. `start_score` is the already known score of `start`.
    fn best_match<'c>(
        &self,
        target: &str,
        candidates: impl Iterator<Item = &'c str>,
        start: usize,
        start_score: f64,
    ) -> (usize, f64) {
        candidates
            .enumerate()
            .skip(start + 1)
            .take(self.lookahead)
            .fold((start, start_score), |(best, best_score), (index, candidate)| {
                let score = similarity(target, candidate);
                if score > best_score {
                    (index, score)
                } else {
                    (best, best_score)
                }
            })
    }

    fn modified(deleted: &Line, inserted: &str) -> MergedEdit {
        MergedEdit::Modified {
            id: deleted.id.clone(),
            content: inserted.to_string(),
        }
    }
}
