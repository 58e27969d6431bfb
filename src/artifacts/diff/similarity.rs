//! Line similarity scoring
//!
//! A line pair scores the maximum of two measures: the Jaccard index of their
//! token sets, which rewards reordered or rephrased clauses, and the
//! normalized Levenshtein ratio of their normalized text, which rewards small
//! literal edits such as a changed constant.

use crate::artifacts::diff::normalize::normalize;
use crate::artifacts::diff::tokenize::tokenize;
use std::collections::HashSet;

/// Lines longer than this (in characters, after normalization) are scored by
/// token overlap alone.
pub const MAX_EDIT_DISTANCE_LEN: usize = 240;

/// Similarity of two lines in `[0, 1]`; exactly 1 when their normalized forms
/// are equal.
pub fn similarity(a: &str, b: &str) -> f64 {
    let (norm_a, norm_b) = (normalize(a), normalize(b));
    if norm_a == norm_b {
        return 1.0;
    }

    let jaccard = jaccard_similarity(&tokenize(&norm_a), &tokenize(&norm_b));

    let max_len = norm_a.chars().count().max(norm_b.chars().count());
    if max_len > MAX_EDIT_DISTANCE_LEN {
        return jaccard;
    }

    jaccard.max(levenshtein_ratio(&norm_a, &norm_b))
}

/// `|A ∩ B| / |A ∪ B|` over token sets; 1 when both are empty.
pub fn jaccard_similarity<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    let set_a = a.iter().map(AsRef::as_ref).collect::<HashSet<&str>>();
    let set_b = b.iter().map(AsRef::as_ref).collect::<HashSet<&str>>();

    match (set_a.is_empty(), set_b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        _ => {}
    }

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.len() + set_b.len() - intersection;

    intersection as f64 / union as f64
}

/// `1 - levenshtein(a, b) / max(len(a), len(b))`, in characters.
pub fn levenshtein_ratio(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    1.0 - levenshtein_distance(a, b) as f64 / max_len as f64
}

/// Classic edit distance, keeping two rolling rows sized by the shorter input.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut prev = (0..=short.len()).collect::<Vec<usize>>();
    let mut curr = vec![0; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let substitution = prev[j] + usize::from(lc != sc);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}
