use crate::artifacts::diff::normalize::normalize;
use regex::Regex;
use std::sync::LazyLock;

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[(),=<>!+\-*/]").expect("punctuation pattern is valid"));

/// Splits a line into comparison tokens, isolating SQL punctuation so that
/// `a=b` and `a = b` produce the same tokens.
pub fn tokenize(s: &str) -> Vec<String> {
    let normalized = normalize(s);
    if normalized.is_empty() {
        return Vec::new();
    }

    PUNCTUATION
        .replace_all(&normalized, " $0 ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
