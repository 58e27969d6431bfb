use regex::Regex;
use std::sync::LazyLock;

static LINE_ENDINGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n?").expect("line ending pattern is valid"));
static BLANKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("blank run pattern is valid"));

/// Unifies line endings to `\n`.
pub fn unify_line_endings(s: &str) -> String {
    LINE_ENDINGS.replace_all(s, "\n").into_owned()
}

/// Canonical form of a line used for comparisons only; displayed content is
/// never normalized.
pub fn normalize(s: &str) -> String {
    let unified = LINE_ENDINGS.replace_all(s, "\n");
    BLANKS.replace_all(&unified, " ").trim().to_string()
}
