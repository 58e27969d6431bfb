use crate::artifacts::diff::line_diff::split_lines;
use crate::artifacts::lines::line_id::{IdGenerator, LineId};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One line of an accepted baseline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Line {
    pub id: LineId,
    pub content: String,
}

impl Line {
    /// Builds a fresh baseline from raw text, minting one id per line.
    pub fn from_text(text: &str, ids: &mut dyn IdGenerator) -> Vec<Line> {
        split_lines(text)
            .into_iter()
            .map(|content| Line::new(ids.next_id(), content))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStatus {
    Unchanged,
    Added,
    Removed,
    Modified,
}

impl LineStatus {
    pub fn marker(&self) -> char {
        match self {
            LineStatus::Unchanged => ' ',
            LineStatus::Added => '+',
            LineStatus::Removed => '-',
            LineStatus::Modified => '~',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LineStatus::Unchanged => "unchanged",
            LineStatus::Added => "added",
            LineStatus::Removed => "removed",
            LineStatus::Modified => "modified",
        }
    }
}

impl std::fmt::Display for LineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One render-ready row of a diff, removed rows included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct DiffLine {
    pub id: LineId,
    pub content: String,
    pub status: LineStatus,
}

impl DiffLine {
    pub fn is_removed(&self) -> bool {
        self.status == LineStatus::Removed
    }

    pub fn to_line(&self) -> Line {
        Line::new(self.id.clone(), self.content.clone())
    }
}

impl std::fmt::Display for DiffLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status.marker(), self.content)
    }
}
