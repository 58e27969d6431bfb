use crate::artifacts::lines::line::LineStatus;
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct StatusFilter: u32 {
        const UNCHANGED = 0b0001;
        const ADDED = 0b0010;
        const REMOVED = 0b0100;
        const MODIFIED = 0b1000;
    }
}

const STATUS_ALIASES: phf::Map<&'static str, LineStatus> = phf::phf_map! {
    "unchanged" => LineStatus::Unchanged,
    "same" => LineStatus::Unchanged,
    "=" => LineStatus::Unchanged,
    "added" => LineStatus::Added,
    "add" => LineStatus::Added,
    "+" => LineStatus::Added,
    "removed" => LineStatus::Removed,
    "remove" => LineStatus::Removed,
    "deleted" => LineStatus::Removed,
    "-" => LineStatus::Removed,
    "modified" => LineStatus::Modified,
    "mod" => LineStatus::Modified,
    "changed" => LineStatus::Modified,
    "~" => LineStatus::Modified,
};

impl StatusFilter {
    /// Parses a comma-separated list of status names or aliases.
    pub fn try_parse(s: &str) -> anyhow::Result<Self> {
        let mut filter = Self::empty();

        for name in s.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            let status = STATUS_ALIASES
                .get(name.to_ascii_lowercase().as_str())
                .ok_or_else(|| anyhow::anyhow!("unknown line status: {name}"))?;
            filter |= Self::from_status(*status);
        }

        if filter.is_empty() {
            anyhow::bail!("status filter cannot be empty");
        }

        Ok(filter)
    }

    pub fn from_status(status: LineStatus) -> Self {
        match status {
            LineStatus::Unchanged => Self::UNCHANGED,
            LineStatus::Added => Self::ADDED,
            LineStatus::Removed => Self::REMOVED,
            LineStatus::Modified => Self::MODIFIED,
        }
    }

    pub fn matches(&self, status: LineStatus) -> bool {
        self.contains(Self::from_status(status))
    }

    /// Only the rows that differ from the baseline.
    pub fn changes() -> Self {
        Self::ADDED | Self::REMOVED | Self::MODIFIED
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}
