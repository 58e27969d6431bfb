use crate::areas::console::Console;
use crate::artifacts::diff::build_sql_line_diff;
use crate::artifacts::lines::{IdGenerator, Line, TimestampIdGenerator};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BaselineSource {
    #[default]
    Empty,
    /// A baseline saved by a previous run, ids included.
    Json(PathBuf),
    /// Plain text; every line gets a fresh id.
    Text(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Console {
    pub fn diff(
        &self,
        next: &Path,
        baseline: &BaselineSource,
        save_baseline: Option<&Path>,
        format: OutputFormat,
    ) -> anyhow::Result<()> {
        let mut ids = TimestampIdGenerator::new();
        let previous = load_baseline(baseline, &mut ids)?;
        let next_text = read_text(next)?;

        let line_diff = build_sql_line_diff(&previous, &next_text, self.options(), &mut ids);

        match format {
            OutputFormat::Text => self.print_line_diff(&line_diff)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *self.writer(), &self.visible(&line_diff))
                    .context("failed to serialize line diff")?;
                writeln!(self.writer())?;
            }
        }

        if let Some(path) = save_baseline {
            save_baseline_to(path, &line_diff.next_previous)?;
            info!(path = %path.display(), lines = line_diff.next_previous.len(), "saved baseline");
        }

        Ok(())
    }
}

pub fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn load_baseline(source: &BaselineSource, ids: &mut dyn IdGenerator) -> anyhow::Result<Vec<Line>> {
    match source {
        BaselineSource::Empty => Ok(Vec::new()),
        BaselineSource::Text(path) => Ok(Line::from_text(&read_text(path)?, ids)),
        BaselineSource::Json(path) => {
            let raw = read_text(path)?;
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid baseline in {}", path.display()))
        }
    }
}

pub fn save_baseline_to(path: &Path, baseline: &[Line]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(baseline).context("failed to serialize baseline")?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}
