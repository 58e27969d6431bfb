use crate::artifacts::diff::{DiffOptions, LineDiff};
use crate::artifacts::lines::{DiffLine, LineStatus, StatusFilter};
use colored::Colorize;
use derive_new::new;
use std::cell::{RefCell, RefMut};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct RenderSettings {
    pub show_ids: bool,
    pub filter: StatusFilter,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings::new(false, StatusFilter::all())
    }
}

/// Output side of the command line: where rows go and how they look.
pub struct Console {
    writer: RefCell<Box<dyn Write>>,
    options: DiffOptions,
    render: RenderSettings,
}

impl Console {
    pub fn new(writer: Box<dyn Write>, options: DiffOptions, render: RenderSettings) -> Self {
        Console {
            writer: RefCell::new(writer),
            options,
            render,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    pub fn format_row(&self, row: &DiffLine) -> String {
        let text = if self.render.show_ids {
            format!("{} [{}] {}", row.status.marker(), row.id, row.content)
        } else {
            row.to_string()
        };

        match row.status {
            LineStatus::Unchanged => text,
            LineStatus::Added => text.green().to_string(),
            LineStatus::Removed => text.red().to_string(),
            LineStatus::Modified => text.yellow().to_string(),
        }
    }

    /// Rows selected by `--only`; stats are always taken from the full diff.
    pub fn visible(&self, line_diff: &LineDiff) -> LineDiff {
        line_diff.filtered(self.render.filter)
    }

    pub fn print_line_diff(&self, line_diff: &LineDiff) -> anyhow::Result<()> {
        for row in &self.visible(line_diff).display_lines {
            writeln!(self.writer(), "{}", self.format_row(row))?;
        }

        writeln!(self.writer(), "{}", line_diff.stats().to_string().dimmed())?;

        Ok(())
    }
}
