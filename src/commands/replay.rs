use crate::areas::console::Console;
use crate::areas::session::DiffSession;
use crate::commands::diff::read_text;
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

impl Console {
    /// Applies each file as the next full version of one streamed text.
    pub fn replay(&self, versions: &[PathBuf]) -> anyhow::Result<()> {
        if versions.is_empty() {
            anyhow::bail!("replay needs at least one version");
        }

        let mut session = DiffSession::new(*self.options());

        for (step, path) in versions.iter().enumerate() {
            let text = read_text(path)?;
            let line_diff = session.apply(&text);
            debug!(step = step + 1, path = %path.display(), "replayed version");

            writeln!(
                self.writer(),
                "{}",
                format!("@@ step {}: {} @@", step + 1, path.display()).cyan()
            )?;
            self.print_line_diff(&line_diff)?;
        }

        Ok(())
    }
}
