//! Core utilities and shared types
//!
//! This module contains shared utilities used by the command line surface:
//! the pager adapter and the logging setup.

pub mod logging;

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this wrapper
/// adapts it to be usable wherever the console expects a writer. Commands that
/// replay long streams write into it, and the pager is shown once they finish.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writeln!(writer, "+ SELECT id")?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Output is paged only on an interactive stdout, unless `NO_PAGER` is set.
pub fn should_page() -> bool {
    std::env::var_os("NO_PAGER").is_none() && io::stdout().is_terminal()
}
