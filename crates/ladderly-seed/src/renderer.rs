//! Terminal rendering of markdown output via termimad, with a plain text
//! fallback for `--no-color`.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_fg(Color::DarkGrey);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();

        if !self.rich_enabled {
            stdout.write_all(markdown.as_bytes())?;
            return Ok(());
        }

        for line in markdown.lines() {
            // Headers keep their hashes so nesting stays visible
            if line.starts_with('#') {
                writeln!(stdout, "\x1b[36m{line}\x1b[0m")?;
            } else {
                writeln!(stdout, "{}", self.skin.inline(line))?;
            }
        }

        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("# Seed report\n").is_ok());
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
