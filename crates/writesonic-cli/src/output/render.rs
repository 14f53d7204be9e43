use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use writesonic::{Generated, LandingPage};

use super::OutputMode;

/// Values that count as "not set" in key/value output.
const PLACEHOLDER: &str = "-";

/// Gap between the label column and the value column.
const COLUMN_GAP: usize = 2;

/// Writes results to any output stream.
pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render a decoded result set in the given mode.
    pub fn render(&mut self, generated: &Generated, mode: OutputMode) -> Result<()> {
        match (mode, generated) {
            (OutputMode::Json { pretty }, _) => self.render_json(generated, pretty),
            (OutputMode::Text, Generated::Text(items)) => {
                let texts: Vec<&str> = items.iter().map(|r| r.text.as_str()).collect();
                self.render_text(&texts)
            }
            (OutputMode::Text, Generated::LandingPages(pages)) => self.render_landing_pages(pages),
        }
    }

    /// Serialize `value` as JSON followed by a newline.
    pub fn render_json<T: Serialize + ?Sized>(&mut self, value: &T, pretty: bool) -> Result<()> {
        if pretty {
            serde_json::to_writer_pretty(&mut self.out, value)?;
        } else {
            serde_json::to_writer(&mut self.out, value)?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    /// Print each text; several texts get numbered headers and blank
    /// separators, a single text is printed bare.
    pub fn render_text<S: AsRef<str>>(&mut self, items: &[S]) -> Result<()> {
        let numbered = items.len() > 1;

        for (i, text) in items.iter().enumerate() {
            if numbered {
                writeln!(self.out, "--- Result {} ---", i + 1)?;
            }
            writeln!(self.out, "{}", text.as_ref())?;
            if i + 1 < items.len() {
                writeln!(self.out)?;
            }
        }

        self.out.flush()?;
        Ok(())
    }

    /// Print label/value rows in two aligned columns, skipping empty and
    /// placeholder values.
    pub fn render_key_value(&mut self, rows: &[(&str, &str)]) -> Result<()> {
        let visible: Vec<&(&str, &str)> = rows
            .iter()
            .filter(|(_, value)| !value.is_empty() && *value != PLACEHOLDER)
            .collect();

        let width = visible
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0)
            + COLUMN_GAP;

        for (label, value) in visible {
            writeln!(self.out, "{label:<width$}{value}")?;
        }

        self.out.flush()?;
        Ok(())
    }

    /// Print landing pages as key/value blocks.
    pub fn render_landing_pages(&mut self, pages: &[LandingPage]) -> Result<()> {
        let numbered = pages.len() > 1;

        for (i, page) in pages.iter().enumerate() {
            if numbered {
                writeln!(self.out, "--- Result {} ---", i + 1)?;
                writeln!(self.out)?;
            }
            self.render_key_value(&page.rows())?;
            if i + 1 < pages.len() {
                writeln!(self.out)?;
            }
        }

        self.out.flush()?;
        Ok(())
    }
}
