//! Word-frequency bar charts.

use std::io::{self, IsTerminal, Write};

use lexprint_types::{FrequencyTable, RenderError};
use tracing::debug;

const DEFAULT_WIDTH: usize = 50;
const DEFAULT_BARS: usize = 10;

/// Draws a frequency table.
pub trait Visualizer {
    /// Plots the most frequent entries of `freq` under `title`.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] when no output device is usable, the table
    /// is empty, or writing fails. Callers treat this as non-fatal.
    fn plot(&self, freq: &FrequencyTable, title: &str) -> Result<(), RenderError>;
}

/// Horizontal bar chart drawn with text characters on stdout.
///
/// ```text
/// Word Frequency
/// ==============
/// the   | ################################################## 3
/// cat   | ################ 1
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TerminalBarChart {
    width: usize,
    bars: usize,
    force: bool,
}

impl Default for TerminalBarChart {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            bars: DEFAULT_BARS,
            force: false,
        }
    }
}

impl TerminalBarChart {
    /// Creates a chart with a 50-column bar area showing the top 10 words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the length of the longest bar.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// Draws even when stdout is not a terminal.
    #[must_use]
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Writes the chart to `out`.
    pub fn draw<W: Write>(
        &self,
        out: &mut W,
        freq: &FrequencyTable,
        title: &str,
    ) -> Result<(), RenderError> {
        let top = top_entries(freq, self.bars);
        let Some(&(_, max)) = top.first() else {
            return Err(RenderError::NothingToPlot);
        };

        let label = top.iter().map(|(w, _)| w.chars().count()).max().unwrap_or(0);

        writeln!(out, "{title}")?;
        writeln!(out, "{}", "=".repeat(title.chars().count()))?;
        for (word, count) in &top {
            let len = (*count as usize * self.width / max as usize).max(1);
            writeln!(out, "{word:<label$} | {} {count}", "#".repeat(len))?;
        }
        out.flush()?;

        debug!(bars = top.len(), "drew frequency chart");
        Ok(())
    }
}

impl Visualizer for TerminalBarChart {
    fn plot(&self, freq: &FrequencyTable, title: &str) -> Result<(), RenderError> {
        let stdout = io::stdout();
        if !self.force && !stdout.is_terminal() {
            return Err(RenderError::Unavailable("stdout is not a terminal"));
        }
        let mut lock = stdout.lock();
        self.draw(&mut lock, freq, title)
    }
}

/// The `n` highest counts, ties in table order.
fn top_entries(freq: &FrequencyTable, n: usize) -> Vec<(&str, u32)> {
    let mut ranked: Vec<(&str, u32)> = freq.iter().map(|(w, &c)| (w.as_str(), c)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}
