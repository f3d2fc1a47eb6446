//! lexprint - forensic stylometric analysis of a single document.
//!
//! ```bash
//! lexprint paper.pdf
//! lexprint notes.txt --format json --no-plot
//! RUST_LOG=lexprint_core=debug lexprint essay.txt
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use lexprint_core::analyzer::normalize_document;
use lexprint_core::loader::{AutoLoader, DocumentLoader};
use lexprint_core::report::{JsonReport, ReportRenderer, TerminalBarChart, TextReport, Visualizer};
use lexprint_core::stylometry::StylometricAnalyzer;
use lexprint_core::types::FrequencyTable;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Extract stylometric features from a document.
#[derive(Debug, Parser)]
#[command(name = "lexprint", version, about)]
struct Args {
    /// Document to analyze (.pdf is extracted with pdftotext, anything else is read as text).
    path: PathBuf,

    /// Title for the frequency chart.
    #[arg(long, default_value = "Word Frequency")]
    title: String,

    /// Report format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Skip the frequency chart.
    #[arg(long)]
    no_plot: bool,

    /// Draw the chart even when stdout is not a terminal.
    #[arg(long, conflicts_with = "no_plot")]
    force_plot: bool,

    /// More logging (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "lexprint=warn,lexprint_core=warn",
        1 => "lexprint=info,lexprint_core=info",
        2 => "lexprint=debug,lexprint_core=debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Writes the report lines, then draws the chart if one is given.
///
/// Chart failures are logged and never fail the run.
fn emit<W: Write>(
    out: &mut W,
    lines: &[String],
    chart: Option<&dyn Visualizer>,
    freq: &FrequencyTable,
    title: &str,
) -> anyhow::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    if let Some(chart) = chart {
        if let Err(e) = chart.plot(freq, title) {
            warn!(error = %e, "skipping frequency chart");
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let raw = AutoLoader::new()
        .load(&args.path)
        .with_context(|| format!("failed to load {}", args.path.display()))?;
    info!(bytes = raw.len(), format = %raw.format(), "document loaded");

    let analyzer = StylometricAnalyzer::new().context("failed to initialize analyzer")?;
    let report = analyzer
        .analyze(&normalize_document(raw.as_str()))
        .with_context(|| format!("failed to analyze {}", args.path.display()))?;

    let lines = match args.format {
        Format::Text => TextReport::new()
            .with_title(args.path.display().to_string())
            .render(&report),
        Format::Json => JsonReport.render(&report),
    };

    let bar_chart = TerminalBarChart::new().force(args.force_plot);
    // Keep JSON output parseable.
    let chart = (!args.no_plot && args.format == Format::Text)
        .then_some(&bar_chart as &dyn Visualizer);

    emit(&mut io::stdout(), &lines, chart, &report.word_freq, &args.title)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use lexprint_core::types::RenderError;
    use std::cell::RefCell;

    struct HeadlessChart;

    impl Visualizer for HeadlessChart {
        fn plot(&self, _freq: &FrequencyTable, _title: &str) -> Result<(), RenderError> {
            Err(RenderError::Unavailable("no display"))
        }
    }

    #[derive(Default)]
    struct RecordingChart {
        titles: RefCell<Vec<String>>,
    }

    impl Visualizer for RecordingChart {
        fn plot(&self, _freq: &FrequencyTable, title: &str) -> Result<(), RenderError> {
            self.titles.borrow_mut().push(title.to_owned());
            Ok(())
        }
    }

    fn lines() -> Vec<String> {
        vec!["Lexicon: 3 words, 2 unique.".to_owned(), "Top words: []".to_owned()]
    }

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["lexprint", "doc.txt"]).unwrap();
        assert_eq!(args.path, PathBuf::from("doc.txt"));
        assert_eq!(args.title, "Word Frequency");
        assert!(!args.no_plot);
        assert!(!args.force_plot);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn flags() {
        let args =
            Args::try_parse_from(["lexprint", "a.pdf", "--format", "json", "--no-plot", "-vv"])
                .unwrap();
        assert_eq!(args.format, Format::Json);
        assert!(args.no_plot);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn chart_failure_keeps_report() {
        let mut out = Vec::new();
        let chart = HeadlessChart;
        emit(&mut out, &lines(), Some(&chart), &FrequencyTable::default(), "t").unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Lexicon: 3 words, 2 unique.\nTop words: []\n");
    }

    #[test]
    fn chart_receives_title() {
        let mut out = Vec::new();
        let chart = RecordingChart::default();
        emit(&mut out, &lines(), Some(&chart), &FrequencyTable::default(), "Essay").unwrap();
        assert_eq!(*chart.titles.borrow(), vec!["Essay".to_owned()]);
    }

    #[test]
    fn no_chart_just_writes_lines() {
        let mut out = Vec::new();
        emit(&mut out, &lines(), None, &FrequencyTable::default(), "t").unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }

    #[test]
    fn plot_flags_conflict() {
        assert!(Args::try_parse_from(["lexprint", "a.txt", "--no-plot", "--force-plot"]).is_err());
    }
}
