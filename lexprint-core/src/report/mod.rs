//! Report rendering.
//!
//! Renderers only format what a [`FeatureReport`] already holds; no metric
//! is recomputed here.
//!
//! - [`TextReport`]: ordered human-readable lines
//! - [`JsonReport`]: the full report as JSON
//! - [`chart`]: word-frequency bar charts

pub mod chart;

use std::fmt::Write as _;

use lexprint_types::{FeatureReport, WordCount};
use regex::Regex;

pub use chart::{TerminalBarChart, Visualizer};

const TOP_WORDS_PREFIX: &str = "Top words: ";
/// One `('word', n)` or `("word", n)` pair at the start of the input.
const TOP_WORD_PAIR: &str = r#"^\((?:'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)"), (\d+)\)"#;
const WORD_COLUMN: usize = 20;
const FREQUENCY_COLUMN: usize = 10;
const TECHNICAL_TERM_RANK: usize = 7;

/// Turns a report into output lines.
pub trait ReportRenderer {
    /// Renders `report` as ordered lines.
    fn render(&self, report: &FeatureReport) -> Vec<String>;
}

/// Plain text report: summary, interesting-terms table and notes.
#[derive(Debug, Clone, Default)]
pub struct TextReport {
    title: Option<String>,
}

impl TextReport {
    /// Creates a renderer without a heading.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a heading line naming the analyzed document.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn summary(report: &FeatureReport, out: &mut Vec<String>) {
        out.push(format!(
            "Lexicon: {} words, {} unique.",
            report.total_words, report.unique_words
        ));
        out.push(format!(
            "{TOP_WORDS_PREFIX}{}",
            list(report.most_common.iter())
        ));
        out.push(format!(
            "Avg. sentence length: {:.1} words.",
            report.avg_sentence_length
        ));
        out.push(format!("Readability (Flesch): {:.1}", report.readability));
        out.push(format!("Top bigrams: {}", list(report.bigrams.iter())));

        let mut usage = String::from("{");
        for (i, (word, count)) in report.function_words.iter().enumerate() {
            if i > 0 {
                usage.push_str(", ");
            }
            let _ = write!(usage, "'{word}': {count}");
        }
        usage.push('}');
        out.push(format!("Function word usage: {usage}"));

        out.push(format!(
            "Spelling clues: British-like: {}, American-like: {}",
            report.spelling.british, report.spelling.american
        ));
        out.push(format!(
            "Syntactic complexity (long sentences): {:.1}%",
            report.syntactic_complexity * 100.0
        ));
    }

    fn terms_table(report: &FeatureReport, out: &mut Vec<String>) {
        out.push("Intriguing terms:".to_owned());
        out.push(row("Word", "Frequency"));
        for term in &report.interesting_terms {
            out.push(row(&term.word, &term.count.to_string()));
        }
    }

    fn notes(report: &FeatureReport, out: &mut Vec<String>) {
        out.push("Stylometric notes:".to_owned());
        if report.spelling.leans_british() {
            out.push(
                "- Hints of British English (e.g., 'favour') suggest a non-American influence."
                    .to_owned(),
            );
        }
        if let Some(term) = report.most_common.get(TECHNICAL_TERM_RANK) {
            out.push(format!(
                "- Heavy use of terms like '{}' points to a specialist vocabulary.",
                term.word
            ));
        }
        if let Some(bigram) = report.top_bigram() {
            out.push(format!(
                "- Bigrams like ('{}', '{}') reflect a focus on '{}'.",
                bigram.first, bigram.second, bigram.second
            ));
        }
    }
}

impl ReportRenderer for TextReport {
    fn render(&self, report: &FeatureReport) -> Vec<String> {
        let mut out = Vec::with_capacity(16 + report.interesting_terms.len());
        if let Some(title) = &self.title {
            out.push(format!("Analyzing {title}"));
            out.push(String::new());
        }
        Self::summary(report, &mut out);
        out.push(String::new());
        Self::terms_table(report, &mut out);
        out.push(String::new());
        Self::notes(report, &mut out);
        out
    }
}

/// Pretty-printed JSON rendering of the whole report.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReport;

impl JsonReport {
    /// Serializes `report`.
    ///
    /// # Errors
    ///
    /// Returns the serializer error, which cannot happen for a report built
    /// by the analyzer.
    pub fn to_json(&self, report: &FeatureReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }
}

impl ReportRenderer for JsonReport {
    fn render(&self, report: &FeatureReport) -> Vec<String> {
        match self.to_json(report) {
            Ok(json) => json.lines().map(str::to_owned).collect(),
            Err(e) => vec![format!("{{\"error\": \"{e}\"}}")],
        }
    }
}

/// Recovers the `(word, count)` pairs from a rendered top-words line.
///
/// Returns `None` if `line` is not a top-words line or any pair in it is
/// malformed.
pub fn parse_top_words(line: &str) -> Option<Vec<WordCount>> {
    let inner = line
        .strip_prefix(TOP_WORDS_PREFIX)?
        .strip_prefix('[')?
        .strip_suffix(']')?;
    let pair = Regex::new(TOP_WORD_PAIR).ok()?;

    let mut out = Vec::new();
    let mut rest = inner;
    while !rest.is_empty() {
        let caps = pair.captures(rest)?;
        let word = caps.get(1).or_else(|| caps.get(2))?.as_str();
        out.push(WordCount::new(unescape(word), caps[3].parse().ok()?));

        rest = &rest[caps.get(0)?.end()..];
        if !rest.is_empty() {
            rest = rest.strip_prefix(", ")?;
        }
    }
    Some(out)
}

/// Drops the backslash from each `\x` escape.
fn unescape(quoted: &str) -> String {
    let mut out = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn list<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    let mut out = String::from("[");
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{item}");
    }
    out.push(']');
    out
}

fn row(word: &str, frequency: &str) -> String {
    format!("{word:<WORD_COLUMN$}{frequency:<FREQUENCY_COLUMN$}")
}
