//! Core types for the lexprint stylometry engine.
//!
//! This crate provides the types shared between the analysis core and its
//! front ends. Keeping them separate ensures:
//!
//! - **Stable report shape**: renderers and the CLI agree on one structure
//! - **Cross-crate compatibility**: core and CLI share the same error taxonomy
//! - **Clean boundaries**: no circular dependencies between crates

#![warn(missing_docs)]

use core::fmt::{self, Write as _};
use std::path::PathBuf;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token → occurrence count, iterated in first-seen order.
///
/// The insertion order is what breaks ties when ranking, so it must never
/// be re-sorted in place.
pub type FrequencyTable = IndexMap<String, u32, FxBuildHasher>;

/// Function word → count, in [`FUNCTION_WORDS`] order.
pub type FunctionWordUsage = IndexMap<String, u32, FxBuildHasher>;

/// Closed-class words tracked as a topic-independent style fingerprint.
pub const FUNCTION_WORDS: [&str; 10] = [
    "the", "of", "to", "and", "in", "is", "a", "that", "for", "on",
];

/// Container format a [`RawText`] was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Text pulled out of a PDF.
    Pdf,
    /// File read directly as text.
    PlainText,
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => f.write_str("pdf"),
            DocumentFormat::PlainText => f.write_str("text"),
        }
    }
}

/// Verbatim text extracted from a document.
///
/// Produced once by a loader and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawText {
    text: String,
    format: DocumentFormat,
}

impl RawText {
    /// Wraps extracted text.
    pub fn new(text: impl Into<String>, format: DocumentFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }

    /// Returns the extracted text.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the format the text came from.
    #[inline(always)]
    pub const fn format(&self) -> DocumentFormat {
        self.format
    }

    /// Length of the text in bytes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if nothing was extracted.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The two canonical forms of a document.
///
/// `clean` drives frequency and readability metrics, `raw` keeps punctuation
/// for the spelling-convention patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    /// Lowercase, collapsed whitespace, only word characters, spaces and periods.
    pub clean: String,
    /// Lowercase, collapsed whitespace, punctuation retained.
    pub raw: String,
}

/// A token paired with its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// The token.
    pub word: String,
    /// Number of occurrences.
    pub count: u32,
}

impl WordCount {
    /// Creates a new word count.
    pub fn new(word: impl Into<String>, count: u32) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Writes `s` as a quoted literal.
///
/// Single quotes are used unless `s` contains `'` and no `"`. Backslashes and
/// the chosen quote character are escaped with `\\`.
pub fn write_quoted(f: &mut impl fmt::Write, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    f.write_char(quote)?;
    for c in s.chars() {
        if c == quote || c == '\\' {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    f.write_char(quote)
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('(')?;
        write_quoted(f, &self.word)?;
        write!(f, ", {})", self.count)
    }
}

/// An ordered pair of adjacent tokens paired with its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigramCount {
    /// Left token.
    pub first: String,
    /// Right token.
    pub second: String,
    /// Number of occurrences.
    pub count: u32,
}

impl BigramCount {
    /// Creates a new bigram count.
    pub fn new(first: impl Into<String>, second: impl Into<String>, count: u32) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            count,
        }
    }
}

impl fmt::Display for BigramCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("((")?;
        write_quoted(f, &self.first)?;
        f.write_str(", ")?;
        write_quoted(f, &self.second)?;
        write!(f, "), {})", self.count)
    }
}

/// Heuristic spelling-convention hit counts.
///
/// The two counters are independent: one word may feed neither, either or
/// both of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingSignals {
    /// Matches of British-leaning forms (`-our`, `favour`, `-ise`).
    pub british: u32,
    /// Matches of American-leaning forms (`-or`, `favor`, `-ize`).
    pub american: u32,
}

impl SpellingSignals {
    /// Returns `true` if British forms outnumber American ones.
    #[inline]
    pub const fn leans_british(self) -> bool {
        self.british > self.american
    }
}

/// Every feature extracted from one document.
///
/// Built by a single analysis call and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureReport {
    /// Number of word tokens.
    pub total_words: usize,
    /// Number of distinct word tokens.
    pub unique_words: usize,
    /// Number of sentences.
    pub sentence_count: usize,
    /// Most frequent tokens, ties in first-seen order.
    pub most_common: Vec<WordCount>,
    /// Mean word tokens per sentence.
    pub avg_sentence_length: f64,
    /// Flesch Reading Ease. Not clamped.
    pub readability: f64,
    /// Long, repeated tokens; descending count then alphabetical.
    pub interesting_terms: Vec<WordCount>,
    /// Full token frequency table.
    pub word_freq: FrequencyTable,
    /// Most frequent adjacent pairs, ties in first-seen order.
    pub bigrams: Vec<BigramCount>,
    /// Counts of the function words that occur.
    pub function_words: FunctionWordUsage,
    /// British/American spelling hit counts.
    pub spelling: SpellingSignals,
    /// Fraction of sentences above the long-sentence threshold.
    pub syntactic_complexity: f64,
}

impl FeatureReport {
    /// Returns the most frequent token, if any.
    pub fn top_word(&self) -> Option<&WordCount> {
        self.most_common.first()
    }

    /// Returns the most frequent bigram, if any.
    pub fn top_bigram(&self) -> Option<&BigramCount> {
        self.bigrams.first()
    }

    /// Frequency of a token, or 0 when absent.
    pub fn frequency(&self, word: &str) -> u32 {
        self.word_freq.get(word).copied().unwrap_or(0)
    }
}

/// Analysis configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Length of the top-words and top-bigrams lists.
    /// Default: 10
    pub top_n: usize,
    /// A sentence is long when its token count exceeds this.
    /// Default: 20
    pub long_sentence_threshold: usize,
    /// Interesting terms must have more characters than this.
    /// Default: 7
    pub interesting_chars_above: usize,
    /// Interesting terms must occur more often than this.
    /// Default: 1
    pub interesting_count_above: u32,
    /// Maximum number of interesting terms reported.
    /// Default: 10
    pub interesting_limit: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            long_sentence_threshold: 20,
            interesting_chars_above: 7,
            interesting_count_above: 1,
            interesting_limit: 10,
        }
    }
}

/// Errors raised while turning a path into [`RawText`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document does not exist.
    #[error("document not found: {}", .0.display())]
    NotFound(PathBuf),

    /// An external extraction tool is not installed.
    #[error("external tool not found: {0}")]
    ToolNotFound(String),

    /// The extraction tool ran but failed.
    #[error("text extraction failed: {0}")]
    ExtractionFailed(String),

    /// The file holds binary content rather than text.
    #[error("unsupported document format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Extraction produced nothing but whitespace.
    #[error("document contains no extractable text: {}", .0.display())]
    EmptyDocument(PathBuf),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the stylometric analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The text has no sentences, so per-sentence and per-word ratios are undefined.
    #[error("input contains no sentences to analyze")]
    EmptyInput,

    /// A built-in pattern failed to compile.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: &'static str,
        /// Compiler message.
        reason: String,
    },
}

/// Errors raised while drawing a chart.
///
/// These never abort the textual report.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No usable output device (e.g. not a terminal).
    #[error("chart output unavailable: {0}")]
    Unavailable(&'static str),

    /// The frequency table has no entries.
    #[error("nothing to plot")]
    NothingToPlot,

    /// Writing the chart failed.
    #[error("chart write failed: {0}")]
    Io(#[from] std::io::Error),
}
