//! Analyzer type.

use crate::analyzer::spelling::SpellingDetector;
use crate::analyzer::tokenizer::Segmenter;
use lexprint_types::{AnalysisError, AnalyzerConfig};

/// Stylometric feature extractor.
///
/// Holds only immutable state: configuration, the segmenter and the
/// compiled spelling patterns. Every analysis builds fresh tables, so one
/// analyzer can serve any number of documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct StylometricAnalyzer {
    pub(crate) config: AnalyzerConfig,
    pub(crate) segmenter: Segmenter,
    pub(crate) spelling: SpellingDetector,
}

impl StylometricAnalyzer {
    /// Creates an analyzer with the default configuration.
    ///
    /// This is the one-time setup step: the abbreviation table is built and
    /// the spelling patterns are compiled here.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidPattern` if a built-in pattern fails to compile.
    pub fn new() -> Result<Self, AnalysisError> {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Creates an analyzer with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidPattern` if a built-in pattern fails to compile.
    pub fn with_config(config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        Ok(Self {
            config,
            segmenter: Segmenter::new(),
            spelling: SpellingDetector::new()?,
        })
    }

    /// Replaces the segmenter, e.g. to use a custom abbreviation table.
    #[must_use]
    pub fn with_segmenter(mut self, segmenter: Segmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Returns the active configuration.
    #[inline(always)]
    #[must_use]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Returns the segmenter used for words and sentences.
    #[inline(always)]
    #[must_use]
    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }
}
