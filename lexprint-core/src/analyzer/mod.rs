//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Cleans and lowercases raw text into its two canonical forms
//! - **Tokenizer**: Splits normalized text into words and sentences
//! - **Ngram**: Extracts adjacent token pairs
//! - **Syllables**: Estimates syllable counts for readability
//! - **Spelling**: Counts British/American spelling-convention hits

pub mod ngram;
pub mod normalizer;
pub mod spelling;
pub mod syllables;
pub mod tokenizer;

pub use normalizer::{normalize, NormalizerConfig, TextNormalizer};
pub use spelling::SpellingDetector;
pub use tokenizer::Segmenter;

use lexprint_types::NormalizedText;

/// Produces both canonical forms of `text`.
pub fn normalize_document(text: &str) -> NormalizedText {
    NormalizedText {
        clean: TextNormalizer::clean().normalize(text),
        raw: TextNormalizer::raw().normalize(text),
    }
}
