//! Public API for analyzing documents.

use lexprint_types::{AnalysisError, BigramCount, FeatureReport, NormalizedText, WordCount};
use smallvec::SmallVec;
use tracing::debug;

use crate::analyzer::ngram::{count_bigrams, extract_bigrams};
use crate::analyzer::normalize_document;
use crate::analyzer::syllables::total_syllables;
use crate::stylometry::counter::CountTable;
use crate::stylometry::features::{
    function_word_usage, interesting_terms, long_sentence_ratio, mean_length,
};
use crate::stylometry::readability::flesch_reading_ease;
use crate::stylometry::types::StylometricAnalyzer;

impl StylometricAnalyzer {
    /// Extracts every feature from a normalized document.
    ///
    /// Frequency, n-gram, sentence and readability metrics come from
    /// `text.clean`; the spelling signals come from `text.raw`.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::EmptyInput` if the clean text has no sentences.
    pub fn analyze(&self, text: &NormalizedText) -> Result<FeatureReport, AnalysisError> {
        self.analyze_parts(&text.clean, &text.raw)
    }

    /// Analyzes clean text alone, also using it for the spelling signals.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::EmptyInput` if the text has no sentences.
    pub fn analyze_clean(&self, clean: &str) -> Result<FeatureReport, AnalysisError> {
        self.analyze_parts(clean, clean)
    }

    /// Normalizes raw extracted text into both forms, then analyzes it.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::EmptyInput` if nothing countable remains after
    /// normalization.
    pub fn analyze_raw(&self, raw_text: &str) -> Result<FeatureReport, AnalysisError> {
        self.analyze(&normalize_document(raw_text))
    }

    fn analyze_parts(&self, clean: &str, raw: &str) -> Result<FeatureReport, AnalysisError> {
        let config = &self.config;

        let mut words: Vec<&str> = Vec::with_capacity(clean.len() / 5 + 1);
        self.segmenter.tokenize(clean, |word, _| words.push(word));

        let mut sentence_lengths: SmallVec<[usize; 64]> = SmallVec::new();
        self.segmenter.split_sentences(clean, |sentence, _| {
            sentence_lengths.push(self.segmenter.count_words(sentence));
        });

        debug!(
            clean_bytes = clean.len(),
            words = words.len(),
            sentences = sentence_lengths.len(),
            "segmented document"
        );

        let (Some(avg_sentence_length), Some(syntactic_complexity)) = (
            mean_length(&sentence_lengths),
            long_sentence_ratio(&sentence_lengths, config.long_sentence_threshold),
        ) else {
            return Err(AnalysisError::EmptyInput);
        };

        let readability =
            flesch_reading_ease(words.len(), sentence_lengths.len(), total_syllables(&words))?;

        let mut word_table = CountTable::with_capacity(words.len() / 2 + 1);
        for &word in &words {
            word_table.add(word);
        }
        debug_assert_eq!(word_table.total(), words.len() as u64);

        let mut bigram_table = CountTable::with_capacity(count_bigrams(words.len()));
        extract_bigrams(&words, |a, b| bigram_table.add((a, b)));

        let most_common = word_table
            .most_common(config.top_n)
            .into_iter()
            .map(|(word, count)| WordCount::new(word, count))
            .collect();

        let bigrams = bigram_table
            .most_common(config.top_n)
            .into_iter()
            .map(|((first, second), count)| BigramCount::new(first, second, count))
            .collect();

        let spelling = self.spelling.detect(raw);

        debug!(
            unique = word_table.len(),
            bigrams = bigram_table.len(),
            british = spelling.british,
            american = spelling.american,
            "built frequency tables"
        );

        Ok(FeatureReport {
            total_words: words.len(),
            unique_words: word_table.len(),
            sentence_count: sentence_lengths.len(),
            most_common,
            avg_sentence_length,
            readability,
            interesting_terms: interesting_terms(
                &word_table,
                config.interesting_chars_above,
                config.interesting_count_above,
                config.interesting_limit,
            ),
            word_freq: word_table
                .iter()
                .map(|(word, count)| (word.to_owned(), count))
                .collect(),
            bigrams,
            function_words: function_word_usage(&word_table),
            spelling,
            syntactic_complexity,
        })
    }
}
