//! Readability scoring using Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher = easier. Plain prose lands around 60-70, dense technical text
//! often below 30. The score is not clamped: very short or very long
//! sentences can push it past 100 or below 0.

use lexprint_types::AnalysisError;

/// Computes Flesch Reading Ease.
///
/// # Errors
///
/// Returns `AnalysisError::EmptyInput` if there are no words or no sentences.
pub fn flesch_reading_ease(
    words: usize,
    sentences: usize,
    syllables: usize,
) -> Result<f64, AnalysisError> {
    if words == 0 || sentences == 0 {
        return Err(AnalysisError::EmptyInput);
    }

    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    Ok(206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word)
}
