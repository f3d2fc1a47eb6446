//! Bigram extraction module.
//!
//! Provides extraction of adjacent token pairs from a token sequence.
//! Bigrams capture habitual phrasing, which shifts less with topic than
//! single-word frequencies do.

/// Extracts bigrams from a token sequence using a sliding window of two.
///
/// Windows overlap and never wrap around. For fewer than 2 tokens, no
/// bigrams are emitted. For N tokens, exactly N-1 bigrams are emitted.
///
/// # Example
///
/// ```
/// use lexprint_core::analyzer::ngram::extract_bigrams;
///
/// let mut bigrams = Vec::new();
/// extract_bigrams(&["the", "cat", "sat"], |a, b| bigrams.push((a, b)));
///
/// assert_eq!(bigrams, vec![("the", "cat"), ("cat", "sat")]);
/// ```
#[inline(always)]
pub fn extract_bigrams<'a, F>(tokens: &[&'a str], mut callback: F)
where
    F: FnMut(&'a str, &'a str),
{
    for window in tokens.windows(2) {
        callback(window[0], window[1]);
    }
}

/// Counts bigrams without extracting them.
///
/// Returns 0 for fewer than 2 tokens.
#[inline(always)]
pub const fn count_bigrams(tokens: usize) -> usize {
    tokens.saturating_sub(1)
}
