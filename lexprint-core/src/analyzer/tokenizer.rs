//! Word and Sentence Segmentation Module
//!
//! This module splits normalized text into the two unit sequences the
//! stylometric analyzer counts over: word tokens and sentences. It's the
//! second stage in the pipeline, taking clean, normalized text and breaking
//! it into countable units.
//!
//! ## What It Does
//!
//! Given normalized input like `"the cat sat. the dog ran."`, it emits:
//!
//! ```ignore
//! words:     ("the", 0) ("cat", 1) ("sat", 2) ("the", 3) ("dog", 4) ("ran", 5)
//! sentences: ("the cat sat.", 0) ("the dog ran.", 1)
//! ```
//!
//! ## Word Rules
//!
//! Words follow Unicode UAX #29 word boundaries. A boundary segment is a
//! token only if it contains at least one alphanumeric character, so
//! punctuation and whitespace never become tokens. Numbers such as `3.14`,
//! dotted abbreviations such as `e.g` and identifiers such as `snake_case`
//! each stay a single token.
//!
//! ## Sentence Rules
//!
//! A sentence ends at a run of `.`, `!` or `?` (optionally followed by
//! closing quotes or brackets) that is followed by whitespace or the end of
//! the text. A lone `.` does not end a sentence when the word before it is a
//! known abbreviation (`e.g`, `etc`, `dr`, ...) or a single-letter initial
//! other than `a` and `i`. Whatever follows the last terminator is a final
//! sentence. Sentences without any word token are dropped.
//!
//! Lowercase text is the normal input here, so capitalization is never
//! consulted when deciding on a boundary.
//!
//! ## Key Features
//!
//! - **Zero Allocation**: words and sentences are slices of the input
//! - **Streaming**: both are emitted through a callback
//! - **Fast**: sentence terminators are located with `memchr3`
//! - **Explicit setup**: the abbreviation table is built once in
//!   [`Segmenter::new`]; there is no global or lazily fetched state
//!
//! ## Usage
//!
//! ```rust
//! use lexprint_core::analyzer::tokenizer::Segmenter;
//!
//! let segmenter = Segmenter::new();
//!
//! let mut words = 0;
//! segmenter.tokenize("hello world", |_text, _position| words += 1);
//! assert_eq!(words, 2);
//!
//! let sentences = segmenter.sentences("dr. who arrived. he left.");
//! assert_eq!(sentences, vec!["dr. who arrived.", "he left."]);
//! ```

use memchr::memchr3_iter;
use rustc_hash::FxHashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations whose trailing period never ends a sentence.
///
/// Stored without the final period; inner periods stay (`e.g`). `no` is
/// absent so that a sentence-final "no." still splits.
pub const ABBREVIATIONS: &[&str] = &[
    "e.g", "i.e", "etc", "vs", "mr", "mrs", "ms", "dr", "prof", "st", "fig", "eq", "vol", "pp",
    "al", "cf", "approx",
];

#[inline(always)]
const fn is_terminator(b: u8) -> bool {
    matches!(b, b'.' | b'!' | b'?')
}

#[inline(always)]
const fn is_closer(b: u8) -> bool {
    matches!(b, b'"' | b'\'' | b')' | b']')
}

/// Word tokenizer and sentence splitter.
///
/// Cheap to share: it holds only an immutable abbreviation table, so one
/// instance can segment any number of documents.
#[derive(Debug, Clone)]
pub struct Segmenter {
    abbreviations: FxHashSet<&'static str>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    /// Creates a segmenter with the built-in abbreviation table.
    pub fn new() -> Self {
        Self::with_abbreviations(ABBREVIATIONS)
    }

    /// Creates a segmenter with a custom abbreviation table.
    ///
    /// Entries are matched against lowercase text, without the trailing period.
    pub fn with_abbreviations(abbreviations: &[&'static str]) -> Self {
        Self {
            abbreviations: abbreviations.iter().copied().collect(),
        }
    }

    /// Tokenizes text into words and emits `(word, position)`.
    #[inline]
    pub fn tokenize<'n, F>(&self, text: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let mut pos = 0u32;
        for word in text.unicode_words() {
            emit(word, pos);
            pos = pos.saturating_add(1);
        }
    }

    /// Number of word tokens in `text`.
    #[inline]
    pub fn count_words(&self, text: &str) -> usize {
        text.unicode_words().count()
    }

    /// Collects the word tokens of `text`.
    pub fn words<'n>(&self, text: &'n str) -> Vec<&'n str> {
        let mut out = Vec::new();
        self.tokenize(text, |word, _| out.push(word));
        out
    }

    /// Splits text into sentences and emits `(sentence, position)`.
    ///
    /// Emitted sentences are trimmed and always contain at least one word.
    pub fn split_sentences<'n, F>(&self, text: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let bytes = text.as_bytes();
        let mut start = 0usize;
        let mut run_end = 0usize;
        let mut pos = 0u32;

        let mut flush = |sentence: &'n str, pos: &mut u32| {
            let sentence = sentence.trim();
            if sentence.chars().any(char::is_alphanumeric) {
                emit(sentence, *pos);
                *pos = pos.saturating_add(1);
            }
        };

        for i in memchr3_iter(b'.', b'!', b'?', bytes) {
            // Later members of a run already handled.
            if i < run_end {
                continue;
            }

            let mut end = i + 1;
            while end < bytes.len() && is_terminator(bytes[end]) {
                end += 1;
            }
            run_end = end;

            while end < bytes.len() && is_closer(bytes[end]) {
                end += 1;
            }

            let at_boundary = text[end..].chars().next().map_or(true, char::is_whitespace);
            if !at_boundary {
                continue;
            }

            if bytes[i] == b'.' && run_end == i + 1 && self.is_abbreviation(&text[start..i]) {
                continue;
            }

            flush(&text[start..end], &mut pos);
            start = end;
        }

        if start < bytes.len() {
            flush(&text[start..], &mut pos);
        }
    }

    /// Collects the sentences of `text`.
    pub fn sentences<'n>(&self, text: &'n str) -> Vec<&'n str> {
        let mut out = Vec::new();
        self.split_sentences(text, |sentence, _| out.push(sentence));
        out
    }

    /// Returns `true` if the last word of `preceding` suppresses a boundary.
    fn is_abbreviation(&self, preceding: &str) -> bool {
        let word = preceding
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric());

        if word.is_empty() {
            return false;
        }

        let mut chars = word.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return c.is_alphabetic() && !matches!(c, 'a' | 'i' | 'A' | 'I');
        }

        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.abbreviations.contains(word.to_ascii_lowercase().as_str())
        } else {
            self.abbreviations.contains(word)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &str) -> Vec<&str> {
        Segmenter::new().words(input)
    }

    fn sentences(input: &str) -> Vec<&str> {
        Segmenter::new().sentences(input)
    }

    #[test]
    fn single_word() {
        assert_eq!(words("hello"), vec!["hello"]);
    }

    #[test]
    fn punctuation_is_not_a_token() {
        assert_eq!(words("the cat sat."), vec!["the", "cat", "sat"]);
        assert_eq!(words("wait, what?!"), vec!["wait", "what"]);
    }

    #[test]
    fn numbers_and_dotted_words_stay_whole() {
        assert_eq!(words("pi is 3.14"), vec!["pi", "is", "3.14"]);
        assert_eq!(words("e.g. this"), vec!["e.g", "this"]);
        assert_eq!(words("snake_case name"), vec!["snake_case", "name"]);
    }

    #[test]
    fn positions_are_sequential() {
        let mut seen = Vec::new();
        Segmenter::new().tokenize("the quick brown fox", |_, pos| seen.push(pos));
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(words("").is_empty());
        assert!(words(". . .").is_empty());
        assert!(sentences("").is_empty());
        assert!(sentences("...").is_empty());
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hello world");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        Segmenter::new().tokenize(&input, |text, _| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn splits_lowercase_sentences() {
        assert_eq!(
            sentences("the cat sat. the dog ran fast."),
            vec!["the cat sat.", "the dog ran fast."]
        );
    }

    #[test]
    fn trailing_text_without_terminator() {
        assert_eq!(sentences("one. two three"), vec!["one.", "two three"]);
        assert_eq!(sentences("no terminator at all"), vec!["no terminator at all"]);
    }

    #[test]
    fn terminator_runs_and_closers() {
        assert_eq!(sentences("really?! yes... ok"), vec!["really?!", "yes...", "ok"]);
        assert_eq!(
            sentences("he said \"stop.\" then left."),
            vec!["he said \"stop.\"", "then left."]
        );
    }

    #[test]
    fn decimal_point_is_not_a_boundary() {
        assert_eq!(sentences("it costs 3.50 today."), vec!["it costs 3.50 today."]);
    }

    #[test]
    fn abbreviations_do_not_split() {
        assert_eq!(
            sentences("see fig. 3 and e.g. this. done."),
            vec!["see fig. 3 and e.g. this.", "done."]
        );
        assert_eq!(sentences("dr. smith left."), vec!["dr. smith left."]);
    }

    #[test]
    fn initials_do_not_split_but_a_and_i_do() {
        assert_eq!(sentences("j. smith wrote it."), vec!["j. smith wrote it."]);
        assert_eq!(sentences("it was a. then b"), vec!["it was a.", "then b"]);
    }

    #[test]
    fn sentence_final_no_splits() {
        assert_eq!(
            sentences("the answer is no. we left."),
            vec!["the answer is no.", "we left."]
        );
        assert_eq!(sentences("see no. 5 here."), vec!["see no.", "5 here."]);
        let numbered = Segmenter::with_abbreviations(&["no"]);
        assert_eq!(numbered.sentences("see no. 5 here."), vec!["see no. 5 here."]);
    }

    #[test]
    fn custom_abbreviations() {
        let seg = Segmenter::with_abbreviations(&["sec"]);
        assert_eq!(seg.sentences("see sec. 4 now."), vec!["see sec. 4 now."]);
        assert_eq!(seg.sentences("ask dr. no."), vec!["ask dr.", "no."]);
    }

    #[test]
    fn uppercase_abbreviation_is_recognized() {
        assert_eq!(sentences("Dr. Smith left."), vec!["Dr. Smith left."]);
    }

    #[test]
    fn punctuation_only_sentences_dropped() {
        assert_eq!(sentences("hello. . . world."), vec!["hello.", "world."]);
    }

    #[test]
    fn sentence_words_sum_to_total() {
        let seg = Segmenter::new();
        let text = "the cat sat. the dog ran fast today in the big green yard with many trees.";
        let total = seg.count_words(text);
        let per_sentence: usize = seg.sentences(text).iter().map(|s| seg.count_words(s)).sum();
        assert_eq!(total, 17);
        assert_eq!(per_sentence, total);
    }

    #[test]
    fn sentence_positions_are_sequential() {
        let mut seen = Vec::new();
        Segmenter::new().split_sentences("ab cd. ef gh. ij kl.", |_, pos| seen.push(pos));
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn segmenter_is_reusable() {
        let seg = Segmenter::new();
        assert_eq!(seg.count_words("hello world"), 2);
        assert_eq!(seg.count_words("one two three"), 3);
    }
}
