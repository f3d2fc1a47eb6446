//! Derived lexical and syntactic features.

use lexprint_types::{FunctionWordUsage, WordCount, FUNCTION_WORDS};

use crate::stylometry::counter::CountTable;

/// Counts of the function words present in `table`, in vocabulary order.
///
/// Absent words are omitted rather than reported as zero.
pub(crate) fn function_word_usage(table: &CountTable<&str>) -> FunctionWordUsage {
    let mut usage = FunctionWordUsage::default();
    for word in FUNCTION_WORDS {
        let count = table.get(&word);
        if count > 0 {
            usage.insert(word.to_owned(), count);
        }
    }
    usage
}

/// Long tokens that repeat.
///
/// Keeps tokens with more than `chars_above` characters and a count above
/// `count_above`, ordered by descending count, then alphabetically, and
/// returns at most `limit` of them.
pub(crate) fn interesting_terms(
    table: &CountTable<&str>,
    chars_above: usize,
    count_above: u32,
    limit: usize,
) -> Vec<WordCount> {
    let mut terms: Vec<(&str, u32)> = table
        .iter()
        .filter(|&(word, count)| count > count_above && word.chars().count() > chars_above)
        .collect();

    terms.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    terms.truncate(limit);

    terms
        .into_iter()
        .map(|(word, count)| WordCount::new(word, count))
        .collect()
}

/// Fraction of sentences with more than `threshold` tokens.
///
/// Returns `None` for an empty slice.
pub(crate) fn long_sentence_ratio(lengths: &[usize], threshold: usize) -> Option<f64> {
    if lengths.is_empty() {
        return None;
    }
    let long = lengths.iter().filter(|&&n| n > threshold).count();
    Some(long as f64 / lengths.len() as f64)
}

/// Mean tokens per sentence, `None` for an empty slice.
pub(crate) fn mean_length(lengths: &[usize]) -> Option<f64> {
    if lengths.is_empty() {
        return None;
    }
    Some(lengths.iter().sum::<usize>() as f64 / lengths.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table<'a>(words: &[&'a str]) -> CountTable<&'a str> {
        let mut t = CountTable::with_capacity(words.len());
        for w in words {
            t.add(*w);
        }
        t
    }

    #[test]
    fn function_words_only_present_ones_in_vocabulary_order() {
        let t = table(&["on", "the", "cat", "the", "of"]);
        let usage = function_word_usage(&t);
        let keys: Vec<&str> = usage.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["the", "of", "on"]);
        assert_eq!(usage["the"], 2);
        assert!(!usage.contains_key("cat"));
        assert!(!usage.contains_key("and"));
    }

    #[test]
    fn function_words_empty_when_none_present() {
        assert!(function_word_usage(&table(&["cryptography", "proof"])).is_empty());
    }

    #[test]
    fn interesting_terms_filter_and_order() {
        let t = table(&[
            "timestamp", "signature", "signature", "timestamp", "timestamp", "transaction",
            "transaction", "consensus", "short", "short", "abcdefgh", "abcdefgh",
        ]);
        let terms = interesting_terms(&t, 7, 1, 10);
        let words: Vec<(&str, u32)> = terms.iter().map(|t| (t.word.as_str(), t.count)).collect();
        assert_eq!(
            words,
            vec![
                ("timestamp", 3),
                ("abcdefgh", 2),
                ("signature", 2),
                ("transaction", 2),
            ]
        );
    }

    #[test]
    fn interesting_terms_length_counts_chars_not_bytes() {
        // 7 chars, 14 bytes
        let t = table(&["ééééééé", "ééééééé"]);
        assert!(interesting_terms(&t, 7, 1, 10).is_empty());
    }

    #[test]
    fn interesting_terms_limit() {
        let words: Vec<String> = (0..15).map(|i| format!("longword{i:02}")).collect();
        let mut all: Vec<&str> = words.iter().map(String::as_str).collect();
        all.extend(words.iter().map(String::as_str));
        let terms = interesting_terms(&table(&all), 7, 1, 10);
        assert_eq!(terms.len(), 10);
        assert_eq!(terms[0].word, "longword00");
    }

    #[test]
    fn long_sentence_ratio_bounds() {
        assert_eq!(long_sentence_ratio(&[], 20), None);
        assert_eq!(long_sentence_ratio(&[3, 14], 20), Some(0.0));
        assert_eq!(long_sentence_ratio(&[21, 21], 20), Some(1.0));
        assert_eq!(long_sentence_ratio(&[20, 21], 20), Some(0.5));
    }

    #[test]
    fn mean_length_basic() {
        assert_eq!(mean_length(&[]), None);
        assert_eq!(mean_length(&[3, 14]), Some(8.5));
    }
}
