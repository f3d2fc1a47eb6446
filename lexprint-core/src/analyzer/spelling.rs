//! British/American spelling-convention signals.
//!
//! Two independent pattern counts over the punctuation-preserving text.
//! They are heuristics, not a classifier: "colour" feeds the British count,
//! "color" the American one, and plenty of ordinary words ("for", "doctor",
//! "wise") feed one of them without saying anything about the author.

use lexprint_types::{AnalysisError, SpellingSignals};
use regex::Regex;

/// Words ending in `our` or `ise`, or containing `favour`.
pub const BRITISH_PATTERN: &str = r"our\b|favour|ise\b";

/// Words ending in `or` or `ize`, or containing `favor`.
pub const AMERICAN_PATTERN: &str = r"or\b|favor|ize\b";

/// Counts spelling-convention pattern hits.
#[derive(Debug, Clone)]
pub struct SpellingDetector {
    british: Regex,
    american: Regex,
}

impl SpellingDetector {
    /// Compiles the built-in patterns.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidPattern` if a pattern fails to compile.
    pub fn new() -> Result<Self, AnalysisError> {
        Ok(Self {
            british: compile(BRITISH_PATTERN)?,
            american: compile(AMERICAN_PATTERN)?,
        })
    }

    /// Counts non-overlapping matches of each pattern in `text`.
    pub fn detect(&self, text: &str) -> SpellingSignals {
        SpellingSignals {
            british: count_matches(&self.british, text),
            american: count_matches(&self.american, text),
        }
    }
}

fn compile(pattern: &'static str) -> Result<Regex, AnalysisError> {
    Regex::new(pattern).map_err(|e| AnalysisError::InvalidPattern {
        pattern,
        reason: e.to_string(),
    })
}

#[inline]
fn count_matches(re: &Regex, text: &str) -> u32 {
    u32::try_from(re.find_iter(text).count()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> SpellingSignals {
        SpellingDetector::new().expect("patterns compile").detect(text)
    }

    #[test]
    fn colour_and_color_both_register() {
        let signals = detect("the colour and the color");
        assert!(signals.british >= 1);
        assert!(signals.american >= 1);
    }

    #[test]
    fn british_forms() {
        assert_eq!(detect("colour"), SpellingSignals { british: 1, american: 0 });
        assert_eq!(detect("realise"), SpellingSignals { british: 1, american: 0 });
        assert_eq!(detect("favourite"), SpellingSignals { british: 1, american: 0 });
    }

    #[test]
    fn american_forms() {
        assert_eq!(detect("color"), SpellingSignals { british: 0, american: 1 });
        assert_eq!(detect("realize"), SpellingSignals { british: 0, american: 1 });
        assert_eq!(detect("favorite"), SpellingSignals { british: 0, american: 1 });
    }

    #[test]
    fn favour_counts_once() {
        assert_eq!(detect("favour"), SpellingSignals { british: 1, american: 0 });
    }

    #[test]
    fn word_boundary_respects_punctuation() {
        assert_eq!(detect("honour, color."), SpellingSignals { british: 1, american: 1 });
        assert_eq!(detect("colours colors"), SpellingSignals::default());
    }

    #[test]
    fn common_words_are_counted_too() {
        assert_eq!(detect("for the doctor").american, 2);
        assert_eq!(detect("otherwise").british, 1);
    }

    #[test]
    fn empty_text() {
        assert_eq!(detect(""), SpellingSignals::default());
    }
}
