//! Stylometric feature extraction.
//!
//! Turns normalized text into a [`FeatureReport`](lexprint_types::FeatureReport):
//! word and sentence statistics, top words and bigrams, function-word usage,
//! spelling-convention signals, syntactic complexity and readability.
//!
//! Ranking:
//! - Top words and bigrams sort by descending count; ties keep first-seen order
//! - Interesting terms sort by descending count, then alphabetically
//!
//! Threading:
//! - [`StylometricAnalyzer`] holds no mutable state and is `Send + Sync`.
//!   Each call builds its own tables, so documents can be analyzed in
//!   parallel by the caller.

mod api;
mod counter;
mod features;
mod readability;
mod types;

pub use readability::flesch_reading_ease;
pub use types::StylometricAnalyzer;
