//! Forensic stylometric analysis of single documents.
//!
//! ```text
//! path -> loader -> RawText -> analyzer (normalize) -> NormalizedText
//!      -> stylometry -> FeatureReport -> report / chart
//! ```
//!
//! ```rust
//! use lexprint_core::analyzer::normalize_document;
//! use lexprint_core::stylometry::StylometricAnalyzer;
//!
//! let analyzer = StylometricAnalyzer::new()?;
//! let report = analyzer.analyze(&normalize_document("The cat sat. The dog ran."))?;
//! assert_eq!(report.total_words, 6);
//! assert_eq!(report.sentence_count, 2);
//! # Ok::<(), lexprint_core::types::AnalysisError>(())
//! ```

pub mod analyzer;
pub mod loader;
pub mod report;
pub mod stylometry;

pub use lexprint_types as types;
