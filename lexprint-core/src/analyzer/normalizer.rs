/// ASCII byte → lowercase byte retained by the clean form, or 0 if stripped.
///
/// Whitespace is resolved before this table is consulted.
const CLEAN_TABLE: [u8; 128] = build_clean_table();

const fn build_clean_table() -> [u8; 128] {
    let mut table = [0u8; 128];
    let mut i = 0;
    while i < 128 {
        let b = i as u8;
        if b.is_ascii_alphanumeric() || b == b'_' || b == b'.' {
            table[i] = b.to_ascii_lowercase();
        }
        i += 1;
    }
    table
}

/// Word characters are Unicode alphanumerics plus underscore.
#[inline(always)]
fn is_word_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Configuration options for text normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// When disabled, drops every character that is not a word character,
    /// whitespace or a period. For example, "don't!" becomes "dont".
    pub keep_punctuation: bool,
}

/// Unicode text normalizer producing the analyzer's canonical forms.
///
/// Performs the following operations:
/// - Converts all characters to lowercase (Unicode-aware)
/// - Optionally strips punctuation, keeping word characters and periods
/// - Collapses runs of whitespace into single spaces
/// - Removes leading/trailing whitespace
///
/// Stripping happens before collapsing, so removing a symbol that sat
/// between two spaces never leaves a double space behind. Normalizing an
/// already normalized string is a no-op.
///
/// # Examples
///
/// ```
/// use lexprint_core::analyzer::normalizer::{NormalizerConfig, TextNormalizer};
///
/// let clean = TextNormalizer::default();
/// assert_eq!(clean.normalize("  Hello,  WORLD!  "), "hello world");
///
/// let raw = TextNormalizer::new(NormalizerConfig { keep_punctuation: true });
/// assert_eq!(raw.normalize("  Hello,  WORLD!  "), "hello, world!");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    config: NormalizerConfig,
}

impl TextNormalizer {
    /// Creates a new normalizer with the specified configuration.
    pub const fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Normalizer for the punctuation-stripped form.
    pub const fn clean() -> Self {
        Self::new(NormalizerConfig {
            keep_punctuation: false,
        })
    }

    /// Normalizer for the punctuation-preserving form.
    pub const fn raw() -> Self {
        Self::new(NormalizerConfig {
            keep_punctuation: true,
        })
    }

    /// Returns this normalizer's configuration.
    #[inline]
    pub const fn config(&self) -> NormalizerConfig {
        self.config
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Reuses the buffer's capacity if sufficient, growing only when necessary.
    /// Clears the buffer before writing.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let keep = self.config.keep_punctuation;
        let mut pending_space = false;

        for ch in input.chars() {
            if ch.is_whitespace() {
                pending_space |= !out.is_empty();
                continue;
            }

            if ch.is_ascii() {
                let b = ch as u8;
                let lowered = if keep {
                    b.to_ascii_lowercase()
                } else {
                    CLEAN_TABLE[b as usize]
                };
                if keep || lowered != 0 {
                    if pending_space {
                        out.push(' ');
                        pending_space = false;
                    }
                    out.push(lowered as char);
                }
                continue;
            }

            for lowered in ch.to_lowercase() {
                if keep || is_word_char(lowered) {
                    if pending_space {
                        out.push(' ');
                        pending_space = false;
                    }
                    out.push(lowered);
                }
            }
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

/// Normalizes `text` into the clean form, or the raw form when
/// `keep_punctuation` is set.
#[inline]
pub fn normalize(text: &str, keep_punctuation: bool) -> String {
    TextNormalizer::new(NormalizerConfig { keep_punctuation }).normalize(text)
}
