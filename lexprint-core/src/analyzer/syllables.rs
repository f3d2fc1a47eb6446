//! Heuristic English syllable counting for readability scoring.

#[inline(always)]
fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e'
            | 'i'
            | 'o'
            | 'u'
            | 'y'
            | 'à'
            | 'á'
            | 'â'
            | 'ä'
            | 'è'
            | 'é'
            | 'ê'
            | 'ë'
            | 'ì'
            | 'í'
            | 'î'
            | 'ï'
            | 'ò'
            | 'ó'
            | 'ô'
            | 'ö'
            | 'ù'
            | 'ú'
            | 'û'
            | 'ü'
    )
}

/// Estimates the syllables in one lowercase token.
///
/// Counts vowel groups, then drops a silent trailing `e` unless it forms a
/// consonant + `le` ending ("ta-ble"). Any token with letters has at least
/// one syllable; tokens with digits but no letters count as one, and tokens
/// with neither count as zero.
pub fn count_syllables(word: &str) -> usize {
    let mut groups = 0usize;
    let mut prev_vowel = false;
    let mut letters = 0usize;
    let mut digits = false;
    // Last three letters, most recent last.
    let mut tail = ['\0'; 3];

    for c in word.chars() {
        if !c.is_alphabetic() {
            digits |= c.is_numeric();
            prev_vowel = false;
            continue;
        }

        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = vowel;
        letters += 1;
        tail = [tail[1], tail[2], c];
    }

    if letters == 0 {
        return usize::from(digits);
    }

    if tail[2] == 'e' && groups > 1 {
        let consonant_le = letters >= 3 && tail[1] == 'l' && !is_vowel(tail[0]);
        if !consonant_le {
            groups -= 1;
        }
    }

    groups.max(1)
}

/// Total syllables across a token sequence.
pub fn total_syllables(words: &[&str]) -> usize {
    words.iter().map(|w| count_syllables(w)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_syllable_words() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("strength"), 1);
    }

    #[test]
    fn multi_syllable_words() {
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("syllable"), 3);
        assert_eq!(count_syllables("readability"), 5);
        assert_eq!(count_syllables("cryptography"), 4);
    }

    #[test]
    fn diphthongs_count_once() {
        assert_eq!(count_syllables("boat"), 1);
        assert_eq!(count_syllables("rain"), 1);
    }

    #[test]
    fn numbers_and_empty() {
        assert_eq!(count_syllables("2024"), 1);
        assert_eq!(count_syllables(""), 0);
        assert_eq!(count_syllables("_"), 0);
    }

    #[test]
    fn vowelless_word_has_one() {
        assert_eq!(count_syllables("hmm"), 1);
        assert_eq!(count_syllables("b"), 1);
    }

    #[test]
    fn accented_vowels() {
        assert_eq!(count_syllables("café"), 2);
    }

    #[test]
    fn total_over_tokens() {
        assert_eq!(total_syllables(&["the", "table"]), 3);
        assert_eq!(total_syllables(&[]), 0);
    }
}
