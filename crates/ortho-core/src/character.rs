// UTF-16 code-unit classification for word segmentation.
//
// The segmenter needs exactly four answers per code unit: letter,
// punctuation, whitespace, or none of those. Classification is a value
// (`WordClassifier`) injected into each scan, not process-wide locale state,
// so concurrent sessions with different policies cannot interfere.

/// Classification of a single UTF-16 code unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// A word-forming (alphabetic) unit.
    Letter,
    /// A word separator that is printable punctuation.
    Punctuation,
    /// A word separator that is whitespace.
    Whitespace,
    /// Neither letter nor separator (digits, symbols, control characters).
    Unknown,
}

/// Letter ranges of the default classification table, as inclusive code
/// point bounds. The table is deliberately fixed: Basic Latin, Latin-1 and
/// Latin Extended letters, Greek, Cyrillic, Latin Extended Additional, and
/// the alphabetic presentation forms. Reproducibility across hosts matters
/// more here than covering every script.
const LETTER_RANGES: &[(u32, u32)] = &[
    (0x0041, 0x005A), // A-Z
    (0x0061, 0x007A), // a-z
    (0x00C0, 0x00D6), // À-Ö
    (0x00D8, 0x00F6), // Ø-ö
    (0x00F8, 0x02AF), // ø through Latin Extended-B and IPA
    (0x0386, 0x03F5), // Greek
    (0x0400, 0x0481), // Cyrillic
    (0x048A, 0x0527), // Cyrillic extended
    (0x1E00, 0x1EFF), // Latin Extended Additional
    (0xFB00, 0xFB04), // Alphabetic presentation forms (ff, fi, fl, ffi, ffl)
];

/// ASCII punctuation blocks. Digits (0x30-0x39) are deliberately absent:
/// a digit inside a word poisons the word rather than terminating it.
const ASCII_PUNCT_RANGES: &[(u32, u32)] = &[
    (0x0021, 0x002F),
    (0x003A, 0x0040),
    (0x005B, 0x0060),
    (0x007B, 0x007E),
];

fn in_ranges(cp: u32, ranges: &[(u32, u32)]) -> bool {
    ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// Typographic punctuation outside ASCII.
fn is_typographic_punctuation(cp: u32) -> bool {
    matches!(
        cp,
        0x00A1 // ¡
            | 0x00AB // «
            | 0x00AD // SOFT HYPHEN
            | 0x00BB // »
            | 0x00BF // ¿
            | 0x2010..=0x2027 // hyphens, dashes, quotation marks, ellipsis
            | 0x2039 // ‹
            | 0x203A // ›
    )
}

/// Whitespace code units recognized by the segmenter.
fn is_whitespace_unit(cp: u32) -> bool {
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || cp == 0x180E
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}

/// Check whether a code unit is an apostrophe that may continue a word.
///
/// Covers the ASCII apostrophe and U+2019 RIGHT SINGLE QUOTATION MARK, the
/// form most text editors insert for contractions.
pub fn is_word_apostrophe(unit: u16) -> bool {
    matches!(unit, 0x0027 | 0x2019)
}

/// Classification policy for one segmentation pass.
///
/// The default policy uses the fixed letter table above and treats both
/// halves of a surrogate pair as letters, so a non-BMP letter (emoji,
/// supplementary-plane scripts) never splits a word in the middle. A word
/// containing a surrogate either transcodes cleanly (valid pair) or is
/// skipped by the checker (lone half), but its boundaries stay intact.
#[derive(Debug, Clone, Copy)]
pub struct WordClassifier {
    surrogates_are_letters: bool,
}

impl WordClassifier {
    /// The default, documented policy.
    pub fn new() -> Self {
        Self {
            surrogates_are_letters: true,
        }
    }

    /// Control whether surrogate halves count as word characters.
    /// With `false`, a surrogate classifies as `Unknown` and poisons the
    /// surrounding word like any other unknown unit.
    pub fn with_surrogate_letters(mut self, value: bool) -> Self {
        self.surrogates_are_letters = value;
        self
    }

    /// Classify one UTF-16 code unit.
    pub fn classify(&self, unit: u16) -> CharClass {
        if (0xD800..=0xDFFF).contains(&unit) {
            return if self.surrogates_are_letters {
                CharClass::Letter
            } else {
                CharClass::Unknown
            };
        }
        let cp = unit as u32;
        if in_ranges(cp, LETTER_RANGES) {
            return CharClass::Letter;
        }
        if is_whitespace_unit(cp) {
            return CharClass::Whitespace;
        }
        if in_ranges(cp, ASCII_PUNCT_RANGES) || is_typographic_punctuation(cp) {
            return CharClass::Punctuation;
        }
        CharClass::Unknown
    }

    /// Whether the unit is word-forming under this policy.
    pub fn is_letter(&self, unit: u16) -> bool {
        self.classify(unit) == CharClass::Letter
    }

    /// Whether the unit separates words (punctuation or whitespace).
    pub fn is_separator(&self, unit: u16) -> bool {
        matches!(
            self.classify(unit),
            CharClass::Punctuation | CharClass::Whitespace
        )
    }
}

impl Default for WordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(c: char) -> u16 {
        let mut buf = [0u16; 2];
        c.encode_utf16(&mut buf);
        buf[0]
    }

    #[test]
    fn ascii_letters() {
        let cl = WordClassifier::new();
        assert_eq!(cl.classify(unit('A')), CharClass::Letter);
        assert_eq!(cl.classify(unit('z')), CharClass::Letter);
    }

    #[test]
    fn latin1_letters() {
        let cl = WordClassifier::new();
        assert_eq!(cl.classify(unit('À')), CharClass::Letter);
        assert_eq!(cl.classify(unit('ö')), CharClass::Letter);
        assert_eq!(cl.classify(unit('ø')), CharClass::Letter);
    }

    #[test]
    fn greek_and_cyrillic_letters() {
        let cl = WordClassifier::new();
        assert_eq!(cl.classify(unit('λ')), CharClass::Letter);
        assert_eq!(cl.classify(unit('д')), CharClass::Letter);
    }

    #[test]
    fn digits_are_unknown() {
        let cl = WordClassifier::new();
        assert_eq!(cl.classify(unit('0')), CharClass::Unknown);
        assert_eq!(cl.classify(unit('9')), CharClass::Unknown);
    }

    #[test]
    fn ascii_punctuation() {
        let cl = WordClassifier::new();
        for c in ['.', ',', '!', '?', ':', ';', '\'', '"', '(', ')', '/'] {
            assert_eq!(cl.classify(unit(c)), CharClass::Punctuation, "{c:?}");
        }
    }

    #[test]
    fn typographic_punctuation() {
        let cl = WordClassifier::new();
        assert_eq!(cl.classify(0x2019), CharClass::Punctuation); // ’
        assert_eq!(cl.classify(0x2014), CharClass::Punctuation); // —
        assert_eq!(cl.classify(0x2026), CharClass::Punctuation); // …
        assert_eq!(cl.classify(0x00BB), CharClass::Punctuation); // »
    }

    #[test]
    fn whitespace_units() {
        let cl = WordClassifier::new();
        assert_eq!(cl.classify(unit(' ')), CharClass::Whitespace);
        assert_eq!(cl.classify(unit('\t')), CharClass::Whitespace);
        assert_eq!(cl.classify(unit('\n')), CharClass::Whitespace);
        assert_eq!(cl.classify(0x00A0), CharClass::Whitespace); // NBSP
        assert_eq!(cl.classify(0x3000), CharClass::Whitespace); // ideographic
    }

    #[test]
    fn nul_is_unknown() {
        // The segmenter special-cases the NUL sentinel; the classifier
        // itself does not know about it.
        let cl = WordClassifier::new();
        assert_eq!(cl.classify(0), CharClass::Unknown);
    }

    #[test]
    fn surrogates_follow_policy() {
        let cl = WordClassifier::new();
        assert_eq!(cl.classify(0xD83D), CharClass::Letter);
        assert_eq!(cl.classify(0xDE00), CharClass::Letter);

        let strict = WordClassifier::new().with_surrogate_letters(false);
        assert_eq!(strict.classify(0xD83D), CharClass::Unknown);
    }

    #[test]
    fn apostrophe_variants() {
        assert!(is_word_apostrophe(0x27));
        assert!(is_word_apostrophe(0x2019));
        assert!(!is_word_apostrophe(0x60)); // backtick
        assert!(!is_word_apostrophe(0x2018)); // left single quote
    }

    #[test]
    fn separator_helper() {
        let cl = WordClassifier::new();
        assert!(cl.is_separator(unit(' ')));
        assert!(cl.is_separator(unit('.')));
        assert!(!cl.is_separator(unit('a')));
        assert!(!cl.is_separator(unit('7')));
    }
}
