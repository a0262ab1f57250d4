// Range checking: segment, transcode, consult the backend.
//
// Ranges are reported in UTF-16 code-unit offsets into the original buffer,
// so the host can map them straight onto its own string representation.

use ortho_core::character::WordClassifier;
use ortho_core::span::MisspelledRange;

use crate::backend::SpellcheckBackend;
use crate::segment::Segmenter;
use crate::transcode::{Utf8Scratch, transcode_utf16_to_utf8};

/// Scan a UTF-16 buffer and collect the ranges of misspelled words.
///
/// Words that fail transcoding (overlong, lone surrogate) are skipped
/// rather than reported. Without a backend the result is empty.
pub fn check_spelling(
    text: &[u16],
    backend: Option<&dyn SpellcheckBackend>,
    classifier: &WordClassifier,
) -> Vec<MisspelledRange> {
    let Some(backend) = backend else {
        return Vec::new();
    };
    if text.is_empty() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut scratch = Utf8Scratch::new();
    for span in Segmenter::new(text, classifier) {
        if !transcode_utf16_to_utf8(&text[span.start..span.end], &mut scratch) {
            continue;
        }
        if backend.is_misspelled(scratch.as_str()) {
            ranges.push(MisspelledRange::from(span));
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::WordlistBackend;
    use crate::transcode::MAX_WORD_UTF16_UNITS;

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    fn english() -> WordlistBackend {
        let mut sorted = vec!["cheese", "don't", "hello", "is", "this", "world"];
        sorted.sort_unstable();
        let mut builder = fst::SetBuilder::memory();
        for word in sorted {
            builder.insert(word).unwrap();
        }
        let bytes = builder.into_inner().unwrap();
        let mut backend = WordlistBackend::new();
        assert!(backend.set_dictionary_from_bytes(&bytes));
        backend
    }

    fn check(text: &str, backend: &WordlistBackend) -> Vec<MisspelledRange> {
        let units = utf16(text);
        check_spelling(&units, Some(backend), &WordClassifier::new())
    }

    #[test]
    fn no_backend_means_no_ranges() {
        let units = utf16("zzzz qqqq");
        assert!(check_spelling(&units, None, &WordClassifier::new()).is_empty());
    }

    #[test]
    fn empty_text_means_no_ranges() {
        let backend = english();
        assert!(check("", &backend).is_empty());
    }

    #[test]
    fn clean_text_means_no_ranges() {
        let backend = english();
        assert!(check("hello world, this is cheese", &backend).is_empty());
    }

    #[test]
    fn misspelled_word_gets_utf16_range() {
        let backend = english();
        let ranges = check("hello wrold!", &backend);
        assert_eq!(ranges, vec![MisspelledRange { start: 6, end: 11 }]);
    }

    #[test]
    fn multiple_ranges_in_order() {
        let backend = english();
        let ranges = check("helol wrold", &backend);
        assert_eq!(
            ranges,
            vec![
                MisspelledRange { start: 0, end: 5 },
                MisspelledRange { start: 6, end: 11 },
            ]
        );
    }

    #[test]
    fn contraction_checked_as_one_word() {
        let backend = english();
        assert!(check("don't", &backend).is_empty());
        let ranges = check("dont't", &backend);
        assert_eq!(ranges, vec![MisspelledRange { start: 0, end: 6 }]);
    }

    #[test]
    fn added_word_stops_being_reported() {
        let mut backend = english();
        assert_eq!(check("hello wrold", &backend).len(), 1);
        backend.add("wrold");
        assert!(check("hello wrold", &backend).is_empty());
    }

    #[test]
    fn removed_word_starts_being_reported() {
        let mut backend = english();
        backend.remove("hello");
        let ranges = check("hello world", &backend);
        assert_eq!(ranges, vec![MisspelledRange { start: 0, end: 5 }]);
    }

    #[test]
    fn digit_glued_words_are_skipped() {
        let backend = english();
        assert!(check("wrold123 hello", &backend).is_empty());
    }

    #[test]
    fn overlong_word_is_skipped_not_reported() {
        let backend = english();
        let long = "z".repeat(MAX_WORD_UTF16_UNITS + 1);
        let text = format!("{long} wrold");
        let ranges = check(&text, &backend);
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].start, long.len() + 1);
    }

    #[test]
    fn lone_surrogate_word_is_skipped() {
        let backend = english();
        let mut units = utf16("a");
        units.push(0xD800);
        units.extend(utf16("b wrold"));
        let ranges = check_spelling(&units, Some(&backend), &WordClassifier::new());
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].end, units.len());
    }

    #[test]
    fn offsets_count_utf16_units_not_bytes() {
        // The first word is three Cyrillic letters: three UTF-16 units
        // but six UTF-8 bytes.
        let backend = english();
        let ranges = check("мир wrold", &backend);
        assert_eq!(
            ranges,
            vec![
                MisspelledRange { start: 0, end: 3 },
                MisspelledRange { start: 4, end: 9 },
            ]
        );
    }
}
