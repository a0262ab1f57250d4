// Bounded UTF-16 to UTF-8 transcoding.
//
// Backends consume UTF-8; the host hands us UTF-16. Each candidate word is
// converted into a fixed-capacity scratch buffer that is reused across every
// word of one scan, so the steady state allocates nothing. A word that does
// not fit, or that contains an unpaired surrogate, fails the conversion and
// the caller skips it -- truncating would mis-attribute ranges.

/// Maximum accepted word length in UTF-16 code units. Longer words are
/// never spell-checked.
pub const MAX_WORD_UTF16_UNITS: usize = 128;

/// Scratch capacity in bytes. Sized for the common case of one- and
/// two-byte UTF-8 sequences; words dense in three-byte characters may
/// exceed it and are skipped like overlong words.
pub const MAX_WORD_UTF8_BYTES: usize = 2 * MAX_WORD_UTF16_UNITS;

/// Reusable fixed-capacity UTF-8 buffer for one segmentation pass.
///
/// Not shared across threads; each concurrent scan owns its own scratch.
pub struct Utf8Scratch {
    buf: [u8; MAX_WORD_UTF8_BYTES],
    len: usize,
}

impl Utf8Scratch {
    pub fn new() -> Self {
        Self {
            buf: [0; MAX_WORD_UTF8_BYTES],
            len: 0,
        }
    }

    /// View the current contents as a string slice.
    ///
    /// Only whole `char`s are ever written, so the contents are always
    /// valid UTF-8; the fallback is unreachable in practice.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for Utf8Scratch {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert one word from UTF-16 code units into the scratch buffer.
///
/// Returns `false` -- leaving the scratch empty -- when the source exceeds
/// [`MAX_WORD_UTF16_UNITS`], contains an unpaired surrogate, or would
/// overflow [`MAX_WORD_UTF8_BYTES`]. The word must then be skipped, not
/// truncated.
pub fn transcode_utf16_to_utf8(src: &[u16], dst: &mut Utf8Scratch) -> bool {
    dst.clear();
    if src.len() > MAX_WORD_UTF16_UNITS {
        return false;
    }

    for decoded in char::decode_utf16(src.iter().copied()) {
        let Ok(ch) = decoded else {
            dst.clear();
            return false;
        };
        let mut utf8 = [0u8; 4];
        let encoded = ch.encode_utf8(&mut utf8).len();
        if dst.len + encoded > MAX_WORD_UTF8_BYTES {
            dst.clear();
            return false;
        }
        dst.buf[dst.len..dst.len + encoded].copy_from_slice(&utf8[..encoded]);
        dst.len += encoded;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn ascii_word() {
        let mut scratch = Utf8Scratch::new();
        assert!(transcode_utf16_to_utf8(&utf16("hello"), &mut scratch));
        assert_eq!(scratch.as_str(), "hello");
        assert_eq!(scratch.len(), 5);
    }

    #[test]
    fn two_byte_characters() {
        let mut scratch = Utf8Scratch::new();
        assert!(transcode_utf16_to_utf8(&utf16("naïveté"), &mut scratch));
        assert_eq!(scratch.as_str(), "naïveté");
    }

    #[test]
    fn cyrillic_word() {
        let mut scratch = Utf8Scratch::new();
        assert!(transcode_utf16_to_utf8(&utf16("привет"), &mut scratch));
        assert_eq!(scratch.as_str(), "привет");
    }

    #[test]
    fn surrogate_pair_fits_capacity() {
        // One pair is two UTF-16 units and four UTF-8 bytes: exactly 2x.
        let mut scratch = Utf8Scratch::new();
        assert!(transcode_utf16_to_utf8(&utf16("a😀b"), &mut scratch));
        assert_eq!(scratch.as_str(), "a😀b");
    }

    #[test]
    fn lone_surrogate_fails() {
        let mut scratch = Utf8Scratch::new();
        assert!(!transcode_utf16_to_utf8(&[0x61, 0xD83D, 0x62], &mut scratch));
        assert!(scratch.is_empty());
    }

    #[test]
    fn overlong_source_fails() {
        let src = vec![0x61u16; MAX_WORD_UTF16_UNITS + 1];
        let mut scratch = Utf8Scratch::new();
        assert!(!transcode_utf16_to_utf8(&src, &mut scratch));
        assert!(scratch.is_empty());
    }

    #[test]
    fn max_length_ascii_fits() {
        let src = vec![0x61u16; MAX_WORD_UTF16_UNITS];
        let mut scratch = Utf8Scratch::new();
        assert!(transcode_utf16_to_utf8(&src, &mut scratch));
        assert_eq!(scratch.len(), MAX_WORD_UTF16_UNITS);
    }

    #[test]
    fn three_byte_dense_word_overflows() {
        // 128 units of U+20AC each encode to three bytes: 384 > 256.
        let src = vec![0x20ACu16; MAX_WORD_UTF16_UNITS];
        let mut scratch = Utf8Scratch::new();
        assert!(!transcode_utf16_to_utf8(&src, &mut scratch));
        assert!(scratch.is_empty());
    }

    #[test]
    fn scratch_is_reusable_across_words() {
        let mut scratch = Utf8Scratch::new();
        assert!(transcode_utf16_to_utf8(&utf16("first"), &mut scratch));
        assert_eq!(scratch.as_str(), "first");
        assert!(transcode_utf16_to_utf8(&utf16("no"), &mut scratch));
        assert_eq!(scratch.as_str(), "no");
    }

    #[test]
    fn failure_clears_previous_contents() {
        let mut scratch = Utf8Scratch::new();
        assert!(transcode_utf16_to_utf8(&utf16("stale"), &mut scratch));
        assert!(!transcode_utf16_to_utf8(&[0xDC00], &mut scratch));
        assert_eq!(scratch.as_str(), "");
    }

    #[test]
    fn round_trip_preserves_code_units() {
        for word in ["hello", "don't", "grüße", "ĝustas", "ψυχή"] {
            let units = utf16(word);
            let mut scratch = Utf8Scratch::new();
            assert!(transcode_utf16_to_utf8(&units, &mut scratch));
            let back: Vec<u16> = scratch.as_str().encode_utf16().collect();
            assert_eq!(back, units, "{word}");
        }
    }

    #[test]
    fn empty_input_is_trivially_ok() {
        let mut scratch = Utf8Scratch::new();
        assert!(transcode_utf16_to_utf8(&[], &mut scratch));
        assert_eq!(scratch.as_str(), "");
    }
}
