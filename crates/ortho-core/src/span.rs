// Word span and misspelled range types.
//
// Both are half-open `[start, end)` index pairs into a UTF-16 code-unit
// buffer. A WordSpan is any tokenized word; a MisspelledRange is a word the
// active backend rejected. The distinction is kept in the type system so the
// checker cannot hand an unchecked span back to the host.

/// A contiguous run of code units classified as one word.
///
/// Offsets are UTF-16 code-unit indices into the buffer the span was
/// produced from, never UTF-8 byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan {
    /// Index of the first code unit of the word.
    pub start: usize,
    /// Index one past the last code unit of the word.
    pub end: usize,
}

impl WordSpan {
    /// Create a new span. `start < end` must hold for any emitted span.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "word span must be non-empty");
        Self { start, end }
    }

    /// Length of the span in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers zero code units.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A word span confirmed misspelled by the backend.
///
/// This is the host-facing result shape: `{start, end}` with
/// `0 <= start < end <= buffer length`, emitted in left-to-right order
/// without overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MisspelledRange {
    pub start: usize,
    pub end: usize,
}

impl From<WordSpan> for MisspelledRange {
    fn from(span: WordSpan) -> Self {
        Self {
            start: span.start,
            end: span.end,
        }
    }
}
