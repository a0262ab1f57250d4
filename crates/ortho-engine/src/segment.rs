// Word segmentation over UTF-16 buffers.
//
// A three-state scanner walks the code units once and yields half-open word
// spans. Apostrophes followed by a letter continue the word (contractions,
// possessives); a NUL unit acts as a terminator; anything the classifier
// calls Unknown poisons the current word so fragments of mixed tokens like
// "abc123" are never handed to the backend.

use ortho_core::character::{CharClass, WordClassifier, is_word_apostrophe};
use ortho_core::span::WordSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Separator,
    Word,
    Unknown,
}

/// Lazy iterator over the word spans of one UTF-16 buffer.
///
/// Finite and restartable per call; it does not stream across buffers.
/// If the buffer ends mid-word the trailing span is still emitted.
pub struct Segmenter<'a> {
    text: &'a [u16],
    classifier: &'a WordClassifier,
    pos: usize,
    state: State,
    word_start: usize,
    finished: bool,
}

impl<'a> Segmenter<'a> {
    pub fn new(text: &'a [u16], classifier: &'a WordClassifier) -> Self {
        Self {
            text,
            classifier,
            pos: 0,
            state: State::Separator,
            word_start: 0,
            finished: false,
        }
    }
}

impl Iterator for Segmenter<'_> {
    type Item = WordSpan;

    fn next(&mut self) -> Option<WordSpan> {
        if self.finished {
            return None;
        }

        while self.pos < self.text.len() {
            let i = self.pos;
            let c = self.text[i];

            match self.state {
                State::Separator => {
                    match self.classifier.classify(c) {
                        CharClass::Letter => {
                            self.word_start = i;
                            self.state = State::Word;
                        }
                        CharClass::Punctuation | CharClass::Whitespace => {}
                        CharClass::Unknown => self.state = State::Unknown,
                    }
                    self.pos += 1;
                }

                State::Word => {
                    // One-unit lookahead: an apostrophe between letters
                    // never terminates the word.
                    if is_word_apostrophe(c)
                        && self
                            .text
                            .get(i + 1)
                            .is_some_and(|&next| self.classifier.is_letter(next))
                    {
                        self.pos += 2;
                        continue;
                    }
                    if c == 0 || self.classifier.is_separator(c) {
                        self.state = State::Separator;
                        self.pos += 1;
                        return Some(WordSpan::new(self.word_start, i));
                    }
                    if !self.classifier.is_letter(c) {
                        // Digit or symbol glued to the word: discard it.
                        self.state = State::Unknown;
                    }
                    self.pos += 1;
                }

                State::Unknown => {
                    if self.classifier.is_separator(c) {
                        self.state = State::Separator;
                    }
                    self.pos += 1;
                }
            }
        }

        // End-of-input flush: a buffer without a trailing terminator still
        // yields its last word.
        self.finished = true;
        if self.state == State::Word {
            return Some(WordSpan::new(self.word_start, self.text.len()));
        }
        None
    }
}
