// Session: top-level integration point for host applications.
//
// Owns one backend and one classification policy, and exposes the full
// host-facing operation set: dictionary management, single-word checks,
// range scans over UTF-16 buffers, corrections, and the session-local
// accept/reject overlays.

use std::path::Path;

use ortho_core::character::WordClassifier;
use ortho_core::enums::BackendKind;
use ortho_core::span::MisspelledRange;

use crate::backend::SpellcheckBackend;
use crate::checker::check_spelling;
use crate::factory::create_backend;

/// Error type for session construction failures.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The dictionary bytes did not parse as a serialized wordlist.
    #[error("invalid dictionary data")]
    InvalidDictionary,
}

/// A spellchecking session bound to one backend.
///
/// Not `Sync`; hosts that check from several threads give each thread its
/// own session over the same dictionary bytes.
pub struct Session {
    backend: Box<dyn SpellcheckBackend>,
    classifier: WordClassifier,
    max_suggestions: usize,
}

impl Session {
    /// Create a session over the platform-default backend, with no
    /// dictionary loaded yet.
    pub fn new() -> Self {
        Self::with_backend(create_backend())
    }

    /// Create a session over an explicit backend.
    pub fn with_backend(backend: Box<dyn SpellcheckBackend>) -> Self {
        Self {
            backend,
            classifier: WordClassifier::new(),
            max_suggestions: 5,
        }
    }

    /// Create a session with a dictionary already loaded from bytes.
    pub fn from_dictionary_bytes(bytes: &[u8]) -> Result<Self, SessionError> {
        let mut session = Self::new();
        if !session.backend.set_dictionary_from_bytes(bytes) {
            return Err(SessionError::InvalidDictionary);
        }
        Ok(session)
    }

    // -- Dictionary management ------------------------------------------------

    /// Select a dictionary by language tag. Returns whether a dictionary
    /// is active afterwards.
    pub fn set_dictionary(&mut self, language: &str) -> bool {
        self.backend.set_dictionary(language)
    }

    /// Load a dictionary from serialized wordlist bytes.
    pub fn set_dictionary_from_bytes(&mut self, bytes: &[u8]) -> bool {
        self.backend.set_dictionary_from_bytes(bytes)
    }

    /// Language tags of the dictionaries found under `search_path`.
    pub fn available_dictionaries(&self, search_path: &Path) -> Vec<String> {
        self.backend.available_dictionaries(search_path)
    }

    // -- Checking -------------------------------------------------------------

    /// Check a single UTF-8 word.
    pub fn is_misspelled(&self, word: &str) -> bool {
        self.backend.is_misspelled(word)
    }

    /// Scan a UTF-16 buffer and return the misspelled ranges, in order.
    pub fn check_spelling(&self, text: &[u16]) -> Vec<MisspelledRange> {
        check_spelling(text, Some(self.backend.as_ref()), &self.classifier)
    }

    /// Convenience wrapper that transcodes a `&str` before scanning.
    /// Offsets in the result are still UTF-16 code-unit indices.
    pub fn check_spelling_str(&self, text: &str) -> Vec<MisspelledRange> {
        let units: Vec<u16> = text.encode_utf16().collect();
        self.check_spelling(&units)
    }

    /// Ranked corrections for a misspelled word, capped at the session's
    /// suggestion limit.
    pub fn corrections_for_misspelling(&self, word: &str) -> Vec<String> {
        let mut corrections = self.backend.corrections_for_misspelling(word);
        corrections.truncate(self.max_suggestions);
        corrections
    }

    // -- Overlays -------------------------------------------------------------

    /// Accept `word` for the rest of this session.
    pub fn add(&mut self, word: &str) {
        self.backend.add(word);
    }

    /// Reject `word` for the rest of this session.
    pub fn remove(&mut self, word: &str) {
        self.backend.remove(word);
    }

    // -- Introspection and options --------------------------------------------

    /// Which backend kind is active.
    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    /// Set the maximum number of corrections to return.
    pub fn set_max_suggestions(&mut self, value: usize) {
        self.max_suggestions = value;
    }

    /// Replace the classification policy for subsequent scans.
    pub fn set_classifier(&mut self, classifier: WordClassifier) {
        self.classifier = classifier;
    }

    /// Return the crate version (from Cargo.toml).
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
