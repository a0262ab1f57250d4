// Spellcheck backend capability.
//
// The checker and session code talk to a backend exclusively through this
// trait, so host adapters can swap implementations without touching the
// scanning pipeline. All word arguments are UTF-8; the UTF-16 boundary is
// handled one layer up.

use std::path::Path;

use ortho_core::enums::BackendKind;

pub mod wordlist;

pub use wordlist::WordlistBackend;

/// A pluggable spellchecking engine.
///
/// Words handed to a backend are single segmented words, never full
/// sentences. Session-local `add`/`remove` overlays shadow the loaded
/// dictionary and are dropped whenever a new dictionary is set.
pub trait SpellcheckBackend {
    /// Select a dictionary by language tag.
    ///
    /// Returns `true` if a dictionary for `language` was activated. A
    /// `false` return leaves the backend without an active dictionary,
    /// and any previous overlays are cleared either way.
    fn set_dictionary(&mut self, language: &str) -> bool;

    /// Load a dictionary from an in-memory serialized wordlist.
    ///
    /// Returns `false` and deactivates the current dictionary when the
    /// bytes do not parse.
    fn set_dictionary_from_bytes(&mut self, bytes: &[u8]) -> bool;

    /// Whether `word` is misspelled under the active dictionary.
    ///
    /// Without an active dictionary nothing is misspelled.
    fn is_misspelled(&self, word: &str) -> bool;

    /// Ranked correction candidates for a misspelled word.
    fn corrections_for_misspelling(&self, word: &str) -> Vec<String>;

    /// Accept `word` for the rest of this session.
    fn add(&mut self, word: &str);

    /// Reject `word` for the rest of this session, even if the
    /// dictionary contains it.
    fn remove(&mut self, word: &str);

    /// Language tags of the dictionaries found under `search_path`.
    fn available_dictionaries(&self, search_path: &Path) -> Vec<String>;

    /// Which concrete engine this is.
    fn kind(&self) -> BackendKind;
}
