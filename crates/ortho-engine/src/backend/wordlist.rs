// Wordlist backend over a finite-state set dictionary.
//
// The dictionary is a serialized `fst::Set` of lowercased words, loaded from
// a byte buffer the host already owns. Lookups are case-insensitive.
// `add`/`remove` maintain small session-local overlays on top of the
// immutable set; they never mutate the dictionary itself.

use std::path::Path;

use fst::automaton::Str;
use fst::{Automaton, IntoStreamer, Set, Streamer};
use hashbrown::HashSet;

use ortho_core::enums::BackendKind;

use crate::backend::SpellcheckBackend;
use crate::transcode::MAX_WORD_UTF8_BYTES;

/// Corrections returned per misspelled word, after ranking.
const MAX_CORRECTIONS: usize = 10;

/// Candidates further than this from the misspelled word are discarded.
const MAX_EDIT_DISTANCE: usize = 2;

pub struct WordlistBackend {
    dictionary: Option<Set<Vec<u8>>>,
    added: HashSet<String>,
    removed: HashSet<String>,
}

impl WordlistBackend {
    pub fn new() -> Self {
        Self {
            dictionary: None,
            added: HashSet::new(),
            removed: HashSet::new(),
        }
    }

    fn clear_overlays(&mut self) {
        self.added.clear();
        self.removed.clear();
    }
}

impl Default for WordlistBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SpellcheckBackend for WordlistBackend {
    fn set_dictionary(&mut self, _language: &str) -> bool {
        // This backend has no dictionary search path of its own; the host
        // resolves language tags to buffers and calls
        // `set_dictionary_from_bytes`. A by-name request deactivates any
        // loaded dictionary so the caller notices the miss.
        self.dictionary = None;
        self.clear_overlays();
        false
    }

    fn set_dictionary_from_bytes(&mut self, bytes: &[u8]) -> bool {
        self.clear_overlays();
        match Set::new(bytes.to_vec()) {
            Ok(set) => {
                self.dictionary = Some(set);
                true
            }
            Err(_) => {
                self.dictionary = None;
                false
            }
        }
    }

    fn is_misspelled(&self, word: &str) -> bool {
        let Some(set) = &self.dictionary else {
            return false;
        };
        if word.is_empty() || word.len() > MAX_WORD_UTF8_BYTES {
            return false;
        }
        let lower = word.to_lowercase();
        if self.removed.contains(&lower) {
            return true;
        }
        if self.added.contains(&lower) {
            return false;
        }
        !set.contains(lower.as_bytes())
    }

    fn corrections_for_misspelling(&self, word: &str) -> Vec<String> {
        let Some(set) = &self.dictionary else {
            return Vec::new();
        };
        if word.is_empty() {
            return Vec::new();
        }
        let lower = word.to_lowercase();

        let mut ranked: Vec<(usize, String)> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut consider = |candidate: &str, ranked: &mut Vec<(usize, String)>| {
            if candidate == lower || self.removed.contains(candidate) {
                return;
            }
            if !seen.insert(candidate.to_string()) {
                return;
            }
            let distance = edit_distance(&lower, candidate);
            if distance <= MAX_EDIT_DISTANCE {
                ranked.push((distance, candidate.to_string()));
            }
        };

        // Scan the dictionary region sharing a prefix with the word,
        // retrying with shorter prefixes until something turns up.
        for prefix_len in [3usize, 2, 1] {
            let prefix: String = lower.chars().take(prefix_len).collect();
            if prefix.is_empty() {
                continue;
            }
            let mut stream = set.search(Str::new(&prefix).starts_with()).into_stream();
            while let Some(key) = stream.next() {
                if let Ok(candidate) = std::str::from_utf8(key) {
                    consider(candidate, &mut ranked);
                }
            }
            if !ranked.is_empty() {
                break;
            }
        }

        // Session-added words compete with dictionary words.
        for candidate in &self.added {
            consider(candidate, &mut ranked);
        }

        ranked.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        ranked.truncate(MAX_CORRECTIONS);
        ranked.into_iter().map(|(_, word)| word).collect()
    }

    fn add(&mut self, word: &str) {
        if self.dictionary.is_none() || word.is_empty() {
            return;
        }
        let lower = word.to_lowercase();
        self.removed.remove(&lower);
        self.added.insert(lower);
    }

    fn remove(&mut self, word: &str) {
        if self.dictionary.is_none() || word.is_empty() {
            return;
        }
        let lower = word.to_lowercase();
        self.added.remove(&lower);
        self.removed.insert(lower);
    }

    fn available_dictionaries(&self, search_path: &Path) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(search_path) else {
            return Vec::new();
        };
        let mut tags: Vec<String> = entries
            .flatten()
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "dict") {
                    path.file_stem()
                        .and_then(|stem| stem.to_str())
                        .map(str::to_string)
                } else {
                    None
                }
            })
            .collect();
        tags.sort();
        tags
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Wordlist
    }
}

/// Levenshtein distance over `char`s, two-row dynamic programming.
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(prev[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut prev, &mut current);
    }
    prev[b.len()]
}
