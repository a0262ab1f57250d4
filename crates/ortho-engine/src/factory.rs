// Backend selection.
//
// Hosts ask for "the" spellchecker and get whatever fits the platform. The
// system-engine kinds keep their wire codes reserved, but every platform
// currently resolves to the embedded wordlist engine.

use ortho_core::enums::BackendKind;

use crate::backend::{SpellcheckBackend, WordlistBackend};

/// Create the default backend for this platform.
pub fn create_backend() -> Box<dyn SpellcheckBackend> {
    Box::new(WordlistBackend::new())
}

/// Create a backend of a specific kind, if it is implemented.
pub fn create_backend_of_kind(kind: BackendKind) -> Option<Box<dyn SpellcheckBackend>> {
    match kind {
        BackendKind::Wordlist => Some(Box::new(WordlistBackend::new())),
        BackendKind::SystemMac | BackendKind::SystemWindows => None,
    }
}
