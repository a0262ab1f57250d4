// ortho-engine: UTF-16 spellcheck engine with pluggable backends.
//
// The pipeline is segment -> transcode -> backend lookup. Hosts hand in
// UTF-16 buffers and get back misspelled ranges in UTF-16 code-unit
// offsets; everything below the session boundary works in UTF-8.
//
// Modules:
// - `transcode`: bounded UTF-16 to UTF-8 conversion with a reusable scratch
// - `segment`: the three-state word scanner
// - `backend`: the `SpellcheckBackend` trait and the wordlist engine
// - `checker`: range scanning over whole buffers
// - `factory`: platform backend selection
// - `session`: the host-facing handle tying it all together

pub mod backend;
pub mod checker;
pub mod factory;
pub mod segment;
pub mod session;
pub mod transcode;

pub use backend::{SpellcheckBackend, WordlistBackend};
pub use checker::check_spelling;
pub use factory::{create_backend, create_backend_of_kind};
pub use session::{Session, SessionError};
