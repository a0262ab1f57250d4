// FFI functions are inherently unsafe — callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// ortho-ffi: C-compatible FFI layer for the spellcheck Session.
//
// This crate exposes a stable C ABI that can be consumed by any host with
// C FFI support (Node.js native modules, Python/ctypes, C#/P-Invoke, etc.).
//
// Memory management rules:
// - Opaque `Session` pointer: created by `ortho_new` / `ortho_new_with_dictionary`,
//   freed by `ortho_free`.
// - Returned strings: caller must free with `ortho_free_str`.
// - Returned string arrays: caller must free with `ortho_free_str_array`.
// - Returned range arrays: caller must free with `ortho_free_ranges`.
// - Text buffers passed to `ortho_check_spelling` are UTF-16 code units with
//   an explicit length; all other input strings are UTF-8, null-terminated.

use std::ffi::{CStr, CString, c_char, c_int};
use std::path::Path;
use std::ptr;
use std::slice;

use ortho_core::enums::BackendKind;
use ortho_engine::session::Session;

// ── Session lifecycle ───────────────────────────────────────────

/// Create a new session with the platform-default backend and no
/// dictionary loaded.
///
/// Returns an opaque pointer; free with `ortho_free`.
#[unsafe(no_mangle)]
pub extern "C" fn ortho_new() -> *mut Session {
    Box::into_raw(Box::new(Session::new()))
}

/// Create a new session with a dictionary loaded from serialized wordlist
/// bytes.
///
/// Returns an opaque pointer on success, NULL on failure. On failure, if
/// `error_out` is non-NULL, it receives a heap-allocated error string that
/// the caller must free with `ortho_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ortho_new_with_dictionary(
    dict_data: *const u8,
    dict_len: usize,
    error_out: *mut *mut c_char,
) -> *mut Session {
    if dict_data.is_null() || dict_len == 0 {
        set_error(error_out, "dict_data is null or empty");
        return ptr::null_mut();
    }

    let bytes = unsafe { slice::from_raw_parts(dict_data, dict_len) };
    match Session::from_dictionary_bytes(bytes) {
        Ok(session) => Box::into_raw(Box::new(session)),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free a session created by `ortho_new` or `ortho_new_with_dictionary`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ortho_free(session: *mut Session) {
    if !session.is_null() {
        drop(unsafe { Box::from_raw(session) });
    }
}

// ── Dictionary management ───────────────────────────────────────

/// Select a dictionary by language tag.
/// Returns 1 if a dictionary is active afterwards, 0 if not, -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ortho_set_dictionary(
    session: *mut Session,
    language: *const c_char,
) -> c_int {
    let Some(session) = (unsafe { session.as_mut() }) else {
        return -1;
    };
    let Some(language) = cstr_to_str(language) else {
        return -1;
    };
    if session.set_dictionary(language) { 1 } else { 0 }
}

/// Load a dictionary from serialized wordlist bytes.
/// Returns 1 on success, 0 if the bytes did not parse, -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ortho_set_dictionary_from_bytes(
    session: *mut Session,
    dict_data: *const u8,
    dict_len: usize,
) -> c_int {
    let Some(session) = (unsafe { session.as_mut() }) else {
        return -1;
    };
    if dict_data.is_null() {
        return -1;
    }
    let bytes = unsafe { slice::from_raw_parts(dict_data, dict_len) };
    if session.set_dictionary_from_bytes(bytes) { 1 } else { 0 }
}

/// List the dictionaries available under a search path.
///
/// Returns a NULL-terminated array of C strings. Caller must free with
/// `ortho_free_str_array`. Returns NULL on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ortho_available_dictionaries(
    session: *const Session,
    search_path: *const c_char,
) -> *mut *mut c_char {
    let Some(session) = (unsafe { session.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(search_path) = cstr_to_str(search_path) else {
        return ptr::null_mut();
    };
    let tags = session.available_dictionaries(Path::new(search_path));
    strings_to_c_array(&tags)
}

// ── Spell checking ──────────────────────────────────────────────

/// Check whether a single UTF-8 word is misspelled.
/// Returns 1 for misspelled, 0 for correct, -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ortho_is_misspelled(
    session: *const Session,
    word: *const c_char,
) -> c_int {
    let Some(session) = (unsafe { session.as_ref() }) else {
        return -1;
    };
    let Some(word) = cstr_to_str(word) else {
        return -1;
    };
    if session.is_misspelled(word) { 1 } else { 0 }
}

/// Misspelled range in UTF-16 code-unit offsets, half-open.
#[repr(C)]
pub struct OrthoRange {
    pub start: usize,
    pub end: usize,
}

/// Range array returned by `ortho_check_spelling`.
#[repr(C)]
pub struct OrthoRangeArray {
    pub ranges: *mut OrthoRange,
    pub count: usize,
}

/// Scan a UTF-16 buffer and return the misspelled ranges in order.
///
/// `text` points at `text_len` UTF-16 code units; no terminator is
/// required. Returns an `OrthoRangeArray` that the caller must free with
/// `ortho_free_ranges`. Returns a struct with count=0 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ortho_check_spelling(
    session: *const Session,
    text: *const u16,
    text_len: usize,
) -> OrthoRangeArray {
    let empty = OrthoRangeArray {
        ranges: ptr::null_mut(),
        count: 0,
    };

    let Some(session) = (unsafe { session.as_ref() }) else {
        return empty;
    };
    if text.is_null() {
        return empty;
    }
    let units = unsafe { slice::from_raw_parts(text, text_len) };

    let found = session.check_spelling(units);
    let count = found.len();
    if count == 0 {
        return empty;
    }

    let mut c_ranges: Vec<OrthoRange> = found
        .iter()
        .map(|r| OrthoRange {
            start: r.start,
            end: r.end,
        })
        .collect();

    let ranges_ptr = c_ranges.as_mut_ptr();
    std::mem::forget(c_ranges);

    OrthoRangeArray {
        ranges: ranges_ptr,
        count,
    }
}

/// Free a range array returned by `ortho_check_spelling`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ortho_free_ranges(arr: OrthoRangeArray) {
    if arr.ranges.is_null() || arr.count == 0 {
        return;
    }
    drop(unsafe { Vec::from_raw_parts(arr.ranges, arr.count, arr.count) });
}

/// Ranked corrections for a misspelled word.
///
/// Returns a NULL-terminated array of C strings. Caller must free with
/// `ortho_free_str_array`. Returns NULL on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ortho_corrections(
    session: *const Session,
    word: *const c_char,
) -> *mut *mut c_char {
    let Some(session) = (unsafe { session.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(word) = cstr_to_str(word) else {
        return ptr::null_mut();
    };
    let corrections = session.corrections_for_misspelling(word);
    strings_to_c_array(&corrections)
}

// ── Session overlays ────────────────────────────────────────────

/// Accept a word for the rest of this session.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ortho_add(session: *mut Session, word: *const c_char) {
    if let Some(session) = unsafe { session.as_mut() } {
        if let Some(word) = cstr_to_str(word) {
            session.add(word);
        }
    }
}

/// Reject a word for the rest of this session.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ortho_remove(session: *mut Session, word: *const c_char) {
    if let Some(session) = unsafe { session.as_mut() } {
        if let Some(word) = cstr_to_str(word) {
            session.remove(word);
        }
    }
}

// ── Introspection and options ───────────────────────────────────

/// Return the wire code of the active backend, or -1 on error.
/// Codes: 0=wordlist, 1=macOS system, 2=Windows system.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ortho_backend_kind(session: *const Session) -> c_int {
    let Some(session) = (unsafe { session.as_ref() }) else {
        return -1;
    };
    kind_to_int(session.backend_kind())
}

/// Set the maximum number of corrections returned per word.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ortho_set_max_suggestions(session: *mut Session, value: c_int) {
    if let Some(session) = unsafe { session.as_mut() } {
        session.set_max_suggestions(value.max(0) as usize);
    }
}

/// Return the library version string.
///
/// The returned pointer is valid for the lifetime of the library (static).
/// Do NOT free this pointer.
#[unsafe(no_mangle)]
pub extern "C" fn ortho_version() -> *const c_char {
    static VERSION: std::sync::LazyLock<CString> =
        std::sync::LazyLock::new(|| CString::new(Session::get_version()).unwrap());
    VERSION.as_ptr()
}

/// Free a heap-allocated C string returned by ortho functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ortho_free_str(s: *mut c_char) {
    free_c_str(s);
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ortho_free_str_array(arr: *mut *mut c_char) {
    free_null_terminated_array(arr);
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = str_to_c(msg);
        }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn strings_to_c_array(strings: &[String]) -> *mut *mut c_char {
    let mut ptrs: Vec<*mut c_char> = strings.iter().map(|s| str_to_c(s)).collect();
    ptrs.push(ptr::null_mut()); // NULL terminator
    let ptr = ptrs.as_mut_ptr();
    std::mem::forget(ptrs);
    ptr
}

fn kind_to_int(kind: BackendKind) -> c_int {
    kind.code() as c_int
}

fn free_null_terminated_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut i = 0;
    loop {
        let p = unsafe { *arr.add(i) };
        if p.is_null() {
            break;
        }
        free_c_str(p);
        i += 1;
    }
    // Free the array itself — it was allocated as a Vec with capacity i+1
    drop(unsafe { Vec::from_raw_parts(arr, i + 1, i + 1) });
}
