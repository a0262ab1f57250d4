// ortho-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use ortho_engine::session::Session;

/// Serialized dictionary file extension.
const DICT_EXT: &str = "dict";

/// Dictionary language used when none is requested.
const DEFAULT_LANGUAGE: &str = "en_US";

/// Search for a dictionary file and create a Session around it.
///
/// Looks for `<language>.dict` in this order:
/// 1. `dict_path` argument (if provided)
/// 2. `ORTHO_DICT_PATH` environment variable
/// 3. `~/.ortho`
/// 4. `/usr/share/ortho`
/// 5. Current working directory
pub fn load_session(dict_path: Option<&str>, language: Option<&str>) -> Result<Session, String> {
    let language = language.unwrap_or(DEFAULT_LANGUAGE);
    let file_name = format!("{language}.{DICT_EXT}");
    let search_paths = build_search_paths(dict_path);

    for dir in &search_paths {
        let path = dir.join(&file_name);
        if path.is_file() {
            let bytes = std::fs::read(&path)
                .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
            return Session::from_dictionary_bytes(&bytes)
                .map_err(|e| format!("failed to load {}: {e}", path.display()));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        file_name,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search for dictionary files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }
    if let Ok(env_path) = std::env::var("ORTHO_DICT_PATH") {
        paths.push(PathBuf::from(env_path));
    }
    if let Some(home) = home_dir() {
        paths.push(home.join(".ortho"));
    }
    paths.push(PathBuf::from("/usr/share/ortho"));
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Compile a plaintext wordlist (one word per line, `#` comments) into
/// serialized dictionary bytes. Words are lowercased, sorted, and deduped.
pub fn compile_wordlist(text: &str) -> Result<Vec<u8>, String> {
    let mut words: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect();
    words.sort();
    words.dedup();

    let mut builder = fst::SetBuilder::memory();
    for word in &words {
        builder
            .insert(word)
            .map_err(|e| format!("failed to insert {word:?}: {e}"))?;
    }
    builder
        .into_inner()
        .map_err(|e| format!("failed to serialize wordlist: {e}"))
}

/// Parse one `--name=VALUE` / `--name VALUE` / `-x VALUE` option out of the
/// argument list.
///
/// Returns `(value, remaining_args)`.
pub fn parse_option(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let long_eq = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(v) = arg.strip_prefix(&long_eq) {
            value = Some(v.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_and_load_round_trip() {
        let bytes = compile_wordlist("Hello\nworld\n# comment\n\nWORLD\n").unwrap();
        let mut session = Session::new();
        assert!(session.set_dictionary_from_bytes(&bytes));
        assert!(!session.is_misspelled("hello"));
        assert!(!session.is_misspelled("World"));
        assert!(session.is_misspelled("comment"));
    }

    #[test]
    fn load_session_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let bytes = compile_wordlist("hello\nworld\n").unwrap();
        std::fs::write(dir.path().join("en_US.dict"), &bytes).unwrap();

        let session = load_session(dir.path().to_str(), None).unwrap();
        assert!(session.is_misspelled("wrold"));
        assert!(!session.is_misspelled("hello"));
    }

    #[test]
    fn load_session_honors_language() {
        let dir = tempfile::tempdir().unwrap();
        let bytes = compile_wordlist("bonjour\n").unwrap();
        std::fs::write(dir.path().join("fr_FR.dict"), &bytes).unwrap();

        assert!(load_session(dir.path().to_str(), Some("fr_FR")).is_ok());
        assert!(load_session(dir.path().to_str(), Some("de_DE")).is_err());
    }

    #[test]
    fn parse_option_forms() {
        let args: Vec<String> = ["--dict-path=/a", "rest"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let (value, remaining) = parse_option(&args, "--dict-path", "-d");
        assert_eq!(value.as_deref(), Some("/a"));
        assert_eq!(remaining, vec!["rest"]);

        let args: Vec<String> = ["-d", "/b", "rest"].iter().map(|s| s.to_string()).collect();
        let (value, remaining) = parse_option(&args, "--dict-path", "-d");
        assert_eq!(value.as_deref(), Some("/b"));
        assert_eq!(remaining, vec!["rest"]);

        let args: Vec<String> = ["rest"].iter().map(|s| s.to_string()).collect();
        let (value, remaining) = parse_option(&args, "--dict-path", "-d");
        assert!(value.is_none());
        assert_eq!(remaining, vec!["rest"]);
    }
}
