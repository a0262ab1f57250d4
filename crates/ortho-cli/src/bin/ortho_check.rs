// ortho-check: Report misspelled ranges in text from stdin.
//
// Reads the whole of stdin as one text, scans it, and prints one line per
// misspelled word:
//   START END word
//
// Offsets are UTF-16 code-unit indices, matching what editor hosts use to
// place squiggles.
//
// Usage:
//   ortho-check [-d DICT_PATH] [-l LANGUAGE]

use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = ortho_cli::parse_option(&args, "--dict-path", "-d");
    let (language, args) = ortho_cli::parse_option(&args, "--language", "-l");

    if ortho_cli::wants_help(&args) {
        println!("ortho-check: Report misspelled ranges in text from stdin.");
        println!();
        println!("Usage: ortho-check [-d DICT_PATH] [-l LANGUAGE]");
        println!();
        println!("Reads all of stdin, then prints one line per misspelled word:");
        println!("  START END word");
        println!("with offsets in UTF-16 code units.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Directory containing <language>.dict");
        println!("  -l, --language LANG    Dictionary language (default en_US)");
        println!("  -h, --help             Print this help");
        return;
    }

    let session = ortho_cli::load_session(dict_path.as_deref(), language.as_deref())
        .unwrap_or_else(|e| ortho_cli::fatal(&e));

    let mut text = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut text) {
        ortho_cli::fatal(&format!("failed to read stdin: {e}"));
    }

    let units: Vec<u16> = text.encode_utf16().collect();
    let ranges = session.check_spelling(&units);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for range in ranges {
        let word = String::from_utf16_lossy(&units[range.start..range.end]);
        let _ = writeln!(out, "{} {} {}", range.start, range.end, word);
    }
}
