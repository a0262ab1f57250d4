// ortho-spell: Check spelling of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word is
// correctly spelled:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//
// Usage:
//   ortho-spell [-d DICT_PATH] [-l LANGUAGE] [OPTIONS]

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = ortho_cli::parse_option(&args, "--dict-path", "-d");
    let (language, args) = ortho_cli::parse_option(&args, "--language", "-l");

    if ortho_cli::wants_help(&args) {
        println!("ortho-spell: Check spelling of words from stdin.");
        println!();
        println!("Usage: ortho-spell [-d DICT_PATH] [-l LANGUAGE] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Directory containing <language>.dict");
        println!("  -l, --language LANG    Dictionary language (default en_US)");
        println!("  -s, --suggest          Also print corrections for misspelled words");
        println!("  -h, --help             Print this help");
        return;
    }

    let show_corrections = args.iter().any(|a| a == "-s" || a == "--suggest");

    let session = ortho_cli::load_session(dict_path.as_deref(), language.as_deref())
        .unwrap_or_else(|e| ortho_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        if session.is_misspelled(word) {
            let _ = writeln!(out, "W: {word}");
            if show_corrections {
                for correction in session.corrections_for_misspelling(word) {
                    let _ = writeln!(out, "S: {correction}");
                }
            }
        } else {
            let _ = writeln!(out, "C: {word}");
        }
    }
}
