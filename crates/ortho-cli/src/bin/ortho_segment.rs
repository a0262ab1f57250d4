// ortho-segment: Dump the word spans of text from stdin.
//
// No dictionary needed; this is a debugging aid for the scanner. Each line
// of stdin is segmented separately and every word is printed as:
//   START END word
//
// Usage:
//   ortho-segment [--strict-surrogates]

use std::io::{self, BufRead, Write};

use ortho_core::character::WordClassifier;
use ortho_engine::segment::Segmenter;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if ortho_cli::wants_help(&args) {
        println!("ortho-segment: Dump the word spans of text from stdin.");
        println!();
        println!("Usage: ortho-segment [--strict-surrogates]");
        println!();
        println!("Each line of stdin is segmented separately. Prints:");
        println!("  START END word");
        println!("with offsets in UTF-16 code units.");
        println!();
        println!("Options:");
        println!("  --strict-surrogates    Treat surrogate halves as non-word units");
        println!("  -h, --help             Print this help");
        return;
    }

    let strict = args.iter().any(|a| a == "--strict-surrogates");
    let classifier = WordClassifier::new().with_surrogate_letters(!strict);

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
        let units: Vec<u16> = line.encode_utf16().collect();
        for span in Segmenter::new(&units, &classifier) {
            let word = String::from_utf16_lossy(&units[span.start..span.end]);
            let _ = writeln!(out, "{} {} {}", span.start, span.end, word);
        }
    }
}
