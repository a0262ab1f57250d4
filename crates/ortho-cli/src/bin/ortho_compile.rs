// ortho-compile: Compile a plaintext wordlist into a dictionary file.
//
// Reads one word per line (blank lines and `#` comments skipped), lowercases
// and dedupes them, and writes the serialized dictionary.
//
// Usage:
//   ortho-compile WORDLIST.txt OUTPUT.dict

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if ortho_cli::wants_help(&args) || args.len() != 2 {
        println!("ortho-compile: Compile a plaintext wordlist into a dictionary file.");
        println!();
        println!("Usage: ortho-compile WORDLIST.txt OUTPUT.dict");
        println!();
        println!("The wordlist has one word per line; blank lines and lines");
        println!("starting with '#' are skipped. Words are lowercased and deduped.");
        if args.len() != 2 && !ortho_cli::wants_help(&args) {
            std::process::exit(1);
        }
        return;
    }

    let input = &args[0];
    let output = &args[1];

    let text = std::fs::read_to_string(input)
        .unwrap_or_else(|e| ortho_cli::fatal(&format!("failed to read {input}: {e}")));

    let bytes = ortho_cli::compile_wordlist(&text).unwrap_or_else(|e| ortho_cli::fatal(&e));

    std::fs::write(output, &bytes)
        .unwrap_or_else(|e| ortho_cli::fatal(&format!("failed to write {output}: {e}")));

    eprintln!("wrote {output} ({} bytes)", bytes.len());
}
