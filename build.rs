//! Build script to embed the dictionary and its named subsets
//!
//! Reads newline-separated word files, rejects malformed entries, and generates
//! Rust source with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const WORD_LENGTH: usize = 5;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let out_dir = Path::new(&out_dir);

    let lists = [
        ("data/words.txt", "words.rs", "WORDS", "Full guessable dictionary"),
        ("data/answers.txt", "answers.rs", "ANSWERS", "Answer words (subset of WORDS)"),
        (
            "data/difficult.txt",
            "difficult.rs",
            "DIFFICULT",
            "Words that are hard to evaluate (subset of WORDS)",
        ),
    ];

    for (input, output, const_name, doc_comment) in lists {
        generate_word_list(input, &out_dir.join(output), const_name, doc_comment);
        println!("cargo:rerun-if-changed={input}");
    }
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    for (line, word) in words.iter().enumerate() {
        assert!(
            word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase()),
            "{input_path}:{}: '{word}' is not a {WORD_LENGTH}-letter lowercase word",
            line + 1
        );
    }

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    let mut source = String::new();
    source.push_str("// Generated word list\n\n");
    source.push_str(&format!("/// {doc_comment}\n"));
    source.push_str(&format!("pub const {const_name}: &[&str] = &[\n"));
    for word in &words {
        source.push_str(&format!("    \"{word}\",\n"));
    }
    source.push_str("];\n\n");
    source.push_str(&format!("/// Number of words in {const_name}\n"));
    source.push_str(&format!(
        "pub const {const_name}_COUNT: usize = {};\n",
        words.len()
    ));

    output
        .write_all(source.as_bytes())
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}
