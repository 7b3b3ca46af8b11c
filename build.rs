//! Build script to generate the embedded dictionary
//!
//! Reads `data/words.txt`, normalizes it (trimmed, lower-case, sorted, unique)
//! and writes it out as a const array.

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

const WORD_LIST: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let content =
        fs::read_to_string(WORD_LIST).unwrap_or_else(|e| panic!("Failed to read {WORD_LIST}: {e}"));

    let words: BTreeSet<String> = content
        .lines()
        .map(|line| line.trim().to_ascii_lowercase())
        .filter(|word| !word.is_empty())
        .inspect(|word| {
            assert!(
                word.bytes().all(|b| b.is_ascii_lowercase()),
                "{WORD_LIST}: '{word}' is not a plain word"
            );
        })
        .collect();

    write_words(&Path::new(&out_dir).join("words.rs"), &words)
        .unwrap_or_else(|e| panic!("Failed to write word list: {e}"));

    println!("cargo:rerun-if-changed={WORD_LIST}");
}

fn write_words(path: &Path, words: &BTreeSet<String>) -> std::io::Result<()> {
    let mut out = BufWriter::new(fs::File::create(path)?);

    writeln!(out, "// Generated from {WORD_LIST}")?;
    writeln!(out)?;
    writeln!(out, "/// Default dictionary, sorted, one lower-case word per entry")?;
    writeln!(out, "pub const WORDS: &[&str] = &[")?;
    for word in words {
        writeln!(out, "    {word:?},")?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;
    writeln!(out, "/// Number of words in WORDS")?;
    writeln!(out, "pub const WORDS_COUNT: usize = {};", words.len())?;
    out.flush()
}
