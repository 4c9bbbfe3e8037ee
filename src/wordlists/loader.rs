//! Word list loading utilities
//!
//! Word lists are plain text, one word per line. Blank lines and lines starting with
//! `#` are skipped.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Words are trimmed and lowercased; entries with anything but ASCII letters are
/// skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_cheat::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Extract words from word list text
///
/// # Examples
/// ```
/// use wordle_cheat::wordlists::loader::words_from_text;
///
/// let words = words_from_text("# fruit\nApple\n\npear\nit's\n");
/// assert_eq!(words, ["apple", "pear"]);
/// ```
#[must_use]
pub fn words_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| line.bytes().all(|b| b.is_ascii_alphabetic()))
        .map(str::to_ascii_lowercase)
        .collect()
}
