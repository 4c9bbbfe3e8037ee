//! Compile command
//!
//! Turns a plain word list into the serialized dictionary graph read by `--dictionary`.

use crate::dictionary::{BuildError, Dictionary};
use crate::wordlists::loader::load_from_file;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Errors compiling a word list
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    Exists(PathBuf),

    #[error("failed to read word list {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("failed to write dictionary {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Summary of a compiled word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileResult {
    pub words: usize,
    pub nodes: usize,
    pub duration: Duration,
}

/// Compile the word list at `input` into a dictionary file at `output`
///
/// # Errors
///
/// Returns `CompileError::Exists` if `output` exists and `force` is not set, and
/// the matching variant if reading, building or writing fails.
pub fn compile_wordlist(
    input: &Path,
    output: &Path,
    force: bool,
) -> Result<CompileResult, CompileError> {
    if output.exists() && !force {
        return Err(CompileError::Exists(output.to_path_buf()));
    }
    let start = Instant::now();

    let mut words = load_from_file(input).map_err(|source| CompileError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    words.sort_unstable();
    words.dedup();
    let dictionary = Dictionary::from_words(&words)?;

    let write_error = |source| CompileError::Write {
        path: output.to_path_buf(),
        source,
    };
    let file = File::create(output).map_err(write_error)?;
    dictionary.write_to(BufWriter::new(file)).map_err(write_error)?;

    let result = CompileResult {
        words: words.len(),
        nodes: dictionary.node_count(),
        duration: start.elapsed(),
    };
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        words = result.words,
        nodes = result.nodes,
        "compiled word list"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wordle-cheat-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn compile_round_trips() {
        let dir = scratch("round-trip");
        let input = dir.join("words.txt");
        let output = dir.join("words.dag");
        fs::write(&input, "# test list\nMadam\nhadal\n\ngadjo\nmadam\n").unwrap();
        let _ = fs::remove_file(&output);

        let result = compile_wordlist(&input, &output, false).unwrap();
        assert_eq!(result.words, 3);

        let dict = Dictionary::read(&output).unwrap();
        assert_eq!(dict.words(), ["gadjo", "hadal", "madam"]);
        assert_eq!(dict.node_count(), result.nodes);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn compile_refuses_to_overwrite() {
        let dir = scratch("overwrite");
        let input = dir.join("words.txt");
        let output = dir.join("words.dag");
        fs::write(&input, "berth\nhertz\n").unwrap();
        fs::write(&output, "keep me").unwrap();

        assert!(matches!(
            compile_wordlist(&input, &output, false),
            Err(CompileError::Exists(_))
        ));
        assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");

        compile_wordlist(&input, &output, true).unwrap();
        assert!(Dictionary::read(&output).unwrap().contains("hertz"));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn compile_missing_input() {
        let dir = scratch("missing");
        let result = compile_wordlist(&dir.join("nope.txt"), &dir.join("out.dag"), false);
        assert!(matches!(result, Err(CompileError::Read { .. })));
        fs::remove_dir_all(dir).unwrap();
    }
}
