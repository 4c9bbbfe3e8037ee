//! Serialized dictionary format
//!
//! ```text
//! [0!];[1] 1:0;[2] 0:1 1:0;
//! ```
//!
//! Each record is `[<id>]` or `[<id>!]` (terminal), then zero or more edges written
//! ` <slot>:<child id>` where slot `0` is `a`, then `;`. A record may only reference
//! ids defined by earlier records, and the last record is the root. Whitespace between
//! records is ignored.

use super::{Dictionary, DictionaryError, NodeData};
use crate::core::ALPHABET_SIZE;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

impl Dictionary {
    /// Parse the serialized form
    ///
    /// # Errors
    /// Returns `DictionaryError::Format` for a malformed record,
    /// `DictionaryError::Reference` for an edge to an id not yet defined, and
    /// `DictionaryError::Empty` if there are no records.
    ///
    /// # Examples
    /// ```
    /// use wordle_cheat::dictionary::Dictionary;
    ///
    /// // "ab" and "b"
    /// let dict = Dictionary::parse("[0!];[1] 1:0;[2] 0:1 1:0;").unwrap();
    /// assert!(dict.contains("ab"));
    /// assert!(dict.contains("b"));
    /// assert!(!dict.contains("a"));
    /// ```
    pub fn parse(source: &str) -> Result<Self, DictionaryError> {
        let start = Instant::now();
        let mut nodes = Vec::new();
        let mut ids: FxHashMap<u32, u32> = FxHashMap::default();
        let mut rest = source.trim_start();
        let mut record = 0;

        while !rest.is_empty() {
            record += 1;
            let Some((text, tail)) = rest.split_once(';') else {
                return Err(DictionaryError::format(record, "missing ';' terminator"));
            };
            rest = tail.trim_start();

            let (id, node) = parse_record(text, record, &ids)?;
            let index = u32::try_from(nodes.len())
                .map_err(|_| DictionaryError::format(record, "too many nodes"))?;
            if ids.insert(id, index).is_some() {
                return Err(DictionaryError::format(
                    record,
                    format!("node {id} is defined twice"),
                ));
            }
            nodes.push(node);
        }

        let dictionary = Self::from_nodes(nodes).ok_or(DictionaryError::Empty)?;
        tracing::debug!(
            nodes = dictionary.node_count(),
            elapsed_us = start.elapsed().as_micros(),
            "parsed dictionary"
        );
        Ok(dictionary)
    }

    /// Read and parse a serialized dictionary file
    ///
    /// # Errors
    /// Returns `DictionaryError::Io` if the file cannot be read, otherwise any error
    /// from [`Dictionary::parse`].
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }
}

impl FromStr for Dictionary {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse one record, without its `;`
fn parse_record(
    text: &str,
    record: usize,
    ids: &FxHashMap<u32, u32>,
) -> Result<(u32, NodeData), DictionaryError> {
    let body = text
        .strip_prefix('[')
        .ok_or_else(|| DictionaryError::format(record, "expected '['"))?;
    let (header, edges) = body
        .split_once(']')
        .ok_or_else(|| DictionaryError::format(record, "expected ']'"))?;
    let (id, terminal) = match header.strip_suffix('!') {
        Some(id) => (id, true),
        None => (header, false),
    };
    let id = parse_number(id, record)?;

    let mut children = [None; ALPHABET_SIZE];
    if !edges.is_empty() {
        let edges = edges
            .strip_prefix(' ')
            .ok_or_else(|| DictionaryError::format(record, "expected ' ' before edges"))?;
        for edge in edges.split(' ') {
            let (slot, child) = edge.split_once(':').ok_or_else(|| {
                DictionaryError::format(record, format!("expected <slot>:<id>, got {edge:?}"))
            })?;
            let slot = parse_number(slot, record)? as usize;
            if slot >= ALPHABET_SIZE {
                return Err(DictionaryError::format(
                    record,
                    format!("letter slot {slot} out of range"),
                ));
            }
            let child = parse_number(child, record)?;
            let &index = ids
                .get(&child)
                .ok_or(DictionaryError::Reference { record, id: child })?;
            if children[slot].replace(index).is_some() {
                return Err(DictionaryError::format(
                    record,
                    format!("letter slot {slot} has two edges"),
                ));
            }
        }
    }

    Ok((id, NodeData::new(terminal, children)))
}

fn parse_number(text: &str, record: usize) -> Result<u32, DictionaryError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DictionaryError::format(
            record,
            format!("expected a number, got {text:?}"),
        ));
    }
    text.parse()
        .map_err(|_| DictionaryError::format(record, format!("number {text} is too large")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_error(source: &str) -> (usize, String) {
        match Dictionary::parse(source) {
            Err(DictionaryError::Format { record, reason }) => (record, reason),
            other => panic!("expected a format error, got {other:?}"),
        }
    }

    #[test]
    fn parse_single_terminal_node() {
        let dict = Dictionary::parse("[7!];").unwrap();
        assert_eq!(dict.node_count(), 1);
        assert!(dict.root().is_terminal());
        assert!(dict.contains(""));
    }

    #[test]
    fn last_record_is_root() {
        // "[1]" is defined last even though "[2]" points at the terminal node too
        let dict = Dictionary::parse("[0!];[2] 2:0;[1] 0:0;").unwrap();
        assert!(dict.contains("a"));
        assert!(!dict.contains("c"));
    }

    #[test]
    fn ids_need_not_be_arena_indices() {
        let dict = Dictionary::parse("[40!];[12] 19:40 4:40;[3] 0:12;").unwrap();
        assert!(dict.contains("at"));
        assert!(dict.contains("ae"));
        assert!(!dict.contains("a"));
    }

    #[test]
    fn whitespace_between_records_is_ignored() {
        let dict = Dictionary::parse("[0!];\n[1] 1:0;\n[2] 0:1 1:0;\n").unwrap();
        assert_eq!(dict.words(), ["ab", "b"]);
    }

    #[test]
    fn forward_reference_is_rejected() {
        match Dictionary::parse("[0] 0:1;[1!];") {
            Err(DictionaryError::Reference { record, id }) => {
                assert_eq!((record, id), (1, 1));
            }
            other => panic!("expected a reference error, got {other:?}"),
        }
    }

    #[test]
    fn empty_source_is_rejected() {
        assert!(matches!(Dictionary::parse(""), Err(DictionaryError::Empty)));
        assert!(matches!(Dictionary::parse(" \n"), Err(DictionaryError::Empty)));
    }

    #[test]
    fn malformed_records() {
        assert_eq!(format_error("[0!]").0, 1);
        assert_eq!(format_error("[0!];0!];").0, 2);
        assert_eq!(format_error("[0!];[1 0:0;").0, 2);
        assert_eq!(format_error("[];").0, 1);
        assert_eq!(format_error("[a];").0, 1);
        assert_eq!(format_error("[0!];[1]0:0;").0, 2);
        assert_eq!(format_error("[0!];[1] 0:0  1:0;").0, 2);
        assert_eq!(format_error("[0!];[1] 0-0;").0, 2);
        assert_eq!(format_error("[0!];[1] ;").0, 2);
        assert_eq!(format_error("[0!];[1] -1:0;").0, 2);
        assert_eq!(format_error("[99999999999];").0, 1);
    }

    #[test]
    fn slot_out_of_range() {
        let (record, reason) = format_error("[0!];[1] 26:0;");
        assert_eq!(record, 2);
        assert!(reason.contains("out of range"));
    }

    #[test]
    fn duplicate_definitions_and_edges() {
        let (_, reason) = format_error("[0!];[0];");
        assert!(reason.contains("defined twice"));

        let (_, reason) = format_error("[0!];[1!];[2] 3:0 3:1;");
        assert!(reason.contains("two edges"));
    }

    #[test]
    fn round_trips_through_display() {
        let dict = Dictionary::from_words(["bake", "cake", "cakes", "lake", "make"]).unwrap();
        let reparsed = Dictionary::parse(&dict.to_string()).unwrap();
        assert_eq!(reparsed, dict);
        assert_eq!(reparsed.words(), dict.words());
    }

    #[test]
    fn from_str_matches_parse() {
        let dict: Dictionary = "[0!];[1] 0:0;".parse().unwrap();
        assert!(dict.contains("a"));
    }
}
