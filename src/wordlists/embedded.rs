//! Embedded dictionary data
//!
//! The word list and its compiled graph are compiled into the binary. Only the graph
//! is loaded at run time; `WORDS` is the source list it was compiled from, kept as
//! reference data for tests that check the graph against it.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));

/// Serialized graph of [`WORDS`], in the dictionary load format
pub const DICTIONARY_GRAPH: &str = include_str!("../../data/dictionary.dag");
