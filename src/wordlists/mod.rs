//! Bundled dictionary data
//!
//! Provides the embedded word list, its compiled graph, and word list file loading.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY_GRAPH, WORDS, WORDS_COUNT};
