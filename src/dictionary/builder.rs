//! Compile sorted word lists into a minimal word graph
//!
//! Incremental construction for sorted input: after each word, the part of the
//! previous word's path that can no longer change is minimized by replacing each node
//! with an already-registered equivalent (same terminal flag, same children), if any.

use super::{BuildError, Dictionary, NodeData};
use crate::core::{ALPHABET_SIZE, letter_slot};
use rustc_hash::FxHashMap;
use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
struct Draft {
    terminal: bool,
    children: [Option<usize>; ALPHABET_SIZE],
}

/// Builds a [`Dictionary`] from words inserted in ascending order
///
/// # Examples
/// ```
/// use wordle_cheat::dictionary::DictionaryBuilder;
///
/// let mut builder = DictionaryBuilder::new();
/// for word in ["bake", "cake", "lake"] {
///     builder.insert(word).unwrap();
/// }
/// assert!(builder.insert("ache").is_err());
///
/// let dict = builder.build();
/// assert!(dict.contains("cake"));
/// assert!(!dict.contains("ache"));
/// ```
#[derive(Debug)]
pub struct DictionaryBuilder {
    drafts: Vec<Draft>,
    /// Path of the previous word not yet minimized, as (parent, slot, child)
    unchecked: Vec<(usize, usize, usize)>,
    minimized: FxHashMap<Draft, usize>,
    previous: Vec<u8>,
    words: usize,
}

impl Default for DictionaryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            drafts: vec![Draft::default()],
            unchecked: Vec::new(),
            minimized: FxHashMap::default(),
            previous: Vec::new(),
            words: 0,
        }
    }

    /// Number of distinct words inserted so far
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Add a word
    ///
    /// The word is lowercased first. Repeating the previous word is a no-op.
    ///
    /// # Errors
    /// Returns `BuildError::InvalidWord` for an empty word or one with characters other
    /// than ASCII letters, and `BuildError::Unsorted` if the word sorts before the
    /// previous one.
    pub fn insert(&mut self, word: &str) -> Result<(), BuildError> {
        let word = word.to_ascii_lowercase();
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(BuildError::InvalidWord(word));
        }
        let letters = word.as_bytes();

        if letters < self.previous.as_slice() {
            return Err(BuildError::Unsorted {
                previous: String::from_utf8_lossy(&self.previous).into_owned(),
                word,
            });
        }
        if letters == self.previous.as_slice() {
            return Ok(());
        }

        let common_prefix = letters
            .iter()
            .zip(&self.previous)
            .take_while(|(a, b)| a == b)
            .count();
        self.minimize(common_prefix);

        let mut node = self.unchecked.last().map_or(0, |&(_, _, child)| child);
        for &letter in &letters[common_prefix..] {
            let slot = letter_slot(letter).ok_or_else(|| BuildError::InvalidWord(word.clone()))?;
            let child = self.drafts.len();
            self.drafts.push(Draft::default());
            self.drafts[node].children[slot] = Some(child);
            self.unchecked.push((node, slot, child));
            node = child;
        }
        self.drafts[node].terminal = true;

        self.previous = letters.to_vec();
        self.words += 1;
        Ok(())
    }

    /// Finish the graph
    ///
    /// Unreachable drafts are dropped; the arena is laid out children-before-parents
    /// with the root last.
    #[must_use]
    pub fn build(mut self) -> Dictionary {
        let start = Instant::now();
        self.minimize(0);

        let mut placed = vec![None; self.drafts.len()];
        let mut nodes = Vec::new();
        self.place(0, &mut placed, &mut nodes);

        tracing::debug!(
            words = self.words,
            nodes = nodes.len(),
            elapsed_us = start.elapsed().as_micros(),
            "compiled dictionary"
        );
        Dictionary {
            root: nodes.len() - 1,
            nodes,
        }
    }

    fn minimize(&mut self, down_to: usize) {
        while self.unchecked.len() > down_to {
            let Some((parent, slot, child)) = self.unchecked.pop() else {
                break;
            };
            match self.minimized.get(&self.drafts[child]) {
                Some(&existing) => self.drafts[parent].children[slot] = Some(existing),
                None => {
                    self.minimized.insert(self.drafts[child].clone(), child);
                }
            }
        }
    }

    /// Post-order placement of a draft and everything below it
    fn place(&self, draft: usize, placed: &mut [Option<u32>], nodes: &mut Vec<NodeData>) -> u32 {
        if let Some(index) = placed[draft] {
            return index;
        }
        let mut children = [None; ALPHABET_SIZE];
        for (slot, child) in self.drafts[draft].children.iter().enumerate() {
            if let Some(child) = *child {
                children[slot] = Some(self.place(child, placed, nodes));
            }
        }
        let index = nodes.len() as u32;
        nodes.push(NodeData::new(self.drafts[draft].terminal, children));
        placed[draft] = Some(index);
        index
    }
}

impl Dictionary {
    /// Compile a dictionary from words in any order
    ///
    /// # Errors
    /// Returns `BuildError::InvalidWord` if any word is empty or has characters other
    /// than ASCII letters.
    pub fn from_words<I, S>(words: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_ascii_lowercase())
            .collect();
        words.sort_unstable();
        words.dedup();

        let mut builder = DictionaryBuilder::new();
        for word in &words {
            builder.insert(word)?;
        }
        Ok(builder.build())
    }
}
