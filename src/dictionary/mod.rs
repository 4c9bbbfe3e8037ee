//! Word dictionary stored as a directed acyclic word graph
//!
//! Paths from the root spell words; nodes where a word may end are terminal. Words
//! that share a suffix share the nodes for it, so "-ight" or "-tion" exist once.
//!
//! All nodes live in one arena owned by the [`Dictionary`], and edges are arena
//! indices. The arena is laid out children-before-parents with the root last, which
//! is also the order of the serialized form (see [`Dictionary::parse`]).

mod builder;
mod error;
pub mod global;
mod parser;

pub use builder::DictionaryBuilder;
pub use error::{BuildError, DictionaryError, InitError};

use crate::core::{ALPHABET_SIZE, letter_slot, slot_letter};
use std::fmt;
use std::io;

/// Arena entry: terminal flag plus one optional child per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct NodeData {
    terminal: bool,
    children: [Option<u32>; ALPHABET_SIZE],
}

impl NodeData {
    pub(crate) const fn new(terminal: bool, children: [Option<u32>; ALPHABET_SIZE]) -> Self {
        Self { terminal, children }
    }
}

/// An immutable word graph
///
/// Built once (parsed or compiled) and only read afterwards, so a single instance can
/// be shared by any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    nodes: Vec<NodeData>,
    root: usize,
}

/// A node of a [`Dictionary`]
///
/// A cheap copyable handle; all traversal goes through it.
#[derive(Clone, Copy)]
pub struct Node<'d> {
    dictionary: &'d Dictionary,
    index: usize,
}

impl Dictionary {
    /// Wrap an arena whose last entry is the root
    pub(crate) fn from_nodes(nodes: Vec<NodeData>) -> Option<Self> {
        let root = nodes.len().checked_sub(1)?;
        Some(Self { nodes, root })
    }

    /// The root node; the empty prefix
    #[inline]
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        Node {
            dictionary: self,
            index: self.root,
        }
    }

    /// Number of nodes in the graph
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Walk `word` from the root
    ///
    /// Returns the node reached, or `None` if the walk runs off the graph.
    #[must_use]
    pub fn walk(&self, word: &str) -> Option<Node<'_>> {
        word.bytes().try_fold(self.root(), |node, letter| node.lookup(letter))
    }

    /// Whether `word` is in the dictionary (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use wordle_cheat::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["cat", "cats", "fact"]).unwrap();
    /// assert!(dict.contains("cat"));
    /// assert!(dict.contains("FACT"));
    /// assert!(!dict.contains("ca"));
    /// assert!(!dict.contains("fhqwhgads"));
    /// ```
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(Node::is_terminal)
    }

    /// Every word in the dictionary, in sorted order
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::new();
        let mut prefix = Vec::new();
        collect_words(self.root(), &mut prefix, &mut words);
        words
    }

    /// Write the serialized form of this dictionary
    ///
    /// Node ids are arena indices, so the output parses back to an equal dictionary.
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }

    fn node(&self, index: usize) -> &NodeData {
        &self.nodes[index]
    }
}

fn collect_words(node: Node<'_>, prefix: &mut Vec<u8>, words: &mut Vec<String>) {
    if node.is_terminal() {
        words.push(prefix.iter().map(|&l| char::from(l)).collect());
    }
    for (letter, child) in node.edges() {
        prefix.push(letter);
        collect_words(child, prefix, words);
        prefix.pop();
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, node) in self.nodes.iter().enumerate() {
            write!(f, "[{id}{}]", if node.terminal { "!" } else { "" })?;
            for (slot, child) in node.children.iter().enumerate() {
                if let Some(child) = child {
                    write!(f, " {slot}:{child}")?;
                }
            }
            f.write_str(";")?;
        }
        Ok(())
    }
}

impl<'d> Node<'d> {
    /// Arena index of this node
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Whether a word ends at this node
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.dictionary.node(self.index).terminal
    }

    /// Follow the edge for `letter` (case-insensitive)
    ///
    /// Returns `None` if there is no such edge or `letter` is not an ASCII letter.
    #[inline]
    #[must_use]
    pub fn lookup(self, letter: u8) -> Option<Self> {
        let slot = letter_slot(letter)?;
        let child = self.dictionary.node(self.index).children[slot]?;
        Some(Self {
            dictionary: self.dictionary,
            index: child as usize,
        })
    }

    /// Outgoing edges as `(letter, child)`, ascending by letter
    pub fn edges(self) -> impl Iterator<Item = (u8, Self)> + 'd {
        let dictionary = self.dictionary;
        dictionary
            .node(self.index)
            .children
            .iter()
            .enumerate()
            .filter_map(move |(slot, child)| {
                child.map(|child| {
                    (
                        slot_letter(slot),
                        Self {
                            dictionary,
                            index: child as usize,
                        },
                    )
                })
            })
    }

    /// Letters with an outgoing edge, ascending
    pub fn next_letters(self) -> impl Iterator<Item = u8> + 'd {
        self.edges().map(|(letter, _)| letter)
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.dictionary, other.dictionary) && self.index == other.index
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.next_letters().map(char::from).collect();
        f.debug_struct("Node")
            .field("index", &self.index)
            .field("terminal", &self.is_terminal())
            .field("next_letters", &letters)
            .finish()
    }
}
