//! Candidate search
//!
//! Depth-first walk of the dictionary graph, one position per level. Only letters with
//! an edge out of the current node are tried, and a letter is only followed if every
//! rule accepts it. At the target length a word is kept if it ends on a terminal node
//! and every rule is satisfied.
//!
//! Each branch owns its node, prefix and rule states; extending a branch produces a new
//! one and leaves the parent untouched, so sibling branches never share anything
//! mutable and the top-level branches can run on separate threads.

use super::rule::RuleState;
use super::rules::RuleSet;
use crate::core::WORD_LENGTH;
use crate::dictionary::{Dictionary, Node};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::time::Instant;

/// Search options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Length of the words to find
    pub word_length: usize,
    /// Explore top-level letters on the rayon thread pool
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            word_length: WORD_LENGTH,
            parallel: false,
        }
    }
}

/// One partial word under exploration
#[derive(Debug, Clone)]
struct Branch<'d> {
    node: Node<'d>,
    word: Vec<u8>,
    states: Vec<RuleState>,
}

impl<'d> Branch<'d> {
    fn root(dictionary: &'d Dictionary, rules: &RuleSet) -> Self {
        Self {
            node: dictionary.root(),
            word: Vec::new(),
            states: rules.initial_states(),
        }
    }

    /// The branch one letter further down, if every rule accepts the letter there
    fn extend(&self, letter: u8, child: Node<'d>, rules: &RuleSet) -> Option<Self> {
        let states = rules.apply(letter, self.word.len(), &self.states)?;
        let mut word = Vec::with_capacity(self.word.len() + 1);
        word.extend_from_slice(&self.word);
        word.push(letter);
        Some(Self {
            node: child,
            word,
            states,
        })
    }
}

#[derive(Debug, Default)]
struct Found {
    words: BTreeSet<String>,
    visited: usize,
}

impl Found {
    fn merge(mut self, other: Self) -> Self {
        self.words.extend(other.words);
        self.visited += other.visited;
        self
    }
}

/// A configured search over one dictionary with one rule set
pub struct Search<'d, 'r> {
    dictionary: &'d Dictionary,
    rules: &'r RuleSet,
    word_length: usize,
}

impl<'d, 'r> Search<'d, 'r> {
    #[must_use]
    pub const fn new(dictionary: &'d Dictionary, rules: &'r RuleSet, word_length: usize) -> Self {
        Self {
            dictionary,
            rules,
            word_length,
        }
    }

    /// Run sequentially or in parallel according to `config`
    #[must_use]
    pub fn with_config(
        dictionary: &'d Dictionary,
        rules: &'r RuleSet,
        config: SearchConfig,
    ) -> Vec<String> {
        let search = Self::new(dictionary, rules, config.word_length);
        if config.parallel {
            search.par_run()
        } else {
            search.run()
        }
    }

    /// Every matching word, sorted and unique
    ///
    /// # Examples
    /// ```
    /// use wordle_cheat::core::Guess;
    /// use wordle_cheat::dictionary::Dictionary;
    /// use wordle_cheat::solver::{RuleSet, Search};
    ///
    /// let dict = Dictionary::from_words(["berth", "birth", "hertz", "earth"]).unwrap();
    /// let guess = Guess::parse("[b]irth").unwrap();
    /// let rules = RuleSet::derive([&guess]);
    /// assert!(Search::new(&dict, &rules, 5).run().is_empty());
    ///
    /// let guess = Guess::parse("b(e)rth").unwrap();
    /// let rules = RuleSet::derive([&guess]);
    /// assert!(Search::new(&dict, &rules, 5).run().is_empty());
    ///
    /// let guess = Guess::parse("[b](e)[r]xx").unwrap();
    /// let rules = RuleSet::derive([&guess]);
    /// assert!(Search::new(&dict, &rules, 5).run().is_empty());
    ///
    /// let guess = Guess::parse("xx[r][t][h]").unwrap();
    /// let rules = RuleSet::derive([&guess]);
    /// assert_eq!(Search::new(&dict, &rules, 5).run(), ["berth", "birth", "earth"]);
    /// ```
    #[must_use]
    pub fn run(&self) -> Vec<String> {
        let start = Instant::now();
        let mut found = Found::default();
        self.explore(Branch::root(self.dictionary, self.rules), &mut found);
        self.finish(found, start, false)
    }

    /// Same result as [`Search::run`], with each first letter explored on the rayon pool
    #[must_use]
    pub fn par_run(&self) -> Vec<String> {
        if self.word_length == 0 {
            return self.run();
        }
        let start = Instant::now();
        let root = Branch::root(self.dictionary, self.rules);
        let edges: Vec<(u8, Node<'d>)> = root.node.edges().collect();

        let mut found = edges
            .into_par_iter()
            .map(|(letter, child)| {
                let mut found = Found::default();
                if let Some(branch) = root.extend(letter, child, self.rules) {
                    self.explore(branch, &mut found);
                }
                found
            })
            .reduce(Found::default, Found::merge);
        found.visited += 1;

        self.finish(found, start, true)
    }

    fn explore(&self, branch: Branch<'d>, found: &mut Found) {
        found.visited += 1;
        if branch.word.len() == self.word_length {
            if branch.node.is_terminal() && self.rules.is_satisfied(&branch.states) {
                found
                    .words
                    .insert(branch.word.iter().map(|&l| char::from(l)).collect());
            }
            return;
        }
        for (letter, child) in branch.node.edges() {
            if let Some(next) = branch.extend(letter, child, self.rules) {
                self.explore(next, found);
            }
        }
    }

    fn finish(&self, found: Found, start: Instant, parallel: bool) -> Vec<String> {
        tracing::debug!(
            rules = self.rules.len(),
            word_length = self.word_length,
            parallel,
            visited = found.visited,
            matches = found.words.len(),
            elapsed_us = start.elapsed().as_micros(),
            "search finished"
        );
        found.words.into_iter().collect()
    }
}
