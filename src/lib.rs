//! Wordle Cheat
//!
//! Finds every dictionary word consistent with the feedback from a list of Wordle
//! guesses. The dictionary is a directed acyclic word graph, and the search walks it
//! once, pruning with rules derived from the guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_cheat::dictionary::global;
//! use wordle_cheat::solver::{Query, SearchConfig};
//!
//! let dictionary = global::init_embedded().unwrap();
//!
//! // [x] is the right letter in the right place, (x) the right letter elsewhere
//! let query = Query::parse(&["g(r)oup", "(r)ails", "(th)[r](e)e"], None).unwrap();
//! let words = query.solve(dictionary, SearchConfig::default()).unwrap();
//! assert_eq!(words, ["berth", "hertz"]);
//! ```

// Letters, feedback and guesses
pub mod core;

// Word graph
pub mod dictionary;

// Rule derivation and candidate search
pub mod solver;

// Bundled word list
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
