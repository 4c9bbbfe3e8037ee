//! Command implementations

pub mod compile;
pub mod interactive;
pub mod lookup;
pub mod solve;

pub use compile::{CompileError, CompileResult, compile_wordlist};
pub use interactive::run_interactive;
pub use lookup::{LookupResult, list_words, lookup_words};
pub use solve::{SolveResult, solve_guesses};
