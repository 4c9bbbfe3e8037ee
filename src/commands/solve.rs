//! Solve command
//!
//! Parses the guesses given on the command line and finds every matching word.

use crate::core::{Guess, GuessError};
use crate::dictionary::Dictionary;
use crate::solver::{Query, SearchConfig};
use std::time::{Duration, Instant};

/// Result of solving a list of guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub guesses: Vec<Guess>,
    /// `None` when no guesses were given
    pub words: Option<Vec<String>>,
    pub duration: Duration,
}

/// Solve for the guesses in `texts`
///
/// # Errors
///
/// Returns the first `GuessError` if any text is not a valid guess.
pub fn solve_guesses<S: AsRef<str>>(
    texts: &[S],
    dictionary: &Dictionary,
    config: SearchConfig,
) -> Result<SolveResult, GuessError> {
    let query = Query::parse(texts, None)?;
    let start = Instant::now();
    let words = query.solve(dictionary, config);

    Ok(SolveResult {
        guesses: query.guesses().copied().collect(),
        words,
        duration: start.elapsed(),
    })
}
