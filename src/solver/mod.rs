//! Finding every word consistent with the feedback so far
//!
//! Guesses are turned into a [`RuleSet`], and a [`Search`] walks the dictionary graph
//! keeping only the branches every rule accepts.

mod query;
mod rule;
mod rules;
mod search;

pub use query::Query;
pub use rule::{Rule, RuleState};
pub use rules::RuleSet;
pub use search::{Search, SearchConfig};

use crate::core::Guess;
use crate::dictionary::Dictionary;

/// All words matching `guesses`, or `None` if there are no guesses
///
/// # Examples
/// ```
/// use wordle_cheat::core::Guess;
/// use wordle_cheat::dictionary::Dictionary;
/// use wordle_cheat::solver::{SearchConfig, solve};
///
/// let dict = Dictionary::from_words(["berth", "hertz", "groan"]).unwrap();
/// let guesses = [Guess::parse("g(r)oup").unwrap()];
/// let words = solve(&dict, &guesses, SearchConfig::default());
/// assert_eq!(words, Some(vec!["berth".to_string(), "hertz".to_string()]));
/// assert_eq!(solve(&dict, &[], SearchConfig::default()), None);
/// ```
#[must_use]
pub fn solve(
    dictionary: &Dictionary,
    guesses: &[Guess],
    config: SearchConfig,
) -> Option<Vec<String>> {
    if guesses.is_empty() {
        return None;
    }
    let rules = RuleSet::derive(guesses);
    Some(Search::with_config(dictionary, &rules, config))
}
