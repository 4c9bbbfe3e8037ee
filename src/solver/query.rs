//! A solve request: guesses already confirmed plus an optional new one

use super::rules::RuleSet;
use super::search::{Search, SearchConfig};
use crate::core::{Feedback, Guess, GuessError};
use crate::dictionary::Dictionary;

/// Guesses to solve for
///
/// `previous` holds guesses the player has already settled on; `guess` is the one
/// just entered, if any. Both take part in solving.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    previous: Vec<Guess>,
    guess: Option<Guess>,
}

impl Query {
    #[must_use]
    pub const fn new(previous: Vec<Guess>, guess: Option<Guess>) -> Self {
        Self { previous, guess }
    }

    /// Parse guess texts in bracket notation
    ///
    /// # Errors
    /// Returns the first `GuessError` among the texts, previous guesses first.
    ///
    /// # Examples
    /// ```
    /// use wordle_cheat::solver::Query;
    ///
    /// let query = Query::parse(&["g(r)oup", "(r)ails"], Some("(th)[r](e)e")).unwrap();
    /// assert_eq!(query.guesses().count(), 3);
    /// assert!(Query::parse(&["g(r)oup"], Some("(th[r]e")).is_err());
    /// ```
    pub fn parse<S: AsRef<str>>(previous: &[S], guess: Option<&str>) -> Result<Self, GuessError> {
        let previous = previous
            .iter()
            .map(|text| Guess::parse(text.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let guess = guess.map(Guess::parse).transpose()?;
        Ok(Self { previous, guess })
    }

    /// Every guess, previous ones first
    pub fn guesses(&self) -> impl Iterator<Item = &Guess> + '_ {
        self.previous.iter().chain(&self.guess)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.previous.is_empty() && self.guess.is_none()
    }

    /// Rules for every guess in the query
    #[must_use]
    pub fn rules(&self) -> RuleSet {
        RuleSet::derive(self.guesses())
    }

    /// Matching words, or `None` when there are no guesses to go on
    #[must_use]
    pub fn solve(&self, dictionary: &Dictionary, config: SearchConfig) -> Option<Vec<String>> {
        if self.is_empty() {
            return None;
        }
        Some(Search::with_config(dictionary, &self.rules(), config))
    }

    /// The query with one letter's feedback replaced
    ///
    /// Every guess, including the new one, becomes a previous guess. Returns `None` if
    /// either index is out of range.
    #[must_use]
    pub fn with_feedback(
        &self,
        guess_index: usize,
        letter_index: usize,
        feedback: Feedback,
    ) -> Option<Self> {
        let mut previous: Vec<Guess> = self.guesses().copied().collect();
        let target = previous.get_mut(guess_index)?;
        *target = target.with_feedback(letter_index, feedback)?;
        Some(Self {
            previous,
            guess: None,
        })
    }

    /// Canonical text of every guess, previous ones first
    #[must_use]
    pub fn to_params(&self) -> Vec<String> {
        self.guesses().map(ToString::to_string).collect()
    }
}
