//! Deriving rules from guesses
//!
//! Each guess is translated on its own:
//! - an absent letter becomes `NotInPuzzle`, unless the same guess also marks that
//!   letter present, in which case only its own position is ruled out (`Mismatch`);
//! - a correct-position letter becomes `Match`;
//! - a wrong-position letter becomes `Mismatch`;
//! - every letter marked present becomes one `Count` of how often it is marked present.
//!
//! Rules from different guesses are kept side by side, never merged. Two `Count`
//! rules for the same letter together demand the larger count.

use super::rule::{Rule, RuleState};
use crate::core::{Feedback, Guess};

/// The rules derived from a list of guesses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Derive the rules for `guesses`
    ///
    /// # Examples
    /// ```
    /// use wordle_cheat::core::Guess;
    /// use wordle_cheat::solver::{Rule, RuleSet};
    ///
    /// let guess = Guess::parse("(c)h[i]ps").unwrap();
    /// let rules = RuleSet::derive([&guess]);
    /// assert!(rules.rules().contains(&Rule::Match { letter: b'i', position: 2 }));
    /// assert!(rules.rules().contains(&Rule::Count { letter: b'c', min: 1 }));
    /// assert!(rules.rules().contains(&Rule::NotInPuzzle { letter: b'h' }));
    /// ```
    pub fn derive<'g>(guesses: impl IntoIterator<Item = &'g Guess>) -> Self {
        let mut rules = Vec::new();
        let mut guess_count = 0;
        for guess in guesses {
            derive_guess(guess, &mut rules);
            guess_count += 1;
        }
        tracing::debug!(guesses = guess_count, rules = rules.len(), "derived rules");
        Self { rules }
    }

    /// Wrap an explicit list of rules
    #[must_use]
    pub const fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    #[inline]
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// One initial state per rule
    #[must_use]
    pub fn initial_states(&self) -> Vec<RuleState> {
        vec![Rule::INITIAL_STATE; self.rules.len()]
    }

    /// Apply every rule to `letter` at `position`
    ///
    /// Returns the next states, or `None` as soon as any rule rejects the letter.
    /// `states` is not modified.
    #[must_use]
    pub fn apply(
        &self,
        letter: u8,
        position: usize,
        states: &[RuleState],
    ) -> Option<Vec<RuleState>> {
        debug_assert_eq!(states.len(), self.rules.len());
        self.rules
            .iter()
            .zip(states)
            .map(|(rule, &state)| rule.apply(letter, position, state))
            .collect()
    }

    /// Whether every rule accepts a word that ended with `states`
    #[must_use]
    pub fn is_satisfied(&self, states: &[RuleState]) -> bool {
        self.rules
            .iter()
            .zip(states)
            .all(|(rule, &state)| rule.is_satisfied(state))
    }

    /// Check a complete word against every rule, without a dictionary
    #[must_use]
    pub fn accepts(&self, word: &str) -> bool {
        word.bytes()
            .map(|b| b.to_ascii_lowercase())
            .enumerate()
            .try_fold(self.initial_states(), |states, (position, letter)| {
                self.apply(letter, position, &states)
            })
            .is_some_and(|states| self.is_satisfied(&states))
    }
}

fn derive_guess(guess: &Guess, rules: &mut Vec<Rule>) {
    let tiles = guess.tiles();

    for (position, tile) in tiles.iter().enumerate() {
        let letter = tile.letter();
        rules.push(match tile.feedback() {
            Feedback::Absent if guess.is_present(letter) => Rule::Mismatch { letter, position },
            Feedback::Absent => Rule::NotInPuzzle { letter },
            Feedback::CorrectPosition => Rule::Match { letter, position },
            Feedback::WrongPosition => Rule::Mismatch { letter, position },
        });
    }

    let mut counted: Vec<u8> = Vec::with_capacity(tiles.len());
    for tile in tiles.iter().filter(|t| t.feedback().is_present()) {
        if counted.contains(&tile.letter()) {
            continue;
        }
        counted.push(tile.letter());
        let min = tiles
            .iter()
            .filter(|t| t.letter() == tile.letter() && t.feedback().is_present())
            .count() as u8;
        rules.push(Rule::Count {
            letter: tile.letter(),
            min,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(texts: &[&str]) -> RuleSet {
        let guesses: Vec<Guess> = texts.iter().map(|t| Guess::parse(t).unwrap()).collect();
        RuleSet::derive(&guesses)
    }

    #[test]
    fn derive_single_guess() {
        let rules = derive(&["c[a]n(d)y"]);
        assert_eq!(
            rules.rules(),
            [
                Rule::NotInPuzzle { letter: b'c' },
                Rule::Match {
                    letter: b'a',
                    position: 1
                },
                Rule::NotInPuzzle { letter: b'n' },
                Rule::Mismatch {
                    letter: b'd',
                    position: 3
                },
                Rule::NotInPuzzle { letter: b'y' },
                Rule::Count { letter: b'a', min: 1 },
                Rule::Count { letter: b'd', min: 1 },
            ]
        );
    }

    #[test]
    fn duplicate_present_letters_are_counted_together() {
        let rules = derive(&["(th)[r](e)e"]);
        assert!(rules.rules().contains(&Rule::Count { letter: b'e', min: 1 }));

        let rules = derive(&["[e]ld(e)r"]);
        assert!(rules.rules().contains(&Rule::Count { letter: b'e', min: 2 }));
        assert_eq!(
            rules
                .rules()
                .iter()
                .filter(|r| matches!(r, Rule::Count { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn absent_duplicate_of_present_letter_is_not_excluded() {
        let rules = derive(&["[e]lde(r)"]);
        assert!(!rules.rules().contains(&Rule::NotInPuzzle { letter: b'e' }));
        assert!(rules.rules().contains(&Rule::Mismatch {
            letter: b'e',
            position: 3
        }));

        assert!(rules.accepts("erupt"));
        assert!(rules.accepts("eerie"));
        assert!(!rules.accepts("egret"));
    }

    #[test]
    fn guesses_are_not_merged() {
        let rules = derive(&["(d)[a]ubs", "c[a]n(d)y"]);
        let a_matches = rules
            .rules()
            .iter()
            .filter(|r| {
                **r == Rule::Match {
                    letter: b'a',
                    position: 1,
                }
            })
            .count();
        assert_eq!(a_matches, 2);
    }

    #[test]
    fn largest_count_wins() {
        let one = derive(&["xxx(e)x"]);
        assert!(one.accepts("empty"));

        let both = derive(&["xxx(e)x", "[e]ld(e)r"]);
        assert!(!both.accepts("empty"));
        assert!(both.accepts("eject"));
    }

    #[test]
    fn derivation_is_repeatable() {
        let texts = ["bl[i]nd", "(c)h[i]ps", "tr[ic]k"];
        let first = derive(&texts);
        let second = derive(&texts);
        assert_eq!(first, second);
        for word in ["voice", "juice", "blind", "chips", "trick", "thick"] {
            assert_eq!(first.accepts(word), second.accepts(word), "{word}");
        }
    }

    #[test]
    fn empty_rule_set_accepts_everything() {
        let rules = RuleSet::default();
        assert!(rules.is_empty());
        assert!(rules.accepts("crane"));
        assert!(rules.accepts("zzzzz"));
    }

    #[test]
    fn apply_short_circuits_on_rejection() {
        let rules = derive(&["bl[i]nd"]);
        let states = rules.initial_states();
        assert_eq!(rules.apply(b'b', 0, &states), None);
        let next = rules.apply(b'v', 0, &states).unwrap();
        assert_eq!(next.len(), rules.len());
    }
}
