//! Single constraints on candidate words
//!
//! A rule sees a candidate one letter at a time through [`Rule::apply`], which may
//! reject the letter outright, and gets a final say through [`Rule::is_satisfied`] once
//! the word is complete. Rules are immutable; whatever they need to remember between
//! letters lives in a [`RuleState`] value that the search threads through each branch.

use std::fmt;

/// Per-branch memory of a rule
///
/// `Count` uses it as an occurrence counter; the other rules leave it untouched.
pub type RuleState = u8;

/// A constraint every candidate word must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `letter` appears nowhere in the word
    NotInPuzzle { letter: u8 },
    /// `letter` is not at `position` (it belongs somewhere else)
    Mismatch { letter: u8, position: usize },
    /// `letter` is at `position`
    Match { letter: u8, position: usize },
    /// `letter` appears at least `min` times
    Count { letter: u8, min: u8 },
}

impl Rule {
    /// State every rule starts a search with
    pub const INITIAL_STATE: RuleState = 0;

    /// Check `letter` placed at `position`
    ///
    /// Returns the state for the rest of the branch, or `None` if the letter is rejected.
    ///
    /// # Examples
    /// ```
    /// use wordle_cheat::solver::Rule;
    ///
    /// let rule = Rule::Match { letter: b'a', position: 1 };
    /// assert_eq!(rule.apply(b'a', 1, Rule::INITIAL_STATE), Some(0));
    /// assert_eq!(rule.apply(b'b', 1, Rule::INITIAL_STATE), None);
    /// assert_eq!(rule.apply(b'b', 2, Rule::INITIAL_STATE), Some(0));
    /// ```
    #[inline]
    #[must_use]
    pub const fn apply(&self, letter: u8, position: usize, state: RuleState) -> Option<RuleState> {
        match *self {
            Self::NotInPuzzle { letter: excluded } => {
                if letter == excluded {
                    None
                } else {
                    Some(state)
                }
            }
            Self::Mismatch {
                letter: misplaced,
                position: at,
            } => {
                if letter == misplaced && position == at {
                    None
                } else {
                    Some(state)
                }
            }
            Self::Match {
                letter: required,
                position: at,
            } => {
                if position == at && letter != required {
                    None
                } else {
                    Some(state)
                }
            }
            Self::Count { letter: counted, .. } => {
                if letter == counted {
                    Some(state.saturating_add(1))
                } else {
                    Some(state)
                }
            }
        }
    }

    /// Whether a complete word that ended in `state` meets the rule
    #[inline]
    #[must_use]
    pub const fn is_satisfied(&self, state: RuleState) -> bool {
        match *self {
            Self::Count { min, .. } => state >= min,
            Self::NotInPuzzle { .. } | Self::Mismatch { .. } | Self::Match { .. } => true,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NotInPuzzle { letter } => write!(f, "no {}", char::from(letter)),
            Self::Mismatch { letter, position } => {
                write!(f, "{} not at {}", char::from(letter), position + 1)
            }
            Self::Match { letter, position } => {
                write!(f, "{} at {}", char::from(letter), position + 1)
            }
            Self::Count { letter, min } => write!(f, "at least {min} {}", char::from(letter)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run a rule over a whole word the way the search does
    fn accepts(rule: Rule, word: &str) -> bool {
        word.bytes()
            .enumerate()
            .try_fold(Rule::INITIAL_STATE, |state, (position, letter)| {
                rule.apply(letter, position, state)
            })
            .is_some_and(|state| rule.is_satisfied(state))
    }

    #[test]
    fn not_in_puzzle_rejects_letter_anywhere() {
        let rule = Rule::NotInPuzzle { letter: b'e' };
        assert!(accepts(rule, "blind"));
        assert!(!accepts(rule, "eagle"));
        assert!(!accepts(rule, "crane"));
    }

    #[test]
    fn mismatch_rejects_only_its_position() {
        let rule = Rule::Mismatch {
            letter: b'r',
            position: 0,
        };
        assert!(accepts(rule, "berth"));
        assert!(accepts(rule, "blind"));
        assert!(!accepts(rule, "rails"));
    }

    #[test]
    fn match_requires_letter_at_position() {
        let rule = Rule::Match {
            letter: b'i',
            position: 2,
        };
        assert!(accepts(rule, "voice"));
        assert!(!accepts(rule, "vocal"));
    }

    #[test]
    fn count_is_checked_at_the_end() {
        let rule = Rule::Count { letter: b'd', min: 2 };
        assert_eq!(rule.apply(b'x', 0, 0), Some(0));
        assert_eq!(rule.apply(b'd', 0, 0), Some(1));
        assert!(!rule.is_satisfied(1));
        assert!(rule.is_satisfied(2));

        assert!(accepts(rule, "daddy"));
        assert!(accepts(rule, "dodge"));
        assert!(!accepts(rule, "madam"));
    }

    #[test]
    fn only_count_has_a_final_condition() {
        for rule in [
            Rule::NotInPuzzle { letter: b'a' },
            Rule::Mismatch {
                letter: b'a',
                position: 0,
            },
            Rule::Match {
                letter: b'a',
                position: 0,
            },
        ] {
            assert!(rule.is_satisfied(Rule::INITIAL_STATE));
        }
        assert!(!Rule::Count { letter: b'a', min: 1 }.is_satisfied(Rule::INITIAL_STATE));
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(
            Rule::Match {
                letter: b'r',
                position: 2
            }
            .to_string(),
            "r at 3"
        );
        assert_eq!(Rule::Count { letter: b'e', min: 2 }.to_string(), "at least 2 e");
    }
}
