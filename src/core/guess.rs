//! Bracket-annotated guesses
//!
//! A guess is written as its five letters, with correct-position letters wrapped in
//! `[ ]` and wrong-position letters wrapped in `( )`. A bracket may wrap several
//! letters at once: `tr[ic]k` is the same guess as `tr[i][c]k`. The canonical form
//! wraps every letter individually and uses lowercase.

use super::{Feedback, WORD_LENGTH};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for malformed guess notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// A bracket was opened inside another, closed without being opened, closed with
    /// the wrong kind, or never closed
    #[error("unbalanced bracket at offset {position}")]
    UnbalancedBracket { position: usize },

    #[error("unexpected character {character:?} at offset {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("a guess must have exactly 5 letters, got {0}")]
    WrongLength(usize),
}

/// One letter of a guess together with the feedback it received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    letter: u8,
    feedback: Feedback,
}

impl Tile {
    /// Callers pass an ASCII letter; it is stored lowercase
    const fn new(letter: u8, feedback: Feedback) -> Self {
        Self {
            letter: letter.to_ascii_lowercase(),
            feedback,
        }
    }

    /// Lowercase ASCII letter
    #[inline]
    #[must_use]
    pub const fn letter(self) -> u8 {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn feedback(self) -> Feedback {
        self.feedback
    }
}

/// A guessed word with per-letter feedback
///
/// Guesses are plain values: changing a letter's feedback produces a new guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guess {
    tiles: [Tile; WORD_LENGTH],
}

impl Guess {
    /// Build a guess from letters and their feedback
    ///
    /// Letters are case-insensitive and stored lowercase.
    ///
    /// # Errors
    /// Returns `GuessError::InvalidCharacter`, with the letter's index as position, for
    /// anything other than an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_cheat::core::{Feedback, Guess};
    ///
    /// let guess = Guess::new([
    ///     (b'B', Feedback::CorrectPosition),
    ///     (b'e', Feedback::Absent),
    ///     (b'r', Feedback::WrongPosition),
    ///     (b't', Feedback::Absent),
    ///     (b'h', Feedback::Absent),
    /// ])
    /// .unwrap();
    /// assert_eq!(guess.to_string(), "[b]e(r)th");
    /// ```
    pub fn new(letters: [(u8, Feedback); WORD_LENGTH]) -> Result<Self, GuessError> {
        let mut tiles = [Tile::new(b'a', Feedback::Absent); WORD_LENGTH];
        for (position, (tile, (letter, feedback))) in tiles.iter_mut().zip(letters).enumerate() {
            if !letter.is_ascii_alphabetic() {
                return Err(GuessError::InvalidCharacter {
                    character: char::from(letter),
                    position,
                });
            }
            *tile = Tile::new(letter, feedback);
        }
        Ok(Self { tiles })
    }

    /// Parse guess notation
    ///
    /// Letters are case-insensitive and stored lowercase.
    ///
    /// # Errors
    /// Returns `GuessError` if brackets are unbalanced or nested, a character other
    /// than an ASCII letter or bracket appears, or the text does not contain exactly
    /// five letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_cheat::core::{Feedback, Guess};
    ///
    /// let guess = Guess::parse("TR[IC]k").unwrap();
    /// assert_eq!(guess.word(), "trick");
    /// assert_eq!(guess.tiles()[3].feedback(), Feedback::CorrectPosition);
    /// assert_eq!(guess.to_string(), "tr[i][c]k");
    /// ```
    pub fn parse(text: &str) -> Result<Self, GuessError> {
        let mut tiles = Vec::with_capacity(WORD_LENGTH);
        let mut open: Option<(Feedback, usize)> = None;

        for (position, c) in text.char_indices() {
            match c {
                '[' | '(' => {
                    if open.is_some() {
                        return Err(GuessError::UnbalancedBracket { position });
                    }
                    open = Feedback::opened_by(c).map(|feedback| (feedback, position));
                }
                ']' | ')' => match open {
                    Some((feedback, _))
                        if feedback.brackets().is_some_and(|(_, close)| close == c) =>
                    {
                        open = None;
                    }
                    _ => return Err(GuessError::UnbalancedBracket { position }),
                },
                c if c.is_ascii_alphabetic() => {
                    let feedback = open.map_or(Feedback::Absent, |(feedback, _)| feedback);
                    tiles.push(Tile::new(c as u8, feedback));
                }
                character => {
                    return Err(GuessError::InvalidCharacter {
                        character,
                        position,
                    });
                }
            }
        }

        if let Some((_, position)) = open {
            return Err(GuessError::UnbalancedBracket { position });
        }

        let tiles: [Tile; WORD_LENGTH] = tiles
            .try_into()
            .map_err(|tiles: Vec<Tile>| GuessError::WrongLength(tiles.len()))?;

        Ok(Self { tiles })
    }

    /// The letters and their feedback, in order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.tiles
    }

    /// The guessed word without annotation
    #[must_use]
    pub fn word(&self) -> String {
        self.tiles.iter().map(|t| char::from(t.letter)).collect()
    }

    /// A copy of this guess with the feedback at `index` replaced
    ///
    /// Returns `None` if `index` is not a letter position.
    #[must_use]
    pub fn with_feedback(&self, index: usize, feedback: Feedback) -> Option<Self> {
        let mut tiles = self.tiles;
        tiles.get_mut(index)?.feedback = feedback;
        Some(Self { tiles })
    }

    /// Whether `letter` is marked present anywhere in this guess
    #[must_use]
    pub fn is_present(&self, letter: u8) -> bool {
        self.tiles
            .iter()
            .any(|t| t.letter == letter && t.feedback.is_present())
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            let letter = char::from(tile.letter);
            match tile.feedback.brackets() {
                Some((open, close)) => write!(f, "{open}{letter}{close}")?,
                None => write!(f, "{letter}")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Guess {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Feedback::{Absent, CorrectPosition, WrongPosition};

    fn feedback(guess: &Guess) -> Vec<Feedback> {
        guess.tiles().iter().map(|t| t.feedback()).collect()
    }

    #[test]
    fn parse_all_absent() {
        let g = Guess::parse("abcde").unwrap();
        assert_eq!(g.word(), "abcde");
        assert_eq!(feedback(&g), [Absent; 5]);
        assert_eq!(g.to_string(), "abcde");
    }

    #[test]
    fn parse_grouped_brackets() {
        let g = Guess::parse("a[bc](de)").unwrap();
        assert_eq!(
            feedback(&g),
            [Absent, CorrectPosition, CorrectPosition, WrongPosition, WrongPosition]
        );
        assert_eq!(g.to_string(), "a[b][c](d)(e)");
    }

    #[test]
    fn parse_normalizes_case() {
        let g = Guess::parse("A[B][C](D)(E)").unwrap();
        assert_eq!(g.to_string(), "a[b][c](d)(e)");
        assert_eq!(g, Guess::parse("a[b][c](d)(e)").unwrap());
    }

    #[test]
    fn canonical_text_round_trips() {
        for text in ["bl[i]nd", "(c)h[i]ps", "(t)(h)[r](e)e", "[a][b][c][d][e]", "(v)oice"] {
            assert_eq!(Guess::parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn parsed_guess_round_trips() {
        let g = Guess::parse("(th)[r](e)e").unwrap();
        assert_eq!(Guess::parse(&g.to_string()).unwrap(), g);
    }

    #[test]
    fn wrong_length() {
        assert_eq!(Guess::parse("abcd"), Err(GuessError::WrongLength(4)));
        assert_eq!(Guess::parse("[abcdef]"), Err(GuessError::WrongLength(6)));
        assert_eq!(Guess::parse(""), Err(GuessError::WrongLength(0)));
        assert_eq!(Guess::parse("[]()a"), Err(GuessError::WrongLength(1)));
    }

    #[test]
    fn unbalanced_brackets() {
        assert_eq!(
            Guess::parse("ab[cde"),
            Err(GuessError::UnbalancedBracket { position: 2 })
        );
        assert_eq!(
            Guess::parse("abc]de"),
            Err(GuessError::UnbalancedBracket { position: 3 })
        );
        assert_eq!(
            Guess::parse("a[b)cde"),
            Err(GuessError::UnbalancedBracket { position: 3 })
        );
        assert_eq!(
            Guess::parse("a[b(c)]de"),
            Err(GuessError::UnbalancedBracket { position: 3 })
        );
    }

    #[test]
    fn invalid_characters() {
        assert_eq!(
            Guess::parse("ab cde"),
            Err(GuessError::InvalidCharacter {
                character: ' ',
                position: 2
            })
        );
        assert!(Guess::parse("abc1e").is_err());
        assert!(Guess::parse("abcdé").is_err());
    }

    #[test]
    fn with_feedback_leaves_receiver_untouched() {
        let g = Guess::parse("abc(d)e").unwrap();
        let h = g.with_feedback(3, Absent).unwrap();

        assert_eq!(h.to_string(), "abcde");
        assert_eq!(g.to_string(), "abc(d)e");
    }

    #[test]
    fn with_feedback_out_of_range() {
        let g = Guess::parse("abc(d)e").unwrap();
        assert_eq!(g.with_feedback(5, CorrectPosition), None);
        assert_eq!(g.with_feedback(usize::MAX, Absent), None);
    }

    #[test]
    fn constructed_guess_is_lowercase_and_round_trips() {
        let g = Guess::new([
            (b'B', CorrectPosition),
            (b'E', CorrectPosition),
            (b'R', CorrectPosition),
            (b'T', CorrectPosition),
            (b'H', CorrectPosition),
        ])
        .unwrap();
        assert_eq!(g.word(), "berth");
        assert_eq!(g.to_string(), "[b][e][r][t][h]");
        assert_eq!(Guess::parse(&g.to_string()).unwrap(), g);
    }

    #[test]
    fn constructed_guess_rejects_non_letters() {
        let result = Guess::new([
            (b'b', Absent),
            (b'e', Absent),
            (b'r', Absent),
            (b'3', Absent),
            (b'h', Absent),
        ]);
        assert_eq!(
            result,
            Err(GuessError::InvalidCharacter {
                character: '3',
                position: 3
            })
        );
    }

    #[test]
    fn is_present_ignores_absent_occurrences() {
        let g = Guess::parse("[e]ld(e)r").unwrap();
        assert!(g.is_present(b'e'));
        assert!(!g.is_present(b'l'));

        let h = Guess::parse("[e]lder").unwrap();
        assert!(h.is_present(b'e'));
        assert!(!h.is_present(b'r'));
    }

    #[test]
    fn from_str_matches_parse() {
        let g: Guess = "c[a]n(d)y".parse().unwrap();
        assert_eq!(g, Guess::parse("c[a]n(d)y").unwrap());
    }
}
