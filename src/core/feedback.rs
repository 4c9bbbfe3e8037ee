//! Per-letter puzzle feedback
//!
//! Each letter of a guess comes back in one of three states. In guess notation the
//! state is written with brackets: `[x]` correct position, `(x)` wrong position,
//! bare `x` absent.

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    /// Gray: the letter is not in the puzzle (or not this many times)
    Absent,
    /// Green: the letter is in the puzzle at this position
    CorrectPosition,
    /// Yellow: the letter is in the puzzle, elsewhere
    WrongPosition,
}

impl Feedback {
    /// All feedback states, in cycling order
    pub const ALL: [Self; 3] = [Self::Absent, Self::CorrectPosition, Self::WrongPosition];

    /// Whether the letter is known to be in the puzzle
    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// The state a tile moves to when clicked through
    ///
    /// Absent → `CorrectPosition` → `WrongPosition` → Absent
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Absent => Self::CorrectPosition,
            Self::CorrectPosition => Self::WrongPosition,
            Self::WrongPosition => Self::Absent,
        }
    }

    /// Bracket pair used to wrap a letter in guess notation
    #[must_use]
    pub const fn brackets(self) -> Option<(char, char)> {
        match self {
            Self::Absent => None,
            Self::CorrectPosition => Some(('[', ']')),
            Self::WrongPosition => Some(('(', ')')),
        }
    }

    /// Feedback opened by a bracket character, if it is an opening bracket
    #[must_use]
    pub const fn opened_by(c: char) -> Option<Self> {
        match c {
            '[' => Some(Self::CorrectPosition),
            '(' => Some(Self::WrongPosition),
            _ => None,
        }
    }

    /// Parse a single-letter code (`c`/`g` correct, `w`/`y` wrong position, `a`/`-` absent)
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "a" | "-" | "absent" => Some(Self::Absent),
            "c" | "g" | "correct" => Some(Self::CorrectPosition),
            "w" | "y" | "wrong" => Some(Self::WrongPosition),
            _ => None,
        }
    }
}
