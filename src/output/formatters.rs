//! Formatting utilities for terminal output

use crate::core::{Feedback, Guess};
use colored::{ColoredString, Colorize};

/// Format a guess's feedback as emoji squares
#[must_use]
pub fn guess_to_emoji(guess: &Guess) -> String {
    guess
        .tiles()
        .iter()
        .map(|tile| match tile.feedback() {
            Feedback::Absent => '⬜',
            Feedback::WrongPosition => '🟨',
            Feedback::CorrectPosition => '🟩',
        })
        .collect()
}

/// One letter tile, colored by its feedback
#[must_use]
pub fn colored_tile(letter: u8, feedback: Feedback) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match feedback {
        Feedback::CorrectPosition => text.black().on_green().bold(),
        Feedback::WrongPosition => text.black().on_yellow().bold(),
        Feedback::Absent => text.bright_white().on_bright_black(),
    }
}

/// A guess as a row of colored tiles
#[must_use]
pub fn colored_guess(guess: &Guess) -> String {
    guess
        .tiles()
        .iter()
        .map(|tile| colored_tile(tile.letter(), tile.feedback()).to_string())
        .collect()
}

/// Lay words out in rows of `per_row` left-aligned columns
#[must_use]
pub fn columns<S: AsRef<str>>(words: &[S], per_row: usize) -> Vec<String> {
    let width = words.iter().map(|w| w.as_ref().len()).max().unwrap_or(0);
    words
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|w| format!("{:<width$}", w.as_ref()))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}
