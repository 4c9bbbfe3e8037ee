//! Core domain types for the puzzle
//!
//! Letters are lowercase ASCII bytes throughout the crate. This module holds the guess
//! notation types and the letter/slot conversions shared by the dictionary and search.

mod feedback;
mod guess;

pub use feedback::Feedback;
pub use guess::{Guess, GuessError, Tile};

/// Number of letters in a puzzle word
pub const WORD_LENGTH: usize = 5;

/// Number of letter slots per dictionary node (`a`..=`z`)
pub const ALPHABET_SIZE: usize = 26;

/// Slot index (`0` = `a`) of an ASCII letter, case-insensitive
///
/// Returns `None` for anything that is not an ASCII letter.
#[inline]
#[must_use]
pub const fn letter_slot(letter: u8) -> Option<usize> {
    if letter.is_ascii_alphabetic() {
        Some((letter.to_ascii_lowercase() - b'a') as usize)
    } else {
        None
    }
}

/// Lowercase ASCII letter for a slot index
///
/// # Panics
/// Panics in debug mode if `slot >= 26`
#[inline]
#[must_use]
pub const fn slot_letter(slot: usize) -> u8 {
    debug_assert!(slot < ALPHABET_SIZE, "letter slot must be < 26");
    b'a' + slot as u8
}
