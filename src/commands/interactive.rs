//! Interactive CLI mode
//!
//! Line-oriented session: enter guesses as they are played and see the remaining
//! candidates after each one.

use crate::core::{Feedback, Guess};
use crate::dictionary::Dictionary;
use crate::output::formatters::{colored_guess, columns, guess_to_emoji};
use crate::solver::{Query, SearchConfig};
use colored::Colorize;
use std::io::{self, BufRead, Write};

const CANDIDATES_PER_ROW: usize = 8;

/// One parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    New,
    Undo,
    Help,
    /// Change one letter's feedback: 1-based guess and letter numbers
    Set {
        guess: usize,
        letter: usize,
        feedback: Feedback,
    },
    Guesses(Vec<String>),
    Empty,
}

impl Command {
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let mut parts = line.split_whitespace();
        match parts.next().map(str::to_ascii_lowercase).as_deref() {
            None => Ok(Self::Empty),
            Some("quit" | "q" | "exit") => Ok(Self::Quit),
            Some("new" | "n") => Ok(Self::New),
            Some("undo" | "u") => Ok(Self::Undo),
            Some("help" | "h" | "?") => Ok(Self::Help),
            Some("set") => {
                let usage = || "usage: set <guess> <letter> <a|c|w>".to_string();
                let guess = parts.next().and_then(|p| p.parse().ok()).ok_or_else(usage)?;
                let letter = parts.next().and_then(|p| p.parse().ok()).ok_or_else(usage)?;
                let feedback = parts.next().and_then(Feedback::from_code).ok_or_else(usage)?;
                Ok(Self::Set {
                    guess,
                    letter,
                    feedback,
                })
            }
            Some(_) => Ok(Self::Guesses(
                line.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect(),
            )),
        }
    }
}

/// Run the interactive loop until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn run_interactive<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    config: SearchConfig,
    input: R,
    mut output: W,
) -> io::Result<()> {
    print_banner(&mut output)?;
    let mut history: Vec<Guess> = Vec::new();
    let mut lines = input.lines();

    loop {
        write!(output, "{} ", format!("guess {}>", history.len() + 1).cyan())?;
        output.flush()?;
        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            return Ok(());
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{}", message.red())?;
                continue;
            }
        };

        match command {
            Command::Empty => continue,
            Command::Quit => return Ok(()),
            Command::Help => {
                print_help(&mut output)?;
                continue;
            }
            Command::New => {
                history.clear();
                writeln!(output, "New game started.")?;
                continue;
            }
            Command::Undo => {
                if history.pop().is_none() {
                    writeln!(output, "Nothing to undo.")?;
                    continue;
                }
            }
            Command::Set {
                guess,
                letter,
                feedback,
            } => {
                let query = Query::new(history.clone(), None);
                let Some(updated) = guess
                    .checked_sub(1)
                    .zip(letter.checked_sub(1))
                    .and_then(|(g, l)| query.with_feedback(g, l, feedback))
                else {
                    writeln!(output, "{}", "No such guess or letter.".red())?;
                    continue;
                };
                history = updated.guesses().copied().collect();
            }
            Command::Guesses(texts) => match Query::parse(texts.as_slice(), None) {
                Ok(query) => history.extend(query.guesses().copied()),
                Err(err) => {
                    writeln!(output, "{} {err}", "Invalid guess:".red())?;
                    continue;
                }
            },
        }

        let query = Query::new(history.clone(), None);
        print_state(&mut output, &history, query.solve(dictionary, config))?;
    }
}

fn print_state<W: Write>(
    output: &mut W,
    history: &[Guess],
    words: Option<Vec<String>>,
) -> io::Result<()> {
    writeln!(output)?;
    for (i, guess) in history.iter().enumerate() {
        writeln!(
            output,
            "  {} {}  {}",
            format!("{}.", i + 1).bright_black(),
            colored_guess(guess),
            guess_to_emoji(guess)
        )?;
    }
    writeln!(output)?;

    match words {
        None => writeln!(output, "No guesses yet.")?,
        Some(words) if words.is_empty() => {
            writeln!(output, "{}", "No words match. Check the feedback or undo.".red())?;
        }
        Some(words) => {
            writeln!(output, "{} candidates:", words.len().to_string().bright_yellow().bold())?;
            for row in columns(&words, CANDIDATES_PER_ROW) {
                writeln!(output, "  {row}")?;
            }
        }
    }
    writeln!(output)
}

fn print_banner<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", "═".repeat(60).cyan())?;
    writeln!(output, " {}", "Wordle Cheat - Interactive Mode".bright_cyan().bold())?;
    writeln!(output, "{}", "═".repeat(60).cyan())?;
    print_help(output)
}

fn print_help<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Enter each guess with its feedback:")?;
    writeln!(output, "  [x]  correct position (green)")?;
    writeln!(output, "  (x)  in the word, wrong position (yellow)")?;
    writeln!(output, "   x   not in the word")?;
    writeln!(output, "  e.g. c[a]n(d)y or (th)[r](e)e; several guesses per line are fine")?;
    writeln!(output)?;
    writeln!(output, "Commands: undo, new, set <guess> <letter> <a|c|w>, help, quit")?;
    writeln!(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> String {
        let dict =
            Dictionary::from_words(["berth", "birth", "earth", "hertz", "voice", "juice"]).unwrap();
        let mut output = Vec::new();
        run_interactive(&dict, SearchConfig::default(), input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("  "), Ok(Command::Empty));
        assert_eq!(Command::parse("Quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("u"), Ok(Command::Undo));
        assert_eq!(
            Command::parse("set 2 3 c"),
            Ok(Command::Set {
                guess: 2,
                letter: 3,
                feedback: Feedback::CorrectPosition
            })
        );
        assert!(Command::parse("set 2 x c").is_err());
        assert_eq!(
            Command::parse("g(r)oup, (r)ails"),
            Ok(Command::Guesses(vec!["g(r)oup".into(), "(r)ails".into()]))
        );
    }

    #[test]
    fn guesses_narrow_the_candidates() {
        let out = session("g(r)oup, (r)ails\nquit\n");
        assert!(out.contains("berth"));
        assert!(out.contains("hertz"));
        assert!(!out.contains("earth"));
    }

    #[test]
    fn undo_restores_previous_state() {
        let out = session("xx[r][t][h]\n[b]irth\nundo\nundo\nundo\n");
        assert!(out.contains("No words match"));
        assert!(out.contains("No guesses yet."));
        assert!(out.contains("Nothing to undo."));
    }

    #[test]
    fn invalid_guess_keeps_history() {
        let out = session("cr[ane\n");
        assert!(out.contains("Invalid guess:"));
        assert!(!out.contains("candidates:"));
    }

    #[test]
    fn set_changes_feedback() {
        let out = session("xxrth\nset 1 3 c\nset 9 1 c\n");
        assert!(out.contains("No words match"));
        assert!(out.contains("No such guess or letter."));
    }

    #[test]
    fn end_of_input_ends_session() {
        let out = session("");
        assert!(out.contains("Interactive Mode"));
    }
}
