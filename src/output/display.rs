//! Display functions for command results

use super::formatters::{colored_guess, columns, guess_to_emoji};
use crate::commands::{CompileResult, LookupResult, SolveResult};
use colored::Colorize;
use std::path::Path;

const WORDS_PER_ROW: usize = 8;

/// Print the guesses and the words matching them
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    for (i, guess) in result.guesses.iter().enumerate() {
        println!(
            "  {} {}  {}",
            format!("{}.", i + 1).bright_black(),
            colored_guess(guess),
            guess_to_emoji(guess)
        );
    }
    println!("{}", "─".repeat(60).cyan());

    match &result.words {
        None => println!("{}", "no result".yellow()),
        Some(words) if words.is_empty() => println!("{}", "No words match.".red().bold()),
        Some(words) => {
            println!(
                "{} {}\n",
                words.len().to_string().bright_yellow().bold(),
                if words.len() == 1 { "match" } else { "matches" }
            );
            print_columns(words);
        }
    }

    if verbose {
        println!(
            "\n  Search time: {:.2}ms",
            result.duration.as_secs_f64() * 1000.0
        );
    }
}

/// Print one line per looked-up word
pub fn print_lookup_results(results: &[LookupResult]) {
    for result in results {
        if result.found {
            println!("{} {}", "✓".green().bold(), result.word);
        } else {
            println!("{} {}", "✗".red().bold(), result.word.dimmed());
        }
    }
}

/// Print a word list, one word per line, or in columns for a terminal
pub fn print_words(words: &[String], plain: bool) {
    if plain {
        for word in words {
            println!("{word}");
        }
    } else {
        print_columns(words);
        println!("\n{} words", words.len().to_string().bright_yellow().bold());
    }
}

/// Print a summary of a compiled word list
pub fn print_compile_result(result: &CompileResult, output: &Path) {
    println!(
        "{} {} words into {} nodes in {:.1}ms",
        "Compiled".green().bold(),
        result.words,
        result.nodes,
        result.duration.as_secs_f64() * 1000.0
    );
    println!("  {}", output.display().to_string().bright_white());
}

fn print_columns(words: &[String]) {
    for row in columns(words, WORDS_PER_ROW) {
        println!("  {row}");
    }
}
