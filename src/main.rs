//! Wordle Cheat - CLI
//!
//! Lists every word that fits the feedback from Wordle guesses written in bracket
//! notation: `[x]` correct position, `(x)` wrong position, bare letters absent.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_cheat::{
    commands::{compile_wordlist, list_words, lookup_words, run_interactive, solve_guesses},
    core::WORD_LENGTH,
    dictionary::{Dictionary, global},
    output::{print_compile_result, print_lookup_results, print_solve_result, print_words},
    solver::SearchConfig,
};

#[derive(Parser)]
#[command(
    name = "wordle-cheat",
    about = "Find every word consistent with your Wordle guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Serialized dictionary file (default: the bundled dictionary)
    #[arg(short, long, global = true, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Search first letters on all cores
    #[arg(short, long, global = true)]
    parallel: bool,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): enter guesses as you play
    Interactive,

    /// List the words matching one or more guesses
    Solve {
        /// Guesses in bracket notation, e.g. c[a]n(d)y
        guesses: Vec<String>,
    },

    /// Check whether words are in the dictionary
    Lookup {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List every word in the dictionary
    Words {
        /// Word length
        #[arg(short, long, default_value_t = WORD_LENGTH)]
        length: usize,

        /// One word per line, no summary
        #[arg(long)]
        plain: bool,
    },

    /// Compile a word list (one word per line) into a dictionary file
    Compile {
        wordlist: PathBuf,
        output: PathBuf,

        /// Overwrite OUTPUT if it exists
        #[arg(short, long)]
        force: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "wordle_cheat=debug"
    } else {
        "wordle_cheat=warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Load the dictionary from `--dictionary`, or the bundled one
fn load_dictionary(path: Option<&Path>) -> Result<&'static Dictionary> {
    match path {
        Some(path) => global::init_from_path(path)
            .with_context(|| format!("loading dictionary {}", path.display())),
        None => global::init_embedded().context("loading bundled dictionary"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SearchConfig {
        parallel: cli.parallel,
        ..SearchConfig::default()
    };
    let dictionary = cli.dictionary.as_deref();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let dictionary = load_dictionary(dictionary)?;
            run_interactive(dictionary, config, io::stdin().lock(), io::stdout().lock())
                .context("interactive session failed")
        }
        Commands::Solve { guesses } => {
            let dictionary = load_dictionary(dictionary)?;
            let result = solve_guesses(&guesses, dictionary, config)?;
            print_solve_result(&result, cli.verbose);
            Ok(())
        }
        Commands::Lookup { words } => {
            let dictionary = load_dictionary(dictionary)?;
            print_lookup_results(&lookup_words(&words, dictionary));
            Ok(())
        }
        Commands::Words { length, plain } => {
            let dictionary = load_dictionary(dictionary)?;
            let config = SearchConfig {
                word_length: length,
                ..config
            };
            print_words(&list_words(dictionary, config), plain);
            Ok(())
        }
        Commands::Compile {
            wordlist,
            output,
            force,
        } => {
            let result = compile_wordlist(&wordlist, &output, force)?;
            print_compile_result(&result, &output);
            Ok(())
        }
    }
}
