//! Jumble - CLI
//!
//! Word-unscramble game with TUI, text and session-shell modes, plus
//! dictionary utilities.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use jumble::{
    commands::{pick_words, run_benchmark, run_shell, run_simple},
    core::Dictionary,
    engine::{DEFAULT_MIN_LENGTH, GameBoard, GameConfig, scramble, sub_words},
    output::{print_benchmark_result, print_word_list},
    session::GameService,
    wordlists::{loader::EMBEDDED, load_dictionary},
};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "jumble",
    about = "Word-unscramble game: find every word hidden in the scrambled letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a word-per-line file
    #[arg(short = 'w', long, global = true, default_value = EMBEDDED)]
    words: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple text game without TUI
    Simple,

    /// Session shell: play several games by id over stdin
    Shell,

    /// Check whether a word is in the dictionary
    Exists {
        word: String,
    },

    /// List dictionary words starting with a prefix
    Prefix {
        prefix: String,
    },

    /// Search by first letter, last letter and length
    Search {
        #[arg(short, long)]
        start: Option<char>,

        #[arg(short, long)]
        end: Option<char>,

        #[arg(short, long)]
        length: Option<usize>,
    },

    /// List the dictionary words hidden in a word
    SubWords {
        word: String,

        /// Shortest sub-word to report
        #[arg(short, long, default_value_t = DEFAULT_MIN_LENGTH)]
        min_length: usize,
    },

    /// Scramble a word
    Scramble {
        word: String,
    },

    /// List dictionary palindromes
    Palindromes,

    /// Pick a random dictionary word
    Random {
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Time both sub-word strategies on random words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Only test words of this length
        #[arg(short, long)]
        length: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    jumble::log::init_logger(cli.debug);

    let dict = load_dictionary(&cli.words)?;
    info!("Dictionary ready: {} words from '{}'", dict.len(), cli.words);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&dict),
        Commands::Simple => {
            let mut board = GameBoard::new(&dict, GameConfig::default(), StdRng::from_os_rng());
            run_simple(&mut board)
        }
        Commands::Shell => {
            let service = GameService::new(Arc::new(dict), GameConfig::default());
            run_shell(&service)
        }
        Commands::Exists { word } => {
            let found = dict.exists(&word);
            println!("{word}: {}", if found { "found" } else { "not found" });
            Ok(())
        }
        Commands::Prefix { prefix } => {
            let words = dict.words_with_prefix(&prefix);
            print_word_list(&format!("Words starting with '{prefix}'"), &words);
            Ok(())
        }
        Commands::Search { start, end, length } => {
            print_word_list("Search results", &dict.search(start, end, length));
            Ok(())
        }
        Commands::SubWords { word, min_length } => run_sub_words_command(&dict, &word, min_length),
        Commands::Scramble { word } => {
            let mut rng = rand::rng();
            println!("{}", scramble(&word, &mut rng));
            Ok(())
        }
        Commands::Palindromes => {
            print_word_list("Palindromes", &dict.palindromes());
            Ok(())
        }
        Commands::Random { length } => {
            let mut rng = rand::rng();
            match dict.random_word_of_length(length, &mut rng) {
                Some(word) => {
                    println!("{word}");
                    Ok(())
                }
                None => bail!("No word of the requested length"),
            }
        }
        Commands::Benchmark { count, length } => {
            run_benchmark_command(&dict, count, length);
            Ok(())
        }
    }
}

fn run_sub_words_command(dict: &Dictionary, word: &str, min_length: usize) -> Result<()> {
    if min_length == 0 {
        bail!("--min-length must be at least 1");
    }
    let found = sub_words(dict, word, Some(min_length));
    let found: Vec<&str> = found.iter().map(String::as_str).collect();
    print_word_list(&format!("Words hidden in '{word}'"), &found);
    Ok(())
}

fn run_benchmark_command(dict: &Dictionary, count: usize, length: Option<usize>) {
    println!("Running benchmark on {count} random words...");
    let mut rng = rand::rng();
    let words = pick_words(dict, count, length, &mut rng);
    let result = run_benchmark(dict, &words, DEFAULT_MIN_LENGTH);
    print_benchmark_result(&result);
}

fn run_play_command(dict: &Dictionary) -> Result<()> {
    use jumble::interactive::{App, run_tui};

    let board = GameBoard::new(dict, GameConfig::default(), StdRng::from_os_rng());
    run_tui(App::new(board))
}
