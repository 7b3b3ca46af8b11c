//! Simple interactive CLI mode
//!
//! Text-based game without TUI

use crate::engine::{BoardFeedback, GameBoard, GameState};
use crate::output::formatters::{create_progress_bar, group_by_length, mask_word, spaced_letters};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

const HELP: &str = "Commands: /new new game, /shuffle rescramble, /words show board, \
                    /bye end this game, /quit exit";

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(board: &mut GameBoard<'_>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(board, stdin.lock(), stdout.lock())
}

/// Play the text game over arbitrary input and output
///
/// Each line of `input` is either a guess or a `/command`. Returns when
/// `/quit` is entered or input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play<R: BufRead, W: Write>(board: &mut GameBoard<'_>, input: R, mut out: W) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                  Jumble - Interactive Mode                   ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Find every word hidden in the scrambled letters.")?;
    writeln!(out, "{HELP}\n")?;

    start_game(board, &mut out)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();

        match command {
            "" => {}
            "/quit" | "/q" | "/exit" => break,
            "/help" | "/h" => writeln!(out, "{HELP}")?,
            "/new" | "/n" => start_game(board, &mut out)?,
            "/shuffle" | "/s" => {
                if board.rescramble() {
                    print_scramble(board, &mut out)?;
                } else {
                    writeln!(out, "{}", BoardFeedback::NoGame.to_string().yellow())?;
                }
            }
            "/words" | "/w" => match board.state() {
                Some(state) => print_board(state, &mut out)?,
                None => writeln!(out, "{}", BoardFeedback::NoGame.to_string().yellow())?,
            },
            "/bye" => {
                if let Some(state) = board.state() {
                    writeln!(out, "The word was {}.", state.original().to_uppercase().bold())?;
                }
                board.goodbye();
                writeln!(out, "Game discarded. Type /new to start again.")?;
            }
            guess => {
                let feedback = board.guess(guess);
                print_feedback(&feedback, &mut out)?;
                if feedback == BoardFeedback::Complete {
                    if let Some(state) = board.state() {
                        print_board(state, &mut out)?;
                    }
                    writeln!(out, "Type /new to play again or /quit to exit.")?;
                } else if feedback != BoardFeedback::NoGame {
                    print_scramble(board, &mut out)?;
                }
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

fn start_game<W: Write>(board: &mut GameBoard<'_>, out: &mut W) -> Result<()> {
    match board.new_game() {
        Ok(state) => {
            writeln!(out, "\n🔄 New game started!")?;
            print_board(state, out)?;
        }
        Err(err) => writeln!(out, "{}", format!("❌ {err}").red())?,
    }
    Ok(())
}

fn print_feedback<W: Write>(feedback: &BoardFeedback, out: &mut W) -> Result<()> {
    let text = feedback.to_string();
    let line = match feedback {
        BoardFeedback::Complete => format!("🎉 {text}").bright_green().bold(),
        BoardFeedback::Correct { .. } => format!("✓ {text}").green(),
        BoardFeedback::Incorrect => format!("✗ {text}").red(),
        BoardFeedback::TooShort { .. } | BoardFeedback::AlreadyGuessed | BoardFeedback::NoGame => {
            text.yellow()
        }
    };
    writeln!(out, "{line}")?;
    Ok(())
}

fn print_scramble<W: Write>(board: &GameBoard<'_>, out: &mut W) -> Result<()> {
    if let Some(state) = board.state() {
        writeln!(
            out,
            "Letters: {}",
            spaced_letters(state.scramble()).bright_yellow().bold()
        )?;
    }
    Ok(())
}

fn print_board<W: Write>(state: &GameState, out: &mut W) -> Result<()> {
    let total = state.total_words();
    let found = state.guessed_count();

    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "Letters: {}",
        spaced_letters(state.scramble()).bright_yellow().bold()
    )?;
    writeln!(
        out,
        "Found:   [{}] {found}/{total}",
        create_progress_bar(found, total, 20).green()
    )?;

    let words: Vec<&str> = state.sub_words().map(|(word, _)| word).collect();
    for (len, group) in group_by_length(words) {
        let cells: Vec<String> = group
            .iter()
            .map(|word| {
                if state.is_guessed(word) {
                    word.to_uppercase()
                } else {
                    mask_word(word)
                }
            })
            .collect();
        writeln!(out, "  {len} letters: {}", cells.join("  "))?;
    }
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    Ok(())
}
