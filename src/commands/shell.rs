//! Session shell
//!
//! Line protocol over the stateless game service. Every request names its
//! session id explicitly, so several players can share one shell.
//!
//! ```text
//! new                    start a game, prints its id
//! guess <id> [word]      submit a guess
//! show <id>              show a game without guessing
//! evict <minutes>        drop games idle longer than this
//! sessions               list live game ids
//! quit                   leave the shell
//! ```

use crate::output::display::format_game_output;
use crate::session::{GameOutput, GameService};
use anyhow::Result;
use chrono::TimeDelta;
use std::io::{self, BufRead, Write};

/// Run the shell on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_shell(service: &GameService) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(service, stdin.lock(), stdout.lock())
}

/// Answer requests from `input` until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn serve<R: BufRead, W: Write>(service: &GameService, input: R, mut out: W) -> Result<()> {
    writeln!(out, "jumble shell, type 'help' for commands")?;

    for line in input.lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };

        match command.to_ascii_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" => writeln!(
                out,
                "new | guess <id> [word] | show <id> | evict <minutes> | sessions | quit"
            )?,
            "new" => match service.create_new_game() {
                Ok(output) => write!(out, "{}", format_game_output(&output))?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "guess" => {
                let id = parts.next();
                let word = parts.next();
                let output = service
                    .process_guess(id, word)
                    .unwrap_or_else(GameOutput::not_found);
                write!(out, "{}", format_game_output(&output))?;
            }
            "show" => {
                let output = service
                    .show(parts.next())
                    .unwrap_or_else(GameOutput::not_found);
                write!(out, "{}", format_game_output(&output))?;
            }
            "evict" => match parse_minutes(parts.next()) {
                Some(max_idle) => {
                    let evicted = service.evict_idle(max_idle);
                    writeln!(out, "evicted: {evicted}")?;
                }
                None => writeln!(out, "error: evict expects a number of minutes")?,
            },
            "sessions" => {
                let ids = service.store().ids();
                writeln!(out, "sessions: {}", ids.len())?;
                for id in ids {
                    writeln!(out, "  {id}")?;
                }
            }
            other => writeln!(out, "error: unknown command '{other}'")?,
        }
        out.flush()?;
    }

    Ok(())
}

/// Non-negative minute count within the range of a [`TimeDelta`]
fn parse_minutes(arg: Option<&str>) -> Option<TimeDelta> {
    let minutes = arg?.parse::<i64>().ok().filter(|&m| m >= 0)?;
    TimeDelta::try_minutes(minutes)
}
