//! Display functions for command results

use crate::commands::BenchmarkResult;
use crate::engine::PERMUTATION_LIMIT;
use crate::session::GameOutput;
use colored::Colorize;
use std::fmt::Write;

/// Print a titled list of words, several per line
pub fn print_word_list(title: &str, words: &[&str]) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {}",
        title.bright_cyan().bold(),
        format!("({} words)", words.len()).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    if words.is_empty() {
        println!("  (none)");
        return;
    }
    for chunk in words.chunks(8) {
        println!("  {}", chunk.join("  "));
    }
}

/// Render a service answer as `key: value` lines
///
/// Fields that are absent (e.g. for not-found answers) are left out.
#[must_use]
pub fn format_game_output(output: &GameOutput) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "result: {}", output.message());
    if let Some(id) = &output.id {
        let _ = writeln!(text, "id: {id}");
    }
    if let Some(scramble) = &output.scramble {
        let _ = writeln!(text, "scramble: {scramble}");
    }
    if let Some(word) = &output.guess_word {
        let _ = writeln!(text, "guess: {word}");
    }
    if output.id.is_some() {
        let _ = writeln!(
            text,
            "remaining: {}/{}",
            output.remaining_words, output.total_words
        );
        let _ = writeln!(text, "guessed: [{}]", output.guessed_words.join(", "));
    }
    if output.remaining_words == 0
        && let Some(original) = &output.original
        && output.id.is_some()
    {
        let _ = writeln!(text, "original: {original}");
    }
    text
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Sub-words:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Average found:    {}",
        format!("{:.1}", result.average_sub_words())
            .bright_yellow()
            .bold()
    );
    println!("   Most found:       {}", result.max_sub_words);

    println!("\n⏱  {}", "Timing:".bright_cyan().bold());
    println!(
        "   Permutation:      {:.3}s",
        result.permutation_duration.as_secs_f64()
    );
    println!(
        "   Dictionary scan:  {:.3}s",
        result.scan_duration.as_secs_f64()
    );
    if result.permutation_skipped > 0 {
        println!(
            "   {}",
            format!(
                "{} words over {PERMUTATION_LIMIT} letters skipped the permutation strategy",
                result.permutation_skipped
            )
            .yellow()
        );
    }

    if result.mismatches.is_empty() {
        println!("\n{}", "✅ Both strategies agree on every word".green().bold());
    } else {
        println!(
            "\n{}",
            format!(
                "❌ Strategies disagree on: {}",
                result.mismatches.join(", ")
            )
            .red()
            .bold()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameConfig;
    use crate::session::{GameService, SessionError};
    use crate::wordlists::embedded_dictionary;
    use std::sync::Arc;

    #[test]
    fn not_found_output_has_only_result() {
        let text = format_game_output(&GameOutput::not_found(SessionError::SessionNotFound));
        assert_eq!(text, "result: Game board/state not found.\n");
    }

    #[test]
    fn created_output_fields() {
        let service =
            GameService::with_seed(Arc::new(embedded_dictionary()), GameConfig::default(), 2);
        let output = service.create_new_game().unwrap();
        let text = format_game_output(&output);

        assert!(text.starts_with("result: Created new game.\n"));
        assert!(text.contains(&format!("id: {}", output.id.as_ref().unwrap())));
        assert!(text.contains("guessed: []"));
        assert!(!text.contains("original:"));
    }
}
