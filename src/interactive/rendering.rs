//! TUI rendering with ratatui
//!
//! Board, progress and message panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::engine::GameState;
use crate::output::formatters::{group_by_length, mask_word, spaced_letters};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Letters
            Constraint::Min(8),    // Board and side panel
            Constraint::Length(3), // Input
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_letters(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 JUMBLE - Find the hidden words")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let content = match (app.state(), app.revealed.as_deref()) {
        (Some(state), _) => Line::from(Span::styled(
            spaced_letters(state.scramble()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        (None, Some(word)) => Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                word.to_uppercase(),
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ),
        ]),
        (None, None) => Line::from("No game in progress"),
    };

    let paragraph = Paragraph::new(vec![Line::default(), content])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Letters ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn board_lines(state: &GameState) -> Vec<Line<'static>> {
    let words: Vec<&str> = state.sub_words().map(|(word, _)| word).collect();
    group_by_length(words)
        .into_iter()
        .map(|(len, group)| {
            let mut spans = vec![Span::styled(
                format!("{len}: "),
                Style::default().fg(Color::DarkGray),
            )];
            for word in group {
                let span = if state.is_guessed(word) {
                    Span::styled(
                        word.to_uppercase(),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::raw(mask_word(word))
                };
                spans.push(span);
                spans.push(Span::raw("   "));
            }
            Line::from(spans)
        })
        .collect()
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let content = app
        .state()
        .map_or_else(|| vec![Line::from("Press Ctrl-N to start")], board_lines);

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Hidden Words ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let (found, total) = app
        .state()
        .map_or((0, 0), |s| (s.guessed_count(), s.total_words()));
    let percent = if total == 0 {
        0
    } else {
        u16::try_from(found * 100 / total).unwrap_or(100)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{found}/{total} words"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Guessing => (" Your Guess | Enter to submit | Tab to shuffle ", Color::Yellow),
        InputMode::Finished => (
            " 🎉 ALL WORDS FOUND! 🎉 | Press 'n' for new game or 'q' to quit ",
            Color::Green,
        ),
        InputMode::NoGame => (" Press 'n' for new game or 'q' to quit ", Color::DarkGray),
    };

    let input = Paragraph::new(app.input_buffer.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        "Games: {} | Completed: {} | Words found: {} | Esc: Quit  Ctrl-N: New  Ctrl-G: Give up",
        app.stats.games_started, app.stats.games_completed, app.stats.words_found
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
