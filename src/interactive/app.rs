//! TUI application state and logic

use crate::engine::{BoardFeedback, GameBoard, GameState};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App<'a> {
    pub board: GameBoard<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// Original word of the last round that was given up
    pub revealed: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Finished,
    NoGame,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_started: usize,
    pub games_completed: usize,
    pub words_found: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(board: GameBoard<'a>) -> Self {
        Self {
            board,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Find every word hidden in the scrambled letters.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::NoGame,
            revealed: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.board.state()
    }

    pub fn new_game(&mut self) {
        self.input_buffer.clear();
        self.revealed = None;
        match self.board.new_game() {
            Ok(state) => {
                let text = format!("New game: {} words to find.", state.total_words());
                self.stats.games_started += 1;
                self.input_mode = InputMode::Guessing;
                self.add_message(&text, MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);
        if guess.is_empty() {
            return;
        }

        let feedback = self.board.guess(&guess);
        let style = match feedback {
            BoardFeedback::Correct { .. } | BoardFeedback::Complete => MessageStyle::Success,
            BoardFeedback::Incorrect | BoardFeedback::NoGame => MessageStyle::Error,
            BoardFeedback::TooShort { .. } | BoardFeedback::AlreadyGuessed => MessageStyle::Info,
        };
        if feedback.is_correct() {
            self.stats.words_found += 1;
        }
        self.add_message(&format!("{}: {feedback}", guess.to_uppercase()), style);

        if feedback == BoardFeedback::Complete {
            self.stats.games_completed += 1;
            self.input_mode = InputMode::Finished;
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        }
    }

    pub fn rescramble(&mut self) {
        if !self.board.rescramble() {
            self.add_message(&BoardFeedback::NoGame.to_string(), MessageStyle::Error);
        }
    }

    /// Give up the current round and reveal its word
    pub fn goodbye(&mut self) {
        self.revealed = self.board.state().map(|s| s.original().to_string());
        self.board.goodbye();
        self.input_buffer.clear();
        self.input_mode = InputMode::NoGame;
        if let Some(word) = self.revealed.clone() {
            self.add_message(
                &format!("Goodbye! The word was {}.", word.to_uppercase()),
                MessageStyle::Info,
            );
        }
        self.add_message("Press Ctrl-N for a new game.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match (key.code, ctrl) {
            (KeyCode::Char('c'), true) | (KeyCode::Esc, _) => self.should_quit = true,
            (KeyCode::Char('n'), true) => self.new_game(),
            (KeyCode::Char('g'), true) => self.goodbye(),
            _ => match self.input_mode {
                InputMode::Guessing => self.handle_guessing_key(key.code),
                InputMode::Finished | InputMode::NoGame => match key.code {
                    KeyCode::Char('q') => self.should_quit = true,
                    KeyCode::Char('n') => self.new_game(),
                    _ => {}
                },
            },
        }
    }

    fn handle_guessing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.input_buffer.push(c.to_ascii_lowercase());
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Tab => self.rescramble(),
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_game();

    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::engine::GameConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dict() -> Dictionary {
        Dictionary::from_words(["yellow", "yell", "owl", "low", "lye"])
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn app(dict: &Dictionary) -> App<'_> {
        let mut app = App::new(GameBoard::new(
            dict,
            GameConfig::default(),
            StdRng::seed_from_u64(4),
        ));
        app.new_game();
        app
    }

    #[test]
    fn typing_and_guessing() {
        let dict = dict();
        let mut app = app(&dict);
        press(&mut app, KeyCode::Char('O'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('w'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.input_buffer, "owl");

        press(&mut app, KeyCode::Enter);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.stats.words_found, 1);
        assert!(app.state().unwrap().is_guessed("owl"));
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn finishing_a_round() {
        let dict = dict();
        let mut app = app(&dict);
        for word in ["owl", "low", "lye", "yell"] {
            type_word(&mut app, word);
        }
        assert_eq!(app.input_mode, InputMode::Finished);
        assert_eq!(app.stats.games_completed, 1);

        // Letters no longer go to the input box
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.stats.games_started, 2);
    }

    #[test]
    fn goodbye_reveals_word() {
        let dict = dict();
        let mut app = app(&dict);
        ctrl(&mut app, 'g');
        assert_eq!(app.input_mode, InputMode::NoGame);
        assert_eq!(app.revealed.as_deref(), Some("yellow"));
        assert!(app.state().is_none());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn tab_rescrambles() {
        let dict = dict();
        let mut app = app(&dict);
        press(&mut app, KeyCode::Tab);
        let state = app.state().unwrap();
        assert_ne!(state.scramble(), state.original());
    }

    #[test]
    fn escape_quits() {
        let dict = dict();
        let mut app = app(&dict);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
