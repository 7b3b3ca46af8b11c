//! Stateless game service
//!
//! Request/response surface over the session store: every call carries the
//! session id, and every answer is a [`GameOutput`] describing the round.

use super::store::{GuessReport, SessionError, SessionId, SessionStore};
use crate::core::Dictionary;
use crate::engine::{GameConfig, GameError, GameState, GuessOutcome};
use chrono::TimeDelta;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Kind of answer returned to a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Created,
    /// Returned when viewing an unfinished game
    InProgress,
    GuessedCorrectly,
    GuessedIncorrectly,
    AlreadyGuessed,
    TooShort { min_length: usize },
    AllGuessed,
    InvalidSessionId,
    SessionNotFound,
}

impl ResultKind {
    /// True for the kinds a transport should report as "not found"
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::InvalidSessionId | Self::SessionNotFound)
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "Created new game."),
            Self::InProgress => write!(f, "Game in progress."),
            Self::GuessedCorrectly => write!(f, "Guessed correctly."),
            Self::GuessedIncorrectly => write!(f, "Guessed incorrectly."),
            Self::AlreadyGuessed => write!(f, "You already guessed this word."),
            Self::TooShort { min_length } => {
                write!(f, "Must be at least {min_length} characters.")
            }
            Self::AllGuessed => write!(f, "All words guessed."),
            Self::InvalidSessionId => write!(f, "{}", SessionError::InvalidSessionId),
            Self::SessionNotFound => write!(f, "{}", SessionError::SessionNotFound),
        }
    }
}

impl From<SessionError> for ResultKind {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::InvalidSessionId => Self::InvalidSessionId,
            SessionError::SessionNotFound => Self::SessionNotFound,
        }
    }
}

/// Answer for a create or guess request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutput {
    pub kind: ResultKind,
    pub id: Option<SessionId>,
    pub original: Option<String>,
    pub scramble: Option<String>,
    pub guess_word: Option<String>,
    pub total_words: usize,
    pub remaining_words: usize,
    pub guessed_words: Vec<String>,
}

impl GameOutput {
    /// Output carrying only a not-found kind
    #[must_use]
    pub fn not_found(err: SessionError) -> Self {
        Self {
            kind: err.into(),
            id: None,
            original: None,
            scramble: None,
            guess_word: None,
            total_words: 0,
            remaining_words: 0,
            guessed_words: Vec::new(),
        }
    }

    /// Human-readable result line
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    fn from_state(kind: ResultKind, id: Option<SessionId>, state: &GameState) -> Self {
        Self {
            kind,
            id,
            original: Some(state.original().to_string()),
            scramble: Some(state.scramble().to_string()),
            guess_word: None,
            total_words: state.total_words(),
            remaining_words: state.remaining_words(),
            guessed_words: state.guessed_words().into_iter().map(String::from).collect(),
        }
    }
}

impl From<GuessReport> for GameOutput {
    fn from(report: GuessReport) -> Self {
        let kind = if report.all_guessed() {
            ResultKind::AllGuessed
        } else {
            match report.outcome {
                GuessOutcome::Correct => ResultKind::GuessedCorrectly,
                GuessOutcome::AlreadyGuessed => ResultKind::AlreadyGuessed,
                GuessOutcome::TooShort => ResultKind::TooShort {
                    min_length: report.min_length,
                },
                GuessOutcome::Incorrect => ResultKind::GuessedIncorrectly,
            }
        };

        Self {
            kind,
            id: Some(report.id),
            original: Some(report.original),
            scramble: Some(report.scramble),
            guess_word: report.guess_word,
            total_words: report.total_words,
            remaining_words: report.remaining_words,
            guessed_words: report.guessed_words,
        }
    }
}

/// Game service shared by all requests
///
/// Cheap to share behind an `Arc`; every method takes `&self`.
pub struct GameService {
    dict: Arc<Dictionary>,
    config: GameConfig,
    store: SessionStore,
    rng: Mutex<StdRng>,
}

impl GameService {
    /// Service seeded from the operating system
    #[must_use]
    pub fn new(dict: Arc<Dictionary>, config: GameConfig) -> Self {
        Self::with_rng(dict, config, StdRng::from_os_rng())
    }

    /// Service with a fixed seed, for reproducible runs
    #[must_use]
    pub fn with_seed(dict: Arc<Dictionary>, config: GameConfig, seed: u64) -> Self {
        Self::with_rng(dict, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(dict: Arc<Dictionary>, config: GameConfig, rng: StdRng) -> Self {
        Self {
            dict,
            config,
            store: SessionStore::new(),
            rng: Mutex::new(rng),
        }
    }

    #[must_use]
    pub const fn store(&self) -> &SessionStore {
        &self.store
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Start a new round and register it as a session
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if the service configuration is invalid or no
    /// word of the configured length exists.
    pub fn create_new_game(&self) -> Result<GameOutput, GameError> {
        // Each session gets its own generator so later guesses never contend
        // on the service-wide one.
        let mut rng = {
            let mut seed_source = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            StdRng::from_rng(&mut *seed_source)
        };
        let state = GameState::create(&self.dict, &self.config, &mut rng)?;
        let mut output = GameOutput::from_state(ResultKind::Created, None, &state);
        let id = self.store.create_session(state, rng);
        info!("New game {id}");

        output.id = Some(id);
        Ok(output)
    }

    /// Submit a guess for a session
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the id is missing, blank, or unknown. Use
    /// [`GameOutput::not_found`] to turn it into a response.
    pub fn process_guess(
        &self,
        id: Option<&str>,
        word: Option<&str>,
    ) -> Result<GameOutput, SessionError> {
        self.store.apply_guess(id, word).map(GameOutput::from)
    }

    /// Current view of a session without guessing
    ///
    /// # Errors
    ///
    /// Same as [`GameService::process_guess`].
    pub fn show(&self, id: Option<&str>) -> Result<GameOutput, SessionError> {
        let session = self.store.get(id)?;
        let kind = if session.state().is_complete() {
            ResultKind::AllGuessed
        } else {
            ResultKind::InProgress
        };
        Ok(GameOutput::from_state(kind, Some(session.id().clone()), session.state()))
    }

    /// Evict sessions idle for longer than `max_idle`
    pub fn evict_idle(&self, max_idle: TimeDelta) -> usize {
        self.store.evict_idle(max_idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::embedded_dictionary;

    fn service() -> GameService {
        GameService::with_seed(Arc::new(embedded_dictionary()), GameConfig::default(), 42)
    }

    fn hidden_words(service: &GameService, id: &SessionId) -> Vec<String> {
        service
            .store()
            .get(Some(id.as_str()))
            .unwrap()
            .state()
            .sub_words()
            .map(|(w, _)| w.to_string())
            .collect()
    }

    #[test]
    fn create_new_game_output() {
        let service = service();
        let output = service.create_new_game().unwrap();
        assert_eq!(output.kind, ResultKind::Created);
        assert_eq!(output.message(), "Created new game.");
        assert!(output.id.is_some());
        assert_eq!(output.original.as_deref().map(str::len), Some(6));
        assert_ne!(output.scramble, output.original);
        assert!(output.guessed_words.is_empty());
        assert_eq!(output.remaining_words, output.total_words);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let service = GameService::with_seed(
            Arc::new(embedded_dictionary()),
            GameConfig::new(6, Some(9)),
            1,
        );
        let err = service.create_new_game().unwrap_err();
        assert!(err.is_configuration());
        assert!(service.store().is_empty());
    }

    #[test]
    fn wrong_and_null_guesses() {
        let service = service();
        let created = service.create_new_game().unwrap();
        let id = created.id.as_ref().map(SessionId::as_str);

        let output = service.process_guess(id, Some("qqqqq")).unwrap();
        assert_eq!(output.kind, ResultKind::GuessedIncorrectly);
        assert_eq!(output.message(), "Guessed incorrectly.");
        assert_eq!(output.remaining_words, created.remaining_words);

        let output = service.process_guess(id, None).unwrap();
        assert_eq!(output.kind, ResultKind::GuessedIncorrectly);
        assert_eq!(output.guess_word, None);
        assert_eq!(output.original, created.original);
        assert!(output.guessed_words.is_empty());
    }

    #[test]
    fn short_guess_reports_minimum() {
        let service = service();
        let created = service.create_new_game().unwrap();
        let id = created.id.as_ref().map(SessionId::as_str);
        let output = service.process_guess(id, Some("ab")).unwrap();
        assert_eq!(output.kind, ResultKind::TooShort { min_length: 3 });
        assert_eq!(output.message(), "Must be at least 3 characters.");
    }

    #[test]
    fn not_found_kinds() {
        let service = service();
        assert_eq!(
            service.process_guess(None, Some("owl")),
            Err(SessionError::InvalidSessionId)
        );
        let err = service
            .process_guess(Some("00000000-0000-0000-0000-000000000000"), Some("owl"))
            .unwrap_err();
        let output = GameOutput::not_found(err);
        assert_eq!(output.kind, ResultKind::SessionNotFound);
        assert!(output.kind.is_not_found());
        assert_eq!(output.message(), "Game board/state not found.");
    }

    #[test]
    fn guess_every_word() {
        let service = service();
        let created = service.create_new_game().unwrap();
        let id = created.id.clone().unwrap();
        let words = hidden_words(&service, &id);
        let total = words.len();

        for (i, word) in words.iter().enumerate() {
            let output = service.process_guess(Some(id.as_str()), Some(word.as_str())).unwrap();
            let remaining = total - i - 1;
            assert_eq!(output.remaining_words, remaining);
            assert_eq!(output.guessed_words.len(), i + 1);
            if remaining == 0 {
                assert_eq!(output.kind, ResultKind::AllGuessed);
                assert_eq!(output.message(), "All words guessed.");
            } else {
                assert_eq!(output.kind, ResultKind::GuessedCorrectly);
            }
        }

        let shown = service.show(Some(id.as_str())).unwrap();
        assert_eq!(shown.kind, ResultKind::AllGuessed);
        assert_eq!(shown.remaining_words, 0);
    }

    #[test]
    fn repeat_guess_is_reported() {
        let service = service();
        let created = service.create_new_game().unwrap();
        let id = created.id.clone().unwrap();
        let words = hidden_words(&service, &id);
        if words.len() < 2 {
            return;
        }

        service.process_guess(Some(id.as_str()), Some(words[0].as_str())).unwrap();
        let output = service.process_guess(Some(id.as_str()), Some(words[0].as_str())).unwrap();
        assert_eq!(output.kind, ResultKind::AlreadyGuessed);
        assert_eq!(output.remaining_words, words.len() - 1);
    }
}
