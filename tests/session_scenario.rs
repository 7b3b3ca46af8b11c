//! Integration tests for game sessions.
//!
//! Drives the game service the way a request/response front end would: create a
//! game, guess against it by id, and hammer it from several threads.

use std::sync::Arc;
use std::thread;

use jumble::core::Dictionary;
use jumble::engine::{GameConfig, GuessOutcome, sub_words};
use jumble::session::{GameOutput, GameService, ResultKind, SessionError};
use jumble::wordlists::{embedded_dictionary, load_from_file};

/// Dictionary whose only six-letter word is "yellow"
fn yellow_dictionary() -> Arc<Dictionary> {
    Arc::new(Dictionary::from_words([
        "yellow", "yell", "owl", "low", "lye", "well", "woe", "eel", "cat",
    ]))
}

fn hidden_words(service: &GameService, id: &str) -> Vec<String> {
    service
        .store()
        .get(Some(id))
        .expect("session exists")
        .state()
        .sub_words()
        .map(|(word, _)| word.to_string())
        .collect()
}

#[test]
fn full_game_scenario() {
    let service = GameService::with_seed(yellow_dictionary(), GameConfig::default(), 11);

    let created = service.create_new_game().expect("game created");
    assert_eq!(created.kind, ResultKind::Created);
    assert_eq!(created.original.as_deref(), Some("yellow"));
    assert_eq!(created.total_words, 6);
    assert_eq!(created.remaining_words, 6);
    let id = created.id.expect("session id").to_string();

    let wrong = service.process_guess(Some(id.as_str()), Some("cat")).unwrap();
    assert_eq!(wrong.kind, ResultKind::GuessedIncorrectly);
    assert_eq!(wrong.remaining_words, 6);

    let mut expected_remaining = 6;
    for word in ["Owl", " yell ", "low", "lye", "well"] {
        let output = service.process_guess(Some(id.as_str()), Some(word)).unwrap();
        expected_remaining -= 1;
        assert_eq!(output.kind, ResultKind::GuessedCorrectly, "guess {word:?}");
        assert_eq!(output.remaining_words, expected_remaining);
        assert_ne!(output.scramble.as_deref(), Some("yellow"));
    }

    let repeat = service.process_guess(Some(id.as_str()), Some("owl")).unwrap();
    assert_eq!(repeat.kind, ResultKind::AlreadyGuessed);
    assert_eq!(repeat.remaining_words, 1);

    let last = service.process_guess(Some(id.as_str()), Some("woe")).unwrap();
    assert_eq!(last.kind, ResultKind::AllGuessed);
    assert_eq!(last.message(), "All words guessed.");
    assert_eq!(last.remaining_words, 0);
    assert_eq!(
        last.guessed_words,
        ["low", "lye", "owl", "woe", "well", "yell"]
    );
}

#[test]
fn unknown_sessions_leave_store_untouched() {
    let service = GameService::with_seed(yellow_dictionary(), GameConfig::default(), 3);
    service.create_new_game().unwrap();

    let missing = service
        .process_guess(Some("not-a-session"), Some("owl"))
        .unwrap_err();
    assert_eq!(missing, SessionError::SessionNotFound);
    assert_eq!(GameOutput::not_found(missing).kind, ResultKind::SessionNotFound);

    let blank = service.process_guess(Some(""), Some("owl")).unwrap_err();
    assert_eq!(blank, SessionError::InvalidSessionId);
    assert_eq!(blank.to_string(), "Invalid Game ID.");

    assert_eq!(service.store().len(), 1);
}

#[test]
fn concurrent_guesses_on_one_session_are_not_lost() {
    let service = GameService::with_seed(Arc::new(embedded_dictionary()), GameConfig::default(), 21);
    let id = service.create_new_game().unwrap().id.unwrap().to_string();
    let words = hidden_words(&service, &id);
    let total = words.len();

    // Four threads race to guess every word; each word is won exactly once.
    let correct: usize = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let store = service.store();
                let id = id.as_str();
                let words = &words;
                scope.spawn(move || {
                    let mut order: Vec<&String> = words.iter().collect();
                    order.rotate_left(t * words.len() / 4);
                    order
                        .into_iter()
                        .filter(|word| {
                            let report = store.apply_guess(Some(id), Some(word.as_str())).unwrap();
                            report.outcome == GuessOutcome::Correct
                        })
                        .count()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    assert_eq!(correct, total);
    let session = service.store().get(Some(id.as_str())).unwrap();
    assert!(session.state().is_complete());
    assert_eq!(session.state().guessed_count(), total);

    let after = service.process_guess(Some(id.as_str()), None).unwrap();
    assert_eq!(after.kind, ResultKind::AllGuessed);
}

#[test]
fn concurrent_games_are_independent() {
    let service = GameService::new(Arc::new(embedded_dictionary()), GameConfig::default());

    let ids: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = &service;
                scope.spawn(move || {
                    let created = service.create_new_game().unwrap();
                    let id = created.id.unwrap().to_string();
                    let first = hidden_words(service, &id).into_iter().next();
                    if let Some(word) = first {
                        let output = service.process_guess(Some(id.as_str()), Some(word.as_str())).unwrap();
                        assert_eq!(output.remaining_words, created.total_words - 1);
                    }
                    id
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(service.store().len(), 8);
    for id in &ids {
        let session = service.store().get(Some(id.as_str())).unwrap();
        assert!(session.state().guessed_count() <= 1);
    }
}

#[test]
fn custom_word_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    std::fs::write(&path, "Garden\n  danger \nranged\ngander\nred\nrag\n\nand\n").unwrap();

    let dict = load_from_file(&path).unwrap();
    assert_eq!(dict.len(), 7);
    assert!(dict.exists("DANGER"));

    let found: Vec<String> = sub_words(&dict, "garden", None).into_iter().collect();
    assert_eq!(found, ["and", "danger", "gander", "rag", "ranged", "red"]);
}
