//! Concurrent game session store
//!
//! Maps opaque session ids to game rounds. The map itself sits behind a
//! read-write lock that is only held long enough to find or insert an entry;
//! each entry has its own mutex, so guesses against one session are serialized
//! while guesses against different sessions proceed in parallel.

use crate::core::normalize;
use crate::engine::{GameState, GuessOutcome};
use chrono::{DateTime, TimeDelta, Utc};
use log::debug;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use thiserror::Error;
use uuid::Uuid;

/// Opaque session identifier (random 128-bit UUID)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(String);

impl SessionId {
    fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SessionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Failure to resolve a session id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The id was missing or blank
    #[error("Invalid Game ID.")]
    InvalidSessionId,
    /// The id is well-formed but no session has it
    #[error("Game board/state not found.")]
    SessionNotFound,
}

/// A stored round with its bookkeeping
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
    state: GameState,
}

impl Session {
    #[must_use]
    pub const fn id(&self) -> &SessionId {
        &self.id
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }
}

/// What happened when a guess was applied to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub id: SessionId,
    pub original: String,
    pub scramble: String,
    /// Normalized guess, `None` if nothing was submitted
    pub guess_word: Option<String>,
    pub outcome: GuessOutcome,
    pub min_length: usize,
    pub total_words: usize,
    /// Hidden words left after this guess
    pub remaining_words: usize,
    pub guessed_words: Vec<String>,
}

impl GuessReport {
    /// True once no hidden words remain
    #[must_use]
    pub const fn all_guessed(&self) -> bool {
        self.remaining_words == 0
    }
}

struct SessionEntry {
    session: Session,
    rng: StdRng,
}

/// Thread-safe registry of game sessions
///
/// Sessions live until removed with [`SessionStore::remove`] or evicted with
/// [`SessionStore::evict_idle`]; nothing expires on its own.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<FxHashMap<SessionId, Arc<Mutex<SessionEntry>>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a round under a fresh id
    ///
    /// `rng` becomes the session's own random source for later rescrambles.
    pub fn create_session(&self, state: GameState, rng: StdRng) -> SessionId {
        let now = Utc::now();
        let mut sessions = write(&self.sessions);

        loop {
            let id = SessionId::generate();
            if let Entry::Vacant(slot) = sessions.entry(id.clone()) {
                slot.insert(Arc::new(Mutex::new(SessionEntry {
                    session: Session {
                        id: id.clone(),
                        created_at: now,
                        modified_at: now,
                        state,
                    },
                    rng,
                })));
                debug!("Created session {id}");
                return id;
            }
        }
    }

    /// Snapshot of a session
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidSessionId`] for a missing or blank id,
    /// [`SessionError::SessionNotFound`] if no session has it.
    pub fn get(&self, id: Option<&str>) -> Result<Session, SessionError> {
        let entry = self.lookup(id)?;
        let entry = lock(&*entry);
        Ok(entry.session.clone())
    }

    /// Apply a guess to a session
    ///
    /// Under the session's lock: rescramble the puzzle, check the guess, and
    /// touch the modification time. A missing guess counts as incorrect.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::get`]; the store is left unchanged.
    pub fn apply_guess(
        &self,
        id: Option<&str>,
        word: Option<&str>,
    ) -> Result<GuessReport, SessionError> {
        let entry = self.lookup(id)?;
        let mut entry = lock(&*entry);
        let SessionEntry { session, rng } = &mut *entry;

        session.state.rescramble(rng);

        let guess_word = word.map(normalize);
        let outcome = guess_word
            .as_deref()
            .map_or(GuessOutcome::Incorrect, |w| session.state.guess(w));
        session.modified_at = Utc::now();

        let state = &session.state;
        debug!("Session {}: guess {guess_word:?} -> {outcome:?}", session.id);

        Ok(GuessReport {
            id: session.id.clone(),
            original: state.original().to_string(),
            scramble: state.scramble().to_string(),
            guess_word,
            outcome,
            min_length: state.min_length(),
            total_words: state.total_words(),
            remaining_words: state.remaining_words(),
            guessed_words: state.guessed_words().into_iter().map(String::from).collect(),
        })
    }

    /// Delete a session; returns whether it existed
    pub fn remove(&self, id: &str) -> bool {
        let removed = write(&self.sessions).remove(id.trim()).is_some();
        if removed {
            debug!("Removed session {id}");
        }
        removed
    }

    /// Drop sessions not modified within `max_idle`; returns how many were dropped
    ///
    /// A window reaching past the earliest representable time evicts nothing.
    pub fn evict_idle(&self, max_idle: TimeDelta) -> usize {
        let Some(cutoff) = Utc::now().checked_sub_signed(max_idle) else {
            return 0;
        };
        let mut sessions = write(&self.sessions);
        let before = sessions.len();
        sessions.retain(|_, entry| lock(entry.as_ref()).session.modified_at >= cutoff);
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!("Evicted {evicted} idle sessions");
        }
        evicted
    }

    /// Number of live sessions
    #[must_use]
    pub fn len(&self) -> usize {
        read(&self.sessions).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        read(&self.sessions).is_empty()
    }

    /// Ids of all live sessions, sorted
    #[must_use]
    pub fn ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<SessionId> = read(&self.sessions).keys().cloned().collect();
        ids.sort_unstable();
        ids
    }

    /// Resolve an id to its entry, releasing the map lock before returning
    fn lookup(&self, id: Option<&str>) -> Result<Arc<Mutex<SessionEntry>>, SessionError> {
        let id = id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(SessionError::InvalidSessionId)?;

        read(&self.sessions)
            .get(id)
            .cloned()
            .ok_or(SessionError::SessionNotFound)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn read<T>(rw: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    rw.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(rw: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    rw.write().unwrap_or_else(PoisonError::into_inner)
}
