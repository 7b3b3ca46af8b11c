//! Game sessions
//!
//! A concurrent store of rounds keyed by opaque ids, and the stateless service
//! that creates rounds and applies guesses against it.

mod service;
mod store;

pub use service::{GameOutput, GameService, ResultKind};
pub use store::{GuessReport, Session, SessionError, SessionId, SessionStore};
