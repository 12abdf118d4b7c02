//! Core match types: players, RNG, configuration, phases, state, errors.
//!
//! Everything here is plain data. The rules that move a match from one
//! state to the next live in `rules`; timing lives in `engine`.

pub mod config;
pub mod error;
pub mod phase;
pub mod player;
pub mod record;
pub mod rng;
pub mod state;

pub use config::{MatchConfig, PLAYER_COUNT};
pub use error::{ConfigError, Rejection};
pub use phase::Phase;
pub use player::{Player, PlayerId, PlayerMap};
pub use record::{RoundNotice, RoundOutcome, RoundRecord};
pub use rng::GameRng;
pub use state::{invite_code_for, MatchState, Selection, WELCOME_MESSAGE};
