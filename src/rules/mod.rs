//! Match rules.
//!
//! - `setup`: deal a fresh match into the lobby
//! - `reducer`: the turn engine, one event at a time
//! - `resolution`: comparing the committed cards, deciding the match
//! - `opponent`: the scripted opponent's stat choice
//!
//! Nothing here knows about time. The engine driver turns delays into
//! scheduled events and feeds them to `reduce`.

pub mod opponent;
pub mod reducer;
pub mod resolution;
pub mod setup;

pub use opponent::choose_stat;
pub use reducer::{reduce, Event, Transition};
pub use resolution::{
    detect_game_over, finish_match, resolve_round, GameOver, GameOverReason, Resolution,
};
pub use setup::initialize_match;
