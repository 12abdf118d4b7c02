//! Time-driven match engine.
//!
//! - `clock`: the injected time source
//! - `timers`: one cancelable slot per delayed step
//! - `driver`: `MatchEngine`, the entry points a presentation layer calls

pub mod clock;
pub mod driver;
pub mod timers;

pub use clock::{Clock, ManualClock, SystemClock};
pub use driver::MatchEngine;
pub use timers::{TimerKind, TimerSet};
