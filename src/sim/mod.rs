//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Every transition is a function of `(State, Event)` alone
//! - Every transition returns a new `State`; nothing is mutated in place
//! - No clocks, channels, or platform dependencies

pub mod bot;
pub mod collision;
pub mod event;
pub mod motion;
pub mod state;
pub mod tick;

pub use bot::bot_velocity;
pub use collision::resolve;
pub use event::Event;
pub use motion::move_body;
pub use state::{Body, BodyId, BodyKind, Score, State};
pub use tick::reduce;
