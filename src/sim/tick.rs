//! The state reducer
//!
//! One pure transition per event, folded left-to-right over the merged
//! tick/input stream by the driver.

use glam::Vec2;

use super::bot::bot_velocity;
use super::collision::resolve;
use super::event::Event;
use super::motion::move_body;
use super::state::{BodyId, State};

/// Advance the simulation by one tick.
///
/// Order matters: the bot retargets from the pre-motion ball, then paddles
/// and ball move, then collisions and scoring resolve on the moved state.
fn execute_tick(s: State, elapsed: f64) -> State {
    let paddles = s.paddles.map(|paddle| match paddle.id {
        BodyId::EnemyPaddle => paddle.with_vel(bot_velocity(&paddle, &s.ball)),
        _ => paddle,
    });
    resolve(State {
        paddles: paddles.map(move_body),
        ball: move_body(s.ball),
        time: elapsed,
        ..s
    })
}

/// Fold one event into the state.
///
/// A `Move` only retargets the human paddle's vertical velocity; a `Tick`
/// runs the full motion/collision pipeline. Pure and total: every reachable
/// `(state, event)` pair has a defined next state.
pub fn reduce(s: State, event: Event) -> State {
    match event {
        Event::Move { direction } => {
            let paddles = s.paddles.map(|paddle| match paddle.id {
                BodyId::FriendlyPaddle => paddle.with_vel(Vec2::new(0.0, direction)),
                _ => paddle,
            });
            State { paddles, ..s }
        }
        Event::Tick { elapsed } => execute_tick(s, elapsed),
    }
}
