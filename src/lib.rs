//! Rally Pong - a classic Pong duel against a reactive bot
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, motion, collisions, scoring, bot)
//! - `driver`: Event-stream driver (fixed-rate clock and keyboard edges merged
//!   into one ordered channel, folded through the reducer)
//!
//! Rendering is not part of this crate: the driver publishes an immutable
//! [`State`] snapshot after every processed event, and a view layer draws it.

pub mod driver;
pub mod sim;

pub use sim::{Body, Event, Score, State};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Side length of the square playfield
    pub const CANVAS_SIZE: f32 = 600.0;

    /// Paddle dimensions
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 50.0;
    /// Ball bounding-box size; doubles as the paddle-face hit reach
    pub const BALL_SIZE: f32 = 8.0;

    /// Points needed to win the match
    pub const GAME_POINTS: u32 = 7;
    /// Ball x beyond which the bot idles instead of tracking
    pub const BOT_REACTION_X: f32 = 300.0;
    /// Speed multiplier applied to the ball on every bounce
    pub const BALL_ACCELERATION: f32 = 1.1;

    /// Serve positions
    pub const PLAYER1_X: f32 = 535.0;
    pub const PLAYER1_Y: f32 = 275.0;
    pub const PLAYER2_X: f32 = 65.0;
    pub const PLAYER2_Y: f32 = 275.0;
    pub const BALL_XY: f32 = 296.0;

    /// Highest paddle y that keeps the paddle fully on the field
    pub const PADDLE_MAX_Y: f32 = CANVAS_SIZE - PADDLE_HEIGHT;
    /// Vertical paddle speed set by input or the bot
    pub const PADDLE_SPEED: f32 = 2.0;
    /// Horizontal offset the ball is pushed out to after a paddle hit
    pub const PADDLE_BOUNCE_OFFSET: f32 = 15.0;
}

/// Rotate a vector by an angle in degrees.
///
/// Mathematical convention: `x' = x cosθ − y sinθ, y' = x sinθ + y cosθ`.
#[inline]
pub fn rotate_deg(v: Vec2, deg: f32) -> Vec2 {
    let (sin, cos) = deg.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Unit vector `deg` degrees away from straight up `(0, -1)`.
#[inline]
pub fn unit_vec_in_direction(deg: f32) -> Vec2 {
    rotate_deg(Vec2::new(0.0, -1.0), deg)
}

/// The orthogonal of a vector: `(y, -x)`.
#[inline]
pub fn orthogonal(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}
