//! Game state and core simulation types
//!
//! Immutable snapshots: a single `State` value is threaded through the event
//! fold, and every transition builds a new one. Old states are discarded once
//! superseded.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::unit_vec_in_direction;

/// Identity of a simulated body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyId {
    /// The human-driven paddle, defending the right edge
    FriendlyPaddle,
    /// The bot-driven paddle, defending the left edge
    EnemyPaddle,
    Ball,
}

/// What a body is, independent of which one it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Paddle,
    Ball,
}

/// A simulated entity, paddle or ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    pub kind: BodyKind,
    /// Top-left corner of the body's bounding box
    pub pos: Vec2,
    pub vel: Vec2,
    /// Speed multiplier applied on bounce (1.1 for the ball, 0 for paddles)
    pub acc: f32,
}

impl Body {
    /// A stationary paddle at the given position
    pub fn paddle(id: BodyId, pos: Vec2) -> Self {
        Self {
            id,
            kind: BodyKind::Paddle,
            pos,
            vel: Vec2::ZERO,
            acc: 0.0,
        }
    }

    /// A ball carrying the standard acceleration factor
    pub fn ball(pos: Vec2, vel: Vec2) -> Self {
        Self {
            id: BodyId::Ball,
            kind: BodyKind::Ball,
            pos,
            vel,
            acc: BALL_ACCELERATION,
        }
    }

    /// Same body at a different position
    pub fn with_pos(self, pos: Vec2) -> Self {
        Self { pos, ..self }
    }

    /// Same body with a different velocity
    pub fn with_vel(self, vel: Vec2) -> Self {
        Self { vel, ..self }
    }
}

/// Points per player; only ever incremented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub player1: u32,
    pub player2: u32,
}

/// Complete game state snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Elapsed time carried by the last processed tick
    pub time: f64,
    pub score: Score,
    /// Index 0 = friendly (human), index 1 = enemy (bot)
    pub paddles: [Body; 2],
    pub ball: Body,
    /// True iff either score has reached [`GAME_POINTS`]
    pub game_over: bool,
}

impl State {
    /// State at the start of a game (and after every restart)
    pub fn initial() -> Self {
        Self {
            time: 0.0,
            score: Score::default(),
            paddles: start_paddles(),
            ball: initial_ball(),
            game_over: false,
        }
    }

    /// The human-driven paddle
    pub fn friendly_paddle(&self) -> &Body {
        &self.paddles[0]
    }

    /// The bot-driven paddle
    pub fn enemy_paddle(&self) -> &Body {
        &self.paddles[1]
    }
}

/// Both paddles at their serve positions, friendly first
pub fn start_paddles() -> [Body; 2] {
    [
        Body::paddle(BodyId::FriendlyPaddle, Vec2::new(PLAYER1_X, PLAYER1_Y)),
        Body::paddle(BodyId::EnemyPaddle, Vec2::new(PLAYER2_X, PLAYER2_Y)),
    ]
}

/// The ball at center field, served toward the human side
pub fn initial_ball() -> Body {
    Body::ball(Vec2::new(BALL_XY, BALL_XY), unit_vec_in_direction(90.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let s = State::initial();
        assert_eq!(s.time, 0.0);
        assert_eq!(s.score, Score::default());
        assert!(!s.game_over);

        assert_eq!(s.ball.pos, Vec2::new(296.0, 296.0));
        // Serve velocity is the up vector rotated 90°, i.e. (1, 0)
        assert!((s.ball.vel.x - 1.0).abs() < 1e-6);
        assert!(s.ball.vel.y.abs() < 1e-6);
        assert_eq!(s.ball.acc, BALL_ACCELERATION);

        assert_eq!(s.friendly_paddle().id, BodyId::FriendlyPaddle);
        assert_eq!(s.friendly_paddle().pos, Vec2::new(535.0, 275.0));
        assert_eq!(s.enemy_paddle().id, BodyId::EnemyPaddle);
        assert_eq!(s.enemy_paddle().pos, Vec2::new(65.0, 275.0));
        assert_eq!(s.friendly_paddle().vel, Vec2::ZERO);
        assert_eq!(s.enemy_paddle().vel, Vec2::ZERO);
    }

    #[test]
    fn test_body_updates_build_new_values() {
        let ball = initial_ball();
        let moved = ball.with_pos(Vec2::new(10.0, 10.0));
        assert_eq!(ball.pos, Vec2::new(296.0, 296.0));
        assert_eq!(moved.pos, Vec2::new(10.0, 10.0));
        assert_eq!(moved.vel, ball.vel);
        assert_eq!(moved.id, BodyId::Ball);
    }
}
