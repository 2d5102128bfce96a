//! Collision detection and scoring resolution
//!
//! Runs once per tick on the post-motion state. Four mutually exclusive
//! outcomes, tested in fixed priority order against the pre-resolution ball:
//! paddle hit, wall hit, out of horizontal bounds, no collision.

use glam::Vec2;

use super::state::{initial_ball, start_paddles, Body, Score, State};
use crate::consts::*;
use crate::unit_vec_in_direction;

/// Ball within reach of a paddle's face and overlapping its vertical span
fn collided_with_paddle(ball: &Body, paddle: &Body) -> bool {
    (ball.pos.x - paddle.pos.x).abs() <= BALL_SIZE
        && ball.pos.y + BALL_SIZE >= paddle.pos.y
        && ball.pos.y <= paddle.pos.y + PADDLE_HEIGHT
}

/// Ball touching the top or bottom wall
fn collided_with_wall(ball: &Body) -> bool {
    ball.pos.y <= BALL_SIZE || ball.pos.y + BALL_SIZE >= CANVAS_SIZE
}

/// Ball past the left or right edge of the field
fn out_of_x_bounds(ball: &Body) -> bool {
    ball.pos.x > CANVAS_SIZE || ball.pos.x < 0.0
}

/// Post-bounce velocity for a paddle hit, before acceleration.
///
/// Reflects the horizontal direction and tilts the bounce by the ball's
/// offset from the paddle center: a center hit leaves straight back, a hit
/// near the edge leaves steeply angled. Speed is preserved.
fn paddle_bounce_velocity(ball: &Body, paddle: &Body) -> Vec2 {
    let paddle_center = paddle.pos.y + PADDLE_HEIGHT / 2.0;
    let ball_center = ball.pos.y + BALL_SIZE / 2.0;
    let offset = (paddle_center - ball_center).abs();
    let deg = -ball.vel.x.signum() * 90.0 * (1.0 - (2.0 / 95.0) * offset);
    unit_vec_in_direction(deg) * ball.vel.length()
}

/// Post-bounce velocity for a wall hit, before acceleration
fn wall_bounce_velocity(ball: &Body) -> Vec2 {
    Vec2::new(ball.vel.x, -ball.vel.y)
}

/// The paddle the ball collided with, if exactly one did
fn collided_paddle(ball: &Body, paddles: &[Body; 2]) -> Option<Body> {
    let mut hits = paddles.iter().filter(|p| collided_with_paddle(ball, p));
    match (hits.next(), hits.next()) {
        (Some(paddle), None) => Some(*paddle),
        _ => None,
    }
}

/// Resolve the ball against paddles, walls, and the horizontal bounds, then
/// recompute score and game-over.
pub fn resolve(s: State) -> State {
    log::trace!("ball speed {:.3}", s.ball.vel.length());

    if let Some(paddle) = collided_paddle(&s.ball, &s.paddles) {
        let vel = paddle_bounce_velocity(&s.ball, &paddle);
        // Snap the ball just outside the paddle face it bounced off
        let pos = Vec2::new(
            paddle.pos.x + vel.x.signum() * PADDLE_BOUNCE_OFFSET,
            s.ball.pos.y,
        );
        let ball = s.ball.with_pos(pos).with_vel(vel * s.ball.acc);
        return finish(State { ball, ..s });
    }

    if collided_with_wall(&s.ball) {
        let ball = s.ball.with_vel(wall_bounce_velocity(&s.ball) * s.ball.acc);
        return finish(State { ball, ..s });
    }

    if out_of_x_bounds(&s.ball) {
        let score = if s.ball.pos.x > CANVAS_SIZE {
            Score {
                player1: s.score.player1 + 1,
                ..s.score
            }
        } else {
            Score {
                player2: s.score.player2 + 1,
                ..s.score
            }
        };
        log::debug!("point scored: {} - {}", score.player1, score.player2);
        // Fresh serve: ball and paddles back to their start bodies
        return finish(State {
            ball: initial_ball(),
            paddles: start_paddles(),
            score,
            ..s
        });
    }

    finish(s)
}

/// Recompute game-over from the (possibly just updated) score
fn finish(s: State) -> State {
    State {
        game_over: s.score.player1 >= GAME_POINTS || s.score.player2 >= GAME_POINTS,
        ..s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::BodyId;

    fn state_with_ball(ball: Body) -> State {
        State {
            ball,
            ..State::initial()
        }
    }

    #[test]
    fn test_center_paddle_hit_bounces_straight_back() {
        // Ball center (300) level with the friendly paddle center (275 + 25)
        let ball = Body::ball(Vec2::new(530.0, 296.0), Vec2::new(1.0, 0.0));
        let s = resolve(state_with_ball(ball));

        assert!(s.ball.vel.x < 0.0);
        assert!(s.ball.vel.y.abs() < 1e-5);
        // Snapped just outside the paddle, y untouched
        assert_eq!(s.ball.pos, Vec2::new(535.0 - PADDLE_BOUNCE_OFFSET, 296.0));
    }

    #[test]
    fn test_edge_paddle_hit_bounces_at_an_angle() {
        // Ball near the top edge of the friendly paddle
        let ball = Body::ball(Vec2::new(530.0, 270.0), Vec2::new(1.0, 0.0));
        let s = resolve(state_with_ball(ball));

        assert!(s.ball.vel.x < 0.0);
        // Hit above center deflects the ball upward
        assert!(s.ball.vel.y < -0.1);
    }

    #[test]
    fn test_paddle_hit_accelerates_ball() {
        let ball = Body::ball(Vec2::new(530.0, 296.0), Vec2::new(2.0, 0.0));
        let speed_before = ball.vel.length();
        let s = resolve(state_with_ball(ball));
        let speed_after = s.ball.vel.length();
        assert!((speed_after - speed_before * BALL_ACCELERATION).abs() < 1e-4);
    }

    #[test]
    fn test_wall_bounce_reflects_and_accelerates() {
        let ball = Body::ball(Vec2::new(200.0, 4.0), Vec2::new(3.0, -4.0));
        let s = resolve(state_with_ball(ball));

        assert!((s.ball.vel.x - 3.3).abs() < 1e-4);
        assert!((s.ball.vel.y - 4.4).abs() < 1e-4);
        // Wall bounces do not move the ball
        assert_eq!(s.ball.pos, Vec2::new(200.0, 4.0));
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let ball = Body::ball(Vec2::new(200.0, 595.0), Vec2::new(1.0, 2.0));
        let s = resolve(state_with_ball(ball));
        assert!(s.ball.vel.y < 0.0);
    }

    #[test]
    fn test_exit_right_scores_player1_and_resets() {
        let ball = Body::ball(Vec2::new(601.0, 300.0), Vec2::new(1.0, 0.0));
        let mut before = state_with_ball(ball);
        // Displace a paddle to observe the reset
        before.paddles[1] = before.paddles[1].with_pos(Vec2::new(65.0, 100.0));

        let s = resolve(before);
        assert_eq!(s.score, Score { player1: 1, player2: 0 });
        assert_eq!(s.ball, initial_ball());
        assert_eq!(s.paddles, start_paddles());
    }

    #[test]
    fn test_exit_left_scores_player2() {
        let ball = Body::ball(Vec2::new(-1.0, 300.0), Vec2::new(-1.0, 0.0));
        let s = resolve(state_with_ball(ball));
        assert_eq!(s.score, Score { player1: 0, player2: 1 });
        assert_eq!(s.ball, initial_ball());
    }

    #[test]
    fn test_no_collision_leaves_ball_untouched() {
        let ball = Body::ball(Vec2::new(300.0, 300.0), Vec2::new(1.5, -0.5));
        let s = resolve(state_with_ball(ball));
        assert_eq!(s.ball, ball);
        assert_eq!(s.score, Score::default());
    }

    #[test]
    fn test_paddle_hit_takes_priority_over_wall() {
        // Ball overlapping both the enemy paddle's span and the top wall
        let mut before = state_with_ball(Body::ball(Vec2::new(60.0, 6.0), Vec2::new(-1.0, 0.0)));
        before.paddles[1] = Body::paddle(BodyId::EnemyPaddle, Vec2::new(65.0, 0.0));

        let s = resolve(before);
        // Resolved as a paddle hit: ball snapped off the paddle face, no score
        assert_eq!(s.ball.pos.x, 65.0 + s.ball.vel.x.signum() * PADDLE_BOUNCE_OFFSET);
        assert_eq!(s.score, Score::default());
    }

    #[test]
    fn test_game_over_from_updated_score() {
        let ball = Body::ball(Vec2::new(601.0, 300.0), Vec2::new(1.0, 0.0));
        let mut before = state_with_ball(ball);
        before.score = Score { player1: 6, player2: 0 };

        let s = resolve(before);
        assert_eq!(s.score.player1, 7);
        assert!(s.game_over);
    }
}
