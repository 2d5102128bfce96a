//! Enemy paddle controller
//!
//! One-dimensional reactive tracking: chase the ball's y while the ball is on
//! the bot's half of the field, idle while it heads for the human. The
//! reaction threshold is what makes the bot beatable.

use glam::Vec2;

use super::state::Body;
use crate::consts::{BOT_REACTION_X, PADDLE_HEIGHT, PADDLE_SPEED};

/// Ball y within the upper half of the paddle
fn ball_in_upper_half(paddle: &Body, ball: &Body) -> bool {
    paddle.pos.y <= ball.pos.y && paddle.pos.y + PADDLE_HEIGHT / 2.0 >= ball.pos.y
}

/// Ball y at or above the paddle midline
fn ball_above_midline(paddle: &Body, ball: &Body) -> bool {
    paddle.pos.y + PADDLE_HEIGHT / 2.0 >= ball.pos.y
}

/// New velocity for the enemy paddle, derived from the pre-motion ball.
///
/// Within reaction range, move up when the ball sits in the paddle's upper
/// half or above its midline, down otherwise. Out of range, stand still.
pub fn bot_velocity(paddle: &Body, ball: &Body) -> Vec2 {
    if ball.pos.x >= BOT_REACTION_X {
        return Vec2::ZERO;
    }
    let dy = if ball_in_upper_half(paddle, ball) || ball_above_midline(paddle, ball) {
        -PADDLE_SPEED
    } else {
        PADDLE_SPEED
    };
    Vec2::new(0.0, dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::BodyId;

    fn enemy_at(y: f32) -> Body {
        Body::paddle(BodyId::EnemyPaddle, Vec2::new(65.0, y))
    }

    #[test]
    fn test_bot_idles_beyond_reaction_range() {
        let paddle = enemy_at(275.0);
        let ball = Body::ball(Vec2::new(400.0, 100.0), Vec2::new(1.0, 0.0));
        assert_eq!(bot_velocity(&paddle, &ball), Vec2::ZERO);
    }

    #[test]
    fn test_bot_chases_upward() {
        let paddle = enemy_at(275.0);
        // Ball above the midline (300) of the paddle
        let ball = Body::ball(Vec2::new(200.0, 250.0), Vec2::new(-1.0, 0.0));
        assert_eq!(bot_velocity(&paddle, &ball), Vec2::new(0.0, -PADDLE_SPEED));
    }

    #[test]
    fn test_bot_chases_downward() {
        let paddle = enemy_at(275.0);
        // Ball below the midline of the paddle
        let ball = Body::ball(Vec2::new(200.0, 350.0), Vec2::new(-1.0, 0.0));
        assert_eq!(bot_velocity(&paddle, &ball), Vec2::new(0.0, PADDLE_SPEED));
    }

    #[test]
    fn test_bot_moves_up_for_ball_in_upper_half() {
        let paddle = enemy_at(275.0);
        let ball = Body::ball(Vec2::new(200.0, 290.0), Vec2::new(-1.0, 0.0));
        assert_eq!(bot_velocity(&paddle, &ball), Vec2::new(0.0, -PADDLE_SPEED));
    }
}
