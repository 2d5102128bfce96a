//! Position integration for paddles and the ball

use glam::Vec2;

use super::state::{Body, BodyKind};
use crate::consts::PADDLE_MAX_Y;

/// Whether a paddle at `pos` would be off the top or bottom of the field
fn paddle_out_of_y_bounds(body: &Body, pos: Vec2) -> bool {
    body.kind == BodyKind::Paddle && (pos.y < 0.0 || pos.y > PADDLE_MAX_Y)
}

/// Advance a body by its velocity.
///
/// A paddle whose candidate position would leave the vertical bounds keeps
/// its old position for this step. Its velocity is untouched, so it moves
/// again as soon as a later step's candidate is back in bounds. Balls are
/// never clamped here; the wall bounce belongs to collision resolution.
pub fn move_body(body: Body) -> Body {
    let candidate = body.pos + body.vel;
    if paddle_out_of_y_bounds(&body, candidate) {
        body
    } else {
        body.with_pos(candidate)
    }
}
