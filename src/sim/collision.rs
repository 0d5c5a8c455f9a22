//! Collision response for the paddle and bricks
//!
//! Wall bounces are trivial clamp-and-invert and live in the tick; the two
//! interesting cases are here. The paddle redirects the ball by impact
//! offset rather than pure reflection, and brick hits pick a bounce axis
//! from where the ball was last frame - a cheap stand-in for swept
//! collision that reads well at these speeds.

use glam::Vec2;

use super::geom::Rect;
use super::state::{Ball, Paddle};
use crate::consts::MAX_BOUNCE_ANGLE;

/// Which brick face the ball is treated as having hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Side face: invert dx
    Horizontal,
    /// Top or bottom face: invert dy
    Vertical,
}

/// Whether the ball is in contact with the paddle this tick: bottom edge
/// inside the paddle's vertical band, center inside its horizontal span
pub fn paddle_catches(ball: &Ball, paddle: &Paddle) -> bool {
    let bottom = ball.pos.y + ball.radius;
    bottom >= paddle.rect().top()
        && bottom <= paddle.rect().bottom()
        && paddle.rect().spans_x(ball.pos.x)
}

/// Velocity after a paddle bounce.
///
/// The impact offset from the paddle center, normalized to [-1, 1], maps
/// linearly onto the bounce angle: center hits go straight up, edge hits
/// leave at the maximum angle. Speed is preserved; the serve-time scalar
/// stands in if the velocity has degenerated to ~zero.
pub fn paddle_bounce(ball: &Ball, paddle: &Paddle) -> Vec2 {
    let half_width = paddle.width / 2.0;
    let offset = ((ball.pos.x - paddle.center_x()) / half_width).clamp(-1.0, 1.0);
    let angle = offset * MAX_BOUNCE_ANGLE;

    let mut speed = ball.vel.length();
    if speed < 1e-3 {
        speed = ball.speed;
    }
    Vec2::new(speed * angle.sin(), -(speed * angle.cos()).abs())
}

/// Bounce axis for a brick hit, from the ball's horizontal position on the
/// previous tick: if it was outside the brick's horizontal span the ball
/// came in from the side, otherwise from above or below.
pub fn brick_bounce_axis(prev_x: f32, brick: &Rect) -> Axis {
    if brick.spans_x(prev_x) {
        Axis::Vertical
    } else {
        Axis::Horizontal
    }
}
