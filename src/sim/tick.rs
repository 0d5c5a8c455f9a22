//! Per-frame simulation step
//!
//! One `tick` per rendered frame. The world only advances while the
//! session is Running and not frozen; the event scheduler is pumped every
//! invocation so deferred notifications fire regardless of phase.

use super::collision::{self, Axis};
use super::event::SessionEvent;
use super::level;
use super::state::{Impact, Session, SessionPhase};
use crate::consts::*;
use crate::input::PaddleIntent;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Paddle direction intent from held keys
    pub paddle: PaddleIntent,
    /// Absolute paddle center target from pointer position, in field
    /// coordinates; overrides the direction intent for this tick
    pub paddle_x: Option<f32>,
    /// Pause toggle
    pub pause: bool,
    /// Start (or restart after game over)
    pub start: bool,
}

/// Advance the session by one frame
pub fn tick(session: &mut Session, input: &TickInput) {
    session.time_ticks += 1;

    if input.start
        && matches!(session.phase, SessionPhase::Idle | SessionPhase::GameOver)
    {
        session.begin_run();
    }

    if input.pause {
        session.toggle_pause();
    }

    if session.phase == SessionPhase::Running {
        if session.freeze_ticks > 0 {
            // Involuntary recovery pause: everything stays put
            session.freeze_ticks -= 1;
        } else {
            step_world(session, input);
        }
    }

    let fired = session
        .scheduler
        .fire_due(session.time_ticks, session.generation);
    session.outbox.extend(fired);
}

/// One frame of paddle motion, ball motion, and collision resolution
fn step_world(session: &mut Session, input: &TickInput) {
    // 1. Paddle motion
    session.paddle.dx = match input.paddle {
        PaddleIntent::MoveLeft => -session.paddle.speed,
        PaddleIntent::MoveRight => session.paddle.speed,
        PaddleIntent::Stop => 0.0,
    };
    if let Some(x) = input.paddle_x {
        session.paddle.pos.x = x - session.paddle.width / 2.0;
        session.paddle.dx = 0.0;
    }
    session.paddle.advance();

    // 2. Ball motion; last frame's x decides brick bounce axes below
    let prev_x = session.ball.pos.x;
    let vel = session.ball.vel;
    session.ball.pos += vel;

    // 3. Wall bounces. The bottom edge is life loss, handled after bricks.
    let ball = &mut session.ball;
    if ball.pos.x + ball.radius > FIELD_WIDTH {
        ball.pos.x = FIELD_WIDTH - ball.radius;
        ball.vel.x = -ball.vel.x;
    } else if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x = -ball.vel.x;
    }
    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
    }

    // 4. Paddle bounce; reposition above the paddle so the next frame
    // cannot re-trigger the catch
    if collision::paddle_catches(&session.ball, &session.paddle) {
        session.ball.vel = collision::paddle_bounce(&session.ball, &session.paddle);
        session.ball.pos.y = session.paddle.top() - session.ball.radius;
    }

    // 5. Brick collision: first live brick in row-major order wins, one
    // resolution per frame
    for brick in session.field.bricks_mut() {
        if !brick.alive() {
            continue;
        }
        if !brick
            .rect
            .overlaps_circle(session.ball.pos, session.ball.radius)
        {
            continue;
        }

        match collision::brick_bounce_axis(prev_x, &brick.rect) {
            Axis::Horizontal => session.ball.vel.x = -session.ball.vel.x,
            Axis::Vertical => session.ball.vel.y = -session.ball.vel.y,
        }
        session.score += match brick.register_hit() {
            Impact::Destroyed => SCORE_BRICK_DESTROYED,
            Impact::Damaged => SCORE_BRICK_DAMAGED,
        };
        nudge_away_from_zero(&mut session.ball.vel.x);
        nudge_away_from_zero(&mut session.ball.vel.y);
        break;
    }

    // 6. Life loss once the whole ball is past the field bottom
    if session.ball.pos.y - session.ball.radius > FIELD_HEIGHT {
        session.lives = session.lives.saturating_sub(1);
        if session.lives == 0 {
            session.phase = SessionPhase::GameOver;
            session.scheduler.schedule(
                session.time_ticks + GAME_OVER_NOTIFY_TICKS,
                session.generation,
                SessionEvent::GameOver {
                    score: session.score,
                    level: session.level,
                },
            );
            log::info!(
                "game over: score {}, level {}",
                session.score,
                session.level
            );
        } else {
            session.reset_ball();
            session.freeze_ticks = LIFE_LOST_FREEZE_TICKS;
            session
                .outbox
                .push(SessionEvent::LifeLost { lives: session.lives });
            log::debug!("life lost, {} remaining", session.lives);
        }
        return;
    }

    // 7. Level completion
    if session.field.all_destroyed() {
        session.level += 1;
        session.score += SCORE_LEVEL_CLEAR;
        session.field = level::generate(session.level);
        session.reset_ball();
        session.freeze_ticks = LEVEL_CLEAR_FREEZE_TICKS;
        session
            .outbox
            .push(SessionEvent::LevelCleared { level: session.level });
        log::info!("level {} cleared, score {}", session.level - 1, session.score);
    }
}

/// Speed up play a little on every brick hit, preserving direction.
/// An exactly-zero component has no direction and is left alone.
fn nudge_away_from_zero(component: &mut f32) {
    if *component != 0.0 {
        *component += SPEED_NUDGE * component.signum();
    }
}
