//! Session state and core simulation types
//!
//! Everything the renderer reads and the tick mutates lives here, owned by
//! a single `Session` aggregate. No globals; the shell owns the session and
//! passes it into `tick` once per frame.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::event::{Scheduler, SessionEvent};
use super::geom::Rect;
use super::level;
use crate::consts::*;

/// Current phase of a playthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the first start input
    Idle,
    /// Active gameplay
    Running,
    /// User-toggled pause
    Paused,
    /// Run ended; requires an explicit restart
    GameOver,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal velocity for this tick (set from input intent)
    pub dx: f32,
    /// Movement speed in units per tick
    pub speed: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(
                (FIELD_WIDTH - PADDLE_WIDTH) / 2.0,
                FIELD_HEIGHT - PADDLE_BOTTOM_MARGIN,
            ),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            dx: 0.0,
            speed: PADDLE_SPEED,
        }
    }
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Keep the paddle inside the field. Idempotent.
    pub fn clamp_to_field(&mut self) {
        self.pos.x = self.pos.x.clamp(0.0, FIELD_WIDTH - self.width);
    }

    /// Apply one tick of horizontal motion and clamp
    pub fn advance(&mut self) {
        self.pos.x += self.dx;
        self.clamp_to_field();
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Velocity in units per tick
    pub vel: Vec2,
    pub radius: f32,
    /// Serve-time scalar speed; bounce-angle fallback when velocity
    /// magnitude degenerates
    pub speed: f32,
}

impl Ball {
    /// Serve speed for a level: base + 1 per level past the first, capped
    pub fn serve_speed(level: u32) -> f32 {
        BALL_BASE_SPEED + level.saturating_sub(1).min(BALL_LEVEL_SPEED_CAP) as f32
    }

    /// A ball resting on the paddle, moving up at the level's serve speed.
    /// The horizontal sign is a coin flip from the session RNG.
    pub fn serve(paddle: &Paddle, level: u32, rng: &mut Pcg32) -> Self {
        let speed = Self::serve_speed(level);
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Self {
            pos: Vec2::new(paddle.center_x(), paddle.top() - (BALL_RADIUS + 2.0)),
            vel: Vec2::new(
                sign * speed * SERVE_TILT.sin(),
                -(speed * SERVE_TILT.cos()),
            ),
            radius: BALL_RADIUS,
            speed,
        }
    }
}

/// Outcome of a single brick impact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    /// Brick absorbed the hit and remains
    Damaged,
    /// Hit-count reached zero; brick is gone
    Destroyed,
}

/// One brick in the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    /// Remaining impacts before destruction; may transiently go below zero,
    /// which still counts as destroyed
    pub hits: i32,
    pub destroyed: bool,
}

impl Brick {
    pub fn new(rect: Rect, hits: i32) -> Self {
        Self {
            rect,
            hits,
            destroyed: false,
        }
    }

    pub fn alive(&self) -> bool {
        !self.destroyed
    }

    /// Absorb one impact, flagging destruction the instant hits reach zero
    pub fn register_hit(&mut self) -> Impact {
        self.hits -= 1;
        if self.hits <= 0 {
            self.destroyed = true;
            Impact::Destroyed
        } else {
            Impact::Damaged
        }
    }
}

/// Grid of bricks in row-major order. Iteration order is the documented
/// collision tie-break order: the first overlapping brick wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickField {
    bricks: Vec<Brick>,
    rows: u32,
    cols: u32,
}

impl BrickField {
    pub fn new(bricks: Vec<Brick>, rows: u32, cols: u32) -> Self {
        Self { bricks, rows, cols }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn bricks_mut(&mut self) -> &mut [Brick] {
        &mut self.bricks
    }

    pub fn remaining(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive()).count()
    }

    pub fn all_destroyed(&self) -> bool {
        self.bricks.iter().all(|b| b.destroyed)
    }
}

/// Score/lives/level snapshot for the display sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
}

/// Complete state for one playthrough
#[derive(Debug, Clone)]
pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Score; monotonic within a run
    pub score: u64,
    pub lives: u32,
    /// Current level, starting at 1; monotonic within a run
    pub level: u32,
    pub phase: SessionPhase,
    pub paddle: Paddle,
    pub ball: Ball,
    pub field: BrickField,
    /// Involuntary freeze countdown (post-life-loss / post-level-clear);
    /// paddle and ball motion are suspended while nonzero
    pub freeze_ticks: u32,
    /// Tick counter; monotonic across restarts so scheduled deadlines stay
    /// well-ordered
    pub time_ticks: u64,
    /// Bumped on every new run; scheduled events from older runs are stale
    pub generation: u64,
    pub(crate) rng: Pcg32,
    pub(crate) scheduler: Scheduler,
    pub(crate) outbox: Vec<SessionEvent>,
}

impl Session {
    /// Create an idle session. Entities exist so the renderer has something
    /// to draw before the first start input.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let paddle = Paddle::default();
        let ball = Ball::serve(&paddle, 1, &mut rng);
        Self {
            seed,
            score: 0,
            lives: START_LIVES,
            level: 1,
            phase: SessionPhase::Idle,
            paddle,
            ball,
            field: level::generate(1),
            freeze_ticks: 0,
            time_ticks: 0,
            generation: 0,
            rng,
            scheduler: Scheduler::default(),
            outbox: Vec::new(),
        }
    }

    /// Start a fresh run, from Idle or after a game over. Resets score,
    /// lives, level, and paddle width; invalidates any still-pending
    /// scheduled events from the previous run.
    pub fn begin_run(&mut self) {
        self.generation += 1;
        self.score = 0;
        self.lives = START_LIVES;
        self.level = 1;
        self.paddle = Paddle::default();
        self.field = level::generate(1);
        self.freeze_ticks = 0;
        self.phase = SessionPhase::Running;
        self.reset_ball();
        log::info!("run started (seed {}, generation {})", self.seed, self.generation);
    }

    /// Place a freshly served ball on the paddle for the current level
    pub fn reset_ball(&mut self) {
        self.ball = Ball::serve(&self.paddle, self.level, &mut self.rng);
    }

    /// Toggle between Running and Paused. Ignored in other phases and
    /// during an involuntary freeze, which is not user-togglable.
    pub fn toggle_pause(&mut self) {
        if self.freeze_ticks > 0 {
            return;
        }
        match self.phase {
            SessionPhase::Running => self.phase = SessionPhase::Paused,
            SessionPhase::Paused => self.phase = SessionPhase::Running,
            SessionPhase::Idle | SessionPhase::GameOver => {}
        }
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.score,
            lives: self.lives,
            level: self.level,
        }
    }

    /// Drain events produced since the last poll (life losses, level
    /// clears, the deferred game-over notification)
    pub fn poll_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.outbox)
    }
}
