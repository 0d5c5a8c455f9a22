//! Brickfall - a ball-and-paddle brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, session state)
//! - `input`: InputSource helpers (held-key tracking, pointer mapping)
//! - `render`: Collaborator traits the shell implements to draw the game
//!
//! All physics runs in a fixed logical coordinate space, one simulation
//! step per rendered frame. Rendering and event wiring live outside the
//! crate; they talk to the core through `render::Renderer`,
//! `render::DisplaySink`, and `sim::TickInput`.

pub mod input;
pub mod render;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Logical field width - physics always runs at this resolution
    pub const FIELD_WIDTH: f32 = 800.0;
    /// Logical field height
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Simulation tick rate (one tick per rendered frame)
    pub const TICK_HZ: u32 = 60;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    /// Paddle top edge sits this far above the field bottom
    pub const PADDLE_BOTTOM_MARGIN: f32 = 40.0;
    /// Horizontal paddle speed in units per tick
    pub const PADDLE_SPEED: f32 = 7.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Serve speed at level 1; grows by one per level up to the cap
    pub const BALL_BASE_SPEED: f32 = 4.0;
    /// Serve speed never exceeds base + this
    pub const BALL_LEVEL_SPEED_CAP: u32 = 6;
    /// Serve direction tilt from vertical (radians)
    pub const SERVE_TILT: f32 = std::f32::consts::FRAC_PI_6;
    /// Velocity added to each component on every brick hit
    pub const SPEED_NUDGE: f32 = 0.2;
    /// Maximum paddle bounce angle from vertical (radians)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;

    /// Brick layout
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_TOP_OFFSET: f32 = 60.0;
    pub const BRICK_SIDE_MARGIN: f32 = 30.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const MAX_ROWS: u32 = 6;
    pub const MAX_COLS: u32 = 10;

    /// Scoring
    pub const SCORE_BRICK_DAMAGED: u64 = 5;
    pub const SCORE_BRICK_DESTROYED: u64 = 10;
    pub const SCORE_LEVEL_CLEAR: u64 = 100;

    /// Session defaults
    pub const START_LIVES: u32 = 3;

    /// Involuntary freeze after losing a life (~600ms at 60Hz)
    pub const LIFE_LOST_FREEZE_TICKS: u32 = 36;
    /// Involuntary freeze after clearing a level (~700ms at 60Hz)
    pub const LEVEL_CLEAR_FREEZE_TICKS: u32 = 42;
    /// Delay before the terminal game-over notification fires (~500ms)
    pub const GAME_OVER_NOTIFY_TICKS: u64 = 30;
}
