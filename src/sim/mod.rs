//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick, one per rendered frame
//! - Seeded RNG only
//! - Stable brick iteration order (row-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod event;
pub mod geom;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{Axis, brick_bounce_axis, paddle_bounce, paddle_catches};
pub use event::{Scheduler, SessionEvent};
pub use geom::Rect;
pub use level::generate;
pub use state::{Ball, Brick, BrickField, Hud, Impact, Paddle, Session, SessionPhase};
pub use tick::{TickInput, tick};
