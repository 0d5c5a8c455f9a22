//! Collaborator traits for the presentation layer
//!
//! The core never draws. A shell implements `Renderer` to paint entities
//! and `DisplaySink` to show the score line; data flows one way, from the
//! simulation out.

use crate::sim::{Ball, Brick, BrickField, Hud, Paddle};

/// Visual tier of a brick, derived from its remaining hit-count. The
/// renderer picks one color per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickTier {
    /// Three or more hits remaining
    Reinforced,
    /// Exactly two hits remaining
    Cracked,
    /// One hit (or less) remaining
    Fragile,
}

impl BrickTier {
    pub fn of(brick: &Brick) -> Self {
        match brick.hits {
            h if h >= 3 => Self::Reinforced,
            2 => Self::Cracked,
            _ => Self::Fragile,
        }
    }
}

/// Draws the playfield each frame
pub trait Renderer {
    fn draw_frame(&mut self, paddle: &Paddle, ball: &Ball, field: &BrickField);
}

/// Receives score/lives/level for display; write-only from the core's
/// perspective
pub trait DisplaySink {
    fn present(&mut self, hud: &Hud);
}
