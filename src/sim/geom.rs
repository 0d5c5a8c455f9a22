//! Axis-aligned geometry primitives
//!
//! Everything in the field is a rectangle or a circle, so collision math
//! stays simple: a circle overlaps a rectangle iff the rectangle expanded
//! by the circle's radius contains the circle's center.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Grow the rectangle by `margin` on every side
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            pos: self.pos - Vec2::splat(margin),
            size: self.size + Vec2::splat(margin * 2.0),
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Circle-vs-rectangle overlap via the expanded-rectangle test
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        self.expand(radius).contains(center)
    }

    /// Whether `x` lies within the rectangle's horizontal span
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.left() && x <= self.right()
    }
}
