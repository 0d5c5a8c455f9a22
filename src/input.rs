//! InputSource helpers
//!
//! The shell owns the real event loop (keyboard, pointer, buttons) and
//! feeds the core a `TickInput` each frame. These helpers turn raw key
//! up/down traffic and pointer positions into paddle intents with the
//! right edge cases: releasing one directional key while the other is
//! still held resumes motion in the held direction.

use serde::{Deserialize, Serialize};

use crate::consts::FIELD_WIDTH;

/// Paddle direction intent for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleIntent {
    MoveLeft,
    MoveRight,
    #[default]
    Stop,
}

/// A directional movement key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Left,
    Right,
}

/// Held-key state for the two movement keys.
///
/// When both keys are held the most recently pressed one wins; releasing
/// it hands control back to the other.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldKeys {
    left: bool,
    right: bool,
    latest: Option<MoveKey>,
}

impl HeldKeys {
    pub fn press(&mut self, key: MoveKey) {
        match key {
            MoveKey::Left => self.left = true,
            MoveKey::Right => self.right = true,
        }
        self.latest = Some(key);
    }

    pub fn release(&mut self, key: MoveKey) {
        match key {
            MoveKey::Left => self.left = false,
            MoveKey::Right => self.right = false,
        }
        if self.latest == Some(key) {
            self.latest = match key {
                MoveKey::Left if self.right => Some(MoveKey::Right),
                MoveKey::Right if self.left => Some(MoveKey::Left),
                _ => None,
            };
        }
    }

    /// Current paddle intent derived from the held keys
    pub fn intent(&self) -> PaddleIntent {
        match (self.left, self.right) {
            (true, false) => PaddleIntent::MoveLeft,
            (false, true) => PaddleIntent::MoveRight,
            (true, true) => match self.latest {
                Some(MoveKey::Right) => PaddleIntent::MoveRight,
                _ => PaddleIntent::MoveLeft,
            },
            (false, false) => PaddleIntent::Stop,
        }
    }
}

/// Maps pointer x positions from display coordinates into the fixed
/// logical field width
#[derive(Debug, Clone, Copy)]
pub struct DisplayMapping {
    scale: f32,
}

impl DisplayMapping {
    /// `display_width` is the on-screen width of the rendered field in
    /// display pixels; degenerate widths are clamped
    pub fn new(display_width: f32) -> Self {
        Self {
            scale: FIELD_WIDTH / display_width.max(1.0),
        }
    }

    /// Field-space x for a display-space pointer x
    pub fn field_x(&self, display_x: f32) -> f32 {
        display_x * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_key_intent() {
        let mut keys = HeldKeys::default();
        assert_eq!(keys.intent(), PaddleIntent::Stop);

        keys.press(MoveKey::Left);
        assert_eq!(keys.intent(), PaddleIntent::MoveLeft);

        keys.release(MoveKey::Left);
        assert_eq!(keys.intent(), PaddleIntent::Stop);
    }

    #[test]
    fn test_release_resumes_other_direction() {
        let mut keys = HeldKeys::default();
        keys.press(MoveKey::Left);
        keys.press(MoveKey::Right);
        assert_eq!(keys.intent(), PaddleIntent::MoveRight);

        // Right released while left is still down: motion resumes left
        keys.release(MoveKey::Right);
        assert_eq!(keys.intent(), PaddleIntent::MoveLeft);

        keys.release(MoveKey::Left);
        assert_eq!(keys.intent(), PaddleIntent::Stop);
    }

    #[test]
    fn test_latest_pressed_wins_when_both_held() {
        let mut keys = HeldKeys::default();
        keys.press(MoveKey::Right);
        keys.press(MoveKey::Left);
        assert_eq!(keys.intent(), PaddleIntent::MoveLeft);
    }

    #[test]
    fn test_redundant_release_is_harmless() {
        let mut keys = HeldKeys::default();
        keys.press(MoveKey::Left);
        keys.release(MoveKey::Right);
        assert_eq!(keys.intent(), PaddleIntent::MoveLeft);
    }

    #[test]
    fn test_display_mapping_scales() {
        // Field shown at half size: display x doubles into field space
        let map = DisplayMapping::new(FIELD_WIDTH / 2.0);
        assert_eq!(map.field_x(100.0), 200.0);

        // 1:1 display
        let map = DisplayMapping::new(FIELD_WIDTH);
        assert_eq!(map.field_x(123.0), 123.0);
    }

    #[test]
    fn test_display_mapping_degenerate_width() {
        let map = DisplayMapping::new(0.0);
        assert!(map.field_x(10.0).is_finite());
    }
}
