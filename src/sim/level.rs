//! Level generation
//!
//! Builds a fresh `BrickField` for a level number. Difficulty scales by
//! adding rows, columns, and brick hit-counts, all clamped so the grid
//! always fits the field.

use super::geom::Rect;
use super::state::{Brick, BrickField};
use crate::consts::*;

/// Row count for a level: 3 at level 1, +1 per level, capped
pub fn rows_for_level(level: u32) -> u32 {
    (level.max(1) + 2).min(MAX_ROWS)
}

/// Column count for a level: 6 at level 1, +1 every other level, capped
pub fn cols_for_level(level: u32) -> u32 {
    (6 + (level.max(1) - 1) / 2).min(MAX_COLS)
}

/// Uniform brick hit-count for a level
pub fn hits_for_level(level: u32) -> i32 {
    (1 + level.max(1) / 3) as i32
}

/// Generate the brick grid for a level, row-major from the top-left.
/// Non-positive levels are defensively treated as level 1.
pub fn generate(level: u32) -> BrickField {
    let level = level.max(1);
    let rows = rows_for_level(level);
    let cols = cols_for_level(level);
    let hits = hits_for_level(level);

    let usable = FIELD_WIDTH - 2.0 * BRICK_SIDE_MARGIN - (cols - 1) as f32 * BRICK_PADDING;
    let brick_width = (usable / cols as f32).floor();

    let mut bricks = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        let y = BRICK_TOP_OFFSET + row as f32 * (BRICK_HEIGHT + BRICK_PADDING);
        for col in 0..cols {
            let x = BRICK_SIDE_MARGIN + col as f32 * (brick_width + BRICK_PADDING);
            bricks.push(Brick::new(Rect::new(x, y, brick_width, BRICK_HEIGHT), hits));
        }
    }

    log::debug!(
        "level {level}: {rows}x{cols} bricks, {hits} hit(s) each, width {brick_width}"
    );
    BrickField::new(bricks, rows, cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_row_and_column_scaling() {
        assert_eq!((rows_for_level(1), cols_for_level(1)), (3, 6));
        assert_eq!((rows_for_level(2), cols_for_level(2)), (4, 6));
        assert_eq!((rows_for_level(3), cols_for_level(3)), (5, 7));
        assert_eq!((rows_for_level(4), cols_for_level(4)), (6, 7));
        assert_eq!((rows_for_level(5), cols_for_level(5)), (6, 8));
        assert_eq!((rows_for_level(9), cols_for_level(9)), (6, 10));
        // Caps hold from there on
        assert_eq!((rows_for_level(100), cols_for_level(100)), (6, 10));
    }

    #[test]
    fn test_hit_counts() {
        assert_eq!(hits_for_level(1), 1);
        assert_eq!(hits_for_level(2), 1);
        assert_eq!(hits_for_level(3), 2);
        assert_eq!(hits_for_level(4), 2);
        assert_eq!(hits_for_level(6), 3);
    }

    #[test]
    fn test_non_positive_level_clamps() {
        let field = generate(0);
        assert_eq!(field.rows(), 3);
        assert_eq!(field.cols(), 6);
        assert!(field.bricks().iter().all(|b| b.hits == 1));
    }

    #[test]
    fn test_level_one_layout() {
        let field = generate(1);
        assert_eq!(field.bricks().len(), 18);

        let first = &field.bricks()[0];
        assert_eq!(first.rect.left(), BRICK_SIDE_MARGIN);
        assert_eq!(first.rect.top(), BRICK_TOP_OFFSET);
        assert_eq!(first.rect.size.y, BRICK_HEIGHT);

        // Row-major: second brick is one slot to the right in the same row
        let second = &field.bricks()[1];
        assert_eq!(second.rect.top(), first.rect.top());
        assert_eq!(
            second.rect.left(),
            first.rect.left() + first.rect.size.x + BRICK_PADDING
        );
    }

    proptest! {
        #[test]
        fn test_grid_fits_field_for_any_level(level in 1u32..5000) {
            let field = generate(level);
            prop_assert!((3..=MAX_ROWS).contains(&field.rows()));
            prop_assert!((6..=MAX_COLS).contains(&field.cols()));
            prop_assert_eq!(
                field.bricks().len(),
                (field.rows() * field.cols()) as usize
            );

            let hits = hits_for_level(level);
            prop_assert!(hits >= 1);
            for brick in field.bricks() {
                prop_assert_eq!(brick.hits, hits);
                prop_assert!(brick.alive());
                prop_assert!(brick.rect.left() >= BRICK_SIDE_MARGIN - 0.001);
                prop_assert!(brick.rect.right() <= FIELD_WIDTH - BRICK_SIDE_MARGIN + 0.001);
            }
        }
    }
}
