//! Scoring module - row points, level progression, and gravity intervals
//!
//! Scoring is per cleared row: `100 x level`, doubled by the `double_score`
//! buff and multiplied by 3/2 under `line_bonus`. The 100-point base keeps
//! the 1.5x bonus exact in integer math. Level is derived from total lines
//! (`lines / 10 + 1`); gravity follows `max(50, 500 - (level - 1) * 50)` ms.

use goldfall_types::{
    BASE_FALL_MS, FALL_FLOOR_MS, FALL_STEP_MS, HARD_DROP_POINTS, ROW_CLEAR_POINTS,
    SOFT_DROP_POINTS,
};

/// Points awarded for clearing a single row.
///
/// `multiplier` is the buff score multiplier (1 or 2); `line_bonus` applies
/// the 3/2 factor.
pub fn row_clear_points(level: u32, multiplier: u32, line_bonus: bool) -> u32 {
    let base = ROW_CLEAR_POINTS
        .saturating_mul(level)
        .saturating_mul(multiplier);
    if line_bonus {
        base.saturating_mul(3) / 2
    } else {
        base
    }
}

/// Level for a total cleared-line count (levels start at 1)
pub fn level_for_lines(lines: u32) -> u32 {
    lines / 10 + 1
}

/// Base gravity interval for a level, clamped to the floor
pub fn base_fall_interval_ms(level: u32) -> u32 {
    BASE_FALL_MS
        .saturating_sub(level.saturating_sub(1).saturating_mul(FALL_STEP_MS))
        .max(FALL_FLOOR_MS)
}

/// Points for descending `cells` rows by drop command
pub fn drop_points(cells: u32, hard: bool) -> u32 {
    if hard {
        cells * HARD_DROP_POINTS
    } else {
        cells * SOFT_DROP_POINTS
    }
}
