//! Grid snapping.
//!
//! World coordinates snap to the grid line at or below them on each axis.
//! Snapping is idempotent even for fractional cell sizes: when `v / cell`
//! rounds to just under an exact multiple the floor index is corrected, so a
//! snapped value always snaps to itself.
//!
//! [`line_positions`] plans the grid lines the render pass draws.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::viewport::Point;

/// Snap a world point to the grid, each axis independently.
#[must_use]
pub fn snap(world: Point, cell_size: f64) -> Point {
    Point::new(snap_axis(world.x, cell_size), snap_axis(world.y, cell_size))
}

/// Snap a single world coordinate down to a multiple of `cell_size`.
#[must_use]
pub fn snap_axis(value: f64, cell_size: f64) -> f64 {
    let mut index = (value / cell_size).floor();
    if (index + 1.0) * cell_size <= value {
        index += 1.0;
    } else if index * cell_size > value {
        index -= 1.0;
    }
    index * cell_size
}

/// Whether `value` already sits on a grid line.
#[must_use]
pub fn is_snapped(value: f64, cell_size: f64) -> bool {
    snap_axis(value, cell_size) == value
}

/// Grid line coordinates covering `[start, end]` on one axis, at most `max_lines` of them.
///
/// Lines sit on multiples of `cell_size`. When the span holds more cells than
/// `max_lines`, only every `stride`-th line is kept, `stride` being a whole
/// number of cells. Non-finite bounds yield no lines.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn line_positions(start: f64, end: f64, cell_size: f64, max_lines: usize) -> impl Iterator<Item = f64> {
    let cells = (end - start) / cell_size;
    let limit = max_lines.max(1) as f64;
    let stride = if cells > limit { (cells / limit).ceil() } else { 1.0 };
    let step = cell_size * stride;
    let first = (start / step).floor();
    let last = (end / step).floor();
    let count = if first.is_finite() && last.is_finite() && last >= first {
        ((last - first) as usize).saturating_add(1).min(max_lines)
    } else {
        0
    };
    (0..count).map(move |i| (first + i as f64) * step)
}
