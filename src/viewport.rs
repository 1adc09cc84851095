//! Pan/zoom viewport and screen ↔ world coordinate conversion.
//!
//! The viewport is the only place screen-space and world-space values are
//! converted into each other. Everything else in the crate works in one space
//! and asks the viewport when it needs the other.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

/// Axis-aligned rectangle in world coordinates, stored by its edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorldRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl WorldRect {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Whether the rectangle has no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Shrink each edge inward by `amount`. The result may be empty.
    #[must_use]
    pub fn inset(&self, amount: f64) -> WorldRect {
        WorldRect {
            left: self.left + amount,
            top: self.top + amount,
            right: self.right - amount,
            bottom: self.bottom - amount,
        }
    }
}

/// Viewport state for pan/zoom on the infinite canvas.
///
/// `offset` is in CSS pixels and is applied before scaling, so a world point
/// `w` lands on screen at `w * zoom + offset`. `zoom` never leaves
/// `[zoom_min, zoom_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    offset: Point,
    zoom: f64,
    zoom_min: f64,
    zoom_max: f64,
    grid_cell_size: f64,
    screen_width: f64,
    screen_height: f64,
}

impl Viewport {
    /// Create a viewport at the origin with zoom 1.0 clamped into range.
    ///
    /// Callers pass values from a validated [`crate::config::CanvasConfig`];
    /// the viewport itself does not re-check them.
    #[must_use]
    pub fn new(zoom_min: f64, zoom_max: f64, grid_cell_size: f64) -> Self {
        Self {
            offset: Point::default(),
            zoom: 1.0_f64.clamp(zoom_min, zoom_max),
            zoom_min,
            zoom_max,
            grid_cell_size,
            screen_width: 0.0,
            screen_height: 0.0,
        }
    }

    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn zoom_range(&self) -> (f64, f64) {
        (self.zoom_min, self.zoom_max)
    }

    #[must_use]
    pub fn grid_cell_size(&self) -> f64 {
        self.grid_cell_size
    }

    /// Screen size in CSS pixels as `(width, height)`.
    #[must_use]
    pub fn screen_size(&self) -> (f64, f64) {
        (self.screen_width, self.screen_height)
    }

    /// Center of the screen in screen coordinates.
    #[must_use]
    pub fn screen_center(&self) -> Point {
        Point::new(self.screen_width * 0.5, self.screen_height * 0.5)
    }

    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        (screen - self.offset) / self.zoom
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        world * self.zoom + self.offset
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// The part of the world currently on screen.
    #[must_use]
    pub fn visible_world_rect(&self) -> WorldRect {
        let top_left = self.screen_to_world(Point::new(0.0, 0.0));
        let bottom_right = self.screen_to_world(Point::new(self.screen_width, self.screen_height));
        WorldRect { left: top_left.x, top: top_left.y, right: bottom_right.x, bottom: bottom_right.y }
    }

    /// Translate the view by a screen-space delta. Unbounded.
    pub fn pan(&mut self, delta: Point) {
        self.offset = self.offset + delta;
    }

    /// Change zoom by `delta`, keeping the world point under `anchor` fixed.
    ///
    /// Returns `false` when the clamp leaves zoom where it was; offset is then
    /// untouched too.
    pub fn zoom_by(&mut self, delta: f64, anchor: Point) -> bool {
        let next = (self.zoom + delta).clamp(self.zoom_min, self.zoom_max);
        if next == self.zoom {
            return false;
        }
        let ratio = next / self.zoom;
        self.offset = anchor - (anchor - self.offset) * ratio;
        self.zoom = next;
        true
    }

    /// Jump straight to `offset` and `zoom`. Zoom is clamped into range.
    pub fn set_view(&mut self, offset: Point, zoom: f64) {
        self.offset = offset;
        self.zoom = zoom.clamp(self.zoom_min, self.zoom_max);
    }

    /// Record a new screen size and recenter the world origin on it.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.screen_width = width;
        self.screen_height = height;
        self.offset = self.screen_center();
    }
}
