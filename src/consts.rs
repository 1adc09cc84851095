//! Shared numeric constants and configuration defaults for the canvas crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest zoom factor the viewport accepts by default.
pub const DEFAULT_ZOOM_MIN: f64 = 0.1;

/// Largest zoom factor the viewport accepts by default.
pub const DEFAULT_ZOOM_MAX: f64 = 1.0;

/// Zoom change applied per wheel notch.
pub const DEFAULT_ZOOM_STEP: f64 = 0.1;

/// Zoom level targeted by the reset-view animation.
pub const RESET_ZOOM: f64 = 1.0;

// ── Grid ────────────────────────────────────────────────────────

/// Grid cell edge length in world units.
pub const DEFAULT_GRID_CELL_SIZE: f64 = 50.0;

// ── Objects ─────────────────────────────────────────────────────

/// Width of a freshly placed rectangle in world units.
pub const DEFAULT_OBJECT_WIDTH: f64 = 100.0;

/// Height of a freshly placed rectangle in world units.
pub const DEFAULT_OBJECT_HEIGHT: f64 = 50.0;

/// Lower bound of the hue range for generated object colors (degrees).
pub const COLOR_HUE_BASE: f64 = 290.0;

/// Width of the hue range for generated object colors (degrees).
pub const COLOR_HUE_SPAN: f64 = 260.0;

// ── Animation ───────────────────────────────────────────────────

/// Duration of the reset-view transition in milliseconds.
pub const DEFAULT_RESET_DURATION_MS: f64 = 500.0;

// ── Rendering ───────────────────────────────────────────────────

/// Grid line color.
pub const GRID_STROKE: &str = "#eee";

/// World axis color.
pub const AXIS_STROKE: &str = "skyblue";

/// Dash segment length for the world axes, in screen pixels.
pub const AXIS_DASH_PX: f64 = 5.0;

/// Outline color for hovered objects.
pub const HOVER_STROKE: &str = "#1F1A17";

/// Outline width for hovered objects, in screen pixels.
pub const HOVER_STROKE_PX: f64 = 2.0;

/// Pointer marker fill.
pub const POINTER_FILL: &str = "yellow";

/// Pointer marker radius in screen pixels.
pub const POINTER_RADIUS_PX: f64 = 10.0;

/// Upper bound on grid lines drawn per axis in one frame.
pub const MAX_GRID_LINES: usize = 512;
