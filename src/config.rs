//! Canvas configuration and its validation.
//!
//! Every field has a default, so an empty JSON object is a valid config.
//! Values that would make the viewport divide by zero, or let one pointer-down
//! start both a pan and a drag, are rejected here rather than at use time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_GRID_CELL_SIZE, DEFAULT_OBJECT_HEIGHT, DEFAULT_OBJECT_WIDTH, DEFAULT_RESET_DURATION_MS, DEFAULT_ZOOM_MAX,
    DEFAULT_ZOOM_MIN, DEFAULT_ZOOM_STEP,
};
use crate::input::Button;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("zoom_min must be a positive finite number, got {0}")]
    InvalidZoomMin(f64),
    #[error("zoom_max ({max}) must be finite and at least zoom_min ({min})")]
    InvalidZoomRange { min: f64, max: f64 },
    #[error("zoom_step must be a positive finite number, got {0}")]
    InvalidZoomStep(f64),
    #[error("grid_cell_size must be a positive finite number, got {0}")]
    InvalidGridCellSize(f64),
    #[error("default object size must be positive and finite, got {width}x{height}")]
    InvalidObjectSize { width: f64, height: f64 },
    #[error("reset_duration_ms must be a non-negative finite number, got {0}")]
    InvalidResetDuration(f64),
    #[error("pan_button and drag_button must differ (both {0:?})")]
    ConflictingButtons(Button),
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for the canvas engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub zoom_min: f64,
    pub zoom_max: f64,
    /// Zoom change per wheel notch.
    pub zoom_step: f64,
    pub grid_cell_size: f64,
    pub default_object_width: f64,
    pub default_object_height: f64,
    pub reset_duration_ms: f64,
    /// Button that starts a pan.
    pub pan_button: Button,
    /// Button that starts an object drag.
    pub drag_button: Button,
    /// Draw a marker at the pointer; every pointer move then needs a render.
    pub show_pointer: bool,
    /// Seed for the placement RNG. The host picks one when absent.
    pub seed: Option<u64>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            zoom_min: DEFAULT_ZOOM_MIN,
            zoom_max: DEFAULT_ZOOM_MAX,
            zoom_step: DEFAULT_ZOOM_STEP,
            grid_cell_size: DEFAULT_GRID_CELL_SIZE,
            default_object_width: DEFAULT_OBJECT_WIDTH,
            default_object_height: DEFAULT_OBJECT_HEIGHT,
            reset_duration_ms: DEFAULT_RESET_DURATION_MS,
            pan_button: Button::Middle,
            drag_button: Button::Primary,
            show_pointer: false,
            seed: None,
        }
    }
}

impl CanvasConfig {
    /// Parse and validate a config from JSON. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed JSON and any validation error otherwise.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every invariant the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.zoom_min) {
            return Err(ConfigError::InvalidZoomMin(self.zoom_min));
        }
        if !self.zoom_max.is_finite() || self.zoom_max < self.zoom_min {
            return Err(ConfigError::InvalidZoomRange { min: self.zoom_min, max: self.zoom_max });
        }
        if !is_positive(self.zoom_step) {
            return Err(ConfigError::InvalidZoomStep(self.zoom_step));
        }
        if !is_positive(self.grid_cell_size) {
            return Err(ConfigError::InvalidGridCellSize(self.grid_cell_size));
        }
        if !is_positive(self.default_object_width) || !is_positive(self.default_object_height) {
            return Err(ConfigError::InvalidObjectSize {
                width: self.default_object_width,
                height: self.default_object_height,
            });
        }
        if !self.reset_duration_ms.is_finite() || self.reset_duration_ms < 0.0 {
            return Err(ConfigError::InvalidResetDuration(self.reset_duration_ms));
        }
        if self.pan_button == self.drag_button {
            return Err(ConfigError::ConflictingButtons(self.pan_button));
        }
        Ok(())
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
