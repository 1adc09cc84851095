//! Input model: mouse buttons, cursor styles, and the gesture state machine.
//!
//! `InputState` is the active gesture being tracked between pointer-down and
//! pointer-up, carrying the context needed to compute incremental deltas.
//! Panning and dragging are separate variants, so at most one of them can be
//! in progress at a time.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::viewport::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` number. Unknown buttons count as primary.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Cursor appearance implied by the current gesture and hover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    /// Over a hovered object that can be dragged.
    Pointer,
    /// An object is being dragged.
    Move,
    /// The canvas is being panned.
    Grabbing,
}

impl CursorStyle {
    /// The CSS `cursor` value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pointer => "pointer",
            Self::Move => "move",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the canvas.
    Panning {
        /// Screen-space position of the previous pointer event, used to compute pan delta.
        last_screen: Point,
        /// Viewport offset when the gesture began.
        offset_at_start: Point,
    },
    /// The user is moving an existing object across the canvas.
    DraggingObject {
        /// Store index of the object being dragged.
        index: usize,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Total offset change since the pan began, if a pan is in progress.
    #[must_use]
    pub fn pan_delta(&self, current_offset: Point) -> Option<Point> {
        match self {
            Self::Panning { offset_at_start, .. } => Some(current_offset - *offset_at_start),
            _ => None,
        }
    }

    /// Index of the dragged object, if a drag is in progress.
    #[must_use]
    pub fn dragged_index(&self) -> Option<usize> {
        match self {
            Self::DraggingObject { index } => Some(*index),
            _ => None,
        }
    }
}
