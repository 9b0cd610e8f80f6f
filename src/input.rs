//! Input model: operator modes and the drag-gesture state machine.
//!
//! `Mode` is the operator's chosen interaction and only changes on an explicit
//! command. `InputState` is the gesture being tracked between pointer start
//! and pointer end. It lives outside the group store, so a gesture that never
//! receives its end event leaves the layout untouched.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::GroupId;
use crate::geom::{Point, Rect};

/// What a pointer gesture does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Drag a rectangle to create a new group of seats.
    #[default]
    Add,
    /// Click a group to select it.
    Select,
    /// Drag a rectangle to remove every seat inside it.
    Delete,
}

impl Mode {
    /// Whether this mode is driven by a drag rectangle rather than a click.
    #[must_use]
    pub fn is_rect_gesture(self) -> bool {
        matches!(self, Self::Add | Self::Delete)
    }
}

/// Persistent UI state visible to the renderer and the control panel.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active mode.
    pub mode: Mode,
    /// The id of the currently selected group, if any.
    pub selected_id: Option<GroupId>,
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer start.
    #[default]
    Idle,
    /// An Add or Delete rectangle is being dragged out.
    DrawingRect {
        /// Where the pointer went down; one corner of the rectangle.
        start: Point,
        /// Latest pointer position; the opposite corner.
        current: Point,
    },
    /// A Select-mode press that becomes a click if released close to `start`.
    Pressing {
        start: Point,
        /// Farthest the pointer has wandered from `start`.
        max_travel: f64,
    },
}

impl InputState {
    /// The rectangle spanned by an in-progress drag, if any.
    #[must_use]
    pub fn drag_rect(&self) -> Option<Rect> {
        match self {
            Self::DrawingRect { start, current } => Some(Rect::from_corners(*start, *current)),
            Self::Idle | Self::Pressing { .. } => None,
        }
    }
}

/// Live feedback for an in-progress Add or Delete drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GesturePreview {
    pub mode: Mode,
    pub rect: Rect,
    /// Rows of seats the rectangle would hold.
    pub rows: usize,
    /// Columns of seats the rectangle would hold.
    pub cols: usize,
}

impl GesturePreview {
    /// Dimension caption in `"{cols}x{rows}"` form.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{}x{}", self.cols, self.rows)
    }
}
