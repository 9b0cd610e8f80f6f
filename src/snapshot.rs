//! Read-only views handed to the rendering collaborator and the control panel.
//!
//! A renderer draws each [`GroupView`] by applying one rigid rotation of
//! `rotation_degrees` about `pivot`, then painting seats, labels and (when
//! `is_selected`) the bounds outline in that rotated frame.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use crate::doc::{Alignment, Group, GroupId, GroupStore, Label, VenueMode};
use crate::geom::{Point, Rect};

/// A seat ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeatView {
    /// 1-based seat number within the group.
    pub number: usize,
    pub row: usize,
    pub col: usize,
    /// Group-local position, before rotation.
    pub position: Point,
}

/// One group ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupView {
    pub id: GroupId,
    pub seats: Vec<SeatView>,
    pub labels: Vec<Label>,
    pub bounds: Rect,
    pub rotation_degrees: f64,
    pub pivot: Point,
    pub is_selected: bool,
}

impl GroupView {
    fn from_group(group: &Group, selected: Option<GroupId>) -> Self {
        let seats = group
            .dots
            .iter()
            .enumerate()
            .map(|(i, d)| SeatView { number: i + 1, row: d.row, col: d.col, position: d.position() })
            .collect();
        Self {
            id: group.id,
            seats,
            labels: group.labels.clone(),
            bounds: group.bounds,
            rotation_degrees: group.rotation_degrees,
            pivot: group.pivot(),
            is_selected: selected == Some(group.id),
        }
    }
}

/// The whole layout in store order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub groups: Vec<GroupView>,
}

impl Snapshot {
    /// Capture the store, flagging `selected` if it is present.
    #[must_use]
    pub fn capture(store: &GroupStore, selected: Option<GroupId>) -> Self {
        Self { groups: store.groups().iter().map(|g| GroupView::from_group(g, selected)).collect() }
    }

    /// Total seats across all groups.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.groups.iter().map(|g| g.seats.len()).sum()
    }
}

/// Transform parameters of the selected group, shown on the control panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionSummary {
    pub id: GroupId,
    pub rotation_degrees: f64,
    pub stretch_factor: f64,
    pub curve_intensity: f64,
    pub venue_mode: VenueMode,
    pub alignment: Alignment,
}

impl From<&Group> for SelectionSummary {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id,
            rotation_degrees: group.rotation_degrees,
            stretch_factor: group.stretch_factor,
            curve_intensity: group.curve_intensity,
            venue_mode: group.venue_mode,
            alignment: group.alignment,
        }
    }
}
