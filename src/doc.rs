//! Document model: seats, row labels, seat groups, and the in-memory store.
//!
//! A [`Group`] is the unit of every edit. Components never mutate a stored
//! group in place; they build a new value and hand it to
//! [`GroupStore::replace`], which swaps it in by id. Readers holding a
//! [`GroupStore::groups`] slice therefore only ever see whole groups.
//!
//! Two position representations live on each [`Dot`]: `cx`/`cy` are where the
//! seat is drawn (after stretch, alignment, curve and split), while
//! `original_x`/`original_y` are the un-curved lattice baseline the curve warp
//! reads from. Rotation is never baked into either.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use crate::geom::{Point, Rect};

/// Session-unique identifier for a seat group. Assigned once, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(pub u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One seat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    /// Current render x.
    pub cx: f64,
    /// Current render y.
    pub cy: f64,
    /// Lattice x before any split gap is applied.
    pub original_x: f64,
    /// Lattice y before any curve is applied.
    pub original_y: f64,
    pub row: usize,
    pub col: usize,
}

impl Dot {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.cx, self.cy)
    }
}

/// Row label, drawn to the left of the row's leading seat.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// The row this label names.
    pub row: usize,
}

/// Venue-shape preset. At most one is active per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VenueMode {
    #[default]
    None,
    Left,
    Right,
    Center,
}

impl VenueMode {
    /// Parse a panel name (`"left"`, `"right"`, `"center"`, `"none"`/`"off"`).
    /// Unrecognised names fall back to [`VenueMode::None`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "left" => Self::Left,
            "right" => Self::Right,
            "center" | "centre" => Self::Center,
            _ => Self::None,
        }
    }
}

/// Horizontal row alignment within a group's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Parse a panel name (`"left"`, `"center"`, `"right"`).
    /// Unrecognised names fall back to [`Alignment::Left`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "center" | "centre" => Self::Center,
            "right" => Self::Right,
            _ => Self::Left,
        }
    }
}

/// A set of seats created together from one drawn rectangle, plus the
/// transform parameters shared by all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: GroupId,
    pub dots: Vec<Dot>,
    pub labels: Vec<Label>,
    /// Axis-aligned box around the unrotated lattice.
    pub bounds: Rect,
    /// Clockwise rotation about the bounds center, applied at render time.
    pub rotation_degrees: f64,
    pub stretch_factor: f64,
    pub curve_intensity: f64,
    /// Column count fixed at generation time.
    pub columns: usize,
    pub venue_mode: VenueMode,
    pub alignment: Alignment,
}

impl Group {
    /// Number of lattice rows, counting rows whose seats were all deleted
    /// below the last surviving row.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.dots.iter().map(|d| d.row + 1).max().unwrap_or(0)
    }

    /// Center of the bounds; the rotation pivot.
    #[must_use]
    pub fn pivot(&self) -> Point {
        self.bounds.center()
    }

    /// Map a group-local point to where it is drawn once rotation is applied.
    #[must_use]
    pub fn to_world(&self, local: Point) -> Point {
        local.rotate_about(self.pivot(), self.rotation_degrees)
    }

    /// The seat at `(row, col)`, if it still exists.
    #[must_use]
    pub fn dot_at(&self, row: usize, col: usize) -> Option<&Dot> {
        self.dots.iter().find(|d| d.row == row && d.col == col)
    }

    /// The lowest-column seat remaining in `row`.
    #[must_use]
    pub fn leading_dot(&self, row: usize) -> Option<&Dot> {
        self.dots.iter().filter(|d| d.row == row).min_by_key(|d| d.col)
    }
}

/// In-memory, ordered store of seat groups.
///
/// Store order is creation order; hit-testing walks it front to back.
pub struct GroupStore {
    groups: Vec<Group>,
    next_id: u64,
}

impl GroupStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { groups: Vec::new(), next_id: 0 }
    }

    /// Reserve the next group id. Ids are never handed out twice.
    pub fn allocate_id(&mut self) -> GroupId {
        let id = GroupId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a freshly generated group. Empty groups are refused.
    pub fn insert(&mut self, group: Group) -> bool {
        if group.dots.is_empty() {
            return false;
        }
        self.groups.push(group);
        true
    }

    /// Swap in a new value for the group with the same id, keeping its
    /// position in store order. A replacement without dots removes the group.
    /// Returns false if no group with that id exists.
    pub fn replace(&mut self, group: Group) -> bool {
        let Some(idx) = self.groups.iter().position(|g| g.id == group.id) else {
            return false;
        };
        if group.dots.is_empty() {
            self.groups.remove(idx);
        } else {
            self.groups[idx] = group;
        }
        true
    }

    /// Remove a group by id, returning it if it was present.
    pub fn remove(&mut self, id: GroupId) -> Option<Group> {
        let idx = self.groups.iter().position(|g| g.id == id)?;
        Some(self.groups.remove(idx))
    }

    /// Return a reference to a group by id.
    #[must_use]
    pub fn get(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// All groups in store order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Drop every seat inside `area` from every group, then drop groups left
    /// empty and labels whose row lost all its seats.
    ///
    /// Returns `(touched, removed)` group ids: groups that lost some seats but
    /// survive, and groups that were emptied and removed.
    pub fn delete_dots_in(&mut self, area: Rect) -> (Vec<GroupId>, Vec<GroupId>) {
        let mut touched = Vec::new();
        let mut removed = Vec::new();

        let next: Vec<Group> = self
            .groups
            .iter()
            .filter_map(|group| {
                let dots: Vec<Dot> = group.dots.iter().filter(|d| !area.contains(d.position())).copied().collect();
                if dots.len() == group.dots.len() {
                    return Some(group.clone());
                }
                if dots.is_empty() {
                    removed.push(group.id);
                    return None;
                }
                touched.push(group.id);
                let labels = group
                    .labels
                    .iter()
                    .filter(|l| dots.iter().any(|d| d.row == l.row))
                    .cloned()
                    .collect();
                Some(Group { dots, labels, ..group.clone() })
            })
            .collect();

        self.groups = next;
        (touched, removed)
    }

    /// Number of groups currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if the store contains no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for GroupStore {
    fn default() -> Self {
        Self::new()
    }
}
