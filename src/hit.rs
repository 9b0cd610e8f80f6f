#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{GroupId, GroupStore};
use crate::geom::{Point, Rect};

/// Whether `point` lies inside `rect` after `rect` has been rotated by
/// `angle_deg` about its own center.
///
/// The query point is turned by `-angle_deg` about the center, which undoes
/// the rectangle's rotation, and then tested against the axis-aligned rect.
#[must_use]
pub fn is_point_in_rotated_rect(point: Point, rect: Rect, angle_deg: f64) -> bool {
    let local = point.rotate_about(rect.center(), -angle_deg);
    rect.contains(local)
}

/// Test which group (if any) is under `point`, walking the store front to back.
///
/// Each group is tested against its bounds grown by `padding` on every side,
/// rotated by the group's rotation. The first match wins.
#[must_use]
pub fn hit_test(point: Point, store: &GroupStore, padding: f64) -> Option<GroupId> {
    store
        .groups()
        .iter()
        .find(|g| {
            let b = g.bounds;
            let padded = Rect::new(b.x - padding, b.y - padding, b.width + 2.0 * padding, b.height + 2.0 * padding);
            is_point_in_rotated_rect(point, padded, g.rotation_degrees)
        })
        .map(|g| g.id)
}
