#![allow(clippy::float_cmp)]

use super::*;
use crate::geom::{Point, Rect};
use crate::grid;

fn make_group(id: u64, x: f64, y: f64, rows: usize, cols: usize) -> Group {
    let rect = Rect::new(x, y, 0.0, 0.0);
    grid::generate(GroupId(id), rect, 30.0, 1.0, 40.0, rows, cols).unwrap()
}

// =============================================================
// GroupId
// =============================================================

#[test]
fn group_id_display() {
    assert_eq!(GroupId(7).to_string(), "#7");
}

#[test]
fn store_allocates_monotonic_ids() {
    let mut store = GroupStore::new();
    let a = store.allocate_id();
    let b = store.allocate_id();
    let c = store.allocate_id();
    assert!(a < b && b < c);
}

#[test]
fn ids_are_not_reused_after_removal() {
    let mut store = GroupStore::new();
    let a = store.allocate_id();
    store.insert(make_group(a.0, 0.0, 0.0, 1, 1));
    store.remove(a);
    let b = store.allocate_id();
    assert_ne!(a, b);
}

// =============================================================
// Enum name parsing
// =============================================================

#[test]
fn alignment_from_name() {
    assert_eq!(Alignment::from_name("left"), Alignment::Left);
    assert_eq!(Alignment::from_name("Center"), Alignment::Center);
    assert_eq!(Alignment::from_name(" right "), Alignment::Right);
}

#[test]
fn alignment_unknown_name_falls_back_to_left() {
    assert_eq!(Alignment::from_name("justify"), Alignment::Left);
    assert_eq!(Alignment::from_name(""), Alignment::Left);
}

#[test]
fn venue_from_name() {
    assert_eq!(VenueMode::from_name("left"), VenueMode::Left);
    assert_eq!(VenueMode::from_name("RIGHT"), VenueMode::Right);
    assert_eq!(VenueMode::from_name("center"), VenueMode::Center);
    assert_eq!(VenueMode::from_name("off"), VenueMode::None);
}

#[test]
fn venue_unknown_name_falls_back_to_none() {
    assert_eq!(VenueMode::from_name("balcony"), VenueMode::None);
}

#[test]
fn enum_defaults() {
    assert_eq!(VenueMode::default(), VenueMode::None);
    assert_eq!(Alignment::default(), Alignment::Left);
}

// =============================================================
// Group helpers
// =============================================================

#[test]
fn row_count_and_lookup() {
    let g = make_group(0, 0.0, 0.0, 3, 4);
    assert_eq!(g.row_count(), 3);
    assert_eq!(g.dot_at(2, 3).map(Dot::position), Some(Point::new(90.0, 60.0)));
    assert!(g.dot_at(3, 0).is_none());
    assert_eq!(g.leading_dot(1).map(|d| d.col), Some(0));
}

#[test]
fn pivot_is_bounds_center() {
    let g = make_group(0, 10.0, 20.0, 2, 3);
    assert_eq!(g.pivot(), Point::new(40.0, 35.0));
}

#[test]
fn to_world_applies_rotation_about_pivot() {
    let mut g = make_group(0, 0.0, 0.0, 3, 3);
    g.rotation_degrees = 180.0;
    let p = g.to_world(Point::new(0.0, 0.0));
    assert!((p.x - 60.0).abs() < 1e-9);
    assert!((p.y - 60.0).abs() < 1e-9);
}

// =============================================================
// GroupStore
// =============================================================

#[test]
fn store_new_is_empty() {
    let store = GroupStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn insert_keeps_creation_order() {
    let mut store = GroupStore::new();
    store.insert(make_group(0, 0.0, 0.0, 1, 1));
    store.insert(make_group(1, 100.0, 0.0, 1, 1));
    let ids: Vec<GroupId> = store.groups().iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![GroupId(0), GroupId(1)]);
}

#[test]
fn insert_refuses_empty_group() {
    let mut store = GroupStore::new();
    let mut g = make_group(0, 0.0, 0.0, 1, 1);
    g.dots.clear();
    assert!(!store.insert(g));
    assert!(store.is_empty());
}

#[test]
fn replace_swaps_by_id_in_place() {
    let mut store = GroupStore::new();
    store.insert(make_group(0, 0.0, 0.0, 1, 1));
    store.insert(make_group(1, 100.0, 0.0, 1, 1));

    let mut next = make_group(0, 0.0, 0.0, 1, 1);
    next.rotation_degrees = 45.0;
    assert!(store.replace(next));

    assert_eq!(store.groups()[0].id, GroupId(0));
    assert_eq!(store.groups()[0].rotation_degrees, 45.0);
}

#[test]
fn replace_unknown_id_is_rejected() {
    let mut store = GroupStore::new();
    assert!(!store.replace(make_group(9, 0.0, 0.0, 1, 1)));
    assert!(store.is_empty());
}

#[test]
fn replace_with_empty_group_removes_it() {
    let mut store = GroupStore::new();
    store.insert(make_group(0, 0.0, 0.0, 2, 2));
    let mut next = make_group(0, 0.0, 0.0, 2, 2);
    next.dots.clear();
    assert!(store.replace(next));
    assert!(store.is_empty());
}

#[test]
fn remove_returns_group() {
    let mut store = GroupStore::new();
    store.insert(make_group(3, 0.0, 0.0, 1, 2));
    let removed = store.remove(GroupId(3));
    assert_eq!(removed.map(|g| g.dots.len()), Some(2));
    assert!(store.remove(GroupId(3)).is_none());
}

// =============================================================
// GroupStore: delete_dots_in
// =============================================================

#[test]
fn delete_covering_whole_group_removes_it() {
    let mut store = GroupStore::new();
    store.insert(make_group(0, 0.0, 0.0, 2, 3));
    let (touched, removed) = store.delete_dots_in(Rect::new(-5.0, -5.0, 100.0, 100.0));
    assert!(touched.is_empty());
    assert_eq!(removed, vec![GroupId(0)]);
    assert!(store.is_empty());
}

#[test]
fn delete_covering_nothing_leaves_group_unchanged() {
    let mut store = GroupStore::new();
    let g = make_group(0, 0.0, 0.0, 2, 3);
    store.insert(g.clone());
    let (touched, removed) = store.delete_dots_in(Rect::new(500.0, 500.0, 10.0, 10.0));
    assert!(touched.is_empty());
    assert!(removed.is_empty());
    assert_eq!(store.get(GroupId(0)), Some(&g));
}

#[test]
fn delete_partial_keeps_survivors_and_prunes_labels() {
    let mut store = GroupStore::new();
    store.insert(make_group(0, 0.0, 0.0, 3, 3));
    // Whole middle row.
    let (touched, removed) = store.delete_dots_in(Rect::new(-1.0, 29.0, 100.0, 2.0));
    assert_eq!(touched, vec![GroupId(0)]);
    assert!(removed.is_empty());

    let g = store.get(GroupId(0)).unwrap();
    assert_eq!(g.dots.len(), 6);
    assert!(g.dots.iter().all(|d| d.row != 1));
    let rows: Vec<usize> = g.labels.iter().map(|l| l.row).collect();
    assert_eq!(rows, vec![0, 2]);
    assert_eq!(g.row_count(), 3);
}

#[test]
fn delete_spans_multiple_groups() {
    let mut store = GroupStore::new();
    store.insert(make_group(0, 0.0, 0.0, 1, 2));
    store.insert(make_group(1, 100.0, 0.0, 1, 2));
    // Covers the right seat of group 0 and the left seat of group 1.
    let (touched, removed) = store.delete_dots_in(Rect::new(25.0, -1.0, 80.0, 2.0));
    assert_eq!(touched, vec![GroupId(0), GroupId(1)]);
    assert!(removed.is_empty());
    assert_eq!(store.groups().iter().map(|g| g.dots.len()).sum::<usize>(), 2);
}
