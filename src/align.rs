//! Row alignment: packs each row's surviving seats against the left edge,
//! the center, or the right edge of the group's bounds.

#[cfg(test)]
#[path = "align_test.rs"]
mod align_test;

use std::collections::BTreeMap;

use crate::doc::{Alignment, Dot, Group, Label, VenueMode};

/// Re-lay every row of `group` according to `mode`.
///
/// Seats in a row are packed at the group's current spacing in column order.
/// Rows are pinned back to their flat baseline, so any curve or center split
/// on the group is cleared.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn align(group: &Group, mode: Alignment, base_spacing: f64) -> Group {
    let spacing = base_spacing * group.stretch_factor;
    let bounds = group.bounds;

    let mut rows: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for d in &group.dots {
        rows.entry(d.row).or_default().push(d.col);
    }
    for cols in rows.values_mut() {
        cols.sort_unstable();
    }

    let dots = group
        .dots
        .iter()
        .map(|d| {
            let cols = rows.get(&d.row).map_or(&[][..], Vec::as_slice);
            let index = cols.iter().position(|&c| c == d.col).unwrap_or(0) as f64;
            let row_width = cols.len().saturating_sub(1) as f64 * spacing;
            let start = match mode {
                Alignment::Left => bounds.x,
                Alignment::Center => bounds.x + bounds.width / 2.0 - row_width / 2.0,
                Alignment::Right => bounds.x + bounds.width - row_width,
            };
            let cx = start + index * spacing;
            let cy = bounds.y + d.row as f64 * spacing;
            Dot { cx, cy, original_x: cx, original_y: cy, ..*d }
        })
        .collect();

    let labels = group
        .labels
        .iter()
        .map(|l| Label { y: bounds.y + l.row as f64 * spacing, ..l.clone() })
        .collect();

    let venue_mode = if group.venue_mode == VenueMode::Center { VenueMode::None } else { group.venue_mode };

    Group { dots, labels, alignment: mode, curve_intensity: 0.0, venue_mode, ..group.clone() }
}
