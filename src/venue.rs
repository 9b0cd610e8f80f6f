//! Venue-shape presets.
//!
//! Left and Right turn the whole group to face a thrust stage on that side.
//! Center splits the group down the middle with an aisle and bows the rows
//! toward the stage. Only one preset is active on a group at a time.

#[cfg(test)]
#[path = "venue_test.rs"]
mod venue_test;

use crate::config::LayoutConfig;
use crate::doc::{Dot, Group, VenueMode};
use crate::transform::recurve;

/// Make `mode` the group's only active preset.
///
/// Whatever preset was active is undone first, so switching from Center to
/// Left closes the aisle and flattens the rows before rotating. Setting the
/// preset that is already active leaves the group unchanged.
#[must_use]
pub fn apply_venue_shape(group: &Group, mode: VenueMode, config: &LayoutConfig) -> Group {
    if group.venue_mode == mode {
        return group.clone();
    }

    let cleared = match group.venue_mode {
        VenueMode::None => group.clone(),
        VenueMode::Left | VenueMode::Right => Group { rotation_degrees: 0.0, ..group.clone() },
        VenueMode::Center => recurve(&shift_split(group, -config.split_gap), 0.0, config.base_spacing),
    };

    let shaped = match mode {
        VenueMode::None => cleared,
        VenueMode::Left => Group { rotation_degrees: config.left_rotation, ..cleared },
        VenueMode::Right => Group { rotation_degrees: config.right_rotation, ..cleared },
        VenueMode::Center => recurve(&shift_split(&cleared, config.split_gap), config.center_curve, config.base_spacing),
    };

    Group { venue_mode: mode, ..shaped }
}

/// Operator toggle: pressing the active preset again turns it off, pressing
/// another preset switches to it.
#[must_use]
pub fn toggle_venue_shape(group: &Group, mode: VenueMode, config: &LayoutConfig) -> Group {
    let target = if group.venue_mode == mode { VenueMode::None } else { mode };
    apply_venue_shape(group, target, config)
}

/// First column of the right-hand half of a split.
#[must_use]
pub fn split_column(columns: usize) -> usize {
    columns / 2
}

/// Move the right-hand half of the group sideways by `dx`. The lattice
/// baseline (`original_x`) stays put, so the gap survives a restretch.
fn shift_split(group: &Group, dx: f64) -> Group {
    let first = split_column(group.columns);
    let dots = group
        .dots
        .iter()
        .map(|d| if d.col >= first { Dot { cx: d.cx + dx, ..*d } } else { *d })
        .collect();
    Group { dots, ..group.clone() }
}
