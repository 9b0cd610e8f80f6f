//! Group transforms: stretch and curve are baked into seat coordinates,
//! rotation is only recorded and applied by the renderer.
//!
//! All functions take the current group by reference and return the
//! replacement value; the caller swaps it into the store.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::consts::FULL_TURN_DEG;
use crate::doc::{Dot, Group, Label};
use crate::error::LayoutError;

/// Rescale a group's lattice from its current stretch factor to `new_factor`.
///
/// Column positions are normalised against the old spacing and re-expanded
/// at the new one, anchored at the bounds' top-left. Rows snap to
/// `bounds.y + row * new_spacing`, and that becomes the new un-curved
/// baseline (`original_y`), so the group's current curve is re-applied on
/// top of the new spacing. A center-split gap keeps its absolute width.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidStretch`] if `new_factor` (or the group's
/// current factor) is not finite and strictly positive.
#[allow(clippy::cast_precision_loss)]
pub fn restretch(group: &Group, new_factor: f64, base_spacing: f64) -> Result<Group, LayoutError> {
    if !(new_factor.is_finite() && new_factor > 0.0) {
        return Err(LayoutError::InvalidStretch(new_factor));
    }
    let old_spacing = base_spacing * group.stretch_factor;
    if !(old_spacing.is_finite() && old_spacing > 0.0) {
        return Err(LayoutError::InvalidStretch(group.stretch_factor));
    }

    let new_spacing = base_spacing * new_factor;
    let origin = group.bounds;

    let dots = group
        .dots
        .iter()
        .map(|d| {
            let gap = d.cx - d.original_x;
            let normalized_x = (d.original_x - origin.x) / old_spacing;
            let original_x = origin.x + normalized_x * new_spacing;
            let original_y = origin.y + d.row as f64 * new_spacing;
            Dot { cx: original_x + gap, cy: original_y, original_x, original_y, ..*d }
        })
        .collect();

    let mut stretched = Group { dots, stretch_factor: new_factor, ..group.clone() };
    stretched.bounds.width = group.columns.saturating_sub(1) as f64 * new_spacing;
    stretched.bounds.height = stretched.row_count().saturating_sub(1) as f64 * new_spacing;

    // Re-applying the current curve also moves the labels onto the new rows.
    Ok(recurve(&stretched, group.curve_intensity, base_spacing))
}

/// Horizontal position of `col` mapped onto `[-1, 1]`; 0 for single-column groups.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn normalized_column(col: usize, columns: usize) -> f64 {
    if columns <= 1 {
        return 0.0;
    }
    (col as f64 / (columns - 1) as f64) * 2.0 - 1.0
}

/// Vertical displacement of `col` under a curve of `intensity`.
#[must_use]
pub fn curve_offset(col: usize, columns: usize, intensity: f64, base_spacing: f64) -> f64 {
    let n = normalized_column(col, columns);
    intensity * n * n * base_spacing
}

/// Warp every row into a parabola: the center column stays on its baseline
/// and the edge columns move by `intensity * base_spacing`.
///
/// Labels follow the leading seat of their row.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn recurve(group: &Group, intensity: f64, base_spacing: f64) -> Group {
    let intensity = if intensity.is_finite() { intensity } else { 0.0 };

    let dots: Vec<Dot> = group
        .dots
        .iter()
        .map(|d| Dot { cy: d.original_y + curve_offset(d.col, group.columns, intensity, base_spacing), ..*d })
        .collect();

    let mut curved = Group { dots, curve_intensity: intensity, ..group.clone() };

    let spacing = base_spacing * group.stretch_factor;
    curved.labels = group
        .labels
        .iter()
        .map(|l| {
            let baseline = group.bounds.y + l.row as f64 * spacing;
            let y = curved
                .leading_dot(l.row)
                .map_or(baseline + curve_offset(0, group.columns, intensity, base_spacing), |d| d.cy);
            Label { y, ..l.clone() }
        })
        .collect();

    curved
}

/// Record a new rotation, wrapped into `[0, 360)`. Coordinates are untouched.
/// Non-finite angles leave the group as it is.
#[must_use]
pub fn rotate(group: &Group, angle_deg: f64) -> Group {
    if !angle_deg.is_finite() {
        return group.clone();
    }
    Group { rotation_degrees: angle_deg.rem_euclid(FULL_TURN_DEG), ..group.clone() }
}
