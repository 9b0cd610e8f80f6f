//! Grid generation: turns an operator-drawn rectangle into a seat group.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::doc::{Alignment, Dot, Group, GroupId, Label, VenueMode};
use crate::error::LayoutError;
use crate::geom::Rect;

/// How many `(rows, cols)` of seats fit in `rect` at `base_spacing`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn dimensions(rect: Rect, base_spacing: f64) -> (usize, usize) {
    if base_spacing <= 0.0 || !base_spacing.is_finite() {
        return (0, 0);
    }
    let rows = (rect.height / base_spacing).floor().max(0.0);
    let cols = (rect.width / base_spacing).floor().max(0.0);
    (rows as usize, cols as usize)
}

/// Build a `row_count` x `col_count` lattice anchored at the top-left of `rect`.
///
/// Seats sit `base_spacing * stretch_factor` apart. Each row gets a
/// `"Row N"` label placed `label_offset` to the left of the group.
///
/// # Errors
///
/// Returns [`LayoutError::DegenerateGrid`] when either count is zero, and
/// [`LayoutError::InvalidStretch`] for a non-positive stretch factor.
#[allow(clippy::cast_precision_loss)]
pub fn generate(
    id: GroupId,
    rect: Rect,
    base_spacing: f64,
    stretch_factor: f64,
    label_offset: f64,
    row_count: usize,
    col_count: usize,
) -> Result<Group, LayoutError> {
    if row_count == 0 || col_count == 0 {
        return Err(LayoutError::DegenerateGrid { rows: row_count, cols: col_count });
    }
    if !(stretch_factor.is_finite() && stretch_factor > 0.0) {
        return Err(LayoutError::InvalidStretch(stretch_factor));
    }

    let spacing = base_spacing * stretch_factor;
    let mut dots = Vec::with_capacity(row_count * col_count);
    let mut labels = Vec::with_capacity(row_count);

    for row in 0..row_count {
        let cy = rect.y + row as f64 * spacing;
        for col in 0..col_count {
            let cx = rect.x + col as f64 * spacing;
            dots.push(Dot { cx, cy, original_x: cx, original_y: cy, row, col });
        }
        labels.push(Label { text: format!("Row {}", row + 1), x: rect.x - label_offset, y: cy, row });
    }

    Ok(Group {
        id,
        dots,
        labels,
        bounds: Rect::new(rect.x, rect.y, (col_count - 1) as f64 * spacing, (row_count - 1) as f64 * spacing),
        rotation_degrees: 0.0,
        stretch_factor,
        curve_intensity: 0.0,
        columns: col_count,
        venue_mode: VenueMode::None,
        alignment: Alignment::Left,
    })
}
