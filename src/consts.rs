//! Shared numeric constants for the seatmap crate.

// ── Lattice ─────────────────────────────────────────────────────

/// Distance between neighbouring seats at stretch factor 1.0, in surface units.
pub const BASE_SPACING: f64 = 30.0;

/// Horizontal distance from a group's left edge to its row labels.
pub const LABEL_OFFSET: f64 = 40.0;

// ── Operator ranges ─────────────────────────────────────────────

/// Smallest stretch factor the operator can dial in.
pub const STRETCH_MIN: f64 = 0.5;

/// Largest stretch factor the operator can dial in.
pub const STRETCH_MAX: f64 = 2.0;

/// Lower bound of the canonical curve intensity range.
pub const CURVE_MIN: f64 = -2.0;

/// Upper bound of the canonical curve intensity range.
pub const CURVE_MAX: f64 = 2.0;

/// Full turn in degrees; operator rotations wrap into `[0, FULL_TURN_DEG)`.
pub const FULL_TURN_DEG: f64 = 360.0;

// ── Venue presets ───────────────────────────────────────────────

/// Rotation applied by the left-thrust preset.
pub const LEFT_VENUE_ROTATION_DEG: f64 = 190.0;

/// Rotation applied by the right-thrust preset.
pub const RIGHT_VENUE_ROTATION_DEG: f64 = -10.0;

/// Horizontal gap opened between the two halves of a center-split group.
pub const SPLIT_GAP: f64 = 20.0;

/// Curve intensity driven by the center-split preset.
pub const CENTER_VENUE_CURVE: f64 = 2.0;

// ── Input ───────────────────────────────────────────────────────

/// Pointer travel, in surface units, below which a press/release counts as a click.
pub const CLICK_SLOP: f64 = 3.0;
