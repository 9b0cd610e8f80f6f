//! Layout configuration, built from defaults or environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::ops::RangeInclusive;

use crate::consts::{
    BASE_SPACING, CENTER_VENUE_CURVE, CLICK_SLOP, CURVE_MAX, CURVE_MIN, LABEL_OFFSET, LEFT_VENUE_ROTATION_DEG,
    RIGHT_VENUE_ROTATION_DEG, SPLIT_GAP, STRETCH_MAX, STRETCH_MIN,
};
use crate::error::LayoutError;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Seat spacing at stretch 1.0; also the cell size used to size drawn grids.
    pub base_spacing: f64,
    /// Gap between a group's left edge and its row labels.
    pub label_offset: f64,
    /// Stretch factor given to newly drawn groups.
    pub default_stretch: f64,
    pub stretch_range: RangeInclusive<f64>,
    pub curve_range: RangeInclusive<f64>,
    pub split_gap: f64,
    pub center_curve: f64,
    pub left_rotation: f64,
    pub right_rotation: f64,
    /// Pointer travel under which a select-mode press/release is a click.
    pub click_slop: f64,
    /// Extra margin around a group's bounds when selecting by click.
    pub hit_padding: f64,
    /// Drop back to Select mode after a completed Add or Delete gesture.
    pub auto_return_to_select: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_spacing: BASE_SPACING,
            label_offset: LABEL_OFFSET,
            default_stretch: 1.0,
            stretch_range: STRETCH_MIN..=STRETCH_MAX,
            curve_range: CURVE_MIN..=CURVE_MAX,
            split_gap: SPLIT_GAP,
            center_curve: CENTER_VENUE_CURVE,
            left_rotation: LEFT_VENUE_ROTATION_DEG,
            right_rotation: RIGHT_VENUE_ROTATION_DEG,
            click_slop: CLICK_SLOP,
            hit_padding: 0.0,
            auto_return_to_select: true,
        }
    }
}

impl LayoutConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `SEATMAP_BASE_SPACING`: default 30, must be > 0
    /// - `SEATMAP_LABEL_OFFSET`: default 40
    /// - `SEATMAP_DEFAULT_STRETCH`: default 1.0, clamped into the stretch range
    /// - `SEATMAP_CLICK_SLOP`: default 3, must be >= 0
    /// - `SEATMAP_HIT_PADDING`: default 0, must be >= 0
    /// - `SEATMAP_AUTO_RETURN`: `true` (default) or `false`
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::ConfigParse`] for values that do not parse or are out of range.
    pub fn from_env() -> Result<Self, LayoutError> {
        let defaults = Self::default();

        let base_spacing = env_parse_f64("SEATMAP_BASE_SPACING", defaults.base_spacing)?;
        if base_spacing <= 0.0 {
            return Err(LayoutError::ConfigParse(format!("SEATMAP_BASE_SPACING must be positive, got {base_spacing}")));
        }
        let label_offset = env_parse_f64("SEATMAP_LABEL_OFFSET", defaults.label_offset)?;
        let default_stretch = env_parse_f64("SEATMAP_DEFAULT_STRETCH", defaults.default_stretch)?
            .clamp(*defaults.stretch_range.start(), *defaults.stretch_range.end());
        let click_slop = env_parse_non_negative("SEATMAP_CLICK_SLOP", defaults.click_slop)?;
        let hit_padding = env_parse_non_negative("SEATMAP_HIT_PADDING", defaults.hit_padding)?;
        let auto_return_to_select = match std::env::var("SEATMAP_AUTO_RETURN") {
            Ok(raw) => parse_bool("SEATMAP_AUTO_RETURN", &raw)?,
            Err(_) => defaults.auto_return_to_select,
        };

        Ok(Self {
            base_spacing,
            label_offset,
            default_stretch,
            click_slop,
            hit_padding,
            auto_return_to_select,
            ..defaults
        })
    }

    /// Clamp an operator stretch value into the configured range.
    #[must_use]
    pub fn clamp_stretch(&self, value: f64) -> f64 {
        value.clamp(*self.stretch_range.start(), *self.stretch_range.end())
    }

    /// Clamp an operator curve value into the configured range.
    #[must_use]
    pub fn clamp_curve(&self, value: f64) -> f64 {
        value.clamp(*self.curve_range.start(), *self.curve_range.end())
    }
}

fn env_parse_f64(key: &str, default: f64) -> Result<f64, LayoutError> {
    match std::env::var(key) {
        Ok(raw) => parse_f64(key, &raw),
        Err(_) => Ok(default),
    }
}

fn env_parse_non_negative(key: &str, default: f64) -> Result<f64, LayoutError> {
    let value = env_parse_f64(key, default)?;
    if value < 0.0 {
        return Err(LayoutError::ConfigParse(format!("{key} must not be negative, got {value}")));
    }
    Ok(value)
}

fn parse_f64(key: &str, raw: &str) -> Result<f64, LayoutError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(LayoutError::ConfigParse(format!("{key}: expected a number, got '{raw}'"))),
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, LayoutError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LayoutError::ConfigParse(format!("{key}: expected true or false, got '{raw}'"))),
    }
}
