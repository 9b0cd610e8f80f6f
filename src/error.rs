//! Error type shared by the layout components.
//!
//! Every variant is recoverable. The engine catches these at the command
//! boundary, logs them, and leaves the store untouched.

use crate::doc::GroupId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// A drawn rectangle is too small to hold a single row or column.
    #[error("degenerate grid: {rows} rows x {cols} columns")]
    DegenerateGrid { rows: usize, cols: usize },

    /// Stretch factors must be finite and strictly positive.
    #[error("invalid stretch factor: {0}")]
    InvalidStretch(f64),

    /// The referenced group is not (or no longer) in the store.
    #[error("unknown group: {0}")]
    UnknownGroup(GroupId),

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),
}
