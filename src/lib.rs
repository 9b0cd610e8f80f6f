//! Seating-layout engine for sketching venue seat maps.
//!
//! The operator drags out rectangles that fill with a grid of numbered seats,
//! then reshapes each group by rotating it, stretching its row spacing,
//! curving its rows, aligning ragged rows, or applying a venue-shape preset.
//! This crate owns the group data and all the geometry behind those edits.
//! Drawing, pointer capture and panel widgets live in the host, which feeds
//! events into [`engine::Engine`] and paints from [`engine::Engine::snapshot`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Mode state machine, gesture handling, panel commands |
//! | [`doc`] | Seats, labels, groups and the ordered [`doc::GroupStore`] |
//! | [`grid`] | Builds a seat grid from a drawn rectangle |
//! | [`hit`] | Point-in-rotated-rectangle and group hit-testing |
//! | [`transform`] | Stretch, curve and rotation |
//! | [`align`] | Left/center/right row alignment |
//! | [`venue`] | Left/right/center venue presets |
//! | [`input`] | Modes and in-progress gesture state |
//! | [`snapshot`] | Read-only views for the renderer and panel |
//! | [`geom`] | Points, rectangles, rotation about a pivot |
//! | [`config`] | [`config::LayoutConfig`], defaults and environment overrides |
//! | [`error`] | [`error::LayoutError`] |
//! | [`consts`] | Shared numeric constants (spacing, ranges, preset values) |

pub mod align;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod geom;
pub mod grid;
pub mod hit;
pub mod input;
pub mod snapshot;
pub mod transform;
pub mod venue;
