//! The layout engine: owns the group store, interprets pointer gestures
//! according to the operator's mode, and applies panel commands to the
//! selected group.
//!
//! Every handler runs to completion and returns the [`Action`]s the host
//! needs to react to. Failures inside a component are logged and turned into
//! no-ops here; they never reach the host.

use tracing::{debug, info, warn};

use crate::align;
use crate::config::LayoutConfig;
use crate::doc::{Alignment, Group, GroupId, GroupStore, VenueMode};
use crate::error::LayoutError;
use crate::geom::{Point, Rect};
use crate::grid;
use crate::hit;
use crate::input::{GesturePreview, InputState, Mode, UiState};
use crate::snapshot::{SelectionSummary, Snapshot};
use crate::transform;
use crate::venue;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers and commands for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    GroupCreated(GroupId),
    GroupUpdated(GroupId),
    GroupRemoved(GroupId),
    /// The selection changed; `None` means nothing is selected.
    SelectionChanged(Option<SelectionSummary>),
    ModeChanged(Mode),
    RenderNeeded,
}

/// Engine state: the committed layout plus transient UI and gesture state.
pub struct Engine {
    pub store: GroupStore,
    pub ui: UiState,
    pub input: InputState,
    pub config: LayoutConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(LayoutConfig::default())
    }
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: LayoutConfig) -> Self {
        Self { store: GroupStore::new(), ui: UiState::default(), input: InputState::default(), config }
    }

    // --- Mode ---

    /// Switch mode. Any gesture in progress is abandoned and the selection is cleared.
    pub fn set_mode(&mut self, mode: Mode) -> Vec<Action> {
        self.input = InputState::Idle;
        let mut actions = Vec::new();
        if self.ui.selected_id.take().is_some() {
            actions.push(Action::SelectionChanged(None));
        }
        if self.ui.mode != mode {
            debug!(?mode, "mode changed");
            self.ui.mode = mode;
            actions.push(Action::ModeChanged(mode));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Pointer input ---

    /// Pointer pressed at `pt`. A gesture already in progress is replaced.
    pub fn on_pointer_start(&mut self, pt: Point) -> Vec<Action> {
        if self.ui.mode.is_rect_gesture() {
            self.input = InputState::DrawingRect { start: pt, current: pt };
            vec![Action::RenderNeeded]
        } else {
            self.input = InputState::Pressing { start: pt, max_travel: 0.0 };
            Vec::new()
        }
    }

    /// Pointer moved to `pt`.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        match &mut self.input {
            InputState::DrawingRect { current, .. } => {
                *current = pt;
                vec![Action::RenderNeeded]
            }
            InputState::Pressing { start, max_travel } => {
                *max_travel = max_travel.max(start.distance(pt));
                Vec::new()
            }
            InputState::Idle => Vec::new(),
        }
    }

    /// Pointer released. Commits the gesture that was in progress.
    pub fn on_pointer_end(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::DrawingRect { start, current } => {
                let rect = Rect::from_corners(start, current);
                let mut actions = match self.ui.mode {
                    Mode::Add => self.commit_add(rect),
                    Mode::Delete => self.commit_delete(rect),
                    Mode::Select => Vec::new(),
                };
                actions.extend(self.auto_return());
                actions.push(Action::RenderNeeded);
                actions
            }
            InputState::Pressing { start, max_travel } => {
                if max_travel > self.config.click_slop {
                    debug!(max_travel, "press moved too far for a click; ignored");
                    return Vec::new();
                }
                self.select_at(start)
            }
            InputState::Idle => Vec::new(),
        }
    }

    fn commit_add(&mut self, rect: Rect) -> Vec<Action> {
        let (rows, cols) = grid::dimensions(rect, self.config.base_spacing);
        if rows == 0 || cols == 0 {
            debug!(rows, cols, "drawn rectangle too small for a grid; nothing created");
            return Vec::new();
        }

        let id = self.store.allocate_id();
        let generated = grid::generate(
            id,
            rect,
            self.config.base_spacing,
            self.config.default_stretch,
            self.config.label_offset,
            rows,
            cols,
        );
        match generated {
            Ok(group) => {
                info!(%id, rows, cols, "group created");
                self.store.insert(group);
                vec![Action::GroupCreated(id)]
            }
            Err(e) => {
                warn!(error = %e, "grid generation rejected");
                Vec::new()
            }
        }
    }

    fn commit_delete(&mut self, rect: Rect) -> Vec<Action> {
        let (touched, removed) = self.store.delete_dots_in(rect);
        let mut actions: Vec<Action> = touched.iter().copied().map(Action::GroupUpdated).collect();
        for id in removed {
            info!(%id, "group emptied and removed");
            actions.push(Action::GroupRemoved(id));
            if self.ui.selected_id == Some(id) {
                self.ui.selected_id = None;
                actions.push(Action::SelectionChanged(None));
            }
        }
        actions
    }

    fn auto_return(&mut self) -> Option<Action> {
        if !self.config.auto_return_to_select || self.ui.mode == Mode::Select {
            return None;
        }
        self.ui.mode = Mode::Select;
        Some(Action::ModeChanged(Mode::Select))
    }

    fn select_at(&mut self, pt: Point) -> Vec<Action> {
        let hit = hit::hit_test(pt, &self.store, self.config.hit_padding);
        debug!(x = pt.x, y = pt.y, ?hit, "select click");
        self.ui.selected_id = hit;
        vec![Action::SelectionChanged(self.selection_summary()), Action::RenderNeeded]
    }

    // --- Commands on the selected group ---

    /// Set the selected group's rotation; wrapped into `[0, 360)`.
    pub fn set_rotation(&mut self, angle_deg: f64) -> Vec<Action> {
        self.update_selected("rotate", |g, _| Ok(transform::rotate(g, angle_deg)))
    }

    /// Set the selected group's stretch factor, clamped into the configured range.
    pub fn set_stretch(&mut self, factor: f64) -> Vec<Action> {
        self.update_selected("stretch", |g, cfg| {
            transform::restretch(g, cfg.clamp_stretch(factor), cfg.base_spacing)
        })
    }

    /// Set the selected group's curve intensity, clamped into the configured range.
    pub fn set_curve(&mut self, intensity: f64) -> Vec<Action> {
        self.update_selected("curve", |g, cfg| {
            if !intensity.is_finite() {
                return Ok(g.clone());
            }
            Ok(transform::recurve(g, cfg.clamp_curve(intensity), cfg.base_spacing))
        })
    }

    /// Re-lay the selected group's rows.
    pub fn align(&mut self, mode: Alignment) -> Vec<Action> {
        self.update_selected("align", |g, cfg| Ok(align::align(g, mode, cfg.base_spacing)))
    }

    /// Toggle a venue preset on the selected group.
    pub fn toggle_venue(&mut self, mode: VenueMode) -> Vec<Action> {
        self.update_selected("venue", |g, cfg| Ok(venue::toggle_venue_shape(g, mode, cfg)))
    }

    /// Set the selected group's venue preset outright.
    pub fn set_venue(&mut self, mode: VenueMode) -> Vec<Action> {
        self.update_selected("venue", |g, cfg| Ok(venue::apply_venue_shape(g, mode, cfg)))
    }

    fn update_selected<F>(&mut self, op: &'static str, f: F) -> Vec<Action>
    where
        F: FnOnce(&Group, &LayoutConfig) -> Result<Group, LayoutError>,
    {
        let Some(id) = self.ui.selected_id else {
            debug!(op, "no group selected; command ignored");
            return Vec::new();
        };
        let Some(group) = self.store.get(id) else {
            let err = LayoutError::UnknownGroup(id);
            warn!(op, error = %err, "selection pointed at a missing group");
            self.ui.selected_id = None;
            return vec![Action::SelectionChanged(None)];
        };

        match f(group, &self.config) {
            Ok(next) => {
                if next == *group {
                    return Vec::new();
                }
                self.store.replace(next);
                debug!(%id, op, "group updated");
                vec![Action::GroupUpdated(id), Action::RenderNeeded]
            }
            Err(e) => {
                warn!(%id, op, error = %e, "command rejected");
                Vec::new()
            }
        }
    }

    // --- Queries ---

    /// Current operator mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.ui.mode
    }

    /// The currently selected group, if any.
    #[must_use]
    pub fn selection(&self) -> Option<GroupId> {
        self.ui.selected_id
    }

    /// Panel view of the selected group.
    #[must_use]
    pub fn selection_summary(&self) -> Option<SelectionSummary> {
        self.ui.selected_id.and_then(|id| self.store.get(id)).map(SelectionSummary::from)
    }

    /// Look up a group by id.
    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.store.get(id)
    }

    /// All groups in store order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        self.store.groups()
    }

    /// Render-ready view of the whole layout.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.store, self.ui.selected_id)
    }

    /// The rectangle being dragged and the grid it would produce.
    #[must_use]
    pub fn gesture_preview(&self) -> Option<GesturePreview> {
        let rect = self.input.drag_rect()?;
        let (rows, cols) = grid::dimensions(rect, self.config.base_spacing);
        Some(GesturePreview { mode: self.ui.mode, rect, rows, cols })
    }
}
