use super::*;

// =============================================================
// Mode
// =============================================================

#[test]
fn mode_default_is_add() {
    assert_eq!(Mode::default(), Mode::Add);
}

#[test]
fn rect_gesture_modes() {
    assert!(Mode::Add.is_rect_gesture());
    assert!(Mode::Delete.is_rect_gesture());
    assert!(!Mode::Select.is_rect_gesture());
}

#[test]
fn mode_all_variants_distinct() {
    let variants = [Mode::Add, Mode::Select, Mode::Delete];
    for (i, a) in variants.iter().enumerate() {
        for (j, b) in variants.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default() {
    let ui = UiState::default();
    assert_eq!(ui.mode, Mode::Add);
    assert!(ui.selected_id.is_none());
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert!(matches!(InputState::default(), InputState::Idle));
}

#[test]
fn drag_rect_spans_start_and_current() {
    let state = InputState::DrawingRect { start: Point::new(100.0, 80.0), current: Point::new(40.0, 140.0) };
    assert_eq!(state.drag_rect(), Some(Rect::new(40.0, 80.0, 60.0, 60.0)));
}

#[test]
fn drag_rect_absent_when_not_drawing() {
    assert_eq!(InputState::Idle.drag_rect(), None);
    let press = InputState::Pressing { start: Point::new(1.0, 1.0), max_travel: 0.0 };
    assert_eq!(press.drag_rect(), None);
}

// =============================================================
// GesturePreview
// =============================================================

#[test]
fn preview_caption_is_cols_by_rows() {
    let preview = GesturePreview { mode: Mode::Add, rect: Rect::new(0.0, 0.0, 90.0, 60.0), rows: 2, cols: 3 };
    assert_eq!(preview.caption(), "3x2");
}
