use roomkit_core::{RoomShape, Rgb};
use roomkit_designer::{
    ContextAction, DesignerState, FurnitureKind, Key, Point, PointerButton, RoomConfig, Size,
    VisualCache,
};

#[test]
fn test_new_state_is_untitled_and_clean() {
    let state = DesignerState::new();
    assert_eq!(state.design_name, "Untitled");
    assert!(!state.is_modified);
    assert!(state.current_file_path.is_none());
    assert!(state.scene.is_empty());
}

#[test]
fn test_with_options_uses_default_size_and_grid() {
    let mut state = DesignerState::with_options(VisualCache::default(), Size::new(50, 40), 25);
    state.begin_placement(Some(FurnitureKind::Lamp));
    state.pointer_down(PointerButton::Primary, Point::new(60, 60));
    state.pointer_up(PointerButton::Primary, Point::new(60, 60));

    let item = state.scene.selected_item().unwrap();
    assert_eq!(item.size(), Size::new(50, 40));
    assert_eq!(item.position(), Point::new(50, 50));
    assert_eq!(state.controller.grid_size(), 25);
}

#[test]
fn test_edits_mark_modified() {
    let mut state = DesignerState::new();
    state.begin_placement(Some(FurnitureKind::Chair));
    state.pointer_down(PointerButton::Primary, Point::new(100, 100));
    state.pointer_up(PointerButton::Primary, Point::new(100, 100));
    state.is_modified = false;

    state.key_pressed(Key::Char('r'));
    assert!(state.is_modified);

    state.is_modified = false;
    let id = state.scene.selected_id().unwrap();
    state.apply_context_action(id, ContextAction::Resize(0.9));
    assert!(state.is_modified);
}

#[test]
fn test_room_change_marks_modified() {
    let mut state = DesignerState::new();
    let room = RoomConfig::new(3.0, 3.0, RoomShape::Square, Rgb::WHITE).unwrap();
    state.apply_room_config(room);
    assert!(state.is_modified);
    assert_eq!(state.display_name(), "Untitled*");
}

#[test]
fn test_new_design_resets_session() {
    let mut state = DesignerState::new();
    state.begin_placement(Some(FurnitureKind::Sofa));
    state.pointer_down(PointerButton::Primary, Point::new(100, 100));

    state.new_design();
    assert!(state.scene.is_empty());
    assert!(state.controller.state().is_idle());
    assert!(!state.is_modified);
    assert_eq!(state.display_name(), "Untitled");
}
