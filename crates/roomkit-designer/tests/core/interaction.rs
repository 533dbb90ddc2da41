use roomkit_designer::{
    ContextAction, FurnitureItem, FurnitureKind, GestureState, InteractionController, Key, Point,
    PointerButton, Scene, Size,
};
use std::cell::Cell;
use std::rc::Rc;

fn place(scene: &mut Scene, kind: FurnitureKind, x: i32, y: i32) -> roomkit_designer::ItemId {
    scene.begin_placement(Some(kind));
    scene.place_at(Point::new(x, y)).unwrap()
}

#[test]
fn test_placement_click_creates_and_drags_new_item() {
    let mut scene = Scene::default();
    let mut controller = InteractionController::new();
    scene.begin_placement(Some(FurnitureKind::Chair));

    let response = controller.pointer_down(&mut scene, PointerButton::Primary, Point::new(73, 84));
    assert!(response.redraw && response.changed);
    assert_eq!(scene.item_count(), 1);
    assert_eq!(scene.placement(), None);

    let id = scene.selected_id().unwrap();
    assert!(matches!(controller.state(), GestureState::Dragging { target, .. } if target == id));

    controller.pointer_up(&mut scene, PointerButton::Primary, Point::new(73, 84));
    assert_eq!(scene.get(id).unwrap().position(), Point::new(70, 80));
}

#[test]
fn test_click_on_item_brings_it_to_front() {
    let mut scene = Scene::default();
    let mut controller = InteractionController::new();
    let table = place(&mut scene, FurnitureKind::Table, 100, 100);
    let sofa = place(&mut scene, FurnitureKind::Sofa, 150, 120);

    // Only the table covers this point.
    controller.pointer_down(&mut scene, PointerButton::Primary, Point::new(105, 105));
    controller.pointer_up(&mut scene, PointerButton::Primary, Point::new(105, 105));

    let order: Vec<_> = scene.items().iter().map(FurnitureItem::id).collect();
    assert_eq!(order, vec![sofa, table]);
    assert_eq!(scene.selected_id(), Some(table));
}

#[test]
fn test_click_on_empty_floor_clears_selection() {
    let mut scene = Scene::default();
    let mut controller = InteractionController::new();
    place(&mut scene, FurnitureKind::Bed, 100, 100);

    let response = controller.pointer_down(&mut scene, PointerButton::Primary, Point::new(400, 400));
    assert!(response.redraw);
    assert!(!response.changed);
    assert_eq!(scene.selected_id(), None);
    assert!(controller.state().is_idle());
}

#[test]
fn test_drag_uses_delta_from_last_position() {
    let mut scene = Scene::default();
    let mut controller = InteractionController::with_grid_size(1);
    let id = place(&mut scene, FurnitureKind::Cabinet, 100, 100);

    controller.pointer_down(&mut scene, PointerButton::Primary, Point::new(120, 120));
    for step in 1..=5 {
        controller.pointer_moved(&mut scene, Point::new(120 + step * 3, 120 - step));
    }
    controller.pointer_up(&mut scene, PointerButton::Primary, Point::new(135, 115));

    assert_eq!(scene.get(id).unwrap().position(), Point::new(115, 95));
}

#[test]
fn test_pointer_motion_when_idle_does_nothing() {
    let mut scene = Scene::default();
    let mut controller = InteractionController::new();
    let id = place(&mut scene, FurnitureKind::Chair, 100, 100);

    let response = controller.pointer_moved(&mut scene, Point::new(130, 130));
    assert!(!response.redraw);
    assert_eq!(scene.get(id).unwrap().position(), Point::new(100, 100));
}

#[test]
fn test_focus_loss_rolls_back_drag() {
    let mut scene = Scene::default();
    let mut controller = InteractionController::new();
    let id = place(&mut scene, FurnitureKind::Sofa, 100, 100);

    controller.pointer_down(&mut scene, PointerButton::Primary, Point::new(110, 110));
    controller.pointer_moved(&mut scene, Point::new(170, 190));
    let response = controller.focus_lost(&mut scene);

    assert!(response.redraw);
    assert_eq!(scene.get(id).unwrap().position(), Point::new(100, 100));
    assert!(controller.state().is_idle());
}

#[test]
fn test_escape_disarms_placement() {
    let mut scene = Scene::default();
    let mut controller = InteractionController::new();
    scene.begin_placement(Some(FurnitureKind::Lamp));

    controller.key_pressed(&mut scene, Key::Escape);
    assert_eq!(scene.placement(), None);

    controller.pointer_down(&mut scene, PointerButton::Primary, Point::new(100, 100));
    assert!(scene.is_empty());
}

#[test]
fn test_resize_keys() {
    let mut scene = Scene::default();
    let mut controller = InteractionController::new();
    let id = place(&mut scene, FurnitureKind::Table, 100, 100);

    controller.key_pressed(&mut scene, Key::Char('+'));
    assert_eq!(scene.get(id).unwrap().size(), Size::new(88, 66));

    controller.key_pressed(&mut scene, Key::Char('-'));
    assert_eq!(scene.get(id).unwrap().size(), Size::new(79, 59));

    controller.key_pressed(&mut scene, Key::Char('='));
    assert_eq!(scene.get(id).unwrap().size(), Size::new(86, 64));

    let response = controller.key_pressed(&mut scene, Key::Char('x'));
    assert!(!response.redraw);
}

#[test]
fn test_context_menu_actions_apply_to_target() {
    let mut scene = Scene::default();
    let mut controller = InteractionController::new();
    let chair = place(&mut scene, FurnitureKind::Chair, 100, 100);
    let lamp = place(&mut scene, FurnitureKind::Lamp, 300, 300);

    let menu = controller
        .pointer_down(&mut scene, PointerButton::Secondary, Point::new(110, 110))
        .context_menu
        .unwrap();
    assert_eq!(menu.target, chair);
    assert_eq!(scene.selected_id(), Some(chair));
    assert_eq!(
        menu.actions,
        vec![
            ContextAction::Rotate(90),
            ContextAction::Resize(1.1),
            ContextAction::Resize(0.9),
            ContextAction::Delete,
        ]
    );

    controller.apply_context_action(&mut scene, menu.target, ContextAction::Rotate(90));
    assert_eq!(scene.get(chair).unwrap().rotation(), 90);
    assert_eq!(scene.get(lamp).unwrap().rotation(), 0);

    let response = controller.apply_context_action(&mut scene, menu.target, ContextAction::Delete);
    assert!(response.changed);
    assert!(scene.get(chair).is_none());
    assert_eq!(scene.selected_id(), None);
}

#[test]
fn test_delete_key_consults_confirmation() {
    let mut scene = Scene::default();
    let mut controller = InteractionController::new();
    let id = place(&mut scene, FurnitureKind::Bed, 100, 100);

    let asked = Rc::new(Cell::new(0));
    let answer = Rc::new(Cell::new(false));
    {
        let asked = asked.clone();
        let answer = answer.clone();
        controller.set_confirmation(move |item: &FurnitureItem| {
            assert_eq!(item.kind(), FurnitureKind::Bed);
            asked.set(asked.get() + 1);
            answer.get()
        });
    }

    controller.key_pressed(&mut scene, Key::Delete);
    assert!(scene.get(id).is_some());

    answer.set(true);
    controller.key_pressed(&mut scene, Key::Delete);
    assert!(scene.get(id).is_none());
    assert_eq!(asked.get(), 2);

    // Nothing selected: no prompt at all.
    controller.key_pressed(&mut scene, Key::Delete);
    assert_eq!(asked.get(), 2);
}

#[test]
fn test_delete_during_drag_ends_gesture() {
    let mut scene = Scene::default();
    let mut controller = InteractionController::new();
    place(&mut scene, FurnitureKind::Chair, 100, 100);

    controller.pointer_down(&mut scene, PointerButton::Primary, Point::new(110, 110));
    controller.key_pressed(&mut scene, Key::Delete);

    assert!(scene.is_empty());
    assert!(controller.state().is_idle());
}
