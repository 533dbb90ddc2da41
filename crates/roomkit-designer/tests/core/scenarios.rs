//! End-to-end editing sessions driven through the controller.

use roomkit_designer::{
    FurnitureKind, InteractionController, Key, Point, PointerButton, Scene, Size,
};

#[test]
fn test_chair_resize_rotate_delete() {
    let mut scene = Scene::default();
    let mut controller = InteractionController::new();

    scene.begin_placement(Some(FurnitureKind::Chair));
    controller.pointer_down(&mut scene, PointerButton::Primary, Point::new(100, 100));
    controller.pointer_up(&mut scene, PointerButton::Primary, Point::new(100, 100));

    let chair = scene.selected_id().unwrap();
    {
        let item = scene.get(chair).unwrap();
        assert_eq!(item.position(), Point::new(100, 100));
        assert_eq!(item.size(), Size::new(80, 60));
    }

    controller.key_pressed(&mut scene, Key::Char('+'));
    {
        let item = scene.get(chair).unwrap();
        assert_eq!(item.size(), Size::new(88, 66));
        assert_eq!(item.center(), Point::new(140, 130));
        assert_eq!(item.position(), Point::new(96, 97));
    }

    controller.key_pressed(&mut scene, Key::Char('r'));
    {
        let item = scene.get(chair).unwrap();
        assert_eq!(item.rotation(), 90);
        assert_eq!(item.size(), Size::new(66, 88));
        assert_eq!(item.center(), Point::new(140, 130));
    }

    controller.key_pressed(&mut scene, Key::Delete);
    assert_eq!(scene.item_count(), 0);
    assert_eq!(scene.selected_id(), None);
}

#[test]
fn test_overlapping_table_and_sofa() {
    let mut scene = Scene::default();
    let mut controller = InteractionController::new();

    scene.begin_placement(Some(FurnitureKind::Table));
    controller.pointer_down(&mut scene, PointerButton::Primary, Point::new(100, 100));
    controller.pointer_up(&mut scene, PointerButton::Primary, Point::new(100, 100));
    let table = scene.selected_id().unwrap();

    scene.begin_placement(Some(FurnitureKind::Sofa));
    controller.pointer_down(&mut scene, PointerButton::Primary, Point::new(140, 120));
    controller.pointer_up(&mut scene, PointerButton::Primary, Point::new(140, 120));
    let sofa = scene.selected_id().unwrap();

    let overlap = Point::new(150, 130);
    assert_eq!(scene.pick(overlap), Some(sofa));

    scene.bring_to_front(table);
    assert_eq!(scene.pick(overlap), Some(table));
}

#[test]
fn test_drag_then_rotate_keeps_snapped_grid_position() {
    let mut scene = Scene::default();
    let mut controller = InteractionController::new();

    scene.begin_placement(Some(FurnitureKind::Bed));
    controller.pointer_down(&mut scene, PointerButton::Primary, Point::new(61, 67));
    controller.pointer_moved(&mut scene, Point::new(95, 88));
    controller.pointer_up(&mut scene, PointerButton::Primary, Point::new(95, 88));

    let bed = scene.selected_id().unwrap();
    // (61, 67) moved by (34, 21) is (95, 88), snapped down to (90, 80).
    assert_eq!(scene.get(bed).unwrap().position(), Point::new(90, 80));

    for _ in 0..4 {
        controller.key_pressed(&mut scene, Key::Char('R'));
    }
    let item = scene.get(bed).unwrap();
    assert_eq!(item.rotation(), 0);
    assert_eq!(item.size(), Size::new(80, 60));
    assert_eq!(item.position(), Point::new(90, 80));
}

#[test]
fn test_drag_to_coordinate_limit_stays_pickable() {
    let mut scene = Scene::default();
    let mut controller = InteractionController::new();
    let chair = scene.add_item(FurnitureKind::Chair, Point::new(100, 100), Size::new(80, 60));

    controller.pointer_down(&mut scene, PointerButton::Primary, Point::new(110, 110));
    controller.pointer_moved(&mut scene, Point::new(i32::MAX, 110));
    controller.pointer_up(&mut scene, PointerButton::Primary, Point::new(i32::MAX, 110));

    let item = scene.get(chair).unwrap();
    // Clamped to i32::MAX - 80, then snapped down to the grid.
    assert_eq!(item.position(), Point::new(2_147_483_560, 100));
    assert_eq!(scene.pick(Point::new(0, 0)), None);
    assert_eq!(scene.pick(item.center()), Some(chair));
}
