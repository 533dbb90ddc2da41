use roomkit_core::{shared_vec, RoomShape, Rgb};
use roomkit_designer::{FurnitureKind, Point, RoomConfig, Scene, Size};

#[test]
fn test_scene_starts_empty_with_default_room() {
    let scene = Scene::default();
    assert!(scene.is_empty());
    assert_eq!(scene.selected_id(), None);
    assert_eq!(scene.placement(), None);
    assert_eq!(scene.room().width(), 5.0);
    assert_eq!(scene.room().height(), 3.0);
    assert_eq!(scene.room().shape(), RoomShape::Rectangle);
}

#[test]
fn test_room_config_keeps_items_and_selection() {
    let mut scene = Scene::default();
    let id = scene.add_item(FurnitureKind::Bed, Point::new(60, 60), Size::new(80, 60));
    scene.select(Some(id));

    let room = RoomConfig::new(6.0, 4.0, RoomShape::LShaped, Rgb::new(240, 230, 200)).unwrap();
    scene.apply_room_config(room.clone());

    assert_eq!(scene.room(), &room);
    assert_eq!(scene.item_count(), 1);
    assert_eq!(scene.selected_id(), Some(id));
}

#[test]
fn test_pick_returns_topmost_hit() {
    let mut scene = Scene::default();
    let bottom = scene.add_item(FurnitureKind::Table, Point::new(0, 0), Size::new(100, 100));
    let top = scene.add_item(FurnitureKind::Lamp, Point::new(50, 50), Size::new(100, 100));

    assert_eq!(scene.pick(Point::new(75, 75)), Some(top));
    assert_eq!(scene.pick(Point::new(10, 10)), Some(bottom));
    assert_eq!(scene.pick(Point::new(300, 300)), None);
}

#[test]
fn test_clear_empties_scene_and_notifies() {
    let seen = shared_vec();
    let mut scene = Scene::default();
    let id = scene.add_item(FurnitureKind::Chair, Point::new(0, 0), Size::new(80, 60));
    scene.select(Some(id));
    {
        let seen = seen.clone();
        scene.subscribe_selection(move |item| seen.borrow_mut().push(item.is_some()));
    }

    scene.clear();
    assert!(scene.is_empty());
    assert_eq!(scene.selected_id(), None);
    assert_eq!(*seen.borrow(), vec![false]);
}

#[test]
fn test_unsubscribed_listener_is_silent() {
    let seen = shared_vec();
    let mut scene = Scene::default();
    let subscription = {
        let seen = seen.clone();
        scene.subscribe_selection(move |_| seen.borrow_mut().push(()))
    };

    scene.select(None);
    assert!(scene.unsubscribe_selection(subscription));
    scene.select(None);

    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(scene.listener_count(), 0);
}

#[test]
fn test_listener_sees_selected_item_state() {
    let seen = shared_vec();
    let mut scene = Scene::default();
    {
        let seen = seen.clone();
        scene.subscribe_selection(move |item| {
            if let Some(item) = item {
                seen.borrow_mut().push((item.kind(), item.position()));
            }
        });
    }

    scene.begin_placement(Some(FurnitureKind::Cabinet));
    scene.place_at(Point::new(70, 80));

    assert_eq!(
        *seen.borrow(),
        vec![(FurnitureKind::Cabinet, Point::new(70, 80))]
    );
}

#[test]
fn test_operations_on_unknown_ids_are_noops() {
    let mut scene = Scene::default();
    let id = scene.add_item(FurnitureKind::Sofa, Point::new(0, 0), Size::new(80, 60));
    scene.select(Some(id));
    let removed = scene.delete_selected(|_| true).unwrap();

    assert!(!scene.rotate_item(removed.id(), 90));
    assert!(!scene.resize_item(removed.id(), 2.0));
    assert!(!scene.move_item(removed.id(), 5, 5));
    assert!(!scene.snap_to_grid(removed.id(), 10));
    assert!(!scene.bring_to_front(removed.id()));
}
