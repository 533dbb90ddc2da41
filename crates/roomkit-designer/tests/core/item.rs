use roomkit_designer::model::{FurnitureKind, FurnitureRecord, Point, Size};
use roomkit_designer::{Scene, VisualCache, MAX_ITEM_SIDE, MIN_ITEM_SIDE};

fn record(kind: FurnitureKind, x: i32, y: i32, w: i32, h: i32) -> FurnitureRecord {
    FurnitureRecord::new(kind, Point::new(x, y), Size::new(w, h))
}

#[test]
fn test_resize_truncates_and_recenters() {
    let mut chair = record(FurnitureKind::Chair, 100, 100, 80, 60);
    chair.resize(1.1);
    assert_eq!(chair.size, Size::new(88, 66));
    assert_eq!(chair.position, Point::new(96, 97));
    assert_eq!(chair.center(), Point::new(140, 130));
}

#[test]
fn test_resize_clamps_each_axis() {
    let mut bed = record(FurnitureKind::Bed, 0, 0, 490, 25);
    bed.resize(1.1);
    assert_eq!(bed.size, Size::new(MAX_ITEM_SIDE, 27));

    bed.resize(0.5);
    assert_eq!(bed.size, Size::new(250, MIN_ITEM_SIDE));
}

#[test]
fn test_rotate_by_180_keeps_dimensions() {
    let mut sofa = record(FurnitureKind::Sofa, 10, 10, 120, 40);
    sofa.rotate(180);
    assert_eq!(sofa.rotation, 180);
    assert_eq!(sofa.size, Size::new(120, 40));
    assert_eq!(sofa.position, Point::new(10, 10));
}

#[test]
fn test_rotate_negative_delta_normalizes() {
    let mut lamp = record(FurnitureKind::Lamp, 0, 0, 40, 40);
    lamp.rotate(-90);
    assert_eq!(lamp.rotation, 270);
}

#[test]
fn test_hit_test_after_quarter_turn() {
    // 100x20 bar centered at (150, 110); after a quarter turn it is 20 wide
    // and 100 tall around the same center.
    let mut bar = record(FurnitureKind::Cabinet, 100, 100, 100, 20);
    bar.rotation = 90;

    assert!(bar.contains_point(Point::new(150, 70)));
    assert!(bar.contains_point(Point::new(150, 150)));
    assert!(!bar.contains_point(Point::new(110, 110)));
    assert!(!bar.contains_point(Point::new(190, 110)));
}

#[test]
fn test_resize_rederives_visual_at_new_size() {
    let dir = tempfile::tempdir().unwrap();
    let source = image::RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 255, 255]));
    source.save(dir.path().join("table.png")).unwrap();

    let mut scene = Scene::new(VisualCache::new(Some(dir.path().to_path_buf())), Size::new(80, 60));
    let id = scene.add_item(FurnitureKind::Table, Point::new(0, 0), Size::new(80, 60));
    assert_eq!(
        scene.get(id).unwrap().visual().bitmap().unwrap().dimensions(),
        (80, 60)
    );

    scene.resize_item(id, 0.5);
    assert_eq!(
        scene.get(id).unwrap().visual().bitmap().unwrap().dimensions(),
        (40, 30)
    );
}

#[test]
fn test_missing_image_uses_labelled_fallback() {
    let mut scene = Scene::default();
    let id = scene.add_item(FurnitureKind::Other, Point::new(0, 0), Size::new(80, 60));
    match scene.get(id).unwrap().visual() {
        roomkit_designer::Visual::Fallback(fallback) => assert_eq!(fallback.label, "Other"),
        visual => panic!("expected fallback, got {:?}", visual),
    }
}
