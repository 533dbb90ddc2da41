//! Scene renderer
//! Renders the room and its furniture to an image buffer using tiny-skia.
//!
//! Features:
//! - Anti-aliased rendering
//! - Room outline with a 10 px floor grid
//! - Items rotated about their centers, bitmap or fallback shape
//! - Selection highlight

use image::{Rgb, RgbImage, RgbaImage};
use roomkit_core::Rgb as RoomColor;
use tiny_skia::{
    Color, FillRule, IntSize, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Rect, Stroke,
    Transform,
};

use crate::model::{FurnitureItem, PixelRect};
use crate::scene::Scene;
use crate::visuals::{FallbackVisual, Visual};

const FLOOR_GRID: i32 = 10;
const SELECTION_WIDTH: f32 = 2.0;

fn bg_color() -> Color {
    to_color(RoomColor::LIGHT_GRAY)
}
fn grid_color() -> Color {
    Color::from_rgba8(200, 200, 200, 100)
}
fn outline_color() -> Color {
    Color::from_rgba8(0, 0, 0, 255)
}
fn selection_color() -> Color {
    to_color(RoomColor::RED)
}

fn to_color(rgb: RoomColor) -> Color {
    Color::from_rgba8(rgb.r, rgb.g, rgb.b, 255)
}

/// Render the scene to an image buffer
pub fn render_scene(scene: &Scene, width: u32, height: u32) -> RgbImage {
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return RgbImage::new(width, height);
    };
    pixmap.fill(bg_color());

    draw_room(&mut pixmap, scene);

    for item in scene.items() {
        draw_item(&mut pixmap, item, scene.is_selected(item.id()));
    }

    // Convert Pixmap to RgbImage
    let data = pixmap.data();
    RgbImage::from_fn(width, height, |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        // Background is opaque, so premultiplied and straight colors agree
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    })
}

fn draw_room(pixmap: &mut Pixmap, scene: &Scene) {
    let room = scene.room();
    let outline = room.outline();

    let mut fill = Paint::default();
    fill.set_color(to_color(room.wall_color()));
    fill.anti_alias = false;

    for rect in &outline {
        if let Some(r) = to_rect(rect) {
            let path = PathBuilder::from_rect(r);
            pixmap.fill_path(&path, &fill, FillRule::Winding, Transform::identity(), None);
        }
    }

    let mut grid = Paint::default();
    grid.set_color(grid_color());
    grid.anti_alias = false;
    let hairline = Stroke {
        width: 1.0,
        ..Default::default()
    };
    for rect in &outline {
        if let Some(path) = grid_path(rect) {
            pixmap.stroke_path(&path, &grid, &hairline, Transform::identity(), None);
        }
    }

    let mut edge = Paint::default();
    edge.set_color(outline_color());
    edge.anti_alias = false;
    for rect in &outline {
        if let Some(r) = to_rect(rect) {
            let path = PathBuilder::from_rect(r);
            pixmap.stroke_path(&path, &edge, &hairline, Transform::identity(), None);
        }
    }
}

fn draw_item(pixmap: &mut Pixmap, item: &FurnitureItem, selected: bool) {
    let position = item.position();
    let size = item.size();
    let center = item.center();
    let transform =
        Transform::from_rotate_at(item.rotation() as f32, center.x as f32, center.y as f32);

    let x = position.x as f32;
    let y = position.y as f32;
    let w = size.width as f32;
    let h = size.height as f32;

    match item.visual() {
        Visual::Bitmap(image) => {
            if let Some(sprite) = to_pixmap(image) {
                pixmap.draw_pixmap(
                    position.x,
                    position.y,
                    sprite.as_ref(),
                    &PixmapPaint::default(),
                    transform,
                    None,
                );
            }
        }
        Visual::Fallback(fallback) => draw_fallback(pixmap, fallback, x, y, w, h, transform),
    }

    if selected {
        if let Some(path) = rounded_rect_path(x - 1.0, y - 1.0, w + 2.0, h + 2.0, 5.0) {
            let mut paint = Paint::default();
            paint.set_color(selection_color());
            paint.anti_alias = true;
            let stroke = Stroke {
                width: SELECTION_WIDTH,
                ..Default::default()
            };
            pixmap.stroke_path(&path, &paint, &stroke, transform, None);
        }
    }
}

fn draw_fallback(
    pixmap: &mut Pixmap,
    fallback: &FallbackVisual,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    transform: Transform,
) {
    let Some(path) = rounded_rect_path(x, y, w, h, fallback.corner_radius) else {
        return;
    };

    let mut paint = Paint::default();
    paint.set_color(to_color(fallback.fill));
    paint.anti_alias = true;
    pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);

    paint.set_color(to_color(fallback.outline));
    let stroke = Stroke {
        width: 1.0,
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, transform, None);
}

fn to_rect(rect: &PixelRect) -> Option<Rect> {
    Rect::from_xywh(
        rect.x as f32,
        rect.y as f32,
        rect.width as f32,
        rect.height as f32,
    )
}

fn grid_path(rect: &PixelRect) -> Option<Path> {
    let mut pb = PathBuilder::new();
    let (left, top) = (rect.x, rect.y);
    let right = rect.x.saturating_add(rect.width);
    let bottom = rect.y.saturating_add(rect.height);

    for gx in (left..=right).step_by(FLOOR_GRID as usize) {
        pb.move_to(gx as f32 + 0.5, top as f32);
        pb.line_to(gx as f32 + 0.5, bottom as f32);
    }
    for gy in (top..=bottom).step_by(FLOOR_GRID as usize) {
        pb.move_to(left as f32, gy as f32 + 0.5);
        pb.line_to(right as f32, gy as f32 + 0.5);
    }
    pb.finish()
}

fn rounded_rect_path(x: f32, y: f32, w: f32, h: f32, radius: f32) -> Option<Path> {
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.quad_to(x + w, y, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.quad_to(x + w, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.quad_to(x, y + h, x, y + h - r);
    pb.line_to(x, y + r);
    pb.quad_to(x, y, x + r, y);
    pb.close();
    pb.finish()
}

/// Copies an RGBA image into a premultiplied pixmap.
fn to_pixmap(image: &RgbaImage) -> Option<Pixmap> {
    let size = IntSize::from_wh(image.width(), image.height())?;
    let data = image
        .pixels()
        .flat_map(|p| {
            let [r, g, b, a] = p.0;
            let premultiply = |c: u8| ((u16::from(c) * u16::from(a) + 127) / 255) as u8;
            [premultiply(r), premultiply(g), premultiply(b), a]
        })
        .collect();
    Pixmap::from_vec(data, size)
}
