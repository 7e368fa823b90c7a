use image::Rgb;
use kurbo::Point;

use super::*;
use crate::foundation::core::Rgb8;

const BG: Rgb8 = Rgb8::WHITE;
const INK: Rgb8 = Rgb8::BLACK;

fn ink_pixels(canvas: &PixelCanvas) -> Vec<(u32, u32)> {
    canvas
        .image()
        .enumerate_pixels()
        .filter(|(_, _, px)| **px == Rgb([INK.r, INK.g, INK.b]))
        .map(|(x, y, _)| (x, y))
        .collect()
}

#[test]
fn new_canvas_is_fully_background() {
    let canvas = PixelCanvas::new(16, BG);
    assert_eq!(canvas.size(), 16);
    assert!(
        canvas
            .image()
            .pixels()
            .all(|px| *px == Rgb([255, 255, 255]))
    );
}

#[test]
fn to_pixel_truncates_normalized_coordinates() {
    let canvas = PixelCanvas::new(300, BG);
    assert_eq!(canvas.to_pixel(Point::new(0.5, 0.5)), (150, 150));
    assert_eq!(canvas.to_pixel(Point::new(0.0, 0.999)), (0, 299));
    // The far edge maps just out of bounds; callers skip those lookups.
    assert_eq!(canvas.to_pixel(Point::new(1.0, 0.0)), (300, 0));
}

#[test]
fn horizontal_segment_of_unit_thickness() {
    let mut canvas = PixelCanvas::new(16, BG);
    canvas.draw_segment((2, 5), (9, 5), 1, INK);
    let drawn = ink_pixels(&canvas);
    assert_eq!(drawn, (2..=9).map(|x| (x, 5)).collect::<Vec<_>>());
}

#[test]
fn thickness_widens_the_stamped_band() {
    let mut canvas = PixelCanvas::new(16, BG);
    canvas.draw_segment((4, 8), (11, 8), 3, INK);
    let drawn = ink_pixels(&canvas);
    // A square brush of side 3 covers one row above and below.
    for x in 4..=11 {
        for y in 7..=9 {
            assert!(drawn.contains(&(x, y)), "missing ({x},{y})");
        }
    }
}

#[test]
fn drawing_clips_at_canvas_bounds() {
    let mut canvas = PixelCanvas::new(8, BG);
    canvas.draw_segment((-3, 4), (12, 4), 3, INK);
    canvas.draw_segment((4, -3), (4, 12), 5, INK);
    // No panic, and the in-bounds band is present.
    assert!(ink_pixels(&canvas).contains(&(0, 4)));
    assert!(ink_pixels(&canvas).contains(&(7, 4)));
    assert!(ink_pixels(&canvas).contains(&(4, 0)));
    assert!(ink_pixels(&canvas).contains(&(4, 7)));
}

#[test]
fn polygon_outline_is_closed() {
    let mut canvas = PixelCanvas::new(32, BG);
    let verts = [
        Point::new(4.0, 4.0),
        Point::new(20.0, 4.0),
        Point::new(20.0, 20.0),
        Point::new(4.0, 20.0),
    ];
    canvas.draw_polygon(&verts, 1, INK);
    let drawn = ink_pixels(&canvas);
    // All four edges present, including the closing left edge.
    assert!(drawn.contains(&(12, 4)));
    assert!(drawn.contains(&(20, 12)));
    assert!(drawn.contains(&(12, 20)));
    assert!(drawn.contains(&(4, 12)));
    // Interior untouched.
    assert!(!drawn.contains(&(12, 12)));
}

#[test]
fn degenerate_polygons_draw_nothing() {
    let mut canvas = PixelCanvas::new(8, BG);
    canvas.draw_polygon(&[], 2, INK);
    canvas.draw_polygon(&[Point::new(3.0, 3.0)], 2, INK);
    assert!(ink_pixels(&canvas).is_empty());
}
