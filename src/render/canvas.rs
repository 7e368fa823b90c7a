use image::{Rgb, RgbImage};
use kurbo::Point;

use crate::foundation::core::Rgb8;

/// Square RGB canvas with integer line drawing.
///
/// Drawing is plain overdraw: later strokes replace earlier pixels, no alpha
/// blending. All drawing is clipped at the canvas bounds.
#[derive(Clone, Debug)]
pub struct PixelCanvas {
    size: u32,
    image: RgbImage,
}

impl PixelCanvas {
    /// A `size x size` canvas filled with `background`.
    pub fn new(size: u32, background: Rgb8) -> Self {
        Self {
            size,
            image: RgbImage::from_pixel(size, size, Rgb([background.r, background.g, background.b])),
        }
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Borrow the underlying raster.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Consume the canvas, yielding the finished raster.
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Map a normalized-plane point to pixel coordinates (truncating).
    pub fn to_pixel(&self, p: Point) -> (i64, i64) {
        (
            (p.x * f64::from(self.size)) as i64,
            (p.y * f64::from(self.size)) as i64,
        )
    }

    /// Draw a straight segment of the given thickness between pixel
    /// coordinates.
    ///
    /// Bresenham traversal with a square brush of side `thickness` stamped at
    /// every visited pixel.
    pub fn draw_segment(&mut self, a: (i64, i64), b: (i64, i64), thickness: u32, color: Rgb8) {
        let px = Rgb([color.r, color.g, color.b]);
        let (mut x0, mut y0) = a;
        let (x1, y1) = b;

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.stamp(x0, y0, thickness, px);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Draw a closed polygon outline through pixel-space vertices.
    pub fn draw_polygon(&mut self, vertices: &[Point], thickness: u32, color: Rgb8) {
        if vertices.len() < 2 {
            return;
        }
        for i in 0..vertices.len() {
            let a = vertices[i];
            let b = vertices[(i + 1) % vertices.len()];
            self.draw_segment(
                (a.x as i64, a.y as i64),
                (b.x as i64, b.y as i64),
                thickness,
                color,
            );
        }
    }

    fn stamp(&mut self, x: i64, y: i64, thickness: u32, px: Rgb<u8>) {
        let t = i64::from(thickness.max(1));
        for dy in -((t - 1) / 2)..=(t / 2) {
            for dx in -((t - 1) / 2)..=(t / 2) {
                let (sx, sy) = (x + dx, y + dy);
                if sx >= 0 && sy >= 0 && sx < i64::from(self.size) && sy < i64::from(self.size) {
                    self.image.put_pixel(sx as u32, sy as u32, px);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
