use kurbo::{Point, Vec2};

use crate::foundation::error::{LinocutError, LinocutResult};

/// The five lattice families.
///
/// Square, triangle, and diamond partition the canvas exactly. Hexagon and
/// pentagon are placed on a square raster stepped at 1.5x the nominal radius,
/// which is a visual approximation: adjacent shapes may overlap or leave
/// gaps. The stepping rule is authoritative; it is not a defect to fix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    /// Axis-aligned square cells.
    Square,
    /// Regular hexagons, vertices at 60 degree increments.
    Hexagon,
    /// Triangles: cell top edge plus a bottom-center apex.
    Triangle,
    /// Diamonds: midpoints of the four cell edges.
    Diamond,
    /// Regular pentagons, apex pointing up.
    Pentagon,
}

impl ShapeKind {
    /// Whether this family partitions the canvas without gaps or overlaps.
    pub fn tessellates_exactly(self) -> bool {
        matches!(self, Self::Square | Self::Triangle | Self::Diamond)
    }

    /// Vertices for one lattice cell, in pixel space.
    ///
    /// Exact families interpret `anchor` as the cell's top-left corner and
    /// `extent` as the cell edge; hexagon and pentagon interpret `anchor` as
    /// the shape center and `extent` as the nominal radius.
    pub fn vertices(self, anchor: Point, extent: f64) -> Vec<Point> {
        let (x, y, c) = (anchor.x, anchor.y, extent);
        match self {
            Self::Square => vec![
                Point::new(x, y),
                Point::new(x + c, y),
                Point::new(x + c, y + c),
                Point::new(x, y + c),
            ],
            Self::Triangle => vec![
                Point::new(x, y),
                Point::new(x + c, y),
                Point::new(x + c / 2.0, y + c),
            ],
            Self::Diamond => vec![
                Point::new(x + c / 2.0, y),
                Point::new(x + c, y + c / 2.0),
                Point::new(x + c / 2.0, y + c),
                Point::new(x, y + c / 2.0),
            ],
            Self::Hexagon => regular_polygon(anchor, c, 6, 0.0),
            // -90 degrees puts the first vertex straight above the center
            // (pixel space is y-down), so the apex points up.
            Self::Pentagon => regular_polygon(anchor, c, 5, -90.0),
        }
    }
}

fn regular_polygon(center: Point, radius: f64, sides: u32, start_deg: f64) -> Vec<Point> {
    (0..sides)
        .map(|k| {
            let theta = (start_deg + f64::from(k) * 360.0 / f64::from(sides)).to_radians();
            center + Vec2::new(theta.cos(), theta.sin()) * radius
        })
        .collect()
}

/// One polygon cell of the lattice plus its brightness sample coordinate.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    /// Ordered vertex list in pixel space.
    pub vertices: Vec<Point>,
    /// Representative pixel for the single brightness lookup, clamped to
    /// canvas bounds. No area averaging.
    pub sample: (u32, u32),
}

/// Generate the tiling of `shape` over a `size x size` canvas.
///
/// `grid_size` is the density knob for every family: exact families produce
/// `grid_size^2` cells of edge `size / grid_size`; hexagon and pentagon use
/// `size / grid_size` as the nominal radius.
pub fn tiles(shape: ShapeKind, grid_size: u32, size: u32) -> LinocutResult<Vec<Tile>> {
    if grid_size == 0 || grid_size > size {
        return Err(LinocutError::invalid_parameter(format!(
            "grid_size must be in 1..=size ({size}), got {grid_size}"
        )));
    }

    let cell = f64::from(size) / f64::from(grid_size);
    let clamp_px = |v: f64| (v.max(0.0) as u32).min(size - 1);
    let mut out = Vec::new();

    if shape.tessellates_exactly() {
        for row in 0..grid_size {
            for col in 0..grid_size {
                let origin = Point::new(f64::from(col) * cell, f64::from(row) * cell);
                out.push(Tile {
                    vertices: shape.vertices(origin, cell),
                    sample: (clamp_px(origin.x), clamp_px(origin.y)),
                });
            }
        }
    } else {
        let radius = cell;
        let step = 1.5 * radius;
        let mut cy = radius;
        while cy < f64::from(size) {
            let mut cx = radius;
            while cx < f64::from(size) {
                let center = Point::new(cx, cy);
                out.push(Tile {
                    vertices: shape.vertices(center, radius),
                    // Top-left of the shape's bounding cell.
                    sample: (clamp_px(cx - radius), clamp_px(cy - radius)),
                });
                cx += step;
            }
            cy += step;
        }
    }

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/tiling.rs"]
mod tests;
