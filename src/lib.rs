//! Linocut re-expresses a raster photograph as stylized line art.
//!
//! An image becomes either a single traced Archimedean spiral or a tiled
//! lattice of polygons, with line thickness and/or color modulated by the
//! local brightness of the source.
//!
//! # Pipeline overview
//!
//! 1. **Reduce**: `DynamicImage -> BrightnessField` (square, quantized, flipped)
//! 2. **Generate**: spiral point sequence or polygon tiling (pure geometry)
//! 3. **Render**: walk the path/tiling, sample brightness, map to weight, draw
//! 4. **Encode**: serialize the finished canvas into a portable byte buffer
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs always produce byte-identical output.
//! - **No shared state**: every stage is a pure function of its inputs, so
//!   arbitrarily many renders may run concurrently without coordination.
//! - **Bounded cost**: spiral point and tile counts are hard-capped.
//!
//! The one-shot entry points are [`render_to_bytes`] (encoded bytes in,
//! encoded bytes out) and [`render_image`] (decoded raster in, canvas out).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod field;
mod foundation;
mod geometry;
mod render;
mod style;

pub use encode::raster::{OutputFormat, encode_canvas};
pub use field::reduce::{BrightnessField, MAX_CANVAS_SIZE, MAX_SHADES};
pub use foundation::core::{Point, Rgb8, Vec2};
pub use foundation::error::{LinocutError, LinocutResult};
pub use geometry::spiral::{
    MAX_SPIRAL_POINTS, POINT_DENSITY_FACTOR, SpiralParams, SpiralPath, point_budget, spiral_coords,
};
pub use geometry::tiling::{ShapeKind, Tile, tiles};
pub use render::canvas::PixelCanvas;
pub use render::pipeline::{decode_source, render_image, render_to_bytes};
pub use render::weight::{line_thickness, ramp_color};
pub use style::model::{Effect, RenderOptions, WeightMode};
