use image::DynamicImage;
use image::imageops::FilterType;

use crate::foundation::error::{LinocutError, LinocutResult};

/// Largest canvas edge length accepted by the reducer.
pub const MAX_CANVAS_SIZE: u32 = 4096;

/// Largest posterization level count accepted by the reducer.
pub const MAX_SHADES: u32 = 256;

/// Square grid of quantized brightness levels derived from a source image.
///
/// Levels are stored vertically flipped relative to raster order: the
/// geometry generators work in a Y-up normalized plane while raster storage
/// grows downward, and flipping once at construction lets the renderer look
/// samples up at raw pixel coordinates.
///
/// Immutable after construction. Normalized samples are `level / max_level`,
/// always in `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrightnessField {
    size: u32,
    max_level: u8,
    levels: Vec<u8>,
}

impl BrightnessField {
    /// Reduce a decoded raster to a `size x size` quantized brightness field.
    ///
    /// The fixed transform order is: resample (Lanczos3, aspect distortion
    /// accepted), luminance, quantize to at most `n_shades` uniform-width
    /// levels, flip vertically, then invert levels if requested.
    #[tracing::instrument(skip(source))]
    pub fn reduce(
        source: &DynamicImage,
        size: u32,
        n_shades: u32,
        invert: bool,
    ) -> LinocutResult<Self> {
        if size == 0 || size > MAX_CANVAS_SIZE {
            return Err(LinocutError::invalid_parameter(format!(
                "canvas size must be in 1..={MAX_CANVAS_SIZE}, got {size}"
            )));
        }
        if !(2..=MAX_SHADES).contains(&n_shades) {
            return Err(LinocutError::invalid_parameter(format!(
                "n_shades must be in 2..={MAX_SHADES}, got {n_shades}"
            )));
        }

        let gray = source
            .resize_exact(size, size, FilterType::Lanczos3)
            .to_luma8();
        let max_level = (n_shades - 1) as u8;

        let mut levels = vec![0u8; (size as usize) * (size as usize)];
        for (x, y, px) in gray.enumerate_pixels() {
            // Uniform-width binning across the 8-bit range; luma < 256
            // guarantees level < n_shades.
            let mut level = (u32::from(px.0[0]) * n_shades / 256) as u8;
            if invert {
                level = max_level - level;
            }
            let row = size - 1 - y;
            levels[(row as usize) * (size as usize) + x as usize] = level;
        }

        Ok(Self {
            size,
            max_level,
            levels,
        })
    }

    /// Edge length of the square field.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Highest representable level (`n_shades - 1`).
    pub fn max_level(&self) -> u8 {
        self.max_level
    }

    /// Raw quantized levels, row-major in the flipped orientation.
    pub fn levels(&self) -> &[u8] {
        &self.levels
    }

    /// Quantized level at pixel coordinates, or `None` out of bounds.
    pub fn level(&self, x: i64, y: i64) -> Option<u8> {
        if x < 0 || y < 0 || x >= i64::from(self.size) || y >= i64::from(self.size) {
            return None;
        }
        Some(self.levels[(y as usize) * (self.size as usize) + x as usize])
    }

    /// Normalized brightness in `[0, 1]` at pixel coordinates.
    pub fn sample(&self, x: i64, y: i64) -> Option<f64> {
        self.level(x, y)
            .map(|l| f64::from(l) / f64::from(self.max_level))
    }

    /// Level-wise inversion (`level -> max_level - level`), exact on integers.
    ///
    /// The dual-spiral effect falls back to this when no secondary image is
    /// supplied.
    pub fn inverted(&self) -> Self {
        Self {
            size: self.size,
            max_level: self.max_level,
            levels: self.levels.iter().map(|l| self.max_level - l).collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/reduce.rs"]
mod tests;
