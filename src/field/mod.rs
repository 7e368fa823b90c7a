//! Grayscale reduction: source raster to quantized brightness field.

pub mod reduce;
