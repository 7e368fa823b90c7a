//! Pure geometry: spiral paths and polygon tilings.

pub mod spiral;
pub mod tiling;
