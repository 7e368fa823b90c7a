//! Serialization of rendered canvases into portable byte buffers.

pub mod raster;
