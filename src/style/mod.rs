//! Render configuration: effect selection and style options.

pub mod model;
