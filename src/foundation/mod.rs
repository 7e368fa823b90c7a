//! Shared primitives: colors, geometry re-exports, and the error taxonomy.

pub mod core;
pub mod error;
