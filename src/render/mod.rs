//! Rendering: weight mapping, canvas drawing, effect walkers, and the
//! one-shot pipeline.

pub mod canvas;
pub mod effect;
pub mod pipeline;
pub mod weight;
