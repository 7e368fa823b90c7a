use std::f64::consts::PI;

use kurbo::{Point, Vec2};

use crate::foundation::error::{LinocutError, LinocutResult};

/// Hard cap on spiral sample points, independent of canvas size.
pub const MAX_SPIRAL_POINTS: usize = 15_000;

/// Points budgeted per pixel of canvas edge length.
pub const POINT_DENSITY_FACTOR: usize = 30;

/// Spiral point budget for a canvas of edge `size`.
pub fn point_budget(size: u32) -> usize {
    (size as usize * POINT_DENSITY_FACTOR).min(MAX_SPIRAL_POINTS)
}

/// Parameter set for one Archimedean spiral.
///
/// Coordinates live in the normalized `[0, 1]^2` plane; radii are fractions
/// of the canvas edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpiralParams {
    /// Spiral origin.
    pub origin: Point,
    /// Number of points on the whole spiral, equally spaced in angle.
    pub n_points: usize,
    /// Number of turns.
    pub n_turns: f64,
    /// Inner radius.
    pub r0: f64,
    /// Outer radius.
    pub r1: f64,
    /// Offset angle for the start of the spiral, in degrees.
    pub offset_angle_deg: f64,
}

impl SpiralParams {
    /// A spiral centered on the canvas with no angular offset.
    pub fn centered(n_points: usize, n_turns: f64, r0: f64, r1: f64) -> Self {
        Self {
            origin: Point::new(0.5, 0.5),
            n_points,
            n_turns,
            r0,
            r1,
            offset_angle_deg: 0.0,
        }
    }

    fn validate(&self) -> LinocutResult<()> {
        if self.n_points < 2 {
            return Err(LinocutError::invalid_parameter(format!(
                "spiral needs at least 2 points, got {}",
                self.n_points
            )));
        }
        if !(self.n_turns > 0.0) {
            return Err(LinocutError::invalid_parameter(format!(
                "spiral turns must be positive, got {}",
                self.n_turns
            )));
        }
        if self.r0 < 0.0 || self.r1 < self.r0 {
            return Err(LinocutError::invalid_parameter(format!(
                "spiral radii must satisfy 0 <= r0 <= r1, got r0={} r1={}",
                self.r0, self.r1
            )));
        }
        Ok(())
    }
}

/// An ordered, angle-monotonic spiral point sequence.
///
/// Finite and not restartable: regenerate for a new parameter set.
#[derive(Clone, Debug, PartialEq)]
pub struct SpiralPath {
    /// Points in the normalized plane, ordered by increasing angle.
    pub points: Vec<Point>,
}

/// Generate an Archimedean spiral from `params`.
///
/// Samples `n_points` arc parameters uniformly in `[0, 2*pi*n_turns]` —
/// uniform in angle, not in arc length, so point density is higher near the
/// center. That is an accepted visual property, not corrected here.
pub fn spiral_coords(params: &SpiralParams) -> LinocutResult<SpiralPath> {
    params.validate()?;

    let total = 2.0 * PI * params.n_turns;
    let b = (params.r1 - params.r0) / total;
    let offset = params.offset_angle_deg.to_radians();
    let step = total / (params.n_points - 1) as f64;

    let points = (0..params.n_points)
        .map(|i| {
            let l = step * i as f64;
            let r = params.r0 + b * l;
            let theta = l + offset;
            params.origin + Vec2::new(theta.cos(), theta.sin()) * r
        })
        .collect();

    Ok(SpiralPath { points })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/spiral.rs"]
mod tests;
