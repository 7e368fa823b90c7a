use crate::{
    field::reduce::{MAX_CANVAS_SIZE, MAX_SHADES},
    foundation::core::Rgb8,
    foundation::error::{LinocutError, LinocutResult},
};

/// The available effects.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Effect {
    /// Single centered spiral.
    #[default]
    Spiral,
    /// Square lattice outlines.
    SquareGrid,
    /// Hexagon lattice outlines (approximate tessellation).
    HexagonGrid,
    /// Triangle lattice outlines.
    TriangleGrid,
    /// Diamond lattice outlines.
    DiamondGrid,
    /// Pentagon lattice outlines (approximate tessellation).
    PentagonGrid,
    /// Two concentric spirals compositing two brightness fields.
    DualSpiral,
}

impl Effect {
    /// Whether this effect walks a lattice rather than a spiral path.
    pub fn is_grid(self) -> bool {
        matches!(
            self,
            Self::SquareGrid
                | Self::HexagonGrid
                | Self::TriangleGrid
                | Self::DiamondGrid
                | Self::PentagonGrid
        )
    }
}

impl std::str::FromStr for Effect {
    type Err = LinocutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spiral" => Ok(Self::Spiral),
            "square-grid" => Ok(Self::SquareGrid),
            "hexagon-grid" => Ok(Self::HexagonGrid),
            "triangle-grid" => Ok(Self::TriangleGrid),
            "diamond-grid" => Ok(Self::DiamondGrid),
            "pentagon-grid" => Ok(Self::PentagonGrid),
            "dual-spiral" => Ok(Self::DualSpiral),
            other => Err(LinocutError::invalid_parameter(format!(
                "unknown effect '{other}'"
            ))),
        }
    }
}

/// How spiral strokes derive their visual weight from brightness.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum WeightMode {
    /// Fixed stroke width, grayscale color ramped from brightness.
    #[default]
    ColorRamp,
    /// Fixed color, stroke thickness mapped from brightness.
    Thickness,
}

/// Complete configuration for one render invocation.
///
/// Every field has a default, so a caller (or an options JSON file) only
/// needs to name what it changes. The core holds no multi-turn state: the
/// hosting layer assembles a full `RenderOptions` plus source image before
/// calling in.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Output canvas edge length in pixels.
    pub size: u32,
    /// Posterization level count.
    pub n_shades: u32,
    /// Flip the brightness mapping.
    pub invert: bool,
    /// Which effect to render.
    pub effect: Effect,
    /// Stroke weight for spiral effects; also the default `thick` bound.
    pub spiral_thickness: u32,
    /// Number of spiral revolutions.
    pub spiral_turns: f64,
    /// Lattice density for grid effects.
    pub grid_size: u32,
    /// Line color (primary spiral color in dual mode).
    pub line_color: Rgb8,
    /// Second-spiral color in dual mode.
    pub secondary_color: Rgb8,
    /// Canvas background color.
    pub background_color: Rgb8,
    /// Weight mode for the single-spiral effect.
    pub weight_mode: WeightMode,
    /// Lower thickness bound for thickness-mapped strokes.
    pub thin: u32,
    /// Upper thickness bound; falls back to `spiral_thickness` when unset.
    pub thick: Option<u32>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: 300,
            n_shades: 16,
            invert: false,
            effect: Effect::Spiral,
            spiral_thickness: 2,
            spiral_turns: 50.0,
            grid_size: 50,
            line_color: Rgb8::BLACK,
            secondary_color: Rgb8::FIREBRICK,
            background_color: Rgb8::WHITE,
            weight_mode: WeightMode::ColorRamp,
            thin: 1,
            thick: None,
        }
    }
}

impl RenderOptions {
    /// Effective `(thin, thick)` bounds for thickness-mapped strokes.
    pub fn thickness_bounds(&self) -> (u32, u32) {
        let thick = self.thick.unwrap_or(self.spiral_thickness).max(1);
        (self.thin.clamp(1, thick), thick)
    }

    /// Check every field against its accepted range.
    pub fn validate(&self) -> LinocutResult<()> {
        if self.size == 0 || self.size > MAX_CANVAS_SIZE {
            return Err(LinocutError::invalid_parameter(format!(
                "size must be in 1..={MAX_CANVAS_SIZE}, got {}",
                self.size
            )));
        }
        if !(2..=MAX_SHADES).contains(&self.n_shades) {
            return Err(LinocutError::invalid_parameter(format!(
                "n_shades must be in 2..={MAX_SHADES}, got {}",
                self.n_shades
            )));
        }
        if self.effect.is_grid() {
            if self.grid_size == 0 || self.grid_size > self.size {
                return Err(LinocutError::invalid_parameter(format!(
                    "grid_size must be in 1..=size ({}), got {}",
                    self.size, self.grid_size
                )));
            }
        } else {
            if !(self.spiral_turns > 0.0) {
                return Err(LinocutError::invalid_parameter(format!(
                    "spiral_turns must be positive, got {}",
                    self.spiral_turns
                )));
            }
            if self.spiral_thickness == 0 {
                return Err(LinocutError::invalid_parameter(
                    "spiral_thickness must be at least 1",
                ));
            }
        }
        if let Some(thick) = self.thick {
            if thick == 0 {
                return Err(LinocutError::invalid_parameter("thick must be at least 1"));
            }
            if self.thin > thick {
                return Err(LinocutError::invalid_parameter(format!(
                    "thin ({}) must not exceed thick ({thick})",
                    self.thin
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/model.rs"]
mod tests;
