use crate::{
    field::reduce::BrightnessField,
    foundation::core::Rgb8,
    foundation::error::LinocutResult,
    geometry::spiral::{SpiralParams, point_budget, spiral_coords},
    geometry::tiling::{ShapeKind, tiles},
    render::canvas::PixelCanvas,
    render::weight,
    style::model::{RenderOptions, WeightMode},
};

/// How a spiral walk turns a brightness sample into a stroke.
#[derive(Clone, Copy, Debug)]
enum Stroke {
    /// Fixed width, grayscale color ramped from brightness.
    ColorRamp { width: u32 },
    /// Fixed color, thickness mapped from brightness.
    Thickness { thin: u32, thick: u32, color: Rgb8 },
}

/// Render the single-spiral effect onto `canvas`.
pub(crate) fn draw_spiral(
    canvas: &mut PixelCanvas,
    field: &BrightnessField,
    opts: &RenderOptions,
) -> LinocutResult<()> {
    let params = SpiralParams::centered(point_budget(opts.size), opts.spiral_turns, 0.0, 0.5);
    let stroke = match opts.weight_mode {
        WeightMode::ColorRamp => Stroke::ColorRamp {
            width: opts.spiral_thickness.max(1),
        },
        WeightMode::Thickness => {
            let (thin, thick) = opts.thickness_bounds();
            Stroke::Thickness {
                thin,
                thick,
                color: opts.line_color,
            }
        }
    };
    walk_spiral(canvas, field, &params, stroke)
}

/// Render the two-spiral composite: the primary spiral samples `primary`,
/// then a narrower-banded spiral samples `secondary` over the same center.
/// Plain overdraw, no blending.
pub(crate) fn draw_dual_spiral(
    canvas: &mut PixelCanvas,
    primary: &BrightnessField,
    secondary: &BrightnessField,
    opts: &RenderOptions,
) -> LinocutResult<()> {
    let budget = point_budget(opts.size);
    let (thin, thick) = opts.thickness_bounds();

    let outer = SpiralParams::centered(budget, opts.spiral_turns, 0.0, 0.5);
    walk_spiral(
        canvas,
        primary,
        &outer,
        Stroke::Thickness {
            thin,
            thick,
            color: opts.line_color,
        },
    )?;

    let inner = SpiralParams::centered(budget, opts.spiral_turns, 0.05, 0.45);
    walk_spiral(
        canvas,
        secondary,
        &inner,
        Stroke::Thickness {
            thin,
            thick,
            color: opts.secondary_color,
        },
    )
}

/// Render a lattice effect: one brightness lookup per tile at its
/// representative pixel, outline thickness from the weight mapper.
pub(crate) fn draw_grid(
    canvas: &mut PixelCanvas,
    field: &BrightnessField,
    shape: ShapeKind,
    opts: &RenderOptions,
) -> LinocutResult<()> {
    let (thin, thick) = opts.thickness_bounds();
    for tile in tiles(shape, opts.grid_size, opts.size)? {
        let (sx, sy) = tile.sample;
        if let Some(brightness) = field.sample(i64::from(sx), i64::from(sy)) {
            let t = weight::line_thickness(brightness, thin, thick);
            canvas.draw_polygon(&tile.vertices, t, opts.line_color);
        }
    }
    Ok(())
}

fn walk_spiral(
    canvas: &mut PixelCanvas,
    field: &BrightnessField,
    params: &SpiralParams,
    stroke: Stroke,
) -> LinocutResult<()> {
    let path = spiral_coords(params)?;
    for pair in path.points.windows(2) {
        let a = canvas.to_pixel(pair[0]);
        let b = canvas.to_pixel(pair[1]);
        // Segments whose lookup pixel falls outside the canvas are skipped
        // entirely, matching the lookup-at-leading-point rule.
        let Some(brightness) = field.sample(a.0, a.1) else {
            continue;
        };
        match stroke {
            Stroke::ColorRamp { width } => {
                canvas.draw_segment(a, b, width, weight::ramp_color(brightness));
            }
            Stroke::Thickness { thin, thick, color } => {
                canvas.draw_segment(a, b, weight::line_thickness(brightness, thin, thick), color);
            }
        }
    }
    Ok(())
}
