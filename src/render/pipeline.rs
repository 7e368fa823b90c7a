use image::{DynamicImage, RgbImage};

use crate::{
    encode::raster::{OutputFormat, encode_canvas},
    field::reduce::BrightnessField,
    foundation::error::{LinocutError, LinocutResult},
    geometry::tiling::ShapeKind,
    render::canvas::PixelCanvas,
    render::effect,
    style::model::{Effect, RenderOptions},
};

/// Decode encoded image bytes into a raster.
pub fn decode_source(bytes: &[u8]) -> LinocutResult<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| LinocutError::decode(e.to_string()))
}

/// Run the full pipeline: decode, reduce, render, encode.
///
/// `secondary_bytes` is only consulted by the dual-spiral effect; when absent
/// there, the second field is the inverted primary field.
#[tracing::instrument(skip_all, fields(effect = ?opts.effect, size = opts.size, format = ?format))]
pub fn render_to_bytes(
    source_bytes: &[u8],
    secondary_bytes: Option<&[u8]>,
    opts: &RenderOptions,
    format: OutputFormat,
) -> LinocutResult<Vec<u8>> {
    let source = decode_source(source_bytes)?;
    let secondary = secondary_bytes.map(decode_source).transpose()?;
    let canvas = render_image(&source, secondary.as_ref(), opts)?;
    encode_canvas(&canvas, format)
}

/// Reduce + generate + render, for callers that already hold decoded rasters.
///
/// One synchronous pass with no internal suspension points; every render
/// invocation builds its own state, so concurrent calls need no coordination.
#[tracing::instrument(skip_all, fields(effect = ?opts.effect, size = opts.size))]
pub fn render_image(
    source: &DynamicImage,
    secondary: Option<&DynamicImage>,
    opts: &RenderOptions,
) -> LinocutResult<RgbImage> {
    opts.validate()?;
    let field = BrightnessField::reduce(source, opts.size, opts.n_shades, opts.invert)?;
    let mut canvas = PixelCanvas::new(opts.size, opts.background_color);

    match opts.effect {
        Effect::Spiral => effect::draw_spiral(&mut canvas, &field, opts)?,
        Effect::SquareGrid => effect::draw_grid(&mut canvas, &field, ShapeKind::Square, opts)?,
        Effect::HexagonGrid => effect::draw_grid(&mut canvas, &field, ShapeKind::Hexagon, opts)?,
        Effect::TriangleGrid => effect::draw_grid(&mut canvas, &field, ShapeKind::Triangle, opts)?,
        Effect::DiamondGrid => effect::draw_grid(&mut canvas, &field, ShapeKind::Diamond, opts)?,
        Effect::PentagonGrid => effect::draw_grid(&mut canvas, &field, ShapeKind::Pentagon, opts)?,
        Effect::DualSpiral => {
            let second = match secondary {
                Some(img) => BrightnessField::reduce(img, opts.size, opts.n_shades, opts.invert)?,
                None => field.inverted(),
            };
            effect::draw_dual_spiral(&mut canvas, &field, &second, opts)?;
        }
    }

    Ok(canvas.into_image())
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
