use crate::foundation::core::Rgb8;

/// Map a normalized brightness sample to a stroke thickness in pixels.
///
/// `clamp(round(thin + (thick - thin) * (1 - brightness)), 1, thick)`:
/// darker samples never yield thinner lines than lighter ones, and the
/// result is always in `[1, max(thick, 1)]`.
pub fn line_thickness(brightness: f64, thin: u32, thick: u32) -> u32 {
    let thick = thick.max(1);
    let thin = thin.clamp(1, thick);
    let b = brightness.clamp(0.0, 1.0);
    let w = f64::from(thin) + f64::from(thick - thin) * (1.0 - b);
    (w.round() as u32).clamp(1, thick)
}

/// Map a normalized brightness sample to a grayscale line color.
///
/// Darker source pixels yield darker lines. Used by color-ramp styles in
/// place of thickness modulation, never together with it.
pub fn ramp_color(brightness: f64) -> Rgb8 {
    Rgb8::gray((255.0 * brightness.clamp(0.0, 1.0)).round() as u8)
}

#[cfg(test)]
#[path = "../../tests/unit/render/weight.rs"]
mod tests;
