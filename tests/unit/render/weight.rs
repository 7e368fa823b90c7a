use super::*;

#[test]
fn thickness_interpolates_between_bounds() {
    assert_eq!(line_thickness(0.0, 1, 4), 4);
    assert_eq!(line_thickness(1.0, 1, 4), 1);
    assert_eq!(line_thickness(0.5, 1, 3), 2);
}

#[test]
fn thickness_is_clamped_to_valid_range() {
    // Degenerate bounds still yield a drawable stroke.
    assert_eq!(line_thickness(0.5, 0, 0), 1);
    assert_eq!(line_thickness(0.0, 0, 3), 3);
    assert_eq!(line_thickness(1.0, 0, 3), 1);
    // Out-of-range brightness is clamped, not extrapolated.
    assert_eq!(line_thickness(-2.0, 1, 4), 4);
    assert_eq!(line_thickness(2.0, 1, 4), 1);
}

#[test]
fn thickness_never_increases_with_brightness() {
    for (thin, thick) in [(1u32, 2u32), (1, 4), (2, 9), (3, 3)] {
        let mut prev = u32::MAX;
        for step in 0..=100 {
            let b = f64::from(step) / 100.0;
            let t = line_thickness(b, thin, thick);
            assert!(t <= prev, "thickness rose at b={b} for ({thin},{thick})");
            assert!((1..=thick).contains(&t));
            prev = t;
        }
    }
}

#[test]
fn uniform_brightness_yields_a_single_thickness() {
    let b = 8.0 / 15.0; // mid gray quantized to 16 shades
    let first = line_thickness(b, 1, 2);
    for _ in 0..10 {
        assert_eq!(line_thickness(b, 1, 2), first);
    }
}

#[test]
fn ramp_color_is_grayscale_from_brightness() {
    assert_eq!(ramp_color(0.0), Rgb8::BLACK);
    assert_eq!(ramp_color(1.0), Rgb8::WHITE);
    assert_eq!(ramp_color(0.5), Rgb8::gray(128));
    assert_eq!(ramp_color(-1.0), Rgb8::BLACK);
    assert_eq!(ramp_color(2.0), Rgb8::WHITE);
}
