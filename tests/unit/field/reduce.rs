use std::collections::BTreeSet;

use image::{DynamicImage, GrayImage};

use super::*;

fn gradient_source(w: u32, h: u32) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(w, h, |x, _| image::Luma([x as u8])))
}

fn uniform_source(w: u32, h: u32, luma: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(w, h, image::Luma([luma])))
}

#[test]
fn field_has_size_squared_entries_in_range() {
    let field = BrightnessField::reduce(&gradient_source(256, 256), 64, 16, false).unwrap();
    assert_eq!(field.size(), 64);
    assert_eq!(field.levels().len(), 64 * 64);
    assert!(field.levels().iter().all(|&l| l <= field.max_level()));
    for &l in field.levels() {
        let b = f64::from(l) / f64::from(field.max_level());
        assert!((0.0..=1.0).contains(&b));
    }
}

#[test]
fn quantization_bound_holds_for_all_shade_counts() {
    for n_shades in [2u32, 3, 4, 16, 64, 256] {
        let field =
            BrightnessField::reduce(&gradient_source(256, 256), 64, n_shades, false).unwrap();
        let distinct: BTreeSet<u8> = field.levels().iter().copied().collect();
        assert!(
            distinct.len() <= n_shades as usize,
            "{} distinct levels for n_shades={n_shades}",
            distinct.len()
        );
        assert_eq!(field.max_level(), (n_shades - 1) as u8);
    }
}

#[test]
fn uniform_source_reduces_to_single_level() {
    let field = BrightnessField::reduce(&uniform_source(300, 300, 128), 300, 16, false).unwrap();
    let distinct: BTreeSet<u8> = field.levels().iter().copied().collect();
    assert_eq!(distinct.len(), 1);
    let b = field.sample(150, 150).unwrap();
    assert!((0.4..=0.6).contains(&b), "mid gray sample was {b}");
}

#[test]
fn storage_is_flipped_vertically() {
    // Top half white, bottom half black in raster orientation.
    let src = DynamicImage::ImageLuma8(GrayImage::from_fn(64, 64, |_, y| {
        image::Luma([if y < 32 { 255 } else { 0 }])
    }));
    let field = BrightnessField::reduce(&src, 64, 2, false).unwrap();
    // After the flip the source's top row sits at the highest stored row.
    assert_eq!(field.sample(10, 63), Some(1.0));
    assert_eq!(field.sample(10, 0), Some(0.0));
}

#[test]
fn invert_flag_mirrors_levels_exactly() {
    let plain = BrightnessField::reduce(&gradient_source(128, 128), 32, 16, false).unwrap();
    let inverted = BrightnessField::reduce(&gradient_source(128, 128), 32, 16, true).unwrap();
    let max = plain.max_level();
    for (a, b) in plain.levels().iter().zip(inverted.levels()) {
        assert_eq!(max - a, *b);
    }
}

#[test]
fn inverted_matches_level_wise_complement() {
    let field = BrightnessField::reduce(&gradient_source(128, 128), 32, 16, false).unwrap();
    let second = field.inverted();
    let max = field.max_level();
    for (a, b) in field.levels().iter().zip(second.levels()) {
        assert_eq!(*b, max - a);
    }
    assert_eq!(second.inverted(), field);
}

#[test]
fn sample_is_none_out_of_bounds() {
    let field = BrightnessField::reduce(&uniform_source(16, 16, 10), 16, 4, false).unwrap();
    assert!(field.sample(-1, 0).is_none());
    assert!(field.sample(0, -1).is_none());
    assert!(field.sample(16, 0).is_none());
    assert!(field.sample(0, 16).is_none());
    assert!(field.sample(15, 15).is_some());
}

#[test]
fn rejects_out_of_range_parameters() {
    let src = uniform_source(8, 8, 0);
    for (size, n_shades) in [(0u32, 16u32), (MAX_CANVAS_SIZE + 1, 16), (64, 1), (64, 257)] {
        let err = BrightnessField::reduce(&src, size, n_shades, false).unwrap_err();
        assert!(matches!(err, LinocutError::InvalidParameter(_)), "{err}");
    }
}
