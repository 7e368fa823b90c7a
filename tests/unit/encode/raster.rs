use image::{Rgb, RgbImage};

use super::*;

fn checker(size: u32) -> RgbImage {
    RgbImage::from_fn(size, size, |x, y| {
        if (x + y) % 2 == 0 {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    })
}

#[test]
fn png_round_trips_losslessly() {
    let canvas = checker(24);
    let bytes = encode_canvas(&canvas, OutputFormat::Png).unwrap();
    let back = image::load_from_memory(&bytes).unwrap().to_rgb8();
    assert_eq!(back, canvas);
}

#[test]
fn every_format_produces_decodable_output() {
    let canvas = checker(16);
    for format in [OutputFormat::Png, OutputFormat::Bmp, OutputFormat::Jpeg] {
        let bytes = encode_canvas(&canvas, format).unwrap();
        assert!(!bytes.is_empty());
        let back = image::load_from_memory(&bytes).unwrap();
        assert_eq!((back.width(), back.height()), (16, 16), "{format:?}");
    }
}

#[test]
fn format_parses_case_insensitively() {
    assert_eq!("PNG".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
    assert_eq!("jpg".parse::<OutputFormat>().unwrap(), OutputFormat::Jpeg);
    assert_eq!("bmp".parse::<OutputFormat>().unwrap(), OutputFormat::Bmp);

    let err = "webp".parse::<OutputFormat>().unwrap_err();
    assert!(matches!(err, LinocutError::Encode(_)), "{err}");
}

#[test]
fn display_names_parse_back() {
    for format in [OutputFormat::Png, OutputFormat::Bmp, OutputFormat::Jpeg] {
        assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
    }
}
