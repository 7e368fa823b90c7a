use super::*;

#[test]
fn constructors_and_constants() {
    assert_eq!(Rgb8::new(1, 2, 3), Rgb8 { r: 1, g: 2, b: 3 });
    assert_eq!(Rgb8::gray(7), Rgb8::new(7, 7, 7));
    assert_eq!(Rgb8::BLACK, Rgb8::gray(0));
    assert_eq!(Rgb8::WHITE, Rgb8::gray(255));
}

#[test]
fn serializes_as_triple() {
    let c = Rgb8::new(178, 34, 34);
    assert_eq!(serde_json::to_string(&c).unwrap(), "[178,34,34]");

    let back: Rgb8 = serde_json::from_str("[178,34,34]").unwrap();
    assert_eq!(back, c);
}
