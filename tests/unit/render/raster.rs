use super::*;

const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="6" viewBox="0 0 8 6">
<rect x="0" y="0" width="8" height="6" fill="#646464"/>
<rect x="0" y="0" width="2" height="2" fill="#ff0000"/>
</svg>"##;

#[test]
fn rasterizes_to_document_size() {
    let frame = Rasterizer::without_fonts().rasterize(SQUARE).unwrap();
    assert_eq!(frame.width, 8);
    assert_eq!(frame.height, 6);
    assert_eq!(frame.data.len(), 8 * 6 * 4);
}

#[test]
fn pixels_are_straight_alpha() {
    let frame = Rasterizer::without_fonts().rasterize(SQUARE).unwrap();
    assert_eq!(frame.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(7, 5), Some([100, 100, 100, 255]));
    assert_eq!(frame.pixel(8, 0), None);
}

#[test]
fn invalid_markup_is_an_error() {
    assert!(Rasterizer::without_fonts().rasterize("<svg").is_err());
}

#[test]
fn save_png_writes_file() {
    let dir = std::path::PathBuf::from("target").join("unit_raster");
    let path = dir.join("square.png");
    let _ = std::fs::remove_file(&path);
    let frame = Rasterizer::without_fonts().rasterize(SQUARE).unwrap();
    frame.save_png(&path).unwrap();
    let img = image::open(&path).unwrap();
    assert_eq!(img.width(), 8);
    assert_eq!(img.height(), 6);
}
