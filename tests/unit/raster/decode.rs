use super::*;

fn png_bytes(width: u32, height: u32, rgba: Vec<u8>) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(width, height, rgba).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_dimensions_and_premul() {
    let decoded = decode_image(&png_bytes(1, 1, vec![100, 50, 200, 128])).unwrap();
    assert_eq!(decoded.width, 1);
    assert_eq!(decoded.height, 1);
    assert_eq!(
        decoded.rgba8_premul,
        vec![
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_rejects_garbage() {
    let err = decode_image(b"not an image").unwrap_err();
    assert!(err.to_string().contains("decode image"));
}

#[test]
fn opaque_pixels_survive_encode_decode() {
    let src = vec![250, 250, 250, 255, 10, 20, 30, 255];
    let decoded = decode_image(&png_bytes(2, 1, src.clone())).unwrap();
    let png = encode_png(&decoded).unwrap();
    let back = decode_image(&png).unwrap();
    assert_eq!(back.rgba8_premul, src);
}

#[test]
fn encode_rejects_mismatched_dimensions() {
    let img = DecodedImage {
        width: 2,
        height: 2,
        rgba8_premul: vec![0; 4],
    };
    assert!(encode_png(&img).is_err());
}

#[test]
fn pixel_buffer_borrows_decoded_pixels() {
    let mut decoded = decode_image(&png_bytes(2, 1, vec![250, 250, 250, 255, 1, 2, 3, 255])).unwrap();
    let mut buf = decoded.pixel_buffer().unwrap();
    crate::raster::threshold::convert_to_black_and_white(&mut buf);
    assert_eq!(decoded.rgba8_premul, vec![0, 0, 0, 255, 1, 2, 3, 255]);
}
