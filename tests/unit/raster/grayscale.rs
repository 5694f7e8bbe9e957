use super::*;

#[test]
fn grays_are_fixed_points_and_alpha_survives() {
    let mut data = vec![100, 100, 100, 180, 255, 0, 0, 255, 0, 0, 255, 64];
    let mut buf = PixelBuffer::from_rgba8(&mut data, 3, 1).unwrap();
    grayscale_in_place(&mut buf);
    assert_eq!(&data[..4], &[100, 100, 100, 180]);
    assert_eq!(&data[4..8], &[77, 77, 77, 255]);
    assert_eq!(&data[8..], &[29, 29, 29, 64]);
}

#[test]
fn grayscale_output_is_never_lighter_than_its_brightest_channel() {
    let mut data = vec![10, 200, 30, 255];
    let mut buf = PixelBuffer::from_rgba8(&mut data, 1, 1).unwrap();
    grayscale_in_place(&mut buf);
    assert!(data[0] <= 200 && data[0] >= 10);
    assert_eq!(data[0], data[1]);
    assert_eq!(data[1], data[2]);
}
