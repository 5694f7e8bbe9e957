use super::*;
use crate::raster::buffer::PixelLayout;

fn gradient(width: u32, height: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = ((x * 7 + y * 13) % 256) as u8;
            out.extend_from_slice(&[v, v.wrapping_add(20), v / 2 + 40, 200]);
        }
    }
    out
}

#[test]
fn light_pixel_turns_black_dark_pixel_untouched() {
    let mut data = vec![250, 250, 250, 255, 10, 10, 10, 255];
    let mut buf = PixelBuffer::from_rgba8(&mut data, 2, 1).unwrap();
    let stats = convert_to_black_and_white(&mut buf);
    assert_eq!(
        stats,
        ThresholdStats {
            pixels_visited: 2,
            pixels_rewritten: 1
        }
    );
    assert_eq!(data, vec![0, 0, 0, 255, 10, 10, 10, 255]);
}

#[test]
fn channels_equal_to_threshold_stay_unchanged() {
    let mut data = vec![44, 44, 44, 255, 45, 45, 45, 128];
    threshold_rgba8_in_place(&mut data, 2, 1, DEFAULT_THRESHOLD).unwrap();
    assert_eq!(&data[..4], &[44, 44, 44, 255]);
    // Rewritten pixels become fully opaque black regardless of their alpha.
    assert_eq!(&data[4..], &[0, 0, 0, 255]);
}

#[test]
fn every_channel_must_exceed_threshold() {
    let mut data = vec![255, 255, 44, 255, 255, 10, 255, 255, 0, 255, 255, 255];
    threshold_rgba8_in_place(&mut data, 3, 1, DEFAULT_THRESHOLD).unwrap();
    assert_eq!(
        data,
        vec![255, 255, 44, 255, 255, 10, 255, 255, 0, 255, 255, 255]
    );
}

#[test]
fn second_pass_is_a_no_op() {
    let mut once = gradient(17, 9);
    threshold_rgba8_in_place(&mut once, 17, 9, DEFAULT_THRESHOLD).unwrap();
    let mut twice = once.clone();
    let stats = threshold_rgba8_in_place(&mut twice, 17, 9, DEFAULT_THRESHOLD).unwrap();
    assert_eq!(stats.pixels_rewritten, 0);
    assert_eq!(once, twice);
}

#[test]
fn layout_mismatch_fails_and_leaves_bytes_untouched() {
    let mut data = vec![250u8; 4 * 3];
    let before = data.clone();
    let err = threshold_rgba8_in_place(&mut data, 2, 2, DEFAULT_THRESHOLD).unwrap_err();
    assert!(matches!(err, InkmarkError::Conversion(_)));
    assert_eq!(data, before);
}

#[test]
fn stride_padding_is_never_written() {
    let pad = 0xAAu8;
    let mut data = vec![250, 250, 250, 255, pad, pad, pad, pad, 250, 250, 250, 255];
    let layout = PixelLayout {
        width: 1,
        height: 2,
        stride: 8,
        channels: 4,
    };
    let mut buf = PixelBuffer::new(&mut data, layout).unwrap();
    let stats = threshold_in_place(&mut buf, DEFAULT_THRESHOLD);
    assert_eq!(stats.pixels_visited, 2);
    assert_eq!(data, vec![0, 0, 0, 255, pad, pad, pad, pad, 0, 0, 0, 255]);
}

#[test]
fn parallel_matches_serial() {
    let (w, h) = (33u32, 70u32);
    let src = gradient(w, h);

    let mut serial = src.clone();
    let serial_stats = threshold_rgba8_in_place(&mut serial, w, h, DEFAULT_THRESHOLD).unwrap();

    for (threads, rows_per_chunk) in [(None, 0usize), (Some(1), 7), (Some(3), 64)] {
        let mut par = src.clone();
        let mut buf = PixelBuffer::from_rgba8(&mut par, w, h).unwrap();
        let stats =
            threshold_in_place_parallel(&mut buf, DEFAULT_THRESHOLD, threads, rows_per_chunk)
                .unwrap();
        assert_eq!(stats, serial_stats);
        assert_eq!(par, serial);
    }
}

#[test]
fn row_ranges_compose_to_a_full_pass() {
    let (w, h) = (5u32, 9u32);
    let src = gradient(w, h);

    let mut full = src.clone();
    threshold_rgba8_in_place(&mut full, w, h, DEFAULT_THRESHOLD).unwrap();

    let mut chunked = src.clone();
    let mut buf = PixelBuffer::from_rgba8(&mut chunked, w, h).unwrap();
    let mut visited = 0;
    for start in (0..h).step_by(4) {
        let end = (start + 4).min(h);
        visited += threshold_rows(&mut buf, DEFAULT_THRESHOLD, start..end)
            .unwrap()
            .pixels_visited;
    }
    assert_eq!(visited, (w * h) as usize);
    assert_eq!(chunked, full);

    let mut buf = PixelBuffer::from_rgba8(&mut chunked, w, h).unwrap();
    assert!(threshold_rows(&mut buf, DEFAULT_THRESHOLD, 0..h + 1).is_err());
}

#[test]
fn config_defaults_and_validation() {
    let cfg: ThresholdConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, ThresholdConfig::default());
    assert_eq!(cfg.threshold, 44);
    assert_eq!(cfg.rows_per_chunk, 64);

    let bad = ThresholdConfig {
        threads: Some(0),
        parallel: true,
        ..ThresholdConfig::default()
    };
    let mut data = vec![0u8; 4];
    let mut buf = PixelBuffer::from_rgba8(&mut data, 1, 1).unwrap();
    assert!(threshold_in_place_with(&mut buf, &bad).is_err());

    let custom = ThresholdConfig {
        threshold: 200,
        parallel: true,
        threads: Some(2),
        rows_per_chunk: 1,
    };
    let mut data = vec![150, 150, 150, 255, 210, 210, 210, 255];
    let mut buf = PixelBuffer::from_rgba8(&mut data, 1, 2).unwrap();
    let stats = threshold_in_place_with(&mut buf, &custom).unwrap();
    assert_eq!(stats.pixels_rewritten, 1);
    assert_eq!(data, vec![150, 150, 150, 255, 0, 0, 0, 255]);
}
