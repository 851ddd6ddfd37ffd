mod common;

use halo_core::bloom::downsample::{downsample, reduced_dim};
use halo_core::frame::LinearFrame;

use common::uniform_frame;

/// Frame whose pixel (x, y) has channel values (v, v/2, v/4) with
/// v = y * width + x, handy for spotting misplaced samples.
fn ramp_frame(width: usize, height: usize) -> LinearFrame {
    let mut frame = LinearFrame::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = (y * width + x) as f64;
            frame.set_pixel(x, y, [v, v / 2.0, v / 4.0]);
        }
    }
    frame
}

#[test]
fn test_reduced_dim_rounds_up() {
    assert_eq!(reduced_dim(8, 4), 2);
    assert_eq!(reduced_dim(9, 4), 3);
    assert_eq!(reduced_dim(1, 4), 1);
    assert_eq!(reduced_dim(3, 1), 3);
}

#[test]
fn test_downsample_ratio_one_is_identity() {
    let frame = ramp_frame(4, 3);
    let reduced = downsample(&frame.as_view(), 1);

    assert_eq!(reduced.width(), 4);
    assert_eq!(reduced.height(), 3);
    for y in 0..3 {
        for x in 0..4 {
            let expected = frame.pixel(x, y);
            for c in 0..3 {
                let got = reduced.data[[y, x, c]];
                assert!(
                    (f64::from(got) - expected[c]).abs() < 1e-5,
                    "pixel ({x},{y}) channel {c}: expected {}, got {got}",
                    expected[c]
                );
            }
        }
    }
}

#[test]
fn test_downsample_averages_full_tiles() {
    // 4x4 -> 2x2 with ratio 2; top-left tile holds values 0, 1, 4, 5.
    let frame = ramp_frame(4, 4);
    let reduced = downsample(&frame.as_view(), 2);

    assert_eq!(reduced.width(), 2);
    assert_eq!(reduced.height(), 2);
    let expected = (0.0 + 1.0 + 4.0 + 5.0) / 4.0;
    assert!((f64::from(reduced.data[[0, 0, 0]]) - expected).abs() < 1e-5);
}

#[test]
fn test_downsample_clipped_tiles_use_actual_count() {
    // 3x3 with ratio 2: the right and bottom tiles are clipped.
    let frame = ramp_frame(3, 3);
    let reduced = downsample(&frame.as_view(), 2);

    assert_eq!(reduced.width(), 2);
    assert_eq!(reduced.height(), 2);

    // Bottom-right tile is the single pixel (2, 2) with value 8; dividing
    // by the nominal tile area would give 2 instead.
    assert!((f64::from(reduced.data[[1, 1, 0]]) - 8.0).abs() < 1e-5);

    // Right-edge tile of the first row: pixels (2,0) and (2,1), values 2, 5.
    assert!((f64::from(reduced.data[[0, 1, 0]]) - 3.5).abs() < 1e-5);
}

#[test]
fn test_downsample_uniform_stays_uniform() {
    let frame = uniform_frame(7, 5, [0.3, 0.6, 0.9]);
    let reduced = downsample(&frame.as_view(), 3);

    for y in 0..reduced.height() {
        for x in 0..reduced.width() {
            for (c, expected) in [0.3f32, 0.6, 0.9].iter().enumerate() {
                assert!((reduced.data[[y, x, c]] - expected).abs() < 1e-5);
            }
        }
    }
}

#[test]
fn test_downsample_single_pixel() {
    let frame = uniform_frame(1, 1, [2.0, 2.0, 2.0]);
    let reduced = downsample(&frame.as_view(), 4);

    assert_eq!(reduced.width(), 1);
    assert_eq!(reduced.height(), 1);
    assert!((reduced.data[[0, 0, 0]] - 2.0).abs() < 1e-5);
}
