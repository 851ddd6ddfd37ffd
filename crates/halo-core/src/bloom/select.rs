use crate::consts::{COLOR_CHANNEL_COUNT, LUMA_B, LUMA_G, LUMA_R};
use crate::frame::ReducedBuffer;

/// Keep only bloom sources: pixels whose brightness is strictly above the
/// threshold pass through unchanged, all others become (0, 0, 0).
///
/// Brightness applies all three luma coefficients to the red channel, so the
/// cutoff effectively tests red * ~1.0 and green and blue never affect it.
/// Existing scenes are tuned against this behavior; keep it unless the host
/// product decides to change the thresholding.
pub fn select_bright_pixels(reduced: &ReducedBuffer, threshold: f64) -> ReducedBuffer {
    let mut selected = ReducedBuffer::zeros(reduced.width(), reduced.height());

    for y in 0..reduced.height() {
        for x in 0..reduced.width() {
            let red = reduced.data[[y, x, 0]];
            let brightness = red * LUMA_R + red * LUMA_G + red * LUMA_B;
            if f64::from(brightness) > threshold {
                for c in 0..COLOR_CHANNEL_COUNT {
                    selected.data[[y, x, c]] = reduced.data[[y, x, c]];
                }
            }
        }
    }

    selected
}
