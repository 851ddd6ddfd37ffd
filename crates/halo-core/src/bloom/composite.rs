use crate::frame::{FrameView, ReducedBuffer};
use crate::sink::OutputSink;

/// Upsample the blurred bloom buffer back to full resolution, merge it with
/// the original frame (or replace it, in highlight-only mode), apply
/// exposure and gamma encoding, and write every pixel to the sink.
pub fn composite(
    frame: &FrameView<'_>,
    blurred: &ReducedBuffer,
    ratio: usize,
    exposure: f64,
    gamma: f64,
    highlight_only: bool,
    output: &mut dyn OutputSink,
) {
    let inv_gamma = 1.0 / gamma;

    for y in 0..frame.height() {
        for x in 0..frame.width() {
            let mut rgb = interpolate_bloom(blurred, ratio, x, y);
            for (c, v) in rgb.iter_mut().enumerate() {
                if !highlight_only {
                    *v += frame.channel(x, y, c);
                }
                *v *= exposure;
                // Clamp below before the power: a negative linear value
                // would turn into NaN under a fractional exponent.
                *v = v.max(0.0).powf(inv_gamma).min(1.0);
            }
            output.set_pixel(x, y, rgb);
        }
    }
}

/// Bilinearly sample the reduced buffer at full-resolution pixel (x, y).
///
/// Sample indices are clamped to the buffer, so coordinates at the image
/// border never read out of bounds.
fn interpolate_bloom(blurred: &ReducedBuffer, ratio: usize, x: usize, y: usize) -> [f64; 3] {
    let rw = blurred.width();
    let rh = blurred.height();

    let sx = x as f64 / ratio as f64;
    let sy = y as f64 / ratio as f64;
    let x0 = (sx as usize).min(rw - 1);
    let x1 = (x0 + 1).min(rw - 1);
    let y0 = (sy as usize).min(rh - 1);
    let y1 = (y0 + 1).min(rh - 1);
    let tx = sx - sx.floor();
    let ty = sy - sy.floor();

    let mut out = [0.0f64; 3];
    for (c, v) in out.iter_mut().enumerate() {
        let top = f64::from(blurred.data[[y0, x0, c]]) * (1.0 - tx)
            + f64::from(blurred.data[[y0, x1, c]]) * tx;
        let bottom = f64::from(blurred.data[[y1, x0, c]]) * (1.0 - tx)
            + f64::from(blurred.data[[y1, x1, c]]) * tx;
        *v = top * (1.0 - ty) + bottom * ty;
    }
    out
}
