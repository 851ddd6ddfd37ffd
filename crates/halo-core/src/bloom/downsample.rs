use crate::consts::COLOR_CHANNEL_COUNT;
use crate::frame::{FrameView, ReducedBuffer};

/// Reduced extent for a full-resolution extent: ceil(full / ratio).
pub fn reduced_dim(full: usize, ratio: usize) -> usize {
    (full + ratio - 1) / ratio
}

/// Box-average the frame into a reduced buffer, one `ratio x ratio` tile of
/// source pixels per reduced pixel.
///
/// Tiles clipped by the right/bottom frame edges average only the pixels
/// actually inside bounds, never the nominal tile area.
pub fn downsample(frame: &FrameView<'_>, ratio: usize) -> ReducedBuffer {
    let rw = reduced_dim(frame.width(), ratio);
    let rh = reduced_dim(frame.height(), ratio);
    let mut reduced = ReducedBuffer::zeros(rw, rh);

    for y in 0..rh {
        for x in 0..rw {
            let mut sum = [0.0f32; COLOR_CHANNEL_COUNT];
            let mut count = 0u32;
            for sy in (y * ratio)..((y + 1) * ratio).min(frame.height()) {
                for sx in (x * ratio)..((x + 1) * ratio).min(frame.width()) {
                    for (c, acc) in sum.iter_mut().enumerate() {
                        *acc += frame.channel(sx, sy, c) as f32;
                    }
                    count += 1;
                }
            }
            // count >= 1: every reduced pixel's tile starts inside the frame.
            for (c, acc) in sum.iter().enumerate() {
                reduced.data[[y, x, c]] = acc / count as f32;
            }
        }
    }

    reduced
}
