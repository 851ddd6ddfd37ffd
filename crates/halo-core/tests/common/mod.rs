use halo_core::frame::{LinearFrame, ReducedBuffer};

/// Full-resolution frame with every pixel set to the same linear color.
pub fn uniform_frame(width: usize, height: usize, rgb: [f64; 3]) -> LinearFrame {
    let mut frame = LinearFrame::new(width, height);
    for y in 0..height {
        for x in 0..width {
            frame.set_pixel(x, y, rgb);
        }
    }
    frame
}

/// Reduced buffer with every pixel set to the same color.
pub fn uniform_reduced(width: usize, height: usize, rgb: [f32; 3]) -> ReducedBuffer {
    let mut buf = ReducedBuffer::zeros(width, height);
    for y in 0..height {
        for x in 0..width {
            for (c, v) in rgb.iter().enumerate() {
                buf.data[[y, x, c]] = *v;
            }
        }
    }
    buf
}
