use ndarray::Array3;

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{HaloError, Result};

/// Borrowed, read-only view over a full-resolution linear-light frame.
///
/// Pixel data is row-major, RGB interleaved, one f64 per channel, directly
/// proportional to physical light intensity (no gamma encoding). The buffer
/// is owned by the host renderer and only lives for one `process_frame` call.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    data: &'a [f64],
    width: usize,
    height: usize,
}

impl<'a> FrameView<'a> {
    /// Wrap a raw interleaved buffer, validating its length.
    pub fn new(data: &'a [f64], width: usize, height: usize) -> Result<Self> {
        let expected = width * height * COLOR_CHANNEL_COUNT;
        if data.len() != expected {
            return Err(HaloError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Single channel value at (x, y); `c` is 0, 1 or 2.
    #[inline]
    pub fn channel(&self, x: usize, y: usize, c: usize) -> f64 {
        self.data[(y * self.width + x) * COLOR_CHANNEL_COUNT + c]
    }
}

/// An owned linear-light RGB frame, same layout as [`FrameView`].
///
/// Used by hosts that build frames themselves (the CLI driver, tests).
#[derive(Clone, Debug)]
pub struct LinearFrame {
    data: Vec<f64>,
    width: usize,
    height: usize,
}

impl LinearFrame {
    /// All-black frame of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0.0; width * height * COLOR_CHANNEL_COUNT],
            width,
            height,
        }
    }

    /// Take ownership of an existing interleaved buffer, validating its length.
    pub fn from_raw(data: Vec<f64>, width: usize, height: usize) -> Result<Self> {
        let expected = width * height * COLOR_CHANNEL_COUNT;
        if data.len() != expected {
            return Err(HaloError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_view(&self) -> FrameView<'_> {
        FrameView {
            data: &self.data,
            width: self.width,
            height: self.height,
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [f64; 3]) {
        let base = (y * self.width + x) * COLOR_CHANNEL_COUNT;
        self.data[base..base + COLOR_CHANNEL_COUNT].copy_from_slice(&rgb);
    }

    pub fn pixel(&self, x: usize, y: usize) -> [f64; 3] {
        let base = (y * self.width + x) * COLOR_CHANNEL_COUNT;
        [self.data[base], self.data[base + 1], self.data[base + 2]]
    }
}

/// Low-resolution working buffer used between bloom pipeline stages.
///
/// Shape is (height, width, channel); values are linear light, f32. Each
/// stage consumes its input buffer and produces a fresh one; nothing is
/// retained across frames.
#[derive(Clone, Debug)]
pub struct ReducedBuffer {
    /// Pixel data, indexed as `data[[y, x, c]]`.
    pub data: Array3<f32>,
}

impl ReducedBuffer {
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            data: Array3::zeros((height, width, COLOR_CHANNEL_COUNT)),
        }
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_view_rejects_wrong_length() {
        let data = vec![0.0; 11];
        assert!(FrameView::new(&data, 2, 2).is_err());
        let data = vec![0.0; 12];
        assert!(FrameView::new(&data, 2, 2).is_ok());
    }

    #[test]
    fn linear_frame_round_trips_pixels() {
        let mut frame = LinearFrame::new(3, 2);
        frame.set_pixel(2, 1, [0.5, 1.5, 2.5]);
        assert_eq!(frame.pixel(2, 1), [0.5, 1.5, 2.5]);
        assert_eq!(frame.as_view().channel(2, 1, 1), 1.5);
    }
}
