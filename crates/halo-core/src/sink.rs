use image::{Rgb, RgbImage};

/// Destination for encoded output pixels.
///
/// The compositor hands every coordinate in `[0,width) x [0,height)` exactly
/// one encoded color triple (gamma applied, clamped to [0,1]). Each sink
/// converts the triple to its own storage representation; no write ordering
/// is guaranteed.
pub trait OutputSink {
    fn set_pixel(&mut self, x: usize, y: usize, rgb: [f64; 3]);
}

/// Sink quantizing encoded pixels to 8-bit RGB in an [`image::RgbImage`].
pub struct ImageSink {
    image: RgbImage,
}

impl ImageSink {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            image: RgbImage::new(width as u32, height as u32),
        }
    }

    /// Release the finished image.
    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

impl OutputSink for ImageSink {
    fn set_pixel(&mut self, x: usize, y: usize, rgb: [f64; 3]) {
        let r = (rgb[0].clamp(0.0, 1.0) * 255.0) as u8;
        let g = (rgb[1].clamp(0.0, 1.0) * 255.0) as u8;
        let b = (rgb[2].clamp(0.0, 1.0) * 255.0) as u8;
        self.image.put_pixel(x as u32, y as u32, Rgb([r, g, b]));
    }
}

/// Sink storing the encoded triples as-is, for hosts that do their own
/// quantization and for tests that assert on exact float output.
pub struct CaptureSink {
    width: usize,
    pixels: Vec<[f64; 3]>,
}

impl CaptureSink {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            pixels: vec![[0.0; 3]; width * height],
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> [f64; 3] {
        self.pixels[y * self.width + x]
    }

    pub fn pixels(&self) -> &[[f64; 3]] {
        &self.pixels
    }
}

impl OutputSink for CaptureSink {
    fn set_pixel(&mut self, x: usize, y: usize, rgb: [f64; 3]) {
        self.pixels[y * self.width + x] = rgb;
    }
}
