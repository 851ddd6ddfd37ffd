use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbImage};

use crate::consts::DEFAULT_GAMMA;
use crate::error::Result;
use crate::frame::LinearFrame;

/// Load an image file as a linear-light frame.
///
/// Float formats (Radiance HDR, OpenEXR) decode to linear values and pass
/// through unchanged; integer formats are assumed display-encoded and are
/// linearized with the display gamma.
pub fn load_linear(path: &Path) -> Result<LinearFrame> {
    let img = image::open(path)?;

    let frame = match img {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            let rgb = img.to_rgb32f();
            let (w, h) = rgb.dimensions();
            let mut frame = LinearFrame::new(w as usize, h as usize);
            for (x, y, pixel) in rgb.enumerate_pixels() {
                frame.set_pixel(
                    x as usize,
                    y as usize,
                    [
                        f64::from(pixel[0]),
                        f64::from(pixel[1]),
                        f64::from(pixel[2]),
                    ],
                );
            }
            frame
        }
        _ => {
            let rgb = img.to_rgb8();
            let (w, h) = rgb.dimensions();
            let mut frame = LinearFrame::new(w as usize, h as usize);
            for (x, y, pixel) in rgb.enumerate_pixels() {
                let decode = |v: u8| (f64::from(v) / 255.0).powf(DEFAULT_GAMMA);
                frame.set_pixel(
                    x as usize,
                    y as usize,
                    [decode(pixel[0]), decode(pixel[1]), decode(pixel[2])],
                );
            }
            frame
        }
    };

    Ok(frame)
}

/// Save an encoded output image as 8-bit PNG.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
