use parking_lot::Mutex;
use tracing::debug;

use crate::consts::DEFAULT_GAMMA;
use crate::error::Result;
use crate::filter::PostProcessFilter;
use crate::frame::FrameView;
use crate::sink::OutputSink;

use super::blur::{horizontal_blur, vertical_blur};
use super::composite::composite;
use super::downsample::downsample;
use super::kernel::GaussianKernel;
use super::select::select_bright_pixels;

/// Mutable parameter set consumed by the pipeline stages, together with the
/// kernel derived from the blur radius.
struct FilterConfig {
    down_sample_ratio: usize,
    blur_radius: usize,
    threshold: f64,
    highlight_only: bool,
    kernel: GaussianKernel,
}

impl FilterConfig {
    fn new(down_sample_ratio: usize, blur_radius: usize, threshold: f64) -> Self {
        Self {
            down_sample_ratio: down_sample_ratio.max(1),
            blur_radius,
            threshold,
            highlight_only: false,
            kernel: GaussianKernel::new(blur_radius),
        }
    }

    fn set_blur_radius(&mut self, blur_radius: usize) {
        self.blur_radius = blur_radius;
        self.kernel = GaussianKernel::new(blur_radius);
    }
}

/// HDR bloom post-processing filter.
///
/// Bright regions of the input frame are extracted at reduced resolution,
/// blurred with a separable Gaussian, and composited back over the frame
/// before gamma encoding.
///
/// Configuration setters and [`process_frame`](PostProcessFilter::process_frame)
/// are mutually exclusive on one instance: the config lock is held for the
/// whole frame, so a setter can never take effect partway through a frame
/// and the kernel cannot be swapped between the two blur passes.
pub struct BloomFilter {
    config: Mutex<FilterConfig>,
    gamma: f64,
}

impl BloomFilter {
    pub fn new(down_sample_ratio: usize, blur_radius: usize, threshold: f64) -> Self {
        Self::with_gamma(down_sample_ratio, blur_radius, threshold, DEFAULT_GAMMA)
    }

    /// Same filter with a host-supplied display gamma. The gamma is fixed
    /// for the filter's lifetime; it is not part of the mutable config.
    pub fn with_gamma(
        down_sample_ratio: usize,
        blur_radius: usize,
        threshold: f64,
        gamma: f64,
    ) -> Self {
        Self {
            config: Mutex::new(FilterConfig::new(down_sample_ratio, blur_radius, threshold)),
            gamma,
        }
    }

    pub fn down_sample_ratio(&self) -> usize {
        self.config.lock().down_sample_ratio
    }

    /// Values below 1 clamp to 1. The blur radius is rescaled by the ratio
    /// of old to new (rounded to nearest) so the blur extent stays visually
    /// constant in screen space.
    pub fn set_down_sample_ratio(&self, down_sample_ratio: usize) {
        let mut config = self.config.lock();
        let down_sample_ratio = down_sample_ratio.max(1);
        let rescaled = (config.blur_radius as f64 * config.down_sample_ratio as f64
            / down_sample_ratio as f64)
            .round() as usize;
        config.set_blur_radius(rescaled);
        config.down_sample_ratio = down_sample_ratio;
    }

    pub fn blur_radius(&self) -> usize {
        self.config.lock().blur_radius
    }

    /// Regenerates the Gaussian kernel.
    pub fn set_blur_radius(&self, blur_radius: usize) {
        self.config.lock().set_blur_radius(blur_radius);
    }

    pub fn threshold(&self) -> f64 {
        self.config.lock().threshold
    }

    pub fn set_threshold(&self, threshold: f64) {
        self.config.lock().threshold = threshold;
    }

    pub fn highlight_only(&self) -> bool {
        self.config.lock().highlight_only
    }

    pub fn set_highlight_only(&self, highlight_only: bool) {
        self.config.lock().highlight_only = highlight_only;
    }
}

impl PostProcessFilter for BloomFilter {
    fn name(&self) -> &'static str {
        "Bloom"
    }

    fn id(&self) -> &'static str {
        "BLOOM"
    }

    fn process_frame(
        &self,
        width: usize,
        height: usize,
        input: &[f64],
        output: &mut dyn OutputSink,
        exposure: f64,
    ) -> Result<()> {
        // Held for the whole frame: one consistent config snapshot.
        let config = self.config.lock();
        let frame = FrameView::new(input, width, height)?;

        debug!(
            width,
            height,
            ratio = config.down_sample_ratio,
            radius = config.blur_radius,
            threshold = config.threshold,
            "Applying bloom"
        );

        let reduced = downsample(&frame, config.down_sample_ratio);
        let selected = select_bright_pixels(&reduced, config.threshold);
        let blurred = horizontal_blur(&selected, &config.kernel);
        let blurred = vertical_blur(&blurred, &config.kernel);

        composite(
            &frame,
            &blurred,
            config.down_sample_ratio,
            exposure,
            self.gamma,
            config.highlight_only,
            output,
        );

        Ok(())
    }
}
